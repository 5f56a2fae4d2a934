//! core
//!
//! Core domain types, schemas, and merge logic for pushmeta.
//!
//! # Modules
//!
//! - [`types`] - Object metadata types and the accessor trait
//! - [`metadata`] - `PushSecretMetadata` schema and merge stages
//! - [`config`] - CLI configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid policies after parsing
//! - Schemas are strict and self-describing
//! - Everything here is a pure function of its inputs; nothing prints

pub mod config;
pub mod metadata;
pub mod types;
