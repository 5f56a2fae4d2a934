//! config command - Show the effective configuration

use anyhow::Result;

use crate::cli::Context;
use crate::core::config::Config;
use crate::ui::output;

/// Print effective configuration values and where they came from.
pub fn show(ctx: &Context) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&ctx.config.user)?);
        return Ok(());
    }

    output::print(render(&ctx.config), ctx.verbosity());
    Ok(())
}

fn render(config: &Config) -> String {
    let source = match config.loaded_from() {
        Some(path) => format!("# Loaded from {}", path.display()),
        None => "# No config file found, using defaults".to_string(),
    };

    format!(
        "{}\noutput = {}\nmerge.show_stages = {}",
        source,
        config.output(),
        config.show_stages()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_defaults() {
        assert_eq!(
            render(&Config::default()),
            "# No config file found, using defaults\noutput = pretty\nmerge.show_stages = false"
        );
    }
}
