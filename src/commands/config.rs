//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config set`: Set a configuration value
//! - `config get`: Print one value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::{API_URL_ENV, Config, VALID_KEYS};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path()?;

    let json_output = json!({
        "api_url": config.api_url,
        "request_timeout": config.request_timeout,
        "default_view": config.default_view.to_string(),
        "default_sort": config.default_sort.to_string(),
        "grid_columns": config.grid_columns,
        "config_file": path.to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    for key in VALID_KEYS {
        text_output.push_str(&format!("  {}: {}\n", key.cyan(), config.get(key)?));
    }
    if std::env::var(API_URL_ENV).is_ok_and(|v| !v.is_empty()) {
        text_output.push_str(&format!(
            "  {}\n",
            format!("(api_url from {API_URL_ENV})").dimmed()
        ));
    }
    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", path.display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!("Set {} = {}", key.cyan(), config.get(key)?);
    Ok(())
}

/// Print one configuration value, unadorned for scripting
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}
