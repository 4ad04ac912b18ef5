//! Handlers for `createx config` subcommands.
//!
//! Each handler returns the text to print so the dispatch in `main` owns
//! stdout.

use std::path::PathBuf;

use createx_core::config::LOCAL_CONFIG_FILE;
use createx_core::{Error, GuideConfig, Result};

use crate::cli::ConfigAction;

/// Run a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<String> {
    match action {
        ConfigAction::Path => Ok(cmd_config_path(config_path)),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Show => GuideConfig::load(config_path)?.to_toml(),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
    }
}

/// Which file `load` would read, or a note that defaults apply.
pub fn cmd_config_path(config_path: Option<&str>) -> String {
    if let Some(path) = config_path {
        return path.to_string();
    }
    match GuideConfig::discover() {
        Some(path) => path.display().to_string(),
        None => {
            let fallback = GuideConfig::default_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| LOCAL_CONFIG_FILE.to_string());
            format!("{fallback} (not found; using built-in defaults)")
        }
    }
}

/// One value from the effective configuration.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = GuideConfig::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Write the default configuration, refusing to clobber without `force`.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<String> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => GuideConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    std::fs::write(&path, GuideConfig::default().to_toml()?)
        .map_err(|e| Error::io_with_path(e, &path))?;

    Ok(format!("Config file created at {}", path.display()))
}

/// Follow a dotted key through nested tables.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Scalars print bare; arrays and tables print as TOML.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(items) => {
            let items: Vec<String> = items.iter().map(format_toml_value).collect();
            items.join(", ")
        }
        toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
