//! Handler functions for config CLI commands.
//!
//! Implements `iconify-mcp config {path,get,set,init,export}` and the TOML
//! dotted-key helpers they share.

use std::path::PathBuf;

use iconify_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::IconifyConfig;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
///
/// Receives the raw `--config` path (not a loaded config) because some
/// commands (path, init) work before a config file exists.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Set { key, value } => cmd_config_set(config_path, &key, &value),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
        ConfigAction::Export { docker_env } => {
            let config = IconifyConfig::load(config_path)?;
            for line in export_lines(&config, docker_env)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = IconifyConfig::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `iconify-mcp config init` to create it)");
    }
    Ok(())
}

fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = IconifyConfig::load(config_path)?;
    println!("{}", lookup(&config, key)?);
    Ok(())
}

/// Look up a dotted key in the resolved configuration.
fn lookup(config: &IconifyConfig, key: &str) -> Result<String> {
    let value = toml::Value::try_from(config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let path = IconifyConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `iconify-mcp config init` first.",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    set_nested_value(&mut doc, key, parse_value(value))?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Set {key} = {value} in {}", path.display());
    Ok(())
}

fn cmd_config_init(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => IconifyConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = IconifyConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(())
}

/// `KEY=value` lines, or `--env KEY=value` for Docker.
fn export_lines(config: &IconifyConfig, docker_env: bool) -> Result<Vec<String>> {
    Ok(config
        .to_env_vars()?
        .into_iter()
        .map(|(key, value)| {
            if docker_env {
                format!("--env {key}={value}")
            } else {
                format!("{key}={value}")
            }
        })
        .collect())
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        return Err(Error::config("Empty key path"));
    };

    let mut current = root;
    for part in parents {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part.to_string())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?;
    table.insert(last.to_string(), value);
    Ok(())
}

/// Parse a string value into a TOML value, auto-detecting the type.
///
/// Priority: bool → integer → float → string.
fn parse_value(s: &str) -> toml::Value {
    if s == "true" {
        return toml::Value::Boolean(true);
    }
    if s == "false" {
        return toml::Value::Boolean(false);
    }
    if let Ok(i) = s.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(s.to_string())
}

/// Format a TOML value for display on stdout.
fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
