//! Configuration file management for ais-decode.
//!
//! Reads/writes `~/.ais-decode/config.yaml` with the decoder filter
//! (message types, invalid-message handling) and output preferences.

use std::path::{Path, PathBuf};

use crate::types::{AisError, MessageKind};

/// Full configuration structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub decoder: DecoderConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecoderConfig {
    /// Message types to deliver. Empty means all supported types.
    pub types: Vec<u8>,
    /// Discard messages that carry rule violations.
    pub drop_invalid: bool,
}

impl DecoderConfig {
    /// Message kinds named by `types`, skipping unsupported numbers.
    pub fn kinds(&self) -> Vec<MessageKind> {
        self.types
            .iter()
            .filter_map(|t| MessageKind::from_type(*t))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_violations: bool,
}

/// Get the config directory path (`~/.ais-decode/`).
pub fn config_dir() -> PathBuf {
    dirs_home().join(".ais-decode")
}

/// Get the config file path.
pub fn config_file() -> PathBuf {
    config_dir().join("config.yaml")
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Load config from `~/.ais-decode/config.yaml`.
///
/// Returns default config if file doesn't exist.
pub fn load_config() -> Config {
    let path = config_file();
    if !path.exists() {
        return Config::default();
    }

    match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            log::debug!("ignoring unreadable config {}: {e}", path.display());
            Config::default()
        }
    }
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<Config, AisError> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_config(&text))
}

/// Save config to `~/.ais-decode/config.yaml`.
pub fn save_config(config: &Config, overwrite: bool) -> Result<PathBuf, AisError> {
    let path = config_file();
    save_config_to(config, &path, overwrite)?;
    Ok(path)
}

/// Write config to `path`, creating parent directories. Fails with
/// `AisError::Config` if the file exists and `overwrite` is false.
pub fn save_config_to(config: &Config, path: &Path, overwrite: bool) -> Result<(), AisError> {
    if path.exists() && !overwrite {
        return Err(AisError::Config(format!(
            "{} already exists",
            path.display()
        )));
    }
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, serialize_config(config))?;
    Ok(())
}

/// Parse simple YAML-like config text. Unknown keys are ignored.
pub fn parse_config(text: &str) -> Config {
    let mut config = Config::default();
    let mut current_section: Option<String> = None;

    for line in text.lines() {
        let stripped = line.trim();
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }

        let is_indented = line.starts_with("  ") || line.starts_with('\t');

        let Some((key, val)) = stripped.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let val = val.trim();

        if !is_indented {
            current_section = val.is_empty().then(|| key.to_string());
            continue;
        }

        match (current_section.as_deref(), key) {
            (Some("decoder"), "types") => config.decoder.types = parse_type_list(val),
            (Some("decoder"), "drop_invalid") => {
                if let Some(v) = parse_bool_value(val) {
                    config.decoder.drop_invalid = v;
                }
            }
            (Some("output"), "format") => match parse_string_value(val).as_deref() {
                Some("json") => config.output.format = OutputFormat::Json,
                Some("text") => config.output.format = OutputFormat::Text,
                _ => {}
            },
            (Some("output"), "show_violations") => {
                if let Some(v) = parse_bool_value(val) {
                    config.output.show_violations = v;
                }
            }
            _ => {}
        }
    }

    config
}

fn parse_string_value(val: &str) -> Option<String> {
    if val == "null" || val == "~" || val.is_empty() {
        return None;
    }
    // Strip quotes
    if val.len() >= 2
        && ((val.starts_with('"') && val.ends_with('"'))
            || (val.starts_with('\'') && val.ends_with('\'')))
    {
        return Some(val[1..val.len() - 1].to_string());
    }
    Some(val.to_string())
}

fn parse_bool_value(val: &str) -> Option<bool> {
    match val {
        "true" | "yes" | "on" => Some(true),
        "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Comma-separated message types, optionally in `[...]`.
pub fn parse_type_list(val: &str) -> Vec<u8> {
    let Some(val) = parse_string_value(val) else {
        return Vec::new();
    };
    val.trim_matches(|c| c == '[' || c == ']')
        .split(',')
        .filter_map(|t| t.trim().parse().ok())
        .collect()
}

/// Serialize config to YAML-like text.
fn serialize_config(config: &Config) -> String {
    let mut lines = vec!["# ais-decode configuration".to_string(), String::new()];

    lines.push("decoder:".into());
    let types = config
        .decoder
        .types
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if types.is_empty() {
        lines.push("  types: null".into());
    } else {
        lines.push(format!("  types: [{types}]"));
    }
    lines.push(format!("  drop_invalid: {}", config.decoder.drop_invalid));
    lines.push(String::new());

    lines.push("output:".into());
    lines.push(format!("  format: \"{}\"", config.output.format.as_str()));
    lines.push(format!(
        "  show_violations: {}",
        config.output.show_violations
    ));

    lines.join("\n") + "\n"
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.decoder.types.is_empty());
        assert!(!config.decoder.drop_invalid);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.show_violations);
    }

    #[test]
    fn test_parse_config() {
        let text = r#"
# station defaults
decoder:
  types: [1, 5, 18]
  drop_invalid: true

output:
  format: "json"
  show_violations: yes
"#;
        let config = parse_config(text);
        assert_eq!(config.decoder.types, vec![1, 5, 18]);
        assert!(config.decoder.drop_invalid);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_violations);
    }

    #[test]
    fn test_parse_config_null_and_unknown() {
        let text = r#"
decoder:
  types: ~
  drop_invalid: maybe
  colour: blue

output:
  format: xml
"#;
        let config = parse_config(text);
        assert!(config.decoder.types.is_empty());
        assert!(!config.decoder.drop_invalid);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_type_list_kinds() {
        let decoder = DecoderConfig {
            types: parse_type_list("1, 6, 24"),
            drop_invalid: false,
        };
        assert_eq!(decoder.types, vec![1, 6, 24]);
        assert_eq!(
            decoder.kinds(),
            vec![MessageKind::ScheduledPosition, MessageKind::StaticData]
        );
    }

    #[test]
    fn test_roundtrip() {
        let config = Config {
            decoder: DecoderConfig {
                types: vec![5, 24],
                drop_invalid: true,
            },
            output: OutputConfig {
                format: OutputFormat::Json,
                show_violations: true,
            },
        };
        let text = serialize_config(&config);
        assert_eq!(parse_config(&text), config);

        let text = serialize_config(&Config::default());
        assert_eq!(parse_config(&text), Config::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = Config {
            decoder: DecoderConfig {
                types: vec![1, 2, 3],
                drop_invalid: false,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_violations: true,
            },
        };

        save_config_to(&config, &path, false).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);

        let err = save_config_to(&Config::default(), &path, false).unwrap_err();
        assert!(matches!(err, AisError::Config(_)));
        assert_eq!(load_config_from(&path).unwrap(), config);

        save_config_to(&Config::default(), &path, true).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, AisError::Io(_)));
    }
}
