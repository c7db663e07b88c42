//! jsmask_options: jsmask.json parsing.
//!
//! Every field is optional. Accessors resolve the defaults, and the CLI
//! lets command-line flags override whatever the file says.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "jsmask.json";

/// The jsmask.json file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JsmaskConfig {
    pub uncomment: Option<UncommentOptions>,
    pub declarations: Option<DeclarationOptions>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
}

/// Options for comment stripping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UncommentOptions {
    pub collapse_blank_lines: Option<bool>,
}

/// Options for declaration correction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeclarationOptions {
    pub module_name: Option<String>,
}

impl JsmaskConfig {
    pub fn collapse_blank_lines(&self) -> bool {
        self.uncomment
            .as_ref()
            .and_then(|u| u.collapse_blank_lines)
            .unwrap_or(false)
    }

    pub fn module_name(&self) -> Option<&str> {
        self.declarations.as_ref().and_then(|d| d.module_name.as_deref())
    }

    pub fn pretty(&self) -> bool {
        self.pretty.unwrap_or(true)
    }
}

/// Errors raised while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a jsmask.json file from a string.
pub fn parse_config(content: &str) -> Result<JsmaskConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a jsmask.json file from a path.
pub fn parse_config_file(path: &Path) -> Result<JsmaskConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The default config file in `dir`, if there is one.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, JsmaskConfig::default());
        assert!(!config.collapse_blank_lines());
        assert_eq!(config.module_name(), None);
        assert!(config.pretty());
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            r#"{
                "uncomment": { "collapseBlankLines": true },
                "declarations": { "moduleName": "my-lib" },
                "pretty": false
            }"#,
        )
        .unwrap();
        assert!(config.collapse_blank_lines());
        assert_eq!(config.module_name(), Some("my-lib"));
        assert!(!config.pretty());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(parse_config(r#"{ "uncomment": { "collapse": true } }"#).is_err());
    }
}
