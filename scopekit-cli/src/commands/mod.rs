//! CLI command implementations

pub mod compare;
pub mod encode;
pub mod matching;
pub mod parse;

use anyhow::{Context, Result};
use scopekit_lib::ScopeConfig;

/// Environment variable holding the local scope list in wire form.
pub const SCOPES_ENV: &str = "SCOPEKIT_SCOPES";

/// Load the local scope configuration.
///
/// A config file wins over `--scopes`, which wins over `SCOPEKIT_SCOPES`.
/// With none of them set the participant is in the default scope.
pub fn load_config(config_path: Option<&str>, scopes: Option<&str>) -> Result<ScopeConfig> {
    if let Some(path) = config_path {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        let config = ScopeConfig::from_json(&json)
            .with_context(|| format!("failed to load config file {}", path))?;
        tracing::debug!(path, scopes = %config.scopes, "loaded scope config");
        return Ok(config);
    }

    let raw = match scopes {
        Some(raw) => Some(raw.to_string()),
        None => std::env::var(SCOPES_ENV).ok(),
    };

    match raw {
        Some(raw) => ScopeConfig::from_wire_string(&raw)
            .with_context(|| format!("invalid local scope list '{}'", raw)),
        None => Ok(ScopeConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_scopes_are_used() {
        let config = load_config(None, Some("Stage,FOH")).unwrap();
        assert_eq!(config.scopes.as_escaped_string(), "foh,stage");
    }

    #[test]
    fn config_file_takes_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "scopes": "backstage", "require_match": false }}"#).unwrap();

        let path = file.path().to_str().unwrap();
        let config = load_config(Some(path), Some("stage")).unwrap();
        assert_eq!(config.scopes.as_escaped_string(), "backstage");
        assert!(!config.require_match);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        assert!(load_config(Some("/nonexistent/scopekit.json"), None).is_err());
    }

    #[test]
    fn malformed_scopes_are_an_error() {
        assert!(load_config(None, Some("stage\\")).is_err());
    }
}
