//! Scope configuration for a discovery participant.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::ScopeSet;

/// Which scopes a participant belongs to and how remote scope lists are
/// matched against them.
///
/// Scopes are written in their wire form:
///
/// ```
/// use scopekit_lib::config::ScopeConfig;
///
/// let config = ScopeConfig::from_json(r#"{ "scopes": "Stage,FOH" }"#).unwrap();
/// assert_eq!(config.scopes.len(), 2);
/// assert!(config.require_match);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeConfig {
    /// Scopes this participant belongs to.
    #[serde(default = "default_scopes")]
    pub scopes: ScopeSet,

    /// Reject remote scope lists that share no scope with `scopes`.
    #[serde(default = "default_require_match")]
    pub require_match: bool,
}

fn default_scopes() -> ScopeSet {
    ScopeSet::default_scope()
}

fn default_require_match() -> bool {
    true
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            scopes: default_scopes(),
            require_match: default_require_match(),
        }
    }
}

impl ScopeConfig {
    /// Create a configuration for the given scopes.
    pub fn new(scopes: ScopeSet) -> Self {
        Self {
            scopes,
            require_match: default_require_match(),
        }
    }

    /// Load a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a wire-form scope list.
    pub fn from_wire_string(raw: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(ScopeSet::from_wire_string(raw)?))
    }

    /// Set whether remote scopes must intersect the local ones.
    pub fn with_require_match(mut self, require_match: bool) -> Self {
        self.require_match = require_match;
        self
    }

    /// Decide whether a participant advertising `remote` may interoperate
    /// with this one.
    pub fn accepts(&self, remote: &ScopeSet) -> bool {
        !self.require_match || self.scopes.intersects(remote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_uses_defaults() {
        let config = ScopeConfig::from_json("{}").unwrap();
        assert_eq!(config, ScopeConfig::default());
        assert!(config.scopes.contains("DEFAULT"));
    }

    #[test]
    fn invalid_scope_list_is_rejected() {
        let err = ScopeConfig::from_json(r#"{ "scopes": "a\\q" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(ScopeConfig::from_wire_string("a\\").is_err());
    }

    #[test]
    fn accepts_requires_intersection() {
        let config = ScopeConfig::from_wire_string("stage,foh").unwrap();
        assert!(config.accepts(&ScopeSet::from_tokens(["FOH"])));
        assert!(!config.accepts(&ScopeSet::from_tokens(["backstage"])));
        assert!(!config.accepts(&ScopeSet::new()));
    }

    #[test]
    fn accepts_anything_when_matching_disabled() {
        let config = ScopeConfig::default().with_require_match(false);
        assert!(config.accepts(&ScopeSet::from_tokens(["backstage"])));
    }

    #[test]
    fn serializes_scopes_in_wire_form() {
        let config = ScopeConfig::new(ScopeSet::from_tokens(["a,b"]));
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"scopes":"a\\,b","require_match":true}"#);
    }
}
