//! Scopekit library.
//!
//! Canonical scope sets for SLP-style service discovery. Two participants may
//! exchange registrations or answer each other's queries only when their
//! scope sets intersect.
//!
//! # Features
//!
//! - **Canonical storage**: scopes are compared case-insensitively with
//!   whitespace folded, so `"Stage  Left"` and `"stage left"` are one scope
//! - **Linear set algebra**: intersection, difference and union are a single
//!   merge over two sorted member lists
//! - **Wire encoding**: scope lists are escaped and comma separated, and
//!   decoding rejects malformed escapes
//!
//! # Example
//!
//! ```
//! use scopekit_lib::ScopeSet;
//!
//! let mut local = ScopeSet::from_tokens(["x", "y", "z"]);
//! let removed = local.difference_update(&"y,z,w".parse::<ScopeSet>().unwrap());
//!
//! assert_eq!(removed.as_escaped_string(), "y,z");
//! assert_eq!(local.as_escaped_string(), "x");
//! ```

pub mod config;
pub mod errors;
mod scope_set;
pub mod strings;

pub use config::ScopeConfig;
pub use errors::{ConfigError, ParseError};
pub use scope_set::{Iter, ScopeSet, DEFAULT_SCOPE};

/// Common result alias for scope decoding.
pub type Result<T> = std::result::Result<T, ParseError>;
