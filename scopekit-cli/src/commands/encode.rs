//! Encode and canonicalize commands

use anyhow::Result;
use scopekit_lib::{strings, ScopeSet};

use crate::ui;

pub fn run(tokens: &[String], verbose: bool) -> Result<()> {
    let scopes = ScopeSet::from_tokens(tokens);

    if scopes.len() < tokens.len() {
        tracing::info!(
            dropped = tokens.len() - scopes.len(),
            "duplicate or blank scopes collapsed"
        );
    }

    if verbose {
        ui::header("Encoded Scope List");
        for scope in &scopes {
            ui::key_value(scope, &strings::escape(scope));
        }
    }

    println!("{}", scopes);
    Ok(())
}

pub fn canonicalize(token: &str) {
    let canonical = strings::canonicalize(token);
    if canonical.is_empty() {
        ui::error("Scope is blank once canonicalized");
    } else {
        println!("{}", canonical);
    }
}
