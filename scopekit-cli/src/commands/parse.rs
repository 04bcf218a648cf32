//! Parse command - decode a scope list

use anyhow::{Context, Result};
use scopekit_lib::ScopeSet;

use crate::ui;

pub fn run(list: &str, verbose: bool) -> Result<()> {
    let scopes = ScopeSet::from_wire_string(list)
        .with_context(|| format!("invalid scope list '{}'", list))?;

    ui::header("Scope List");
    ui::key_value("Members", &scopes.len().to_string());
    for scope in &scopes {
        println!("    {}", scope);
    }

    if verbose {
        ui::scopes("Canonical", &scopes);
    }

    Ok(())
}
