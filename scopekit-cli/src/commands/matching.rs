//! Match command - decide whether a remote participant is in scope

use anyhow::{Context, Result};
use scopekit_lib::{ScopeConfig, ScopeSet};

use crate::ui;

pub fn run(config: &ScopeConfig, remote: &str, verbose: bool) -> Result<()> {
    let remote = ScopeSet::from_wire_string(remote).context("invalid remote scope list")?;

    if verbose {
        ui::header("Scope Match");
        ui::scopes("Local", &config.scopes);
        ui::scopes("Remote", &remote);
        ui::key_value("Require match", &config.require_match.to_string());
    }

    if config.accepts(&remote) {
        let shared = config.scopes.intersection(&remote);
        tracing::debug!(shared = %shared, "remote scopes accepted");
        ui::success(&format!("Remote is in scope ({} shared)", shared.len()));
    } else {
        ui::error("Remote shares no scope with the local configuration");
        ui::info(&format!("Local scopes: {}", config.scopes));
        anyhow::bail!("scope mismatch");
    }

    Ok(())
}
