//! Compare command - set algebra on two scope lists

use anyhow::{Context, Result};
use scopekit_lib::ScopeSet;

use crate::ui;

pub fn run(left: &str, right: &str, verbose: bool) -> Result<()> {
    let left = ScopeSet::from_wire_string(left).context("invalid left scope list")?;
    let right = ScopeSet::from_wire_string(right).context("invalid right scope list")?;

    ui::header("Scope Comparison");
    if verbose {
        ui::scopes("Left", &left);
        ui::scopes("Right", &right);
    }
    ui::key_value("Intersects", &left.intersects(&right).to_string());
    ui::key_value("Shared", &left.intersection_count(&right).to_string());
    ui::scopes("Intersection", &left.intersection(&right));
    ui::scopes("Left only", &left.difference(&right));
    ui::scopes("Right only", &right.difference(&left));

    if left == right {
        ui::success("Scope lists are equal");
    }

    Ok(())
}
