//! Terminal UI utilities

use colored::Colorize;
use scopekit_lib::ScopeSet;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a section header
pub fn header(text: &str) {
    println!("\n{}", text.bold().underline());
}

/// Print a key-value pair
pub fn key_value(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Print a scope set as a key-value pair, marking the empty set explicitly
pub fn scopes(key: &str, scopes: &ScopeSet) {
    if scopes.is_empty() {
        key_value(key, &"(none)".dimmed().to_string());
    } else {
        key_value(key, &scopes.as_escaped_string());
    }
}
