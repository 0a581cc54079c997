//! Terminal output formatting for the cctv-setup CLI.
//!
//! Provides consistent, colored output using the [`console`] crate.

use console::style;

/// Print a bold cyan header framed by `=` separators.
pub fn print_banner(text: &str) {
    let rule = "=".repeat(38);
    println!("{}", style(&rule).dim());
    println!("{}", style(text).bold().cyan());
    println!("{}", style(&rule).dim());
}

/// Print a closing `=` separator.
pub fn print_rule() {
    println!("{}", style("=".repeat(38)).dim());
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("{}: {}", style(key).dim(), value);
}

/// Print a numbered list, starting at 1.
pub fn print_numbered(items: &[&str]) {
    for (i, item) in items.iter().enumerate() {
        println!("{}. {}", i + 1, item);
    }
}
