//! User-facing console output.
//!
//! Diagnostics go through `tracing`; these helpers are for the messages a
//! user is meant to read.

use anyhow::Result;
use console::style;
use serde::Serialize;

/// Output format for commands that report data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

pub fn title(text: &str) {
    println!();
    println!("{}", style(text).bold().cyan());
    println!();
}

pub fn info(text: &str) {
    println!("{} {}", style("ℹ").blue(), text);
}

pub fn warn(text: &str) {
    eprintln!("{} {}", style("⚠").yellow(), text);
}

pub fn error(text: &str) {
    eprintln!("{} {}", style("✗").red(), text);
}

pub fn success(text: &str) {
    println!("{} {}", style("✓").green(), text);
}

/// A `+ item` line for created or installed entries.
pub fn added(text: &str) {
    println!("  {} {}", style("+").green(), text);
}

/// A dimmed "Next steps" block.
pub fn next_steps(steps: &[&str]) {
    println!();
    println!("{}", style("Next steps:").bold());
    for (i, step) in steps.iter().enumerate() {
        println!("{}", style(format!("  {}. {}", i + 1, step)).dim());
    }
    println!();
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", render_json(value)?);
    Ok(())
}

fn render_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// `count` followed by `noun`, pluralized with a trailing `s`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Entry<'a> {
        name: &'a str,
        installed: usize,
    }

    #[test]
    fn render_json_pretty_prints_serializable_values() {
        let rendered = render_json(&Entry {
            name: "demo",
            installed: 2,
        })
        .expect("serialization should succeed");
        let value: serde_json::Value =
            serde_json::from_str(&rendered).expect("output should be valid JSON");
        assert_eq!(value["name"], "demo");
        assert_eq!(value["installed"], 2);
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn plural_adds_suffix() {
        assert_eq!(plural(0, "skill"), "0 skills");
        assert_eq!(plural(1, "skill"), "1 skill");
        assert_eq!(plural(3, "skill"), "3 skills");
    }
}
