//! Sample config generation.
//!
//! Renders the command's options and their current values as a TOML file in
//! the format the loader reads. Options still at their declared default are
//! commented out, so the sample documents every setting but only pins the
//! ones that differ.

use std::collections::BTreeSet;
use std::path::Path;

use toml::Value;

use crate::types::{OptionSpec, Values};

/// Everything needed to render a sample config.
pub struct SampleInput<'a> {
    /// Command name shown in the header comment.
    pub command: &'a str,
    /// Default config file location shown in the header comment.
    pub config_path: Option<&'a Path>,
    /// Section name; must be the slug the loader looks up.
    pub section: &'a str,
    pub options: &'a [OptionSpec],
    /// Option names never written, e.g. the config-file option itself.
    pub excluded: &'a BTreeSet<String>,
    /// Current value of each option.
    pub values: &'a Values,
}

/// Render the sample config text.
///
/// Options are listed by name. Eager, excluded, and unset options are left
/// out. Each entry is preceded by the option's help text as a comment, and
/// commented out itself when its value equals the declared default.
pub fn render_sample(input: &SampleInput<'_>) -> String {
    let location = match input.config_path {
        Some(path) => path.display().to_string(),
        None => "<no default location>".to_string(),
    };

    let mut lines = vec![
        format!(
            "# Sample {} configuration file, by default located at {location}.",
            input.command
        ),
        "# Configuration options already set to the default value are commented-out.".to_string(),
        String::new(),
        format!("[{}]", input.section),
        String::new(),
    ];

    let mut options: Vec<&OptionSpec> = input
        .options
        .iter()
        .filter(|o| !o.is_eager() && !input.excluded.contains(o.name()))
        .collect();
    options.sort_by(|a, b| a.name().cmp(b.name()));

    for option in options {
        let Some(value) = input.values.get(option.name()).and_then(Option::as_ref) else {
            continue;
        };
        if is_empty(value) {
            continue;
        }

        if let Some(help) = option.help_text() {
            lines.extend(help.lines().map(|line| format!("# {line}").trim_end().to_string()));
        }
        let prefix = if option.default() == Some(value) {
            "# "
        } else {
            ""
        };
        lines.push(format!("{prefix}{}", format_entry(option.name(), value)));
    }

    lines.join("\n").trim().to_string()
}

/// Format `name = value` on one line, followed by a newline.
///
/// Tables, including tables nested in arrays, are written inline so the
/// whole entry stays on the line that may be commented out.
fn format_entry(name: &str, value: &Value) -> String {
    format!("{} = {value}\n", format_key(name))
}

/// A bare key when TOML allows one, a quoted key otherwise.
fn format_key(name: &str) -> String {
    let bare = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        name.to_string()
    } else {
        Value::String(name.to_string()).to_string()
    }
}

fn is_empty(value: &Value) -> bool {
    matches!(value, Value::Array(items) if items.is_empty())
}
