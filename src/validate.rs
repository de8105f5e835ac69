//! Strict-mode validation: detect keys in the command's section that name no
//! declared option.
//!
//! Off by default; unknown keys are then ignored. When on, each unknown key is
//! reported with the file path and a best-effort line number.

use std::path::Path;

use toml::Table;

use crate::error::FixinsError;
use crate::types::OptionSpec;

/// Check that every key of `settings` names a declared, non-eager option.
pub fn validate_unknown_keys(
    settings: &Table,
    options: &[OptionSpec],
    content: &str,
    path: &Path,
    section: &str,
) -> Result<(), FixinsError> {
    let errors: Vec<FixinsError> = settings
        .keys()
        .filter(|key| {
            !options
                .iter()
                .any(|o| !o.is_eager() && o.name() == key.as_str())
        })
        .map(|key| FixinsError::UnknownKey {
            key: key.clone(),
            path: path.to_path_buf(),
            line: find_key_line(content, section, key),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FixinsError::UnknownKeys(errors))
    }
}

/// Find the 1-indexed line of `key` inside `[section]` in TOML content.
///
/// Tracks `[section]` headers while scanning and only matches bare key
/// assignments inside the right one. Does not handle quoted keys or inline
/// tables. Returns 0 if the key cannot be located.
fn find_key_line(content: &str, section: &str, key: &str) -> usize {
    let mut in_section = false;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && !trimmed.starts_with("[[") {
            let header = trimmed.split('#').next().unwrap_or_default().trim_end();
            let header = header.trim_start_matches('[').trim_end_matches(']').trim();
            in_section = header == section;
            continue;
        }

        if !in_section {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix(key) {
            let rest = rest.trim_start();
            if rest.starts_with('=') {
                return i + 1;
            }
        }
    }

    0
}
