//! Config file location and loading.
//!
//! A command reads at most one config file per invocation. The file is TOML
//! with a single top-level table named after the command's slug:
//!
//! ```toml
//! [my-tool]
//! apple = 5
//! ```
//!
//! # Missing vs. malformed
//!
//! A file that does not exist is normal and yields an empty mapping. A file
//! that exists but fails to parse, or parses but lacks the command's section,
//! is an error: nothing from it is applied.
//!
//! # Section naming
//!
//! [`command_slug`] derives the section name from the invocation name. The
//! sample-config renderer labels its output with the same slug, so a rendered
//! file loads back without edits.

use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::debug;

use crate::error::FixinsError;

/// Derive the stable section name for a command.
///
/// Takes the file stem of `name` (so both `/usr/bin/tool.py` and `tool.py`
/// give `tool`), lowercases it, replaces dots with hyphens and trims hyphens
/// from both ends: `"My.Tool.py"` → `"my-tool"`.
pub fn command_slug(name: &str) -> String {
    let stem = Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());
    stem.to_lowercase()
        .replace('.', "-")
        .trim_matches('-')
        .to_string()
}

/// The per-command default config file: `{platform config dir}/{slug}/{slug}.toml`.
///
/// Returns `None` if no home directory can be determined.
pub fn default_config_path(slug: &str) -> Option<PathBuf> {
    let proj = directories::ProjectDirs::from("", "", slug)?;
    Some(proj.config_dir().join(format!("{slug}.toml")))
}

/// Read the `[section]` table of the TOML file at `path`.
///
/// A missing file yields an empty table. The file is read in full before
/// parsing starts.
pub fn load_settings(path: &Path, section: &str) -> Result<Table, FixinsError> {
    match read_config(path)? {
        Some(content) => parse_settings(&content, path, section),
        None => Ok(Table::new()),
    }
}

/// Read the whole config file, `None` if it does not exist.
pub fn read_config(path: &Path) -> Result<Option<String>, FixinsError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "read config file");
            Ok(Some(content))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file");
            Ok(None)
        }
        Err(e) => Err(FixinsError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Pure function: extract the `[section]` table from TOML `content`.
///
/// `path` is only used to label errors.
pub fn parse_settings(content: &str, path: &Path, section: &str) -> Result<Table, FixinsError> {
    let mut document: Table = toml::from_str(content).map_err(|e| FixinsError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    match document.remove(section) {
        Some(Value::Table(settings)) => Ok(settings),
        Some(_) => Err(FixinsError::SectionNotTable {
            path: path.to_path_buf(),
            section: section.to_string(),
        }),
        None => Err(FixinsError::ConfigSectionMissing {
            path: path.to_path_buf(),
            section: section.to_string(),
        }),
    }
}
