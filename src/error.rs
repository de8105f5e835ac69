use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixinsError {
    #[error("Unable to parse configuration file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Configuration file '{path}' has no [{section}] section")]
    ConfigSectionMissing { path: PathBuf, section: String },

    #[error("Configuration file '{path}': '{section}' must be a table, e.g. [{section}]")]
    SectionNotTable { path: PathBuf, section: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unknown key '{key}' in {path} (line {line})")]
    UnknownKey {
        key: String,
        path: PathBuf,
        line: usize,
    },

    #[error(
        "Unknown keys in configuration file: {}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    UnknownKeys(Vec<FixinsError>),

    #[error("Option not found: {0}")]
    KeyNotFound(String),

    #[error("Option '{0}' has no value")]
    ValueNotSet(String),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Command name is required, call .name() on the builder")]
    NameRequired,

    #[error("Option '{0}' is declared more than once")]
    DuplicateOption(String),

    #[error("Option '{0}' has no switches")]
    MissingSwitch(String),

    #[error("Option '{option}' has invalid switch '{switch}', expected -x or --name")]
    InvalidSwitch { option: String, switch: String },

    #[error("Switch '{switch}' of option '{option}' is already in use")]
    DuplicateSwitch { option: String, switch: String },
}

impl FixinsError {
    /// Process exit code for a failed invocation.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_formats_correctly() {
        let err = FixinsError::UnknownKey {
            key: "typo_key".into(),
            path: "/home/user/.config/mytool/mytool.toml".into(),
            line: 42,
        };
        let msg = err.to_string();
        assert!(msg.contains("typo_key"));
        assert!(msg.contains("mytool.toml"));
        assert!(msg.contains("42"));
    }

    #[test]
    fn section_missing_names_section_and_path() {
        let err = FixinsError::ConfigSectionMissing {
            path: "/tmp/mytool.toml".into(),
            section: "mytool".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("[mytool]"));
        assert!(msg.contains("/tmp/mytool.toml"));
    }

    #[test]
    fn parse_error_carries_path_and_diagnostic() {
        let source = toml::from_str::<toml::Table>("BAD MOJO").unwrap_err();
        let diagnostic = source.message().to_string();
        let err = FixinsError::ConfigParse {
            path: "test.toml".into(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("'test.toml'"));
        assert!(msg.contains(&diagnostic));
    }

    #[test]
    fn unknown_keys_lists_each_key() {
        let err = FixinsError::UnknownKeys(vec![
            FixinsError::UnknownKey {
                key: "cherry".into(),
                path: "fruit.toml".into(),
                line: 3,
            },
            FixinsError::UnknownKey {
                key: "durian".into(),
                path: "fruit.toml".into(),
                line: 4,
            },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("'cherry'"));
        assert!(msg.contains("'durian'"));
    }

    #[test]
    fn name_required_formats() {
        let err = FixinsError::NameRequired;
        assert!(err.to_string().contains(".name()"));
    }

    #[test]
    fn switch_errors_name_option_and_switch() {
        let err = FixinsError::DuplicateSwitch {
            option: "vendor".into(),
            switch: "-V".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'-V'"));
        assert!(msg.contains("'vendor'"));

        let err = FixinsError::InvalidSwitch {
            option: "apple".into(),
            switch: "apple".into(),
        };
        assert!(err.to_string().contains("--name"));
    }

    #[test]
    fn every_error_exits_with_one() {
        assert_eq!(FixinsError::KeyNotFound("x".into()).exit_code(), 1);
        assert_eq!(FixinsError::NameRequired.exit_code(), 1);
    }
}
