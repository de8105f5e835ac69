//! Option descriptors and the value containers that flow between components.

use std::collections::BTreeMap;

use toml::Value;

/// Option name → value, as produced by parsing and consumed by the command body.
///
/// `None` marks an option the parser knows about but that has no value at all:
/// no default was declared and nothing was supplied.
pub type Values = BTreeMap<String, Option<Value>>;

/// The element type of a single- or multi-valued option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    String,
    Integer,
    Float,
    Path,
    /// A path that must name an existing, readable file. Canonicalized on parse.
    ExistingFile,
}

/// How many values an option takes, and of what type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Boolean switch; `true` when present.
    Flag,
    /// Repeatable switch counting its occurrences (`-vvv`).
    Count,
    Single(Scalar),
    Multi(Scalar),
}

/// Declaration of one command-line option.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    name: String,
    switches: Vec<String>,
    arity: Arity,
    default: Option<Value>,
    eager: bool,
    help: Option<String>,
}

impl OptionSpec {
    /// An option named `name` recognized by `switches` (e.g. `["-a", "--apple"]`).
    pub fn new<S: AsRef<str>>(name: &str, switches: &[S], arity: Arity) -> Self {
        let default = match arity {
            Arity::Flag => Some(Value::Boolean(false)),
            Arity::Count => Some(Value::Integer(0)),
            Arity::Single(_) | Arity::Multi(_) => None,
        };
        Self {
            name: name.to_string(),
            switches: switches.iter().map(|s| s.as_ref().to_string()).collect(),
            arity,
            default,
            eager: false,
            help: None,
        }
    }

    pub fn flag<S: AsRef<str>>(name: &str, switches: &[S]) -> Self {
        Self::new(name, switches, Arity::Flag)
    }

    pub fn count<S: AsRef<str>>(name: &str, switches: &[S]) -> Self {
        Self::new(name, switches, Arity::Count)
    }

    pub fn string<S: AsRef<str>>(name: &str, switches: &[S]) -> Self {
        Self::new(name, switches, Arity::Single(Scalar::String))
    }

    pub fn integer<S: AsRef<str>>(name: &str, switches: &[S]) -> Self {
        Self::new(name, switches, Arity::Single(Scalar::Integer))
    }

    pub fn float<S: AsRef<str>>(name: &str, switches: &[S]) -> Self {
        Self::new(name, switches, Arity::Single(Scalar::Float))
    }

    pub fn path<S: AsRef<str>>(name: &str, switches: &[S]) -> Self {
        Self::new(name, switches, Arity::Single(Scalar::Path))
    }

    pub fn multi<S: AsRef<str>>(name: &str, switches: &[S], scalar: Scalar) -> Self {
        Self::new(name, switches, Arity::Multi(scalar))
    }

    /// Set the declared default.
    pub fn default_value<V: Into<Value>>(mut self, value: V) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Remove any declared default, including the implicit one of flags and counters.
    pub fn no_default(mut self) -> Self {
        self.default = None;
        self
    }

    pub fn help(mut self, text: &str) -> Self {
        self.help = Some(text.to_string());
        self
    }

    /// Mark the option eager: it is acted on before normal options and never
    /// takes a value from a configuration file.
    pub fn eager(mut self) -> Self {
        self.eager = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn switches(&self) -> &[String] {
        &self.switches
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_eager(&self) -> bool {
        self.eager
    }

    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Single-dash, single-letter switches, e.g. `'a'` for `-a`.
    pub fn short_switches(&self) -> impl Iterator<Item = char> + '_ {
        self.switches.iter().filter_map(|s| short_letter(s))
    }

    /// Double-dash switches without their dashes, e.g. `"apple"` for `--apple`.
    pub fn long_switches(&self) -> impl Iterator<Item = &str> + '_ {
        self.switches
            .iter()
            .filter_map(|s| s.strip_prefix("--"))
            .filter(|s| !s.is_empty())
    }
}

/// The letter of a two-character single-dash switch (`-a` → `'a'`).
pub fn short_letter(switch: &str) -> Option<char> {
    let mut chars = switch.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('-'), Some(c), None) if c != '-' => Some(c),
        _ => None,
    }
}
