//! Core resolution: pick each option's effective value from the command line,
//! the config file, or the declared default.
//!
//! Operates on pre-parsed values and a pre-loaded settings table, with no I/O,
//! so the precedence rules are testable with synthetic inputs. For every
//! declared, non-eager option present in the parse result:
//!
//! 1. Start from the declared default.
//! 2. Take the config file value if the section has the option's name.
//! 3. Take the parsed value if the option was explicitly supplied.
//!
//! The parse result alone cannot answer step 3, because a parser fills in
//! defaults for options that were not supplied. [`ExplicitSupply`] is the seam
//! for that question: [`SwitchScan`] answers it from the raw arguments, and
//! the clap adapter answers it from clap's own value sources.

use toml::Table;
use tracing::{debug, trace};

use crate::switches::{ShortAlphabet, was_explicitly_supplied};
use crate::types::{OptionSpec, Values};

/// Reports whether an option's value came from the command line.
pub trait ExplicitSupply {
    fn was_supplied(&self, option: &OptionSpec) -> bool;
}

/// Explicit-supply detection by scanning the raw argument vector.
///
/// Matches clustered short switches heuristically, see [`was_explicitly_supplied`](crate::was_explicitly_supplied).
#[derive(Debug, Clone)]
pub struct SwitchScan<'a, A: AsRef<str>> {
    alphabet: &'a ShortAlphabet,
    args: &'a [A],
}

impl<'a, A: AsRef<str>> SwitchScan<'a, A> {
    pub fn new(alphabet: &'a ShortAlphabet, args: &'a [A]) -> Self {
        Self { alphabet, args }
    }
}

impl<A: AsRef<str>> ExplicitSupply for SwitchScan<'_, A> {
    fn was_supplied(&self, option: &OptionSpec) -> bool {
        let supplied = was_explicitly_supplied(option.switches(), self.alphabet, self.args);
        if supplied {
            trace!(option = option.name(), "switch found in arguments");
        }
        supplied
    }
}

/// Resolve every non-eager option in `parsed` to its effective value.
///
/// The result has exactly the keys of `parsed` that name declared, non-eager
/// options. Settings keys for options absent from `parsed` are not applied.
pub fn resolve<P: ExplicitSupply + ?Sized>(
    options: &[OptionSpec],
    parsed: &Values,
    settings: &Table,
    presence: &P,
) -> Values {
    let mut resolved = Values::new();

    for option in options.iter().filter(|o| !o.is_eager()) {
        let Some(parsed_value) = parsed.get(option.name()) else {
            continue;
        };

        let (value, source) = if presence.was_supplied(option) {
            (parsed_value.clone(), "command line")
        } else if let Some(setting) = settings.get(option.name()) {
            (Some(setting.clone()), "config file")
        } else {
            (option.default().cloned(), "default")
        };

        debug!(option = option.name(), source, "resolved option");
        resolved.insert(option.name().to_string(), value);
    }

    resolved
}

/// [`resolve`] with explicit supply detected by scanning `args`.
pub fn resolve_from_args<A: AsRef<str>>(
    options: &[OptionSpec],
    parsed: &Values,
    settings: &Table,
    alphabet: &ShortAlphabet,
    args: &[A],
) -> Values {
    resolve(options, parsed, settings, &SwitchScan::new(alphabet, args))
}
