//! Config-file support for command-line programs. Declare your options,
//! build a [`Fixins`], and every option can also be set from a TOML file.
//!
//! ```ignore
//! let fixins = Fixins::builder()
//!     .name("fruit")
//!     .version(env!("CARGO_PKG_VERSION"))
//!     .option(OptionSpec::integer("apple", &["-a", "--apple"]).default_value(1))
//!     .verbose_option()
//!     .build()?;
//!
//! let invocation = fixins.run();
//! let apples: i64 = invocation.get("apple")?;
//! ```
//!
//! That command accepts `--config-file/-C`, reads
//! `{platform config dir}/fruit/fruit.toml` by default, and understands
//! `--print-config` and `--version`.
//!
//! # Precedence
//!
//! Each option takes its value from the first of:
//!
//! ```text
//! Command line          explicitly supplied switch
//!        ↓ else
//! Config file           key of the [<command>] section
//!        ↓ else
//! Declared default      OptionSpec::default_value
//! ```
//!
//! An option supplied on the command line wins even when the supplied value
//! equals the default. Deciding whether an option was supplied is the job of
//! [`ExplicitSupply`]: the clap shell asks clap for each value's source, and
//! [`SwitchScan`] scans the raw arguments for callers using another parser.
//!
//! # Config file
//!
//! The file holds one table named after the command's slug
//! ([`command_slug`]). Only keys naming declared options are applied; other
//! keys are ignored, or rejected with [`FixinsBuilder::strict`]. A missing
//! file is fine. A file that does not parse, or lacks the section, fails the
//! invocation with nothing applied.
//!
//! ```toml
//! [fruit]
//! apple = 5
//! ```
//!
//! # Sample config
//!
//! `--print-config` renders the current command-line values as a config file
//! that loads back to the same values. Options still at their default are
//! commented out.
//!
//! # Core library, no CLI framework required
//!
//! Loading, resolution and rendering do not depend on clap. The shell
//! ([`Fixins::run`], [`Fixins::try_run_from`]) sits behind the `clap` Cargo
//! feature, on by default. Without it, parse arguments yourself and call
//! [`Fixins::merge`]:
//!
//! ```toml
//! fixins = { version = "...", default-features = false }
//! ```
//!
//! # Output
//!
//! [`Echo`] prints verbosity-gated status messages: normal messages to
//! stdout, warnings and errors (styled) to stderr. With
//! [`FixinsBuilder::tracing`] the shell also installs a `tracing` subscriber
//! whose level follows `--verbose`.

pub mod echo;
pub mod error;
pub mod help;
pub mod logging;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod file;
mod invocation;
mod render;
mod resolve;
mod switches;
mod validate;

#[cfg(test)]
mod fixtures;

pub use builder::{
    CONFIG_FILE_OPTION, DRY_RUN_OPTION, Fixins, FixinsBuilder, PRINT_CONFIG_OPTION, Presence,
    VERBOSE_OPTION, VERSION_OPTION,
};
#[cfg(feature = "clap")]
pub use cli::Flow;
pub use echo::{Echo, ErrorRenderer, Severity, StyledErrors, Verbosity};
pub use error::FixinsError;
pub use file::{command_slug, default_config_path, load_settings, parse_settings};
pub use invocation::Invocation;
pub use render::{SampleInput, render_sample};
pub use resolve::{ExplicitSupply, SwitchScan, resolve, resolve_from_args};
pub use switches::{ShortAlphabet, was_explicitly_supplied};
pub use types::{Arity, OptionSpec, Scalar, Values};
