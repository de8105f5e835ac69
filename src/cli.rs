//! Clap adapter: the command shell.
//!
//! Compiled only with the `clap` Cargo feature (on by default). It turns a
//! [`Fixins`] definition into a [`clap::Command`], parses the argument
//! vector, handles help and usage errors, runs the eager `--print-config` and
//! `--version` actions, and finally merges the config file into the parsed
//! values.
//!
//! Everything past parsing goes through the clap-free
//! [`Fixins::merge_with`], with [`ArgMatches`] answering the
//! explicit-supply question from clap's own value sources.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use toml::Value;
use tracing::debug;

use crate::builder::{Fixins, HELP_SWITCHES, PRINT_CONFIG_OPTION, Presence, VERSION_OPTION};
use crate::echo::{Echo, Verbosity};
use crate::error::FixinsError;
use crate::help;
use crate::invocation::Invocation;
use crate::logging;
use crate::resolve::ExplicitSupply;
use crate::types::{Arity, OptionSpec, Scalar, Values};

const HELP_ARG: &str = "help";

/// What the caller should do after [`Fixins::try_run_from`].
#[derive(Debug, PartialEq)]
pub enum Flow {
    /// Run the command body with these values.
    Continue(Invocation),
    /// Stop with this exit code; all output has been written.
    Exit(i32),
}

impl ExplicitSupply for ArgMatches {
    fn was_supplied(&self, option: &OptionSpec) -> bool {
        self.value_source(option.name()) == Some(ValueSource::CommandLine)
    }
}

impl Fixins {
    /// The clap command for this definition, with a `-h/--help` switch.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(self.name.clone()).disable_help_flag(true);
        if let Some(about) = &self.about {
            cmd = cmd.about(about.clone());
        }

        let mut entries: Vec<Vec<String>> =
            self.options.iter().map(|o| o.switches().to_vec()).collect();
        entries.push(HELP_SWITCHES.iter().map(|s| s.to_string()).collect());
        let order = help::display_order(&entries, self.sort_help);

        for (option, position) in self.options.iter().zip(&order) {
            cmd = cmd.arg(to_arg(option).display_order(*position));
        }
        let help_position = order.last().copied().unwrap_or_default();
        cmd.arg(
            Arg::new(HELP_ARG)
                .short('h')
                .long("help")
                .action(ArgAction::Help)
                .help("Show this message and exit.")
                .display_order(help_position),
        )
    }

    /// Parse `args` (program name first) and resolve the invocation.
    ///
    /// Help, version and sample-config output go to `out`; usage errors are
    /// rendered to `err`. Config file errors are returned, nothing from the
    /// file having been applied.
    pub fn try_run_from<I, T>(
        &self,
        args: I,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Flow, FixinsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut cmd = self.command();

        let matches = match cmd.try_get_matches_from_mut(args.iter()) {
            Ok(matches) => matches,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                write!(out, "{e}")?;
                return Ok(Flow::Exit(0));
            }
            Err(e) => {
                let usage = cmd.render_usage().to_string();
                self.error_renderer
                    .render(&usage, &usage_error_message(&e), err)?;
                return Ok(Flow::Exit(1));
            }
        };

        let parsed = self.parsed_values(&matches);

        for option in self.options.iter().filter(|o| o.is_eager()) {
            if parsed.get(option.name()) != Some(&Some(Value::Boolean(true))) {
                continue;
            }
            let message = match option.name() {
                PRINT_CONFIG_OPTION => Some(self.sample_config(&parsed)),
                VERSION_OPTION => self.version_message(),
                _ => None,
            };
            if let Some(message) = message {
                debug!(option = option.name(), "eager option");
                writeln!(out, "{message}")?;
                return Ok(Flow::Exit(0));
            }
        }

        let invocation = match self.presence {
            Presence::Parser => self.merge_with(parsed, &matches)?,
            Presence::SwitchScan => {
                let raw: Vec<String> = args
                    .iter()
                    .skip(1)
                    .map(|a| a.to_string_lossy().into_owned())
                    .collect();
                self.merge(parsed, &raw)?
            }
        };
        Ok(Flow::Continue(invocation))
    }

    /// Run against the process arguments, exiting on help, version, sample
    /// config, usage errors and config errors.
    pub fn run(&self) -> Invocation {
        self.run_from(std::env::args_os())
    }

    /// Like [`Fixins::run`], with explicit arguments.
    pub fn run_from<I, T>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let result = self.try_run_from(args, &mut io::stdout().lock(), &mut io::stderr().lock());
        match result {
            Ok(Flow::Continue(invocation)) => {
                if self.tracing {
                    logging::init_tracing(invocation.verbosity());
                }
                invocation
            }
            Ok(Flow::Exit(code)) => std::process::exit(code),
            Err(e) => {
                let mut echo = Echo::new(Verbosity::None).color(self.color);
                // Nothing left to report a failed stderr write to.
                let _ = echo.error(&e.to_string());
                std::process::exit(e.exit_code());
            }
        }
    }

    fn parsed_values(&self, matches: &ArgMatches) -> Values {
        self.options
            .iter()
            .map(|o| (o.name().to_string(), parsed_value(o, matches)))
            .collect()
    }
}

fn to_arg(option: &OptionSpec) -> Arg {
    let mut arg = Arg::new(option.name().to_string());

    let mut shorts = option.short_switches();
    if let Some(short) = shorts.next() {
        arg = arg.short(short);
    }
    for short in shorts {
        arg = arg.visible_short_alias(short);
    }
    let mut longs = option.long_switches();
    if let Some(long) = longs.next() {
        arg = arg.long(long.to_string());
    }
    for long in longs {
        arg = arg.visible_alias(long.to_string());
    }

    if let Some(help) = option.help_text() {
        arg = arg.help(help.to_string());
    }

    match option.arity() {
        Arity::Flag => arg.action(ArgAction::SetTrue),
        Arity::Count => arg.action(ArgAction::Count),
        Arity::Single(scalar) => with_parser(arg.action(ArgAction::Set), scalar)
            .value_name(option.name().to_uppercase()),
        Arity::Multi(scalar) => with_parser(arg.action(ArgAction::Append), scalar)
            .value_name(option.name().to_uppercase()),
    }
}

fn with_parser(arg: Arg, scalar: Scalar) -> Arg {
    match scalar {
        Scalar::String => arg.value_parser(value_parser!(String)),
        Scalar::Integer => arg.value_parser(value_parser!(i64)),
        Scalar::Float => arg.value_parser(value_parser!(f64)),
        Scalar::Path => arg.value_parser(value_parser!(PathBuf)),
        Scalar::ExistingFile => arg.value_parser(existing_file),
    }
}

/// Accept a readable regular file, returning its canonical path.
fn existing_file(raw: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(raw);
    if !path.is_file() {
        return Err(format!("'{raw}' is not an existing file"));
    }
    std::fs::File::open(&path).map_err(|e| format!("'{raw}' is not readable: {e}"))?;
    std::fs::canonicalize(&path).map_err(|e| format!("'{raw}': {e}"))
}

/// The parsed value of `option`: what the command line gave, else the
/// declared default.
fn parsed_value(option: &OptionSpec, matches: &ArgMatches) -> Option<Value> {
    let id = option.name();
    if matches.value_source(id) != Some(ValueSource::CommandLine) {
        return option.default().cloned();
    }
    match option.arity() {
        Arity::Flag => Some(Value::Boolean(matches.get_flag(id))),
        Arity::Count => Some(Value::Integer(i64::from(matches.get_count(id)))),
        Arity::Single(scalar) => scalar_values(matches, id, scalar).into_iter().next(),
        Arity::Multi(scalar) => Some(Value::Array(scalar_values(matches, id, scalar))),
    }
}

fn scalar_values(matches: &ArgMatches, id: &str, scalar: Scalar) -> Vec<Value> {
    match scalar {
        Scalar::String => matches
            .get_many::<String>(id)
            .map(|vs| vs.map(|v| Value::String(v.clone())).collect())
            .unwrap_or_default(),
        Scalar::Integer => matches
            .get_many::<i64>(id)
            .map(|vs| vs.map(|v| Value::Integer(*v)).collect())
            .unwrap_or_default(),
        Scalar::Float => matches
            .get_many::<f64>(id)
            .map(|vs| vs.map(|v| Value::Float(*v)).collect())
            .unwrap_or_default(),
        Scalar::Path | Scalar::ExistingFile => matches
            .get_many::<PathBuf>(id)
            .map(|vs| {
                vs.map(|p| Value::String(p.to_string_lossy().into_owned()))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// First line of a clap error, without its `error: ` prefix.
fn usage_error_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
