use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::debug;

use crate::echo::{ErrorRenderer, StyledErrors};
use crate::error::FixinsError;
use crate::file;
use crate::invocation::Invocation;
use crate::render::{self, SampleInput};
use crate::resolve::{self, ExplicitSupply, SwitchScan};
use crate::switches::ShortAlphabet;
use crate::types::{Arity, OptionSpec, Scalar, Values, short_letter};
use crate::validate;

/// Option name of `--config-file/-C`.
pub const CONFIG_FILE_OPTION: &str = "config_file";
/// Option name of `--print-config`.
pub const PRINT_CONFIG_OPTION: &str = "print_config";
/// Option name of `--version/-V`.
pub const VERSION_OPTION: &str = "version";
/// Option name of `--dry-run/-D`.
pub const DRY_RUN_OPTION: &str = "dry_run";
/// Option name of `--verbose/-v`.
pub const VERBOSE_OPTION: &str = "verbose";

/// Switches of the help option the shell always adds.
pub(crate) const HELP_SWITCHES: [&str; 2] = ["-h", "--help"];

const PRINT_CONFIG_HELP: &str = "Print a sample configuration file that corresponds to the \
command line options and exit. Ignores the settings from a configuration file.";

/// How the shell decides that an option was given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presence {
    /// Ask the argument parser where each value came from.
    #[default]
    Parser,
    /// Scan the raw arguments for the option's switches.
    SwitchScan,
}

/// Entry point: a command definition with config-file support.
///
/// Built once with [`Fixins::builder`] and immutable afterwards; every
/// per-command setting lives here rather than in shared state, so several
/// commands can coexist in one process.
#[cfg_attr(not(feature = "clap"), allow(dead_code))]
pub struct Fixins {
    pub(crate) name: String,
    pub(crate) slug: String,
    pub(crate) about: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) version_text: Option<String>,
    pub(crate) options: Vec<OptionSpec>,
    pub(crate) default_config_path: Option<PathBuf>,
    pub(crate) excluded: BTreeSet<String>,
    pub(crate) sort_help: bool,
    pub(crate) strict: bool,
    pub(crate) presence: Presence,
    pub(crate) error_renderer: Box<dyn ErrorRenderer>,
    pub(crate) color: bool,
    pub(crate) tracing: bool,
}

impl Fixins {
    pub fn builder() -> FixinsBuilder {
        FixinsBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Section name in the config file.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// All declared options, built-in ones included, in declaration order.
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    pub fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name() == name)
    }

    pub fn default_config_path(&self) -> Option<&Path> {
        self.default_config_path.as_deref()
    }

    /// The config file to read: the `--config-file` value if given, else the default.
    pub fn config_path(&self, parsed: &Values) -> Option<PathBuf> {
        let explicit = parsed
            .get(CONFIG_FILE_OPTION)
            .and_then(Option::as_ref)
            .and_then(Value::as_str)
            .map(PathBuf::from);
        explicit.or_else(|| self.default_config_path.clone())
    }

    /// Render the sample config for the given current values.
    pub fn sample_config(&self, values: &Values) -> String {
        render::render_sample(&SampleInput {
            command: &self.name,
            config_path: self.default_config_path.as_deref(),
            section: &self.slug,
            options: &self.options,
            excluded: &self.excluded,
            values,
        })
    }

    /// `<command> version <version>`, then the extra text on its own line.
    pub fn version_message(&self) -> Option<String> {
        let version = self.version.as_ref()?;
        let mut message = format!("{} version {version}", self.name);
        if let Some(text) = &self.version_text {
            message.push('\n');
            message.push_str(text);
        }
        Some(message)
    }

    /// Merge the config file into `parsed`, detecting command-line values by
    /// scanning `args` (program name excluded).
    ///
    /// This is the whole pipeline for callers that parse arguments themselves.
    pub fn merge<A: AsRef<str>>(&self, parsed: Values, args: &[A]) -> Result<Invocation, FixinsError> {
        let alphabet = ShortAlphabet::from_options(&self.options);
        self.merge_with(parsed, &SwitchScan::new(&alphabet, args))
    }

    /// Merge the config file into `parsed` using `presence` to find
    /// command-line values.
    ///
    /// Without an existing config file the parsed values pass through as is.
    /// On any config error nothing is applied.
    pub fn merge_with<P: ExplicitSupply + ?Sized>(
        &self,
        mut parsed: Values,
        presence: &P,
    ) -> Result<Invocation, FixinsError> {
        let Some(path) = self.config_path(&parsed) else {
            debug!("no config path available");
            return Ok(Invocation::new(parsed, None));
        };
        debug!(path = %path.display(), "config path");

        let Some(settings) = self.read_settings(&path)? else {
            return Ok(Invocation::new(parsed, None));
        };

        let resolved = resolve::resolve(&self.options, &parsed, &settings, presence);
        parsed.extend(resolved);
        Ok(Invocation::new(parsed, Some(path)))
    }

    fn read_settings(&self, path: &Path) -> Result<Option<Table>, FixinsError> {
        let Some(content) = file::read_config(path)? else {
            return Ok(None);
        };
        let settings = file::parse_settings(&content, path, &self.slug)?;
        if self.strict {
            validate::validate_unknown_keys(&settings, &self.options, &content, path, &self.slug)?;
        } else {
            for key in settings.keys().filter(|k| self.option(k).is_none()) {
                debug!(key = key.as_str(), "ignoring unknown config key");
            }
        }
        Ok(Some(settings))
    }
}

impl fmt::Debug for Fixins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixins")
            .field("name", &self.name)
            .field("slug", &self.slug)
            .field("options", &self.options)
            .field("default_config_path", &self.default_config_path)
            .field("strict", &self.strict)
            .field("presence", &self.presence)
            .finish_non_exhaustive()
    }
}

/// Builder for a [`Fixins`] command definition.
pub struct FixinsBuilder {
    name: Option<String>,
    about: Option<String>,
    version: Option<String>,
    version_text: Option<String>,
    version_switches: Vec<String>,
    version_help: String,
    options: Vec<OptionSpec>,
    config_file_option: bool,
    print_config_option: bool,
    print_config_switches: Vec<String>,
    print_config_help: String,
    default_config_path: Option<PathBuf>,
    excluded: BTreeSet<String>,
    sort_help: bool,
    dry_run_option: bool,
    verbose_option: bool,
    strict: bool,
    presence: Presence,
    error_renderer: Option<Box<dyn ErrorRenderer>>,
    color: Option<bool>,
    tracing: bool,
}

impl FixinsBuilder {
    fn new() -> Self {
        Self {
            name: None,
            about: None,
            version: None,
            version_text: None,
            version_switches: vec!["-V".into(), "--version".into()],
            version_help: "Show the version and exit.".into(),
            options: Vec::new(),
            config_file_option: true,
            print_config_option: true,
            print_config_switches: vec!["--print-config".into()],
            print_config_help: PRINT_CONFIG_HELP.into(),
            default_config_path: None,
            excluded: BTreeSet::new(),
            sort_help: true,
            dry_run_option: false,
            verbose_option: false,
            strict: false,
            presence: Presence::default(),
            error_renderer: None,
            color: None,
            tracing: false,
        }
    }

    /// Set the command name. The config section name and the default config
    /// path are derived from it.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// One-line description shown in help.
    pub fn about(mut self, about: &str) -> Self {
        self.about = Some(about.to_string());
        self
    }

    /// Register a version string; adds the eager `--version/-V` option.
    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// Extra text printed after the version line (copyright, license...).
    pub fn version_text(mut self, text: &str) -> Self {
        self.version_text = Some(text.to_string());
        self
    }

    /// Replace the version switches (default `-V`, `--version`).
    pub fn version_switches<S: AsRef<str>>(mut self, switches: &[S]) -> Self {
        self.version_switches = switches.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn version_help(mut self, help: &str) -> Self {
        self.version_help = help.to_string();
        self
    }

    /// Declare an option of the command.
    pub fn option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Enable or disable `--config-file/-C` (default: enabled).
    pub fn config_file_option(mut self, enabled: bool) -> Self {
        self.config_file_option = enabled;
        self
    }

    /// Enable or disable `--print-config` (default: enabled).
    pub fn print_config_option(mut self, enabled: bool) -> Self {
        self.print_config_option = enabled;
        self
    }

    pub fn print_config_switches<S: AsRef<str>>(mut self, switches: &[S]) -> Self {
        self.print_config_switches = switches.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn print_config_help(mut self, help: &str) -> Self {
        self.print_config_help = help.to_string();
        self
    }

    /// Use a fixed default config file instead of the platform location.
    pub fn default_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.default_config_path = Some(path.into());
        self
    }

    /// Leave option `name` out of the sample config.
    pub fn exclude(mut self, name: &str) -> Self {
        self.excluded.insert(name.to_string());
        self
    }

    /// Sort options in help by switch (default: `true`).
    pub fn sort_help(mut self, sort: bool) -> Self {
        self.sort_help = sort;
        self
    }

    /// Add `--dry-run/-D`.
    pub fn dry_run_option(mut self) -> Self {
        self.dry_run_option = true;
        self
    }

    /// Add `--verbose/-v`, counted.
    pub fn verbose_option(mut self) -> Self {
        self.verbose_option = true;
        self
    }

    /// Reject config keys that name no option (default: `false`, they are ignored).
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Choose how command-line values are detected (default: [`Presence::Parser`]).
    pub fn presence(mut self, presence: Presence) -> Self {
        self.presence = presence;
        self
    }

    /// Replace the usage-error display for this command.
    pub fn error_renderer<R: ErrorRenderer + 'static>(mut self, renderer: R) -> Self {
        self.error_renderer = Some(Box::new(renderer));
        self
    }

    /// Force colored diagnostics on or off (default: on when stderr is a terminal).
    pub fn color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    /// Install a `tracing` subscriber at the invocation's verbosity when run.
    pub fn tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    /// Assemble the full option list, built-ins after the command's own.
    fn all_options(&mut self) -> Vec<OptionSpec> {
        let mut options = std::mem::take(&mut self.options);

        if self.config_file_option {
            options.push(
                OptionSpec::new(
                    CONFIG_FILE_OPTION,
                    &["-C", "--config-file"],
                    Arity::Single(Scalar::ExistingFile),
                )
                .help("Full path of the TOML-format configuration file."),
            );
        }
        if self.dry_run_option {
            options.push(OptionSpec::flag(DRY_RUN_OPTION, &["-D", "--dry-run"]).help(
                "Show the intended operations but do not run them (implies --verbose).",
            ));
        }
        if self.verbose_option {
            options.push(OptionSpec::count(VERBOSE_OPTION, &["-v", "--verbose"]).help(
                "Increase the verbosity of status messages: use once for normal output, \
                 twice for additional output, and thrice for debug-level output.",
            ));
        }
        if self.print_config_option {
            options.push(
                OptionSpec::flag(PRINT_CONFIG_OPTION, &self.print_config_switches)
                    .help(&self.print_config_help)
                    .eager(),
            );
        }
        if self.version.is_some() {
            options.push(
                OptionSpec::flag(VERSION_OPTION, &self.version_switches)
                    .help(&self.version_help)
                    .eager(),
            );
        }
        options
    }

    /// Validate and freeze the definition.
    pub fn build(mut self) -> Result<Fixins, FixinsError> {
        let name = self.name.clone().ok_or(FixinsError::NameRequired)?;
        let slug = file::command_slug(&name);
        let options = self.all_options();

        let mut seen = BTreeSet::new();
        for option in &options {
            if !seen.insert(option.name()) {
                return Err(FixinsError::DuplicateOption(option.name().to_string()));
            }
        }
        check_switches(&options)?;

        let mut excluded = self.excluded;
        excluded.insert(CONFIG_FILE_OPTION.to_string());
        excluded.insert(PRINT_CONFIG_OPTION.to_string());

        let default_config_path = self
            .default_config_path
            .or_else(|| file::default_config_path(&slug));
        let color = self.color.unwrap_or_else(console::colors_enabled_stderr);
        let error_renderer = self
            .error_renderer
            .unwrap_or_else(|| Box::new(StyledErrors { color }) as Box<dyn ErrorRenderer>);

        Ok(Fixins {
            name,
            slug,
            about: self.about,
            version: self.version,
            version_text: self.version_text,
            options,
            default_config_path,
            excluded,
            sort_help: self.sort_help,
            strict: self.strict,
            presence: self.presence,
            error_renderer,
            color,
            tracing: self.tracing,
        })
    }
}

/// Every option needs at least one switch, each `-x` or `--name`, and no
/// switch may be shared, the help switches included.
fn check_switches(options: &[OptionSpec]) -> Result<(), FixinsError> {
    let mut seen: BTreeSet<&str> = HELP_SWITCHES.into_iter().collect();
    for option in options {
        if option.switches().is_empty() {
            return Err(FixinsError::MissingSwitch(option.name().to_string()));
        }
        for switch in option.switches() {
            if !is_valid_switch(switch) {
                return Err(FixinsError::InvalidSwitch {
                    option: option.name().to_string(),
                    switch: switch.clone(),
                });
            }
            if !seen.insert(switch) {
                return Err(FixinsError::DuplicateSwitch {
                    option: option.name().to_string(),
                    switch: switch.clone(),
                });
            }
        }
    }
    Ok(())
}

fn is_valid_switch(switch: &str) -> bool {
    if let Some(letter) = short_letter(switch) {
        return !letter.is_whitespace();
    }
    match switch.strip_prefix("--") {
        Some(long) => {
            !long.is_empty()
                && !long.starts_with('-')
                && !long.contains(|c: char| c == '=' || c.is_whitespace())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{fruit_options, parsed};
    use std::fs;
    use tempfile::TempDir;

    fn fruit(dir: &TempDir) -> Fixins {
        let mut builder = Fixins::builder()
            .name("fruit")
            .default_config_path(dir.path().join("fruit.toml"));
        for option in fruit_options() {
            builder = builder.option(option);
        }
        builder.build().unwrap()
    }

    fn int(v: i64) -> Option<Value> {
        Some(Value::Integer(v))
    }

    #[test]
    fn missing_name_errors() {
        let result = Fixins::builder().build();
        assert!(matches!(result, Err(FixinsError::NameRequired)));
    }

    #[test]
    fn name_derives_slug() {
        let fixins = Fixins::builder().name("My.Tool.py").build().unwrap();
        assert_eq!(fixins.slug(), "my-tool");
    }

    #[test]
    fn duplicate_option_names_rejected() {
        let result = Fixins::builder()
            .name("fruit")
            .option(OptionSpec::integer("apple", &["-a"]))
            .option(OptionSpec::integer("apple", &["--apple"]))
            .build();
        assert!(matches!(result, Err(FixinsError::DuplicateOption(name)) if name == "apple"));
    }

    #[test]
    fn user_option_clashing_with_builtin_rejected() {
        let result = Fixins::builder()
            .name("fruit")
            .option(OptionSpec::path("config_file", &["--cfg"]))
            .build();
        assert!(matches!(result, Err(FixinsError::DuplicateOption(_))));
    }

    #[test]
    fn switch_clashing_with_version_rejected() {
        let result = Fixins::builder()
            .name("fruit")
            .version("1.0")
            .option(OptionSpec::string("vendor", &["-V", "--vendor"]))
            .build();
        assert!(matches!(
            result,
            Err(FixinsError::DuplicateSwitch { option, switch }) if option == "version" && switch == "-V"
        ));
    }

    #[test]
    fn version_switch_free_without_version() {
        let fixins = Fixins::builder()
            .name("fruit")
            .option(OptionSpec::string("vendor", &["-V", "--vendor"]))
            .build()
            .unwrap();
        assert!(fixins.option("vendor").is_some());
    }

    #[test]
    fn switch_clashing_with_builtins_rejected() {
        for switch in ["-h", "--help", "-C", "--config-file", "-v", "-D", "--print-config"] {
            let result = Fixins::builder()
                .name("fruit")
                .dry_run_option()
                .verbose_option()
                .option(OptionSpec::flag("extra", &[switch]))
                .build();
            assert!(
                matches!(result, Err(FixinsError::DuplicateSwitch { .. })),
                "{switch} accepted"
            );
        }
    }

    #[test]
    fn switch_shared_between_user_options_rejected() {
        let result = Fixins::builder()
            .name("fruit")
            .option(OptionSpec::integer("apple", &["-a", "--apple"]))
            .option(OptionSpec::integer("avocado", &["-a", "--avocado"]))
            .build();
        assert!(matches!(
            result,
            Err(FixinsError::DuplicateSwitch { option, .. }) if option == "avocado"
        ));
    }

    #[test]
    fn switch_without_dash_rejected() {
        let result = Fixins::builder()
            .name("fruit")
            .option(OptionSpec::string("apple", &["apple"]))
            .build();
        assert!(matches!(
            result,
            Err(FixinsError::InvalidSwitch { switch, .. }) if switch == "apple"
        ));
    }

    #[test]
    fn malformed_switches_rejected() {
        for switch in ["-", "--", "-ab", "---apple", "--app le", "--apple=1", "- "] {
            let result = Fixins::builder()
                .name("fruit")
                .option(OptionSpec::string("apple", &[switch]))
                .build();
            assert!(
                matches!(result, Err(FixinsError::InvalidSwitch { .. })),
                "{switch:?} accepted"
            );
        }
    }

    #[test]
    fn option_without_switches_rejected() {
        let result = Fixins::builder()
            .name("fruit")
            .option(OptionSpec::string("apple", &[] as &[&str]))
            .build();
        assert!(matches!(result, Err(FixinsError::MissingSwitch(name)) if name == "apple"));
    }

    #[test]
    fn builtin_options_follow_user_options() {
        let fixins = Fixins::builder()
            .name("fruit")
            .option(OptionSpec::integer("apple", &["-a"]))
            .dry_run_option()
            .verbose_option()
            .version("1.0")
            .build()
            .unwrap();
        let names: Vec<&str> = fixins.options().iter().map(|o| o.name()).collect();
        assert_eq!(
            names,
            vec![
                "apple",
                CONFIG_FILE_OPTION,
                DRY_RUN_OPTION,
                VERBOSE_OPTION,
                PRINT_CONFIG_OPTION,
                VERSION_OPTION
            ]
        );
        assert!(fixins.option(PRINT_CONFIG_OPTION).unwrap().is_eager());
        assert!(fixins.option(VERSION_OPTION).unwrap().is_eager());
    }

    #[test]
    fn builtins_can_be_disabled() {
        let fixins = Fixins::builder()
            .name("fruit")
            .config_file_option(false)
            .print_config_option(false)
            .build()
            .unwrap();
        assert!(fixins.options().is_empty());
    }

    #[test]
    fn version_message_with_extra_text() {
        let fixins = Fixins::builder()
            .name("fruit")
            .version("1.2.3")
            .version_text("Copyright 2019. Licensed under the GPLv3.")
            .build()
            .unwrap();
        assert_eq!(
            fixins.version_message().unwrap(),
            "fruit version 1.2.3\nCopyright 2019. Licensed under the GPLv3."
        );
    }

    #[test]
    fn no_version_no_message() {
        let fixins = Fixins::builder().name("fruit").build().unwrap();
        assert!(fixins.version_message().is_none());
        assert!(fixins.option(VERSION_OPTION).is_none());
    }

    #[test]
    fn explicit_config_file_beats_default() {
        let dir = TempDir::new().unwrap();
        let fixins = fruit(&dir);
        let mut values = Values::new();
        assert_eq!(
            fixins.config_path(&values),
            Some(dir.path().join("fruit.toml"))
        );
        values.insert(
            CONFIG_FILE_OPTION.into(),
            Some(Value::String("/etc/fruit.toml".into())),
        );
        assert_eq!(
            fixins.config_path(&values),
            Some(PathBuf::from("/etc/fruit.toml"))
        );
    }

    #[test]
    fn merge_without_config_file_passes_values_through() {
        let dir = TempDir::new().unwrap();
        let fixins = fruit(&dir);
        let values = parsed(&[("apple", 1), ("banana", 2)]);
        let inv = fixins.merge(values.clone(), &[] as &[&str]).unwrap();
        assert_eq!(inv.values(), &values);
        assert_eq!(inv.config_path(), None);
    }

    #[test]
    fn merge_scenario_command_line_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fruit.toml"), "[fruit]\napple = 5\n").unwrap();
        let fixins = fruit(&dir);

        let inv = fixins
            .merge(parsed(&[("apple", 9), ("banana", 2)]), &["--apple", "9"])
            .unwrap();
        assert_eq!(inv.values()["apple"], int(9));
        assert_eq!(inv.values()["banana"], int(2));
        assert_eq!(inv.config_path(), Some(dir.path().join("fruit.toml").as_path()));
    }

    #[test]
    fn merge_scenario_config_wins_over_default() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fruit.toml"), "[fruit]\napple = 5\n").unwrap();
        let fixins = fruit(&dir);

        let inv = fixins
            .merge(parsed(&[("apple", 1), ("banana", 2)]), &[] as &[&str])
            .unwrap();
        assert_eq!(inv.values()["apple"], int(5));
        assert_eq!(inv.values()["banana"], int(2));
    }

    #[test]
    fn merge_malformed_file_applies_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fruit.toml"), "BAD MOJO").unwrap();
        let fixins = fruit(&dir);

        let result = fixins.merge(parsed(&[("apple", 1)]), &[] as &[&str]);
        assert!(matches!(result, Err(FixinsError::ConfigParse { .. })));
    }

    #[test]
    fn merge_missing_section_errors() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fruit.toml"), "[veg]\ncarrot = 1\n").unwrap();
        let fixins = fruit(&dir);

        let result = fixins.merge(parsed(&[("apple", 1)]), &[] as &[&str]);
        assert!(matches!(
            result,
            Err(FixinsError::ConfigSectionMissing { .. })
        ));
    }

    #[test]
    fn strict_rejects_unknown_key() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fruit.toml"), "[fruit]\ncherry = 1\n").unwrap();
        let mut builder = Fixins::builder()
            .name("fruit")
            .default_config_path(dir.path().join("fruit.toml"))
            .strict(true);
        for option in fruit_options() {
            builder = builder.option(option);
        }
        let fixins = builder.build().unwrap();

        let result = fixins.merge(parsed(&[("apple", 1)]), &[] as &[&str]);
        assert!(matches!(result, Err(FixinsError::UnknownKeys(_))));
    }

    #[test]
    fn lenient_ignores_unknown_key() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("fruit.toml"),
            "[fruit]\ncherry = 1\napple = 3\n",
        )
        .unwrap();
        let fixins = fruit(&dir);

        let inv = fixins
            .merge(parsed(&[("apple", 1)]), &[] as &[&str])
            .unwrap();
        assert_eq!(inv.values()["apple"], int(3));
        assert!(!inv.values().contains_key("cherry"));
    }

    #[test]
    fn sample_config_round_trips_through_loader() {
        let dir = TempDir::new().unwrap();
        let fixins = fruit(&dir);
        let resolved = parsed(&[("apple", 7), ("banana", 2)]);

        let sample = fixins.sample_config(&resolved);
        fs::write(dir.path().join("fruit.toml"), &sample).unwrap();

        let inv = fixins
            .merge(parsed(&[("apple", 1), ("banana", 2)]), &[] as &[&str])
            .unwrap();
        assert_eq!(inv.values(), &resolved);
    }

    #[test]
    fn sample_config_excludes_builtins() {
        let dir = TempDir::new().unwrap();
        let fixins = fruit(&dir);
        let mut values = parsed(&[("apple", 1)]);
        values.insert(
            CONFIG_FILE_OPTION.into(),
            Some(Value::String("/etc/fruit.toml".into())),
        );
        values.insert(PRINT_CONFIG_OPTION.into(), Some(Value::Boolean(true)));
        let sample = fixins.sample_config(&values);
        assert!(!sample.contains("config_file"));
        assert!(!sample.contains("print_config"));
        assert!(sample.contains("# apple = 1"));
    }
}
