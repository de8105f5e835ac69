//! User-facing messages filtered by verbosity and styled by severity.
//!
//! | Severity | Stream | Prefix     | Shown when                      |
//! |----------|--------|------------|---------------------------------|
//! | Normal   | stdout | (none)     | `max(threshold, Low) <= verbosity` |
//! | Warning  | stderr | `WARNING ` | verbosity is at least `Low`     |
//! | Error    | stderr | `ERROR `   | always                          |
//!
//! Warnings are yellow and errors red (both bold) when color is on.

use std::io::{self, Write};

use console::Style;

/// Message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Normal,
    Warning,
    Error,
}

/// How chatty the command is, from the count of `-v` switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    #[default]
    None = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Verbosity {
    /// Map a switch count to a verbosity, saturating at `High`.
    pub fn from_count(count: u64) -> Self {
        match count {
            0 => Verbosity::None,
            1 => Verbosity::Low,
            2 => Verbosity::Medium,
            _ => Verbosity::High,
        }
    }
}

/// A message sink writing normal output to one stream and diagnostics to another.
pub struct Echo<O: Write = io::Stdout, E: Write = io::Stderr> {
    verbosity: Verbosity,
    color: bool,
    out: O,
    err: E,
}

impl Echo {
    /// Echo to the process's stdout and stderr, colored when stderr is a terminal.
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: console::colors_enabled_stderr(),
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl<O: Write, E: Write> Echo<O, E> {
    pub fn with_writers(verbosity: Verbosity, out: O, err: E) -> Self {
        Self {
            verbosity,
            color: false,
            out,
            err,
        }
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Write `message` if `threshold` and `severity` allow it at the current verbosity.
    pub fn echo(&mut self, message: &str, threshold: Verbosity, severity: Severity) -> io::Result<()> {
        let threshold = match severity {
            Severity::Normal => threshold.max(Verbosity::Low),
            Severity::Warning => Verbosity::Low,
            Severity::Error => Verbosity::None,
        };
        if threshold > self.verbosity {
            return Ok(());
        }

        let line = styled(message, severity, self.color);
        match severity {
            Severity::Normal => writeln!(self.out, "{line}"),
            Severity::Warning | Severity::Error => writeln!(self.err, "{line}"),
        }
    }

    /// Normal output shown from `-v` up.
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        self.echo(message, Verbosity::Low, Severity::Normal)
    }

    /// Normal output shown from `-vv` up.
    pub fn detail(&mut self, message: &str) -> io::Result<()> {
        self.echo(message, Verbosity::Medium, Severity::Normal)
    }

    /// Normal output shown only at `-vvv`.
    pub fn debug(&mut self, message: &str) -> io::Result<()> {
        self.echo(message, Verbosity::High, Severity::Normal)
    }

    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        self.echo(message, Verbosity::Low, Severity::Warning)
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.echo(message, Verbosity::None, Severity::Error)
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }
}

fn styled(message: &str, severity: Severity, color: bool) -> String {
    let (prefix, style) = match severity {
        Severity::Normal => return message.to_string(),
        Severity::Warning => ("WARNING ", Style::new().yellow().bold()),
        Severity::Error => ("ERROR ", Style::new().red().bold()),
    };
    let line = format!("{prefix}{message}");
    if color {
        style.force_styling(true).apply_to(line).to_string()
    } else {
        line
    }
}

/// Displays command-line usage errors.
///
/// Held by each command definition; there is no process-wide override.
pub trait ErrorRenderer {
    /// Write a usage error. `usage` is the command's usage line and `message`
    /// the parser's one-line diagnostic.
    fn render(&self, usage: &str, message: &str, err: &mut dyn Write) -> io::Result<()>;
}

/// Default [`ErrorRenderer`]: the usage line, a blank line, then the message
/// at error severity.
#[derive(Debug, Clone, Copy)]
pub struct StyledErrors {
    pub color: bool,
}

impl Default for StyledErrors {
    fn default() -> Self {
        Self {
            color: console::colors_enabled_stderr(),
        }
    }
}

impl ErrorRenderer for StyledErrors {
    fn render(&self, usage: &str, message: &str, err: &mut dyn Write) -> io::Result<()> {
        writeln!(err, "{}\n", usage.trim_end())?;
        writeln!(err, "{}", styled(message, Severity::Error, self.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(verbosity: u64, threshold: u64, severity: Severity, message: &str) -> (String, String) {
        let mut echo = Echo::with_writers(Verbosity::from_count(verbosity), Vec::new(), Vec::new());
        echo.echo(message, Verbosity::from_count(threshold), severity)
            .unwrap();
        let (out, err) = echo.into_writers();
        (
            String::from_utf8(out).unwrap().trim().to_string(),
            String::from_utf8(err).unwrap().trim().to_string(),
        )
    }

    fn pair(out: &str, err: &str) -> (String, String) {
        (out.to_string(), err.to_string())
    }

    #[test]
    fn normal_messages_need_verbosity() {
        assert_eq!(capture(0, 1, Severity::Normal, "info"), pair("", ""));
        assert_eq!(capture(1, 1, Severity::Normal, "info"), pair("info", ""));
        assert_eq!(capture(3, 1, Severity::Normal, "info"), pair("info", ""));
    }

    #[test]
    fn warnings_shown_from_low_verbosity() {
        assert_eq!(capture(0, 1, Severity::Warning, "warn"), pair("", ""));
        assert_eq!(capture(1, 1, Severity::Warning, "warn"), pair("", "WARNING warn"));
        assert_eq!(capture(3, 3, Severity::Warning, "warn"), pair("", "WARNING warn"));
    }

    #[test]
    fn errors_always_shown() {
        for verbosity in 0..=3 {
            assert_eq!(
                capture(verbosity, 1, Severity::Error, "error"),
                pair("", "ERROR error")
            );
        }
    }

    #[test]
    fn threshold_zero_behaves_like_low() {
        assert_eq!(capture(0, 0, Severity::Normal, "info"), pair("", ""));
        assert_eq!(capture(1, 0, Severity::Normal, "info"), pair("info", ""));
    }

    #[test]
    fn higher_thresholds_need_more_verbosity() {
        assert_eq!(capture(1, 2, Severity::Normal, "more"), pair("", ""));
        assert_eq!(capture(2, 2, Severity::Normal, "more"), pair("more", ""));
        assert_eq!(capture(2, 3, Severity::Normal, "debug"), pair("", ""));
        assert_eq!(capture(3, 3, Severity::Normal, "debug"), pair("debug", ""));
    }

    #[test]
    fn verbosity_saturates() {
        assert_eq!(Verbosity::from_count(7), Verbosity::High);
    }

    #[test]
    fn color_wraps_diagnostics_in_escape_codes() {
        let mut echo = Echo::with_writers(Verbosity::None, Vec::new(), Vec::new()).color(true);
        echo.error("boom").unwrap();
        let (_, err) = echo.into_writers();
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("\u{1b}["));
        assert!(err.contains("ERROR boom"));
    }

    #[test]
    fn styled_errors_render_usage_then_message() {
        let mut buf = Vec::new();
        StyledErrors { color: false }
            .render("Usage: fruit [OPTIONS]\n", "unexpected argument '--cherry' found", &mut buf)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Usage: fruit [OPTIONS]\n\nERROR unexpected argument '--cherry' found\n"
        );
    }
}
