//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
///
/// Styling is decided once at construction: the resolved output format
/// (`Auto` following TTY detection) enables it, and `--no-color` or the
/// config file's `no_color` switch it back off.
pub struct OutputManager {
    quiet: bool,
    styled: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format_allows_style = match args.output_format {
            OutputFormat::Human => true,
            OutputFormat::Plain => false,
            OutputFormat::Auto => io::stdout().is_terminal(),
        };
        let no_color = args.no_color || config.output.no_color;

        Self {
            quiet: args.quiet,
            styled: format_allows_style && !no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.styled {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        } else {
            format!("\u{2713} {msg}") // ✓
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.styled {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        } else {
            format!("\u{26a0} {msg}") // ⚠
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.styled {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        } else {
            format!("\u{2139} {msg}") // ℹ
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.styled {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI styling is enabled.
    pub fn supports_color(&self) -> bool {
        self.styled
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(format: OutputFormat, quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(OutputFormat::Plain, true, true);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn plain_format_disables_styling() {
        let out = make_manager(OutputFormat::Plain, false, false);
        assert!(!out.supports_color());
    }

    #[test]
    fn human_format_styles_unless_no_color() {
        let styled = make_manager(OutputFormat::Human, false, false);
        let muted = make_manager(OutputFormat::Human, false, true);
        assert!(styled.supports_color());
        assert!(!muted.supports_color());
    }

    #[test]
    fn config_no_color_combines_with_flag() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&args, &config);
        assert!(!out.supports_color());
    }
}
