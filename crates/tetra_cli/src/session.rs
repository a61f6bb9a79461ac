//! Shared per-command state: configuration, parser, diagnostics.
//!
//! Every subcommand that converts literals opens a [`Session`], runs its
//! conversions against the session's sink, then flushes the collected
//! diagnostics to stderr.

use std::path::{Path, PathBuf};

use tetra_common::{LiteralParser, LogicError, OutOfDomainPolicy, ParseOptions};
use tetra_config::{DisplaySettings, TetraConfig};
use tetra_diagnostics::{DiagnosticRenderer, DiagnosticSink, Severity, TerminalRenderer};

use crate::GlobalArgs;

/// Parser, sink and display settings for one CLI invocation.
pub struct Session {
    /// Converts literals using the configured options.
    pub parser: LiteralParser,
    /// Collects warnings emitted during conversion.
    pub sink: DiagnosticSink,
    /// How projected integers are printed.
    pub display: DisplaySettings,
    renderer: TerminalRenderer,
}

impl Session {
    /// Loads `tetra.toml` (explicit `--config` path, else the current
    /// directory) and builds a session from it.
    ///
    /// `strict` forces [`OutOfDomainPolicy::Strict`] regardless of the file.
    pub fn open(global: &GlobalArgs, strict: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let cwd = std::env::current_dir()?;
        let explicit = global.config.as_deref().map(PathBuf::from);
        let config = tetra_config::load_config_or_default(explicit.as_deref(), &cwd)?;
        if global.verbose {
            eprintln!("   Config {}", describe_source(explicit.as_deref(), &cwd));
        }
        Ok(Self::from_config(config, global, strict))
    }

    /// Builds a session from an already loaded configuration.
    pub fn from_config(config: TetraConfig, global: &GlobalArgs, strict: bool) -> Self {
        let mut options = config.literals.parse_options();
        if strict {
            options = ParseOptions {
                out_of_domain: OutOfDomainPolicy::Strict,
            };
        }

        let min_severity = if global.quiet {
            Severity::Error
        } else if global.verbose {
            Severity::Help
        } else {
            Severity::Note
        };

        Self {
            parser: LiteralParser::new(options),
            sink: DiagnosticSink::new(),
            display: config.display,
            renderer: TerminalRenderer::new(global.color).with_min_severity(min_severity),
        }
    }

    /// Renders and drains every buffered diagnostic to stderr.
    pub fn flush(&self) {
        let rendered = self.renderer.render_all(&self.sink.take_all());
        if !rendered.is_empty() {
            eprint!("{rendered}");
        }
    }

    /// Reports a hard failure as a diagnostic and returns the exit code.
    pub fn fail(&self, err: &LogicError) -> i32 {
        self.sink.emit(err.to_diagnostic());
        self.flush();
        self.exit_code()
    }

    /// 1 if any error was reported, 0 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.sink.has_errors() {
            1
        } else {
            0
        }
    }
}

fn describe_source(explicit: Option<&Path>, cwd: &Path) -> String {
    match explicit {
        Some(path) => path.display().to_string(),
        None => {
            let path = cwd.join(tetra_config::CONFIG_FILE_NAME);
            if path.is_file() {
                path.display().to_string()
            } else {
                "defaults".to_string()
            }
        }
    }
}
