//! Diagnostic rendering for terminal output.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;

/// Formats diagnostics into output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic.
    fn render(&self, diag: &Diagnostic) -> String;

    /// Renders a batch of diagnostics, one after another.
    fn render_all(&self, diags: &[Diagnostic]) -> String {
        diags.iter().map(|d| self.render(d)).collect()
    }
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// ```text
/// warning[W101]: numeric literal 5 is not a logic level
///   --> literal `5`
///    = note: substituted X
///    = help: ...
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in the header line.
    pub color: bool,
    /// Minimum severity to render; lower ones are skipped.
    pub min_severity: Severity,
}

impl TerminalRenderer {
    /// Creates a renderer that shows everything from `Note` upward.
    pub fn new(color: bool) -> Self {
        Self {
            color,
            min_severity: Severity::Note,
        }
    }

    /// Sets the minimum severity to render.
    pub fn with_min_severity(mut self, min_severity: Severity) -> Self {
        self.min_severity = min_severity;
        self
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        if diag.severity < self.min_severity {
            return String::new();
        }

        let mut out = String::new();
        let header = format!("{}[{}]", diag.severity, diag.code);
        if self.color {
            out.push_str(&format!(
                "\x1b[1;{}m{header}\x1b[0m: {}\n",
                diag.severity.ansi_color(),
                diag.message
            ));
        } else {
            out.push_str(&format!("{header}: {}\n", diag.message));
        }

        if let Some(subject) = &diag.subject {
            out.push_str(&format!("  --> literal `{subject}`\n"));
        }
        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }
        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }
        out
    }
}
