//! Diagnostic severity levels ordered from least to most severe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of a diagnostic message.
///
/// Ordered from least severe (`Help`) to most severe (`Error`) by declaration order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    /// A suggestion that does not indicate a problem.
    Help,
    /// Additional context.
    Note,
    /// A value was substituted or adjusted; execution continued.
    Warning,
    /// The requested value could not be produced.
    Error,
}

impl Severity {
    /// Returns `true` if this severity is [`Error`](Severity::Error).
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }

    /// ANSI SGR color code used by the terminal renderer.
    pub(crate) fn ansi_color(self) -> &'static str {
        match self {
            Severity::Help => "36",
            Severity::Note => "34",
            Severity::Warning => "33",
            Severity::Error => "31",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Help => "help",
            Severity::Note => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}
