//! Error taxonomy for literal conversion and vector operations.
//!
//! Every variant is a hard failure reported at the point of conversion. The
//! tolerant form of [`LogicError::OutOfDomainValue`] never reaches a caller as
//! an `Err`; it is emitted as a diagnostic instead (see [`crate::literal`]).

use tetra_diagnostics::{Diagnostic, DiagnosticCode};

/// Result alias for fallible logic-value operations.
pub type LogicResult<T> = Result<T, LogicError>;

/// Errors raised while building or combining logic values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LogicError {
    /// The literal text does not match any recognized grammar.
    #[error("invalid literal `{text}`: {reason}")]
    InvalidLiteralSyntax {
        /// The offending literal text.
        text: String,
        /// What made it unparsable.
        reason: String,
    },

    /// A numeric scalar literal is neither 0 nor 1.
    #[error("numeric literal {value} is not a logic level (expected 0 or 1)")]
    OutOfDomainValue {
        /// The rejected value.
        value: i64,
    },

    /// The literal requests a state the active domain cannot represent.
    #[error("literal `{text}` uses `{digit}`, which the {domain} domain cannot represent")]
    UnsupportedValueInDomain {
        /// The offending literal text.
        text: String,
        /// The X/Z digit that was found.
        digit: char,
        /// Name of the active domain.
        domain: &'static str,
    },

    /// Two vector operands have different widths.
    #[error("width mismatch: {left} vs {right}")]
    WidthMismatch {
        /// Width of the left operand.
        left: u32,
        /// Width of the right operand.
        right: u32,
    },

    /// An element index is outside the vector.
    #[error("index {index} out of range for width {width}")]
    IndexOutOfRange {
        /// The requested index.
        index: u32,
        /// The vector width.
        width: u32,
    },

    /// A vector was requested with width 0.
    #[error("vector width must be at least 1")]
    ZeroWidth,

    /// More elements than a vector width (`u32`) can count.
    #[error("{elements} elements exceed the maximum vector width of {}", u32::MAX)]
    WidthOverflow {
        /// The number of elements supplied.
        elements: usize,
    },
}

impl LogicError {
    /// The diagnostic code reported for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LogicError::InvalidLiteralSyntax { .. } => DiagnosticCode::INVALID_LITERAL_SYNTAX,
            LogicError::OutOfDomainValue { .. } => DiagnosticCode::OUT_OF_DOMAIN_REJECTED,
            LogicError::UnsupportedValueInDomain { .. } => {
                DiagnosticCode::UNSUPPORTED_VALUE_IN_DOMAIN
            }
            LogicError::WidthMismatch { .. }
            | LogicError::IndexOutOfRange { .. }
            | LogicError::ZeroWidth
            | LogicError::WidthOverflow { .. } => DiagnosticCode::VECTOR_SHAPE,
        }
    }

    /// Converts the error into an error-severity diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code(), self.to_string());
        match self {
            LogicError::InvalidLiteralSyntax { text, .. } => diag.with_subject(text.clone()),
            LogicError::UnsupportedValueInDomain { text, .. } => diag
                .with_subject(text.clone())
                .with_help("build with the `four-state` feature to use X and Z"),
            LogicError::OutOfDomainValue { value } => diag.with_subject(value.to_string()),
            _ => diag,
        }
    }

    pub(crate) fn syntax(text: &str, reason: impl Into<String>) -> Self {
        LogicError::InvalidLiteralSyntax {
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}
