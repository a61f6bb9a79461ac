//! Structured diagnostics for the Tetra logic value layer.
//!
//! Soft failures (a literal that had to be substituted or truncated) are not
//! propagated as errors. They are reported as [`Diagnostic`]s into a
//! thread-safe [`DiagnosticSink`] and the operation continues. A
//! [`DiagnosticRenderer`] formats them for a terminal.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
