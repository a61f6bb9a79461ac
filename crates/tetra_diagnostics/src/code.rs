//! Diagnostic codes with category prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Hard failures, prefixed with `E`.
    Error,
    /// Soft failures that substituted or adjusted a value, prefixed with `W`.
    Warning,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
        }
    }
}

/// A diagnostic code: category prefix plus a zero-padded 3-digit number (`W101`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }

    /// A numeric scalar literal outside `{0, 1}` was replaced by `Undefined`.
    pub const OUT_OF_DOMAIN_VALUE: Self = Self::new(Category::Warning, 101);

    /// A literal had more significant bits than its target width.
    pub const LITERAL_TRUNCATED: Self = Self::new(Category::Warning, 102);

    /// A literal did not match any recognized grammar.
    pub const INVALID_LITERAL_SYNTAX: Self = Self::new(Category::Error, 101);

    /// A literal requested a state the active domain cannot represent.
    pub const UNSUPPORTED_VALUE_IN_DOMAIN: Self = Self::new(Category::Error, 102);

    /// A vector operation was applied to operands of inconsistent shape.
    pub const VECTOR_SHAPE: Self = Self::new(Category::Error, 103);

    /// A numeric scalar literal outside `{0, 1}` was rejected outright.
    pub const OUT_OF_DOMAIN_REJECTED: Self = Self::new(Category::Error, 104);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_prefixes() {
        assert_eq!(Category::Error.prefix(), 'E');
        assert_eq!(Category::Warning.prefix(), 'W');
    }

    #[test]
    fn display_format() {
        assert_eq!(DiagnosticCode::OUT_OF_DOMAIN_VALUE.to_string(), "W101");
        assert_eq!(DiagnosticCode::LITERAL_TRUNCATED.to_string(), "W102");
        assert_eq!(DiagnosticCode::INVALID_LITERAL_SYNTAX.to_string(), "E101");
        assert_eq!(DiagnosticCode::new(Category::Warning, 7).to_string(), "W007");
    }

    #[test]
    fn serde_roundtrip() {
        let code = DiagnosticCode::UNSUPPORTED_VALUE_IN_DOMAIN;
        let json = serde_json::to_string(&code).unwrap();
        let back: DiagnosticCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, back);
    }
}
