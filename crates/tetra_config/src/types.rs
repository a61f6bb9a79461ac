//! Configuration types deserialized from `tetra.toml`.

use serde::Deserialize;
use tetra_common::{OutOfDomainPolicy, ParseOptions, TwosComplement};

/// The top-level configuration parsed from `tetra.toml`. Every section is optional.
#[derive(Debug, Default, Deserialize)]
pub struct TetraConfig {
    /// Literal conversion settings.
    #[serde(default)]
    pub literals: LiteralSettings,
    /// Value display settings.
    #[serde(default)]
    pub display: DisplaySettings,
}

/// The `[literals]` section.
#[derive(Debug, Default, Deserialize)]
pub struct LiteralSettings {
    /// Handling of numeric scalar literals outside `{0, 1}`.
    #[serde(default)]
    pub out_of_domain: OutOfDomainPolicy,
}

impl LiteralSettings {
    /// Converts the section into parser options.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            out_of_domain: self.out_of_domain,
        }
    }
}

/// The `[display]` section.
#[derive(Debug, Default, Deserialize)]
pub struct DisplaySettings {
    /// Radix used to print projected integers.
    #[serde(default)]
    pub radix: DisplayRadix,
    /// Insert `_` every `group` digits, counted from the least significant.
    #[serde(default)]
    pub group: Option<u32>,
}

/// Radix for printing projected integers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayRadix {
    /// `0b`-prefixed, zero-padded to the full width (default).
    #[default]
    Binary,
    /// `0x`-prefixed, zero-padded to the full width.
    Hex,
    /// Unsigned decimal.
    Decimal,
}

impl DisplaySettings {
    /// Formats a projected value according to these settings.
    pub fn format(&self, value: &TwosComplement) -> String {
        let (prefix, digits) = match self.radix {
            DisplayRadix::Binary => {
                let width = value.width() as usize;
                ("0b", pad(value.unsigned().to_str_radix(2), width))
            }
            DisplayRadix::Hex => {
                let width = value.width().div_ceil(4) as usize;
                ("0x", pad(value.unsigned().to_str_radix(16), width))
            }
            DisplayRadix::Decimal => ("", value.unsigned().to_str_radix(10)),
        };
        match self.group {
            Some(n) if n > 0 => format!("{prefix}{}", group_digits(&digits, n as usize)),
            _ => format!("{prefix}{digits}"),
        }
    }
}

fn pad(digits: String, width: usize) -> String {
    format!("{digits:0>width$}")
}

fn group_digits(digits: &str, n: usize) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / n);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % n == 0 {
            out.push('_');
        }
        out.push(*c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mirror(value: u64, width: u32) -> TwosComplement {
        TwosComplement::from_u64(value, width).unwrap()
    }

    #[test]
    fn binary_is_padded_to_width() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.format(&mirror(5, 8)), "0b00000101");
    }

    #[test]
    fn hex_and_decimal() {
        let hex = DisplaySettings {
            radix: DisplayRadix::Hex,
            group: None,
        };
        assert_eq!(hex.format(&mirror(0xA5, 12)), "0x0a5");
        let dec = DisplaySettings {
            radix: DisplayRadix::Decimal,
            group: None,
        };
        assert_eq!(dec.format(&mirror(1000, 16)), "1000");
    }

    #[test]
    fn grouping() {
        let settings = DisplaySettings {
            radix: DisplayRadix::Binary,
            group: Some(4),
        };
        assert_eq!(settings.format(&mirror(0xA5, 8)), "0b1010_0101");
        assert_eq!(settings.format(&mirror(5, 6)), "0b00_0101");
    }

    #[test]
    fn literal_settings_to_options() {
        let settings = LiteralSettings {
            out_of_domain: OutOfDomainPolicy::Strict,
        };
        assert_eq!(settings.parse_options(), ParseOptions::strict());
        assert_eq!(
            LiteralSettings::default().parse_options(),
            ParseOptions::default()
        );
    }
}
