//! Conversion of integer, string and boolean literals into logic values.
//!
//! String literals follow this grammar (case-insensitive):
//!
//! ```text
//! literal := '-'? prefix? digits
//! prefix  := '0b' | '0o' | '0d' | '0x' | '0'        ('0' + digits = legacy octal)
//! digits  := digit (digit | '_')*
//! ```
//!
//! Without a prefix the digits are decimal. `X` and `Z` may stand in any
//! binary, octal or hex digit position, covering 1, 3 or 4 bits. In a decimal
//! literal a lone `X` or `Z` sets every bit. Both are only accepted when the
//! quaternary domain is active.
//!
//! A literal wider than its target keeps the low bits and reports
//! [`DiagnosticCode::LITERAL_TRUNCATED`]. A narrower one is zero-extended,
//! unless its most significant digit is `X`/`Z`, which is repeated instead.

use crate::bridge::{lift, TwosComplement};
use crate::error::{LogicError, LogicResult};
use crate::logic::{Logic, LOGICAL_ONE, LOGICAL_ZERO};
use crate::logic_vec::LogicVec;
use num_bigint::{BigInt, BigUint, Sign};
use serde::{Deserialize, Serialize};
use tetra_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};

/// A literal aimed at a [`LogicVec`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Literal<'a> {
    /// A two's-complement integer.
    Int(i128),
    /// A radix-prefixed digit string such as `"0b10xz"` or `"0xff"`.
    Text(&'a str),
    /// `false`/`true`, as bit 0 of the target.
    Bool(bool),
}

/// A literal aimed at a single [`Logic`] bit.
///
/// Characters and floating-point numbers are not part of the scalar literal
/// grammar and have no variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarLiteral {
    /// A numeric literal; only 0 and 1 name a logic level.
    Int(i64),
    /// `false`/`true`.
    Bool(bool),
}

impl From<bool> for ScalarLiteral {
    fn from(value: bool) -> Self {
        ScalarLiteral::Bool(value)
    }
}

impl From<i64> for ScalarLiteral {
    fn from(value: i64) -> Self {
        ScalarLiteral::Int(value)
    }
}

impl From<i32> for ScalarLiteral {
    fn from(value: i32) -> Self {
        ScalarLiteral::Int(i64::from(value))
    }
}

/// What happens to a numeric scalar literal outside `{0, 1}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfDomainPolicy {
    /// Quaternary domain: substitute `Undefined` and emit a `W101` warning.
    #[default]
    Tolerant,
    /// Always fail with [`LogicError::OutOfDomainValue`].
    Strict,
}

/// Options controlling literal conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Handling of numeric scalar literals outside `{0, 1}`.
    pub out_of_domain: OutOfDomainPolicy,
}

impl ParseOptions {
    /// Options that turn every soft scalar failure into an error.
    pub fn strict() -> Self {
        Self {
            out_of_domain: OutOfDomainPolicy::Strict,
        }
    }
}

/// Converts literals into logic values under a fixed set of [`ParseOptions`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LiteralParser {
    options: ParseOptions,
}

impl LiteralParser {
    /// Creates a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// The options this parser was built with.
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Converts a scalar literal.
    ///
    /// `0`/`1`/`false`/`true` map to [`LOGICAL_ZERO`]/[`LOGICAL_ONE`]. Any
    /// other integer is [`LogicError::OutOfDomainValue`], except in the
    /// quaternary domain with the tolerant policy, where the result is
    /// `Undefined` and a warning goes to `sink`.
    pub fn parse_scalar(
        &self,
        literal: ScalarLiteral,
        sink: &DiagnosticSink,
    ) -> LogicResult<Logic> {
        match literal {
            ScalarLiteral::Bool(b) => Ok(Logic::from_bool(b)),
            ScalarLiteral::Int(0) => Ok(LOGICAL_ZERO),
            ScalarLiteral::Int(1) => Ok(LOGICAL_ONE),
            ScalarLiteral::Int(value) => self.out_of_domain(value, sink),
        }
    }

    #[cfg(feature = "four-state")]
    fn out_of_domain(&self, value: i64, sink: &DiagnosticSink) -> LogicResult<Logic> {
        match self.options.out_of_domain {
            OutOfDomainPolicy::Strict => Err(LogicError::OutOfDomainValue { value }),
            OutOfDomainPolicy::Tolerant => {
                sink.emit(
                    Diagnostic::warning(
                        DiagnosticCode::OUT_OF_DOMAIN_VALUE,
                        format!("numeric literal {value} is not a logic level"),
                    )
                    .with_subject(value.to_string())
                    .with_note("the bit was set to X")
                    .with_help("assign 0 or 1, or use a vector literal for multi-bit values"),
                );
                Ok(Logic::Undefined)
            }
        }
    }

    // The boolean domain has no state to fall back to.
    #[cfg(not(feature = "four-state"))]
    fn out_of_domain(&self, value: i64, _sink: &DiagnosticSink) -> LogicResult<Logic> {
        Err(LogicError::OutOfDomainValue { value })
    }

    /// Converts a literal into a vector of `width` elements.
    pub fn parse_vector(
        &self,
        literal: Literal<'_>,
        width: u32,
        sink: &DiagnosticSink,
    ) -> LogicResult<LogicVec> {
        if width == 0 {
            return Err(LogicError::ZeroWidth);
        }
        match literal {
            Literal::Bool(b) => {
                let mut v = LogicVec::new(width)?;
                v.write(0, Logic::from_bool(b));
                Ok(v)
            }
            Literal::Int(n) => fit_integer(&BigInt::from(n), width, &n.to_string(), sink),
            Literal::Text(text) => parse_text(text, width, sink),
        }
    }
}

/// [`LiteralParser::parse_scalar`] with default (tolerant) options.
pub fn parse_scalar(
    literal: impl Into<ScalarLiteral>,
    sink: &DiagnosticSink,
) -> LogicResult<Logic> {
    LiteralParser::default().parse_scalar(literal.into(), sink)
}

/// [`LiteralParser::parse_vector`] with default options.
pub fn parse_vector(
    literal: Literal<'_>,
    width: u32,
    sink: &DiagnosticSink,
) -> LogicResult<LogicVec> {
    LiteralParser::default().parse_vector(literal, width, sink)
}

/// Maps an `x`/`z` digit of `text` to its state, or rejects it in the boolean domain.
///
/// `digit` must be one of `x`, `X`, `z`, `Z`.
#[cfg(feature = "four-state")]
pub(crate) fn indeterminate_digit(digit: char, _text: &str) -> LogicResult<Logic> {
    match digit {
        'x' | 'X' => Ok(Logic::Undefined),
        _ => Ok(Logic::HighImpedance),
    }
}

/// Maps an `x`/`z` digit of `text` to its state, or rejects it in the boolean domain.
#[cfg(not(feature = "four-state"))]
pub(crate) fn indeterminate_digit(digit: char, text: &str) -> LogicResult<Logic> {
    Err(LogicError::UnsupportedValueInDomain {
        text: text.to_string(),
        digit,
        domain: crate::Domain::ACTIVE.name(),
    })
}

fn is_indeterminate_char(c: char) -> bool {
    matches!(c, 'x' | 'X' | 'z' | 'Z')
}

/// Splits an optional radix prefix off `body`.
fn split_radix(body: &str) -> (u32, &str) {
    let bytes = body.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'b' | b'B' => return (2, &body[2..]),
            b'o' | b'O' => return (8, &body[2..]),
            b'd' | b'D' => return (10, &body[2..]),
            b'x' | b'X' => return (16, &body[2..]),
            _ => return (8, &body[1..]),
        }
    }
    (10, body)
}

fn parse_text(text: &str, width: u32, sink: &DiagnosticSink) -> LogicResult<LogicVec> {
    if text.is_empty() {
        return Err(LogicError::syntax(text, "empty literal"));
    }
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (radix, raw_digits) = split_radix(body);

    if raw_digits.is_empty() {
        return Err(LogicError::syntax(text, "missing digits"));
    }
    if raw_digits.starts_with('_') {
        return Err(LogicError::syntax(text, "digits cannot start with `_`"));
    }
    let digits: Vec<char> = raw_digits.chars().filter(|&c| c != '_').collect();

    // Grammar first, with X/Z accepted as a digit of any radix, so that a
    // malformed literal is a syntax error in both domains.
    if let Some(&c) = digits
        .iter()
        .find(|&&c| !is_indeterminate_char(c) && c.to_digit(radix).is_none())
    {
        return Err(LogicError::syntax(
            text,
            format!("digit `{c}` is not valid in radix {radix}"),
        ));
    }

    let Some(&first_xz) = digits.iter().find(|&&c| is_indeterminate_char(c)) else {
        let digit_str: String = digits.iter().collect();
        let magnitude = BigUint::parse_bytes(digit_str.as_bytes(), radix)
            .ok_or_else(|| LogicError::syntax(text, "malformed digits"))?;
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        return fit_integer(&BigInt::from_biguint(sign, magnitude), width, text, sink);
    };

    if negative {
        return Err(LogicError::syntax(text, "a sign cannot be combined with X/Z digits"));
    }
    if radix == 10 && digits.len() != 1 {
        return Err(LogicError::syntax(
            text,
            "X/Z in a decimal literal must be the only digit",
        ));
    }

    // Well-formed; whether X/Z exist at all depends on the domain.
    let state = indeterminate_digit(first_xz, text)?;

    let elements = match radix {
        10 => vec![state],
        _ => expand_digits(&digits, radix, text)?,
    };
    fit_elements(elements, width, text, sink)
}

/// Expands binary/octal/hex digits into LSB-first elements.
fn expand_digits(digits: &[char], radix: u32, text: &str) -> LogicResult<Vec<Logic>> {
    let bits_per_digit = radix.trailing_zeros();
    let mut elements = Vec::with_capacity(digits.len() * bits_per_digit as usize);
    for &c in digits.iter().rev() {
        if is_indeterminate_char(c) {
            let state = indeterminate_digit(c, text)?;
            elements.extend(std::iter::repeat(state).take(bits_per_digit as usize));
            continue;
        }
        let value = c.to_digit(radix).ok_or_else(|| {
            LogicError::syntax(text, format!("digit `{c}` is not valid in radix {radix}"))
        })?;
        for bit in 0..bits_per_digit {
            elements.push(Logic::from_bool(value & (1 << bit) != 0));
        }
    }
    Ok(elements)
}

/// Fits LSB-first elements into `width`, extending with the top X/Z or `Low`.
fn fit_elements(
    mut elements: Vec<Logic>,
    width: u32,
    text: &str,
    sink: &DiagnosticSink,
) -> LogicResult<LogicVec> {
    let len = width as usize;
    let top = elements.last().copied().unwrap_or(LOGICAL_ZERO);
    if elements.len() > len {
        let significant = elements
            .iter()
            .rposition(|&v| v != LOGICAL_ZERO)
            .map_or(0, |i| i + 1);
        if significant > len {
            report_truncation(significant as u64, width, text, sink);
        }
        elements.truncate(len);
    } else {
        let fill = if top.is_indeterminate() { top } else { LOGICAL_ZERO };
        elements.resize(len, fill);
    }
    LogicVec::from_bits(&elements)
}

/// Encodes a signed integer as `width`-bit two's complement.
fn fit_integer(
    value: &BigInt,
    width: u32,
    text: &str,
    sink: &DiagnosticSink,
) -> LogicResult<LogicVec> {
    let significant = required_width(value);
    if significant > u64::from(width) {
        report_truncation(significant, width, text, sink);
    }
    Ok(lift(&TwosComplement::from_bigint(value, width)?))
}

/// Bits needed to hold `value` at the target width without changing it.
///
/// Non-negative values count their magnitude bits only, so `0xF` fills a
/// 4-bit target exactly. Negative values need a sign bit: `-8` fits in 4
/// bits, `-9` needs 5.
fn required_width(value: &BigInt) -> u64 {
    if value.sign() == Sign::Minus {
        (value.magnitude() - BigUint::from(1u32)).bits() + 1
    } else {
        value.magnitude().bits()
    }
}

fn report_truncation(significant: u64, width: u32, text: &str, sink: &DiagnosticSink) {
    sink.emit(
        Diagnostic::warning(
            DiagnosticCode::LITERAL_TRUNCATED,
            format!("literal needs {significant} bits but the target is {width} bits wide"),
        )
        .with_subject(text)
        .with_note(format!("only the low {width} bits were kept")),
    );
}
