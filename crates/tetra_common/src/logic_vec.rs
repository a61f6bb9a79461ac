//! Packed fixed-width vectors of logic values.

use crate::error::{LogicError, LogicResult};
use crate::literal;
use crate::logic::{Logic, LOGICAL_ONE, LOGICAL_ZERO};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Not;

/// A fixed-width vector of [`Logic`] values, index 0 = least-significant bit.
///
/// Values are packed `Logic::BITS` bits apiece into `u64` words: 64 per word
/// in the boolean domain, 32 per word in the quaternary domain. Bits of the
/// last word beyond `width` are always zero.
///
/// The width is fixed at construction and is at least 1. Vectors serialize as
/// their MSB-first display string, e.g. `"10XZ"`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogicVec {
    width: u32,
    data: Vec<u64>,
}

/// Number of logic values packed per u64 word.
const VALUES_PER_WORD: u32 = 64 / Logic::BITS;

/// Mask selecting one packed value.
const VALUE_MASK: u64 = (1 << Logic::BITS) - 1;

/// Bit pattern with the high bit of every 2-bit slot set; X and Z codes have it.
#[cfg(feature = "four-state")]
const INDETERMINATE_MASK: u64 = 0xAAAA_AAAA_AAAA_AAAA;

impl LogicVec {
    /// Creates a vector of the given width, initialized to all `Low`.
    pub fn new(width: u32) -> LogicResult<Self> {
        if width == 0 {
            return Err(LogicError::ZeroWidth);
        }
        Ok(Self {
            width,
            data: vec![0; word_count(width)],
        })
    }

    /// Zero-filled vector for a width the caller has already validated.
    pub(crate) fn zeroed(width: u32) -> Self {
        debug_assert!(width > 0);
        Self {
            width,
            data: vec![0; word_count(width)],
        }
    }

    /// Creates a vector with every element set to `value`.
    pub fn filled(width: u32, value: Logic) -> LogicResult<Self> {
        let mut v = Self::new(width)?;
        if value != LOGICAL_ZERO {
            for i in 0..width {
                v.write(i, value);
            }
        }
        Ok(v)
    }

    /// Creates a vector with all bits `Low`.
    pub fn all_zero(width: u32) -> LogicResult<Self> {
        Self::new(width)
    }

    /// Creates a vector with all bits `High`.
    pub fn all_one(width: u32) -> LogicResult<Self> {
        Self::filled(width, LOGICAL_ONE)
    }

    /// Builds a vector element-wise; `bits[0]` becomes the LSB.
    pub fn from_bits(bits: &[Logic]) -> LogicResult<Self> {
        let mut v = Self::new(element_count(bits.len())?)?;
        for (i, &bit) in (0u32..).zip(bits) {
            v.write(i, bit);
        }
        Ok(v)
    }

    /// Creates a single-bit vector from a boolean value.
    pub fn from_bool(value: bool) -> Self {
        Self {
            width: 1,
            data: vec![u64::from(value)],
        }
    }

    /// Creates a vector from the low `width` bits of `value`.
    ///
    /// Bits above 64 are `Low`.
    pub fn from_u64(value: u64, width: u32) -> LogicResult<Self> {
        let mut v = Self::new(width)?;
        for i in 0..width.min(64) {
            if (value >> i) & 1 != 0 {
                v.write(i, LOGICAL_ONE);
            }
        }
        Ok(v)
    }

    /// Parses an MSB-first string of `0`, `1`, `X` and `Z` digits like `"10XZ"`.
    ///
    /// The width is the number of digits. `X`/`Z` are rejected with
    /// [`LogicError::UnsupportedValueInDomain`] in the boolean domain.
    pub fn from_binary_str(s: &str) -> LogicResult<Self> {
        if let Some(c) = s.chars().find(|c| !matches!(c, '0' | '1' | 'x' | 'X' | 'z' | 'Z')) {
            return Err(LogicError::syntax(s, format!("unexpected character `{c}`")));
        }
        let mut v = Self::new(element_count(s.chars().count())?)?;
        for (i, c) in (0u32..).zip(s.chars().rev()) {
            let value = match c {
                '0' => LOGICAL_ZERO,
                '1' => LOGICAL_ONE,
                _ => literal::indeterminate_digit(c, s)?,
            };
            v.write(i, value);
        }
        Ok(v)
    }

    /// Returns the number of elements.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Reads the element at `index`.
    pub fn get(&self, index: u32) -> LogicResult<Logic> {
        self.check_index(index)?;
        Ok(self.read(index))
    }

    /// Writes the element at `index`.
    pub fn set(&mut self, index: u32, value: Logic) -> LogicResult<()> {
        self.check_index(index)?;
        self.write(index, value);
        Ok(())
    }

    /// Iterates elements from LSB (index 0) to MSB.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Logic> + '_ {
        (0..self.width).map(move |i| self.read(i))
    }

    /// Returns `true` if any element is `Undefined` or `HighImpedance`.
    ///
    /// This is the gate callers must consult before [`project`](crate::project).
    #[cfg(feature = "four-state")]
    pub fn has_xz(&self) -> bool {
        self.data.iter().any(|w| w & INDETERMINATE_MASK != 0)
    }

    /// Returns `true` if any element is `Undefined` or `HighImpedance`.
    ///
    /// The boolean domain has no such states, so this is always `false`.
    #[cfg(not(feature = "four-state"))]
    pub fn has_xz(&self) -> bool {
        false
    }

    /// Returns true if all bits are `Low`.
    pub fn is_all_zero(&self) -> bool {
        self.data.iter().all(|&w| w == 0)
    }

    /// Returns true if all bits are `High`.
    pub fn is_all_one(&self) -> bool {
        self.iter().all(|v| v == LOGICAL_ONE)
    }

    /// Element-wise AND.
    pub fn and(&self, rhs: &Self) -> LogicResult<Self> {
        self.zip_with(rhs, |a, b| a & b)
    }

    /// Element-wise OR.
    pub fn or(&self, rhs: &Self) -> LogicResult<Self> {
        self.zip_with(rhs, |a, b| a | b)
    }

    /// Element-wise XOR.
    pub fn xor(&self, rhs: &Self) -> LogicResult<Self> {
        self.zip_with(rhs, |a, b| a ^ b)
    }

    /// AND of all elements (Verilog `&v`).
    pub fn reduce_and(&self) -> Logic {
        self.iter().fold(LOGICAL_ONE, |acc, v| acc & v)
    }

    /// OR of all elements (Verilog `|v`).
    pub fn reduce_or(&self) -> Logic {
        self.iter().fold(LOGICAL_ZERO, |acc, v| acc | v)
    }

    /// XOR of all elements (Verilog `^v`).
    pub fn reduce_xor(&self) -> Logic {
        self.iter().fold(LOGICAL_ZERO, |acc, v| acc ^ v)
    }

    /// Bitwise complement of every element. Same as `!&v`.
    pub fn complement(&self) -> Self {
        self.map(Logic::complement)
    }

    fn zip_with(&self, rhs: &Self, op: impl Fn(Logic, Logic) -> Logic) -> LogicResult<Self> {
        if self.width != rhs.width {
            return Err(LogicError::WidthMismatch {
                left: self.width,
                right: rhs.width,
            });
        }
        let mut result = self.clone();
        for i in 0..self.width {
            result.write(i, op(self.read(i), rhs.read(i)));
        }
        Ok(result)
    }

    fn map(&self, op: impl Fn(Logic) -> Logic) -> Self {
        let mut result = self.clone();
        for i in 0..self.width {
            result.write(i, op(self.read(i)));
        }
        result
    }

    fn check_index(&self, index: u32) -> LogicResult<()> {
        if index >= self.width {
            return Err(LogicError::IndexOutOfRange {
                index,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Unchecked read; `index < width` is the caller's obligation.
    pub(crate) fn read(&self, index: u32) -> Logic {
        let (word_idx, bit_offset) = locate(index);
        Logic::from_code((self.data[word_idx] >> bit_offset) & VALUE_MASK)
    }

    /// Unchecked write; `index < width` is the caller's obligation.
    pub(crate) fn write(&mut self, index: u32, value: Logic) {
        let (word_idx, bit_offset) = locate(index);
        let mask = !(VALUE_MASK << bit_offset);
        self.data[word_idx] = (self.data[word_idx] & mask) | (value.code() << bit_offset);
    }
}

/// Converts an element count into a vector width.
fn element_count(elements: usize) -> LogicResult<u32> {
    u32::try_from(elements).map_err(|_| LogicError::WidthOverflow { elements })
}

/// Free-function form of [`LogicVec::has_xz`].
pub fn has_xz(vector: &LogicVec) -> bool {
    vector.has_xz()
}

impl fmt::Display for LogicVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.iter().rev() {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for LogicVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogicVec({self})")
    }
}

impl Not for &LogicVec {
    type Output = LogicVec;

    fn not(self) -> LogicVec {
        self.complement()
    }
}

impl Not for LogicVec {
    type Output = LogicVec;

    fn not(self) -> LogicVec {
        self.complement()
    }
}

impl From<LogicVec> for String {
    fn from(v: LogicVec) -> Self {
        v.to_string()
    }
}

impl TryFrom<String> for LogicVec {
    type Error = LogicError;

    fn try_from(s: String) -> LogicResult<Self> {
        LogicVec::from_binary_str(&s)
    }
}

/// Word index and bit offset of an element.
fn locate(index: u32) -> (usize, u32) {
    (
        (index / VALUES_PER_WORD) as usize,
        (index % VALUES_PER_WORD) * Logic::BITS,
    )
}

/// Returns the number of u64 words needed to store `width` logic values.
fn word_count(width: u32) -> usize {
    width.div_ceil(VALUES_PER_WORD) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::Logic::{High, Low};

    fn bin(s: &str) -> LogicVec {
        LogicVec::from_binary_str(s).unwrap()
    }

    #[test]
    fn element_count_is_checked() {
        assert_eq!(element_count(8), Ok(8));
        assert_eq!(element_count(u32::MAX as usize), Ok(u32::MAX));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn element_count_overflow_is_an_error() {
        let elements = u32::MAX as usize + 1;
        assert_eq!(
            element_count(elements),
            Err(LogicError::WidthOverflow { elements })
        );
    }

    #[test]
    fn binary_str_rejects_bad_characters_before_domain() {
        for s in ["1x2", "z-1", "10 1"] {
            assert!(
                matches!(
                    LogicVec::from_binary_str(s),
                    Err(LogicError::InvalidLiteralSyntax { .. })
                ),
                "{s:?} should be a syntax error"
            );
        }
    }

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(LogicVec::new(0), Err(LogicError::ZeroWidth));
        assert_eq!(LogicVec::from_bits(&[]), Err(LogicError::ZeroWidth));
        assert_eq!(LogicVec::from_binary_str(""), Err(LogicError::ZeroWidth));
    }

    #[test]
    fn new_initializes_to_zero() {
        let v = LogicVec::new(70).unwrap();
        assert_eq!(v.width(), 70);
        assert!(v.iter().all(|b| b == Low));
        assert!(v.is_all_zero());
    }

    #[test]
    fn set_get_and_bounds() {
        let mut v = LogicVec::new(4).unwrap();
        v.set(2, High).unwrap();
        assert_eq!(v.get(2), Ok(High));
        assert_eq!(v.get(3), Ok(Low));
        assert_eq!(
            v.get(4),
            Err(LogicError::IndexOutOfRange { index: 4, width: 4 })
        );
        assert_eq!(
            v.set(10, High),
            Err(LogicError::IndexOutOfRange { index: 10, width: 4 })
        );
    }

    #[test]
    fn from_bits_is_lsb_first() {
        let v = LogicVec::from_bits(&[High, Low, Low]).unwrap();
        assert_eq!(v.to_string(), "001");
    }

    #[test]
    fn from_binary_str_is_msb_first() {
        let v = bin("1000");
        assert_eq!(v.get(3), Ok(High));
        assert_eq!(v.get(0), Ok(Low));
        assert!(matches!(
            LogicVec::from_binary_str("10A1"),
            Err(LogicError::InvalidLiteralSyntax { .. })
        ));
    }

    #[test]
    fn from_u64_truncates_to_width() {
        assert_eq!(LogicVec::from_u64(0xA5, 8).unwrap().to_string(), "10100101");
        assert_eq!(LogicVec::from_u64(0xFF, 4).unwrap().to_string(), "1111");
        assert_eq!(LogicVec::from_bool(true).to_string(), "1");
    }

    #[test]
    fn bitwise_ops() {
        let a = bin("1100");
        let b = bin("1010");
        assert_eq!(a.and(&b).unwrap().to_string(), "1000");
        assert_eq!(a.or(&b).unwrap().to_string(), "1110");
        assert_eq!(a.xor(&b).unwrap().to_string(), "0110");
        assert_eq!((!&a).to_string(), "0011");
    }

    #[test]
    fn width_mismatch_is_an_error() {
        let a = bin("1100");
        let b = bin("10");
        assert_eq!(a.and(&b), Err(LogicError::WidthMismatch { left: 4, right: 2 }));
        assert_eq!(b.or(&a), Err(LogicError::WidthMismatch { left: 2, right: 4 }));
        assert!(a.xor(&b).is_err());
    }

    #[test]
    fn reductions() {
        assert_eq!(bin("1111").reduce_and(), High);
        assert_eq!(bin("1101").reduce_and(), Low);
        assert_eq!(bin("0000").reduce_or(), Low);
        assert_eq!(bin("0100").reduce_or(), High);
        assert_eq!(bin("0111").reduce_xor(), High);
        assert_eq!(bin("0110").reduce_xor(), Low);
    }

    #[test]
    fn large_width_spanning_words() {
        let mut v = LogicVec::new(200).unwrap();
        v.set(0, High).unwrap();
        v.set(131, High).unwrap();
        v.set(199, High).unwrap();
        assert_eq!(v.iter().filter(|&b| b == High).count(), 3);
        let inverted = !&v;
        assert_eq!(inverted.get(131), Ok(Low));
        assert_eq!(inverted.get(1), Ok(High));
    }

    #[test]
    fn all_one_fills_every_element() {
        let v = LogicVec::all_one(65).unwrap();
        assert!(v.is_all_one());
        assert!(!v.is_all_zero());
    }

    #[test]
    fn serde_uses_display_string() {
        let v = bin("10110");
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"10110\"");
        let back: LogicVec = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
        assert!(serde_json::from_str::<LogicVec>("\"\"").is_err());
    }

    #[cfg(not(feature = "four-state"))]
    mod two_state {
        use super::*;

        #[test]
        fn has_xz_is_always_false() {
            for width in 1..=70 {
                assert!(!LogicVec::all_one(width).unwrap().has_xz());
                assert!(!has_xz(&LogicVec::new(width).unwrap()));
            }
            assert!(!bin("1010").has_xz());
        }

        #[test]
        fn xz_digits_are_unsupported() {
            assert!(matches!(
                LogicVec::from_binary_str("10XZ"),
                Err(LogicError::UnsupportedValueInDomain { digit: 'X', .. })
            ));
        }

        #[test]
        fn packs_sixty_four_per_word() {
            assert_eq!(VALUES_PER_WORD, 64);
            assert_eq!(word_count(64), 1);
            assert_eq!(word_count(65), 2);
        }
    }

    #[cfg(feature = "four-state")]
    mod four_state {
        use super::*;
        use crate::logic::Logic::{HighImpedance, Undefined};

        #[test]
        fn stores_every_state() {
            let v = LogicVec::from_bits(&[Low, High, Undefined, HighImpedance]).unwrap();
            assert_eq!(v.get(0), Ok(Low));
            assert_eq!(v.get(1), Ok(High));
            assert_eq!(v.get(2), Ok(Undefined));
            assert_eq!(v.get(3), Ok(HighImpedance));
            assert_eq!(v.to_string(), "ZX10");
        }

        #[test]
        fn has_xz_detects_indeterminate_bits() {
            assert!(!bin("1010").has_xz());
            assert!(bin("10X0").has_xz());
            assert!(bin("Z000").has_xz());
            let mut wide = LogicVec::all_one(100).unwrap();
            assert!(!wide.has_xz());
            wide.set(99, HighImpedance).unwrap();
            assert!(has_xz(&wide));
        }

        #[test]
        fn bitwise_ops_follow_ieee_1164() {
            let a = bin("01XZ");
            let b = bin("0000");
            let c = bin("1111");
            assert_eq!(a.and(&b).unwrap().to_string(), "0000");
            assert_eq!(a.and(&c).unwrap().to_string(), "01XX");
            assert_eq!(a.or(&c).unwrap().to_string(), "1111");
            assert_eq!(a.or(&b).unwrap().to_string(), "01XX");
            assert_eq!(a.xor(&c).unwrap().to_string(), "10XX");
            assert_eq!((!&a).to_string(), "10XX");
        }

        #[test]
        fn reductions_with_unknowns() {
            assert_eq!(bin("0X11").reduce_and(), Low);
            assert_eq!(bin("1X11").reduce_and(), Undefined);
            assert_eq!(bin("1Z00").reduce_or(), High);
            assert_eq!(bin("0Z00").reduce_or(), Undefined);
            assert_eq!(bin("0Z01").reduce_xor(), Undefined);
        }

        #[test]
        fn serde_roundtrip_with_unknowns() {
            let v = bin("10XZ1010");
            let json = serde_json::to_string(&v).unwrap();
            let back: LogicVec = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }
}
