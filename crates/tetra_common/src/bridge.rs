//! Conversion between logic vectors and two's-complement integers.
//!
//! [`project`] maps a [`LogicVec`] to a [`TwosComplement`] mirror of the same
//! width: `Low -> 0`, `High -> 1`, and both `Undefined` and `HighImpedance`
//! `-> 1`. The rule is lossy and applied without any check; callers decide
//! with [`LogicVec::has_xz`] first (or use [`project_checked`]). [`lift`]
//! goes back and only ever produces `Low`/`High` elements.

use crate::error::{LogicError, LogicResult};
use crate::logic::{Logic, LOGICAL_ONE};
use crate::logic_vec::LogicVec;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive};
use std::fmt;

/// A `width`-bit two's-complement integer.
///
/// The bit pattern is kept as an unsigned value in `0..2^width`; all
/// arithmetic wraps modulo `2^width`. Widths are unbounded.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TwosComplement {
    width: u32,
    bits: BigUint,
}

impl TwosComplement {
    /// Creates a mirror from an unsigned bit pattern, keeping the low `width` bits.
    pub fn from_unsigned(value: BigUint, width: u32) -> LogicResult<Self> {
        if width == 0 {
            return Err(LogicError::ZeroWidth);
        }
        let bits = value % modulus(width);
        Ok(Self { width, bits })
    }

    /// Creates a mirror from a signed value, wrapping modulo `2^width`.
    pub fn from_bigint(value: &BigInt, width: u32) -> LogicResult<Self> {
        if width == 0 {
            return Err(LogicError::ZeroWidth);
        }
        let m = BigInt::from(modulus(width));
        let reduced = ((value % &m) + &m) % &m;
        Ok(Self {
            width,
            bits: reduced.magnitude().clone(),
        })
    }

    /// Creates a mirror from an `i128`, wrapping modulo `2^width`.
    pub fn from_i128(value: i128, width: u32) -> LogicResult<Self> {
        Self::from_bigint(&BigInt::from(value), width)
    }

    /// Creates a mirror from a `u64`, keeping the low `width` bits.
    pub fn from_u64(value: u64, width: u32) -> LogicResult<Self> {
        Self::from_unsigned(BigUint::from(value), width)
    }

    /// Bit width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The bit pattern read as an unsigned number.
    pub fn unsigned(&self) -> &BigUint {
        &self.bits
    }

    /// The bit pattern read as a signed two's-complement number.
    pub fn signed(&self) -> BigInt {
        let unsigned = BigInt::from(self.bits.clone());
        if self.sign_bit() {
            unsigned - BigInt::from(modulus(self.width))
        } else {
            unsigned
        }
    }

    /// Unsigned value, if it fits in a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        self.bits.to_u64()
    }

    /// Signed value, if it fits in an `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        self.signed().to_i64()
    }

    /// Returns `true` when the most significant bit is set.
    pub fn sign_bit(&self) -> bool {
        bit(&self.bits.to_bytes_le(), self.width - 1)
    }

    /// Wrapping addition.
    pub fn add(&self, rhs: &Self) -> LogicResult<Self> {
        self.check_width(rhs)?;
        Ok(self.wrap(&self.bits + &rhs.bits))
    }

    /// Wrapping subtraction.
    pub fn sub(&self, rhs: &Self) -> LogicResult<Self> {
        self.check_width(rhs)?;
        Ok(self.wrap(&self.bits + modulus(self.width) - &rhs.bits))
    }

    /// Wrapping multiplication.
    pub fn mul(&self, rhs: &Self) -> LogicResult<Self> {
        self.check_width(rhs)?;
        Ok(self.wrap(&self.bits * &rhs.bits))
    }

    /// Two's-complement negation. `-MIN == MIN`, as in hardware.
    pub fn negate(&self) -> Self {
        self.wrap(modulus(self.width) - &self.bits)
    }

    fn wrap(&self, value: BigUint) -> Self {
        Self {
            width: self.width,
            bits: value % modulus(self.width),
        }
    }

    fn check_width(&self, rhs: &Self) -> LogicResult<()> {
        if self.width != rhs.width {
            return Err(LogicError::WidthMismatch {
                left: self.width,
                right: rhs.width,
            });
        }
        Ok(())
    }
}

impl fmt::Display for TwosComplement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'d{}", self.width, self.bits)
    }
}

/// Projects a vector onto a two's-complement integer of the same width.
///
/// `Undefined` and `HighImpedance` elements project to 1, so `"XXZZ"` and
/// `"1111"` both give 15. No gating happens here.
pub fn project(vector: &LogicVec) -> TwosComplement {
    let mut bytes = vec![0u8; vector.width().div_ceil(8) as usize];
    for (i, value) in vector.iter().enumerate() {
        if projects_to_one(value) {
            bytes[i / 8] |= 1 << (i % 8);
        }
    }
    TwosComplement {
        width: vector.width(),
        bits: BigUint::from_bytes_le(&bytes),
    }
}

/// Gated projection: `None` if the vector holds any X or Z.
pub fn project_checked(vector: &LogicVec) -> Option<TwosComplement> {
    if vector.has_xz() {
        None
    } else {
        Some(project(vector))
    }
}

/// Lifts a mirror back into a vector of `Low`/`High` elements.
pub fn lift(mirror: &TwosComplement) -> LogicVec {
    let bytes = mirror.bits.to_bytes_le();
    let mut vector = LogicVec::zeroed(mirror.width);
    for i in 0..mirror.width {
        if bit(&bytes, i) {
            vector.write(i, LOGICAL_ONE);
        }
    }
    vector
}

/// Encodes `value` as a `width`-bit two's-complement vector.
pub fn lift_int(value: i128, width: u32) -> LogicResult<LogicVec> {
    Ok(lift(&TwosComplement::from_i128(value, width)?))
}

fn projects_to_one(value: Logic) -> bool {
    match value {
        Logic::Low => false,
        Logic::High => true,
        #[cfg(feature = "four-state")]
        Logic::Undefined | Logic::HighImpedance => true,
    }
}

fn modulus(width: u32) -> BigUint {
    BigUint::one() << width as usize
}

fn bit(bytes_le: &[u8], index: u32) -> bool {
    bytes_le
        .get((index / 8) as usize)
        .is_some_and(|b| (b >> (index % 8)) & 1 != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mirror(value: i128, width: u32) -> TwosComplement {
        TwosComplement::from_i128(value, width).unwrap()
    }

    #[test]
    fn lift_then_project_roundtrips() {
        for width in [1u32, 3, 4, 8] {
            for n in 0..(1u64 << width) {
                let m = TwosComplement::from_u64(n, width).unwrap();
                let v = lift(&m);
                assert_eq!(v.width(), width);
                assert!(!v.has_xz());
                assert_eq!(project(&v).to_u64(), Some(n), "width {width}, n {n}");
            }
        }
    }

    #[test]
    fn wide_roundtrip() {
        let value = (BigUint::one() << 150usize) + BigUint::from(12345u32);
        let m = TwosComplement::from_unsigned(value.clone(), 200).unwrap();
        assert_eq!(project(&lift(&m)).unsigned(), &value);
    }

    #[test]
    fn lift_int_encodes_negative_values() {
        assert_eq!(lift_int(-1, 4).unwrap().to_string(), "1111");
        assert_eq!(lift_int(-3, 4).unwrap().to_string(), "1101");
        assert_eq!(lift_int(5, 4).unwrap().to_string(), "0101");
        assert_eq!(lift_int(0x1F, 4).unwrap().to_string(), "1111");
        assert_eq!(lift_int(1, 0), Err(LogicError::ZeroWidth));
    }

    #[test]
    fn signed_and_unsigned_views() {
        let m = mirror(-3, 4);
        assert_eq!(m.to_u64(), Some(13));
        assert_eq!(m.to_i64(), Some(-3));
        assert!(m.sign_bit());
        assert_eq!(mirror(7, 4).to_i64(), Some(7));
        assert!(!mirror(7, 4).sign_bit());
    }

    #[test]
    fn wrapping_arithmetic() {
        let a = mirror(7, 4);
        let b = mirror(10, 4);
        assert_eq!(a.add(&b).unwrap().to_u64(), Some(1));
        assert_eq!(a.sub(&b).unwrap().to_u64(), Some(13));
        assert_eq!(a.sub(&b).unwrap().to_i64(), Some(-3));
        assert_eq!(a.mul(&b).unwrap().to_u64(), Some(6));
        assert_eq!(a.negate().to_i64(), Some(-7));
        assert_eq!(mirror(-8, 4).negate().to_i64(), Some(-8));
        assert_eq!(mirror(0, 4).negate().to_u64(), Some(0));
    }

    #[test]
    fn arithmetic_width_mismatch() {
        assert_eq!(
            mirror(1, 4).add(&mirror(1, 8)),
            Err(LogicError::WidthMismatch { left: 4, right: 8 })
        );
    }

    #[test]
    fn display() {
        assert_eq!(mirror(-1, 8).to_string(), "8'd255");
    }

    #[test]
    fn project_checked_passes_determinate_vectors() {
        let v = LogicVec::from_binary_str("1010").unwrap();
        assert_eq!(project_checked(&v).and_then(|m| m.to_u64()), Some(10));
    }

    #[cfg(feature = "four-state")]
    mod four_state {
        use super::*;

        #[test]
        fn indeterminate_bits_project_to_one() {
            let xz = LogicVec::from_binary_str("XXZZ").unwrap();
            let ones = LogicVec::from_binary_str("1111").unwrap();
            assert_eq!(project(&xz), project(&ones));
            assert_eq!(project(&xz).to_u64(), Some(15));

            let mixed = LogicVec::from_binary_str("0X0Z").unwrap();
            assert_eq!(project(&mixed).to_u64(), Some(0b0101));
        }

        #[test]
        fn lift_never_restores_indeterminate_bits() {
            let xz = LogicVec::from_binary_str("1XZ0").unwrap();
            let back = lift(&project(&xz));
            assert_eq!(back.to_string(), "1110");
            assert!(!back.has_xz());
        }

        #[test]
        fn gate_rejects_indeterminate_vectors() {
            let xz = LogicVec::from_binary_str("10Z1").unwrap();
            assert!(xz.has_xz());
            assert!(project_checked(&xz).is_none());
        }
    }
}
