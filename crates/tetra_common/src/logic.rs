//! The single-bit logic value and its truth-table algebra.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor};

/// A single logic bit in the active [`Domain`](crate::Domain).
///
/// In the boolean domain only `Low` and `High` exist. With the `four-state`
/// feature the IEEE 1164 states `Undefined` (X) and `HighImpedance` (Z) are
/// added. Equality is structural: `Undefined` equals only `Undefined` and
/// `HighImpedance` equals only `HighImpedance`.
///
/// `Logic` deliberately has no arithmetic operators; arithmetic goes through
/// [`project`](crate::project) and [`lift`](crate::lift):
///
/// ```compile_fail
/// use tetra_common::Logic;
/// let _ = Logic::High + Logic::Low;
/// ```
///
/// There is no `!` either. Single-bit negation is
/// [`logical_not`](crate::logical_not):
///
/// ```compile_fail
/// use tetra_common::Logic;
/// let _ = !Logic::High;
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Logic {
    /// Logic low (0).
    Low = 0,
    /// Logic high (1).
    High = 1,
    /// Unknown or uninitialized (X).
    #[cfg(feature = "four-state")]
    Undefined = 2,
    /// High-impedance, not driven (Z).
    #[cfg(feature = "four-state")]
    HighImpedance = 3,
}

/// Logical false in every domain.
pub const LOGICAL_ZERO: Logic = Logic::Low;

/// Logical true in every domain.
pub const LOGICAL_ONE: Logic = Logic::High;

impl Logic {
    /// Storage bits needed per value in the active domain.
    #[cfg(feature = "four-state")]
    pub const BITS: u32 = 2;

    /// Storage bits needed per value in the active domain.
    #[cfg(not(feature = "four-state"))]
    pub const BITS: u32 = 1;

    /// Every state of the active domain, in encoding order.
    #[cfg(feature = "four-state")]
    pub const ALL: &'static [Logic] = &[
        Logic::Low,
        Logic::High,
        Logic::Undefined,
        Logic::HighImpedance,
    ];

    /// Every state of the active domain, in encoding order.
    #[cfg(not(feature = "four-state"))]
    pub const ALL: &'static [Logic] = &[Logic::Low, Logic::High];

    /// Maps `false`/`true` to [`LOGICAL_ZERO`]/[`LOGICAL_ONE`].
    pub const fn from_bool(value: bool) -> Self {
        if value {
            LOGICAL_ONE
        } else {
            LOGICAL_ZERO
        }
    }

    /// Returns the truth value for `Low`/`High`, `None` for X and Z.
    pub fn to_bool(self) -> Option<bool> {
        match self {
            Logic::Low => Some(false),
            Logic::High => Some(true),
            #[cfg(feature = "four-state")]
            Logic::Undefined | Logic::HighImpedance => None,
        }
    }

    /// Returns `true` for `Undefined` and `HighImpedance`.
    ///
    /// Always `false` in the boolean domain.
    pub fn is_indeterminate(self) -> bool {
        self.to_bool().is_none()
    }

    /// Bitwise complement of one element, as used by vector `!`.
    ///
    /// `0 -> 1`, `1 -> 0`, and in the quaternary domain `X -> X`, `Z -> X`.
    pub fn complement(self) -> Self {
        match self {
            Logic::Low => Logic::High,
            Logic::High => Logic::Low,
            #[cfg(feature = "four-state")]
            Logic::Undefined | Logic::HighImpedance => Logic::Undefined,
        }
    }

    /// The display character: `0`, `1`, `X` or `Z`.
    pub fn symbol(self) -> char {
        match self {
            Logic::Low => '0',
            Logic::High => '1',
            #[cfg(feature = "four-state")]
            Logic::Undefined => 'X',
            #[cfg(feature = "four-state")]
            Logic::HighImpedance => 'Z',
        }
    }

    /// Packed storage code. Matches the `repr(u8)` discriminant.
    pub(crate) fn code(self) -> u64 {
        self as u64
    }

    /// Inverse of [`code`](Self::code) for a value already masked to `BITS` bits.
    pub(crate) fn from_code(code: u64) -> Self {
        match code {
            0 => Logic::Low,
            #[cfg(feature = "four-state")]
            1 => Logic::High,
            #[cfg(feature = "four-state")]
            2 => Logic::Undefined,
            #[cfg(feature = "four-state")]
            _ => Logic::HighImpedance,
            #[cfg(not(feature = "four-state"))]
            _ => Logic::High,
        }
    }
}

impl From<bool> for Logic {
    fn from(value: bool) -> Self {
        Logic::from_bool(value)
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// AND truth table (Z behaves as X):
/// ```text
///     0  1  X  Z
/// 0 | 0  0  0  0
/// 1 | 0  1  X  X
/// X | 0  X  X  X
/// Z | 0  X  X  X
/// ```
impl BitAnd for Logic {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        use Logic::*;
        match (self, rhs) {
            (Low, _) | (_, Low) => Low,
            (High, High) => High,
            #[cfg(feature = "four-state")]
            _ => Undefined,
        }
    }
}

/// OR truth table (Z behaves as X):
/// ```text
///     0  1  X  Z
/// 0 | 0  1  X  X
/// 1 | 1  1  1  1
/// X | X  1  X  X
/// Z | X  1  X  X
/// ```
impl BitOr for Logic {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        use Logic::*;
        match (self, rhs) {
            (High, _) | (_, High) => High,
            (Low, Low) => Low,
            #[cfg(feature = "four-state")]
            _ => Undefined,
        }
    }
}

/// XOR truth table (any X or Z operand gives X):
/// ```text
///     0  1  X  Z
/// 0 | 0  1  X  X
/// 1 | 1  0  X  X
/// X | X  X  X  X
/// Z | X  X  X  X
/// ```
impl BitXor for Logic {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        use Logic::*;
        match (self, rhs) {
            (Low, Low) | (High, High) => Low,
            (Low, High) | (High, Low) => High,
            #[cfg(feature = "four-state")]
            _ => Undefined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Logic::*;
    use super::*;

    #[test]
    fn two_state_truth_tables() {
        assert_eq!(Low & Low, Low);
        assert_eq!(Low & High, Low);
        assert_eq!(High & High, High);
        assert_eq!(Low | Low, Low);
        assert_eq!(Low | High, High);
        assert_eq!(High | High, High);
        assert_eq!(Low ^ Low, Low);
        assert_eq!(Low ^ High, High);
        assert_eq!(High ^ High, Low);
    }

    #[test]
    fn constants_mean_false_and_true() {
        assert_eq!(LOGICAL_ZERO.to_bool(), Some(false));
        assert_eq!(LOGICAL_ONE.to_bool(), Some(true));
        assert_eq!(Logic::from(true), LOGICAL_ONE);
        assert_eq!(Logic::from_bool(false), LOGICAL_ZERO);
    }

    #[test]
    fn code_roundtrip() {
        for &value in Logic::ALL {
            assert_eq!(Logic::from_code(value.code()), value);
            assert!(value.code() < 1 << Logic::BITS);
        }
    }

    #[test]
    fn complement_of_levels() {
        assert_eq!(Low.complement(), High);
        assert_eq!(High.complement(), Low);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{Low}"), "0");
        assert_eq!(format!("{High}"), "1");
    }

    #[cfg(not(feature = "four-state"))]
    #[test]
    fn boolean_domain_has_no_indeterminate_states() {
        assert_eq!(Logic::BITS, 1);
        assert!(Logic::ALL.iter().all(|v| !v.is_indeterminate()));
    }

    #[cfg(feature = "four-state")]
    mod four_state {
        use super::*;

        #[test]
        fn and_truth_table() {
            // Zero dominates
            assert_eq!(Low & Undefined, Low);
            assert_eq!(Low & HighImpedance, Low);
            assert_eq!(Undefined & Low, Low);
            assert_eq!(HighImpedance & Low, Low);
            assert_eq!(High & Undefined, Undefined);
            assert_eq!(High & HighImpedance, Undefined);
            assert_eq!(Undefined & HighImpedance, Undefined);
            assert_eq!(HighImpedance & HighImpedance, Undefined);
        }

        #[test]
        fn or_truth_table() {
            // One dominates
            assert_eq!(High | Undefined, High);
            assert_eq!(HighImpedance | High, High);
            assert_eq!(Low | Undefined, Undefined);
            assert_eq!(Low | HighImpedance, Undefined);
            assert_eq!(Undefined | HighImpedance, Undefined);
        }

        #[test]
        fn xor_truth_table() {
            assert_eq!(Low ^ Undefined, Undefined);
            assert_eq!(High ^ Undefined, Undefined);
            assert_eq!(HighImpedance ^ Low, Undefined);
            assert_eq!(HighImpedance ^ HighImpedance, Undefined);
        }

        #[test]
        fn indeterminate_states_compare_only_to_themselves() {
            assert_eq!(Undefined, Undefined);
            assert_eq!(HighImpedance, HighImpedance);
            assert_ne!(Undefined, HighImpedance);
            assert_ne!(Undefined, High);
            assert_ne!(HighImpedance, Low);
        }

        #[test]
        fn complement_and_truth() {
            assert_eq!(Undefined.complement(), Undefined);
            assert_eq!(HighImpedance.complement(), Undefined);
            assert_eq!(Undefined.to_bool(), None);
            assert!(HighImpedance.is_indeterminate());
        }

        #[test]
        fn display_indeterminate() {
            assert_eq!(format!("{Undefined}{HighImpedance}"), "XZ");
            assert_eq!(Logic::BITS, 2);
        }
    }
}
