//! Logical negation of a single bit.

use crate::logic::Logic;

/// Logical NOT of one bit.
///
/// Boolean domain: `Low <-> High`. Quaternary domain: `Low <-> High`,
/// `Undefined -> Undefined` and `HighImpedance -> Undefined`.
///
/// Only scalars are accepted. Vector-wide bitwise complement is a different
/// operation (`!&vector`), so this does not compile:
///
/// ```compile_fail
/// use tetra_common::{logical_not, LogicVec};
/// let v = LogicVec::all_one(4).unwrap();
/// let _ = logical_not(v);
/// ```
pub fn logical_not(value: Logic) -> Logic {
    match value {
        Logic::Low => Logic::High,
        Logic::High => Logic::Low,
        #[cfg(feature = "four-state")]
        Logic::Undefined | Logic::HighImpedance => Logic::Undefined,
    }
}
