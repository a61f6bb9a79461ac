//! Logic values for the Tetra HDL toolkit.
//!
//! A single bit type, [`Logic`], is backed at build time by either the boolean
//! domain (`{0, 1}`) or the quaternary IEEE 1164 domain (`{0, 1, X, Z}`); see
//! [`domain`]. On top of it sit the packed [`LogicVec`], the
//! [`literal`] parser, the [`bridge`] to two's-complement integers and the
//! scalar-only [`logical_not`].

#![warn(missing_docs)]

pub mod bridge;
pub mod domain;
pub mod error;
pub mod literal;
pub mod logic;
pub mod logic_vec;
pub mod negation;

pub use bridge::{lift, lift_int, project, project_checked, TwosComplement};
pub use domain::Domain;
pub use error::{LogicError, LogicResult};
pub use literal::{
    parse_scalar, parse_vector, Literal, LiteralParser, OutOfDomainPolicy, ParseOptions,
    ScalarLiteral,
};
pub use logic::{Logic, LOGICAL_ONE, LOGICAL_ZERO};
pub use logic_vec::{has_xz, LogicVec};
pub use negation::logical_not;
