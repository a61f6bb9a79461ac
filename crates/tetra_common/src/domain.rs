//! Build-time selection of the logic value domain.
//!
//! The domain is chosen with cargo features on this crate:
//!
//! - `four-state`: quaternary domain, `{0, 1, X, Z}`
//! - `two-state`: boolean domain, `{0, 1}` (also the default when neither is set)
//!
//! Every domain-dependent definition in the crate is gated on the same
//! `four-state` feature, so the choice costs nothing at runtime and cannot
//! change while a process runs.

#[cfg(all(feature = "four-state", feature = "two-state"))]
compile_error!("features `four-state` and `two-state` are mutually exclusive; enable at most one");

use crate::logic::Logic;
use serde::Serialize;
use std::fmt;

/// One of the two logic value domains.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum Domain {
    /// Two-valued logic: `Low`, `High`.
    Boolean,
    /// Four-valued logic: `Low`, `High`, `Undefined`, `HighImpedance`.
    Quaternary,
}

impl Domain {
    /// The domain this build was compiled for.
    #[cfg(feature = "four-state")]
    pub const ACTIVE: Domain = Domain::Quaternary;

    /// The domain this build was compiled for.
    #[cfg(not(feature = "four-state"))]
    pub const ACTIVE: Domain = Domain::Boolean;

    /// Returns `true` for [`Domain::Quaternary`].
    pub const fn is_quaternary(self) -> bool {
        matches!(self, Domain::Quaternary)
    }

    /// Human-readable name of the domain.
    pub fn name(self) -> &'static str {
        match self {
            Domain::Boolean => "boolean",
            Domain::Quaternary => "quaternary",
        }
    }

    /// All states of the active domain, in encoding order.
    ///
    /// Only meaningful for [`Domain::ACTIVE`]; the inactive domain's extra
    /// states do not exist in this build.
    pub fn states() -> &'static [Logic] {
        Logic::ALL
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
