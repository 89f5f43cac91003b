//! Propagation behaviors for nesting one unit-of-work inside another.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DefinitionError, DefinitionResult};

/// How a unit-of-work relates to a transaction that is already active.
///
/// Each variant is bound to a stable integer code. The codes are an interop
/// contract: external callers (the transaction manager) key behavior off
/// them, so they must never be renumbered.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Propagation {
    /// Join the current transaction, or start a new one if none is active.
    ///
    /// This is the default propagation behavior.
    #[default]
    Required = 0,

    /// Join the current transaction if one is active, otherwise run
    /// non-transactionally.
    Supports = 1,

    /// Join the current transaction; fail if none is active.
    Mandatory = 2,

    /// Always start a new transaction, suspending the current one if active.
    RequiresNew = 3,

    /// Run non-transactionally, suspending the current transaction if active.
    NotSupported = 4,

    /// Run non-transactionally; fail if a transaction is active.
    Never = 5,

    /// Run in a nested transaction if one is active, otherwise behave like
    /// [`Propagation::Required`].
    ///
    /// Nesting requires savepoint support in the underlying datastore.
    Nested = 6,
}

impl Propagation {
    /// Every propagation behavior, in code order.
    pub const ALL: [Propagation; 7] = [
        Propagation::Required,
        Propagation::Supports,
        Propagation::Mandatory,
        Propagation::RequiresNew,
        Propagation::NotSupported,
        Propagation::Never,
        Propagation::Nested,
    ];

    /// Returns the integer code of this behavior.
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Looks a behavior up by its integer code.
    pub fn from_value(code: i32) -> DefinitionResult<Self> {
        match code {
            0 => Ok(Propagation::Required),
            1 => Ok(Propagation::Supports),
            2 => Ok(Propagation::Mandatory),
            3 => Ok(Propagation::RequiresNew),
            4 => Ok(Propagation::NotSupported),
            5 => Ok(Propagation::Never),
            6 => Ok(Propagation::Nested),
            _ => Err(DefinitionError::UnknownPropagationCode(code)),
        }
    }

    /// Canonical upper-snake name of this behavior.
    pub const fn as_str(self) -> &'static str {
        match self {
            Propagation::Required => "REQUIRED",
            Propagation::Supports => "SUPPORTS",
            Propagation::Mandatory => "MANDATORY",
            Propagation::RequiresNew => "REQUIRES_NEW",
            Propagation::NotSupported => "NOT_SUPPORTED",
            Propagation::Never => "NEVER",
            Propagation::Nested => "NESTED",
        }
    }
}

impl fmt::Display for Propagation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Propagation {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REQUIRED" => Ok(Propagation::Required),
            "SUPPORTS" => Ok(Propagation::Supports),
            "MANDATORY" => Ok(Propagation::Mandatory),
            "REQUIRES_NEW" => Ok(Propagation::RequiresNew),
            "NOT_SUPPORTED" => Ok(Propagation::NotSupported),
            "NEVER" => Ok(Propagation::Never),
            "NESTED" => Ok(Propagation::Nested),
            _ => Err(DefinitionError::UnknownPropagationName(s.to_string())),
        }
    }
}

impl TryFrom<i32> for Propagation {
    type Error = DefinitionError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Propagation::from_value(code)
    }
}

impl From<Propagation> for i32 {
    fn from(propagation: Propagation) -> Self {
        propagation.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_propagation_codes() {
        assert_eq!(Propagation::Required.value(), 0);
        assert_eq!(Propagation::Supports.value(), 1);
        assert_eq!(Propagation::Mandatory.value(), 2);
        assert_eq!(Propagation::RequiresNew.value(), 3);
        assert_eq!(Propagation::NotSupported.value(), 4);
        assert_eq!(Propagation::Never.value(), 5);
        assert_eq!(Propagation::Nested.value(), 6);
    }

    #[test]
    fn test_propagation_round_trip() {
        for propagation in Propagation::ALL {
            assert_eq!(
                Propagation::from_value(propagation.value()),
                Ok(propagation)
            );
        }
    }

    #[test]
    fn test_propagation_unknown_code() {
        assert_eq!(
            Propagation::from_value(7),
            Err(DefinitionError::UnknownPropagationCode(7))
        );
        assert_eq!(
            Propagation::from_value(-1),
            Err(DefinitionError::UnknownPropagationCode(-1))
        );
    }

    #[test]
    fn test_propagation_names() {
        for propagation in Propagation::ALL {
            assert_eq!(propagation.as_str().parse(), Ok(propagation));
        }
        assert_eq!(
            "required".parse::<Propagation>(),
            Err(DefinitionError::UnknownPropagationName(
                "required".to_string()
            ))
        );
    }

    #[test]
    fn test_propagation_default() {
        assert_eq!(Propagation::default(), Propagation::Required);
    }
}
