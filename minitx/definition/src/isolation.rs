//! Isolation levels: what concurrent units-of-work may observe of each other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DefinitionError, DefinitionResult};

/// Concurrency-visibility guarantee requested for a unit-of-work.
///
/// The codes of the four concrete levels are the standard connection-level
/// isolation constants (1, 2, 4, 8); `Default` is the sentinel -1 and means
/// "use whatever level the underlying datastore is configured with". As with
/// [`Propagation`](crate::Propagation), the codes are an interop contract
/// and must never be renumbered.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Isolation {
    /// Use the default isolation level of the underlying datastore.
    #[default]
    Default = -1,

    /// Dirty reads, non-repeatable reads and phantom reads can occur:
    /// uncommitted changes from concurrent units-of-work are visible.
    ReadUncommitted = 1,

    /// Dirty reads are prevented; non-repeatable reads and phantom reads can
    /// occur.
    ReadCommitted = 2,

    /// Dirty reads and non-repeatable reads are prevented; phantom reads can
    /// occur.
    RepeatableRead = 4,

    /// Dirty reads, non-repeatable reads and phantom reads are all
    /// prevented.
    Serializable = 8,
}

impl Isolation {
    /// Every isolation level, in code order.
    pub const ALL: [Isolation; 5] = [
        Isolation::Default,
        Isolation::ReadUncommitted,
        Isolation::ReadCommitted,
        Isolation::RepeatableRead,
        Isolation::Serializable,
    ];

    /// Returns the integer code of this level.
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Looks a level up by its integer code.
    pub fn from_value(code: i32) -> DefinitionResult<Self> {
        match code {
            -1 => Ok(Isolation::Default),
            1 => Ok(Isolation::ReadUncommitted),
            2 => Ok(Isolation::ReadCommitted),
            4 => Ok(Isolation::RepeatableRead),
            8 => Ok(Isolation::Serializable),
            _ => Err(DefinitionError::UnknownIsolationCode(code)),
        }
    }

    /// Canonical upper-snake name of this level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Isolation::Default => "DEFAULT",
            Isolation::ReadUncommitted => "READ_UNCOMMITTED",
            Isolation::ReadCommitted => "READ_COMMITTED",
            Isolation::RepeatableRead => "REPEATABLE_READ",
            Isolation::Serializable => "SERIALIZABLE",
        }
    }

    /// The level name as it appears in `SET TRANSACTION ISOLATION LEVEL`.
    ///
    /// `Default` has no SQL spelling: it means "leave the connection's level
    /// alone", so it renders as `None`.
    pub const fn as_sql(self) -> Option<&'static str> {
        match self {
            Isolation::Default => None,
            Isolation::ReadUncommitted => Some("READ UNCOMMITTED"),
            Isolation::ReadCommitted => Some("READ COMMITTED"),
            Isolation::RepeatableRead => Some("REPEATABLE READ"),
            Isolation::Serializable => Some("SERIALIZABLE"),
        }
    }
}

impl fmt::Display for Isolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Isolation {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEFAULT" => Ok(Isolation::Default),
            "READ_UNCOMMITTED" => Ok(Isolation::ReadUncommitted),
            "READ_COMMITTED" => Ok(Isolation::ReadCommitted),
            "REPEATABLE_READ" => Ok(Isolation::RepeatableRead),
            "SERIALIZABLE" => Ok(Isolation::Serializable),
            _ => Err(DefinitionError::UnknownIsolationName(s.to_string())),
        }
    }
}

impl TryFrom<i32> for Isolation {
    type Error = DefinitionError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Isolation::from_value(code)
    }
}

impl From<Isolation> for i32 {
    fn from(isolation: Isolation) -> Self {
        isolation.value()
    }
}
