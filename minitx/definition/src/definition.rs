//! The transaction-definition contract consumed by a transaction manager.

use serde::{Deserialize, Serialize};

use crate::error::{DefinitionError, DefinitionResult};
use crate::isolation::Isolation;
use crate::propagation::Propagation;

/// Description of how a unit-of-work should be run.
///
/// This is pure configuration: the transaction manager reads it, the
/// definition itself does nothing. All fields are public and the struct is
/// plain data, so callers can build one with struct-update syntax from
/// `Default` when only a field or two differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDefinition {
    /// How to relate to an already-active transaction.
    pub propagation: Propagation,

    /// Concurrency-visibility guarantee.
    pub isolation: Isolation,

    /// Timeout in seconds; [`TransactionDefinition::TIMEOUT_DEFAULT`] defers
    /// to the datastore's own timeout.
    pub timeout_secs: i32,

    /// Hint that the unit-of-work performs no writes. Managers may use it to
    /// pick cheaper read paths; honoring it is not mandatory.
    pub read_only: bool,

    /// Optional name, for diagnostics only.
    pub name: Option<String>,
}

impl TransactionDefinition {
    /// Timeout value meaning "use the datastore's default timeout".
    pub const TIMEOUT_DEFAULT: i32 = -1;

    /// A definition with the given propagation and isolation and default
    /// timeout, read-only flag and name.
    pub fn new(propagation: Propagation, isolation: Isolation) -> Self {
        Self {
            propagation,
            isolation,
            ..Self::default()
        }
    }

    /// A read-only definition with default propagation and isolation.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Replaces the timeout, rejecting values below
    /// [`TransactionDefinition::TIMEOUT_DEFAULT`].
    pub fn with_timeout(mut self, timeout_secs: i32) -> DefinitionResult<Self> {
        if timeout_secs < Self::TIMEOUT_DEFAULT {
            return Err(DefinitionError::InvalidTimeout(timeout_secs));
        }
        self.timeout_secs = timeout_secs;
        Ok(self)
    }
}

impl Default for TransactionDefinition {
    fn default() -> Self {
        Self {
            propagation: Propagation::default(),
            isolation: Isolation::default(),
            timeout_secs: Self::TIMEOUT_DEFAULT,
            read_only: false,
            name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_defaults() {
        let definition = TransactionDefinition::default();
        assert_eq!(definition.propagation, Propagation::Required);
        assert_eq!(definition.isolation, Isolation::Default);
        assert_eq!(
            definition.timeout_secs,
            TransactionDefinition::TIMEOUT_DEFAULT
        );
        assert!(!definition.read_only);
        assert_eq!(definition.name, None);
    }

    #[test]
    fn test_definition_timeout_validation() {
        let definition = TransactionDefinition::default();
        assert_eq!(
            definition.clone().with_timeout(30).map(|d| d.timeout_secs),
            Ok(30)
        );
        assert_eq!(
            definition
                .clone()
                .with_timeout(TransactionDefinition::TIMEOUT_DEFAULT)
                .map(|d| d.timeout_secs),
            Ok(TransactionDefinition::TIMEOUT_DEFAULT)
        );
        assert_eq!(
            definition.with_timeout(-2),
            Err(DefinitionError::InvalidTimeout(-2))
        );
    }

    #[test]
    fn test_definition_read_only() {
        let definition = TransactionDefinition::read_only();
        assert!(definition.read_only);
        assert_eq!(definition.propagation, Propagation::Required);
    }
}
