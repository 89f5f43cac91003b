//! Transaction-definition metadata for miniTX.
//!
//! This crate is the leaf contract consumed by a transaction manager: the
//! closed sets of propagation behaviors and isolation levels, and the
//! definition value type that carries them. It holds no runtime state and
//! performs no I/O; everything here is fixed at compile time.

pub mod definition;
pub mod error;
pub mod isolation;
pub mod propagation;

pub use definition::TransactionDefinition;
pub use error::{DefinitionError, DefinitionResult};
pub use isolation::Isolation;
pub use propagation::Propagation;
