//! Error types for arbgen test data generation.

use thiserror::Error;

/// Main error type for arbgen generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArbgenError {
    /// An operation was called with arguments outside its domain.
    #[error("{operation}: invalid argument: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },

    /// A bounded retry loop ran out of attempts.
    #[error("{operation}: could not generate a value of type `{type_name}` after {attempts} attempts")]
    Exhausted {
        operation: &'static str,
        type_name: &'static str,
        attempts: usize,
    },

    /// No strategy is registered for the requested type.
    #[error("no generation strategy registered for type `{type_name}`")]
    Unregistered { type_name: &'static str },

    /// A second strategy was registered for a type that already has one.
    #[error("a generation strategy is already registered for type `{type_name}`")]
    DuplicateStrategy { type_name: &'static str },

    /// The process-wide random source was used before `init` was called.
    #[error("the arbgen random source is not initialized; call `arbgen::init()` first")]
    Uninitialized,

    /// `init` was called more than once.
    #[error("the arbgen random source is already initialized")]
    AlreadyInitialized,
}

impl ArbgenError {
    /// Build an `InvalidArgument` error for the named operation.
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        ArbgenError::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }

    /// Build an `Exhausted` error for a value of type `T`.
    pub fn exhausted<T>(operation: &'static str, attempts: usize) -> Self {
        ArbgenError::Exhausted {
            operation,
            type_name: std::any::type_name::<T>(),
            attempts,
        }
    }
}

/// Result type for arbgen operations.
pub type Result<T> = std::result::Result<T, ArbgenError>;
