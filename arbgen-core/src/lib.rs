//! Core functionality for arbgen test data generation.
//!
//! This crate provides the type-directed generation machinery: the
//! [`Arbitrary`] trait and its built-in strategies, the [`Choose`] range
//! chooser, sized containers, element selection and constrained
//! ("such that") generation, over either an explicit [`Context`] or the
//! process-wide source.

pub mod arbitrary;
pub mod choose;
pub mod collection;
pub mod context;
pub mod data;
pub mod error;
pub mod facade;
pub mod gen;
pub mod registry;
pub mod source;

// Re-export the main types
pub use arbitrary::*;
pub use choose::*;
pub use collection::Collection;
pub use context::*;
pub use data::*;
pub use error::*;
pub use facade::*;
pub use gen::*;
pub use registry::*;
pub use source::{init, init_with, is_initialized};
