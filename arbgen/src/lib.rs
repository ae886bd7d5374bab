//! arbgen: type-directed arbitrary test data generation.
//!
//! This is the main entry point for the arbgen library. Call [`init`] once
//! at start-up, then ask for values by type:
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! let _ = arbgen::init();
//!
//! let n: i32 = arbgen::generate()?;
//! let even: i32 = arbgen::such_that(|x: &i32| x % 2 == 0)?;
//! let map: BTreeMap<i32, f32> = arbgen::sized_container(5)?;
//! let pick = arbgen::element(&[1, 2, 3])?;
//! # let _ = (n, even, map, pick);
//! # Ok::<(), arbgen::ArbgenError>(())
//! ```

pub use arbgen_core::*;

// Re-export derive macros when available
#[cfg(feature = "derive")]
pub use arbgen_derive::*;
