//! Run-time strategy registration.
//!
//! The [`Arbitrary`] trait covers types you own. A [`Registry`] covers the
//! rest: strategies are registered at start-up under the type's `TypeId`
//! and looked up on demand. Each type has at most one strategy; a second
//! registration and a lookup for an unregistered type are both errors.
//!
//! Registered types compose through [`Gen`]: `zip`, `map`, `vec_of`,
//! [`Gen::container_of`] and [`crate::collection::sized_container_with`]
//! put them in tuples, sequences, maps and sets.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use tracing::debug;

use crate::{arbitrary::Arbitrary, context::Context, error::*, gen::Gen};

struct Entry {
    type_name: &'static str,
    strategy: Box<dyn Any>,
}

/// Type-indexed table of generation strategies.
#[derive(Default)]
pub struct Registry {
    strategies: HashMap<TypeId, Entry>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in strategies for the
    /// primitive numeric types, `bool`, `char` and `String`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        macro_rules! builtin {
            ($($ty:ty),*) => {
                $(
                    registry.strategies.insert(
                        TypeId::of::<$ty>(),
                        Entry {
                            type_name: type_name::<$ty>(),
                            strategy: Box::new(Gen::<$ty>::arbitrary()),
                        },
                    );
                )*
            };
        }
        builtin!(
            i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
            String
        );
        registry
    }

    /// Register the strategy for `T`.
    pub fn register<T: 'static>(&mut self, strategy: Gen<T>) -> Result<()> {
        let id = TypeId::of::<T>();
        if self.strategies.contains_key(&id) {
            return Err(ArbgenError::DuplicateStrategy {
                type_name: type_name::<T>(),
            });
        }

        debug!(type_name = type_name::<T>(), "registered generation strategy");
        self.strategies.insert(
            id,
            Entry {
                type_name: type_name::<T>(),
                strategy: Box::new(strategy),
            },
        );
        Ok(())
    }

    /// Register a plain function as the strategy for `T`.
    pub fn register_fn<T, F>(&mut self, f: F) -> Result<()>
    where
        T: 'static,
        F: Fn(&mut Context) -> T + 'static,
    {
        self.register(Gen::new(f))
    }

    /// Register `T`'s own `Arbitrary` strategy.
    pub fn register_arbitrary<T: Arbitrary + 'static>(&mut self) -> Result<()> {
        self.register(Gen::<T>::arbitrary())
    }

    /// Whether a strategy for `T` is registered.
    pub fn contains<T: 'static>(&self) -> bool {
        self.strategies.contains_key(&TypeId::of::<T>())
    }

    /// Names of the registered types, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.strategies.values().map(|e| e.type_name).collect();
        names.sort_unstable();
        names
    }

    /// Look up the strategy for `T`.
    pub fn gen<T: 'static>(&self) -> Result<Gen<T>> {
        self.strategies
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.strategy.downcast_ref::<Gen<T>>())
            .cloned()
            .ok_or(ArbgenError::Unregistered {
                type_name: type_name::<T>(),
            })
    }

    /// Generate a `T` with its registered strategy.
    pub fn generate<T: 'static>(&self, ctx: &mut Context) -> Result<T> {
        Ok(self.gen::<T>()?.generate(ctx))
    }
}
