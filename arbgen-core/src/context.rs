//! Generation context owning the pseudo-random engine.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::{arbitrary::Arbitrary, choose::Choose, data::*, error::*};

/// The state every generation strategy draws from.
///
/// A context owns one pseudo-random engine and the configuration used by
/// the bounded retry operations. Contexts are `Send` but not shared: give
/// each thread its own context, or go through the process-wide source in
/// [`crate::source`], which serialises access behind a mutex.
#[derive(Debug)]
pub struct Context {
    rng: StdRng,
    config: Config,
}

impl Context {
    /// Create a context seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an entropy-seeded context with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Context {
            rng: StdRng::from_entropy(),
            config,
        }
    }

    /// Create a context with a fixed seed.
    ///
    /// Two contexts built from the same seed draw the same stream, which
    /// is useful for testing code that consumes generated values.
    pub fn from_seed(seed: u64) -> Self {
        Context {
            rng: StdRng::seed_from_u64(seed),
            config: Config::default(),
        }
    }

    /// Replace the configuration, keeping the engine state.
    pub fn configured(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// The configuration used by `such_that` and its relatives.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the engine, for hand-written strategies.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Generate one arbitrary value of `T`.
    pub fn generate<T: Arbitrary>(&mut self) -> T {
        T::arbitrary(self)
    }

    /// Draw a value uniformly from `[start, end]`.
    pub fn choose<T: Choose>(&mut self, start: T, end: T) -> Result<T> {
        T::choose(self, start, end)
    }

    /// Generate a `T` satisfying `predicate`, using the configured retry budget.
    pub fn such_that<T, P>(&mut self, predicate: P) -> Result<T>
    where
        T: Arbitrary,
        P: FnMut(&T) -> bool,
    {
        let retries = self.config.retry_budget;
        self.such_that_within(predicate, retries)
    }

    /// Generate a `T` satisfying `predicate` with at most `retries` retries.
    ///
    /// One candidate is generated up front and up to `retries` more after
    /// it, so at most `retries + 1` values are produced before giving up.
    pub fn such_that_within<T, P>(&mut self, predicate: P, retries: usize) -> Result<T>
    where
        T: Arbitrary,
        P: FnMut(&T) -> bool,
    {
        self.sample_until(T::arbitrary, predicate, retries)
    }

    /// Rejection sampling over an arbitrary strategy.
    pub(crate) fn sample_until<T, S, P>(
        &mut self,
        mut strategy: S,
        mut predicate: P,
        retries: usize,
    ) -> Result<T>
    where
        S: FnMut(&mut Context) -> T,
        P: FnMut(&T) -> bool,
    {
        for _ in 0..=retries {
            let candidate = strategy(self);
            if predicate(&candidate) {
                return Ok(candidate);
            }
        }

        let attempts = retries.saturating_add(1);
        debug!(
            type_name = std::any::type_name::<T>(),
            attempts, "such_that exhausted its retry budget"
        );
        Err(ArbgenError::exhausted::<T>("such_that", attempts))
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::from_entropy()
    }
}
