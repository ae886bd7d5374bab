//! First-class generation strategies and their combinators.

use std::rc::Rc;

use crate::{
    arbitrary::Arbitrary,
    choose::Choose,
    collection::{self, Collection},
    context::Context,
    error::*,
};

/// A generation strategy for values of type `T`.
///
/// Where [`Arbitrary`] fixes one strategy per type, a `Gen` is a value:
/// it can be built from a closure, stored in a registry and composed
/// with the combinators below.
pub struct Gen<T> {
    generator: Rc<dyn Fn(&mut Context) -> T>,
}

impl<T> Clone for Gen<T> {
    fn clone(&self) -> Self {
        Gen {
            generator: Rc::clone(&self.generator),
        }
    }
}

impl<T> Gen<T> {
    /// Create a new generator from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Context) -> T + 'static,
    {
        Gen {
            generator: Rc::new(f),
        }
    }

    /// Generate a value from the given context.
    pub fn generate(&self, ctx: &mut Context) -> T {
        (self.generator)(ctx)
    }

    /// Create a generator that always produces the same value.
    pub fn constant(value: T) -> Self
    where
        T: Clone + 'static,
    {
        Gen::new(move |_ctx| value.clone())
    }

    /// Rejection-sample until `predicate` holds, with the context's retry budget.
    pub fn such_that<P>(&self, ctx: &mut Context, predicate: P) -> Result<T>
    where
        P: FnMut(&T) -> bool,
    {
        let retries = ctx.config().retry_budget;
        self.such_that_within(ctx, predicate, retries)
    }

    /// Rejection-sample until `predicate` holds, with at most `retries` retries.
    pub fn such_that_within<P>(&self, ctx: &mut Context, predicate: P, retries: usize) -> Result<T>
    where
        P: FnMut(&T) -> bool,
    {
        ctx.sample_until(|ctx: &mut Context| self.generate(ctx), predicate, retries)
    }
}

impl<T: Arbitrary + 'static> Gen<T> {
    /// The type's own `Arbitrary` strategy as a first-class generator.
    pub fn arbitrary() -> Self {
        Gen::new(T::arbitrary)
    }
}

impl<T: Choose + Copy + 'static> Gen<T> {
    /// Uniform draws from `[start, end]`.
    ///
    /// The interval is validated here, so the returned generator cannot fail.
    pub fn choose(start: T, end: T) -> Result<Self> {
        let interval = T::interval(start, end)?;
        let (start, end) = (interval.start(), interval.end());
        Ok(Gen::new(move |ctx| match T::choose(ctx, start, end) {
            Ok(value) => value,
            Err(_) => unreachable!("interval validated at construction"),
        }))
    }
}

impl<T> Gen<T>
where
    T: 'static,
{
    /// Map a function over the generated values.
    pub fn map<U, F>(self, f: F) -> Gen<U>
    where
        F: Fn(T) -> U + 'static,
        U: 'static,
    {
        Gen::new(move |ctx| f(self.generate(ctx)))
    }

    /// Bind/flatmap for dependent generation.
    pub fn bind<U, F>(self, f: F) -> Gen<U>
    where
        F: Fn(T) -> Gen<U> + 'static,
        U: 'static,
    {
        Gen::new(move |ctx| {
            let value = self.generate(ctx);
            f(value).generate(ctx)
        })
    }

    /// Pair this generator with another; this one draws first.
    pub fn zip<U>(self, other: Gen<U>) -> Gen<(T, U)>
    where
        U: 'static,
    {
        Gen::new(move |ctx| {
            let first = self.generate(ctx);
            let second = other.generate(ctx);
            (first, second)
        })
    }

    /// A vector of exactly `len` values.
    pub fn vec_of(self, len: usize) -> Gen<Vec<T>> {
        Gen::new(move |ctx| (0..len).map(|_| self.generate(ctx)).collect())
    }

    /// A container of type `C` built from `n` insertions.
    ///
    /// Unique-key containers hold at most `n` items.
    pub fn container_of<C>(self, n: usize) -> Gen<C>
    where
        C: Collection<Item = T> + 'static,
    {
        Gen::new(move |ctx| collection::sized_container_with(ctx, &self, n))
    }

    /// Pick one of the given generators uniformly, then draw from it.
    pub fn one_of(generators: Vec<Gen<T>>) -> Result<Self> {
        if generators.is_empty() {
            return Err(ArbgenError::invalid_argument(
                "one_of",
                "cannot choose from an empty list of generators",
            ));
        }
        let last = generators.len() - 1;
        Ok(Gen::new(move |ctx| {
            let index = match usize::choose(ctx, 0, last) {
                Ok(index) => index,
                Err(_) => unreachable!("list is non-empty"),
            };
            generators[index].generate(ctx)
        }))
    }
}

impl<T: Clone + 'static> Gen<T> {
    /// Pick one of the given values uniformly.
    pub fn element_of(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(ArbgenError::invalid_argument(
                "element_of",
                "cannot choose from an empty list of values",
            ));
        }
        Ok(Gen::new(move |ctx| {
            match collection::element(ctx, &values) {
                Ok(value) => value.clone(),
                Err(_) => unreachable!("list is non-empty"),
            }
        }))
    }
}
