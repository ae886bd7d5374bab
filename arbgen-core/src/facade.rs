//! Free functions over the process-wide random source.
//!
//! Each call draws from the source initialised by [`crate::source::init`]
//! and fails with `Uninitialized` if it was never seeded. Strategies and
//! predicates run by these functions may call them again.

use crate::{
    arbitrary::Arbitrary, choose::Choose, collection, collection::Collection, error::*, gen::Gen,
    source::with_context,
};

/// Generate one arbitrary value of `T`.
pub fn generate<T: Arbitrary>() -> Result<T> {
    with_context(|ctx| T::arbitrary(ctx))
}

/// Generate one value with an explicit generator.
pub fn generate_with<T>(gen: &Gen<T>) -> Result<T> {
    with_context(|ctx| gen.generate(ctx))
}

/// Draw a value uniformly from `[start, end]`.
pub fn choose<T: Choose>(start: T, end: T) -> Result<T> {
    with_context(|ctx| T::choose(ctx, start, end))?
}

/// Generate a container with `n` insertions.
///
/// See [`collection::sized_container`] for unique-key containers.
pub fn sized_container<C>(n: usize) -> Result<C>
where
    C: Collection,
    C::Item: Arbitrary,
{
    with_context(|ctx| collection::sized_container(ctx, n))
}

/// Generate a container holding exactly `n` items.
pub fn sized_container_strict<C>(n: usize, retries: usize) -> Result<C>
where
    C: Collection,
    C::Item: Arbitrary,
{
    with_context(|ctx| collection::sized_container_strict(ctx, n, retries))?
}

/// Generate a container with `n` insertions drawn from `gen`.
pub fn sized_container_with<C: Collection>(gen: &Gen<C::Item>, n: usize) -> Result<C> {
    with_context(|ctx| collection::sized_container_with(ctx, gen, n))
}

/// Generate a container holding exactly `n` items drawn from `gen`.
pub fn sized_container_strict_with<C: Collection>(
    gen: &Gen<C::Item>,
    n: usize,
    retries: usize,
) -> Result<C> {
    with_context(|ctx| collection::sized_container_strict_with(ctx, gen, n, retries))?
}

/// Generate a vector of exactly `n` values.
pub fn vec_of<T: Arbitrary>(n: usize) -> Result<Vec<T>> {
    with_context(|ctx| collection::vec_of(ctx, n))
}

/// Select one element uniformly from a non-empty slice.
pub fn element<T>(items: &[T]) -> Result<&T> {
    with_context(|ctx| collection::element(ctx, items))?
}

/// Select one element uniformly from a non-empty slice, mutably.
pub fn element_mut<T>(items: &mut [T]) -> Result<&mut T> {
    with_context(|ctx| collection::element_mut(ctx, items))?
}

/// Generate a `T` satisfying `predicate` within the configured retry budget.
pub fn such_that<T, P>(predicate: P) -> Result<T>
where
    T: Arbitrary,
    P: FnMut(&T) -> bool,
{
    with_context(|ctx| ctx.such_that(predicate))?
}

/// Generate a `T` satisfying `predicate` with at most `retries` retries.
pub fn such_that_within<T, P>(predicate: P, retries: usize) -> Result<T>
where
    T: Arbitrary,
    P: FnMut(&T) -> bool,
{
    with_context(|ctx| ctx.such_that_within(predicate, retries))?
}
