//! Sized containers and element selection.
//!
//! [`sized_container`] inserts exactly `n` generated items. Containers with
//! unique keys (`HashMap`, `BTreeMap`, `HashSet`, `BTreeSet`) silently merge
//! duplicate keys on insertion, so they may end up with fewer than `n`
//! entries. When exactly `n` entries are required use
//! [`sized_container_strict`], which keeps generating until the container
//! reaches the requested length or its retry budget runs out.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::Hash;

use tracing::trace;

use crate::{arbitrary::Arbitrary, choose::Choose, context::Context, error::*, gen::Gen};

/// A container that can be filled one item at a time.
pub trait Collection: Default {
    type Item;

    fn len(&self) -> usize;

    fn insert_item(&mut self, item: Self::Item);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! collection {
    ($ty:ident<$($param:ident),+> where [$($bounds:tt)*], $item:ty, |$this:ident, $value:ident| $insert:expr) => {
        impl<$($param),+> Collection for $ty<$($param),+>
        where
            $($bounds)*
        {
            type Item = $item;

            fn len(&self) -> usize {
                $ty::len(self)
            }

            fn insert_item(&mut self, $value: Self::Item) {
                let $this = self;
                $insert;
            }
        }
    };
}

collection!(Vec<T> where [], T, |this, item| this.push(item));
collection!(VecDeque<T> where [], T, |this, item| this.push_back(item));
collection!(LinkedList<T> where [], T, |this, item| this.push_back(item));
collection!(BinaryHeap<T> where [T: Ord], T, |this, item| this.push(item));
collection!(HashSet<T> where [T: Eq + Hash], T, |this, item| this.insert(item));
collection!(BTreeSet<T> where [T: Ord], T, |this, item| this.insert(item));
collection!(HashMap<K, V> where [K: Eq + Hash], (K, V), |this, item| this.insert(item.0, item.1));
collection!(BTreeMap<K, V> where [K: Ord], (K, V), |this, item| this.insert(item.0, item.1));

/// Generate `n` items and insert each into a fresh container.
///
/// Sequence containers always hold exactly `n` items afterwards. Unique-key
/// containers hold at most `n`.
pub fn sized_container<C>(ctx: &mut Context, n: usize) -> C
where
    C: Collection,
    C::Item: Arbitrary,
{
    fill(ctx, n, <C::Item as Arbitrary>::arbitrary)
}

/// [`sized_container`] with items drawn from `gen` instead of the item
/// type's `Arbitrary` strategy.
///
/// This is how types known only to a [`crate::Registry`] end up in maps,
/// sets and other containers.
pub fn sized_container_with<C: Collection>(ctx: &mut Context, gen: &Gen<C::Item>, n: usize) -> C {
    fill(ctx, n, |ctx: &mut Context| gen.generate(ctx))
}

/// Fill a container until it holds exactly `n` items.
///
/// Up to `retries` extra items may be generated to replace ones that
/// collided with an existing key. Fails with `Exhausted` when the budget
/// runs out first.
pub fn sized_container_strict<C>(ctx: &mut Context, n: usize, retries: usize) -> Result<C>
where
    C: Collection,
    C::Item: Arbitrary,
{
    fill_strict(ctx, n, retries, <C::Item as Arbitrary>::arbitrary)
}

/// [`sized_container_strict`] with items drawn from `gen`.
pub fn sized_container_strict_with<C: Collection>(
    ctx: &mut Context,
    gen: &Gen<C::Item>,
    n: usize,
    retries: usize,
) -> Result<C> {
    fill_strict(ctx, n, retries, |ctx: &mut Context| gen.generate(ctx))
}

fn fill<C, S>(ctx: &mut Context, n: usize, mut strategy: S) -> C
where
    C: Collection,
    S: FnMut(&mut Context) -> C::Item,
{
    let mut container = C::default();
    for _ in 0..n {
        container.insert_item(strategy(ctx));
    }
    container
}

fn fill_strict<C, S>(ctx: &mut Context, n: usize, retries: usize, mut strategy: S) -> Result<C>
where
    C: Collection,
    S: FnMut(&mut Context) -> C::Item,
{
    let mut container = C::default();
    let mut collisions = 0usize;
    while container.len() < n {
        let before = container.len();
        container.insert_item(strategy(ctx));
        if container.len() == before {
            collisions += 1;
            trace!(collisions, len = before, wanted = n, "sized container key collision");
            if collisions > retries {
                return Err(ArbgenError::exhausted::<C>(
                    "sized_container_strict",
                    container.len().saturating_add(collisions),
                ));
            }
        }
    }
    Ok(container)
}

/// Generate a vector of exactly `n` arbitrary values.
pub fn vec_of<T: Arbitrary>(ctx: &mut Context, n: usize) -> Vec<T> {
    sized_container(ctx, n)
}

fn random_index(ctx: &mut Context, operation: &'static str, len: usize) -> Result<usize> {
    if len == 0 {
        return Err(ArbgenError::invalid_argument(
            operation,
            "cannot select an element from an empty container",
        ));
    }
    usize::choose(ctx, 0, len - 1)
}

/// Select one element uniformly from a non-empty slice.
pub fn element<'a, T>(ctx: &mut Context, items: &'a [T]) -> Result<&'a T> {
    let index = random_index(ctx, "element", items.len())?;
    Ok(&items[index])
}

/// Select one element uniformly from a non-empty slice, mutably.
pub fn element_mut<'a, T>(ctx: &mut Context, items: &'a mut [T]) -> Result<&'a mut T> {
    let index = random_index(ctx, "element", items.len())?;
    Ok(&mut items[index])
}

/// Select one item uniformly from any exact-size iterator.
///
/// Works for containers without positional indexing:
/// `element_of(ctx, &map)` returns one `(&K, &V)` entry.
pub fn element_of<I>(ctx: &mut Context, items: I) -> Result<I::Item>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    let mut iter = items.into_iter();
    let index = random_index(ctx, "element", iter.len())?;
    iter.nth(index).ok_or_else(|| {
        ArbgenError::invalid_argument("element", "iterator ended before its reported length")
    })
}
