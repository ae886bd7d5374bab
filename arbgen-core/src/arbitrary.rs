//! Type-directed generation strategies.
//!
//! Every type that implements [`Arbitrary`] has exactly one strategy,
//! resolved at compile time. Composite strategies recurse into the
//! strategies of their constituents, so a `(String, Box<u16>)` is produced
//! by the string strategy followed by the boxed `u16` strategy.

use std::rc::Rc;
use std::sync::Arc;

use rand::Rng;

use crate::{choose::Choose, context::Context, data::*};

/// Produce an arbitrary value of `Self`.
///
/// Implement this for your own types to make them usable with
/// `generate`, `such_that`, the sized container operations and every
/// composite built on top of them.
///
/// ```rust
/// use arbgen_core::{Arbitrary, Context};
///
/// struct Point {
///     x: i16,
///     y: i16,
/// }
///
/// impl Arbitrary for Point {
///     fn arbitrary(ctx: &mut Context) -> Self {
///         Point {
///             x: ctx.generate(),
///             y: ctx.generate(),
///         }
///     }
/// }
///
/// let mut ctx = Context::from_seed(1);
/// let _point: Point = ctx.generate();
/// ```
pub trait Arbitrary: Sized {
    fn arbitrary(ctx: &mut Context) -> Self;
}

// The full range of an arithmetic type is always a valid interval.
macro_rules! arbitrary_numeric {
    ($($ty:ty),*) => {
        $(
            impl Arbitrary for $ty {
                fn arbitrary(ctx: &mut Context) -> Self {
                    match <$ty as Choose>::choose(ctx, <$ty>::MIN, <$ty>::MAX) {
                        Ok(value) => value,
                        Err(_) => unreachable!("MIN..=MAX is ordered for {}", stringify!($ty)),
                    }
                }
            }
        )*
    };
}

arbitrary_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Arbitrary for bool {
    fn arbitrary(ctx: &mut Context) -> Self {
        ctx.rng().gen()
    }
}

/// Printable ASCII, the same alphabet the `String` strategy uses.
impl Arbitrary for char {
    fn arbitrary(ctx: &mut Context) -> Self {
        char::from(printable_ascii(ctx))
    }
}

/// Length uniform in `[0, 256]`, each character printable ASCII.
impl Arbitrary for String {
    fn arbitrary(ctx: &mut Context) -> Self {
        let len = match usize::choose(ctx, 0, STRING_MAX_LEN) {
            Ok(len) => len,
            Err(_) => unreachable!("string length interval is ordered"),
        };
        (0..len).map(|_| char::from(printable_ascii(ctx))).collect()
    }
}

fn printable_ascii(ctx: &mut Context) -> u8 {
    match u8::choose(ctx, PRINTABLE_START, PRINTABLE_END) {
        Ok(code) => code,
        Err(_) => unreachable!("printable ASCII interval is ordered"),
    }
}

impl Arbitrary for () {
    fn arbitrary(_ctx: &mut Context) -> Self {}
}

impl<T: Arbitrary> Arbitrary for Box<T> {
    fn arbitrary(ctx: &mut Context) -> Self {
        Box::new(T::arbitrary(ctx))
    }
}

impl<T: Arbitrary> Arbitrary for Rc<T> {
    fn arbitrary(ctx: &mut Context) -> Self {
        Rc::new(T::arbitrary(ctx))
    }
}

impl<T: Arbitrary> Arbitrary for Arc<T> {
    fn arbitrary(ctx: &mut Context) -> Self {
        Arc::new(T::arbitrary(ctx))
    }
}

impl<T: Arbitrary> Arbitrary for Option<T> {
    fn arbitrary(ctx: &mut Context) -> Self {
        if ctx.rng().gen() {
            Some(T::arbitrary(ctx))
        } else {
            None
        }
    }
}

/// Arrays are sized containers whose length is fixed at compile time.
impl<T: Arbitrary, const N: usize> Arbitrary for [T; N] {
    fn arbitrary(ctx: &mut Context) -> Self {
        std::array::from_fn(|_| T::arbitrary(ctx))
    }
}

// Tuple elements are generated left to right.
macro_rules! arbitrary_tuple {
    ($($name:ident),+) => {
        impl<$($name: Arbitrary),+> Arbitrary for ($($name,)+) {
            fn arbitrary(ctx: &mut Context) -> Self {
                ($($name::arbitrary(ctx),)+)
            }
        }
    };
}

arbitrary_tuple!(A);
arbitrary_tuple!(A, B);
arbitrary_tuple!(A, B, C);
arbitrary_tuple!(A, B, C, D);
arbitrary_tuple!(A, B, C, D, E);
arbitrary_tuple!(A, B, C, D, E, F);
arbitrary_tuple!(A, B, C, D, E, F, G);
arbitrary_tuple!(A, B, C, D, E, F, G, H);
