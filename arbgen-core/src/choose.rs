//! Uniform selection over inclusive intervals.
//!
//! [`Choose`] is implemented per numeric category: integers draw every
//! value in the interval with equal probability, reals draw uniformly from
//! the continuous interval. Other types can implement the trait to become
//! usable wherever a chooser is expected.

use rand::Rng;

use crate::{context::Context, data::Interval, error::*};

/// Draw a value uniformly from an inclusive interval.
pub trait Choose: Sized {
    /// Validate `[start, end]` without drawing from it.
    fn interval(start: Self, end: Self) -> Result<Interval<Self>>;

    /// Draw a value from `[start, end]`.
    ///
    /// Returns `InvalidArgument` when `start > end`. The bounds are never
    /// swapped or clamped.
    fn choose(ctx: &mut Context, start: Self, end: Self) -> Result<Self>;
}

macro_rules! choose_integral {
    ($($ty:ty),*) => {
        $(
            impl Choose for $ty {
                fn interval(start: Self, end: Self) -> Result<Interval<Self>> {
                    Interval::new(start, end)
                }

                fn choose(ctx: &mut Context, start: Self, end: Self) -> Result<Self> {
                    let interval = Self::interval(start, end)?;
                    Ok(ctx.rng().gen_range(interval.start()..=interval.end()))
                }
            }
        )*
    };
}

choose_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Reals are drawn as a convex combination of the bounds with a unit
// sample, so intervals as wide as `MIN..=MAX` never overflow. The upper
// bound is reachable only through rounding: inclusivity is best-effort.
macro_rules! choose_real {
    ($($ty:ty),*) => {
        $(
            impl Choose for $ty {
                fn interval(start: Self, end: Self) -> Result<Interval<Self>> {
                    if !start.is_finite() || !end.is_finite() {
                        return Err(ArbgenError::invalid_argument(
                            "choose",
                            format!(
                                "interval [{start:?}, {end:?}] of type `{}` has a non-finite bound",
                                stringify!($ty)
                            ),
                        ));
                    }
                    Interval::new(start, end)
                }

                fn choose(ctx: &mut Context, start: Self, end: Self) -> Result<Self> {
                    let interval = Self::interval(start, end)?;
                    let (start, end) = (interval.start(), interval.end());

                    if start == end {
                        return Ok(start);
                    }

                    let unit: $ty = ctx.rng().gen();
                    let value = start * (1.0 - unit) + end * unit;
                    Ok(value.clamp(start, end))
                }
            }
        )*
    };
}

choose_real!(f32, f64);

impl Choose for char {
    fn interval(start: Self, end: Self) -> Result<Interval<Self>> {
        Interval::new(start, end)
    }

    fn choose(ctx: &mut Context, start: Self, end: Self) -> Result<Self> {
        let interval = Self::interval(start, end)?;
        Ok(ctx.rng().gen_range(interval.start()..=interval.end()))
    }
}
