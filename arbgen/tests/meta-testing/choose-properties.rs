//! Range chooser properties
//!
//! Every draw from `choose` must land inside the inclusive interval it
//! was given, and a reversed interval must be rejected.

use crate::{arbitrary_interval, DRAWS};
use arbgen::*;

macro_rules! check_bounds {
    ($($ty:ty),*) => {
        $(
            let (start, end) = arbitrary_interval::<$ty>();
            for _ in 0..DRAWS {
                let v: $ty = choose(start, end).unwrap();
                assert!(
                    start <= v && v <= end,
                    "{} draw {v:?} outside [{start:?}, {end:?}]",
                    stringify!($ty)
                );
            }
        )*
    };
}

/// Property: integer draws stay inside generated intervals
pub fn test_integer_bounds() {
    check_bounds!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

    // Narrow intervals exercise every value.
    for _ in 0..DRAWS {
        let v = choose(-2i32, 2).unwrap();
        assert!((-2..=2).contains(&v));
    }
    println!("✓ Integer choose bounds property passed");
}

/// Property: real draws stay inside generated intervals
pub fn test_real_bounds() {
    check_bounds!(f32, f64);

    for _ in 0..DRAWS {
        let v = choose(f64::MIN, f64::MAX).unwrap();
        assert!(v.is_finite());
    }
    println!("✓ Real choose bounds property passed");
}

/// Property: start > end is an invalid argument, never a value
pub fn test_reversed_intervals() {
    match choose::<i32>(10, 5) {
        Err(ArbgenError::InvalidArgument { operation, reason }) => {
            assert_eq!(operation, "choose");
            assert!(reason.contains("10"));
            assert!(reason.contains('5'));
        }
        result => panic!("choose(10, 5) should be invalid, got {result:?}"),
    }

    for _ in 0..100 {
        let (start, end) = arbitrary_interval::<u64>();
        if start < end {
            assert!(choose(end, start).is_err());
        }
    }
    println!("✓ Reversed interval property passed");
}
