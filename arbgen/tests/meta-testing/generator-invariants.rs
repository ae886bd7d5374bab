//! Generator invariant properties
//!
//! Built-in strategies must produce exactly the requested type and
//! owning pointers must hold freshly generated values.

use arbgen::*;
use std::rc::Rc;
use std::sync::Arc;

fn exact<T: Arbitrary>() -> T {
    generate::<T>().unwrap()
}

/// Property: generate returns the requested type without conversion
pub fn test_exact_types() {
    let _: i8 = exact();
    let _: i16 = exact();
    let _: i32 = exact();
    let _: i64 = exact();
    let _: i128 = exact();
    let _: isize = exact();
    let _: u8 = exact();
    let _: u16 = exact();
    let _: u32 = exact();
    let _: u64 = exact();
    let _: u128 = exact();
    let _: usize = exact();
    let _: bool = exact();
    let _: char = exact();
    let _: () = exact();

    for _ in 0..1000 {
        assert!(exact::<f32>().is_finite());
        assert!(exact::<f64>().is_finite());
    }

    // Full-range draws reach both signs.
    let values: Vec<i64> = vec_of(200).unwrap();
    assert!(values.iter().any(|&v| v < 0));
    assert!(values.iter().any(|&v| v > 0));
    println!("✓ Exact type property passed");
}

/// Property: pointers own fresh, unaliased values
pub fn test_pointer_freshness() {
    for _ in 0..100 {
        let shared: Rc<(u8, String)> = exact();
        assert_eq!(Rc::strong_count(&shared), 1);

        let atomic: Arc<u32> = exact();
        assert_eq!(Arc::strong_count(&atomic), 1);

        let nested: Box<Option<Box<i16>>> = exact();
        if let Some(inner) = *nested {
            let _: i16 = *inner;
        }
    }
    println!("✓ Pointer freshness property passed");
}

#[derive(Debug, Clone, PartialEq)]
struct Account {
    owner: String,
    balance: i64,
    tags: [char; 3],
}

impl Arbitrary for Account {
    fn arbitrary(ctx: &mut Context) -> Self {
        Account {
            owner: ctx.generate(),
            balance: ctx.choose(0, 1_000_000).unwrap_or(0),
            tags: ctx.generate(),
        }
    }
}

/// Property: user-defined strategies compose with the built-ins
pub fn test_user_defined_types() {
    for _ in 0..500 {
        let account: Account = exact();
        assert!((0..=1_000_000).contains(&account.balance));
        assert!(account.owner.len() <= STRING_MAX_LEN);

        let (first, second): (Account, Box<Account>) = exact();
        assert!(first.balance >= 0 && second.balance >= 0);
    }

    let accounts: Vec<Account> = vec_of(25).unwrap();
    assert_eq!(accounts.len(), 25);
    println!("✓ User-defined type property passed");
}
