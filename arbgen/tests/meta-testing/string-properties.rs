//! String generation properties

use crate::DRAWS;
use arbgen::*;
use std::collections::BTreeMap;

/// Property: strings are printable ASCII with length in [0, 256]
pub fn test_alphabet_and_length() {
    let mut longest = 0;
    for _ in 0..DRAWS {
        let s: String = generate().unwrap();
        assert!(s.len() <= 256, "length {} exceeds 256", s.len());
        assert!(
            s.chars().all(|c| (' '..='~').contains(&c)),
            "non-printable character in {s:?}"
        );
        longest = longest.max(s.len());
    }
    assert!(longest > 200, "lengths never approached the upper bound");
    println!("✓ String alphabet and length property passed");
}

/// Property: strings nested in containers keep the same invariants
pub fn test_string_containers() {
    let map: BTreeMap<String, String> = sized_container(100).unwrap();
    assert!(map.len() <= 100);
    for (key, value) in &map {
        assert!(key.len() <= 256 && value.len() <= 256);
        assert!(key.bytes().chain(value.bytes()).all(|b| (32..=126).contains(&b)));
    }
    println!("✓ String container property passed");
}
