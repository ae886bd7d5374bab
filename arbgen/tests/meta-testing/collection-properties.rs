//! Sized container and element selection properties

use arbgen::*;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

/// Property: sequence containers hold exactly the requested size
pub fn test_sequence_sizes() {
    for _ in 0..50 {
        let n = choose(0usize, 300).unwrap();
        assert_eq!(sized_container::<Vec<i32>>(n).unwrap().len(), n);
        assert_eq!(sized_container::<VecDeque<u8>>(n).unwrap().len(), n);
        assert_eq!(sized_container::<LinkedList<String>>(n).unwrap().len(), n);
        assert_eq!(sized_container::<Vec<(i8, f32)>>(n).unwrap().len(), n);
    }
    println!("✓ Sequence size property passed");
}

/// Property: unique-key containers hold at most the requested size
pub fn test_unique_key_sizes() {
    for _ in 0..50 {
        let n = choose(0usize, 300).unwrap();
        assert!(sized_container::<BTreeMap<u8, String>>(n).unwrap().len() <= n);
        assert!(sized_container::<HashMap<i64, i64>>(n).unwrap().len() <= n);
        assert!(sized_container::<HashSet<u8>>(n).unwrap().len() <= n);
        assert!(sized_container::<BTreeSet<bool>>(n).unwrap().len() <= 2);
    }
    println!("✓ Unique-key size property passed");
}

/// Property: the strict variant reaches exactly n or reports exhaustion
pub fn test_strict_sizes() {
    for _ in 0..20 {
        let n = choose(0usize, 100).unwrap();
        let set: BTreeSet<u16> = sized_container_strict(n, 10_000).unwrap();
        assert_eq!(set.len(), n);
    }

    match sized_container_strict::<BTreeSet<u8>>(257, 50) {
        Err(ArbgenError::Exhausted { operation, .. }) => {
            assert_eq!(operation, "sized_container_strict")
        }
        result => panic!("257 distinct u8 values cannot exist, got {result:?}"),
    }
    println!("✓ Strict size property passed");
}

/// Property: element returns a member of the container
pub fn test_element_membership() {
    for _ in 0..100 {
        let n = choose(1usize, 50).unwrap();
        let items: Vec<String> = vec_of(n).unwrap();
        let picked = element(&items).unwrap();
        assert!(items.contains(picked));
    }

    let mut counters = vec![0u32; 8];
    for _ in 0..800 {
        *element_mut(&mut counters).unwrap() += 1;
    }
    assert_eq!(counters.iter().sum::<u32>(), 800);
    println!("✓ Element membership property passed");
}

/// Property: K×1000 draws hit every position of a K-element container
pub fn test_element_coverage() {
    for k in [1usize, 2, 7, 32] {
        let items: Vec<usize> = (0..k).collect();
        let mut hits = vec![0usize; k];
        for _ in 0..k * 1000 {
            hits[*element(&items).unwrap()] += 1;
        }
        assert!(hits.iter().all(|&h| h > 0), "unvisited position in {hits:?}");
    }
    println!("✓ Element coverage property passed");
}

/// Property: element on an empty container is an invalid argument
pub fn test_element_empty() {
    let empty: [u8; 0] = [];
    match element(&empty) {
        Err(ArbgenError::InvalidArgument { operation, .. }) => assert_eq!(operation, "element"),
        result => panic!("element on empty slice should fail, got {result:?}"),
    }
    println!("✓ Element empty-container property passed");
}
