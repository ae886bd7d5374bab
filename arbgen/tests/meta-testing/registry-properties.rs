//! Run-time registry properties

use arbgen::*;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Port(u16);

/// Property: registered strategies are dispatched by type
pub fn test_dispatch() {
    let mut registry = Registry::with_builtins();
    registry
        .register_fn(|ctx: &mut Context| Port(ctx.choose(1024, 65535).unwrap_or(1024)))
        .unwrap();

    let mut ctx = Context::from_entropy();
    for _ in 0..1000 {
        let Port(port) = registry.generate::<Port>(&mut ctx).unwrap();
        assert!(port >= 1024);

        let s: String = registry.generate(&mut ctx).unwrap();
        assert!(s.len() <= 256);
    }

    let ports = registry.gen::<Port>().unwrap().vec_of(10);
    assert_eq!(generate_with(&ports).unwrap().len(), 10);
    println!("✓ Registry dispatch property passed");
}

/// Property: absence and duplication are both errors
pub fn test_errors() {
    let mut registry = Registry::new();
    let mut ctx = Context::from_entropy();

    match registry.generate::<Port>(&mut ctx) {
        Err(ArbgenError::Unregistered { type_name }) => assert!(type_name.ends_with("Port")),
        result => panic!("unregistered lookup should fail, got {result:?}"),
    }

    registry.register(Gen::constant(Port(80))).unwrap();
    assert!(matches!(
        registry.register(Gen::constant(Port(443))),
        Err(ArbgenError::DuplicateStrategy { .. })
    ));
    assert_eq!(registry.generate::<Port>(&mut ctx).unwrap(), Port(80));
    println!("✓ Registry error property passed");
}

/// Property: registered strategies fill keyed containers
pub fn test_registered_types_in_containers() {
    let mut registry = Registry::with_builtins();
    registry
        .register_fn(|ctx: &mut Context| Port(ctx.choose(1024, 65535).unwrap_or(1024)))
        .unwrap();

    let entries = registry
        .gen::<u8>()
        .unwrap()
        .zip(registry.gen::<Port>().unwrap());
    let mut ctx = Context::from_entropy();
    let map: BTreeMap<u8, Port> = collection::sized_container_with(&mut ctx, &entries, 20);
    assert!(!map.is_empty() && map.len() <= 20);
    assert!(map.values().all(|Port(port)| *port >= 1024));

    let exact: BTreeMap<u8, Port> = sized_container_strict_with(&entries, 20, 10_000).unwrap();
    assert_eq!(exact.len(), 20);

    let ports: HashSet<u16> = generate_with(
        &registry
            .gen::<Port>()
            .unwrap()
            .map(|Port(port)| port)
            .container_of(50),
    )
    .unwrap();
    assert!(ports.iter().all(|&port| port >= 1024));
    println!("✓ Registry container property passed");
}
