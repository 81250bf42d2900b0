use proptest::prelude::*;
use std::collections::HashSet;
use tally_registry::PoolRegistry;

proptest! {
    /// A random add/remove interleaving keeps the registry identical to a
    /// model HashSet, regardless of swap-remove reordering.
    #[test]
    fn registry_matches_model_set(
        ops in prop::collection::vec((any::<bool>(), 0u64..20), 1..200),
    ) {
        let mut registry = PoolRegistry::new();
        let mut model: HashSet<u64> = HashSet::new();

        for (add, pool) in ops {
            if add {
                let inserted = model.insert(pool);
                prop_assert_eq!(registry.add(0, pool).is_ok(), inserted);
            } else {
                let removed = model.remove(&pool);
                prop_assert_eq!(registry.remove(0, pool).is_ok(), removed);
            }

            let members: HashSet<u64> = registry.members(0).collect();
            prop_assert_eq!(&members, &model);
            prop_assert_eq!(registry.len(0), model.len());
            for &pool in &model {
                prop_assert!(registry.contains(0, pool));
            }
        }
    }

    /// Mutating one family never disturbs a sibling family.
    #[test]
    fn families_are_isolated(
        pools_a in prop::collection::hash_set(0u64..50, 1..20),
        pools_b in prop::collection::hash_set(0u64..50, 1..20),
    ) {
        let mut registry = PoolRegistry::new();
        for &pool in &pools_a {
            registry.add(0, pool).unwrap();
        }
        for &pool in &pools_b {
            registry.add(1, pool).unwrap();
        }
        for &pool in &pools_a {
            registry.remove(0, pool).unwrap();
        }

        let remaining: HashSet<u64> = registry.members(1).collect();
        prop_assert_eq!(remaining, pools_b);
        prop_assert!(registry.members(0).next().is_none());
    }
}
