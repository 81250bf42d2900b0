//! Per-family curated pool sets.

use crate::RegistryError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tally_types::{FarmId, PoolId};

/// An unordered set of pool identifiers with O(1) membership and removal.
///
/// Members live in an arena `Vec`; a side map records each member's arena
/// position. Removal swaps the victim with the last element, truncates, and
/// fixes the moved element's recorded position, so no shifting ever
/// happens. Iteration order is unspecified and may change across removals;
/// completeness and absence of duplicates are the only guarantees.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PoolSet {
    items: Vec<PoolId>,
    positions: HashMap<PoolId, usize>,
}

impl PoolSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, pool: PoolId) -> bool {
        self.positions.contains_key(&pool)
    }

    /// Every member exactly once, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = PoolId> + '_ {
        self.items.iter().copied()
    }

    /// Insert a pool. Returns false (and changes nothing) if already
    /// present.
    pub fn insert(&mut self, pool: PoolId) -> bool {
        if self.positions.contains_key(&pool) {
            return false;
        }
        self.positions.insert(pool, self.items.len());
        self.items.push(pool);
        true
    }

    /// Remove a pool by swapping it with the last member and truncating.
    /// Returns false if absent.
    pub fn remove(&mut self, pool: PoolId) -> bool {
        let Some(position) = self.positions.remove(&pool) else {
            return false;
        };
        self.items.swap_remove(position);
        if position < self.items.len() {
            let moved = self.items[position];
            self.positions.insert(moved, position);
        }
        true
    }
}

/// Curated pool sets, one per farm family with explicit membership.
///
/// Families are created lazily on first insert; removing from a family the
/// registry has never seen is a plain `NotMember`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PoolRegistry {
    families: HashMap<FarmId, PoolSet>,
}

impl PoolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Curate a pool for a family.
    pub fn add(&mut self, family: FarmId, pool: PoolId) -> Result<(), RegistryError> {
        let set = self.families.entry(family).or_default();
        if set.insert(pool) {
            Ok(())
        } else {
            Err(RegistryError::AlreadyMember { family, pool })
        }
    }

    /// Remove a pool from a family's curated set.
    pub fn remove(&mut self, family: FarmId, pool: PoolId) -> Result<(), RegistryError> {
        let removed = self
            .families
            .get_mut(&family)
            .is_some_and(|set| set.remove(pool));
        if removed {
            Ok(())
        } else {
            Err(RegistryError::NotMember { family, pool })
        }
    }

    pub fn contains(&self, family: FarmId, pool: PoolId) -> bool {
        self.families
            .get(&family)
            .is_some_and(|set| set.contains(pool))
    }

    /// Every curated pool of the family, in unspecified order. Empty for an
    /// unknown family.
    pub fn members(&self, family: FarmId) -> impl Iterator<Item = PoolId> + '_ {
        self.families
            .get(&family)
            .into_iter()
            .flat_map(|set| set.iter())
    }

    pub fn len(&self, family: FarmId) -> usize {
        self.families.get(&family).map_or(0, |set| set.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_add_then_contains() {
        let mut registry = PoolRegistry::new();
        registry.add(0, 7).unwrap();
        assert!(registry.contains(0, 7));
        assert!(!registry.contains(0, 8));
        assert!(!registry.contains(1, 7));
    }

    #[test]
    fn test_duplicate_add_is_already_member() {
        let mut registry = PoolRegistry::new();
        registry.add(0, 7).unwrap();
        assert_eq!(
            registry.add(0, 7),
            Err(RegistryError::AlreadyMember { family: 0, pool: 7 })
        );
        // The same pool id is fine in a sibling family.
        registry.add(1, 7).unwrap();
    }

    #[test]
    fn test_remove_absent_is_not_member() {
        let mut registry = PoolRegistry::new();
        assert_eq!(
            registry.remove(0, 7),
            Err(RegistryError::NotMember { family: 0, pool: 7 })
        );
        registry.add(0, 7).unwrap();
        registry.remove(0, 7).unwrap();
        assert_eq!(
            registry.remove(0, 7),
            Err(RegistryError::NotMember { family: 0, pool: 7 })
        );
    }

    #[test]
    fn test_swap_remove_keeps_siblings_intact() {
        let mut registry = PoolRegistry::new();
        for pool in 0..10 {
            registry.add(0, pool).unwrap();
        }
        // Remove from the middle; the last element gets swapped into its slot.
        registry.remove(0, 4).unwrap();

        let members: HashSet<_> = registry.members(0).collect();
        let expected: HashSet<_> = (0..10).filter(|&p| p != 4).collect();
        assert_eq!(members, expected);
        assert_eq!(registry.len(0), 9);

        // The moved element is still removable through its new position.
        registry.remove(0, 9).unwrap();
        assert!(!registry.contains(0, 9));
        assert_eq!(registry.len(0), 8);
    }

    #[test]
    fn test_readd_after_remove() {
        let mut registry = PoolRegistry::new();
        registry.add(0, 3).unwrap();
        registry.remove(0, 3).unwrap();
        registry.add(0, 3).unwrap();
        assert!(registry.contains(0, 3));
        assert_eq!(registry.len(0), 1);
    }

    #[test]
    fn test_members_of_unknown_family_is_empty() {
        let registry = PoolRegistry::new();
        assert_eq!(registry.members(42).count(), 0);
        assert_eq!(registry.len(42), 0);
    }

    #[test]
    fn test_members_yields_each_pool_once() {
        let mut registry = PoolRegistry::new();
        for pool in [5, 1, 9, 3] {
            registry.add(2, pool).unwrap();
        }
        let members: Vec<_> = registry.members(2).collect();
        assert_eq!(members.len(), 4);
        let unique: HashSet<_> = members.into_iter().collect();
        assert_eq!(unique, HashSet::from([5, 1, 9, 3]));
    }
}
