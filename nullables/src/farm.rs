//! Nullable liquidity-pool farm.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tally_ledgers::{FarmLedger, LedgerError, PairSnapshot};
use tally_types::{AccountId, PoolId};

#[derive(Default)]
struct NullPool {
    /// `None` models a pool whose pair lacks the base token.
    pair: Option<PairSnapshot>,
    stakes: HashMap<AccountId, u128>,
}

/// An in-memory farm for testing.
///
/// Pool identifiers are the farm's own indices, matching the enumeration
/// contract (`pool_id(i) == i`).
pub struct NullFarm {
    pools: Mutex<Vec<NullPool>>,
    failed: AtomicBool,
}

impl NullFarm {
    pub fn new() -> Self {
        Self {
            pools: Mutex::new(Vec::new()),
            failed: AtomicBool::new(false),
        }
    }

    /// Add a pool paired against the base token.
    pub fn add_pool(&self, base_reserve: u128, lp_total_supply: u128) -> PoolId {
        let mut pools = self.pools.lock().unwrap();
        pools.push(NullPool {
            pair: Some(PairSnapshot {
                base_reserve,
                lp_total_supply,
            }),
            stakes: HashMap::new(),
        });
        (pools.len() - 1) as PoolId
    }

    /// Add a pool whose pair does not include the base token.
    pub fn add_pool_without_base(&self) -> PoolId {
        let mut pools = self.pools.lock().unwrap();
        pools.push(NullPool::default());
        (pools.len() - 1) as PoolId
    }

    /// Replace a pool's pair snapshot.
    pub fn set_pair(&self, pool: PoolId, base_reserve: u128, lp_total_supply: u128) {
        self.pools.lock().unwrap()[pool as usize].pair = Some(PairSnapshot {
            base_reserve,
            lp_total_supply,
        });
    }

    /// Stake LP tokens for an account.
    pub fn deposit(&self, account: &AccountId, pool: PoolId, amount: u128) {
        *self.pools.lock().unwrap()[pool as usize]
            .stakes
            .entry(account.clone())
            .or_default() += amount;
    }

    /// Unstake LP tokens for an account.
    pub fn withdraw(&self, account: &AccountId, pool: PoolId, amount: u128) {
        let mut pools = self.pools.lock().unwrap();
        let staked = pools[pool as usize]
            .stakes
            .entry(account.clone())
            .or_default();
        *staked = staked.saturating_sub(amount);
    }

    /// Switch every subsequent read into failure.
    pub fn set_failed(&self, failed: bool) {
        self.failed.store(failed, Ordering::Relaxed);
    }

    fn check_available(&self) -> Result<(), LedgerError> {
        if self.failed.load(Ordering::Relaxed) {
            Err(LedgerError::Unavailable("farm".into()))
        } else {
            Ok(())
        }
    }
}

impl Default for NullFarm {
    fn default() -> Self {
        Self::new()
    }
}

impl FarmLedger for NullFarm {
    fn pool_count(&self) -> Result<u64, LedgerError> {
        self.check_available()?;
        Ok(self.pools.lock().unwrap().len() as u64)
    }

    fn pool_id(&self, index: u64) -> Result<PoolId, LedgerError> {
        self.check_available()?;
        if (index as usize) < self.pools.lock().unwrap().len() {
            Ok(index)
        } else {
            Err(LedgerError::UnknownPool(index))
        }
    }

    fn staked_lp(&self, pool: PoolId, account: &AccountId) -> Result<u128, LedgerError> {
        self.check_available()?;
        let pools = self.pools.lock().unwrap();
        let entry = pools
            .get(pool as usize)
            .ok_or(LedgerError::UnknownPool(pool))?;
        Ok(entry.stakes.get(account).copied().unwrap_or(0))
    }

    fn pool_pair(&self, pool: PoolId) -> Result<Option<PairSnapshot>, LedgerError> {
        self.check_available()?;
        let pools = self.pools.lock().unwrap();
        let entry = pools
            .get(pool as usize)
            .ok_or(LedgerError::UnknownPool(pool))?;
        Ok(entry.pair)
    }
}
