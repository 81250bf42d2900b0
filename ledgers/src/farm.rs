//! Read interface to a liquidity-pool farm.

use crate::LedgerError;
use serde::{Deserialize, Serialize};
use tally_types::{AccountId, PoolId};

/// A pool's pair state at read time.
///
/// `base_reserve` is the base-token side of the two-asset reserve;
/// `lp_total_supply` is the total LP tokens outstanding against it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSnapshot {
    pub base_reserve: u128,
    pub lp_total_supply: u128,
}

/// Read-only view of a farm that tracks per-user staked LP positions.
///
/// Deposit/withdraw accounting and reward accrual belong to the
/// collaborator.
pub trait FarmLedger {
    /// Number of pools the farm currently knows about.
    fn pool_count(&self) -> Result<u64, LedgerError>;

    /// Identifier of the pool at `index` (`index < pool_count()`).
    fn pool_id(&self, index: u64) -> Result<PoolId, LedgerError>;

    /// LP tokens the account has staked in the pool. Zero for an account
    /// with no position.
    fn staked_lp(&self, pool: PoolId, account: &AccountId) -> Result<u128, LedgerError>;

    /// Reserve snapshot of the pool's pair, or `None` when the pair does
    /// not include the base token (such a pool contributes no voting
    /// power).
    fn pool_pair(&self, pool: PoolId) -> Result<Option<PairSnapshot>, LedgerError>;
}
