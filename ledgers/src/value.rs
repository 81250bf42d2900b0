//! Pool valuation arithmetic.
//!
//! A staked liquidity position is valued at
//! `staked_lp × base_reserve × 2 / lp_total_supply`: the account's
//! proportional claim on the base-token side of the reserve, doubled
//! because a balanced two-asset pool holds equal value on both sides.
//! Multiplication happens before the (floor) division, and every step is
//! checked.

use crate::farm::{FarmLedger, PairSnapshot};
use crate::LedgerError;
use tally_types::{AccountId, PoolId};

/// Base-token value of `staked_lp` LP tokens against the pair snapshot.
///
/// A pool with zero LP supply has no claims outstanding and values to 0
/// rather than failing the division.
pub fn liquidity_value(staked_lp: u128, pair: &PairSnapshot) -> Result<u128, LedgerError> {
    if staked_lp == 0 || pair.lp_total_supply == 0 {
        return Ok(0);
    }
    let side = staked_lp
        .checked_mul(pair.base_reserve)
        .ok_or(LedgerError::Overflow)?;
    let doubled = side.checked_mul(2).ok_or(LedgerError::Overflow)?;
    Ok(doubled / pair.lp_total_supply)
}

/// Base-token value of the whole pool: every account's share of the
/// reserve sums back to the reserve itself, doubled.
///
/// A pool with zero LP supply has no claimants, so it contributes 0 to the
/// aggregate as well.
pub fn pool_reserve_value(pair: &PairSnapshot) -> Result<u128, LedgerError> {
    if pair.lp_total_supply == 0 {
        return Ok(0);
    }
    pair.base_reserve.checked_mul(2).ok_or(LedgerError::Overflow)
}

/// Value of one account's staked position in one farm pool.
///
/// Pools whose pair lacks the base token value to 0.
pub fn account_pool_value(
    farm: &dyn FarmLedger,
    account: &AccountId,
    pool: PoolId,
) -> Result<u128, LedgerError> {
    let staked = farm.staked_lp(pool, account)?;
    if staked == 0 {
        return Ok(0);
    }
    match farm.pool_pair(pool)? {
        Some(pair) => liquidity_value(staked, &pair),
        None => Ok(0),
    }
}
