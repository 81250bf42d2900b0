//! The voting-power aggregation engine.

use crate::authority::Authority;
use crate::error::EngineError;
use crate::sqrt::isqrt;
use crate::weights::WeightConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tally_ledgers::{account_pool_value, pool_reserve_value, FarmLedger, ShareVault, TokenLedger};
use tally_registry::PoolRegistry;
use tally_types::{AccountId, FarmId, PoolId};

/// How a farm's pools join the aggregate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Membership {
    /// Every pool the farm currently enumerates contributes automatically.
    Implicit,
    /// A pool contributes only while curated in the registry.
    Curated,
}

struct FarmSource {
    farm: Arc<dyn FarmLedger>,
    membership: Membership,
}

/// Computes per-account voting power and the aggregate total supply from
/// the wired collaborators, the curated registry, and the weight
/// configuration.
///
/// Queries take `&self` and recompute from current collaborator state every
/// time. Mutators take `&mut self` and check the injected [`Authority`]
/// first; a rejected call mutates nothing.
pub struct VotingPowerEngine {
    token: Arc<dyn TokenLedger>,
    vault: Arc<dyn ShareVault>,
    farms: Vec<FarmSource>,
    registry: PoolRegistry,
    weights: WeightConfig,
    authority: Arc<dyn Authority>,
}

impl VotingPowerEngine {
    /// Wire the token ledger, the vault, and the authority capability.
    /// Weights start at the default equal weighting with sqrt enabled.
    pub fn new(
        token: Arc<dyn TokenLedger>,
        vault: Arc<dyn ShareVault>,
        authority: Arc<dyn Authority>,
    ) -> Self {
        Self {
            token,
            vault,
            farms: Vec::new(),
            registry: PoolRegistry::new(),
            weights: WeightConfig::default(),
            authority,
        }
    }

    /// Wire a farm with its membership policy. Construction-time plumbing,
    /// not part of the gated admin surface.
    pub fn register_farm(&mut self, farm: Arc<dyn FarmLedger>, membership: Membership) -> FarmId {
        let id = self.farms.len() as FarmId;
        self.farms.push(FarmSource { farm, membership });
        tracing::debug!(farm = id, ?membership, "farm registered");
        id
    }

    /// Current weight configuration.
    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    /// Whether a pool is currently curated for a farm.
    pub fn is_member(&self, farm: FarmId, pool: PoolId) -> bool {
        self.registry.contains(farm, pool)
    }

    /// Curated pools of a farm, in unspecified order.
    pub fn members(&self, farm: FarmId) -> impl Iterator<Item = PoolId> + '_ {
        self.registry.members(farm)
    }

    // --- admin surface -----------------------------------------------------

    /// Replace all three weights at once. The sqrt toggle is untouched.
    pub fn set_weights(
        &mut self,
        caller: &AccountId,
        liquidity: u128,
        staked_share: u128,
        direct: u128,
    ) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        self.weights = WeightConfig {
            liquidity,
            staked_share,
            direct,
            sqrt_enabled: self.weights.sqrt_enabled,
        };
        tracing::info!(liquidity, staked_share, direct, "voting weights updated");
        Ok(())
    }

    /// Toggle sqrt compression of the final aggregate.
    pub fn set_sqrt_enabled(&mut self, caller: &AccountId, enabled: bool) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        self.weights.sqrt_enabled = enabled;
        tracing::info!(enabled, "sqrt compression toggled");
        Ok(())
    }

    /// Curate a pool for an explicit-membership farm. Subsequent queries
    /// include the pool immediately.
    pub fn add_pool(
        &mut self,
        caller: &AccountId,
        farm: FarmId,
        pool: PoolId,
    ) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        self.ensure_curated(farm)?;
        self.registry.add(farm, pool)?;
        tracing::info!(farm, pool, "pool curated");
        Ok(())
    }

    /// Remove a pool from an explicit-membership farm's curated set.
    /// Subsequent queries exclude the pool immediately.
    pub fn remove_pool(
        &mut self,
        caller: &AccountId,
        farm: FarmId,
        pool: PoolId,
    ) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        self.ensure_curated(farm)?;
        self.registry.remove(farm, pool)?;
        tracing::info!(farm, pool, "pool uncurated");
        Ok(())
    }

    // --- query surface -----------------------------------------------------

    /// Voting power of one account.
    ///
    /// Weighted sum of the account's direct balance, vault underlying
    /// value, and contributing staked-liquidity value, square-rooted when
    /// enabled. An account with no balances anywhere scores 0.
    pub fn power_of(&self, account: &AccountId) -> Result<u128, EngineError> {
        let direct = self.token.balance_of(account)?;
        let staked = self.vault.underlying_value_of(account)?;
        let liquidity = self.account_liquidity(account)?;
        let raw = self
            .weights
            .weighted_sum(liquidity, staked, direct)
            .ok_or(EngineError::Overflow)?;
        Ok(self.finish(raw))
    }

    /// Aggregate voting power across all accounts, via each collaborator's
    /// own aggregate: total token supply, total vault underlying, and the
    /// doubled base reserve of every contributing pool.
    ///
    /// The sqrt is applied once to the summed raw value. This is the
    /// all-accounts sum of pre-sqrt components — deliberately not the sum
    /// of per-account post-sqrt scores, since sqrt is not additive.
    pub fn total_supply(&self) -> Result<u128, EngineError> {
        let direct = self.token.total_supply()?;
        let staked = self.vault.total_underlying()?;
        let liquidity = self.reserve_liquidity()?;
        let raw = self
            .weights
            .weighted_sum(liquidity, staked, direct)
            .ok_or(EngineError::Overflow)?;
        Ok(self.finish(raw))
    }

    // --- internals ---------------------------------------------------------

    fn ensure_admin(&self, caller: &AccountId) -> Result<(), EngineError> {
        if self.authority.is_admin(caller) {
            Ok(())
        } else {
            Err(EngineError::NotAuthorized)
        }
    }

    fn ensure_curated(&self, farm: FarmId) -> Result<(), EngineError> {
        let source = self
            .farms
            .get(farm as usize)
            .ok_or(EngineError::UnknownFarm(farm))?;
        match source.membership {
            Membership::Curated => Ok(()),
            Membership::Implicit => Err(EngineError::FarmNotCurated(farm)),
        }
    }

    /// Sum of the account's staked-position values over every contributing
    /// pool of every farm.
    fn account_liquidity(&self, account: &AccountId) -> Result<u128, EngineError> {
        let mut total: u128 = 0;
        for (id, source) in self.farms.iter().enumerate() {
            let farm = source.farm.as_ref();
            match source.membership {
                Membership::Implicit => {
                    let count = farm.pool_count()?;
                    for index in 0..count {
                        let pool = farm.pool_id(index)?;
                        let value = account_pool_value(farm, account, pool)?;
                        total = total.checked_add(value).ok_or(EngineError::Overflow)?;
                    }
                }
                Membership::Curated => {
                    for pool in self.registry.members(id as FarmId) {
                        let value = account_pool_value(farm, account, pool)?;
                        total = total.checked_add(value).ok_or(EngineError::Overflow)?;
                    }
                }
            }
        }
        Ok(total)
    }

    /// Sum of every contributing pool's doubled base reserve — the
    /// all-accounts counterpart of [`Self::account_liquidity`].
    fn reserve_liquidity(&self) -> Result<u128, EngineError> {
        let mut total: u128 = 0;
        for (id, source) in self.farms.iter().enumerate() {
            let farm = source.farm.as_ref();
            match source.membership {
                Membership::Implicit => {
                    let count = farm.pool_count()?;
                    for index in 0..count {
                        let pool = farm.pool_id(index)?;
                        let value = Self::pool_total_value(farm, pool)?;
                        total = total.checked_add(value).ok_or(EngineError::Overflow)?;
                    }
                }
                Membership::Curated => {
                    for pool in self.registry.members(id as FarmId) {
                        let value = Self::pool_total_value(farm, pool)?;
                        total = total.checked_add(value).ok_or(EngineError::Overflow)?;
                    }
                }
            }
        }
        Ok(total)
    }

    fn pool_total_value(farm: &dyn FarmLedger, pool: PoolId) -> Result<u128, EngineError> {
        match farm.pool_pair(pool)? {
            Some(pair) => Ok(pool_reserve_value(&pair)?),
            None => Ok(0),
        }
    }

    fn finish(&self, raw: u128) -> u128 {
        if self.weights.sqrt_enabled {
            isqrt(raw)
        } else {
            raw
        }
    }
}
