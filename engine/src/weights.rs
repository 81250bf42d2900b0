//! Administrator-tunable aggregation weights.

use serde::{Deserialize, Serialize};
use tally_types::Category;

/// The weight triple and the sqrt toggle.
///
/// Weights are unbounded non-negative integers; overflow is checked when
/// the weighted sum is computed, not when weights are assigned. The whole
/// value is replaced at once on reconfiguration, so a reader never observes
/// a half-updated triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub liquidity: u128,
    pub staked_share: u128,
    pub direct: u128,
    pub sqrt_enabled: bool,
}

impl WeightConfig {
    pub fn new(liquidity: u128, staked_share: u128, direct: u128) -> Self {
        Self {
            liquidity,
            staked_share,
            direct,
            sqrt_enabled: true,
        }
    }

    /// Weight applied to one contribution category.
    pub fn weight(&self, category: Category) -> u128 {
        match category {
            Category::Liquidity => self.liquidity,
            Category::StakedShare => self.staked_share,
            Category::DirectBalance => self.direct,
        }
    }

    /// `w_l·liquidity + w_s·staked_share + w_d·direct`, fully checked.
    pub fn weighted_sum(
        &self,
        liquidity: u128,
        staked_share: u128,
        direct: u128,
    ) -> Option<u128> {
        let l = self.liquidity.checked_mul(liquidity)?;
        let s = self.staked_share.checked_mul(staked_share)?;
        let d = self.direct.checked_mul(direct)?;
        l.checked_add(s)?.checked_add(d)
    }
}

impl Default for WeightConfig {
    /// Equal weighting with sqrt compression on.
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}
