//! Contribution categories combined by the weighted sum.

use serde::{Deserialize, Serialize};

/// The three balance classes that contribute to an account's voting power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Base-token-equivalent value of staked liquidity-pool positions.
    Liquidity,
    /// Base tokens the account's vault shares currently redeem for.
    StakedShare,
    /// Base tokens held directly on the token ledger.
    DirectBalance,
}

impl Category {
    /// All categories, in weighted-sum order.
    pub const ALL: [Category; 3] = [
        Category::Liquidity,
        Category::StakedShare,
        Category::DirectBalance,
    ];

    /// Human-readable name of this category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Liquidity => "liquidity",
            Self::StakedShare => "staked_share",
            Self::DirectBalance => "direct_balance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_distinct() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["liquidity", "staked_share", "direct_balance"]);
    }
}
