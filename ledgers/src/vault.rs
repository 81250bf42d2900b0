//! Read interface to the staked-share vault.

use crate::LedgerError;
use tally_types::AccountId;

/// Read-only view of the staked-share vault over the base token.
///
/// Shares carry a time-varying exchange rate to the underlying token; the
/// vault performs the conversion so the engine only ever sees base-token
/// amounts.
pub trait ShareVault {
    /// Base tokens the account's shares currently redeem for.
    fn underlying_value_of(&self, account: &AccountId) -> Result<u128, LedgerError>;

    /// Base tokens all outstanding shares currently redeem for.
    fn total_underlying(&self) -> Result<u128, LedgerError>;
}
