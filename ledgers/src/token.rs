//! Read interface to the base-token ledger.

use crate::LedgerError;
use tally_types::AccountId;

/// Read-only view of the base-token ledger.
///
/// Transfer and mint bookkeeping belongs to the collaborator; the engine
/// consumes only these two queries.
pub trait TokenLedger {
    /// Base tokens held directly by the account.
    fn balance_of(&self, account: &AccountId) -> Result<u128, LedgerError>;

    /// Total base tokens in existence.
    fn total_supply(&self) -> Result<u128, LedgerError>;
}
