//! Read-only interfaces to the external value-bearing ledgers.
//!
//! The voting-power engine never owns balances. It reads them through the
//! traits in this crate: the base-token ledger, the staked-share vault, and
//! the farms that track staked liquidity positions. Every backend (the real
//! collaborators, or the in-memory nullables for testing) implements these
//! traits; the engine depends only on them.
//!
//! Reads are all-or-nothing: a collaborator that cannot answer returns a
//! `LedgerError`, and the engine aborts the whole query rather than
//! substituting a partial or stale value.

pub mod error;
pub mod farm;
pub mod token;
pub mod value;
pub mod vault;

pub use error::LedgerError;
pub use farm::{FarmLedger, PairSnapshot};
pub use token::TokenLedger;
pub use value::{account_pool_value, liquidity_value, pool_reserve_value};
pub use vault::ShareVault;
