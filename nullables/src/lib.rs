//! Nullable collaborators for deterministic testing.
//!
//! The engine reads balances through the `tally-ledgers` traits. This crate
//! provides in-memory implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically (mint, stake, yield, reserves)
//! - Can be switched into a failed state to exercise
//!   collaborator-unavailable paths
//!
//! Usage: wire nullables into the engine in tests instead of real ledgers.

pub mod farm;
pub mod token;
pub mod vault;

pub use farm::NullFarm;
pub use token::NullTokenLedger;
pub use vault::NullShareVault;
