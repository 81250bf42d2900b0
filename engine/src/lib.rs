//! Voting-power aggregation engine.
//!
//! Computes a governance voting-power score for an account from balances
//! held across independent ledgers — direct token balance, staked-share
//! vault value, and staked liquidity-pool positions — combined with
//! administrator-tunable weights and optionally compressed through an
//! integer square root so power grows sub-linearly with capital.
//!
//! The engine is a pure synchronous read path: every query recomputes from
//! current collaborator state, nothing is cached, and a failed collaborator
//! read aborts the whole query. Mutators take `&mut self`, so a host that
//! shares the engine across threads supplies its own synchronization and
//! readers observe configuration changes atomically.

pub mod authority;
pub mod engine;
pub mod error;
pub mod sqrt;
pub mod weights;

pub use authority::{Authority, SingleAdmin};
pub use engine::{Membership, VotingPowerEngine};
pub use error::EngineError;
pub use sqrt::isqrt;
pub use weights::WeightConfig;
