//! Fundamental types for the tally voting-power engine.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: account identities, pool and farm identifiers, and the
//! contribution categories combined by the weighted sum.

pub mod account;
pub mod category;
pub mod ids;

pub use account::AccountId;
pub use category::Category;
pub use ids::{FarmId, PoolId};
