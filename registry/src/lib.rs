//! Curated pool registry.
//!
//! Farms with explicit membership contribute a pool to the voting-power
//! aggregate only while the pool's identifier sits in the family's curated
//! set. Sets are unordered; membership tests and removals are O(1) via an
//! arena + position-index layout.

pub mod error;
pub mod registry;

pub use error::RegistryError;
pub use registry::{PoolRegistry, PoolSet};
