//! Registry invariant errors.

use tally_types::{FarmId, PoolId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("pool {pool} is already curated for farm {family}")]
    AlreadyMember { family: FarmId, pool: PoolId },

    #[error("pool {pool} is not curated for farm {family}")]
    NotMember { family: FarmId, pool: PoolId },
}
