//! Engine-level errors.

use tally_ledgers::LedgerError;
use tally_registry::RegistryError;
use tally_types::FarmId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("caller is not an administrator")]
    NotAuthorized,

    #[error("farm {0} is not registered with the engine")]
    UnknownFarm(FarmId),

    #[error("farm {0} has implicit membership, its pools cannot be curated")]
    FarmNotCurated(FarmId),

    #[error("arithmetic overflow in voting-power aggregation")]
    Overflow,

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("collaborator read failed: {0}")]
    Collaborator(#[from] LedgerError),
}
