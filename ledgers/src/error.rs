//! Collaborator read errors.

use tally_types::PoolId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("collaborator {0} is unavailable")]
    Unavailable(String),

    #[error("pool {0} not found")]
    UnknownPool(PoolId),

    #[error("arithmetic overflow in pool valuation")]
    Overflow,
}
