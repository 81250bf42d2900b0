//! Injected authority capability.
//!
//! The engine calls this before any mutator runs instead of inheriting an
//! owner field, so the host decides the authorization scheme (single admin,
//! multisig, governance module) without the engine knowing which.

use tally_types::AccountId;

/// Capability check consulted before every administrator-gated mutation.
pub trait Authority {
    /// Whether the account may invoke administrator-gated mutators.
    fn is_admin(&self, who: &AccountId) -> bool;
}

/// A single fixed administrator — the common deployment shape.
pub struct SingleAdmin {
    admin: AccountId,
}

impl SingleAdmin {
    pub fn new(admin: AccountId) -> Self {
        Self { admin }
    }
}

impl Authority for SingleAdmin {
    fn is_admin(&self, who: &AccountId) -> bool {
        *who == self.admin
    }
}
