//! Nullable staked-share vault.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tally_ledgers::{LedgerError, ShareVault};
use tally_types::AccountId;

#[derive(Default)]
struct VaultState {
    shares: HashMap<AccountId, u128>,
    total_shares: u128,
    underlying: u128,
}

/// An in-memory share vault for testing.
///
/// Deposits mint shares at the current exchange rate; `add_yield` grows the
/// underlying without minting shares, which is how the rate appreciates.
pub struct NullShareVault {
    state: Mutex<VaultState>,
    failed: AtomicBool,
}

impl NullShareVault {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(VaultState::default()),
            failed: AtomicBool::new(false),
        }
    }

    /// Deposit base tokens for an account, minting shares proportionally.
    pub fn enter(&self, account: &AccountId, amount: u128) {
        let mut state = self.state.lock().unwrap();
        let minted = if state.total_shares == 0 || state.underlying == 0 {
            amount
        } else {
            amount * state.total_shares / state.underlying
        };
        *state.shares.entry(account.clone()).or_default() += minted;
        state.total_shares += minted;
        state.underlying += amount;
    }

    /// Grow the underlying without minting shares (yield accrual).
    pub fn add_yield(&self, amount: u128) {
        self.state.lock().unwrap().underlying += amount;
    }

    /// Switch every subsequent read into failure.
    pub fn set_failed(&self, failed: bool) {
        self.failed.store(failed, Ordering::Relaxed);
    }

    fn check_available(&self) -> Result<(), LedgerError> {
        if self.failed.load(Ordering::Relaxed) {
            Err(LedgerError::Unavailable("share vault".into()))
        } else {
            Ok(())
        }
    }
}

impl Default for NullShareVault {
    fn default() -> Self {
        Self::new()
    }
}

impl ShareVault for NullShareVault {
    fn underlying_value_of(&self, account: &AccountId) -> Result<u128, LedgerError> {
        self.check_available()?;
        let state = self.state.lock().unwrap();
        let shares = state.shares.get(account).copied().unwrap_or(0);
        if shares == 0 || state.total_shares == 0 {
            return Ok(0);
        }
        Ok(shares * state.underlying / state.total_shares)
    }

    fn total_underlying(&self) -> Result<u128, LedgerError> {
        self.check_available()?;
        Ok(self.state.lock().unwrap().underlying)
    }
}
