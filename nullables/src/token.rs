//! Nullable base-token ledger.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tally_ledgers::{LedgerError, TokenLedger};
use tally_types::AccountId;

/// An in-memory base-token ledger for testing.
///
/// Thread-safe; balances only change when a test says so.
pub struct NullTokenLedger {
    balances: Mutex<HashMap<AccountId, u128>>,
    total_supply: Mutex<u128>,
    failed: AtomicBool,
}

impl NullTokenLedger {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            total_supply: Mutex::new(0),
            failed: AtomicBool::new(false),
        }
    }

    /// Credit tokens to an account, growing total supply.
    pub fn mint(&self, account: &AccountId, amount: u128) {
        *self
            .balances
            .lock()
            .unwrap()
            .entry(account.clone())
            .or_default() += amount;
        *self.total_supply.lock().unwrap() += amount;
    }

    /// Switch every subsequent read into failure.
    pub fn set_failed(&self, failed: bool) {
        self.failed.store(failed, Ordering::Relaxed);
    }

    fn check_available(&self) -> Result<(), LedgerError> {
        if self.failed.load(Ordering::Relaxed) {
            Err(LedgerError::Unavailable("token ledger".into()))
        } else {
            Ok(())
        }
    }
}

impl Default for NullTokenLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenLedger for NullTokenLedger {
    fn balance_of(&self, account: &AccountId) -> Result<u128, LedgerError> {
        self.check_available()?;
        Ok(self
            .balances
            .lock()
            .unwrap()
            .get(account)
            .copied()
            .unwrap_or(0))
    }

    fn total_supply(&self) -> Result<u128, LedgerError> {
        self.check_available()?;
        Ok(*self.total_supply.lock().unwrap())
    }
}
