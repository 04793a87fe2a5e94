//! Pure valuation helpers, recomputed on every call.

use crate::ledger::Account;

/// Estimated cash value of one account: `balance * rate / 100`, rate being
/// cents per point. Zero balance or rate yields zero, never an error.
pub fn account_value(account: &Account) -> f64 {
    account.balance as f64 * account.rate / 100.0
}

/// Sum of point balances over the given accounts.
pub fn total_balance(accounts: &[Account]) -> u64 {
    accounts.iter().map(|account| account.balance).sum()
}

/// Sum of estimated cash values over the given accounts.
pub fn total_value(accounts: &[Account]) -> f64 {
    accounts.iter().map(account_value).sum()
}
