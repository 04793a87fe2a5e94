pub mod json_backend;

use crate::errors::TrackerError;
use crate::ledger::Account;

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Abstraction over durable key-value persistence for the account collection
/// and the display preference.
///
/// Loads are fail-soft by contract: the tracker must always start in a
/// usable (possibly empty) state, so read failures fall back to defaults
/// instead of propagating. Saves report failures and callers decide; the
/// account store treats them as best-effort.
pub trait StorageBackend: Send + Sync {
    /// The persisted collection, or empty on missing/corrupt data.
    fn load_accounts(&self) -> Vec<Account>;
    /// Overwrites the full collection under the data key.
    fn save_accounts(&self, accounts: &[Account]) -> Result<()>;
    /// Dark-mode flag; absence or anything unreadable is light mode.
    fn load_display_preference(&self) -> bool;
    fn save_display_preference(&self, dark: bool) -> Result<()>;
}

pub use json_backend::JsonStorage;
