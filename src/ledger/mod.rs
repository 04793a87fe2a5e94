//! Account entities and the mutable, persistence-backed store.

pub mod account;
pub mod store;

pub use account::{Account, AccountDraft, AccountId, ProgramRef};
pub use store::{AccountStore, StoreError, StoreResult};
