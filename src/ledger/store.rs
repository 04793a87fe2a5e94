use chrono::Utc;
use tracing::{debug, warn};

use crate::catalog::{self, Category, DEFAULT_COLOR};
use crate::ledger::account::{
    normalize_short_code, parse_balance, parse_rate, Account, AccountDraft, AccountId, ProgramRef,
};
use crate::storage::StorageBackend;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by store mutations. Neither is fatal: validation sends
/// the caller back to the form, not-found leaves the collection unchanged.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),
    #[error("account {0} not found")]
    NotFound(AccountId),
}

/// The mutable collection of rewards accounts, insertion-ordered. Every
/// successful mutation re-serializes the full collection through the
/// persistence backend; save failures are logged and the in-memory state
/// stays authoritative for the session.
pub struct AccountStore {
    accounts: Vec<Account>,
    storage: Box<dyn StorageBackend>,
}

impl AccountStore {
    /// Hydrates a store from the backend. Always yields a usable store, the
    /// backend load contract falls back to empty on any read failure.
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let accounts = storage.load_accounts();
        debug!(count = accounts.len(), "account store hydrated");
        Self { accounts, storage }
    }

    /// Ordered read-only snapshot.
    pub fn all(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Validates and normalizes the draft, assigns a fresh id, appends, and
    /// persists. Preset-backed drafts snapshot the catalog entry's display
    /// fields at this moment; they are never re-synced afterwards.
    pub fn create(&mut self, draft: &AccountDraft) -> StoreResult<Account> {
        let resolved = resolve_draft(draft)?;
        let account = resolved.into_account(self.fresh_id());
        debug!(id = account.id, name = %account.display_name, "account created");
        self.accounts.push(account.clone());
        self.persist();
        Ok(account)
    }

    /// Replaces the mutable fields of an existing account in place, keeping
    /// its id. Unknown ids leave the collection unchanged.
    pub fn update(&mut self, id: AccountId, draft: &AccountDraft) -> StoreResult<Account> {
        let resolved = resolve_draft(draft)?;
        let slot = self
            .accounts
            .iter_mut()
            .find(|account| account.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = resolved.into_account(id);
        let updated = slot.clone();
        self.persist();
        Ok(updated)
    }

    /// Removes the account with the given id if present. Idempotent.
    pub fn delete(&mut self, id: AccountId) {
        let before = self.accounts.len();
        self.accounts.retain(|account| account.id != id);
        if self.accounts.len() == before {
            debug!(id, "delete of unknown account ignored");
            return;
        }
        self.persist();
    }

    fn fresh_id(&self) -> AccountId {
        // Ids are time tokens; bump past any collision so no id is ever reused.
        let mut id = Utc::now().timestamp_millis();
        while self.accounts.iter().any(|account| account.id == id) {
            id += 1;
        }
        id
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save_accounts(&self.accounts) {
            warn!(error = %err, "persisting accounts failed; keeping in-memory state");
        }
    }
}

struct ResolvedDraft {
    category: Category,
    display_name: String,
    short_code: String,
    balance: u64,
    rate: f64,
    color_token: String,
    source: ProgramRef,
}

impl ResolvedDraft {
    fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            category: self.category,
            display_name: self.display_name,
            short_code: self.short_code,
            balance: self.balance,
            rate: self.rate,
            color_token: self.color_token,
            source: self.source,
        }
    }
}

fn resolve_draft(draft: &AccountDraft) -> StoreResult<ResolvedDraft> {
    let balance = parse_balance(&draft.balance);
    let rate = parse_rate(&draft.rate);

    if draft.is_custom() {
        let display_name = draft.display_name.trim().to_string();
        if display_name.is_empty() {
            return Err(StoreError::Validation(
                "custom accounts need a program name".into(),
            ));
        }
        let short_code = normalize_short_code(&draft.short_code);
        if short_code.is_empty() || short_code.chars().count() > 4 {
            return Err(StoreError::Validation(
                "program code must be 1-4 characters".into(),
            ));
        }
        let category = draft.category.ok_or_else(|| {
            StoreError::Validation("custom accounts need a category".into())
        })?;
        let color_token = if draft.color_token.trim().is_empty() {
            DEFAULT_COLOR.to_string()
        } else {
            draft.color_token.trim().to_string()
        };
        Ok(ResolvedDraft {
            category,
            display_name,
            short_code,
            balance,
            rate,
            color_token,
            source: ProgramRef::Custom,
        })
    } else {
        let preset_id = draft.preset_id.as_deref().unwrap_or_default();
        let preset = catalog::resolve(preset_id).ok_or_else(|| {
            StoreError::Validation(format!("unknown preset `{preset_id}`"))
        })?;
        Ok(ResolvedDraft {
            category: preset.category,
            display_name: preset.display_name.to_string(),
            short_code: preset.short_code.to_string(),
            balance,
            rate,
            color_token: preset.color_token.to_string(),
            source: ProgramRef::Preset(preset.id.to_string()),
        })
    }
}
