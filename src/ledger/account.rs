use serde::{Deserialize, Serialize};

use crate::catalog::{self, Category, PresetEntry, CUSTOM_PRESET_ID, DEFAULT_COLOR};

/// Millisecond-derived identifier, unique within a store for the account's lifetime.
pub type AccountId = i64;

/// Distinguishes catalog-backed accounts (display fields locked to a preset
/// snapshot) from free-form custom accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramRef {
    Preset(String),
    Custom,
}

impl ProgramRef {
    pub fn is_custom(&self) -> bool {
        matches!(self, ProgramRef::Custom)
    }

    pub fn preset_id(&self) -> Option<&str> {
        match self {
            ProgramRef::Preset(id) => Some(id),
            ProgramRef::Custom => None,
        }
    }
}

/// A tracked rewards account: a point balance plus its assumed redemption rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "AccountRecord", into = "AccountRecord")]
pub struct Account {
    pub id: AccountId,
    pub category: Category,
    pub display_name: String,
    pub short_code: String,
    /// Point or mile count, never negative.
    pub balance: u64,
    /// Valuation in cents per point, never negative.
    pub rate: f64,
    /// Opaque styling token, passed through to the presentation layer.
    pub color_token: String,
    pub source: ProgramRef,
}

/// Flat persisted record shape, using the legacy field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountRecord {
    id: i64,
    #[serde(rename = "type")]
    category: Category,
    #[serde(rename = "programName")]
    display_name: String,
    #[serde(rename = "programCode")]
    short_code: String,
    #[serde(default)]
    balance: i64,
    #[serde(rename = "cpp", default)]
    rate: f64,
    #[serde(rename = "color", default)]
    color_token: String,
    #[serde(rename = "presetId", default)]
    preset_id: Option<String>,
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        let source = match record.preset_id.as_deref() {
            None | Some("") | Some(CUSTOM_PRESET_ID) => ProgramRef::Custom,
            Some(id) => ProgramRef::Preset(id.to_string()),
        };
        let color_token = if record.color_token.is_empty() {
            DEFAULT_COLOR.to_string()
        } else {
            record.color_token
        };
        Self {
            id: record.id,
            category: record.category,
            display_name: record.display_name,
            short_code: record.short_code,
            balance: record.balance.max(0) as u64,
            rate: clamp_rate(record.rate),
            color_token,
            source,
        }
    }
}

impl From<Account> for AccountRecord {
    fn from(account: Account) -> Self {
        let preset_id = match &account.source {
            ProgramRef::Preset(id) => id.clone(),
            ProgramRef::Custom => CUSTOM_PRESET_ID.to_string(),
        };
        Self {
            id: account.id,
            category: account.category,
            display_name: account.display_name,
            short_code: account.short_code,
            balance: account.balance as i64,
            rate: account.rate,
            color_token: account.color_token,
            preset_id: Some(preset_id),
        }
    }
}

/// Form-shaped input for creating or editing an account. Numeric fields are
/// raw text, as the entry form produces them.
#[derive(Debug, Clone, Default)]
pub struct AccountDraft {
    /// `None` or the custom sentinel means a user-defined account.
    pub preset_id: Option<String>,
    /// Category for custom accounts; preset-backed drafts take the preset's.
    pub category: Option<Category>,
    pub display_name: String,
    pub short_code: String,
    pub balance: String,
    pub rate: String,
    pub color_token: String,
}

impl AccountDraft {
    /// Pre-fills a draft from a catalog preset, the way the entry form does.
    pub fn from_preset(preset: &PresetEntry) -> Self {
        Self {
            preset_id: Some(preset.id.to_string()),
            category: Some(preset.category),
            display_name: preset.display_name.to_string(),
            short_code: preset.short_code.to_string(),
            balance: String::new(),
            rate: preset.default_rate.to_string(),
            color_token: preset.color_token.to_string(),
        }
    }

    /// Rebuilds the edit form for an existing account.
    pub fn from_account(account: &Account) -> Self {
        Self {
            preset_id: Some(
                account
                    .source
                    .preset_id()
                    .unwrap_or(CUSTOM_PRESET_ID)
                    .to_string(),
            ),
            category: Some(account.category),
            display_name: account.display_name.clone(),
            short_code: account.short_code.clone(),
            balance: account.balance.to_string(),
            rate: account.rate.to_string(),
            color_token: account.color_token.clone(),
        }
    }

    pub fn is_custom(&self) -> bool {
        match self.preset_id.as_deref() {
            None | Some("") | Some(CUSTOM_PRESET_ID) => true,
            Some(_) => false,
        }
    }

    /// The catalog entry backing this draft, if any.
    pub fn preset(&self) -> Option<&'static PresetEntry> {
        self.preset_id.as_deref().and_then(catalog::resolve)
    }
}

/// Coerces raw balance input to a non-negative count; malformed text is 0.
pub fn parse_balance(raw: &str) -> u64 {
    raw.trim().parse::<i64>().unwrap_or(0).max(0) as u64
}

/// Coerces raw rate input to non-negative finite cents-per-point; malformed text is 0.
pub fn parse_rate(raw: &str) -> f64 {
    clamp_rate(raw.trim().parse::<f64>().unwrap_or(0.0))
}

/// Uppercases and trims a custom display code.
pub fn normalize_short_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn clamp_rate(rate: f64) -> f64 {
    if rate.is_finite() && rate > 0.0 {
        rate
    } else {
        0.0
    }
}
