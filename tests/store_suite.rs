use std::fs;

use points_core::{
    catalog::Category,
    ledger::{AccountDraft, AccountStore},
    query::{filter_by_category, CategoryFilter},
    storage::{JsonStorage, StorageBackend},
    valuation,
};
use tempfile::tempdir;

fn preset_draft(preset_id: &str, balance: &str, rate: &str) -> AccountDraft {
    AccountDraft {
        preset_id: Some(preset_id.to_string()),
        balance: balance.to_string(),
        rate: rate.to_string(),
        ..AccountDraft::default()
    }
}

#[test]
fn full_session_flow_survives_reopen() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();

    let mut store = AccountStore::open(Box::new(storage.clone()));
    assert!(store.is_empty());

    let amex = store.create(&preset_draft("MR", "10000", "2.2")).unwrap();
    let hyatt = store.create(&preset_draft("WoH", "30000", "2.0")).unwrap();
    let custom = store
        .create(&AccountDraft {
            preset_id: None,
            category: Some(Category::Airline),
            display_name: "House Miles".into(),
            short_code: "hm".into(),
            balance: "5000".into(),
            rate: "1.2".into(),
            color_token: String::new(),
        })
        .unwrap();

    // Fresh store instance sees the same collection, order preserved.
    let reopened = AccountStore::open(Box::new(storage.clone()));
    let ids: Vec<_> = reopened.all().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![amex.id, hyatt.id, custom.id]);
    assert_eq!(reopened.get(custom.id).map(|a| a.short_code.as_str()), Some("HM"));

    // Derived aggregates over the hydrated collection.
    assert_eq!(valuation::total_balance(reopened.all()), 45_000);
    let expected = 10_000.0 * 2.2 / 100.0 + 30_000.0 * 2.0 / 100.0 + 5_000.0 * 1.2 / 100.0;
    assert!((valuation::total_value(reopened.all()) - expected).abs() < 1e-9);

    let airlines = filter_by_category(reopened.all(), CategoryFilter::Only(Category::Airline));
    assert_eq!(airlines.len(), 1);
    assert_eq!(airlines[0].display_name, "House Miles");

    // Deletion persists too.
    let mut store = AccountStore::open(Box::new(storage.clone()));
    store.delete(hyatt.id);
    let reopened = AccountStore::open(Box::new(storage));
    assert_eq!(reopened.len(), 2);
    assert!(reopened.get(hyatt.id).is_none());
}

#[test]
fn corrupt_data_file_starts_empty_and_recovers_on_next_save() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
    fs::write(storage.data_path(), "{not json").unwrap();

    let mut store = AccountStore::open(Box::new(storage.clone()));
    assert!(store.is_empty());

    store.create(&preset_draft("AC", "100", "2.0")).unwrap();
    let reopened = AccountStore::open(Box::new(storage));
    assert_eq!(reopened.len(), 1);
}

#[test]
fn concrete_valuation_scenario() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
    let mut store = AccountStore::open(Box::new(storage));

    let account = store.create(&preset_draft("MR", "10000", "2.2")).unwrap();
    assert!((valuation::account_value(&account) - 220.0).abs() < 1e-9);
    assert_eq!(valuation::total_balance(store.all()), 10_000);
    assert!((valuation::total_value(store.all()) - 220.0).abs() < 1e-9);
}

#[test]
fn display_preference_is_independent_of_account_data() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();

    storage.save_display_preference(true).unwrap();
    let mut store = AccountStore::open(Box::new(storage.clone()));
    let account = store.create(&preset_draft("TD", "800", "0.5")).unwrap();
    store.delete(account.id);

    // Account churn never touches the theme key.
    assert!(storage.load_display_preference());
}
