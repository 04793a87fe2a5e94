use std::{env, process};

use colored::Colorize;
use dialoguer::Confirm;

use points_core::{
    catalog::{self, Category},
    init,
    ledger::{Account, AccountDraft, AccountId, AccountStore, StoreError},
    query::{filter_by_category, CategoryFilter},
    storage::{JsonStorage, StorageBackend},
    valuation,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });
    let rest: Vec<String> = args.collect();

    let storage = JsonStorage::new_default()?;

    match command.as_str() {
        "presets" => {
            let filter = parse_filter(rest.first())?;
            print_presets(filter);
        }
        "list" => {
            let filter = parse_filter(rest.first())?;
            let store = AccountStore::open(Box::new(storage));
            print_accounts(&store, filter);
        }
        "add" => {
            let mut store = AccountStore::open(Box::new(storage));
            let account = if rest.first().map(String::as_str) == Some(catalog::CUSTOM_PRESET_ID) {
                add_custom(&mut store, &rest[1..])?
            } else {
                add_preset(&mut store, &rest)?
            };
            println!(
                "Added {} ({}) with {} points.",
                account.display_name.bold(),
                account.short_code,
                account.balance
            );
        }
        "update" => {
            let id = parse_id(rest.first())?;
            let balance = rest.get(1).cloned().unwrap_or_else(|| {
                print_usage();
                process::exit(1);
            });
            let mut store = AccountStore::open(Box::new(storage));
            let Some(existing) = store.get(id) else {
                println!("No account with id {id}; nothing to update.");
                return Ok(());
            };
            let mut draft = AccountDraft::from_account(existing);
            draft.balance = balance;
            if let Some(rate) = rest.get(2) {
                draft.rate = rate.clone();
            }
            match store.update(id, &draft) {
                Ok(updated) => println!(
                    "Updated {}: {} points at {} cpp.",
                    updated.display_name.bold(),
                    updated.balance,
                    updated.rate
                ),
                Err(StoreError::NotFound(_)) => {
                    println!("No account with id {id}; nothing to update.")
                }
                Err(err) => return Err(err.into()),
            }
        }
        "remove" => {
            let id = parse_id(rest.first())?;
            let assume_yes = rest.iter().any(|arg| arg == "--yes");
            let mut store = AccountStore::open(Box::new(storage));
            let Some(existing) = store.get(id) else {
                println!("No account with id {id}; nothing to remove.");
                return Ok(());
            };
            let name = existing.display_name.clone();
            if !assume_yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete account `{name}`?"))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Kept {name}.");
                    return Ok(());
                }
            }
            store.delete(id);
            println!("Removed {}.", name.bold());
        }
        "total" => {
            let store = AccountStore::open(Box::new(storage));
            let accounts = store.all();
            println!(
                "{} accounts, {} points, estimated {}",
                accounts.len(),
                valuation::total_balance(accounts),
                format!("${:.2}", valuation::total_value(accounts)).green()
            );
        }
        "theme" => match rest.first().map(String::as_str) {
            None => {
                let mode = if storage.load_display_preference() {
                    "dark"
                } else {
                    "light"
                };
                println!("{mode}");
            }
            Some("dark") => storage.save_display_preference(true)?,
            Some("light") => storage.save_display_preference(false)?,
            Some(other) => return Err(format!("unknown theme `{other}`").into()),
        },
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn add_preset(store: &mut AccountStore, args: &[String]) -> Result<Account, Box<dyn std::error::Error>> {
    let (preset_id, balance) = match (args.first(), args.get(1)) {
        (Some(preset_id), Some(balance)) => (preset_id, balance),
        _ => {
            print_usage();
            process::exit(1);
        }
    };
    let preset = catalog::resolve(preset_id)
        .ok_or_else(|| format!("unknown preset `{preset_id}`; see `presets`"))?;
    let mut draft = AccountDraft::from_preset(preset);
    draft.balance = balance.clone();
    if let Some(rate) = args.get(2) {
        draft.rate = rate.clone();
    }
    Ok(store.create(&draft)?)
}

fn add_custom(store: &mut AccountStore, args: &[String]) -> Result<Account, Box<dyn std::error::Error>> {
    let (category, name, code, balance, rate) =
        match (args.first(), args.get(1), args.get(2), args.get(3), args.get(4)) {
            (Some(category), Some(name), Some(code), Some(balance), Some(rate)) => {
                (category, name, code, balance, rate)
            }
            _ => {
                print_usage();
                process::exit(1);
            }
        };
    let draft = AccountDraft {
        preset_id: None,
        category: Some(category.parse::<Category>()?),
        display_name: name.clone(),
        short_code: code.clone(),
        balance: balance.clone(),
        rate: rate.clone(),
        color_token: args.get(5).cloned().unwrap_or_default(),
    };
    Ok(store.create(&draft)?)
}

fn print_presets(filter: CategoryFilter) {
    for category in Category::ALL {
        if let CategoryFilter::Only(only) = filter {
            if only != category {
                continue;
            }
        }
        println!("{}", category.to_string().to_uppercase().bold());
        for preset in catalog::list_by_category(category) {
            println!(
                "  {:<5} {:<30} {:.1} cpp",
                preset.id, preset.label, preset.default_rate
            );
        }
    }
}

fn print_accounts(store: &AccountStore, filter: CategoryFilter) {
    let accounts = filter_by_category(store.all(), filter);
    if accounts.is_empty() {
        println!("No accounts.");
        return;
    }
    for account in &accounts {
        println!(
            "{:<15} {:<4} {:<22} {:<8} {:>10} pts  {:>4.1} cpp  {}",
            account.id,
            account.short_code,
            account.display_name.bold(),
            account.category,
            account.balance,
            account.rate,
            format!("${:.2}", valuation::account_value(account)).green()
        );
    }
    let owned: Vec<Account> = accounts.into_iter().cloned().collect();
    println!(
        "{}: {} points, {}",
        "Total".bold(),
        valuation::total_balance(&owned),
        format!("${:.2}", valuation::total_value(&owned)).green()
    );
}

fn parse_filter(arg: Option<&String>) -> Result<CategoryFilter, String> {
    match arg {
        None => Ok(CategoryFilter::All),
        Some(raw) => raw.parse(),
    }
}

fn parse_id(arg: Option<&String>) -> Result<AccountId, Box<dyn std::error::Error>> {
    let raw = arg.unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });
    Ok(raw.parse::<AccountId>().map_err(|_| format!("invalid account id `{raw}`"))?)
}

fn print_usage() {
    eprintln!(
        "Usage: points_core_cli <command>\n\
         Commands:\n  \
         presets [category]\n  \
         list [all|airline|hotel|bank]\n  \
         add <presetId> <balance> [cpp]\n  \
         add custom <category> <name> <code> <balance> <cpp> [color]\n  \
         update <id> <balance> [cpp]\n  \
         remove <id> [--yes]\n  \
         total\n  \
         theme [dark|light]"
    );
}
