//! Read-only filtering over account collections.

use std::str::FromStr;

use crate::catalog::Category;
use crate::ledger::Account;

/// Category filter for list views; `All` is the identity filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            value.parse::<Category>().map(CategoryFilter::Only)
        }
    }
}

/// Returns the accounts matching the filter, preserving input order. Total:
/// empty input or no matches yields an empty sequence.
pub fn filter_by_category<'a>(
    accounts: &'a [Account],
    filter: CategoryFilter,
) -> Vec<&'a Account> {
    accounts
        .iter()
        .filter(|account| match filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => account.category == category,
        })
        .collect()
}
