//! Aggregation helpers for account totals.

use serde::{Deserialize, Serialize};

use crate::domain::Account;

/// Income and outflow totals for one account.
///
/// `outflow_total` is a signed negative sum, not an absolute value. Both
/// filters are strict, so zero-amount movements count toward neither total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AccountSummary {
    pub income_total: f64,
    pub outflow_total: f64,
}

/// Computes the figures displayed next to the movement list.
pub struct SummaryService;

impl SummaryService {
    /// Sums deposits and expenses separately over the stored movements.
    pub fn totals(account: &Account) -> AccountSummary {
        let income_total = account
            .movements
            .iter()
            .map(|mov| mov.amount)
            .filter(|amount| *amount > 0.0)
            .sum();
        let outflow_total = account
            .movements
            .iter()
            .map(|mov| mov.amount)
            .filter(|amount| *amount < 0.0)
            .sum();
        AccountSummary {
            income_total,
            outflow_total,
        }
    }

    /// Current balance for the account.
    pub fn balance(account: &Account) -> f64 {
        account.balance()
    }
}
