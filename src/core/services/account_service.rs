//! Mutation entry points for account movement logs.

use chrono::{DateTime, Utc};

use crate::domain::{Account, Movement};
use crate::errors::LedgerError;

use super::ServiceResult;

/// Validated append operations over an account's movement log.
///
/// These are the only operations in the crate that mutate ledger state;
/// everything else reads a snapshot. Deposits and expenses are deliberately
/// asymmetric: expenses are checked against the balance, deposits are not.
pub struct AccountService;

impl AccountService {
    /// Appends a deposit movement.
    ///
    /// The amount is stored as given, whatever its sign. Only a non-finite
    /// amount is refused, as a caller contract violation.
    pub fn record_deposit(
        account: &mut Account,
        amount: f64,
        name: impl Into<String>,
        date: DateTime<Utc>,
    ) -> ServiceResult<()> {
        ensure_finite(amount)?;
        account.movements.push(Movement::new(date, name, amount));
        tracing::debug!(account = %account.name, amount, "deposit recorded");
        Ok(())
    }

    /// Appends an expense movement, stored with a negated amount.
    ///
    /// Returns `Ok(false)` without touching the log when the amount is not
    /// strictly positive or exceeds the current balance. Rejection is
    /// silent; the caller decides whether to surface feedback.
    pub fn record_expense(
        account: &mut Account,
        amount: f64,
        name: impl Into<String>,
        date: DateTime<Utc>,
    ) -> ServiceResult<bool> {
        ensure_finite(amount)?;
        if amount <= 0.0 || amount > account.balance() {
            tracing::debug!(account = %account.name, amount, "expense rejected");
            return Ok(false);
        }
        account.movements.push(Movement::new(date, name, -amount));
        tracing::debug!(account = %account.name, amount, "expense recorded");
        Ok(true)
    }
}

fn ensure_finite(amount: f64) -> ServiceResult<()> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(LedgerError::NonFiniteAmount(amount))
    }
}
