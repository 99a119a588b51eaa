//! Domain model for single ledger movements.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Amounted;

/// A single signed monetary entry with a timestamp and a label.
///
/// Positive amounts are deposits, negative amounts are expenses. Movements
/// are value records: once appended to an account's log they are never
/// edited or removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movement {
    pub date: DateTime<Utc>,
    pub name: String,
    pub amount: f64,
}

impl Movement {
    pub fn new(date: DateTime<Utc>, name: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            name: name.into(),
            amount,
        }
    }

    /// Presentation tag for the movement row.
    ///
    /// A zero amount tags as a deposit; the summary filters are strict, so
    /// it still counts toward neither total.
    pub fn kind(&self) -> MovementKind {
        if self.amount < 0.0 {
            MovementKind::Withdrawal
        } else {
            MovementKind::Deposit
        }
    }
}

impl Amounted for Movement {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Enumerates how a movement row is labelled in presentation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MovementKind::Deposit => "Deposit",
            MovementKind::Withdrawal => "Withdrawal",
        };
        f.write_str(label)
    }
}
