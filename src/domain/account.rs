use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};
use crate::domain::movement::Movement;

/// Represents one account and its chronological movement log.
///
/// The log is append-only and insertion order is the order of append, which
/// is not guaranteed to match the order of the movement dates themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub movements: Vec<Movement>,
}

impl Account {
    /// Creates an account from a label and an initial ordered movement list.
    pub fn new(name: impl Into<String>, movements: Vec<Movement>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            movements,
        }
    }

    /// Amounts in stored order.
    pub fn movement_amounts(&self) -> Vec<f64> {
        self.movements.iter().map(|mov| mov.amount).collect()
    }

    /// Dates in stored order.
    pub fn movement_dates(&self) -> Vec<DateTime<Utc>> {
        self.movements.iter().map(|mov| mov.date).collect()
    }

    /// Current balance, always recomputed as a fold over the log.
    pub fn balance(&self) -> f64 {
        self.movements.iter().map(|mov| mov.amount).sum()
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} ({} movements)", self.name, self.movements.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 9, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn balance_is_the_fold_of_all_amounts() {
        let account = Account::new(
            "Personal",
            vec![
                Movement::new(day(9), "Wallet Loaded", 1000.0),
                Movement::new(day(11), "Restaurant", -100.0),
                Movement::new(day(13), "Grocery", -500.0),
            ],
        );
        assert_eq!(account.balance(), 400.0);
        assert_eq!(account.movement_amounts(), vec![1000.0, -100.0, -500.0]);
        assert_eq!(account.movement_dates(), vec![day(9), day(11), day(13)]);
    }

    #[test]
    fn empty_account_balances_to_zero() {
        let account = Account::new("Business", Vec::new());
        assert_eq!(account.balance(), 0.0);
        assert!(account.movement_amounts().is_empty());
    }
}
