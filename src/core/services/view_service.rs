//! Derived, display-ordered movement views and their direction state.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::{Account, Movement};

/// Selects how a movement view is ordered.
///
/// Exactly one mode is honored per request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[derive(Default)]
pub enum ViewMode {
    /// Stored order, unchanged.
    #[default]
    Identity,
    ByDate,
    ByName,
    ByAmount,
}

impl ViewMode {
    /// Resolves the three-flag request convention used by button-per-sort
    /// front ends: date wins over name, name over amount, no flag set means
    /// stored order.
    pub fn from_flags(by_date: bool, by_name: bool, by_amount: bool) -> Self {
        if by_date {
            ViewMode::ByDate
        } else if by_name {
            ViewMode::ByName
        } else if by_amount {
            ViewMode::ByAmount
        } else {
            ViewMode::Identity
        }
    }
}

/// Direction flip-flops for the three sorting modes.
///
/// Each sorting request flips the toggle of its own mode, so repeated
/// requests alternate direction. The value is owned by the caller, one per
/// UI session; switching the viewed account does not reset it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortToggles {
    date_descending: bool,
    name_ascending: bool,
    amount_ascending: bool,
}

impl Default for SortToggles {
    /// First date sort is most-recent-first, first name sort A to Z, first
    /// amount sort smallest-first.
    fn default() -> Self {
        Self {
            date_descending: true,
            name_ascending: true,
            amount_ascending: true,
        }
    }
}

impl SortToggles {
    pub fn new() -> Self {
        Self::default()
    }

    fn flip_date(&mut self) -> bool {
        let descending = self.date_descending;
        self.date_descending = !descending;
        descending
    }

    fn flip_name(&mut self) -> bool {
        let ascending = self.name_ascending;
        self.name_ascending = !ascending;
        ascending
    }

    fn flip_amount(&mut self) -> bool {
        let ascending = self.amount_ascending;
        self.amount_ascending = !ascending;
        ascending
    }
}

/// Produces ordered movement snapshots for presentation.
pub struct ViewService;

impl ViewService {
    /// Returns a display-ordered copy of the account's movements.
    ///
    /// The stored log is never reordered; sorting modes work on a copy and
    /// flip their own toggle on every call, whatever the outcome. `Identity`
    /// touches no toggle.
    pub fn movements(
        account: &Account,
        mode: ViewMode,
        toggles: &mut SortToggles,
    ) -> Vec<Movement> {
        let mut movements = account.movements.clone();
        match mode {
            ViewMode::Identity => {}
            ViewMode::ByDate => {
                let descending = toggles.flip_date();
                movements.sort_by(|a, b| {
                    if descending {
                        b.date.cmp(&a.date)
                    } else {
                        a.date.cmp(&b.date)
                    }
                });
            }
            ViewMode::ByName => {
                let ascending = toggles.flip_name();
                movements.sort_by(|a, b| {
                    if ascending {
                        a.name.cmp(&b.name)
                    } else {
                        b.name.cmp(&a.name)
                    }
                });
            }
            ViewMode::ByAmount => {
                let ascending = toggles.flip_amount();
                movements.sort_by(|a, b| {
                    let ordering = a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal);
                    if ascending {
                        ordering
                    } else {
                        ordering.reverse()
                    }
                });
            }
        }
        movements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn day(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 9, day, 12, 0, 0).unwrap()
    }

    fn seeded_account() -> Account {
        Account::new(
            "Personal",
            vec![
                Movement::new(day(9), "Wallet Loaded", 1000.0),
                Movement::new(day(11), "Restaurant", -100.0),
                Movement::new(day(13), "Grocery", -500.0),
            ],
        )
    }

    fn amounts(movements: &[Movement]) -> Vec<f64> {
        movements.iter().map(|mov| mov.amount).collect()
    }

    fn names(movements: &[Movement]) -> Vec<&str> {
        movements.iter().map(|mov| mov.name.as_str()).collect()
    }

    #[test]
    fn identity_returns_stored_order_and_keeps_toggles() {
        let account = seeded_account();
        let mut toggles = SortToggles::new();
        let view = ViewService::movements(&account, ViewMode::Identity, &mut toggles);
        assert_eq!(amounts(&view), vec![1000.0, -100.0, -500.0]);
        assert_eq!(toggles, SortToggles::new());
    }

    #[test]
    fn by_date_alternates_descending_then_ascending() {
        let account = seeded_account();
        let mut toggles = SortToggles::new();

        let first = ViewService::movements(&account, ViewMode::ByDate, &mut toggles);
        assert_eq!(
            first.iter().map(|mov| mov.date).collect::<Vec<_>>(),
            vec![day(13), day(11), day(9)],
        );

        let second = ViewService::movements(&account, ViewMode::ByDate, &mut toggles);
        assert_eq!(
            second.iter().map(|mov| mov.date).collect::<Vec<_>>(),
            vec![day(9), day(11), day(13)],
        );

        let reversed: Vec<_> = second.iter().rev().cloned().collect();
        assert_eq!(first, reversed);
    }

    #[test]
    fn by_amount_alternates_ascending_then_descending() {
        let account = seeded_account();
        let mut toggles = SortToggles::new();

        let first = ViewService::movements(&account, ViewMode::ByAmount, &mut toggles);
        assert_eq!(amounts(&first), vec![-500.0, -100.0, 1000.0]);

        let second = ViewService::movements(&account, ViewMode::ByAmount, &mut toggles);
        assert_eq!(amounts(&second), vec![1000.0, -100.0, -500.0]);
    }

    #[test]
    fn by_name_sorts_lexically_and_alternates() {
        let account = seeded_account();
        let mut toggles = SortToggles::new();

        let first = ViewService::movements(&account, ViewMode::ByName, &mut toggles);
        assert_eq!(names(&first), vec!["Grocery", "Restaurant", "Wallet Loaded"]);

        let second = ViewService::movements(&account, ViewMode::ByName, &mut toggles);
        assert_eq!(names(&second), vec!["Wallet Loaded", "Restaurant", "Grocery"]);
    }

    #[test]
    fn toggles_are_independent_per_mode() {
        let account = seeded_account();
        let mut toggles = SortToggles::new();

        // Two date sorts leave the amount toggle at its initial direction.
        ViewService::movements(&account, ViewMode::ByDate, &mut toggles);
        ViewService::movements(&account, ViewMode::ByDate, &mut toggles);
        let view = ViewService::movements(&account, ViewMode::ByAmount, &mut toggles);
        assert_eq!(amounts(&view), vec![-500.0, -100.0, 1000.0]);
    }

    #[test]
    fn toggles_survive_switching_accounts() {
        let personal = seeded_account();
        let business = Account::new(
            "Business",
            vec![
                Movement::new(day(1), "Invoice", 300.0),
                Movement::new(day(2), "Supplies", -80.0),
            ],
        );
        let mut toggles = SortToggles::new();

        ViewService::movements(&personal, ViewMode::ByDate, &mut toggles);
        let view = ViewService::movements(&business, ViewMode::ByDate, &mut toggles);
        assert_eq!(
            view.iter().map(|mov| mov.date).collect::<Vec<_>>(),
            vec![day(1), day(2)],
        );
    }

    #[test]
    fn sorting_never_mutates_the_stored_log() {
        let account = seeded_account();
        let mut toggles = SortToggles::new();
        ViewService::movements(&account, ViewMode::ByAmount, &mut toggles);
        ViewService::movements(&account, ViewMode::ByName, &mut toggles);
        assert_eq!(account.movement_amounts(), vec![1000.0, -100.0, -500.0]);
    }

    #[test]
    fn from_flags_resolves_date_first() {
        assert_eq!(ViewMode::from_flags(true, true, true), ViewMode::ByDate);
        assert_eq!(ViewMode::from_flags(false, true, true), ViewMode::ByName);
        assert_eq!(ViewMode::from_flags(false, false, true), ViewMode::ByAmount);
        assert_eq!(ViewMode::from_flags(false, false, false), ViewMode::Identity);
    }
}
