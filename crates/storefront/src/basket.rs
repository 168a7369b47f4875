//! The shopping basket.
//!
//! A basket is an ordered list of shirt IDs scoped to one session. The same
//! ID may appear multiple times; each occurrence is one unit. Resolution
//! against the catalog happens at read time; IDs that no longer resolve
//! (e.g. after a reseed) are silently excluded from both the displayed
//! lines and the total.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use kitlocker_core::{Price, ShirtId};

use crate::models::Shirt;

/// An ordered, possibly-repeating list of shirt IDs.
///
/// Stored in the session under [`crate::models::session_keys::BASKET`];
/// an absent key means an empty basket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Basket(Vec<ShirtId>);

impl Basket {
    /// Create an empty basket.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Whether the basket holds no units at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of units in the basket (occurrences, not distinct shirts).
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.0.len()
    }

    /// The IDs in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[ShirtId] {
        &self.0
    }

    /// Append a shirt. Repeated adds increase quantity implicitly.
    pub fn add(&mut self, id: ShirtId) {
        self.0.push(id);
    }

    /// Remove the first occurrence of `id`.
    ///
    /// Returns `false` if the ID was not in the basket, leaving the basket
    /// unchanged; callers surface that as a notice, not an error.
    pub fn remove(&mut self, id: ShirtId) -> bool {
        match self.0.iter().position(|&entry| entry == id) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }
}

/// One displayed basket row: a resolved shirt and how many units of it.
#[derive(Debug, Clone)]
pub struct BasketLine {
    pub shirt: Shirt,
    pub quantity: u32,
}

impl BasketLine {
    /// Price of this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.shirt.price * self.quantity
    }
}

/// Fold basket entries into display lines.
///
/// Lines appear in first-occurrence order; entries that do not resolve
/// against `shirts` are skipped silently.
#[must_use]
pub fn resolve_lines(basket: &Basket, shirts: &[Shirt]) -> Vec<BasketLine> {
    let by_id: HashMap<i32, &Shirt> = shirts.iter().map(|s| (s.id.as_i32(), s)).collect();

    let mut lines: Vec<BasketLine> = Vec::new();
    for id in basket.ids() {
        let Some(shirt) = by_id.get(&id.as_i32()) else {
            continue;
        };
        match lines.iter_mut().find(|line| line.shirt.id == *id) {
            Some(line) => line.quantity += 1,
            None => lines.push(BasketLine {
                shirt: (*shirt).clone(),
                quantity: 1,
            }),
        }
    }
    lines
}

/// Sum of all line totals.
#[must_use]
pub fn total(lines: &[BasketLine]) -> Price {
    lines.iter().map(BasketLine::line_total).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use kitlocker_core::UserId;

    use super::*;

    fn shirt(id: i32, pence: i64) -> Shirt {
        Shirt {
            id: ShirtId::new(id),
            team_name: format!("Team {id}"),
            shirt_image: "default.jpg".to_string(),
            price: Price::from_pence(pence),
            description: String::new(),
            environmental_impact: None,
            extended_description: None,
            owner_id: UserId::new(1),
        }
    }

    fn basket_of(ids: &[i32]) -> Basket {
        let mut basket = Basket::new();
        for &id in ids {
            basket.add(ShirtId::new(id));
        }
        basket
    }

    /// Sorted multiset view of a basket's contents.
    fn multiset(basket: &Basket) -> Vec<i32> {
        let mut ids: Vec<i32> = basket.ids().iter().map(ShirtId::as_i32).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_add_remove_matches_naive_simulation() {
        // Interleaved adds and first-match removals against a plain Vec.
        let ops: &[(bool, i32)] = &[
            (true, 1),
            (true, 2),
            (true, 1),
            (false, 1),
            (true, 3),
            (false, 2),
            (false, 9),
            (true, 1),
        ];

        let mut basket = Basket::new();
        let mut naive: Vec<i32> = Vec::new();
        for &(is_add, id) in ops {
            if is_add {
                basket.add(ShirtId::new(id));
                naive.push(id);
            } else {
                let removed = basket.remove(ShirtId::new(id));
                let naive_removed = naive.iter().position(|&x| x == id).map(|i| naive.remove(i));
                assert_eq!(removed, naive_removed.is_some());
            }
        }

        naive.sort_unstable();
        assert_eq!(multiset(&basket), naive);
    }

    #[test]
    fn test_repeated_adds_increase_quantity() {
        let basket = basket_of(&[1, 1, 1]);
        let lines = resolve_lines(&basket, &[shirt(1, 2999)]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines.first().unwrap().quantity, 3);
        assert_eq!(total(&lines), Price::from_pence(8997));
    }

    #[test]
    fn test_remove_absent_id_leaves_basket_unchanged() {
        let mut basket = basket_of(&[1, 2]);
        let before = basket.clone();
        assert!(!basket.remove(ShirtId::new(9)));
        assert_eq!(basket, before);
    }

    #[test]
    fn test_remove_takes_first_occurrence_only() {
        let mut basket = basket_of(&[1, 2, 1]);
        assert!(basket.remove(ShirtId::new(1)));
        assert_eq!(multiset(&basket), vec![1, 2]);
    }

    #[test]
    fn test_total_is_invariant_under_reordering() {
        let shirts = vec![shirt(1, 2999), shirt(2, 2499), shirt(3, 1500)];
        let forwards = resolve_lines(&basket_of(&[1, 2, 3, 1]), &shirts);
        let backwards = resolve_lines(&basket_of(&[1, 3, 2, 1]), &shirts);
        assert_eq!(total(&forwards), total(&backwards));
        assert_eq!(total(&forwards), Price::from_pence(2999 * 2 + 2499 + 1500));
    }

    #[test]
    fn test_unresolvable_entries_are_silently_excluded() {
        let shirts = vec![shirt(1, 2999)];
        let lines = resolve_lines(&basket_of(&[1, 7, 1, 8]), &shirts);
        assert_eq!(lines.len(), 1);
        assert_eq!(total(&lines), Price::from_pence(5998));
    }

    #[test]
    fn test_lines_keep_first_occurrence_order() {
        let shirts = vec![shirt(1, 100), shirt(2, 200), shirt(3, 300)];
        let lines = resolve_lines(&basket_of(&[2, 3, 2, 1]), &shirts);
        let order: Vec<i32> = lines.iter().map(|l| l.shirt.id.as_i32()).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_empty_basket_is_a_distinct_state() {
        let basket = Basket::new();
        assert!(basket.is_empty());
        assert_eq!(basket.unit_count(), 0);
        assert!(resolve_lines(&basket, &[shirt(1, 100)]).is_empty());
    }
}
