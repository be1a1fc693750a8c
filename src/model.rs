//! Core data models for the rebate calculator.
//! Catalog entries are immutable once loaded; `BuildingLevels` and `Cart`
//! are the mutable selections owned by the session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separator between category and tier in a level storage key.
/// Catalog labels may not contain it, which keeps keys collision-free.
pub const TIER_KEY_SEPARATOR: char = '-';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub level: u32,
    pub reward: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCategory {
    pub category: String,
    /// Tier labels, in display order. Every tier shares `milestones`.
    pub tiers: Vec<String>,
    pub milestones: Vec<Milestone>,
}

impl TaskCategory {
    /// Highest milestone level; the slider never needs to go further.
    pub fn max_level(&self) -> u32 {
        self.milestones.iter().map(|m| m.level).max().unwrap_or(0)
    }

    pub fn has_tier(&self, tier: &str) -> bool {
        self.tiers.iter().any(|t| t == tier)
    }

    pub fn tier_key(&self, tier: &str) -> TierKey {
        TierKey::new(&self.category, tier)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    /// Medals per unit.
    pub cost: u64,
    /// Per-item purchase cap.
    pub max_exchange: u32,
    /// Units granted per exchange (display only).
    pub qty_per_exchange: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TierKey {
    pub category: String,
    pub tier: String,
}

impl TierKey {
    pub fn new(category: &str, tier: &str) -> Self {
        Self {
            category: category.to_string(),
            tier: tier.to_string(),
        }
    }

    /// Key used inside `BuildingLevels`, e.g. `Thermal Lab-I`.
    pub fn storage_key(&self) -> String {
        format!("{}{}{}", self.category, TIER_KEY_SEPARATOR, self.tier)
    }
}

/// Per-tier building levels. Missing entries read as level 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingLevels(BTreeMap<String, u32>);

impl BuildingLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, key: &TierKey) -> u32 {
        self.0.get(&key.storage_key()).copied().unwrap_or(0)
    }

    pub fn set_level(&mut self, key: &TierKey, level: u32) {
        self.0.insert(key.storage_key(), level);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Shop quantities keyed by item id. Missing entries read as 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(BTreeMap<String, u32>);

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self, item_id: &str) -> u32 {
        self.0.get(item_id).copied().unwrap_or(0)
    }

    pub fn set_quantity(&mut self, item_id: &str, qty: u32) {
        self.0.insert(item_id.to_string(), qty);
    }

    /// Returns a copy with `item_id` mapped to `qty`; other entries untouched.
    pub fn with_quantity(&self, item_id: &str, qty: u32) -> Self {
        let mut next = self.clone();
        next.set_quantity(item_id, qty);
        next
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|&q| q == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_key_uses_separator() {
        let key = TierKey::new("Thermal Lab", "I");
        assert_eq!(key.storage_key(), "Thermal Lab-I");
    }

    #[test]
    fn missing_entries_read_as_zero() {
        let levels = BuildingLevels::new();
        assert_eq!(levels.level(&TierKey::new("Thermal Lab", "II")), 0);
        let cart = Cart::new();
        assert_eq!(cart.quantity("dx-blueprint"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn with_quantity_leaves_other_entries() {
        let mut cart = Cart::new();
        cart.set_quantity("a", 2);
        cart.set_quantity("b", 1);
        let next = cart.with_quantity("a", 5);
        assert_eq!(next.quantity("a"), 5);
        assert_eq!(next.quantity("b"), 1);
        assert_eq!(cart.quantity("a"), 2);
    }

    #[test]
    fn persisted_forms_are_plain_objects() {
        let mut levels = BuildingLevels::new();
        levels.set_level(&TierKey::new("Thermal Lab", "I"), 15);
        assert_eq!(
            serde_json::to_string(&levels).unwrap(),
            r#"{"Thermal Lab-I":15}"#
        );

        let cart: Cart = serde_json::from_str(r#"{"dx-blueprint":2,"precision-part":1}"#).unwrap();
        assert_eq!(cart.quantity("dx-blueprint"), 2);
        assert_eq!(cart.quantity("precision-part"), 1);
    }

    #[test]
    fn shop_item_reads_camel_case_fields() {
        let item: ShopItem = serde_json::from_str(
            r#"{"id":"x","name":"X","cost":10,"maxExchange":3,"qtyPerExchange":5}"#,
        )
        .unwrap();
        assert_eq!(item.max_exchange, 3);
        assert_eq!(item.qty_per_exchange, 5);
    }

    #[test]
    fn max_level_of_empty_table_is_zero() {
        let cat = TaskCategory {
            category: "Empty".into(),
            tiers: vec!["I".into()],
            milestones: vec![],
        };
        assert_eq!(cat.max_level(), 0);
    }
}
