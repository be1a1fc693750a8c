use super::storage::{KeyValueStore, StorageError, load_or_default, save_json};
use crate::catalog::Catalog;
use crate::config::{CART_KEY, LEVELS_KEY};
use crate::engine;
use crate::model::{BuildingLevels, Cart, TierKey};
use std::rc::Rc;
use yew::Reducible;

/// Everything the player has entered, plus the catalog it is measured against.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub catalog: Rc<Catalog>,
    pub levels: BuildingLevels,
    pub cart: Cart,
}

#[derive(Clone, Debug)]
pub enum SessionAction {
    SetLevel { key: TierKey, level: u32 },
    ResetLevels,
    SetQuantity { item_id: String, requested: i64 },
    ClearCart,
}

impl Session {
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self {
            catalog,
            levels: BuildingLevels::new(),
            cart: Cart::new(),
        }
    }

    /// Picks up the selections saved by an earlier visit. Unreadable entries
    /// are dropped rather than blocking start-up.
    pub fn restore(catalog: Rc<Catalog>, store: &dyn KeyValueStore) -> Self {
        Self {
            catalog,
            levels: load_or_default(store, LEVELS_KEY),
            cart: load_or_default(store, CART_KEY),
        }
    }

    pub fn persist(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        save_json(store, LEVELS_KEY, &self.levels)?;
        save_json(store, CART_KEY, &self.cart)
    }

    pub fn total_earned(&self) -> u64 {
        engine::total_earned(&self.levels, &self.catalog.tasks)
    }

    pub fn total_spent(&self) -> u64 {
        engine::total_spent(&self.cart, &self.catalog.shop)
    }

    pub fn remaining_balance(&self) -> i64 {
        engine::remaining_balance(self.total_earned(), self.total_spent())
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SessionAction::*;
        let mut new = (*self).clone();
        match action {
            SetLevel { key, level } => {
                let max_level = match self.catalog.category(&key.category) {
                    Some(cat) if cat.has_tier(&key.tier) => cat.max_level(),
                    _ => return self,
                };
                new.levels.set_level(&key, level.min(max_level));
            }
            ResetLevels => new.levels.clear(),
            SetQuantity { item_id, requested } => {
                let earned = self.total_earned();
                let (qty, cart) =
                    engine::clamp_quantity(&item_id, requested, &self.cart, &self.catalog.shop, earned);
                if qty != self.cart.quantity(&item_id) {
                    log::debug!("{item_id}: {} -> {qty} (requested {requested})", self.cart.quantity(&item_id));
                }
                new.cart = cart;
            }
            ClearCart => new.cart.clear(),
        }
        Rc::new(new)
    }
}
