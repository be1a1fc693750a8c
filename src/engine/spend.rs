use crate::model::{Cart, ShopItem};

/// Medals committed to one catalog item.
pub fn item_spent(item: &ShopItem, cart: &Cart) -> u64 {
    u64::from(cart.quantity(&item.id)).saturating_mul(item.cost)
}

/// Total medals committed by `cart`. The catalog decides which ids count;
/// cart entries it does not list are ignored.
pub fn total_spent(cart: &Cart, shop: &[ShopItem]) -> u64 {
    shop.iter()
        .fold(0u64, |acc, item| acc.saturating_add(item_spent(item, cart)))
}

/// `earned - spent`, negative once the earned total has dropped below an
/// existing cart.
pub fn remaining_balance(total_earned: u64, total_spent: u64) -> i64 {
    let diff = i128::from(total_earned) - i128::from(total_spent);
    diff.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: &str, cost: u64) -> ShopItem {
        ShopItem {
            id: id.into(),
            name: id.into(),
            cost,
            max_exchange: 100,
            qty_per_exchange: 1,
        }
    }

    #[test]
    fn blueprint_and_part_total() {
        let shop = vec![item("dx-blueprint", 250), item("precision-part", 60)];
        let mut cart = Cart::new();
        cart.set_quantity("dx-blueprint", 2);
        cart.set_quantity("precision-part", 1);
        assert_eq!(total_spent(&cart, &shop), 560);
    }

    #[test]
    fn ids_outside_catalog_are_ignored() {
        let shop = vec![item("dx-blueprint", 250)];
        let mut cart = Cart::new();
        cart.set_quantity("retired-item", 7);
        assert_eq!(total_spent(&cart, &shop), 0);
        assert_eq!(total_spent(&Cart::new(), &[]), 0);
    }

    #[test]
    fn balance_goes_negative_when_overspent() {
        assert_eq!(remaining_balance(300, 250), 50);
        assert_eq!(remaining_balance(100, 250), -150);
        assert_eq!(remaining_balance(u64::MAX, 0), i64::MAX);
    }

    proptest! {
        #[test]
        fn total_is_sum_of_products(
            entries in proptest::collection::vec((1u64..1_000, 0u32..200), 0..8),
        ) {
            let shop: Vec<ShopItem> = entries
                .iter()
                .enumerate()
                .map(|(i, (cost, _))| item(&format!("item-{i}"), *cost))
                .collect();
            let mut cart = Cart::new();
            let mut expected = 0u64;
            for (i, (cost, qty)) in entries.iter().enumerate() {
                cart.set_quantity(&format!("item-{i}"), *qty);
                expected += cost * u64::from(*qty);
            }
            prop_assert_eq!(total_spent(&cart, &shop), expected);
        }
    }
}
