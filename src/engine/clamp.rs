use super::spend::total_spent;
use crate::model::{Cart, ShopItem};

/// Most units of `item` the budget can hold, counting the medals already
/// committed to `item` as available again, capped at `max_exchange`.
pub fn affordable_quantity(item: &ShopItem, cart: &Cart, shop: &[ShopItem], total_earned: u64) -> u32 {
    if item.cost == 0 {
        return item.max_exchange;
    }
    let current_spent = u64::from(cart.quantity(&item.id)).saturating_mul(item.cost);
    let remaining = i128::from(total_earned) - i128::from(total_spent(cart, shop));
    let available = (remaining + i128::from(current_spent)).max(0);
    let max_affordable = u32::try_from(available / i128::from(item.cost)).unwrap_or(u32::MAX);
    max_affordable.min(item.max_exchange)
}

/// Whether the plus button may add one more unit at the current balance.
pub fn can_afford_one_more(item: &ShopItem, remaining_balance: i64) -> bool {
    i128::from(remaining_balance) >= i128::from(item.cost)
}

/// Constrains a requested quantity for `item_id` and returns it together with
/// the updated cart.
///
/// The item's current spend is refunded before the budget is checked, so an
/// edit can always reclaim what the item already holds even when other items
/// have absorbed the rest of the balance. Negative requests become 0. An id
/// the catalog does not know leaves the cart untouched and reports the
/// quantity already stored for it.
pub fn clamp_quantity(
    item_id: &str,
    requested: i64,
    cart: &Cart,
    shop: &[ShopItem],
    total_earned: u64,
) -> (u32, Cart) {
    let Some(item) = shop.iter().find(|i| i.id == item_id) else {
        log::debug!("clamp ignored for unknown item '{item_id}'");
        return (cart.quantity(item_id), cart.clone());
    };
    let requested = u32::try_from(requested.max(0)).unwrap_or(u32::MAX);
    let qty = requested.min(affordable_quantity(item, cart, shop, total_earned));
    (qty, cart.with_quantity(item_id, qty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: &str, cost: u64, max_exchange: u32) -> ShopItem {
        ShopItem {
            id: id.into(),
            name: id.into(),
            cost,
            max_exchange,
            qty_per_exchange: 1,
        }
    }

    #[test]
    fn request_limited_by_balance_then_cap() {
        let shop = vec![item("a", 100, 5)];
        let (qty, cart) = clamp_quantity("a", 10, &Cart::new(), &shop, 300);
        assert_eq!(qty, 3);
        assert_eq!(cart.quantity("a"), 3);

        let (qty, _) = clamp_quantity("a", 10, &Cart::new(), &shop, 10_000);
        assert_eq!(qty, 5);
    }

    #[test]
    fn current_spend_is_refunded_before_reallocating() {
        let shop = vec![item("a", 100, 10), item("b", 50, 10)];
        let mut cart = Cart::new();
        cart.set_quantity("a", 2);
        cart.set_quantity("b", 1);

        // remaining 50, plus the 200 already on "a"
        let (qty, cart) = clamp_quantity("a", 4, &cart, &shop, 300);
        assert_eq!(qty, 2);

        let (qty, cart) = clamp_quantity("a", 1, &cart, &shop, 300);
        assert_eq!(qty, 1);

        // the freed 100 goes to "b"
        let (qty, cart) = clamp_quantity("b", 3, &cart, &shop, 300);
        assert_eq!(qty, 3);
        assert_eq!(total_spent(&cart, &shop), 250);

        // Only 50 left over, yet "a" keeps its own unit.
        let (qty, cart) = clamp_quantity("a", 1, &cart, &shop, 300);
        assert_eq!(qty, 1);
        let (qty, cart) = clamp_quantity("a", 3, &cart, &shop, 300);
        assert_eq!(qty, 1);

        let (_, cart) = clamp_quantity("a", 0, &cart, &shop, 300);
        let (qty, cart) = clamp_quantity("b", 8, &cart, &shop, 300);
        assert_eq!(qty, 6);
        assert_eq!(total_spent(&cart, &shop), 300);
    }

    #[test]
    fn unknown_item_is_a_no_op() {
        let shop = vec![item("a", 100, 5)];
        let mut cart = Cart::new();
        cart.set_quantity("a", 1);
        cart.set_quantity("gone", 4);
        let (qty, next) = clamp_quantity("gone", 9, &cart, &shop, 1_000);
        assert_eq!(qty, 4);
        assert_eq!(next, cart);
    }

    #[test]
    fn negative_request_becomes_zero() {
        let shop = vec![item("a", 100, 5)];
        let mut cart = Cart::new();
        cart.set_quantity("a", 2);
        let (qty, next) = clamp_quantity("a", -3, &cart, &shop, 1_000);
        assert_eq!(qty, 0);
        assert_eq!(next.quantity("a"), 0);
    }

    #[test]
    fn zero_cost_item_only_hits_the_cap() {
        let shop = vec![item("free", 0, 4)];
        let (qty, _) = clamp_quantity("free", 10, &Cart::new(), &shop, 0);
        assert_eq!(qty, 4);
    }

    #[test]
    fn overspent_cart_clamps_only_the_edited_item() {
        let shop = vec![item("a", 100, 10), item("b", 50, 10)];
        let mut cart = Cart::new();
        cart.set_quantity("a", 3);

        // earned dropped from 300 to 100 after the cart was built
        let (qty, cart) = clamp_quantity("b", 1, &cart, &shop, 100);
        assert_eq!(qty, 0);
        assert_eq!(cart.quantity("a"), 3);

        let (qty, cart) = clamp_quantity("a", 3, &cart, &shop, 100);
        assert_eq!(qty, 1);
        assert_eq!(total_spent(&cart, &shop), 100);
    }

    #[test]
    fn plus_button_needs_one_full_unit() {
        let a = item("a", 100, 5);
        assert!(can_afford_one_more(&a, 100));
        assert!(!can_afford_one_more(&a, 99));
        assert!(!can_afford_one_more(&a, -5));
    }

    #[test]
    fn affordable_quantity_counts_own_spend() {
        let shop = vec![item("a", 100, 10), item("b", 50, 10)];
        let mut cart = Cart::new();
        cart.set_quantity("a", 2);
        cart.set_quantity("b", 2);
        assert_eq!(affordable_quantity(&shop[0], &cart, &shop, 400), 3);
        assert_eq!(affordable_quantity(&shop[1], &cart, &shop, 400), 4);
    }

    fn arb_shop() -> impl Strategy<Value = Vec<ShopItem>> {
        proptest::collection::vec((1u64..500, 0u32..20), 1..6).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (cost, max))| item(&format!("item-{i}"), cost, max))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn edits_never_break_caps_or_budget(
            shop in arb_shop(),
            earned in 0u64..5_000,
            edits in proptest::collection::vec((0usize..6, -5i64..30), 0..40),
        ) {
            let mut cart = Cart::new();
            for (idx, requested) in edits {
                let target = &shop[idx % shop.len()];
                let (qty, next) = clamp_quantity(&target.id, requested, &cart, &shop, earned);
                prop_assert!(qty <= target.max_exchange);
                prop_assert!(total_spent(&next, &shop) <= earned);
                cart = next;
            }
        }

        #[test]
        fn clamping_twice_settles(
            shop in arb_shop(),
            earned in 0u64..5_000,
            setup in proptest::collection::vec((0usize..6, 0i64..30), 0..10),
            target in 0usize..6,
            requested in -5i64..30,
        ) {
            let mut cart = Cart::new();
            for (idx, q) in setup {
                let id = &shop[idx % shop.len()].id;
                cart = clamp_quantity(id, q, &cart, &shop, earned).1;
            }
            let id = &shop[target % shop.len()].id;
            let (first, once) = clamp_quantity(id, requested, &cart, &shop, earned);
            let (second, twice) = clamp_quantity(id, requested, &once, &shop, earned);
            prop_assert_eq!(first, second);
            prop_assert_eq!(once, twice);
        }
    }
}
