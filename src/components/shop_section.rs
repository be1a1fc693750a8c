use super::adjustable_slider::AdjustableSlider;
use super::balance_panel::BalancePanel;
use crate::catalog::Catalog;
use crate::engine::{can_afford_one_more, item_spent};
use crate::model::Cart;
use crate::util::format_medals;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShopSectionProps {
    pub catalog: Rc<Catalog>,
    pub cart: Cart,
    pub total_earned: u64,
    pub total_spent: u64,
    pub remaining_balance: i64,
    /// Raw slider value; the session clamps it.
    pub on_request: Callback<(String, i64)>,
}

#[function_component(ShopSection)]
pub fn shop_section(props: &ShopSectionProps) -> Html {
    let remaining = props.remaining_balance;

    let cards: Vec<Html> = props
        .catalog
        .shop
        .iter()
        .map(|item| {
            let qty = props.cart.quantity(&item.id);
            let maxed = qty >= item.max_exchange;
            let on_change = {
                let cb = props.on_request.clone();
                let id = item.id.clone();
                Callback::from(move |v: u32| cb.emit((id.clone(), i64::from(v))))
            };
            html! {
                <div key={item.id.clone()} style="background:#161b22; border:1px solid #30363d; border-radius:10px; padding:12px 16px; display:flex; flex-direction:column; gap:10px;">
                    <div style="display:flex; justify-content:space-between; align-items:flex-start;">
                        <div>
                            <div style="font-weight:700; font-size:14px;">{ item.name.clone() }</div>
                            <div style="font-size:11px; opacity:0.7;">
                                { format!("{}x per exchange | Cost: {}", item.qty_per_exchange, format_medals(item.cost)) }
                            </div>
                        </div>
                        <div style="color:#d4af37; font-variant-numeric:tabular-nums; font-weight:700;">
                            { format_medals(item_spent(item, &props.cart)) }
                        </div>
                    </div>
                    <AdjustableSlider
                        min={0u32}
                        max={item.max_exchange}
                        value={qty}
                        on_change={on_change}
                        disabled_plus={!can_afford_one_more(item, remaining)}
                    />
                    <div style="display:flex; justify-content:space-between; font-size:10px; text-transform:uppercase; font-weight:700; opacity:0.8;">
                        <span>{ format!("Max Limit: {}", item.max_exchange) }</span>
                        { if maxed { html! { <span style="color:#3fb950;">{"MAXED"}</span> } } else { html! {} } }
                    </div>
                </div>
            }
        })
        .collect();

    html! {
        <div style="display:flex; flex-direction:column; gap:16px;">
            <BalancePanel earned={props.total_earned} spent={props.total_spent} remaining={remaining} />
            { for cards }
        </div>
    }
}
