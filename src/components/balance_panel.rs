use crate::util::format_medals;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BalancePanelProps {
    pub earned: u64,
    pub spent: u64,
    pub remaining: i64,
}

#[function_component]
pub fn BalancePanel(props: &BalancePanelProps) -> Html {
    let label_style = "font-size:11px; text-transform:uppercase; letter-spacing:1px; opacity:0.7; font-weight:700;";
    let value_style = "font-size:22px; font-variant-numeric:tabular-nums; font-weight:700;";
    // Negative only after earned dropped below an existing cart.
    let remaining_color = if props.remaining < 0 { "#f85149" } else { "#d4af37" };
    html! {
        <div style="position:sticky; top:12px; z-index:10; background:rgba(22,27,34,0.95); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; justify-content:space-between; align-items:center;">
            <div style="display:flex; flex-direction:column;">
                <span style={label_style}>{"Remaining Balance"}</span>
                <span style={format!("{} color:{};", value_style, remaining_color)}>
                    { format!("{} / {}", format_medals(props.remaining), format_medals(props.earned)) }
                </span>
            </div>
            <div style="display:flex; flex-direction:column; align-items:flex-end;">
                <span style={label_style}>{"Total Spent"}</span>
                <span style={format!("{} color:#c9d1d9; font-size:18px;", value_style)}>{ format_medals(props.spent) }</span>
            </div>
        </div>
    }
}
