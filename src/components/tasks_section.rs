use super::adjustable_slider::AdjustableSlider;
use crate::catalog::Catalog;
use crate::engine::{earned_in_tier, next_milestone};
use crate::model::{BuildingLevels, TaskCategory, TierKey};
use crate::util::format_medals;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TasksSectionProps {
    pub catalog: Rc<Catalog>,
    pub levels: BuildingLevels,
    pub on_set_level: Callback<(TierKey, u32)>,
}

#[function_component(TasksSection)]
pub fn tasks_section(props: &TasksSectionProps) -> Html {
    let cards: Vec<Html> = props
        .catalog
        .tasks
        .iter()
        .map(|cat| category_card(cat, &props.levels, &props.on_set_level))
        .collect();
    html! { <div style="display:flex; flex-direction:column; gap:16px;">{ for cards }</div> }
}

fn category_card(cat: &TaskCategory, levels: &BuildingLevels, on_set_level: &Callback<(TierKey, u32)>) -> Html {
    let max_level = cat.max_level();
    let tiers: Vec<Html> = cat
        .tiers
        .iter()
        .map(|tier| {
            let key = cat.tier_key(tier);
            let level = levels.level(&key);
            let earned = earned_in_tier(cat, level);
            let next = next_milestone(cat, level);
            let on_change = {
                let cb = on_set_level.clone();
                let key = key.clone();
                Callback::from(move |v: u32| cb.emit((key.clone(), v)))
            };
            html! {
                <div key={key.storage_key()} style="display:flex; flex-direction:column; gap:6px;">
                    <div style="display:flex; justify-content:space-between; font-size:13px;">
                        <span style="font-weight:600;">{ format!("Tier {}", tier) }</span>
                        <span style="color:#d4af37; font-variant-numeric:tabular-nums; font-weight:600;">
                            { format!("{} Medals", format_medals(earned)) }
                        </span>
                    </div>
                    <AdjustableSlider min={0u32} max={max_level} value={level} on_change={on_change} />
                    { if let Some(m) = next {
                        html! { <div style="font-size:11px; opacity:0.7; text-align:right;">
                            { format!("Next Reward: {} at Level {}", format_medals(m.reward), m.level) }
                        </div> }
                    } else { html! {} } }
                </div>
            }
        })
        .collect();

    html! {
        <div key={cat.category.clone()} style="background:#161b22; border:1px solid #30363d; border-radius:10px; padding:12px 16px; display:flex; flex-direction:column; gap:14px;">
            <div style="font-weight:700; font-size:15px; letter-spacing:.5px; text-transform:uppercase; color:#d4af37;">{ cat.category.clone() }</div>
            { for tiers }
        </div>
    }
}
