use super::{shop_section::ShopSection, tasks_section::TasksSection, vote_counter::VoteCounter};
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::model::TierKey;
use crate::state::{LocalStore, Session, SessionAction};
use std::rc::Rc;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_build_env());
    let catalog = use_memo((), |_| {
        Catalog::embedded().map(Rc::new).map_err(|e| {
            log::error!("catalog rejected: {e}");
            e
        })
    });

    match &*catalog {
        Ok(catalog) => html! { <Calculator catalog={catalog.clone()} config={config.clone()} /> },
        Err(e) => html! {
            <div style="margin:48px auto; max-width:480px; background:#161b22; border:1px solid #f85149; border-radius:12px; padding:18px 20px;">
                <div style="font-size:16px; font-weight:600; color:#f85149;">{"Catalog data could not be loaded"}</div>
                <div style="font-size:13px; opacity:0.85; margin-top:8px;">{ e.to_string() }</div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CalculatorProps {
    pub catalog: Rc<Catalog>,
    pub config: Rc<AppConfig>,
}

#[function_component(Calculator)]
pub fn calculator(props: &CalculatorProps) -> Html {
    let session = {
        let catalog = props.catalog.clone();
        use_reducer(move || match LocalStore::open() {
            Ok(store) => Session::restore(catalog, &store),
            Err(e) => {
                log::warn!("starting without saved selections: {e}");
                Session::new(catalog)
            }
        })
    };

    // Persist selections whenever they change
    {
        let session = session.clone();
        use_effect_with((session.levels.clone(), session.cart.clone()), move |_| {
            if let Err(e) = LocalStore::open().and_then(|store| session.persist(&store)) {
                log::warn!("selections not saved: {e}");
            }
            || ()
        });
    }

    let on_set_level = {
        let session = session.clone();
        Callback::from(move |(key, level): (TierKey, u32)| {
            session.dispatch(SessionAction::SetLevel { key, level })
        })
    };
    let on_request = {
        let session = session.clone();
        Callback::from(move |(item_id, requested): (String, i64)| {
            session.dispatch(SessionAction::SetQuantity { item_id, requested })
        })
    };
    let reset_levels = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::ResetLevels))
    };
    let clear_cart = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::ClearCart))
    };

    let heading_style = "display:flex; justify-content:space-between; align-items:center; border-left:4px solid #d4af37; padding:2px 0 2px 12px; margin-bottom:12px;";
    let link_style = "font-size:10px; text-transform:uppercase; letter-spacing:2px; font-weight:700; background:none; border:none; color:#8b949e; cursor:pointer;";
    let cfg = &props.config;

    html! {
        <div style="min-height:100vh; background:#0d1117; color:#c9d1d9; font-family:sans-serif;">
            <header style="position:sticky; top:0; z-index:20; background:rgba(22,27,34,0.95); border-bottom:1px solid #30363d; padding:12px 24px; display:flex; justify-content:space-between; align-items:center;">
                <h1 style="margin:0; font-size:20px; font-weight:900; text-transform:uppercase;">
                    {"Rebate "}<span style="color:#d4af37;">{"Calculator"}</span>
                </h1>
                <VoteCounter
                    endpoint={cfg.vote_endpoint.clone()}
                    vote_key={cfg.vote_key.clone()}
                    storage_key={cfg.user_vote_key()}
                />
            </header>
            <main style="display:flex; flex-wrap:wrap; gap:32px; padding:24px; align-items:flex-start;">
                <section style="flex:7 1 420px; min-width:0;">
                    <div style={heading_style}>
                        <h2 style="margin:0; font-size:20px; text-transform:uppercase;">{"Building Progress"}</h2>
                        <button style={link_style} onclick={reset_levels}>{"Reset Progress"}</button>
                    </div>
                    <TasksSection
                        catalog={props.catalog.clone()}
                        levels={session.levels.clone()}
                        on_set_level={on_set_level}
                    />
                </section>
                <section style="flex:5 1 340px; min-width:0;">
                    <div style={heading_style}>
                        <h2 style="margin:0; font-size:20px; text-transform:uppercase;">{"Exchange Shop"}</h2>
                        <button style={link_style} onclick={clear_cart}>{"Clear Cart"}</button>
                    </div>
                    <ShopSection
                        catalog={props.catalog.clone()}
                        cart={session.cart.clone()}
                        total_earned={session.total_earned()}
                        total_spent={session.total_spent()}
                        remaining_balance={session.remaining_balance()}
                        on_request={on_request}
                    />
                </section>
            </main>
            <footer style="border-top:1px solid #30363d; padding:32px 24px; text-align:center; font-size:13px; opacity:0.7;">
                {"Rewards accumulate per tier: every milestone at or below a tier's level counts."}
            </footer>
        </div>
    }
}
