use crate::api;
use crate::state::storage::{KeyValueStore, LocalStore, load_or_default, save_json};
use crate::util::format_medals;
use crate::vote::{PendingVote, VoteKind, VoteTally, initial_tally};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VoteCounterProps {
    pub endpoint: AttrValue,
    pub vote_key: AttrValue,
    /// localStorage key for this visitor's own vote.
    pub storage_key: AttrValue,
}

fn load_user_vote(storage_key: &str) -> Option<VoteKind> {
    match LocalStore::open() {
        Ok(store) => load_or_default(&store, storage_key),
        Err(e) => {
            log::warn!("vote not restored: {e}");
            None
        }
    }
}

fn store_user_vote(storage_key: &str, vote: Option<VoteKind>) {
    let result = LocalStore::open().and_then(|store| match vote {
        Some(v) => save_json(&store, storage_key, &v),
        None => store.remove(storage_key),
    });
    if let Err(e) = result {
        log::warn!("vote not saved: {e}");
    }
}

#[function_component(VoteCounter)]
pub fn vote_counter(props: &VoteCounterProps) -> Html {
    let tally = use_state(VoteTally::default);
    let user_vote = {
        let storage_key = props.storage_key.clone();
        use_state(move || load_user_vote(&storage_key))
    };
    let loading = use_state(|| false);
    let ballots = use_mut_ref(|| 0u32);

    {
        let tally = tally.clone();
        let ballots = ballots.clone();
        let endpoint = props.endpoint.clone();
        let vote_key = props.vote_key.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_tally(&endpoint, &vote_key).await {
                    Ok(t) => match initial_tally(t, *ballots.borrow()) {
                        Some(t) => tally.set(t),
                        None => log::debug!("initial tally arrived after a vote, dropped"),
                    },
                    Err(e) => log::warn!("could not fetch votes: {e}"),
                }
            });
            || ()
        });
    }

    let vote = {
        let tally = tally.clone();
        let user_vote = user_vote.clone();
        let loading = loading.clone();
        let ballots = ballots.clone();
        let props = props.clone();
        Callback::from(move |kind: VoteKind| {
            if *loading {
                return;
            }
            {
                let mut cast = ballots.borrow_mut();
                *cast = cast.saturating_add(1);
            }
            let (tentative, pending) = PendingVote::begin(&props.vote_key, *tally, *user_vote, kind);
            tally.set(tentative);
            user_vote.set(pending.user_vote);
            store_user_vote(&props.storage_key, pending.user_vote);
            loading.set(true);

            let tally = tally.clone();
            let user_vote = user_vote.clone();
            let loading = loading.clone();
            let endpoint = props.endpoint.clone();
            let storage_key = props.storage_key.clone();
            spawn_local(async move {
                match api::post_vote(&endpoint, &pending.request).await {
                    Ok(confirmed) => tally.set(confirmed),
                    Err(e) => {
                        log::error!("vote not recorded, rolling back: {e}");
                        let (restored, previous) = pending.rollback(tentative);
                        tally.set(restored);
                        user_vote.set(previous);
                        store_user_vote(&storage_key, previous);
                        if let Some(win) = web_sys::window() {
                            let _ = win.alert_with_message("Failed to record your vote. Please try again.");
                        }
                    }
                }
                loading.set(false);
            });
        })
    };

    let btn_style = |active: bool, color: &str| {
        let bg = if active { color } else { "#1c2128" };
        format!("display:flex; align-items:center; gap:4px; padding:4px 10px; border-radius:6px; border:1px solid #30363d; background:{bg}; color:#fff;")
    };
    let on_dislike = {
        let vote = vote.clone();
        Callback::from(move |_| vote.emit(VoteKind::Dislike))
    };
    let on_like = Callback::from(move |_| vote.emit(VoteKind::Like));

    html! {
        <div style="display:flex; align-items:center; gap:8px;">
            <button
                style={btn_style(*user_vote == Some(VoteKind::Dislike), "#b62324")}
                onclick={on_dislike}
                disabled={*loading}
            >
                { format_medals(tally.dislikes) }{" 👎"}
            </button>
            <button
                style={btn_style(*user_vote == Some(VoteKind::Like), "#238636")}
                onclick={on_like}
                disabled={*loading}
            >
                {"👍 "}{ format_medals(tally.likes) }
            </button>
        </div>
    }
}
