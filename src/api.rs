//! HTTP calls to the vote counter endpoint via the browser's `fetch`.

use crate::vote::{VoteRequest, VoteTally};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no browser window")]
    NoWindow,

    #[error("request failed: {0}")]
    Js(String),

    #[error("server answered {0}")]
    Status(u16),

    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

pub async fn fetch_tally(endpoint: &str, vote_key: &str) -> Result<VoteTally, ApiError> {
    let key = String::from(js_sys::encode_uri_component(vote_key));
    let url = format!("{endpoint}?voteKey={key}");
    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(&url, &opts)?;
    send(request).await
}

pub async fn post_vote(endpoint: &str, body: &VoteRequest) -> Result<VoteTally, ApiError> {
    let payload = encode_body(body)?;
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&payload));
    let request = Request::new_with_str_and_init(endpoint, &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    send(request).await
}

async fn send(request: Request) -> Result<VoteTally, ApiError> {
    let win = web_sys::window().ok_or(ApiError::NoWindow)?;
    let resp: Response = JsFuture::from(win.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let text = JsFuture::from(resp.text()?).await?;
    let text = text.as_string().unwrap_or_default();
    serde_json::from_str(&text).map_err(ApiError::Decode)
}

fn encode_body<T: Serialize + ?Sized>(body: &T) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(ApiError::Encode)
}
