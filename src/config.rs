//! Build-time configuration. Each setting has a default that a matching
//! environment variable can override when the bundle is built.

use log::LevelFilter;

/// localStorage key for the per-tier building levels.
pub const LEVELS_KEY: &str = "buildingLevels";
/// localStorage key for the shop cart.
pub const CART_KEY: &str = "cartItems";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Vote counter endpoint (GET for the tally, POST to vote).
    pub vote_endpoint: String,
    /// Counter name on the vote server.
    pub vote_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            vote_endpoint: "/api/vote".into(),
            vote_key: "rebate-calculator".into(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("REBATE_VOTE_ENDPOINT"),
            option_env!("REBATE_VOTE_KEY"),
            option_env!("REBATE_LOG_LEVEL"),
        )
    }

    fn with_overrides(endpoint: Option<&str>, vote_key: Option<&str>, level: Option<&str>) -> Self {
        let mut cfg = Self::default();
        if let Some(e) = endpoint.filter(|e| !e.is_empty()) {
            cfg.vote_endpoint = e.to_string();
        }
        if let Some(k) = vote_key.filter(|k| !k.is_empty()) {
            cfg.vote_key = k.to_string();
        }
        if let Some(l) = level.and_then(|l| l.parse().ok()) {
            cfg.log_level = l;
        }
        cfg
    }

    /// localStorage key holding this visitor's own vote.
    pub fn user_vote_key(&self) -> String {
        format!("vote_{}", self.vote_key)
    }
}
