//! Reward and spend accounting. Every function here is pure: it reads
//! borrowed snapshots of the selections and the catalog and returns new values.

pub mod clamp;
pub mod milestones;
pub mod spend;

pub use clamp::{can_afford_one_more, clamp_quantity};
pub use milestones::{earned_in_tier, next_milestone, total_earned};
pub use spend::{item_spent, remaining_balance, total_spent};
