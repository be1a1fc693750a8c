use crate::model::{BuildingLevels, Milestone, TaskCategory};

/// Medals earned by a single tier at `level`. Milestones are cumulative:
/// every threshold at or below `level` pays out.
pub fn earned_in_tier(category: &TaskCategory, level: u32) -> u64 {
    category
        .milestones
        .iter()
        .filter(|m| level >= m.level)
        .fold(0u64, |acc, m| acc.saturating_add(m.reward))
}

/// Sum of every reached milestone across all categories and their tiers.
pub fn total_earned(levels: &BuildingLevels, tasks: &[TaskCategory]) -> u64 {
    let mut total = 0u64;
    for category in tasks {
        for tier in &category.tiers {
            let level = levels.level(&category.tier_key(tier));
            total = total.saturating_add(earned_in_tier(category, level));
        }
    }
    total
}

/// The lowest milestone strictly above `level`, if any remain.
pub fn next_milestone(category: &TaskCategory, level: u32) -> Option<&Milestone> {
    category
        .milestones
        .iter()
        .filter(|m| m.level > level)
        .min_by_key(|m| m.level)
}
