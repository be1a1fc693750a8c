//! Static milestone and shop tables, parsed once at start-up.
//!
//! The JSON files under `data/` are embedded into the binary; the resulting
//! `Catalog` is shared read-only by everything that needs it.

use crate::model::{ShopItem, TaskCategory, TIER_KEY_SEPARATOR};
use serde::de::DeserializeOwned;
use std::collections::HashSet;

const TASKS_JSON: &str = include_str!("../data/tasks.json");
const SHOP_JSON: &str = include_str!("../data/shop.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("parse error in {file}: {detail}")]
    Parse { file: &'static str, detail: String },

    #[error("duplicate category '{0}'")]
    DuplicateCategory(String),

    #[error("duplicate tier '{tier}' in category '{category}'")]
    DuplicateTier { category: String, tier: String },

    #[error("duplicate milestone level {level} in category '{category}'")]
    DuplicateMilestone { category: String, level: u32 },

    #[error("duplicate shop item '{0}'")]
    DuplicateItem(String),

    #[error("shop item '{0}' has zero cost")]
    ZeroCost(String),

    #[error("label '{0}' contains the reserved '{sep}' separator", sep = TIER_KEY_SEPARATOR)]
    ReservedSeparator(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    pub tasks: Vec<TaskCategory>,
    pub shop: Vec<ShopItem>,
}

impl Catalog {
    /// Loads the tables compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(TASKS_JSON, SHOP_JSON)
    }

    pub fn from_json(tasks: &str, shop: &str) -> Result<Self, CatalogError> {
        let catalog = Self {
            tasks: parse("tasks.json", tasks)?,
            shop: parse("shop.json", shop)?,
        };
        catalog.validate()?;
        log::info!(
            "catalog loaded: {} categories, {} shop items",
            catalog.tasks.len(),
            catalog.shop.len()
        );
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut categories = HashSet::new();
        for cat in &self.tasks {
            check_label(&cat.category)?;
            if !categories.insert(cat.category.as_str()) {
                return Err(CatalogError::DuplicateCategory(cat.category.clone()));
            }
            let mut tiers = HashSet::new();
            for tier in &cat.tiers {
                check_label(tier)?;
                if !tiers.insert(tier.as_str()) {
                    return Err(CatalogError::DuplicateTier {
                        category: cat.category.clone(),
                        tier: tier.clone(),
                    });
                }
            }
            let mut levels = HashSet::new();
            for m in &cat.milestones {
                if !levels.insert(m.level) {
                    return Err(CatalogError::DuplicateMilestone {
                        category: cat.category.clone(),
                        level: m.level,
                    });
                }
            }
        }

        let mut ids = HashSet::new();
        for item in &self.shop {
            if !ids.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
            if item.cost == 0 {
                return Err(CatalogError::ZeroCost(item.id.clone()));
            }
        }
        Ok(())
    }

    pub fn category(&self, name: &str) -> Option<&TaskCategory> {
        self.tasks.iter().find(|c| c.category == name)
    }
}

fn parse<T: DeserializeOwned>(file: &'static str, raw: &str) -> Result<T, CatalogError> {
    serde_json::from_str(raw).map_err(|e| CatalogError::Parse {
        file,
        detail: e.to_string(),
    })
}

fn check_label(label: &str) -> Result<(), CatalogError> {
    if label.contains(TIER_KEY_SEPARATOR) {
        return Err(CatalogError::ReservedSeparator(label.to_string()));
    }
    Ok(())
}
