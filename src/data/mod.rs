//! Dataset loading and the in-memory directory.
//!
//! The catalog is static reference data: either the seed dataset embedded in
//! the binary or a user-curated JSON file selected via config / `--data`.
//! It is loaded once per invocation; the only mutable piece is the derived
//! `is_open` flag, rewritten by `refresh_open_states`.

use crate::config::Config;
use crate::core::hours;
use crate::errors::{AppError, AppResult};
use crate::models::business::Business;
use crate::models::category::Category;
use crate::utils::path::expand_tilde;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;

/// Seed dataset shipped inside the binary, in the upstream JSON format.
pub const SEED_JSON: &str = include_str!("seed.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Directory {
    pub categories: Vec<Category>,
    pub businesses: Vec<Business>,
}

impl Directory {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load from the configured data file, or the embedded seed when none is
    /// configured.
    pub fn load(cfg: &Config) -> AppResult<Self> {
        if cfg.data_file.is_empty() {
            return Self::from_json(SEED_JSON);
        }

        let path = expand_tilde(&cfg.data_file);
        if !path.exists() {
            return Err(AppError::DataFileNotFound(cfg.data_file.clone()));
        }
        let raw = fs::read_to_string(&path)?;
        Self::from_json(&raw)
    }

    /// Load and evaluate open/closed state in one step.
    pub fn load_refreshed(cfg: &Config, now: NaiveDateTime) -> AppResult<Self> {
        let mut dir = Self::load(cfg)?;
        dir.refresh_open_states(now);
        Ok(dir)
    }

    /// Re-run the hours evaluator over every business and store the derived
    /// flag back on the record. Idempotent for a fixed `now`.
    pub fn refresh_open_states(&mut self, now: NaiveDateTime) {
        for business in &mut self.businesses {
            business.is_open = hours::is_open_now(&business.hours, now);
        }
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.category(id).map(|c| c.name.as_str())
    }

    /// Case-insensitive search across name, description and category
    /// display name.
    pub fn search(&self, term: &str) -> Vec<&Business> {
        let term = term.to_lowercase();
        self.businesses
            .iter()
            .filter(|b| {
                b.name.to_lowercase().contains(&term)
                    || b.description.to_lowercase().contains(&term)
                    || self
                        .category_name(&b.category)
                        .is_some_and(|n| n.to_lowercase().contains(&term))
            })
            .collect()
    }

    pub fn by_category(&self, id: &str) -> Vec<&Business> {
        self.businesses.iter().filter(|b| b.category == id).collect()
    }

    pub fn featured(&self) -> Vec<&Business> {
        self.businesses.iter().filter(|b| b.featured).collect()
    }

    /// Pharmacy subset in dataset order, ready for the rotation resolver.
    pub fn pharmacies(&self) -> Vec<Business> {
        self.businesses
            .iter()
            .filter(|b| b.is_pharmacy)
            .cloned()
            .collect()
    }

    /// Look a business up by exact id, then by exact case-insensitive name,
    /// then by name substring. First match wins.
    pub fn find(&self, key: &str) -> Option<&Business> {
        if let Some(b) = self.businesses.iter().find(|b| b.id == key) {
            return Some(b);
        }
        let lowered = key.to_lowercase();
        if let Some(b) = self
            .businesses
            .iter()
            .find(|b| b.name.to_lowercase() == lowered)
        {
            return Some(b);
        }
        self.businesses
            .iter()
            .find(|b| b.name.to_lowercase().contains(&lowered))
    }

    pub fn open_count(&self) -> usize {
        self.businesses.iter().filter(|b| b.is_open).count()
    }
}
