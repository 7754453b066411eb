//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::application::dto::setup_plan::{SetupPlan, UnitPlan};
use crate::domain::entities::session::Credentials;

/// Environment variable consulted when the config file has no password
pub const PASSWORD_ENV: &str = "UNITSEED_PASSWORD";

pub const DEFAULT_AUTH_BASE_URL: &str = "https://hris.kantorku.id";
pub const DEFAULT_API_BASE_URL: &str = "https://api.sejutacita.id";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnitPlanConfig {
    pub name: String,
    pub item_prefix: String,
    pub item_count: usize,
    #[serde(default = "default_item_start")]
    pub item_start: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    // Endpoints
    #[serde(default = "default_auth_base_url")]
    pub auth_base_url: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    // Account
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,

    // What to create
    #[serde(default = "default_units")]
    pub units: Vec<UnitPlanConfig>,
    #[serde(default = "default_item_batch_size")]
    pub item_batch_size: usize,
}

fn default_auth_base_url() -> String {
    DEFAULT_AUTH_BASE_URL.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_item_start() -> usize {
    1
}

fn default_item_batch_size() -> usize {
    50
}

fn default_units() -> Vec<UnitPlanConfig> {
    [
        ("Position", "Backend Developer", 10),
        ("Area", "Yogakarta", 20),
        ("Sub Area", "Bantul", 20),
    ]
    .into_iter()
    .map(|(name, prefix, count)| UnitPlanConfig {
        name: name.to_string(),
        item_prefix: prefix.to_string(),
        item_count: count,
        item_start: default_item_start(),
    })
    .collect()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded_path = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded_path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", expanded_path))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        Ok(config)
    }

    /// Credentials from the config file, falling back to `UNITSEED_PASSWORD`
    /// for the password. Completeness is checked at login.
    pub fn credentials(&self) -> Credentials {
        let password = self
            .password
            .clone()
            .filter(|p| !p.is_empty())
            .or_else(|| std::env::var(PASSWORD_ENV).ok())
            .unwrap_or_default();

        Credentials::new(self.email.trim(), password)
    }

    pub fn setup_plan(&self) -> SetupPlan {
        let units = self
            .units
            .iter()
            .map(|unit| {
                UnitPlan::new(
                    unit.name.clone(),
                    unit.item_prefix.clone(),
                    unit.item_count,
                    unit.item_start,
                )
            })
            .collect();

        SetupPlan::new(units, self.item_batch_size)
    }
}
