//! HRIS Company Unit Repository Implementation
//!
//! CompanyUnitRepositoryのHRIS REST API実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::adapter::http::models::DocsEnvelope;
use crate::adapter::http::SessionClient;
use crate::domain::entities::company_unit::{CompanyUnit, NewCompanyUnit};
use crate::domain::entities::item_batch::ItemBatch;
use crate::domain::errors::HrisError;
use crate::domain::repositories::company_unit_repository::{
    CompanyUnitRepository, ItemCreation, UnitCreation,
};

pub const COMPANY_UNIT_PATH: &str = "/v2/hris/company-unit/list";
pub const COMPANY_UNIT_ITEM_PATH: &str = "/v2/hris/company-unit-item/list";

/// Company unit endpoints, authorized with the session token as bearer
pub struct HrisCompanyUnitRepository {
    client: SessionClient,
    base_url: String,
    token: String,
}

impl HrisCompanyUnitRepository {
    pub fn new(client: SessionClient, base_url: &str, token: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON array and return the raw response text on success
    async fn post_list<T: serde::Serialize>(
        &self,
        context: &str,
        path: &str,
        body: &[T],
    ) -> Result<String> {
        let response = self
            .client
            .post_json_authorized(&self.endpoint(path), &self.token, body)
            .await?;

        let status = response.status();
        let text = response
            .text()
            .await
            .with_context(|| format!("{}: failed to read response body", context))?;

        if !status.is_success() {
            return Err(HrisError::unexpected_status(context, status.as_u16(), text).into());
        }
        Ok(text)
    }
}

#[async_trait]
impl CompanyUnitRepository for HrisCompanyUnitRepository {
    async fn list_units(&self, company_id: &str) -> Result<Vec<CompanyUnit>> {
        let response = self
            .client
            .get_authorized(
                &self.endpoint(COMPANY_UNIT_PATH),
                &self.token,
                &[("company_id_eq", company_id)],
            )
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(
                HrisError::unexpected_status("Get Company Unit", status.as_u16(), body).into(),
            );
        }

        let envelope: DocsEnvelope = response
            .json()
            .await
            .context("Failed to parse company unit list")?;
        Ok(envelope
            .data
            .and_then(|page| page.docs)
            .unwrap_or_default())
    }

    async fn create_units(&self, units: &[NewCompanyUnit]) -> Result<UnitCreation> {
        let raw = self
            .post_list("Create Company Unit", COMPANY_UNIT_PATH, units)
            .await?;

        // Non-JSON success bodies yield no docs; the caller reports `raw`
        let docs = serde_json::from_str::<DocsEnvelope>(&raw)
            .map(DocsEnvelope::into_docs)
            .unwrap_or_default();

        Ok(UnitCreation { docs, raw })
    }

    async fn create_items(&self, batch: &ItemBatch) -> Result<ItemCreation> {
        let raw = self
            .post_list("Create Company Unit Item", COMPANY_UNIT_ITEM_PATH, batch.items())
            .await?;

        let body = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
        Ok(ItemCreation { body })
    }
}
