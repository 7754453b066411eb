//! # Ensure Units Use Case
//!
//! Company Unitの検索または作成ユースケース

use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::domain::entities::company_unit::{CompanyUnit, NewCompanyUnit};
use crate::domain::errors::HrisError;
use crate::domain::repositories::company_unit_repository::CompanyUnitRepository;
use crate::domain::services::unit_catalog::UnitCatalog;

/// Company Unit 確保ユースケース
///
/// 名前が一致する既存Unitを再利用し、無ければ作成する。
/// Unit名の一意性はこの検索でのみ保証される
pub struct EnsureUnitsUseCase<R: CompanyUnitRepository> {
    repository: Arc<R>,
}

impl<R: CompanyUnitRepository> EnsureUnitsUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// 既存のCompany Unitを取得
    pub async fn list(&self, company_id: &str) -> Result<Vec<CompanyUnit>> {
        let units = self.repository.list_units(company_id).await?;
        info!("Found {} existing company units", units.len());
        Ok(units)
    }

    /// Unitが存在することを保証する
    ///
    /// # Arguments
    ///
    /// * `company_id` - 会社ID
    /// * `name` - Unit名（大文字小文字を区別しない）
    /// * `known` - 既知のUnit。作成したUnitは末尾に追加される
    ///
    /// # Errors
    ///
    /// 作成APIが失敗した場合、またはレスポンスに作成したUnitが
    /// 含まれていない場合にエラーを返す
    pub async fn ensure_exists(
        &self,
        company_id: &str,
        name: &str,
        known: &mut Vec<CompanyUnit>,
    ) -> Result<CompanyUnit> {
        if let Some(found) = UnitCatalog::find_by_name(known, name) {
            info!("Unit \"{}\" found (id={})", name, found.id);
            return Ok(found.clone());
        }

        info!("Unit \"{}\" not found, creating", name);
        let payload = vec![NewCompanyUnit::named(
            company_id,
            name,
            UnitCatalog::next_order(known),
        )];

        let created = self.repository.create_units(&payload).await?;
        let unit = UnitCatalog::find_by_name(&created.docs, name)
            .cloned()
            .ok_or_else(|| {
                HrisError::missing_field(
                    format!("Create company unit \"{}\"", name),
                    format!("created unit missing in response: {}", created.raw),
                )
            })?;

        info!("Unit \"{}\" created (id={})", name, unit.id);
        known.push(unit.clone());
        Ok(unit)
    }

    /// 全てのUnitが存在することを保証する
    ///
    /// # Returns
    ///
    /// `names` と同じ順序のUnit
    pub async fn ensure_all(
        &self,
        company_id: &str,
        names: &[String],
        mut known: Vec<CompanyUnit>,
    ) -> Result<Vec<CompanyUnit>> {
        let mut ensured = Vec::with_capacity(names.len());
        for name in names {
            let unit = self.ensure_exists(company_id, name, &mut known).await?;
            ensured.push(unit);
        }
        Ok(ensured)
    }
}
