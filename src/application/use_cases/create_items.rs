//! # Create Items Use Case
//!
//! Company Unit Itemの生成と作成ユースケース

use std::sync::Arc;

use anyhow::{anyhow, Result};
use log::info;

use crate::application::dto::setup_plan::SetupPlan;
use crate::domain::entities::company_unit::{CompanyUnit, NewCompanyUnitItem};
use crate::domain::entities::item_batch::ItemBatch;
use crate::domain::repositories::company_unit_repository::CompanyUnitRepository;
use crate::domain::services::unit_catalog::UnitCatalog;

/// ログに出すレスポンスの最大文字数
pub const RESPONSE_PREVIEW_CHARS: usize = 500;

/// Item作成結果のサマリー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    /// 送信したItemの数
    pub requested: usize,
    /// 送信したリクエストの数
    pub requests: usize,
}

/// Item作成ユースケース
///
/// Itemは存在確認をせずに毎回作成する（再実行すると重複する）
pub struct CreateItemsUseCase<R: CompanyUnitRepository> {
    repository: Arc<R>,
}

impl<R: CompanyUnitRepository> CreateItemsUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// 計画からItemバッチを組み立てる
    ///
    /// 計画順に各Unitの連番Itemを連結する
    ///
    /// # Errors
    ///
    /// 計画のUnitが `units` に存在しない場合
    pub fn build_batch(&self, plan: &SetupPlan, units: &[CompanyUnit]) -> Result<ItemBatch> {
        let mut batch = ItemBatch::default();

        for unit_plan in &plan.units {
            let unit = UnitCatalog::find_by_name(units, &unit_plan.name)
                .ok_or_else(|| anyhow!("Unit \"{}\" has not been ensured", unit_plan.name))?;

            let values = UnitCatalog::generate_values(
                &unit_plan.item_prefix,
                unit_plan.item_count,
                unit_plan.item_start,
            );
            info!(
                "Prepared {} items for {} (id={})",
                values.len(),
                unit_plan.name,
                unit.id
            );
            batch.extend(
                values
                    .into_iter()
                    .map(|value| NewCompanyUnitItem::new(&unit.id, value)),
            );
        }

        Ok(batch)
    }

    /// Itemを作成する
    ///
    /// # Arguments
    ///
    /// * `batch` - 作成するItem
    /// * `batch_size` - 1リクエストあたりの件数（0なら1リクエスト）
    ///
    /// # Errors
    ///
    /// いずれかのリクエストが失敗した時点でエラーを返す。
    /// それまでに作成されたItemはロールバックされない
    pub async fn execute(&self, batch: ItemBatch, batch_size: usize) -> Result<ItemSummary> {
        if batch.is_empty() {
            return Ok(ItemSummary {
                requested: 0,
                requests: 0,
            });
        }

        let requested = batch.len();
        let mut requests = 0;

        for chunk in batch.split_by_size(batch_size) {
            info!("Creating {} company unit items", chunk.len());
            let created = self.repository.create_items(&chunk).await?;
            info!("Items create response: {}", created.preview(RESPONSE_PREVIEW_CHARS));
            requests += 1;
        }

        Ok(ItemSummary { requested, requests })
    }
}
