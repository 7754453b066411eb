//! # Company Unit Repository Trait
//!
//! Company Unit / Company Unit Item の取得と作成を抽象化

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::company_unit::{CompanyUnit, NewCompanyUnit};
use crate::domain::entities::item_batch::ItemBatch;

/// Company Unit 作成結果
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCreation {
    /// レスポンスに含まれていたUnit
    pub docs: Vec<CompanyUnit>,
    /// レスポンス本文（エラーメッセージ用）
    pub raw: String,
}

/// Company Unit Item 作成結果
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCreation {
    /// レスポンス本文（JSONでなければ文字列のまま）
    pub body: Value,
}

impl ItemCreation {
    /// ログ出力用にレスポンスを `max_chars` 文字で切り詰める
    pub fn preview(&self, max_chars: usize) -> String {
        self.body.to_string().chars().take(max_chars).collect()
    }
}

/// Company Unit リポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompanyUnitRepository: Send + Sync {
    /// 会社に属するCompany Unitの一覧を取得する
    async fn list_units(&self, company_id: &str) -> Result<Vec<CompanyUnit>>;

    /// Company Unitを作成する
    ///
    /// # Errors
    ///
    /// 成功以外のステータスの場合に `HrisError::Protocol` を返す
    async fn create_units(&self, units: &[NewCompanyUnit]) -> Result<UnitCreation>;

    /// Company Unit Itemを1リクエストで作成する
    ///
    /// # Errors
    ///
    /// 成功以外のステータスの場合に `HrisError::Protocol` を返す
    async fn create_items(&self, batch: &ItemBatch) -> Result<ItemCreation>;
}
