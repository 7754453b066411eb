//! # CompanyUnit Entity
//!
//! Company Unit と Company Unit Item のドメインエンティティ

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::session::id_to_string;

/// Company Unit（会社ごとの分類カテゴリ）
///
/// 参照するのは `id`・`companyId`・`name`・`label` のみ。
/// `order` や `deletable` を含むそれ以外のフィールドは型を問わず `extra` に保持する
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyUnit {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_optional_id")]
    pub company_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 数値IDは文字列に変換し、それ以外の型は空文字列として扱う
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(id_to_string(&value).unwrap_or_default())
}

fn lenient_optional_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(id_to_string(&value))
}

/// 文字列以外は未設定扱い
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

impl CompanyUnit {
    /// 名前を大文字小文字を区別せずに比較
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.as_deref().unwrap_or("").to_lowercase() == name.to_lowercase()
    }

    /// 表示用の名前（未設定なら空文字列）
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Company Unit 作成リクエストの1要素
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompanyUnit {
    pub company_id: String,
    pub deletable: bool,
    pub name: String,
    pub label: String,
    pub order: usize,
}

impl NewCompanyUnit {
    /// 名前をラベルにも使う削除可能なUnitを作成
    pub fn named(company_id: &str, name: &str, order: usize) -> Self {
        Self {
            company_id: company_id.to_string(),
            deletable: true,
            name: name.to_string(),
            label: name.to_string(),
            order,
        }
    }
}

/// Company Unit Item 作成リクエストの1要素
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompanyUnitItem {
    pub value: String,
    pub company_unit_id: String,
}

impl NewCompanyUnitItem {
    pub fn new(company_unit_id: &str, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            company_unit_id: company_unit_id.to_string(),
        }
    }
}
