//! # Unit Catalog Service
//!
//! Company Unit の検索と Item 値の生成

use crate::domain::entities::company_unit::CompanyUnit;

/// Company Unit カタログサービス
pub struct UnitCatalog;

impl UnitCatalog {
    /// 名前（大文字小文字を区別しない）でUnitを検索
    ///
    /// # Arguments
    ///
    /// * `units` - 検索対象のUnit
    /// * `name` - 探す名前
    ///
    /// # Returns
    ///
    /// 最初に一致したUnit
    pub fn find_by_name<'a>(units: &'a [CompanyUnit], name: &str) -> Option<&'a CompanyUnit> {
        units.iter().find(|unit| unit.name_matches(name))
    }

    /// 新しいUnitに割り当てる並び順（既存数 + 1）
    pub fn next_order(units: &[CompanyUnit]) -> usize {
        units.len() + 1
    }

    /// 連番付きのItem値を生成します。
    ///
    /// # 例
    ///
    /// ```
    /// use unitseed::domain::services::unit_catalog::UnitCatalog;
    ///
    /// let values = UnitCatalog::generate_values("Backend Developer", 3, 1);
    /// assert_eq!(
    ///     values,
    ///     vec!["Backend Developer 1", "Backend Developer 2", "Backend Developer 3"]
    /// );
    ///
    /// // 開始番号を変える
    /// let values = UnitCatalog::generate_values("Bantul", 2, 10);
    /// assert_eq!(values, vec!["Bantul 10", "Bantul 11"]);
    /// ```
    pub fn generate_values(prefix: &str, count: usize, start: usize) -> Vec<String> {
        (start..start + count)
            .map(|n| format!("{} {}", prefix, n))
            .collect()
    }
}
