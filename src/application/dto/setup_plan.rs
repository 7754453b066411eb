//! # Setup Plan DTO
//!
//! 作成するCompany UnitとItemの計画

/// 1つのCompany Unitに対する計画
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitPlan {
    /// Unit名（大文字小文字を区別せずに既存Unitと照合）
    pub name: String,
    /// Item値の接頭辞（例: "Backend Developer"）
    pub item_prefix: String,
    /// 作成するItem数
    pub item_count: usize,
    /// 連番の開始番号
    pub item_start: usize,
}

impl UnitPlan {
    pub fn new(
        name: impl Into<String>,
        item_prefix: impl Into<String>,
        item_count: usize,
        item_start: usize,
    ) -> Self {
        Self {
            name: name.into(),
            item_prefix: item_prefix.into(),
            item_count,
            item_start,
        }
    }
}

/// セットアップ計画
///
/// Unitの一覧と、Item作成時の1リクエストあたりの件数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPlan {
    pub units: Vec<UnitPlan>,
    /// 0の場合は全Itemを1リクエストで送る
    pub item_batch_size: usize,
}

impl SetupPlan {
    /// 新しいセットアップ計画を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use unitseed::application::dto::setup_plan::{SetupPlan, UnitPlan};
    ///
    /// let plan = SetupPlan::new(
    ///     vec![
    ///         UnitPlan::new("Position", "Backend Developer", 10, 1),
    ///         UnitPlan::new("Area", "Yogakarta", 20, 1),
    ///     ],
    ///     50,
    /// );
    ///
    /// assert_eq!(plan.unit_names(), vec!["Position", "Area"]);
    /// assert_eq!(plan.total_items(), 30);
    /// ```
    pub fn new(units: Vec<UnitPlan>, item_batch_size: usize) -> Self {
        Self {
            units,
            item_batch_size,
        }
    }

    /// 計画に含まれるUnit名（計画順）
    pub fn unit_names(&self) -> Vec<String> {
        self.units.iter().map(|unit| unit.name.clone()).collect()
    }

    /// 作成予定のItem総数
    pub fn total_items(&self) -> usize {
        self.units.iter().map(|unit| unit.item_count).sum()
    }
}
