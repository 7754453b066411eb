//! # ItemBatch Value Object
//!
//! Company Unit Item 作成バッチのバリューオブジェクト

use super::company_unit::NewCompanyUnitItem;

/// 作成バッチ
///
/// 1回以上のPOSTで送信されるCompany Unit Itemのコレクション
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemBatch {
    items: Vec<NewCompanyUnitItem>,
}

impl ItemBatch {
    /// 新しいバッチを作成
    pub fn new(items: Vec<NewCompanyUnitItem>) -> Self {
        Self { items }
    }

    /// バッチ内のItem数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// バッチが空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Itemへの参照を返す
    pub fn items(&self) -> &[NewCompanyUnitItem] {
        &self.items
    }

    /// 別のItem列を末尾に追加
    pub fn extend(&mut self, items: impl IntoIterator<Item = NewCompanyUnitItem>) {
        self.items.extend(items);
    }

    /// バッチをサイズで分割
    ///
    /// `batch_size` が0の場合は分割しない
    pub fn split_by_size(self, batch_size: usize) -> Vec<ItemBatch> {
        if batch_size == 0 || self.items.is_empty() {
            return vec![self];
        }

        self.items
            .chunks(batch_size)
            .map(|chunk| ItemBatch::new(chunk.to_vec()))
            .collect()
    }
}
