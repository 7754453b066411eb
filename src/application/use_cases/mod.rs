//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **LoginUseCase**: ログインと会社IDの解決
//! - **EnsureUnitsUseCase**: Company Unitの検索または作成
//! - **CreateItemsUseCase**: Company Unit Itemの生成と作成

pub mod create_items;
pub mod ensure_units;
pub mod login;
