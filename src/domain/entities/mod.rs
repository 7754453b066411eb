//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Session**: ログイン結果（セッショントークンと確認ドキュメント）
//! - **Credentials**: ログインに使うアカウント情報
//! - **CompanyUnit**: 会社ごとの分類カテゴリ（Position, Areaなど）
//! - **ItemBatch**: 作成するCompany Unit Itemのバリューオブジェクト

pub mod company_unit;
pub mod item_batch;
pub mod session;
