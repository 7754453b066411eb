//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - HTTPやCookieについて何も知らない
//! - 外部APIの形式ではなく、業務上の概念（セッション、Company Unit）を扱う
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Session, CompanyUnit, ItemBatchなど）
//! - **errors**: ドメインエラー（HrisError）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（ビジネスルール）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
