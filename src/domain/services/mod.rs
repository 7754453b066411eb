//! # Domain Services
//!
//! エンティティに属さないビジネスルール

pub mod unit_catalog;
