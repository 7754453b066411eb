//! Adapter Layer
//!
//! 外部システム（HRIS API、設定ファイル）との統合

pub mod config;
pub mod http;
pub mod repositories;
