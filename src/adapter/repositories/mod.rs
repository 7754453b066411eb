//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod hris_company_unit_repository;
pub mod next_auth_repository;
