//! HTTP Adapter Modules
//!
//! HRIS APIとの通信に使うHTTPクライアントとワイヤ形式

pub mod client;
pub mod cookies;
pub mod models;

pub use client::SessionClient;
pub use cookies::SessionCookies;
