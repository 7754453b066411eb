//! # Auth Repository Trait
//!
//! セッション取得（ログイン）を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::session::{Credentials, Session};

/// 認証リポジトリ
///
/// アカウント情報からセッションを取得する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// ログインしてセッションを取得する
    ///
    /// # Arguments
    ///
    /// * `credentials` - メールアドレスとパスワード
    ///
    /// # Returns
    ///
    /// セッション（トークンは空文字列の場合がある）
    ///
    /// # Errors
    ///
    /// CSRFトークンの取得に失敗した場合は `HrisError::Protocol`、
    /// セッション確認ドキュメントが解釈できない場合は `HrisError::LoginFailure`
    async fn login(&self, credentials: &Credentials) -> Result<Session>;
}
