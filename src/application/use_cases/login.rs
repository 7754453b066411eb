//! # Login Use Case
//!
//! ログインして会社IDを解決するユースケース

use std::sync::Arc;

use anyhow::Result;
use log::{info, warn};

use crate::domain::entities::session::{Credentials, Session};
use crate::domain::errors::HrisError;
use crate::domain::repositories::auth_repository::AuthRepository;

/// 認証済みセッション
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedSession {
    pub session: Session,
    pub company_id: String,
}

/// ログインユースケース
///
/// セッションを取得し、以降のAPI呼び出しに必要な会社IDを取り出す
pub struct LoginUseCase<A: AuthRepository> {
    auth_repository: Arc<A>,
}

impl<A: AuthRepository> LoginUseCase<A> {
    /// 新しいユースケースを作成
    pub fn new(auth_repository: Arc<A>) -> Self {
        Self { auth_repository }
    }

    /// ログインを実行
    ///
    /// # Errors
    ///
    /// - アカウント情報が不完全な場合は `HrisError::MissingCredentials`
    /// - 認証リポジトリが返したエラー
    /// - セッションに会社IDが無い場合は `HrisError::MissingCompanyId`
    pub async fn execute(&self, credentials: &Credentials) -> Result<AuthenticatedSession> {
        if !credentials.is_complete() {
            return Err(HrisError::MissingCredentials.into());
        }

        info!("Logging in as {}", credentials.email);
        let session = self.auth_repository.login(credentials).await?;

        // 空トークンは失敗扱いにしない（後続のAPI呼び出しで401になる）
        if !session.has_token() {
            warn!("No session token found in login or session responses");
        }

        let company_id = session.company_id().ok_or(HrisError::MissingCompanyId)?;
        info!("Resolved companyId: {}", company_id);

        Ok(AuthenticatedSession {
            session,
            company_id,
        })
    }
}
