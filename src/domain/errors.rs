//! # Domain Errors
//!
//! HRISとのやり取りで発生する失敗の分類

use thiserror::Error;

/// HRIS操作のエラー
///
/// Repository traitは `anyhow::Result` を返すため、呼び出し側は
/// `downcast_ref::<HrisError>()` で種類を判別できる
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HrisError {
    /// 想定外のHTTPステータス、または必須フィールドの欠落
    #[error("{context} failed: {detail}")]
    Protocol {
        context: String,
        status: Option<u16>,
        detail: String,
    },

    /// ログイン後のセッション確認レスポンスが解釈できなかった
    ///
    /// `status` と `body` はクレデンシャルPOSTのもの
    #[error("Login appears to have failed. status={status} body={body}")]
    LoginFailure { status: u16, body: String },

    /// メールアドレスまたはパスワードが未設定
    #[error("email and password must both be set")]
    MissingCredentials,

    /// セッションドキュメントに companyId が含まれていない
    #[error("companyId missing from session document")]
    MissingCompanyId,
}

impl HrisError {
    /// 想定外のステータスコードを表すProtocolエラーを作成
    pub fn unexpected_status(
        context: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        Self::Protocol {
            context: context.into(),
            status: Some(status),
            detail: format!("({}) : {}", status, body.into()),
        }
    }

    /// レスポンスに必須フィールドが無いことを表すProtocolエラーを作成
    pub fn missing_field(context: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Protocol {
            context: context.into(),
            status: None,
            detail: detail.into(),
        }
    }
}
