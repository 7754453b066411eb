//! # Session Entity
//!
//! ログイン結果のドメインエンティティ

use std::fmt;

use serde_json::Value;

/// ログインに使うアカウント情報
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// メールアドレスとパスワードの両方が設定されているか
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

// パスワードはログに出さない
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// ログインセッション
///
/// セッショントークン（Bearerとして使用）とセッション確認ドキュメントを保持する。
/// トークンは空文字列の場合がある（呼び出し側で確認すること）
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub session_token: String,
    pub document: Value,
}

impl Session {
    pub fn new(session_token: impl Into<String>, document: Value) -> Self {
        Self {
            session_token: session_token.into(),
            document,
        }
    }

    /// セッショントークンが取得できたか
    pub fn has_token(&self) -> bool {
        !self.session_token.is_empty()
    }

    /// セッションドキュメントから会社IDを取り出す
    ///
    /// `user.companyId` を優先し、無ければ `user.company.id` を参照する。
    /// 数値IDは文字列に変換する
    pub fn company_id(&self) -> Option<String> {
        let user = self.document.get("user")?;

        user.get("companyId")
            .and_then(id_to_string)
            .or_else(|| user.get("company")?.get("id").and_then(id_to_string))
    }
}

/// 文字列または数値のIDを文字列として取り出す（空文字列は無効）
pub(crate) fn id_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
