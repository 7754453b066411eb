//! NextAuth Repository Implementation
//!
//! AuthRepositoryのNextAuth（Cookieセッション）実装
//!
//! The login flow of the HRIS web app is not stable: the session cookie may be
//! set on the credentials response, on a redirect target, or only on the
//! session check. Every location is probed and only two conditions are fatal:
//! a failed CSRF fetch and an undecodable session document.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::LOCATION;
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::adapter::http::models::CsrfResponse;
use crate::adapter::http::{SessionClient, SessionCookies};
use crate::domain::entities::session::{Credentials, Session};
use crate::domain::errors::HrisError;
use crate::domain::repositories::auth_repository::AuthRepository;

pub const CSRF_PATH: &str = "/api/auth/csrf";
pub const CREDENTIALS_PATH: &str = "/api/auth/callback/credentials";
pub const SESSION_PATH: &str = "/api/auth/session";

const PLATFORM: &str = "hris_employer_web";

/// Outcome of the credentials POST
struct CredentialsResponse {
    status: StatusCode,
    session_token: Option<String>,
    location: Option<String>,
    body: String,
}

pub struct NextAuthRepository {
    client: SessionClient,
    base_url: String,
}

impl NextAuthRepository {
    pub fn new(client: SessionClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the anti-forgery token that must be echoed in the login form
    pub async fn fetch_csrf_token(&self) -> Result<String> {
        let response = self.client.get(&self.endpoint(CSRF_PATH), "*/*").await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(HrisError::unexpected_status("csrf", status.as_u16(), body).into());
        }

        let csrf: CsrfResponse = serde_json::from_str(&body).map_err(|e| {
            HrisError::missing_field("csrf", format!("invalid response body: {}", e))
        })?;

        let token = csrf
            .token()
            .ok_or_else(|| HrisError::missing_field("csrf", "csrf token missing in response"))?;
        Ok(token)
    }

    async fn submit_credentials(
        &self,
        credentials: &Credentials,
        csrf_token: &str,
    ) -> Result<CredentialsResponse> {
        let form = [
            ("email", credentials.email.as_str()),
            ("password", credentials.password.as_str()),
            ("redirect", "false"),
            ("platform", PLATFORM),
            ("type", "email"),
            ("csrfToken", csrf_token),
            ("json", "true"),
        ];

        let response = self
            .client
            .post_form(&self.endpoint(CREDENTIALS_PATH), &form, &self.base_url)
            .await?;

        let status = response.status();
        let session_token = SessionCookies::from_headers(response.headers())
            .session_token()
            .map(str::to_string);
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable>".to_string());

        Ok(CredentialsResponse {
            status,
            session_token,
            location,
            body,
        })
    }

    /// Visit a redirect target only for its cookie side effects
    async fn follow_redirect(&self, location: &str) -> Result<()> {
        let base = Url::parse(&self.endpoint(CREDENTIALS_PATH))
            .context("Invalid auth base URL")?;
        let target = base
            .join(location)
            .with_context(|| format!("Invalid redirect location: {}", location))?;

        info!("Login redirected to {}, following once", target);
        self.client.get(target.as_str(), "*/*").await?;
        Ok(())
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl AuthRepository for NextAuthRepository {
    async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let csrf_token = self.fetch_csrf_token().await?;
        debug!("Obtained CSRF token");

        let login = self.submit_credentials(credentials, &csrf_token).await?;
        let mut session_token = login.session_token.clone();

        if session_token.is_none() && login.status.is_redirection() {
            if let Some(location) = &login.location {
                self.follow_redirect(location).await?;
            }
        }

        let session_response = self
            .client
            .get(&self.endpoint(SESSION_PATH), "application/json")
            .await?;
        let session_cookies = SessionCookies::from_headers(session_response.headers());

        // null counts as "no document", same as a decode error
        let document = session_response
            .text()
            .await
            .ok()
            .and_then(|text| serde_json::from_str::<Value>(&text).ok())
            .filter(|value| !value.is_null());

        if session_token.is_none() {
            session_token = session_cookies.session_token().map(str::to_string);
        }

        let Some(document) = document else {
            return Err(HrisError::LoginFailure {
                status: login.status.as_u16(),
                body: login.body,
            }
            .into());
        };

        info!(
            "Session acquired (token {})",
            if session_token.is_some() { "present" } else { "missing" }
        );
        Ok(Session::new(session_token.unwrap_or_default(), document))
    }
}
