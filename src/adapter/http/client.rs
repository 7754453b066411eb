//! Session-scoped HTTP Client
//!
//! One `SessionClient` per run. It owns the cookie jar, so cookies set during
//! login are sent with every later request to the same origin. Redirects are
//! never followed automatically; the login flow inspects them itself.

use std::sync::Arc;

use anyhow::{Context, Result};
use log::debug;
use reqwest::cookie::Jar;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN};
use reqwest::redirect::Policy;
use reqwest::{Client, Response};
use serde::Serialize;

#[derive(Clone)]
pub struct SessionClient {
    client: Client,
}

impl SessionClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .cookie_provider(Arc::new(Jar::default()))
            .redirect(Policy::none())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// GET without credentials beyond the cookie jar
    pub async fn get(&self, url: &str, accept: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, accept)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        debug!("GET {} -> {}", url, response.status());
        Ok(response)
    }

    /// POST an url-encoded form
    pub async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
        origin: &str,
    ) -> Result<Response> {
        let response = self
            .client
            .post(url)
            .header(ORIGIN, origin)
            .header(ACCEPT, "*/*")
            .form(fields)
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;

        debug!("POST {} -> {}", url, response.status());
        Ok(response)
    }

    /// GET with a bearer token
    pub async fn get_authorized(
        &self,
        url: &str,
        token: &str,
        query: &[(&str, &str)],
    ) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "*/*")
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .query(query)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        debug!("GET {} -> {}", url, response.status());
        Ok(response)
    }

    /// POST a JSON body with a bearer token
    pub async fn post_json_authorized<T>(
        &self,
        url: &str,
        token: &str,
        body: &T,
    ) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(url)
            .header(ACCEPT, "*/*")
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;

        debug!("POST {} -> {}", url, response.status());
        Ok(response)
    }
}
