//! Set-Cookie Parsing
//!
//! Extracts `name -> value` pairs from raw `Set-Cookie` headers and picks the
//! NextAuth session token out of them.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, SET_COOKIE};

/// Cookie set by NextAuth on HTTPS deployments
pub const SECURE_SESSION_COOKIE: &str = "__Secure-next-auth.session-token";
/// Cookie set by NextAuth on plain HTTP deployments
pub const SESSION_COOKIE: &str = "next-auth.session-token";

/// Session cookie names in order of preference
pub const SESSION_COOKIE_NAMES: [&str; 2] = [SECURE_SESSION_COOKIE, SESSION_COOKIE];

/// Cookies set by a single response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookies {
    values: HashMap<String, String>,
}

impl SessionCookies {
    /// Parse raw `Set-Cookie` header values.
    ///
    /// Only the leading `name=value` pair of each header is kept; attributes
    /// such as `Path` or `HttpOnly` are ignored. Cookies with an empty value
    /// (deletions) are skipped. When a name repeats, the first value wins.
    pub fn parse<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = HashMap::new();
        for header in headers {
            if let Some((name, value)) = parse_pair(header.as_ref()) {
                values.entry(name).or_insert(value);
            }
        }
        Self { values }
    }

    /// Collect every `Set-Cookie` header of a response
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self::parse(
            headers
                .get_all(SET_COOKIE)
                .iter()
                .filter_map(|value| value.to_str().ok()),
        )
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// The session token, preferring the `__Secure-` prefixed cookie
    pub fn session_token(&self) -> Option<&str> {
        SESSION_COOKIE_NAMES.iter().find_map(|name| self.get(name))
    }
}

fn parse_pair(header: &str) -> Option<(String, String)> {
    let pair = header.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    let (name, value) = (name.trim(), value.trim());

    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some((name.to_string(), value.to_string()))
}
