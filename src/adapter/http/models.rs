//! HRIS Wire Models
//!
//! Response shapes of the NextAuth and company-unit endpoints

use serde::Deserialize;

use crate::domain::entities::company_unit::CompanyUnit;

/// `GET /api/auth/csrf`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrfResponse {
    #[serde(default)]
    pub csrf_token: Option<String>,
}

impl CsrfResponse {
    /// The token, if present and non-empty
    pub fn token(self) -> Option<String> {
        self.csrf_token.filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DocsPage {
    #[serde(default)]
    pub docs: Option<Vec<CompanyUnit>>,
}

/// Company unit list/create responses: `{data: {docs: [...]}}`, with some
/// endpoints returning `{docs: [...]}` at the top level instead
#[derive(Debug, Default, Deserialize)]
pub struct DocsEnvelope {
    #[serde(default)]
    pub data: Option<DocsPage>,
    #[serde(default)]
    pub docs: Option<Vec<CompanyUnit>>,
}

impl DocsEnvelope {
    pub fn into_docs(self) -> Vec<CompanyUnit> {
        self.data
            .and_then(|page| page.docs)
            .or(self.docs)
            .unwrap_or_default()
    }
}
