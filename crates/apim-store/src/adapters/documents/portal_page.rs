//! Persisted shape of a PortalPage

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use apim_core::PortalPage;

/// `portal_pages` collection document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalPageDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub environment_id: String,
    pub name: String,
    #[serde(default)]
    pub content: String,
    /// Omitted from the document when the page has no tag list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contexts: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&PortalPage> for PortalPageDocument {
    fn from(page: &PortalPage) -> Self {
        Self {
            id: page.id.clone(),
            environment_id: page.environment_id.clone(),
            name: page.name.clone(),
            content: page.content.clone(),
            contexts: page.contexts.clone(),
            created_at: page.created_at,
            updated_at: page.updated_at,
        }
    }
}

impl From<PortalPageDocument> for PortalPage {
    fn from(document: PortalPageDocument) -> Self {
        Self {
            id: document.id,
            environment_id: document.environment_id,
            name: document.name,
            content: document.content,
            contexts: document.contexts,
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }
}
