//! PortalPage - Content page displayed by the developer portal
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A portal page and the usage contexts it is tagged with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalPage {
    /// Empty until the store assigns one, unless the caller provides it
    pub id: String,
    pub environment_id: String,
    pub name: String,
    pub content: String,
    /// Context tags with set-like membership.
    ///
    /// `None` when the stored document carries no tag list at all; context
    /// operations leave such pages untouched.
    pub contexts: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PortalPage {
    /// Create a page with an empty tag list and no id yet
    pub fn new(
        environment_id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            environment_id: environment_id.into(),
            name: name.into(),
            content: content.into(),
            contexts: Some(Vec::new()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Use a caller-assigned id instead of a store-assigned one
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Replace the tag list
    pub fn with_contexts(mut self, contexts: Option<Vec<String>>) -> Self {
        self.contexts = contexts;
        self
    }

    /// Whether the page is tagged with `context`
    pub fn has_context(&self, context: &str) -> bool {
        self.contexts
            .as_ref()
            .is_some_and(|contexts| contexts.iter().any(|c| c == context))
    }
}
