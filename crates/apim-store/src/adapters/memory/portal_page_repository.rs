//! In-memory implementation of PortalPageRepository

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use apim_core::{DomainError, PortalPage, PortalPageRepository};

use super::lock_poisoned;
use crate::adapters::documents::{generate_id, PortalPageDocument};

/// In-memory PortalPage collection
///
/// Documents are kept in insertion order. Clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPortalPageRepository {
    documents: Arc<RwLock<Vec<PortalPageDocument>>>,
}

impl InMemoryPortalPageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PortalPageRepository for InMemoryPortalPageRepository {
    async fn create(&self, page: &PortalPage) -> Result<PortalPage, DomainError> {
        let mut document = PortalPageDocument::from(page);
        if document.id.is_empty() {
            document.id = generate_id();
        }

        let mut documents = self.documents.write().map_err(|_| lock_poisoned("write"))?;
        if documents.iter().any(|d| d.id == document.id) {
            tracing::warn!(page_id = %document.id, "Portal page id already taken");
            return Err(DomainError::duplicate_id("PortalPage", &document.id));
        }
        documents.push(document.clone());

        tracing::info!(page_id = %document.id, "Created portal page");
        Ok(document.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PortalPage>, DomainError> {
        let documents = self.documents.read().map_err(|_| lock_poisoned("read"))?;
        Ok(documents
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<PortalPage>, DomainError> {
        let documents = self.documents.read().map_err(|_| lock_poisoned("read"))?;
        Ok(documents.iter().cloned().map(Into::into).collect())
    }

    async fn update(&self, page: &PortalPage) -> Result<PortalPage, DomainError> {
        let mut document = PortalPageDocument::from(page);
        if document.id.is_empty() {
            document.id = generate_id();
        }

        let mut documents = self.documents.write().map_err(|_| lock_poisoned("write"))?;
        match documents.iter_mut().find(|d| d.id == document.id) {
            Some(existing) => *existing = document.clone(),
            None => {
                tracing::debug!(page_id = %document.id, "Upserting unknown portal page");
                documents.push(document.clone());
            }
        }

        Ok(document.into())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let mut documents = self.documents.write().map_err(|_| lock_poisoned("write"))?;
        documents.retain(|d| d.id != id);
        Ok(())
    }

    async fn assign_context(&self, page_id: &str, context: &str) -> Result<(), DomainError> {
        let mut documents = self.documents.write().map_err(|_| lock_poisoned("write"))?;
        let contexts = documents
            .iter_mut()
            .find(|d| d.id == page_id)
            .and_then(|d| d.contexts.as_mut());

        if let Some(contexts) = contexts {
            if !contexts.iter().any(|c| c == context) {
                contexts.push(context.to_string());
                tracing::debug!(page_id, context, "Assigned context");
            }
        }

        Ok(())
    }

    async fn remove_context(&self, page_id: &str, context: &str) -> Result<(), DomainError> {
        let mut documents = self.documents.write().map_err(|_| lock_poisoned("write"))?;
        let contexts = documents
            .iter_mut()
            .find(|d| d.id == page_id)
            .and_then(|d| d.contexts.as_mut());

        if let Some(contexts) = contexts {
            let before = contexts.len();
            contexts.retain(|c| c != context);
            if contexts.len() != before {
                tracing::debug!(page_id, context, "Removed context");
            }
        }

        Ok(())
    }

    async fn find_by_context(&self, context: &str) -> Result<Vec<PortalPage>, DomainError> {
        let documents = self.documents.read().map_err(|_| lock_poisoned("read"))?;
        Ok(documents
            .iter()
            .cloned()
            .map(PortalPage::from)
            .filter(|p| p.has_context(context))
            .collect())
    }
}
