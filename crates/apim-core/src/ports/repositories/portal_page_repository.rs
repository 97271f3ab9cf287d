//! PortalPage Repository Port
//!
//! Abstract interface for PortalPage persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, PortalPage};

/// Repository interface for PortalPage entities
///
/// Lists come back in store-defined order (insertion order for the bundled
/// adapters).
#[async_trait]
pub trait PortalPageRepository: Send + Sync {
    /// Persist a new page, assigning an id when `page.id` is empty
    async fn create(&self, page: &PortalPage) -> Result<PortalPage, DomainError>;

    /// Find a page by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<PortalPage>, DomainError>;

    /// Find all pages
    async fn find_all(&self) -> Result<Vec<PortalPage>, DomainError>;

    /// Overwrite the whole page by id, inserting it when absent.
    ///
    /// An empty id is replaced with a store-assigned one, as in `create`.
    async fn update(&self, page: &PortalPage) -> Result<PortalPage, DomainError>;

    /// Delete a page by ID. Unknown ids are ignored.
    async fn delete(&self, id: &str) -> Result<(), DomainError>;

    /// Add `context` to the page's tag list.
    ///
    /// No-op when the page is missing, has no tag list, or already carries
    /// the tag.
    async fn assign_context(&self, page_id: &str, context: &str) -> Result<(), DomainError>;

    /// Remove `context` from the page's tag list. No-op when absent.
    async fn remove_context(&self, page_id: &str, context: &str) -> Result<(), DomainError>;

    /// Find all pages tagged with `context`
    async fn find_by_context(&self, context: &str) -> Result<Vec<PortalPage>, DomainError>;
}
