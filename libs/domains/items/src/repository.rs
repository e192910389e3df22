use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{Item, NewItem, SearchQuery};

/// Repository trait for Item persistence and search.
///
/// This trait is the narrow backend contract: one document-store
/// interaction per call. Implementations map their own failures onto
/// the [`crate::error::ItemError`] taxonomy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Index a new document; the backend assigns the identifier.
    async fn create(&self, input: NewItem) -> ItemResult<Item>;

    /// Fetch a document by id. `None` when no document exists.
    async fn get(&self, id: &str) -> ItemResult<Option<Item>>;

    /// Remove the document at `id`; `NotFound` when absent.
    async fn delete(&self, id: &str) -> ItemResult<()>;

    /// Create-or-replace the document at `id`. Never `NotFound`.
    async fn upsert(&self, id: &str, input: NewItem) -> ItemResult<Item>;

    /// Run an opaque query; backend-ordered matches, empty when none.
    async fn search(&self, query: SearchQuery) -> ItemResult<Vec<Item>>;
}
