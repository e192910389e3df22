//! Item Service - the contract callers depend on.
//!
//! Stateless orchestration over [`ItemRepository`]: each operation is a
//! single request/response exchange with the backend, propagated
//! unchanged. No retry, no caching, no state across calls, safe to
//! share across concurrent callers.

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{DeletedItem, Item, NewItem, SearchQuery};
use crate::repository::ItemRepository;

pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Persist a new item; the returned entity carries the
    /// backend-assigned identifier.
    #[instrument(skip(self, input), fields(item_title = %input.title))]
    pub async fn create(&self, input: NewItem) -> ItemResult<Item> {
        self.repository.create(input).await
    }

    /// Fetch an item by identifier.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> ItemResult<Item> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| ItemError::NotFound(id.to_string()))
    }

    /// Run an opaque search query; an empty result is not an error.
    #[instrument(skip(self, query))]
    pub async fn search(&self, query: SearchQuery) -> ItemResult<Vec<Item>> {
        self.repository.search(query).await
    }

    /// Delete an item by identifier, returning an identifier-only
    /// snapshot of what was removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ItemResult<DeletedItem> {
        self.repository.delete(id).await?;
        Ok(DeletedItem { id: id.to_string() })
    }

    /// Write the item's fields to the document at `id`, creating it if
    /// absent, overwriting if present.
    #[instrument(skip(self, input), fields(item_title = %input.title))]
    pub async fn upsert(&self, id: &str, input: NewItem) -> ItemResult<Item> {
        self.repository.upsert(id, input).await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
