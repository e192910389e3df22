//! Elasticsearch implementation of ItemRepository.
//!
//! Talks to an Elasticsearch/OpenSearch-compatible index over the
//! `opensearch` client (the official `elasticsearch` crate has no
//! stable release; the wire protocol is the same). Writes and deletes
//! run with `refresh=true` so their effect is visible before the call
//! returns.

use async_trait::async_trait;
use core_config::elasticsearch::ElasticsearchConfig;
use opensearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use opensearch::params::Refresh;
use opensearch::{DeleteParts, GetParts, IndexParts, OpenSearch, SearchParts};
use serde_json::{Value, json};
use tracing::{error, instrument};
use url::Url;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemDocument, NewItem, SearchQuery};
use crate::repository::ItemRepository;

/// Elasticsearch implementation of the ItemRepository
#[derive(Clone)]
pub struct EsItemRepository {
    client: OpenSearch,
    index: String,
}

impl std::fmt::Debug for EsItemRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EsItemRepository")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl EsItemRepository {
    /// Build a repository from connection configuration.
    ///
    /// Uses a single-node connection pool; connections are reused
    /// across requests.
    pub fn from_config(config: &ElasticsearchConfig) -> ItemResult<Self> {
        let url = Url::parse(&config.url)
            .map_err(|e| ItemError::Unavailable(format!("invalid endpoint {}: {}", config.url, e)))?;

        let pool = SingleNodeConnectionPool::new(url);
        let transport = TransportBuilder::new(pool).build().map_err(|e| {
            error!(error = %e, "failed to build search transport");
            ItemError::Unavailable(e.to_string())
        })?;

        Ok(Self {
            client: OpenSearch::new(transport),
            index: config.index.clone(),
        })
    }

    pub fn index_name(&self) -> &str {
        &self.index
    }

    /// Liveness probe against the backend, used by the readiness endpoint.
    pub async fn ping(&self) -> ItemResult<()> {
        let response = self
            .client
            .ping()
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status_code().as_u16();
        if status >= 400 {
            return Err(ItemError::Unavailable(format!(
                "ping returned status {}",
                status
            )));
        }
        Ok(())
    }

    /// Map an HTTP error status from the backend onto the error taxonomy.
    ///
    /// 404 is deliberately absent: its meaning depends on the operation
    /// (missing document vs. missing index) and is handled at call sites.
    fn error_from_status(status: u16, body: &str) -> ItemError {
        match status {
            400 => ItemError::BadRequest(summarize_error_body(body)),
            408 | 503 | 504 => ItemError::Unavailable(summarize_error_body(body)),
            _ => ItemError::Backend(format!(
                "status {}: {}",
                status,
                summarize_error_body(body)
            )),
        }
    }

    /// Pull the backend-assigned identifier out of an index response.
    fn created_id(response: &Value) -> ItemResult<String> {
        response
            .get("_id")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| ItemError::Backend("index response carries no _id".to_string()))
    }

    /// Extract items from a search response body.
    ///
    /// Hit order is preserved as returned by the backend.
    fn items_from_search_response(response: Value) -> ItemResult<Vec<Item>> {
        let hits = response
            .get("hits")
            .and_then(|h| h.get("hits"))
            .and_then(|h| h.as_array())
            .ok_or_else(|| ItemError::Backend("search response carries no hits".to_string()))?;

        let mut items = Vec::with_capacity(hits.len());
        for hit in hits {
            let id = hit
                .get("_id")
                .and_then(|v| v.as_str())
                .ok_or_else(|| ItemError::Backend("search hit carries no _id".to_string()))?;

            let source = hit
                .get("_source")
                .cloned()
                .ok_or_else(|| ItemError::Backend("search hit carries no _source".to_string()))?;

            let doc: ItemDocument = serde_json::from_value(source).map_err(|e| {
                error!(error = %e, id = id, "failed to deserialize item document");
                ItemError::Backend(format!("failed to deserialize document {}: {}", id, e))
            })?;

            items.push(Item::from_document(id.to_string(), doc));
        }

        Ok(items)
    }

    /// Read the response body and fail on error statuses.
    async fn read_body(
        response: opensearch::http::response::Response,
    ) -> ItemResult<(u16, String)> {
        let status = response.status_code().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ItemError::Backend(format!("failed to read response body: {}", e)))?;
        Ok((status, body))
    }
}

fn transport_error(e: opensearch::Error) -> ItemError {
    ItemError::Unavailable(e.to_string())
}

/// Keep backend error bodies out of client responses when they are huge;
/// the full body still goes to the error log at the call site.
fn summarize_error_body(body: &str) -> String {
    const MAX: usize = 512;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    }
}

fn parse_json(body: &str) -> ItemResult<Value> {
    serde_json::from_str(body)
        .map_err(|e| ItemError::Backend(format!("failed to parse response: {}", e)))
}

#[async_trait]
impl ItemRepository for EsItemRepository {
    #[instrument(skip(self, input), fields(index = %self.index, item_title = %input.title))]
    async fn create(&self, input: NewItem) -> ItemResult<Item> {
        let doc = ItemDocument::from(input);

        let response = self
            .client
            .index(IndexParts::Index(&self.index))
            .body(json!(doc))
            .refresh(Refresh::True)
            .send()
            .await
            .map_err(transport_error)?;

        let (status, body) = Self::read_body(response).await?;
        if status >= 400 {
            error!(status = status, body = %body, "create rejected by backend");
            return Err(Self::error_from_status(status, &body));
        }

        let id = Self::created_id(&parse_json(&body)?)?;

        tracing::info!(item_id = %id, "Item created successfully");
        Ok(Item::from_document(id, doc))
    }

    #[instrument(skip(self), fields(index = %self.index))]
    async fn get(&self, id: &str) -> ItemResult<Option<Item>> {
        let response = self
            .client
            .get(GetParts::IndexId(&self.index, id))
            .send()
            .await
            .map_err(transport_error)?;

        let (status, body) = Self::read_body(response).await?;
        if status == 404 {
            return Ok(None);
        }
        if status >= 400 {
            error!(status = status, body = %body, "get rejected by backend");
            return Err(Self::error_from_status(status, &body));
        }

        let source = parse_json(&body)?
            .get("_source")
            .cloned()
            .ok_or_else(|| ItemError::Backend("get response carries no _source".to_string()))?;

        let doc: ItemDocument = serde_json::from_value(source).map_err(|e| {
            error!(error = %e, id = id, "failed to deserialize item document");
            ItemError::Backend(format!("failed to deserialize document {}: {}", id, e))
        })?;

        Ok(Some(Item::from_document(id.to_string(), doc)))
    }

    #[instrument(skip(self), fields(index = %self.index))]
    async fn delete(&self, id: &str) -> ItemResult<()> {
        let response = self
            .client
            .delete(DeleteParts::IndexId(&self.index, id))
            .refresh(Refresh::True)
            .send()
            .await
            .map_err(transport_error)?;

        let (status, body) = Self::read_body(response).await?;
        if status == 404 {
            return Err(ItemError::NotFound(id.to_string()));
        }
        if status >= 400 {
            error!(status = status, body = %body, "delete rejected by backend");
            return Err(Self::error_from_status(status, &body));
        }

        tracing::info!(item_id = %id, "Item deleted successfully");
        Ok(())
    }

    #[instrument(skip(self, input), fields(index = %self.index, item_title = %input.title))]
    async fn upsert(&self, id: &str, input: NewItem) -> ItemResult<Item> {
        let doc = ItemDocument::from(input);

        // PUT with an explicit id creates or replaces; a missing
        // document is not an error here.
        let response = self
            .client
            .index(IndexParts::IndexId(&self.index, id))
            .body(json!(doc))
            .refresh(Refresh::True)
            .send()
            .await
            .map_err(transport_error)?;

        let (status, body) = Self::read_body(response).await?;
        if status >= 400 {
            error!(status = status, body = %body, "upsert rejected by backend");
            return Err(Self::error_from_status(status, &body));
        }

        tracing::info!(item_id = %id, "Item upserted successfully");
        Ok(Item::from_document(id.to_string(), doc))
    }

    #[instrument(skip(self, query), fields(index = %self.index))]
    async fn search(&self, query: SearchQuery) -> ItemResult<Vec<Item>> {
        let response = self
            .client
            .search(SearchParts::Index(&[self.index.as_str()]))
            .body(query.into_inner())
            .send()
            .await
            .map_err(transport_error)?;

        let (status, body) = Self::read_body(response).await?;
        if status >= 400 {
            error!(status = status, body = %body, "search rejected by backend");
            return Err(Self::error_from_status(status, &body));
        }

        Self::items_from_search_response(parse_json(&body)?)
    }
}
