//! Items Domain
//!
//! This module provides a complete domain implementation for managing items using Elasticsearch.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, error mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Elasticsearch implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::elasticsearch::ElasticsearchConfig;
//! use domain_items::{
//!     elasticsearch::EsItemRepository,
//!     handlers,
//!     service::ItemService,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Point the repository at the search cluster
//! let config =
//!     ElasticsearchConfig::new("http://localhost:9200".to_string(), "items".to_string())?;
//! let repository = EsItemRepository::from_config(&config)?;
//! let service = ItemService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod elasticsearch;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use elasticsearch::EsItemRepository;
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{DeletedItem, Item, ItemStatus, NewItem, SearchQuery};
pub use repository::ItemRepository;
pub use service::ItemService;
