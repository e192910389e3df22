use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// Item publication status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ItemStatus {
    /// Item is listed and purchasable
    #[default]
    Active,
    /// Item is temporarily hidden from search
    Paused,
    /// Item is no longer for sale
    Closed,
}

/// Item entity - one document in the search index.
///
/// The identifier is assigned by the backend on create and immutable
/// afterwards; the remaining fields follow the index schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, assigned by the backend
    pub id: String,
    /// Seller account id
    pub seller: i64,
    /// Item title
    pub title: String,
    /// Item description
    pub description: String,
    /// Picture URLs
    pub pictures: Vec<String>,
    /// Optional video URL
    pub video: Option<String>,
    /// Unit price
    pub price: f64,
    /// Units available for sale
    pub available_quantity: i64,
    /// Units already sold
    pub sold_quantity: i64,
    /// Current status
    pub status: ItemStatus,
}

/// DTO for creating or upserting an item (no identifier)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
pub struct NewItem {
    pub seller: i64,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pictures: Vec<String>,
    pub video: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub available_quantity: i64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub sold_quantity: i64,
    #[serde(default)]
    pub status: ItemStatus,
}

/// Opaque search criteria, forwarded to the backend unmodified.
///
/// The value is a serialized query in the backend's own query DSL; this
/// layer neither inspects nor transforms it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(value_type = Object)]
pub struct SearchQuery(pub serde_json::Value);

impl SearchQuery {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

/// Identifier-only snapshot returned by delete.
///
/// Only the identifier is populated before the backend delete runs, so
/// that is the whole contract of the returned value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeletedItem {
    pub id: String,
}

/// Backend document representation of an item.
///
/// This is the exact shape stored under `_source` in the index; the
/// identifier lives outside the document (`_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDocument {
    pub seller: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pictures: Vec<String>,
    pub video: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub available_quantity: i64,
    #[serde(default)]
    pub sold_quantity: i64,
    #[serde(default)]
    pub status: ItemStatus,
}

impl From<NewItem> for ItemDocument {
    fn from(input: NewItem) -> Self {
        Self {
            seller: input.seller,
            title: input.title,
            description: input.description,
            pictures: input.pictures,
            video: input.video,
            price: input.price,
            available_quantity: input.available_quantity,
            sold_quantity: input.sold_quantity,
            status: input.status,
        }
    }
}

impl Item {
    /// Rebuild the entity from a backend document and its identifier.
    pub fn from_document(id: String, doc: ItemDocument) -> Self {
        Self {
            id,
            seller: doc.seller,
            title: doc.title,
            description: doc.description,
            pictures: doc.pictures,
            video: doc.video,
            price: doc.price,
            available_quantity: doc.available_quantity,
            sold_quantity: doc.sold_quantity,
            status: doc.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(title: &str) -> NewItem {
        NewItem {
            seller: 42,
            title: title.to_string(),
            description: "a thing".to_string(),
            pictures: vec!["https://img.example.com/1.jpg".to_string()],
            video: None,
            price: 9.99,
            available_quantity: 3,
            sold_quantity: 0,
            status: ItemStatus::Active,
        }
    }

    #[test]
    fn test_new_item_valid() {
        assert!(new_item("Foo").validate().is_ok());
    }

    #[test]
    fn test_new_item_empty_title_rejected() {
        let item = new_item("");
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_new_item_negative_price_rejected() {
        let mut item = new_item("Foo");
        item.price = -1.0;
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_new_item_negative_quantity_rejected() {
        let mut item = new_item("Foo");
        item.available_quantity = -5;
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_status_serde_snake_case() {
        let json = serde_json::to_string(&ItemStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let status: ItemStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(status, ItemStatus::Paused);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ItemStatus::Closed.to_string(), "closed");
    }

    #[test]
    fn test_item_from_document_round_trip() {
        let input = new_item("Foo");
        let doc = ItemDocument::from(input.clone());
        let item = Item::from_document("abc123".to_string(), doc);

        assert_eq!(item.id, "abc123");
        assert_eq!(item.title, input.title);
        assert_eq!(item.seller, input.seller);
        assert_eq!(item.price, input.price);
        assert_eq!(item.status, input.status);
    }

    #[test]
    fn test_document_deserialize_applies_defaults() {
        let doc: ItemDocument = serde_json::from_value(serde_json::json!({
            "seller": 1,
            "title": "Foo",
            "video": null,
            "price": 1.5
        }))
        .unwrap();

        assert_eq!(doc.description, "");
        assert!(doc.pictures.is_empty());
        assert_eq!(doc.available_quantity, 0);
        assert_eq!(doc.status, ItemStatus::Active);
    }

    #[test]
    fn test_search_query_is_pass_through() {
        let value = serde_json::json!({ "query": { "match_all": {} } });
        let query = SearchQuery::new(value.clone());
        assert_eq!(query.into_inner(), value);
    }
}
