use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AppError, ValidatedJson,
    errors::responses::{
        BadRequestQueryResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{DeletedItem, Item, ItemStatus, NewItem, SearchQuery};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(create_item, get_item, upsert_item, delete_item, search_items),
    components(
        schemas(Item, NewItem, ItemStatus, SearchQuery, DeletedItem),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestQueryResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = "Items", description = "Item management endpoints (Elasticsearch)")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_item))
        .route("/search", post(search_items))
        .route(
            "/{id}",
            get(get_item).put(upsert_item).delete(delete_item),
        )
        .with_state(shared_service)
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = NewItem,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<NewItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
) -> ItemResult<Json<Item>> {
    let item = service.get(&id).await?;
    Ok(Json(item))
}

/// Create or replace the item at the given ID
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Target item ID")
    ),
    request_body = NewItem,
    responses(
        (status = 200, description = "Item upserted successfully", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn upsert_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<NewItem>,
) -> ItemResult<Json<Item>> {
    let item = service.upsert(&id, input).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted successfully", body = DeletedItem),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
) -> ItemResult<Json<DeletedItem>> {
    let deleted = service.delete(&id).await?;
    Ok(Json(deleted))
}

/// Search items with an opaque backend query
#[utoipa::path(
    post,
    path = "/search",
    tag = "Items",
    request_body = SearchQuery,
    responses(
        (status = 200, description = "Matching items, possibly empty", body = Vec<Item>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn search_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<Vec<Item>>, AppError> {
    let Json(query) = payload?;
    let items = service.search(SearchQuery::new(query)).await?;
    Ok(Json(items))
}
