//! API handlers

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::extract::{deserialize_flag, ApiPath, ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::error::{Error, Location, Result};
use crate::types::{CatalogEntry, Item, ModelName, LONG_DESCRIPTION};

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello World",
    })
}

#[derive(Debug, Serialize)]
pub struct ModelResponse {
    pub model_name: ModelName,
    pub message: &'static str,
}

/// Canned message for one of the known model names
pub async fn get_model(ApiPath(model_name): ApiPath<ModelName>) -> Json<ModelResponse> {
    tracing::debug!(%model_name, "model lookup");
    Json(ModelResponse {
        model_name,
        message: model_name.message(),
    })
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: String,
}

/// Placeholder for the calling user. Registered as a static route so
/// `/users/{user_id}` never shadows it.
pub async fn read_user_me() -> Json<UserResponse> {
    Json(UserResponse {
        user_id: "It's you dummy!".to_string(),
    })
}

pub async fn read_user(ApiPath(user_id): ApiPath<String>) -> Json<UserResponse> {
    Json(UserResponse { user_id })
}

#[derive(Debug, Serialize)]
pub struct FileResponse {
    pub file_path: String,
}

/// Echo the remainder of the path, slashes included
pub async fn read_file(ApiPath(file_path): ApiPath<String>) -> Json<FileResponse> {
    Json(FileResponse { file_path })
}

/// `/files/` with nothing after it; the wildcard route needs a non-empty tail.
pub async fn read_file_root() -> Json<FileResponse> {
    Json(FileResponse {
        file_path: String::new(),
    })
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UserItemQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub short: bool,
}

/// Keys are emitted in declaration order; absent optionals are omitted.
#[derive(Debug, Serialize)]
pub struct UserItemResponse {
    pub item_id: String,
    pub owner_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

pub async fn read_user_item(
    ApiPath((user_id, item_id)): ApiPath<(i64, String)>,
    ValidatedQuery(query): ValidatedQuery<UserItemQuery>,
) -> Json<UserItemResponse> {
    tracing::debug!(user_id, %item_id, short = query.short, "user item lookup");
    Json(UserItemResponse {
        item_id,
        owner_id: user_id,
        q: non_empty(query.q),
        description: (!query.short).then_some(LONG_DESCRIPTION),
    })
}

#[derive(Debug, Serialize)]
pub struct CreateItemResponse {
    #[serde(flatten)]
    pub item: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_tax: Option<f64>,
}

/// Echo the item, adding `price_with_tax` when a non-zero tax was given.
/// Nothing is persisted.
pub async fn create_item(ValidatedJson(item): ValidatedJson<Item>) -> Json<CreateItemResponse> {
    let price_with_tax = item.price_with_tax();
    tracing::debug!(name = %item.name, ?price_with_tax, "item accepted");
    Json(CreateItemResponse {
        item,
        price_with_tax,
    })
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ReplaceItemQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReplaceItemResponse {
    pub item_id: i64,
    #[serde(flatten)]
    pub item: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

pub async fn replace_item(
    ApiPath(item_id): ApiPath<i64>,
    ValidatedQuery(query): ValidatedQuery<ReplaceItemQuery>,
    ValidatedJson(item): ValidatedJson<Item>,
) -> Json<ReplaceItemResponse> {
    tracing::debug!(item_id, name = %item.name, "item replaced");
    Json(ReplaceItemResponse {
        item_id,
        item,
        q: non_empty(query.q),
    })
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListItemsQuery {
    #[serde(default)]
    #[validate(length(max = 50, message = "q must be at most 50 characters"))]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemRef {
    pub item_id: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ListItemsResponse {
    pub items: Vec<ItemRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

pub async fn read_items(
    ValidatedQuery(query): ValidatedQuery<ListItemsQuery>,
) -> Json<ListItemsResponse> {
    Json(ListItemsResponse {
        items: vec![ItemRef { item_id: "Foo" }, ItemRef { item_id: "Bar" }],
        q: non_empty(query.q),
    })
}

#[derive(Debug, Deserialize, Validate)]
pub struct CatalogQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

/// Slice of the static catalog
pub async fn browse_catalog(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<CatalogQuery>,
) -> Result<Json<Vec<CatalogEntry>>> {
    if query.limit > state.max_page_size {
        return Err(Error::validation(
            Location::Query,
            format!("limit must be at most {}", state.max_page_size),
        ));
    }

    Ok(Json(state.catalog_page(query.skip, query.limit).to_vec()))
}

/// 307 to the same path with a trailing slash, keeping the query string
pub async fn redirect_trailing_slash(uri: Uri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("{}/?{}", uri.path(), query),
        None => format!("{}/", uri.path()),
    };
    Redirect::temporary(&target)
}

pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "detail": "Not Found" })),
    )
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
