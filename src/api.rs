//! HTTP surface for the bookmark store.
//!
//! JSON in, JSON out. Handlers translate `StoreError` values into status
//! codes; every error body has the shape `{ "error": "<message>" }`.
//! Request structs keep required fields optional so a missing field
//! surfaces as a store validation error (400 with a message) rather than
//! a deserialization rejection.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::store::Store;
use crate::types::bookmark::Bookmark;
use crate::types::category::Category;
use crate::types::errors::StoreError;

pub fn router() -> Router<Store> {
    Router::new()
        .route("/api/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/api/bookmarks/{id}",
            put(update_bookmark).delete(delete_bookmark),
        )
        .route(
            "/api/categories",
            get(list_categories).post(create_category),
        )
        .route("/api/categories/reorder", put(reorder_categories))
        .route("/api/categories/{name}", delete(delete_category))
}

/// Translates store failures into HTTP responses.
struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            StoreError::Validation(_)
            | StoreError::Conflict(_)
            | StoreError::Forbidden(_)
            | StoreError::UnknownCategory(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct CreateBookmarkRequest {
    title: Option<String>,
    url: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateBookmarkRequest {
    title: Option<String>,
    url: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreateCategoryRequest {
    name: Option<String>,
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReorderRequest {
    #[serde(default, rename = "orderedCategories")]
    ordered_categories: Vec<String>,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

// === Bookmarks ===

async fn list_bookmarks(State(store): State<Store>) -> Result<Json<Vec<Bookmark>>, ApiError> {
    Ok(Json(store.list_bookmarks().await?))
}

async fn create_bookmark(
    State(store): State<Store>,
    Json(req): Json<CreateBookmarkRequest>,
) -> Result<Json<Bookmark>, ApiError> {
    let bookmark = store
        .add_bookmark(
            req.title.as_deref().unwrap_or(""),
            req.url.as_deref().unwrap_or(""),
            req.category.as_deref(),
        )
        .await?;
    Ok(Json(bookmark))
}

async fn update_bookmark(
    State(store): State<Store>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateBookmarkRequest>,
) -> Result<Json<Bookmark>, ApiError> {
    let bookmark = store
        .update_bookmark(
            id,
            req.title.as_deref(),
            req.url.as_deref(),
            req.category.as_deref(),
        )
        .await?;
    Ok(Json(bookmark))
}

async fn delete_bookmark(
    State(store): State<Store>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    store.delete_bookmark(id).await?;
    Ok(Json(MessageResponse {
        message: "Bookmark deleted".to_string(),
    }))
}

// === Categories ===

async fn list_categories(State(store): State<Store>) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(store.list_categories().await?))
}

async fn create_category(
    State(store): State<Store>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    let category = store
        .add_category(
            req.name.as_deref().unwrap_or(""),
            req.color.as_deref().unwrap_or(""),
        )
        .await?;
    Ok(Json(category))
}

async fn delete_category(
    State(store): State<Store>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    store.delete_category(&name).await?;
    Ok(Json(MessageResponse {
        message: "Category deleted".to_string(),
    }))
}

async fn reorder_categories(
    State(store): State<Store>,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = store.reorder_categories(&req.ordered_categories).await?;
    Ok(Json(categories))
}
