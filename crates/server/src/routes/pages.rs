//! Routes for the page resource consumed by the admin panel and the public
//! site.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::get,
};
use db::models::page::{CreatePage, Page, UpdatePage};
use serde::Deserialize;
use services::services::page::PageService;
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct ListPagesQuery {
    status: Option<String>,
}

/// GET /api/pages
/// List pages, most recently updated first; `?status=published` narrows the
/// list to what the public site may render.
pub async fn get_pages(
    State(state): State<AppState>,
    Query(query): Query<ListPagesQuery>,
) -> Result<ResponseJson<ApiResponse<Vec<Page>>>, ApiError> {
    let pool = &state.db().pool;

    let result = if query.status.as_deref() == Some("published") {
        PageService::list_published(pool).await
    } else {
        PageService::list_all(pool).await
    };

    let pages = result.map_err(|error| ApiError::internal("Unable to load pages", error))?;
    Ok(ResponseJson(ApiResponse::success(pages)))
}

/// GET /api/pages/{slug}
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ResponseJson<ApiResponse<Page>>, ApiError> {
    let page = PageService::get_by_slug(&state.db().pool, &slug)
        .await
        .map_err(|error| ApiError::internal("Unable to load page", error))?
        .ok_or_else(|| ApiError::NotFound("Page not found".to_string()))?;

    Ok(ResponseJson(ApiResponse::success(page)))
}

/// POST /api/pages
pub async fn create_page(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreatePage>,
) -> Result<(StatusCode, ResponseJson<ApiResponse<Page>>), ApiError> {
    let page = PageService::create(&state.db().pool, payload).await?;
    Ok((StatusCode::CREATED, ResponseJson(ApiResponse::success(page))))
}

/// PUT /api/pages/{slug}
/// Partial update: only the fields present in the body change.
pub async fn update_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    axum::Json(payload): axum::Json<UpdatePage>,
) -> Result<ResponseJson<ApiResponse<Page>>, ApiError> {
    let page = PageService::update(&state.db().pool, &slug, payload).await?;
    Ok(ResponseJson(ApiResponse::success(page)))
}

/// DELETE /api/pages/{slug}
pub async fn delete_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    PageService::delete(&state.db().pool, &slug).await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/pages",
        Router::new()
            .route("/", get(get_pages).post(create_page))
            .route("/{slug}", get(get_page).put(update_page).delete(delete_page)),
    )
}
