//! services/api/src/web/previews.rs
//!
//! Axum handlers for the link ingestion screen: the URL input, preview
//! generation, removal, sharing, filters and the device inputs feeding it.

use crate::web::protocol::{
    AddPreviewRequest, CategoryView, ClipboardRequest, DeepLinkRequest, PreviewFiltersRequest,
    PreviewListResponse, PreviewView, UrlInputRequest, UrlInputResponse,
};
use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use linkshare_core::{Category, IngestError};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Maps an ingestion failure to the status the client shows it with.
fn ingest_error(e: IngestError) -> (StatusCode, String) {
    let status = match &e {
        IngestError::EmptyUrl | IngestError::InvalidUrl => StatusCode::BAD_REQUEST,
        IngestError::Busy => StatusCode::CONFLICT,
        IngestError::GenerationFailed(_) => {
            error!("Preview generation failed: {}", e);
            StatusCode::BAD_GATEWAY
        }
        IngestError::ClipboardUnavailable(_) => {
            warn!("Clipboard read failed: {}", e);
            StatusCode::BAD_GATEWAY
        }
    };
    (status, e.to_string())
}

/// List the previews visible under the current search and category.
#[utoipa::path(
    get,
    path = "/previews",
    responses((status = 200, description = "Visible previews and input state", body = PreviewListResponse))
)]
pub async fn list_previews_handler(State(app_state): State<Arc<AppState>>) -> Json<PreviewListResponse> {
    let ingestion = app_state.ingestion.lock().await;
    Json(PreviewListResponse::from(&*ingestion))
}

/// Generate a preview from the URL input and prepend it to the list.
///
/// The state lock is released while the generator runs; a second submit
/// during that window is rejected with 409. Generation runs on its own task,
/// so an abandoned request still completes and clears the in-flight flag.
#[utoipa::path(
    post,
    path = "/previews",
    request_body = AddPreviewRequest,
    responses(
        (status = 201, description = "Preview created", body = PreviewView),
        (status = 400, description = "Empty or malformed URL"),
        (status = 409, description = "A preview is already being generated"),
        (status = 500, description = "The generation task was aborted"),
        (status = 502, description = "Preview generation failed")
    )
)]
pub async fn add_preview_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<AddPreviewRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    // --- 1. Validate and mark in flight ---
    let (pending, generator) = {
        let mut ingestion = app_state.ingestion.lock().await;
        if let Some(url) = payload.url {
            ingestion.set_url_input(url).map_err(ingest_error)?;
        }
        let pending = ingestion.begin_generation().map_err(ingest_error)?;
        (pending, ingestion.generator())
    };

    // --- 2. Generate without holding the lock, then record the outcome ---
    let state = app_state.clone();
    let task = tokio::spawn(async move {
        let outcome = generator.generate(&pending.url).await;
        state
            .ingestion
            .lock()
            .await
            .finish_generation(pending, outcome)
            .map(PreviewView::from)
    });

    // --- 3. Report ---
    let preview = task
        .await
        .map_err(|e| {
            error!("Preview generation task aborted: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Preview generation was aborted".to_string())
        })?
        .map_err(ingest_error)?;
    Ok((StatusCode::CREATED, Json(preview)))
}

/// Delete a preview. Unknown ids are ignored.
#[utoipa::path(
    delete,
    path = "/previews/{id}",
    params(("id" = String, Path, description = "Preview id")),
    responses((status = 204, description = "Preview removed, or it did not exist"))
)]
pub async fn remove_preview_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> StatusCode {
    app_state.ingestion.lock().await.remove_preview(&id);
    StatusCode::NO_CONTENT
}

/// Hand a preview's URL to the share sheet. Unknown ids are ignored.
#[utoipa::path(
    post,
    path = "/previews/{id}/share",
    params(("id" = String, Path, description = "Preview id")),
    responses(
        (status = 204, description = "Share dispatched, or the preview did not exist"),
        (status = 502, description = "The share sheet rejected the request")
    )
)]
pub async fn share_preview_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let ingestion = app_state.ingestion.lock().await;
    ingestion.share_preview(&id).await.map_err(|e| {
        error!("Failed to share preview {}: {:?}", id, e);
        (StatusCode::BAD_GATEWAY, e.to_string())
    })?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replace the URL input text. Locked while a preview is being generated.
#[utoipa::path(
    put,
    path = "/previews/input",
    request_body = UrlInputRequest,
    responses(
        (status = 200, description = "Input updated", body = UrlInputResponse),
        (status = 409, description = "A preview is being generated")
    )
)]
pub async fn set_url_input_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<UrlInputRequest>,
) -> Result<Json<UrlInputResponse>, (StatusCode, String)> {
    let mut ingestion = app_state.ingestion.lock().await;
    ingestion.set_url_input(payload.url).map_err(ingest_error)?;
    Ok(Json(UrlInputResponse {
        url_input: ingestion.url_input().to_string(),
        changed: true,
    }))
}

/// Copy the clipboard text into the URL input when it is not empty.
#[utoipa::path(
    post,
    path = "/previews/input/paste",
    responses(
        (status = 200, description = "Input after pasting", body = UrlInputResponse),
        (status = 409, description = "A preview is being generated"),
        (status = 502, description = "The clipboard could not be read")
    )
)]
pub async fn paste_url_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<UrlInputResponse>, (StatusCode, String)> {
    let mut ingestion = app_state.ingestion.lock().await;
    let changed = ingestion.paste_from_clipboard().await.map_err(ingest_error)?;
    Ok(Json(UrlInputResponse {
        url_input: ingestion.url_input().to_string(),
        changed,
    }))
}

/// Replace the search query and category filter.
#[utoipa::path(
    put,
    path = "/previews/filters",
    request_body = PreviewFiltersRequest,
    responses((status = 200, description = "Filtered previews", body = PreviewListResponse))
)]
pub async fn set_preview_filters_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<PreviewFiltersRequest>,
) -> Json<PreviewListResponse> {
    let mut ingestion = app_state.ingestion.lock().await;
    ingestion.select_category(payload.category());
    ingestion.set_search_query(payload.query);
    Json(PreviewListResponse::from(&*ingestion))
}

/// Clear both the search query and the category filter.
#[utoipa::path(
    delete,
    path = "/previews/filters",
    responses((status = 200, description = "Unfiltered previews", body = PreviewListResponse))
)]
pub async fn clear_preview_filters_handler(State(app_state): State<Arc<AppState>>) -> Json<PreviewListResponse> {
    let mut ingestion = app_state.ingestion.lock().await;
    ingestion.clear_search();
    Json(PreviewListResponse::from(&*ingestion))
}

/// Tap a category chip: selects it, or clears it when already active.
#[utoipa::path(
    post,
    path = "/previews/categories/{category}/toggle",
    params(("category" = String, Path, description = "Category key; unknown keys mean `other`")),
    responses((status = 200, description = "Filtered previews", body = PreviewListResponse))
)]
pub async fn toggle_category_handler(
    State(app_state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Json<PreviewListResponse> {
    let mut ingestion = app_state.ingestion.lock().await;
    ingestion.toggle_category(Category::parse(&category));
    Json(PreviewListResponse::from(&*ingestion))
}

/// List every category with its icon and colour.
#[utoipa::path(
    get,
    path = "/categories",
    responses((status = 200, description = "All categories in chip order", body = [CategoryView]))
)]
pub async fn list_categories_handler() -> Json<Vec<CategoryView>> {
    Json(Category::ALL.into_iter().map(CategoryView::from).collect())
}

/// Write the text the shell's clipboard will return.
#[utoipa::path(
    put,
    path = "/clipboard",
    request_body = ClipboardRequest,
    responses((status = 204, description = "Clipboard updated"))
)]
pub async fn set_clipboard_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<ClipboardRequest>,
) -> StatusCode {
    app_state.clipboard.set_text(payload.text).await;
    StatusCode::NO_CONTENT
}

/// Deliver an incoming deep link.
#[utoipa::path(
    post,
    path = "/deep-links",
    request_body = DeepLinkRequest,
    responses((status = 204, description = "Deep link recorded"))
)]
pub async fn deep_link_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<DeepLinkRequest>,
) -> StatusCode {
    info!("Deep link received");
    app_state.ingestion.lock().await.receive_deep_link(payload.url);
    StatusCode::NO_CONTENT
}
