//! services/api/src/web/rest.rs
//!
//! Assembles the REST router and holds the master definition for the
//! OpenAPI specification.

use crate::web::{collection, previews, protocol, state::AppState};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        previews::list_previews_handler,
        previews::add_preview_handler,
        previews::remove_preview_handler,
        previews::share_preview_handler,
        previews::set_url_input_handler,
        previews::paste_url_handler,
        previews::set_preview_filters_handler,
        previews::clear_preview_filters_handler,
        previews::toggle_category_handler,
        previews::list_categories_handler,
        previews::set_clipboard_handler,
        previews::deep_link_handler,
        collection::list_videos_handler,
        collection::search_videos_handler,
        collection::select_folder_handler,
        collection::toggle_calendar_handler,
        collection::select_date_handler,
        collection::toggle_view_mode_handler,
        collection::toggle_favorite_handler,
        collection::begin_move_handler,
        collection::cancel_move_handler,
        collection::complete_move_handler,
        collection::move_video_handler,
        collection::list_folders_handler,
        collection::create_folder_handler,
    ),
    components(
        schemas(
            protocol::AddPreviewRequest,
            protocol::UrlInputRequest,
            protocol::PreviewFiltersRequest,
            protocol::ClipboardRequest,
            protocol::DeepLinkRequest,
            protocol::SearchRequest,
            protocol::SelectionRequest,
            protocol::DateRequest,
            protocol::MoveRequest,
            protocol::CreateFolderRequest,
            protocol::CategoryView,
            protocol::PreviewView,
            protocol::PreviewListResponse,
            protocol::UrlInputResponse,
            protocol::VideoView,
            protocol::VideoListResponse,
            protocol::FolderView,
            protocol::FolderListResponse,
            protocol::FavoriteResponse,
        )
    ),
    tags(
        (name = "LinkShare API", description = "Local shell over the link ingestion and collection organizer screens.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Router
//=========================================================================================

/// Builds the API router over a shared state.
pub fn router(app_state: Arc<AppState>) -> Router {
    let ingestion_routes = Router::new()
        .route(
            "/previews",
            get(previews::list_previews_handler).post(previews::add_preview_handler),
        )
        .route("/previews/{id}", delete(previews::remove_preview_handler))
        .route("/previews/{id}/share", post(previews::share_preview_handler))
        .route("/previews/input", put(previews::set_url_input_handler))
        .route("/previews/input/paste", post(previews::paste_url_handler))
        .route(
            "/previews/filters",
            put(previews::set_preview_filters_handler).delete(previews::clear_preview_filters_handler),
        )
        .route(
            "/previews/categories/{category}/toggle",
            post(previews::toggle_category_handler),
        )
        .route("/categories", get(previews::list_categories_handler))
        .route("/clipboard", put(previews::set_clipboard_handler))
        .route("/deep-links", post(previews::deep_link_handler));

    let organizer_routes = Router::new()
        .route("/videos", get(collection::list_videos_handler))
        .route("/videos/search", put(collection::search_videos_handler))
        .route("/videos/selection", put(collection::select_folder_handler))
        .route("/videos/calendar/toggle", post(collection::toggle_calendar_handler))
        .route("/videos/calendar/date", put(collection::select_date_handler))
        .route("/videos/view-mode/toggle", post(collection::toggle_view_mode_handler))
        .route("/videos/{id}/favorite", post(collection::toggle_favorite_handler))
        .route("/videos/{id}/move", post(collection::move_video_handler))
        .route("/videos/{id}/move-request", post(collection::begin_move_handler))
        .route("/videos/move-request", delete(collection::cancel_move_handler))
        .route("/videos/move-request/complete", post(collection::complete_move_handler))
        .route(
            "/folders",
            get(collection::list_folders_handler).post(collection::create_folder_handler),
        );

    Router::new()
        .merge(ingestion_routes)
        .merge(organizer_routes)
        .with_state(app_state)
}
