//! services/api/src/web/collection.rs
//!
//! Axum handlers for the collection organizer screen: folders, favorites,
//! folder moves and the search, calendar and view-mode state.

use crate::web::protocol::{
    CreateFolderRequest, DateRequest, FavoriteResponse, FolderListResponse, FolderView, MoveRequest,
    SearchRequest, SelectionRequest, VideoListResponse,
};
use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use linkshare_core::Selection;
use std::sync::Arc;

/// List the videos visible under the current folder, calendar and search state.
#[utoipa::path(
    get,
    path = "/videos",
    responses((status = 200, description = "Visible videos and view state", body = VideoListResponse))
)]
pub async fn list_videos_handler(State(app_state): State<Arc<AppState>>) -> Json<VideoListResponse> {
    let organizer = app_state.organizer.lock().await;
    Json(VideoListResponse::from(&*organizer))
}

/// Replace the search query.
#[utoipa::path(
    put,
    path = "/videos/search",
    request_body = SearchRequest,
    responses((status = 200, description = "Filtered videos", body = VideoListResponse))
)]
pub async fn search_videos_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<SearchRequest>,
) -> Json<VideoListResponse> {
    let mut organizer = app_state.organizer.lock().await;
    organizer.set_search_query(payload.query);
    Json(VideoListResponse::from(&*organizer))
}

/// Narrow the list to "all", "favorites" or one folder.
#[utoipa::path(
    put,
    path = "/videos/selection",
    request_body = SelectionRequest,
    responses((status = 200, description = "Filtered videos", body = VideoListResponse))
)]
pub async fn select_folder_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<SelectionRequest>,
) -> Json<VideoListResponse> {
    let mut organizer = app_state.organizer.lock().await;
    organizer.select_folder(Selection::parse(&payload.selection));
    Json(VideoListResponse::from(&*organizer))
}

/// Show or hide the calendar; the day filter only applies while it is shown.
#[utoipa::path(
    post,
    path = "/videos/calendar/toggle",
    responses((status = 200, description = "Filtered videos", body = VideoListResponse))
)]
pub async fn toggle_calendar_handler(State(app_state): State<Arc<AppState>>) -> Json<VideoListResponse> {
    let mut organizer = app_state.organizer.lock().await;
    organizer.toggle_calendar();
    Json(VideoListResponse::from(&*organizer))
}

/// Pick the calendar day.
#[utoipa::path(
    put,
    path = "/videos/calendar/date",
    request_body = DateRequest,
    responses((status = 200, description = "Filtered videos", body = VideoListResponse))
)]
pub async fn select_date_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<DateRequest>,
) -> Json<VideoListResponse> {
    let mut organizer = app_state.organizer.lock().await;
    organizer.select_date(payload.date);
    Json(VideoListResponse::from(&*organizer))
}

/// Switch between grid and list layout.
#[utoipa::path(
    post,
    path = "/videos/view-mode/toggle",
    responses((status = 200, description = "Videos with the new view mode", body = VideoListResponse))
)]
pub async fn toggle_view_mode_handler(State(app_state): State<Arc<AppState>>) -> Json<VideoListResponse> {
    let mut organizer = app_state.organizer.lock().await;
    organizer.toggle_view_mode();
    Json(VideoListResponse::from(&*organizer))
}

/// Flip a video's favorite flag.
#[utoipa::path(
    post,
    path = "/videos/{id}/favorite",
    params(("id" = String, Path, description = "Video id")),
    responses(
        (status = 200, description = "New favorite flag", body = FavoriteResponse),
        (status = 204, description = "No such video; nothing changed")
    )
)]
pub async fn toggle_favorite_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let mut organizer = app_state.organizer.lock().await;
    match organizer.toggle_favorite(&id) {
        Some(is_favorite) => Json(FavoriteResponse { id, is_favorite }).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Open the folder picker for a video.
#[utoipa::path(
    post,
    path = "/videos/{id}/move-request",
    params(("id" = String, Path, description = "Video id")),
    responses((status = 204, description = "Pending move recorded, or the video did not exist"))
)]
pub async fn begin_move_handler(State(app_state): State<Arc<AppState>>, Path(id): Path<String>) -> StatusCode {
    app_state.organizer.lock().await.begin_move(&id);
    StatusCode::NO_CONTENT
}

/// Close the folder picker without moving anything.
#[utoipa::path(
    delete,
    path = "/videos/move-request",
    responses((status = 204, description = "Pending move cleared"))
)]
pub async fn cancel_move_handler(State(app_state): State<Arc<AppState>>) -> StatusCode {
    app_state.organizer.lock().await.cancel_move();
    StatusCode::NO_CONTENT
}

/// Complete the pending move opened with a move request.
#[utoipa::path(
    post,
    path = "/videos/move-request/complete",
    request_body = MoveRequest,
    responses((status = 204, description = "Pending video moved, or no move was pending"))
)]
pub async fn complete_move_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<MoveRequest>,
) -> StatusCode {
    app_state.organizer.lock().await.move_pending_to(payload.folder_id);
    StatusCode::NO_CONTENT
}

/// File a video under a folder, or unfile it with `folder_id: null`.
#[utoipa::path(
    post,
    path = "/videos/{id}/move",
    params(("id" = String, Path, description = "Video id")),
    request_body = MoveRequest,
    responses((status = 204, description = "Video moved, or it did not exist"))
)]
pub async fn move_video_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<MoveRequest>,
) -> StatusCode {
    app_state.organizer.lock().await.move_to_folder(&id, payload.folder_id);
    StatusCode::NO_CONTENT
}

/// List folders with their video counts.
#[utoipa::path(
    get,
    path = "/folders",
    responses((status = 200, description = "Folders in creation order", body = FolderListResponse))
)]
pub async fn list_folders_handler(State(app_state): State<Arc<AppState>>) -> Json<FolderListResponse> {
    let organizer = app_state.organizer.lock().await;
    Json(FolderListResponse::from(&*organizer))
}

/// Create a folder. Blank names create nothing.
#[utoipa::path(
    post,
    path = "/folders",
    request_body = CreateFolderRequest,
    responses(
        (status = 201, description = "Folder created", body = FolderView),
        (status = 204, description = "Blank name; nothing created")
    )
)]
pub async fn create_folder_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<CreateFolderRequest>,
) -> Response {
    let mut organizer = app_state.organizer.lock().await;
    let Some(folder) = organizer.create_folder(&payload.name).cloned() else {
        return StatusCode::NO_CONTENT.into_response();
    };
    (StatusCode::CREATED, Json(FolderView::new(&folder, &organizer))).into_response()
}
