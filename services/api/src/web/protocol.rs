//! services/api/src/web/protocol.rs
//!
//! Defines the JSON payloads exchanged between the rendering client and the
//! shell. Domain records are mapped into flat view structs here so the core
//! stays free of any serialization format.

use chrono::{DateTime, NaiveDate, Utc};
use linkshare_core::classifier::platform_badge;
use linkshare_core::domain::{Category, Folder, Preview, VideoItem, ViewMode};
use linkshare_core::{IngestionController, OrganizerController};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

//=========================================================================================
// Requests
//=========================================================================================

/// Submits the URL input. When `url` is present it replaces the input first.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct AddPreviewRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UrlInputRequest {
    pub url: String,
}

/// Replaces the ingestion filters. A missing or `"all"` category clears it.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct PreviewFiltersRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl PreviewFiltersRequest {
    pub fn category(&self) -> Option<Category> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") | Some("all") => None,
            Some(key) => Some(Category::parse(key)),
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct ClipboardRequest {
    pub text: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct DeepLinkRequest {
    pub url: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

/// `"all"`, `"favorites"` or a folder id.
#[derive(Deserialize, Debug, ToSchema)]
pub struct SelectionRequest {
    pub selection: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct DateRequest {
    pub date: NaiveDate,
}

/// `folder_id: null` unfiles the video.
#[derive(Deserialize, Debug, ToSchema)]
pub struct MoveRequest {
    #[serde(default)]
    pub folder_id: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateFolderRequest {
    pub name: String,
}

//=========================================================================================
// Responses: Ingestion
//=========================================================================================

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct CategoryView {
    pub key: String,
    pub icon: String,
    pub color: String,
}

impl From<Category> for CategoryView {
    fn from(category: Category) -> Self {
        Self {
            key: category.as_str().to_string(),
            icon: category.icon().to_string(),
            color: category.color().to_string(),
        }
    }
}

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct PreviewView {
    pub id: String,
    pub title: String,
    pub url: String,
    pub image: Option<String>,
    pub platform: String,
    pub platform_icon: String,
    pub platform_color: String,
    pub domain: String,
    pub category: CategoryView,
    pub description: String,
    pub tags: Vec<String>,
    pub date: DateTime<Utc>,
    pub display_date: String,
}

impl From<&Preview> for PreviewView {
    fn from(preview: &Preview) -> Self {
        let badge = platform_badge(&preview.domain);
        Self {
            id: preview.id.clone(),
            title: preview.title.clone(),
            url: preview.url.clone(),
            image: preview.image.clone(),
            platform: preview.platform.clone(),
            platform_icon: badge.icon.to_string(),
            platform_color: badge.color.to_string(),
            domain: preview.domain.clone(),
            category: preview.category.into(),
            description: preview.description.clone(),
            tags: preview.tags.clone(),
            date: preview.date,
            display_date: preview.display_day(),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct PreviewListResponse {
    pub previews: Vec<PreviewView>,
    /// Size of the whole collection, before filtering.
    pub total: usize,
    pub query: String,
    pub category: Option<String>,
    pub url_input: String,
    pub is_generating: bool,
    pub last_deep_link: Option<String>,
}

impl From<&IngestionController> for PreviewListResponse {
    fn from(ingestion: &IngestionController) -> Self {
        Self {
            previews: ingestion.visible_previews().into_iter().map(PreviewView::from).collect(),
            total: ingestion.previews().len(),
            query: ingestion.search_query().to_string(),
            category: ingestion.selected_category().map(|c| c.as_str().to_string()),
            url_input: ingestion.url_input().to_string(),
            is_generating: ingestion.is_generating(),
            last_deep_link: ingestion.last_deep_link().map(str::to_string),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct UrlInputResponse {
    pub url_input: String,
    pub changed: bool,
}

//=========================================================================================
// Responses: Organizer
//=========================================================================================

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct VideoView {
    pub id: String,
    pub title: String,
    pub url: String,
    pub image: Option<String>,
    pub platform: String,
    pub platform_icon: String,
    pub platform_color: String,
    pub domain: String,
    pub category: CategoryView,
    pub description: String,
    pub tags: Vec<String>,
    pub date: DateTime<Utc>,
    pub display_date: String,
    pub folder_id: Option<String>,
    /// `None` when unfiled or when the folder no longer exists.
    pub folder_name: Option<String>,
    pub folder_color: Option<String>,
    pub is_favorite: bool,
}

impl VideoView {
    pub fn new(video: &VideoItem, organizer: &OrganizerController) -> Self {
        let badge = platform_badge(&video.domain);
        let folder = organizer.folder_of(video);
        Self {
            id: video.id.clone(),
            title: video.title.clone(),
            url: video.url.clone(),
            image: video.image.clone(),
            platform: video.platform.clone(),
            platform_icon: badge.icon.to_string(),
            platform_color: badge.color.to_string(),
            domain: video.domain.clone(),
            category: video.category.into(),
            description: video.description.clone(),
            tags: video.tags.clone(),
            date: video.date,
            display_date: video.display_timestamp(),
            folder_id: video.folder_id().map(str::to_string),
            folder_name: folder.map(|f| f.name.clone()),
            folder_color: folder.map(|f| f.color.to_string()),
            is_favorite: video.is_favorite(),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct VideoListResponse {
    pub videos: Vec<VideoView>,
    pub total: usize,
    pub title: String,
    pub selection: String,
    pub query: String,
    pub show_calendar: bool,
    pub selected_date: NaiveDate,
    pub view_mode: String,
    pub moving_video_id: Option<String>,
}

impl From<&OrganizerController> for VideoListResponse {
    fn from(organizer: &OrganizerController) -> Self {
        Self {
            videos: organizer
                .visible_videos()
                .into_iter()
                .map(|v| VideoView::new(v, organizer))
                .collect(),
            total: organizer.videos().len(),
            title: organizer.selection_title().to_string(),
            selection: organizer.selection().key().to_string(),
            query: organizer.search_query().to_string(),
            show_calendar: organizer.show_calendar(),
            selected_date: organizer.selected_date(),
            view_mode: match organizer.view_mode() {
                ViewMode::Grid => "grid".to_string(),
                ViewMode::List => "list".to_string(),
            },
            moving_video_id: organizer.moving_video().map(|v| v.id.clone()),
        }
    }
}

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct FolderView {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub icon_glyph: String,
    pub icon_color: String,
    pub video_count: usize,
}

impl FolderView {
    pub fn new(folder: &Folder, organizer: &OrganizerController) -> Self {
        let (glyph, tint) = folder.icon.glyph();
        Self {
            id: folder.id.clone(),
            name: folder.name.clone(),
            color: folder.color.to_string(),
            icon: folder.icon.key().to_string(),
            icon_glyph: glyph.to_string(),
            icon_color: tint.to_string(),
            video_count: organizer.folder_video_count(&folder.id),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct FolderListResponse {
    pub folders: Vec<FolderView>,
    pub all_count: usize,
    pub favorites_count: usize,
}

impl From<&OrganizerController> for FolderListResponse {
    fn from(organizer: &OrganizerController) -> Self {
        Self {
            folders: organizer
                .folders()
                .iter()
                .map(|f| FolderView::new(f, organizer))
                .collect(),
            all_count: organizer.videos().len(),
            favorites_count: organizer.favorites_count(),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct FavoriteResponse {
    pub id: String,
    pub is_favorite: bool,
}
