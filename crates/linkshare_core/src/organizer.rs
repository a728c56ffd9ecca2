//! crates/linkshare_core/src/organizer.rs
//!
//! State container for the collection organizer screen: videos partitioned into
//! folders, the "All"/"Favorites" pseudo-folders, the calendar day filter and
//! the pending folder move.

use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::{Folder, FolderIcon, FolderId, LinkId, Selection, VideoItem, ViewMode, FOLDER_PALETTE};
use crate::filter::{self, Criteria};
use crate::ids;
use crate::ports::{Clock, Haptic, HapticFeedback, RandomSource};

/// The external collaborators the organizer screen talks to.
#[derive(Clone)]
pub struct OrganizerPorts {
    pub random: Arc<dyn RandomSource>,
    pub clock: Arc<dyn Clock>,
    pub haptics: Arc<dyn HapticFeedback>,
}

pub struct OrganizerController {
    videos: Vec<VideoItem>,
    folders: Vec<Folder>,
    selection: Selection,
    selected_date: NaiveDate,
    show_calendar: bool,
    search_query: String,
    moving_video: Option<LinkId>,
    view_mode: ViewMode,
    ports: OrganizerPorts,
}

impl OrganizerController {
    pub fn new(ports: OrganizerPorts) -> Self {
        let today = ports.clock.now().with_timezone(&Local).date_naive();
        Self {
            videos: Vec::new(),
            folders: Vec::new(),
            selection: Selection::All,
            selected_date: today,
            show_calendar: false,
            search_query: String::new(),
            moving_video: None,
            view_mode: ViewMode::Grid,
            ports,
        }
    }

    pub fn seed(&mut self, folders: Vec<Folder>, videos: Vec<VideoItem>) {
        info!("Seeding organizer with {} folders and {} videos", folders.len(), videos.len());
        self.folders = folders;
        self.videos = videos;
    }

    // --- Read access ---

    pub fn videos(&self) -> &[VideoItem] {
        &self.videos
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn show_calendar(&self) -> bool {
        self.show_calendar
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn moving_video(&self) -> Option<&VideoItem> {
        let id = self.moving_video.as_deref()?;
        self.find(id)
    }

    pub fn find(&self, id: &str) -> Option<&VideoItem> {
        self.videos.iter().find(|v| v.id == id)
    }

    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    /// The folder a video is filed under. Dangling references read as unfiled.
    pub fn folder_of(&self, video: &VideoItem) -> Option<&Folder> {
        self.folder(video.folder_id()?)
    }

    pub fn folder_video_count(&self, folder_id: &str) -> usize {
        self.videos.iter().filter(|v| v.folder_id() == Some(folder_id)).count()
    }

    pub fn favorites_count(&self) -> usize {
        self.videos.iter().filter(|v| v.is_favorite()).count()
    }

    /// Heading for the current selection.
    pub fn selection_title(&self) -> &str {
        match &self.selection {
            Selection::All => "All Videos",
            Selection::Favorites => "Favorites",
            Selection::Folder(id) => self.folder(id).map_or("Videos", |f| f.name.as_str()),
        }
    }

    pub fn criteria(&self) -> Criteria {
        Criteria::default()
            .with_query(self.search_query.clone())
            .with_selection(self.selection.clone())
            .with_day(self.show_calendar.then_some(self.selected_date))
    }

    /// The videos to display under the current folder, day and search filters.
    pub fn visible_videos(&self) -> Vec<&VideoItem> {
        filter::filter(&self.videos, &self.criteria())
    }

    // --- Folders ---

    /// Appends a folder with a random colour and icon. Blank names are ignored.
    pub fn create_folder(&mut self, name: &str) -> Option<&Folder> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let id = ids::timestamp_id("folder-", self.ports.clock.now(), |candidate| {
            self.folder(candidate).is_some()
        });
        let folder = Folder {
            id,
            name: name.to_string(),
            color: FOLDER_PALETTE[self.ports.random.pick(FOLDER_PALETTE.len())],
            icon: FolderIcon::ALL[self.ports.random.pick(FolderIcon::ALL.len())],
        };
        info!("Created folder {} ({})", folder.name, folder.id);

        self.folders.push(folder);
        self.ports.haptics.emit(Haptic::Success);
        self.folders.last()
    }

    /// Narrows the list to a folder or pseudo-folder. Never touches the videos.
    pub fn select_folder(&mut self, selection: Selection) {
        debug!("Selected {}", selection.key());
        self.selection = selection;
        self.ports.haptics.emit(Haptic::LightImpact);
    }

    // --- Videos ---

    /// Flips the favorite flag and returns the new value; `None` for unknown ids.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        let video = self.videos.iter_mut().find(|v| v.id == id)?;
        video.meta.is_favorite = !video.meta.is_favorite;
        let now_favorite = video.meta.is_favorite;
        self.ports.haptics.emit(Haptic::LightImpact);
        Some(now_favorite)
    }

    /// Opens the folder picker for a video. Unknown ids are ignored.
    pub fn begin_move(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.moving_video = Some(id.to_string());
        true
    }

    pub fn cancel_move(&mut self) {
        self.moving_video = None;
    }

    /// Files the video under `folder_id`, or unfiles it for `None`. The pending
    /// move is cleared either way; unknown video ids change nothing else.
    pub fn move_to_folder(&mut self, video_id: &str, folder_id: Option<FolderId>) -> bool {
        self.moving_video = None;
        let Some(video) = self.videos.iter_mut().find(|v| v.id == video_id) else {
            return false;
        };
        info!("Moving video {} to {:?}", video_id, folder_id);
        video.meta.folder_id = folder_id;
        self.ports.haptics.emit(Haptic::Success);
        true
    }

    /// Completes the pending move started with `begin_move`.
    pub fn move_pending_to(&mut self, folder_id: Option<FolderId>) -> bool {
        match self.moving_video.clone() {
            Some(video_id) => self.move_to_folder(&video_id, folder_id),
            None => false,
        }
    }

    // --- View state ---

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn toggle_calendar(&mut self) -> bool {
        self.show_calendar = !self.show_calendar;
        self.ports.haptics.emit(Haptic::LightImpact);
        self.show_calendar
    }

    pub fn select_date(&mut self, day: NaiveDate) {
        self.selected_date = day;
        self.ports.haptics.emit(Haptic::LightImpact);
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.ports.haptics.emit(Haptic::LightImpact);
        self.view_mode
    }
}
