//! crates/linkshare_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any transport or serialization format.

use chrono::{DateTime, Local, Utc};

pub type LinkId = String;
pub type FolderId = String;

//=========================================================================================
// Categories
//=========================================================================================

/// The closed set of content categories a link can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cooking,
    Funny,
    Tutorial,
    Music,
    Travel,
    Sports,
    Gaming,
    Lifestyle,
    Tech,
    Other,
}

impl Category {
    /// Every category, in chip display order.
    pub const ALL: [Category; 10] = [
        Category::Cooking,
        Category::Funny,
        Category::Tutorial,
        Category::Music,
        Category::Travel,
        Category::Sports,
        Category::Gaming,
        Category::Lifestyle,
        Category::Tech,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cooking => "cooking",
            Category::Funny => "funny",
            Category::Tutorial => "tutorial",
            Category::Music => "music",
            Category::Travel => "travel",
            Category::Sports => "sports",
            Category::Gaming => "gaming",
            Category::Lifestyle => "lifestyle",
            Category::Tech => "tech",
            Category::Other => "other",
        }
    }

    /// Parses a category key. Unrecognized keys fall back to `Other`.
    pub fn parse(key: &str) -> Category {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(key.trim()))
            .unwrap_or(Category::Other)
    }

    /// Icon key used by the rendering layer for this category.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Cooking => "restaurant",
            Category::Funny => "happy",
            Category::Tutorial => "school",
            Category::Music => "musical-notes",
            Category::Travel => "airplane",
            Category::Sports => "fitness",
            Category::Gaming => "game-controller",
            Category::Lifestyle => "leaf",
            Category::Tech => "hardware-chip",
            Category::Other => "film",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::Cooking => "#FF6B35",
            Category::Funny => "#FFD23F",
            Category::Tutorial => "#4ECDC4",
            Category::Music => "#FF006E",
            Category::Travel => "#8338EC",
            Category::Sports => "#FB5607",
            Category::Gaming => "#3A86FF",
            Category::Lifestyle => "#06FFA5",
            Category::Tech => "#FFBE0B",
            Category::Other => "#8B5CF6",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//=========================================================================================
// Link Records
//=========================================================================================

/// A single shared video link and its synthesized metadata.
///
/// `M` carries the fields only one of the two screens uses: `()` for the
/// ingestion list, [`Organized`] for the collection organizer.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRecord<M = ()> {
    pub id: LinkId,
    pub title: String,
    pub url: String,
    pub image: Option<String>,
    pub platform: String,
    pub domain: String,
    pub category: Category,
    pub description: String,
    pub tags: Vec<String>,
    pub date: DateTime<Utc>,
    pub meta: M,
}

/// Folder membership and favorite flag of an organizer record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organized {
    pub folder_id: Option<FolderId>,
    pub is_favorite: bool,
}

/// A record in the ingestion list.
pub type Preview = LinkRecord<()>;

/// A record in the collection organizer.
pub type VideoItem = LinkRecord<Organized>;

impl<M> LinkRecord<M> {
    /// Month, day and year in local time, e.g. `Mar 4, 2025`.
    pub fn display_day(&self) -> String {
        self.date.with_timezone(&Local).format("%b %-d, %Y").to_string()
    }

    /// Month, day and clock time in local time, e.g. `Mar 4, 9:05 am`.
    pub fn display_timestamp(&self) -> String {
        self.date.with_timezone(&Local).format("%b %-d, %-I:%M %P").to_string()
    }
}

impl VideoItem {
    pub fn folder_id(&self) -> Option<&str> {
        self.meta.folder_id.as_deref()
    }

    pub fn is_favorite(&self) -> bool {
        self.meta.is_favorite
    }
}

/// Everything a preview generator produces for a URL. The controller adds
/// the id, the date and the URL itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewDraft {
    pub title: String,
    pub image: Option<String>,
    pub platform: String,
    pub domain: String,
    pub category: Category,
    pub description: String,
    pub tags: Vec<String>,
}

impl PreviewDraft {
    pub fn into_record<M>(self, id: LinkId, url: String, date: DateTime<Utc>, meta: M) -> LinkRecord<M> {
        LinkRecord {
            id,
            title: self.title,
            url,
            image: self.image,
            platform: self.platform,
            domain: self.domain,
            category: self.category,
            description: self.description,
            tags: self.tags,
            date,
            meta,
        }
    }
}

//=========================================================================================
// Folders
//=========================================================================================

/// Swatches a folder colour is drawn from.
pub const FOLDER_PALETTE: [&str; 5] = ["#FF6B35", "#4ECDC4", "#FFD23F", "#8338EC", "#3A86FF"];

/// Icon keys a folder can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FolderIcon {
    Favorites,
    Tutorials,
    Entertainment,
    Inspiration,
    Learning,
}

impl FolderIcon {
    pub const ALL: [FolderIcon; 5] = [
        FolderIcon::Favorites,
        FolderIcon::Tutorials,
        FolderIcon::Entertainment,
        FolderIcon::Inspiration,
        FolderIcon::Learning,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FolderIcon::Favorites => "favorites",
            FolderIcon::Tutorials => "tutorials",
            FolderIcon::Entertainment => "entertainment",
            FolderIcon::Inspiration => "inspiration",
            FolderIcon::Learning => "learning",
        }
    }

    /// The glyph and tint the rendering layer draws for this icon.
    pub fn glyph(self) -> (&'static str, &'static str) {
        match self {
            FolderIcon::Favorites => ("heart", "#FF453A"),
            FolderIcon::Tutorials => ("school", "#4ECDC4"),
            FolderIcon::Entertainment => ("film", "#FFD23F"),
            FolderIcon::Inspiration => ("sparkles", "#FFBE0B"),
            FolderIcon::Learning => ("book", "#3A86FF"),
        }
    }
}

/// A user-defined bucket for organizing videos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub color: &'static str,
    pub icon: FolderIcon,
}

//=========================================================================================
// Organizer View State
//=========================================================================================

/// What the organizer's folder strip currently narrows the list to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Favorites,
    Folder(FolderId),
}

impl Selection {
    pub const FAVORITES_KEY: &'static str = "favorites";
    pub const ALL_KEY: &'static str = "all";

    /// Parses a selector: `"favorites"` and `"all"` (or empty) are the
    /// pseudo-folders, anything else is taken as a folder id.
    ///
    /// Folder ids always carry the `folder-` prefix, so they never collide
    /// with the two pseudo-folder keys.
    pub fn parse(key: &str) -> Selection {
        match key.trim() {
            "" | Self::ALL_KEY => Selection::All,
            Self::FAVORITES_KEY => Selection::Favorites,
            id => Selection::Folder(id.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Selection::All => Self::ALL_KEY,
            Selection::Favorites => Self::FAVORITES_KEY,
            Selection::Folder(id) => id,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> ViewMode {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}
