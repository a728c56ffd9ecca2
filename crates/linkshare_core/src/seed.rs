//! crates/linkshare_core/src/seed.rs
//!
//! The mock records both screens start with. Dates are relative to `now`.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{Category, Folder, FolderIcon, LinkRecord, Organized, Preview, VideoItem, FOLDER_PALETTE};

const SEED_FOLDER_NAMES: [&str; 5] = ["Favorites", "Tutorials", "Entertainment", "Inspiration", "Learning"];

struct SeedLink {
    id: &'static str,
    title: &'static str,
    url: &'static str,
    image: &'static str,
    platform: &'static str,
    domain: &'static str,
    category: &'static str,
    description: &'static str,
    tags: [&'static str; 4],
    days_ago: i64,
}

impl SeedLink {
    fn into_record<M>(self, now: DateTime<Utc>, meta: M) -> LinkRecord<M> {
        LinkRecord {
            id: self.id.to_string(),
            title: self.title.to_string(),
            url: self.url.to_string(),
            image: Some(self.image.to_string()),
            platform: self.platform.to_string(),
            domain: self.domain.to_string(),
            category: Category::parse(self.category),
            description: self.description.to_string(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            date: now - Duration::days(self.days_ago),
            meta,
        }
    }
}

const CARBONARA: SeedLink = SeedLink {
    id: "1",
    title: "Perfect Pasta Carbonara Recipe",
    url: "https://www.instagram.com/reel/CzXz8YdKjHl/",
    image: "https://images.unsplash.com/photo-1551782450-17144efb9c50?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
    platform: "Instagram",
    domain: "instagram.com",
    category: "cooking",
    description: "Learn how to make authentic Italian carbonara with this quick recipe",
    tags: ["pasta", "italian", "recipe", "easy"],
    days_ago: 0,
};

const REACT_NATIVE: SeedLink = SeedLink {
    id: "3",
    title: "React Native Tutorial - Complete Guide",
    url: "https://www.youtube.com/watch?v=tutorial123",
    image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
    platform: "YouTube",
    domain: "youtube.com",
    category: "tutorial",
    description: "Complete React Native tutorial for beginners",
    tags: ["react", "tutorial", "coding", "mobile"],
    days_ago: 5,
};

const TRAVEL: SeedLink = SeedLink {
    id: "4",
    title: "Amazing Travel Destinations",
    url: "https://www.instagram.com/reel/travel123/",
    image: "https://images.unsplash.com/photo-1488646953014-85cb44e25828?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
    platform: "Instagram",
    domain: "instagram.com",
    category: "travel",
    description: "Discover breathtaking travel destinations around the world",
    tags: ["travel", "destinations", "adventure", "nature"],
    days_ago: 1,
};

/// The four previews the ingestion screen opens with, newest first by id.
pub fn previews(now: DateTime<Utc>) -> Vec<Preview> {
    vec![
        CARBONARA.into_record(now, ()),
        SeedLink {
            id: "2",
            title: "Funny Cat Compilation 2024",
            url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            image: "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
            platform: "YouTube",
            domain: "youtube.com",
            category: "funny",
            description: "Hilarious cat moments that will make you laugh",
            tags: ["cats", "funny", "pets", "compilation"],
            days_ago: 2,
        }
        .into_record(now, ()),
        REACT_NATIVE.into_record(now, ()),
        TRAVEL.into_record(now, ()),
    ]
}

/// Five folders with cyclic colours and icons, ids `folder-0` to `folder-4`.
pub fn folders() -> Vec<Folder> {
    SEED_FOLDER_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| Folder {
            id: format!("folder-{index}"),
            name: name.to_string(),
            color: FOLDER_PALETTE[index % FOLDER_PALETTE.len()],
            icon: FolderIcon::ALL[index % FolderIcon::ALL.len()],
        })
        .collect()
}

fn organized(folder: &str, is_favorite: bool) -> Organized {
    Organized {
        folder_id: Some(folder.to_string()),
        is_favorite,
    }
}

/// The six videos the organizer opens with, spread over the past week.
pub fn videos(now: DateTime<Utc>) -> Vec<VideoItem> {
    vec![
        CARBONARA.into_record(now, organized("folder-0", true)),
        SeedLink {
            id: "2",
            days_ago: 2,
            ..REACT_NATIVE
        }
        .into_record(now, organized("folder-1", false)),
        SeedLink {
            id: "3",
            days_ago: 3,
            ..TRAVEL
        }
        .into_record(now, organized("folder-3", true)),
        SeedLink {
            id: "4",
            title: "Morning Yoga Routine",
            url: "https://www.youtube.com/watch?v=yoga123",
            image: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
            platform: "YouTube",
            domain: "youtube.com",
            category: "fitness",
            description: "Start your day with this energizing yoga routine",
            tags: ["yoga", "fitness", "morning", "routine"],
            days_ago: 4,
        }
        .into_record(now, organized("folder-4", false)),
        SeedLink {
            id: "5",
            title: "Minimalist Home Office Setup",
            url: "https://www.youtube.com/watch?v=office123",
            image: "https://images.unsplash.com/photo-1497366754035-f200968a6e72?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
            platform: "YouTube",
            domain: "youtube.com",
            category: "lifestyle",
            description: "Create a productive minimalist home office",
            tags: ["office", "productivity", "minimalist", "setup"],
            days_ago: 5,
        }
        .into_record(now, organized("folder-2", false)),
        SeedLink {
            id: "6",
            title: "Advanced JavaScript Concepts",
            url: "https://www.youtube.com/watch?v=js123",
            image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
            platform: "YouTube",
            domain: "youtube.com",
            category: "coding",
            description: "Master advanced JavaScript concepts with practical examples",
            tags: ["javascript", "coding", "web", "development"],
            days_ago: 6,
        }
        .into_record(now, organized("folder-1", true)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeded_ids_are_unique() {
        let now = Utc::now();
        let preview_ids: HashSet<_> = previews(now).into_iter().map(|p| p.id).collect();
        assert_eq!(preview_ids.len(), 4);
        let video_ids: HashSet<_> = videos(now).into_iter().map(|v| v.id).collect();
        assert_eq!(video_ids.len(), 6);
    }

    #[test]
    fn seeded_folders_cycle_palette_and_icons() {
        let folders = folders();
        assert_eq!(folders.len(), 5);
        assert_eq!(folders[3].id, "folder-3");
        assert_eq!(folders[3].color, FOLDER_PALETTE[3]);
        assert_eq!(folders[4].icon, FolderIcon::Learning);
    }

    #[test]
    fn unrecognized_seed_categories_become_other() {
        let videos = videos(Utc::now());
        assert_eq!(videos[3].category, Category::Other);
        assert_eq!(videos[5].category, Category::Other);
    }
}
