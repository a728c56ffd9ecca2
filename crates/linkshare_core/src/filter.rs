//! crates/linkshare_core/src/filter.rs
//!
//! The filter engine: independent, optional predicates combined with AND and
//! applied in a single stable pass over a collection.

use chrono::{Local, NaiveDate};

use crate::domain::{Category, LinkRecord, Organized, Selection};

/// Screen-specific fields a predicate may look at.
pub trait RecordKind {
    /// Whether the text query also matches against the platform name.
    const SEARCHES_PLATFORM: bool;

    fn folder_id(&self) -> Option<&str> {
        None
    }

    fn is_favorite(&self) -> bool {
        false
    }
}

impl RecordKind for () {
    const SEARCHES_PLATFORM: bool = true;
}

impl RecordKind for Organized {
    const SEARCHES_PLATFORM: bool = false;

    fn folder_id(&self) -> Option<&str> {
        self.folder_id.as_deref()
    }

    fn is_favorite(&self) -> bool {
        self.is_favorite
    }
}

/// The active filter criteria. The default keeps everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Free text; ignored when blank after trimming.
    pub query: String,
    pub category: Option<Category>,
    pub selection: Selection,
    /// Calendar day in local time; only set while the calendar is shown.
    pub day: Option<NaiveDate>,
}

impl Criteria {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_day(mut self, day: Option<NaiveDate>) -> Self {
        self.day = day;
        self
    }

    pub fn matches<M: RecordKind>(&self, record: &LinkRecord<M>) -> bool {
        self.matches_selection(record)
            && self.matches_day(record)
            && self.matches_category(record)
            && self.matches_query(record)
    }

    fn matches_selection<M: RecordKind>(&self, record: &LinkRecord<M>) -> bool {
        match &self.selection {
            Selection::All => true,
            Selection::Favorites => record.meta.is_favorite(),
            Selection::Folder(id) => record.meta.folder_id() == Some(id.as_str()),
        }
    }

    fn matches_day<M>(&self, record: &LinkRecord<M>) -> bool {
        self.day
            .map_or(true, |day| record.date.with_timezone(&Local).date_naive() == day)
    }

    fn matches_category<M>(&self, record: &LinkRecord<M>) -> bool {
        self.category.map_or(true, |c| record.category == c)
    }

    fn matches_query<M: RecordKind>(&self, record: &LinkRecord<M>) -> bool {
        if self.query.trim().is_empty() {
            return true;
        }
        // The untrimmed query is matched, so "cat " does not match "cats".
        let query = self.query.to_lowercase();
        let hit = |field: &str| field.to_lowercase().contains(&query);

        hit(&record.title)
            || hit(&record.description)
            || record.tags.iter().any(|t| hit(t))
            || hit(record.category.as_str())
            || (M::SEARCHES_PLATFORM && hit(&record.platform))
    }
}

/// Returns the records matching `criteria`, in their original order.
pub fn filter<'a, M: RecordKind>(records: &'a [LinkRecord<M>], criteria: &Criteria) -> Vec<&'a LinkRecord<M>> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}
