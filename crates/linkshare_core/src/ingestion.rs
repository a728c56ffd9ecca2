//! crates/linkshare_core/src/ingestion.rs
//!
//! State container for the link ingestion screen: the URL input, the flat list
//! of previews (most recent first), and the search and category filters.
//!
//! Preview generation is split into `begin_generation` and `finish_generation`
//! so a caller sharing the controller behind a lock can release it while the
//! generator runs. `add_preview` runs both phases for exclusive owners.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::classifier;
use crate::domain::{Category, Preview, PreviewDraft};
use crate::filter::{self, Criteria};
use crate::ids;
use crate::ports::{
    Clipboard, Clock, Haptic, HapticFeedback, PortError, PortResult, PreviewGenerator, ShareDispatcher,
};

/// Why a submitted URL did not produce a preview.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    #[error("Please enter a URL")]
    EmptyUrl,
    #[error("Please enter a valid URL starting with http:// or https://")]
    InvalidUrl,
    #[error("A preview is already being generated")]
    Busy,
    #[error("Failed to generate preview: {0}")]
    GenerationFailed(#[from] PortError),
    #[error("Failed to read the clipboard: {0}")]
    ClipboardUnavailable(PortError),
}

/// The external collaborators the ingestion screen talks to.
#[derive(Clone)]
pub struct IngestionPorts {
    pub generator: Arc<dyn PreviewGenerator>,
    pub clock: Arc<dyn Clock>,
    pub clipboard: Arc<dyn Clipboard>,
    pub share: Arc<dyn ShareDispatcher>,
    pub haptics: Arc<dyn HapticFeedback>,
}

/// A generation that passed validation and is waiting on the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPreview {
    pub url: String,
}

pub struct IngestionController {
    previews: Vec<Preview>,
    url_input: String,
    search_query: String,
    selected_category: Option<Category>,
    is_generating: bool,
    last_deep_link: Option<String>,
    ports: IngestionPorts,
}

impl IngestionController {
    pub fn new(ports: IngestionPorts) -> Self {
        Self {
            previews: Vec::new(),
            url_input: String::new(),
            search_query: String::new(),
            selected_category: None,
            is_generating: false,
            last_deep_link: None,
            ports,
        }
    }

    /// Replaces the collection with `previews`, kept in the given order.
    pub fn seed(&mut self, previews: Vec<Preview>) {
        info!("Seeding ingestion list with {} previews", previews.len());
        self.previews = previews;
    }

    // --- Read access ---

    pub fn previews(&self) -> &[Preview] {
        &self.previews
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn last_deep_link(&self) -> Option<&str> {
        self.last_deep_link.as_deref()
    }

    pub fn generator(&self) -> Arc<dyn PreviewGenerator> {
        self.ports.generator.clone()
    }

    pub fn criteria(&self) -> Criteria {
        Criteria::default()
            .with_query(self.search_query.clone())
            .with_category(self.selected_category)
    }

    /// The previews to display under the current search and category.
    pub fn visible_previews(&self) -> Vec<&Preview> {
        filter::filter(&self.previews, &self.criteria())
    }

    // --- Input ---

    /// Replaces the URL input. The input is locked while a generation is pending.
    pub fn set_url_input(&mut self, text: impl Into<String>) -> Result<(), IngestError> {
        if self.is_generating {
            return Err(IngestError::Busy);
        }
        self.url_input = text.into();
        Ok(())
    }

    /// Copies non-empty clipboard text into the URL input.
    /// Returns whether the input changed.
    pub async fn paste_from_clipboard(&mut self) -> Result<bool, IngestError> {
        if self.is_generating {
            return Err(IngestError::Busy);
        }
        let text = self
            .ports
            .clipboard
            .read_text()
            .await
            .map_err(IngestError::ClipboardUnavailable)?;
        if text.is_empty() {
            return Ok(false);
        }
        self.url_input = text;
        self.ports.haptics.emit(Haptic::LightImpact);
        Ok(true)
    }

    /// Stores a URL delivered by the platform's deep-link handler.
    pub fn receive_deep_link(&mut self, url: impl Into<String>) {
        let url = url.into();
        debug!("Received deep link: {}", url);
        self.last_deep_link = Some(url);
    }

    // --- Generation ---

    /// Validates the URL input and marks a generation as in flight.
    pub fn begin_generation(&mut self) -> Result<PendingPreview, IngestError> {
        if self.is_generating {
            return Err(IngestError::Busy);
        }
        if self.url_input.is_empty() {
            self.ports.haptics.emit(Haptic::Warning);
            return Err(IngestError::EmptyUrl);
        }
        if !classifier::is_supported_url(&self.url_input) {
            warn!("Rejected malformed URL: {}", self.url_input);
            self.ports.haptics.emit(Haptic::Error);
            return Err(IngestError::InvalidUrl);
        }

        self.is_generating = true;
        self.ports.haptics.emit(Haptic::MediumImpact);
        Ok(PendingPreview {
            url: self.url_input.clone(),
        })
    }

    /// Completes a generation started by `begin_generation`. The in-flight
    /// flag is cleared whatever the outcome.
    pub fn finish_generation(
        &mut self,
        pending: PendingPreview,
        outcome: PortResult<PreviewDraft>,
    ) -> Result<&Preview, IngestError> {
        self.is_generating = false;

        let draft = match outcome {
            Ok(draft) => draft,
            Err(e) => {
                warn!("Preview generation failed for {}: {}", pending.url, e);
                self.ports.haptics.emit(Haptic::Error);
                return Err(IngestError::GenerationFailed(e));
            }
        };

        let now = self.ports.clock.now();
        let id = ids::timestamp_id("", now, |candidate| self.contains(candidate));
        let preview = draft.into_record(id, pending.url, now, ());
        info!("Added preview {} from {}", preview.id, preview.domain);

        self.previews.insert(0, preview);
        self.url_input.clear();
        self.ports.haptics.emit(Haptic::Success);
        Ok(&self.previews[0])
    }

    /// Submits `raw_url` and waits for the generator.
    pub async fn add_preview(&mut self, raw_url: impl Into<String>) -> Result<&Preview, IngestError> {
        self.set_url_input(raw_url)?;
        let pending = self.begin_generation()?;
        let outcome = self.ports.generator.generate(&pending.url).await;
        self.finish_generation(pending, outcome)
    }

    // --- Collection ---

    fn contains(&self, id: &str) -> bool {
        self.previews.iter().any(|p| p.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Preview> {
        self.previews.iter().find(|p| p.id == id)
    }

    /// Deletes the matching preview. Unknown ids are ignored.
    pub fn remove_preview(&mut self, id: &str) -> bool {
        self.ports.haptics.emit(Haptic::LightImpact);
        let before = self.previews.len();
        self.previews.retain(|p| p.id != id);
        let removed = self.previews.len() != before;
        if removed {
            info!("Removed preview {}", id);
        }
        removed
    }

    /// Hands the preview's URL to the share port. Unknown ids are ignored.
    pub async fn share_preview(&self, id: &str) -> PortResult<bool> {
        let Some(preview) = self.find(id) else {
            return Ok(false);
        };
        self.ports.haptics.emit(Haptic::MediumImpact);
        self.ports.share.share(&preview.url).await?;
        Ok(true)
    }

    // --- Filters ---

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Sets the category filter; `None` is the "All" chip.
    pub fn select_category(&mut self, category: Option<Category>) {
        self.selected_category = category;
    }

    /// Chip behaviour: tapping the active category clears it.
    pub fn toggle_category(&mut self, category: Category) {
        self.selected_category = if self.selected_category == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.selected_category = None;
    }
}
