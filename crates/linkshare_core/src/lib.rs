pub mod classifier;
pub mod domain;
pub mod filter;
pub mod ingestion;
pub mod organizer;
pub mod ports;
pub mod seed;
pub mod synthesizer;

mod ids;
#[cfg(test)]
mod testing;

pub use classifier::{classify, Classification, PlatformBadge};
pub use domain::{
    Category, Folder, FolderIcon, FolderId, LinkId, LinkRecord, Organized, Preview, PreviewDraft, Selection,
    VideoItem, ViewMode,
};
pub use filter::{filter, Criteria};
pub use ingestion::{IngestError, IngestionController, IngestionPorts, PendingPreview};
pub use organizer::{OrganizerController, OrganizerPorts};
pub use ports::{
    Clipboard, Clock, Haptic, HapticFeedback, PortError, PortResult, PreviewGenerator, RandomSource,
    ShareDispatcher,
};
pub use synthesizer::{Synthesizer, SynthesizingGenerator};
