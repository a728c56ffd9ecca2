//! services/api/src/web/state.rs
//!
//! Defines the application's shared state: one instance of each screen
//! controller plus the device stand-ins the client can drive.

use crate::adapters::{
    LoggingShareAdapter, MemoryClipboard, SimulatedUnfurlAdapter, StdRandomSource, SystemClock,
    TimeoutUnfurlAdapter, TracingHaptics,
};
use crate::config::Config;
use linkshare_core::ports::{Clock, HapticFeedback, PreviewGenerator, RandomSource};
use linkshare_core::{seed, IngestionController, IngestionPorts, OrganizerController, OrganizerPorts, SynthesizingGenerator};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// The shared application state, created once at startup and passed to all handlers.
///
/// The two controllers are independent and never share records.
pub struct AppState {
    pub config: Arc<Config>,
    pub ingestion: Mutex<IngestionController>,
    pub organizer: Mutex<OrganizerController>,
    pub clipboard: Arc<MemoryClipboard>,
}

impl AppState {
    /// Wires the production adapters described by `config`.
    pub fn new(config: Arc<Config>) -> Self {
        let random: Arc<dyn RandomSource> = match config.random_seed {
            Some(seed) => {
                info!("Using fixed random seed {}", seed);
                Arc::new(StdRandomSource::seeded(seed))
            }
            None => Arc::new(StdRandomSource::from_entropy()),
        };
        let simulated: Arc<dyn PreviewGenerator> = Arc::new(SimulatedUnfurlAdapter::new(
            Arc::new(SynthesizingGenerator::new(random.clone())),
            config.preview_delay,
        ));
        let generator = Arc::new(TimeoutUnfurlAdapter::new(simulated, config.preview_timeout));
        Self::with_ports(config, random, Arc::new(SystemClock), generator)
    }

    /// Builds the state around caller-supplied seams; device stand-ins are fixed.
    pub fn with_ports(
        config: Arc<Config>,
        random: Arc<dyn RandomSource>,
        clock: Arc<dyn Clock>,
        generator: Arc<dyn PreviewGenerator>,
    ) -> Self {
        let clipboard = Arc::new(MemoryClipboard::default());
        let haptics: Arc<dyn HapticFeedback> = Arc::new(TracingHaptics);

        let mut ingestion = IngestionController::new(IngestionPorts {
            generator,
            clock: clock.clone(),
            clipboard: clipboard.clone(),
            share: Arc::new(LoggingShareAdapter),
            haptics: haptics.clone(),
        });
        let mut organizer = OrganizerController::new(OrganizerPorts {
            random,
            clock: clock.clone(),
            haptics,
        });

        if config.seed_collections {
            let now = clock.now();
            ingestion.seed(seed::previews(now));
            organizer.seed(seed::folders(), seed::videos(now));
        }

        Self {
            config,
            ingestion: Mutex::new(ingestion),
            organizer: Mutex::new(organizer),
            clipboard,
        }
    }
}
