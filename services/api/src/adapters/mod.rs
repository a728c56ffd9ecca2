pub mod device;
pub mod system;
pub mod unfurl;

pub use device::{LoggingShareAdapter, MemoryClipboard, TracingHaptics};
pub use system::{StdRandomSource, SystemClock};
pub use unfurl::{SimulatedUnfurlAdapter, TimeoutUnfurlAdapter};
