pub mod collection;
pub mod previews;
pub mod protocol;
pub mod rest;
pub mod state;

// Re-export the router and state so the binary can build the server from them.
pub use rest::{router, ApiDoc};
pub use state::AppState;
