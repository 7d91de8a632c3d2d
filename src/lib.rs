// src/lib.rs
// Public library surface for the three utility binaries and the tests.

pub mod apple_secret;
pub mod config;
pub mod seeder;
pub mod store;
pub mod watch;

// ---- Re-exports for the bins ----
pub use config::StoreConfig;
pub use store::{StoreResponse, SupabaseClient};

use tracing_subscriber::EnvFilter;

/// Console tracing for the binaries. Glyph status lines stay on stdout via
/// `println!`; tracing carries warnings and the crate's own info events,
/// with `RUST_LOG` taking precedence over the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("kpop_stagehand=info,warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
