//! Console logging for component construction.
//!
//! Installs a `tracing` subscriber that prints construction events.
//!
//! ## Log Levels
//!
//! - **INFO**: Construction start/end per component, block registration
//! - **DEBUG**: Initializer application, dense fill, implicit creation
//! - **TRACE**: Individual rule evaluations

use std::sync::OnceLock;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_DIRECTIVE: &str = "indexforge_core=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Respects
/// `RUST_LOG`; falls back to info-level construction events.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(
                DEFAULT_DIRECTIVE
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            )
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init();
    });
}
