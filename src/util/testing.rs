//! Test logging for the builder and gateway targets.
//!
//! `RUST_LOG` wins when set. Otherwise the crate's domain and application
//! layers log at `debug` and everything else at `warn`.

use std::sync::Once;

use tracing::{debug, info, Level};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

static TEST_SETUP: Once = Once::new();

const DEFAULT_DIRECTIVES: &str = "warn,paytree::domain=debug,paytree::application=debug";

/// Dependency targets kept to warnings even under a broad `RUST_LOG`.
const QUIET_TARGETS: &[&str] = &["config", "toml", "generational_arena"];

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!(target: "paytree::application", "Test Setup complete");
    });
}

fn is_quiet(target: &str) -> bool {
    QUIET_TARGETS
        .iter()
        .any(|name| target == *name || target.starts_with(&format!("{}::", name)))
}

fn setup_test_logging() {
    let quiet_filter =
        filter_fn(|metadata| !is_quiet(metadata.target()) || *metadata.level() <= Level::WARN);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(quiet_filter)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else if let Err(e) = subscriber.try_init() {
        eprintln!("Error: Failed to set up logging: {}", e);
    }
}
