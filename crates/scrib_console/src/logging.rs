//! Tracing subscriber setup for the `scrib` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once, if `RUST_LOG` is set.
///
/// `SCRIB_LOG_TREE=1` renders spans as an indented tree instead of flat
/// lines. Output goes to stderr so it never mixes with rendered text.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var("SCRIB_LOG_TREE").as_deref() == Ok("1") {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
