//! Process-wide tracing setup for the `eval_trace` binary, gated behind
//! the `cli` feature. The library itself only emits `tracing` events (see
//! `Evaluator::new`); it never installs a subscriber, since a library that
//! configures global logging on behalf of its caller is rarely welcome.

#![cfg(feature = "cli")]

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

static GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
static INIT: OnceLock<()> = OnceLock::new();

/// Initializes a process-wide subscriber writing to stderr, once. Safe to
/// call more than once; only the first call takes effect.
pub fn init_logging() {
    INIT.get_or_init(|| {
        let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());
        let _ = GUARD.set(guard);

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(non_blocking)
            .finish();

        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
