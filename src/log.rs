// src/log.rs
//
// Logging setup. Everything goes through `tracing`; the subscriber writes
// to .store/debug.log, filtered by RUST_LOG (default: info).

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::consts::{LOG_FILE, STORE_DIR};

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// or buffered lines are lost.
///
/// `stderr` adds a compact warnings-and-up layer for terminal use.
pub fn init(stderr: bool) -> Option<WorkerGuard> {
    let dir = Path::new(STORE_DIR);
    let file = match std::fs::create_dir_all(dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::never(dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer)
                .with_filter(env_filter());
            Some((layer, guard))
        }
        Err(e) => {
            eprintln!("Log: cannot create {}: {}", dir.display(), e);
            None
        }
    };

    let term = stderr.then(|| {
        fmt::layer()
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
            .with_filter(EnvFilter::new("warn"))
    });

    let (file_layer, guard) = match file {
        Some((l, g)) => (Some(l), Some(g)),
        None => (None, None),
    };

    let res = tracing_subscriber::registry()
        .with(file_layer)
        .with(term)
        .try_init();

    if let Err(e) = res {
        eprintln!("Log: subscriber already set ({})", e);
    }

    tracing::info!("Log: started {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    guard
}
