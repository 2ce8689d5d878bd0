// Phase 5: ログ出力: tracing Dispatch を1つ作り、全タスクに渡す

use std::io::IsTerminal;

use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "comic_creator=debug";

/// Build the process-wide log handle.
///
/// Events go to stdout, one line each: timestamp, thread id, level, message.
/// The fmt layer formats every event into a buffer and writes it in one call,
/// so lines from concurrent tasks do not interleave. Colour codes are only
/// emitted when stdout is a terminal.
///
/// The handle is not installed globally. `main` enters it with
/// [`tracing::dispatcher::with_default`] and the orchestrator re-enters it on
/// each worker thread.
pub fn dispatch() -> Dispatch {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_ids(true)
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .with_writer(std::io::stdout)
        .finish();

    Dispatch::new(subscriber)
}
