// Phase 8: 全体実行: ページ列挙 -> オンライン用 -> 印刷用

use std::path::Path;

use rayon::ThreadPoolBuilder;
use tracing::{Dispatch, error, info, warn};

use crate::config::settings::Settings;
use crate::error::ComicError;
use crate::pipeline::discovery::{PAGES_DIR, fetch_pages};
use crate::pipeline::job_runner::{JobResult, RunContext, run_online_job, run_print_job};

/// Outcome of a whole run.
#[derive(Debug)]
pub struct RunSummary {
    pub page_count: usize,
    /// `None` when the online pipeline is disabled.
    pub online: Option<JobResult>,
    /// `None` when the print pipeline is disabled. An `Err` here (e.g. a page
    /// count that is not a multiple of 4) does not fail the run.
    pub print: Option<crate::error::Result<JobResult>>,
}

/// Run both pipelines over `<root>/pages`.
///
/// Returns only after every dispatched task has finished.
///
/// # Errors
/// - `ComicError::MissingInput` if `pages/` is missing or empty.
/// - `ComicError::ConfigError` if the worker pool cannot be built.
/// - Any I/O error while recreating `online/`.
pub fn run(root: &Path, settings: &Settings, dispatch: &Dispatch) -> crate::error::Result<RunSummary> {
    let pages_dir = root.join(PAGES_DIR);
    let pages = fetch_pages(&pages_dir)?;
    if pages.is_empty() {
        return Err(ComicError::missing_input(format!(
            "Cannot fetch pages: no page files in {}",
            pages_dir.display()
        )));
    }
    info!("Found {} pages in {}", pages.len(), pages_dir.display());

    let pool = ThreadPoolBuilder::new()
        .num_threads(settings.parallel_workers)
        .thread_name(|i| format!("comic-worker-{i}"))
        .build()
        .map_err(|e| ComicError::config(format!("Failed to build worker pool: {e}")))?;

    let ctx = RunContext {
        root,
        settings,
        pool: &pool,
        dispatch,
    };

    let online = if settings.online {
        let result = run_online_job(&pages, &ctx)?;
        report("online", &result);
        Some(result)
    } else {
        None
    };

    let print = if settings.print {
        let result = run_print_job(&pages, &ctx);
        match &result {
            Ok(job) => report("print", job),
            Err(e) => error!("print: {e}"),
        }
        Some(result)
    } else {
        None
    };

    Ok(RunSummary {
        page_count: pages.len(),
        online,
        print,
    })
}

fn report(label: &str, result: &JobResult) {
    if result.failed > 0 {
        warn!(
            "{label}: wrote {} files to {}, {} failed",
            result.written.len(),
            result.output_dir.display(),
            result.failed
        );
    } else {
        info!(
            "{label}: wrote {} files to {}",
            result.written.len(),
            result.output_dir.display()
        );
    }
}
