// Phase 8: ジョブ単位: 出力ディレクトリ再作成 -> 並列ページ処理 -> 集計

use std::path::{Path, PathBuf};

use rayon::ThreadPool;
use rayon::prelude::*;
use tracing::{Dispatch, error, trace};

use crate::config::settings::Settings;
use crate::error::ComicError;
use crate::pipeline::output::{ONLINE_DIR, PRINT_DIR, recreate_dir};
use crate::pipeline::page_processor::{SpreadTask, process_online_page, process_spread};
use crate::transform::spread::spread_pairs;

/// Shared, read-only state for every task of a run.
pub struct RunContext<'a> {
    /// Working directory; output directories are created below it.
    pub root: &'a Path,
    pub settings: &'a Settings,
    pub pool: &'a ThreadPool,
    /// Log handle entered on each worker thread.
    pub dispatch: &'a Dispatch,
}

/// Result of one output pipeline.
#[derive(Debug)]
pub struct JobResult {
    pub output_dir: PathBuf,
    /// Files written, in task order.
    pub written: Vec<PathBuf>,
    /// Number of tasks that produced no file.
    pub failed: usize,
}

impl JobResult {
    fn from_results(output_dir: PathBuf, results: Vec<crate::error::Result<PathBuf>>) -> Self {
        let mut written = Vec::with_capacity(results.len());
        let mut failed = 0;
        for result in results {
            match result {
                Ok(path) => written.push(path),
                Err(_) => failed += 1,
            }
        }
        JobResult {
            output_dir,
            written,
            failed,
        }
    }
}

/// Run `task` for every item on the pool and wait for all of them.
///
/// Each task runs inside `ctx.dispatch`. A failing task is logged and
/// counted; it does not stop the others.
fn run_parallel<T, F>(ctx: &RunContext<'_>, items: &[T], task: F) -> Vec<crate::error::Result<PathBuf>>
where
    T: Sync,
    F: Fn(&T) -> crate::error::Result<PathBuf> + Sync,
{
    ctx.pool.install(|| {
        items
            .par_iter()
            .map(|item| {
                tracing::dispatcher::with_default(ctx.dispatch, || {
                    let result = task(item);
                    match &result {
                        // Already logged where they happened.
                        Err(ComicError::DecodeError(_) | ComicError::EncodeError(_)) => {}
                        Err(e) => error!("{e}"),
                        Ok(_) => {}
                    }
                    result
                })
            })
            .collect()
    })
}

/// Online pipeline: every page resized to the online width, saved into a
/// freshly recreated `online/` directory.
pub fn run_online_job(pages: &[PathBuf], ctx: &RunContext<'_>) -> crate::error::Result<JobResult> {
    trace!("Creating images for online publishing");

    let out_dir = recreate_dir(&ctx.root.join(ONLINE_DIR))?;

    let results = run_parallel(ctx, pages, |page| process_online_page(page, &out_dir));

    Ok(JobResult::from_results(out_dir, results))
}

/// Print pipeline: booklet spreads saved into a freshly recreated `print/`
/// directory.
///
/// # Errors
/// Returns `ComicError::LayoutError` without touching `print/` if the page
/// count is not a multiple of 4.
pub fn run_print_job(pages: &[PathBuf], ctx: &RunContext<'_>) -> crate::error::Result<JobResult> {
    let pairs = spread_pairs(pages.len())?;

    trace!("Creating images for printing");

    let out_dir = recreate_dir(&ctx.root.join(PRINT_DIR))?;

    let tasks: Vec<SpreadTask> = pairs
        .into_iter()
        .enumerate()
        .map(|(index, (left, right))| SpreadTask {
            index,
            left: pages[left].clone(),
            right: pages[right].clone(),
        })
        .collect();

    let results = run_parallel(ctx, &tasks, |task| {
        process_spread(task, &out_dir, ctx.settings)
    });

    Ok(JobResult::from_results(out_dir, results))
}
