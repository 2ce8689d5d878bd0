use std::process::ExitCode;

use tracing::{Dispatch, error, info};

use comic_creator::config::load_settings;
use comic_creator::logging;
use comic_creator::pipeline::orchestrator::run;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        eprintln!("comic_creator {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    if !args.is_empty() {
        print_usage();
        return ExitCode::FAILURE;
    }

    let dispatch = logging::dispatch();
    tracing::dispatcher::with_default(&dispatch, || run_in_cwd(&dispatch))
}

fn print_usage() {
    eprintln!("Usage: comic_creator");
    eprintln!("  Reads page images from ./pages and writes ./online and ./print.");
    eprintln!("  Optional settings are read from ./comic.yaml.");
}

fn run_in_cwd(dispatch: &Dispatch) -> ExitCode {
    info!("ComicCreator {}", env!("CARGO_PKG_VERSION"));

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!("Cannot determine working directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    let settings = match load_settings(&root) {
        Ok(s) => s,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&root, &settings, dispatch) {
        Ok(summary) => {
            info!("Processed {} pages", summary.page_count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
