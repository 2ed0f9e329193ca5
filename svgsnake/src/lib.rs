#![forbid(unsafe_code)]

use crate::rename::{RenameOutcome, rename_file};
use crate::scan::find_svg_files;
use crate::statistics::Statistics;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod normalize;
mod rename;
mod scan;
mod statistics;

pub struct SvgsnakeOptions {
    pub directory: PathBuf,
    pub dry_run: bool,
}

/// Renames the SVG files in the given directory and prints a summary.
///
/// A directory-validation failure halts the run with [`ExitCode::FAILURE`]
/// before anything is listed. Per-file failures are logged and counted as
/// skipped but never abort the batch and never change the exit code.
pub fn run(options: SvgsnakeOptions) -> ExitCode {
    let display_directory =
        std::path::absolute(&options.directory).unwrap_or_else(|_| options.directory.clone());

    log::info!("Processing SVG files in: {}", display_directory.display());

    let paths = match find_svg_files(&options.directory) {
        Ok(paths) => paths,
        Err(error) => {
            log::error!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    if paths.is_empty() {
        log::warn!("No SVG files found in '{}'.", display_directory.display());
        return ExitCode::SUCCESS;
    }

    log::info!("Found {} SVG file(s)", paths.len());

    let statistics = rename_files(&paths, options.dry_run);

    println!("==============================");
    println!("Renamed files: {}", statistics.renamed_files);
    println!("Skipped files: {}", statistics.skipped_total());
    println!("Total files:   {}", statistics.total());

    if options.dry_run {
        log::warn!(
            "This was just a dry run. To actually apply the renaming, run again without the '--dry-run' flag."
        )
    }

    ExitCode::SUCCESS
}

fn rename_files(paths: &[PathBuf], dry_run: bool) -> Statistics {
    let mut statistics = Statistics::new();
    let dry_run_prefix = if dry_run { "[DRY RUN] " } else { "" };

    for path in paths {
        let file_name = display_file_name(path);

        match rename_file(path, dry_run) {
            RenameOutcome::Renamed { destination } => {
                log::info!(
                    "{}Renaming: {} ==> {}",
                    dry_run_prefix,
                    file_name,
                    display_file_name(&destination)
                );
                statistics.renamed_files += 1;
            }
            RenameOutcome::AlreadyFormatted => {
                log::info!("This file has already the correct name: {}", file_name);
                statistics.skipped_files += 1;
            }
            RenameOutcome::Conflict { destination } => {
                log::warn!(
                    "Cannot rename {} to {}: the destination already exists",
                    file_name,
                    display_file_name(&destination)
                );
                statistics.skipped_files += 1;
            }
            RenameOutcome::Failed { destination, error } => {
                log::warn!(
                    "Failed to rename {} to {}: {}",
                    file_name,
                    display_file_name(&destination),
                    error
                );
                statistics.failed_files += 1;
            }
        }
    }

    statistics
}

fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|file_name| file_name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
