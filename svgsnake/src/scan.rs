use glob::{GlobError, MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("the directory '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot list SVG files in '{}': {}", .directory.display(), .source)]
    InvalidPattern {
        directory: PathBuf,
        source: glob::PatternError,
    },
}

/// Lists the SVG files directly inside `directory`, matched case-insensitively.
///
/// The directory is validated before anything is listed. Matches are regular
/// files only and are sorted by their lowercased path, so the processing order
/// does not depend on how the platform returns directory entries. Entries that
/// cannot be read are logged and left out.
pub fn find_svg_files(directory: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !directory.exists() {
        return Err(ScanError::NotFound(directory.to_path_buf()));
    }

    if !directory.is_dir() {
        return Err(ScanError::NotADirectory(directory.to_path_buf()));
    }

    // The directory may contain glob metacharacters; only the '*.svg' part is a pattern.
    let escaped_directory = Pattern::escape(&directory.display().to_string());
    let pattern = PathBuf::from(escaped_directory).join("*.svg");

    let match_options = MatchOptions {
        case_sensitive: false,
        require_literal_leading_dot: true,
        ..Default::default()
    };

    let glob_results = glob::glob_with(&pattern.to_string_lossy(), match_options).map_err(|error| {
        ScanError::InvalidPattern {
            directory: directory.to_path_buf(),
            source: error,
        }
    })?;

    let (mut paths, errors) = glob_results.fold(
        (Vec::<PathBuf>::new(), Vec::<GlobError>::new()),
        |(mut paths, mut errors), glob_result| {
            match glob_result {
                Ok(path) => paths.push(path),
                Err(error) => errors.push(error),
            };
            (paths, errors)
        },
    );

    for error in errors {
        log::warn!("Cannot read an entry of '{}': {}", directory.display(), error);
    }

    paths.retain(|path| path.is_file());
    paths.sort_by_key(|path| path.as_os_str().to_ascii_lowercase());

    Ok(paths)
}
