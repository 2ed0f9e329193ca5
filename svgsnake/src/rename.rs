use crate::normalize::normalize_file_name;

use std::io;
use std::path::{Path, PathBuf};

/// Terminal classification of one file. The caller inspects the outcome to
/// log it and update the run statistics; no error is propagated out of a
/// single rename.
#[derive(Debug)]
pub enum RenameOutcome {
    Renamed { destination: PathBuf },
    AlreadyFormatted,
    Conflict { destination: PathBuf },
    Failed { destination: PathBuf, error: io::Error },
}

/// Renames one file to its normalized name, never overwriting an existing file.
///
/// With `dry_run` the file is classified exactly the same way but the
/// filesystem is left untouched.
pub fn rename_file(path: &Path, dry_run: bool) -> RenameOutcome {
    let Some(file_name) = path.file_name().and_then(|file_name| file_name.to_str()) else {
        return RenameOutcome::Failed {
            destination: path.to_path_buf(),
            error: io::Error::new(io::ErrorKind::InvalidData, "the file name is not valid UTF-8"),
        };
    };

    let normalized_file_name = normalize_file_name(file_name);

    if file_name == normalized_file_name {
        return RenameOutcome::AlreadyFormatted;
    }

    let destination = path.with_file_name(&normalized_file_name);

    if destination.exists() {
        return RenameOutcome::Conflict { destination };
    }

    if dry_run {
        return RenameOutcome::Renamed { destination };
    }

    match std::fs::rename(path, &destination) {
        Ok(()) => RenameOutcome::Renamed { destination },
        Err(error) => RenameOutcome::Failed { destination, error },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn renames_to_the_normalized_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original = temp_dir.path().join("Logo File.svg");
        fs::write(&original, "<svg/>").unwrap();

        let outcome = rename_file(&original, false);

        let expected = temp_dir.path().join("logo_file.svg");
        assert!(matches!(outcome, RenameOutcome::Renamed { destination } if destination == expected));
        assert!(!original.exists());
        assert!(expected.exists());
    }

    #[test]
    fn an_already_formatted_file_is_not_touched() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("already_lower.svg");
        fs::write(&path, "<svg/>").unwrap();

        let outcome = rename_file(&path, false);

        assert!(matches!(outcome, RenameOutcome::AlreadyFormatted));
        assert!(path.exists());
    }

    #[test]
    fn an_occupied_destination_is_never_overwritten() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original = temp_dir.path().join("Big Logo.svg");
        let occupied = temp_dir.path().join("big_logo.svg");
        fs::write(&original, "original").unwrap();
        fs::write(&occupied, "occupied").unwrap();

        let outcome = rename_file(&original, false);

        assert!(matches!(outcome, RenameOutcome::Conflict { destination } if destination == occupied));
        assert_eq!(fs::read_to_string(&original).unwrap(), "original");
        assert_eq!(fs::read_to_string(&occupied).unwrap(), "occupied");
    }

    #[test]
    fn a_dry_run_classifies_without_renaming() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original = temp_dir.path().join("Logo File.svg");
        fs::write(&original, "<svg/>").unwrap();

        let outcome = rename_file(&original, true);

        assert!(matches!(outcome, RenameOutcome::Renamed { .. }));
        assert!(original.exists());
        assert!(!temp_dir.path().join("logo_file.svg").exists());
    }

    #[test]
    fn a_failing_rename_is_captured_as_an_outcome() {
        let temp_dir = tempfile::tempdir().unwrap();
        let vanished = temp_dir.path().join("Ghost File.svg");

        let outcome = rename_file(&vanished, false);

        assert!(matches!(outcome, RenameOutcome::Failed { .. }));
    }
}
