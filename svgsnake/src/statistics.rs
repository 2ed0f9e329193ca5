#[derive(Debug, Default)]
pub struct Statistics {
    pub renamed_files: u64,
    pub skipped_files: u64,
    pub failed_files: u64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All skip reasons combined: already formatted, conflicts, and failures.
    pub fn skipped_total(&self) -> u64 {
        self.skipped_files + self.failed_files
    }

    pub fn total(&self) -> u64 {
        self.renamed_files + self.skipped_total()
    }
}
