use std::path::{Path, PathBuf};

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    pub db_path: PathBuf,               // SQLite database with the three post tables
    pub csv_path: PathBuf,              // source CSV for the build step
    pub out_path: PathBuf,              // JSON output of the export step
    pub progress: bool,                 // show progress bar
    pub progress_label: Option<String>, // optional label for progress bar

    // IO tuning
    pub write_buffer_bytes: usize, // BufWriter capacity
}

impl Default for ExportOptions {
    fn default() -> Self {
        // Defaults mirror the corpus layout: the database lives next to the
        // data directory holding both the CSV source and the JSON output.
        let default_write = 256 * 1024;

        Self {
            db_path: PathBuf::from("./database/social_posts.db"),
            csv_path: PathBuf::from("./data/posts.csv"),
            out_path: PathBuf::from("./data/posts.json"),
            progress: true,
            progress_label: None,

            write_buffer_bytes: default_write,
        }
    }
}

impl ExportOptions {
    pub fn with_db_path(mut self, path: impl AsRef<Path>) -> Self {
        self.db_path = path.as_ref().to_path_buf();
        self
    }
    pub fn with_csv_path(mut self, path: impl AsRef<Path>) -> Self {
        self.csv_path = path.as_ref().to_path_buf();
        self
    }
    pub fn with_out_path(mut self, path: impl AsRef<Path>) -> Self {
        self.out_path = path.as_ref().to_path_buf();
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }
    pub fn with_io_write_buffer(mut self, bytes: usize) -> Self {
        self.write_buffer_bytes = bytes.max(8 * 1024);
        self
    }
}
