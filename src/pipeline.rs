use crate::config::ExportOptions;
use crate::db::{init_schema, populate};
use crate::error::ExportError;
use crate::export;
use crate::import::load_and_split_posts_csv;
use crate::progress::make_count_progress;
use crate::record::Post;
use crate::util::init_tracing_once;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Builder facade over the toolkit's operations: build the database from
/// CSV, collect joined records, export them to JSON.
#[derive(Clone)]
pub struct PostsEtl {
    pub(crate) opts: ExportOptions,
}

impl PostsEtl {
    pub fn new() -> Self {
        Self {
            opts: ExportOptions::default(),
        }
    }

    // -------- Builder methods --------
    pub fn db_path(mut self, path: impl AsRef<Path>) -> Self { self.opts = self.opts.with_db_path(path); self }
    pub fn csv_path(mut self, path: impl AsRef<Path>) -> Self { self.opts = self.opts.with_csv_path(path); self }
    pub fn out_path(mut self, path: impl AsRef<Path>) -> Self { self.opts = self.opts.with_out_path(path); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn progress_label(mut self, label: impl Into<String>) -> Self { self.opts = self.opts.with_progress_label(label); self }
    pub fn io_write_buffer(mut self, bytes: usize) -> Self { self.opts = self.opts.with_io_write_buffer(bytes); self }

    // -------- Operations --------

    /// Build (or rebuild) the database from the source CSV: load and split
    /// the rows, drop-and-recreate the schema, populate all three tables.
    pub fn build_database(self) -> Result<()> {
        init_tracing_once();

        let split = load_and_split_posts_csv(&self.opts.csv_path)?;
        tracing::info!(
            rows = split.row_count(),
            csv = %self.opts.csv_path.display(),
            "loaded and split source CSV"
        );

        if let Some(dir) = self.opts.db_path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
            }
        }
        let mut conn = Connection::open(&self.opts.db_path)
            .with_context(|| format!("open {}", self.opts.db_path.display()))?;
        init_schema(&conn)?;

        let pb = if self.opts.progress {
            let total = (split.types.len() + split.comments.len() + split.likes.len()) as u64;
            let label = self.opts.progress_label.as_deref().unwrap_or("Populating tables");
            Some(make_count_progress(total, label))
        } else {
            None
        };
        populate(&mut conn, &split, pb.as_ref())?;
        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        tracing::info!(db = %self.opts.db_path.display(), "database setup complete");
        Ok(())
    }

    /// Collect the joined rows into records without writing anything.
    pub fn collect_posts(self) -> Result<Vec<Post>, ExportError> {
        init_tracing_once();
        export::collect(&self.opts)
    }

    /// The full export: collect, serialize with tab indentation, write the
    /// output file (overwriting any existing one). Returns the record count.
    pub fn export_to_json(self) -> Result<usize, ExportError> {
        init_tracing_once();
        export::run(&self.opts)
    }
}

impl Default for PostsEtl {
    fn default() -> Self {
        Self::new()
    }
}
