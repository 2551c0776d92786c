mod config;
mod db;
mod error;
mod export;
mod import;
mod pipeline;
mod progress;
mod record;
mod stats;
mod util;

pub use crate::config::ExportOptions;
pub use crate::error::ExportError;
pub use crate::pipeline::PostsEtl;
pub use crate::record::Post;

// Expose database building blocks for callers that manage their own source data.
pub use crate::db::{init_schema, open_existing, populate};
pub use crate::import::{load_and_split_posts_csv, split_posts_csv, SplitPosts};

// Expose analytics over exported records.
pub use crate::stats::{
    most_commented, most_liked, most_popular_type, read_posts_json, render_report,
    totals_by_type, TypeTotals,
};

// Expose progress helpers so binaries can label their own bars.
pub use crate::progress::make_count_progress;
