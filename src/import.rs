//! CSV import: load the source posts CSV and split it into per-table row sets.

use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::Path;

pub(crate) const CSV_HEADER: [&str; 4] = ["Post_id", "Post_Type", "comments", "likes"];

/// Row sets for the three destination tables, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitPosts {
    pub types: Vec<(i64, String)>,
    pub comments: Vec<(i64, i64)>,
    pub likes: Vec<(i64, i64)>,
}

impl SplitPosts {
    /// Number of source rows (each row lands in all three sets).
    pub fn row_count(&self) -> usize {
        self.types.len()
    }
}

/// Split CSV content into the three row sets.
/// Strict: the header must match exactly and every field must parse; parse
/// errors carry 1-based line numbers. Blank lines are skipped.
pub fn split_posts_csv(content: &str) -> Result<SplitPosts> {
    let mut lines = content.lines().enumerate();
    let (_, header) = lines.next().ok_or_else(|| anyhow!("empty CSV input"))?;
    let cols: Vec<&str> = header.split(',').map(str::trim).collect();
    if cols != CSV_HEADER {
        bail!(
            "unexpected CSV header {header:?} (expected {})",
            CSV_HEADER.join(",")
        );
    }

    let mut split = SplitPosts::default();
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != CSV_HEADER.len() {
            bail!(
                "line {line_no}: expected {} fields, got {}",
                CSV_HEADER.len(),
                fields.len()
            );
        }
        let post_id: i64 = fields[0]
            .parse()
            .with_context(|| format!("line {line_no}: invalid Post_id {:?}", fields[0]))?;
        let comments: i64 = fields[2]
            .parse()
            .with_context(|| format!("line {line_no}: invalid comments {:?}", fields[2]))?;
        let likes: i64 = fields[3]
            .parse()
            .with_context(|| format!("line {line_no}: invalid likes {:?}", fields[3]))?;

        split.types.push((post_id, fields[1].to_string()));
        split.comments.push((post_id, comments));
        split.likes.push((post_id, likes));
    }
    Ok(split)
}

/// File wrapper over [`split_posts_csv`].
pub fn load_and_split_posts_csv(path: &Path) -> Result<SplitPosts> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    split_posts_csv(&content)
}
