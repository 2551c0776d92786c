//! Post-export analytics: the summary questions answered over the exported
//! records, read back from the JSON file rather than the database.

use crate::record::Post;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Likes/comments sums for one post type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TypeTotals {
    pub likes: i64,
    pub comments: i64,
}

/// Read an exported JSON array back into records.
pub fn read_posts_json(path: &Path) -> Result<Vec<Post>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let posts = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(posts)
}

/// Post with the highest comment count; the first such post wins ties.
pub fn most_commented(posts: &[Post]) -> Option<&Post> {
    posts.iter().fold(None, |best: Option<&Post>, p| match best {
        Some(b) if b.comments >= p.comments => Some(b),
        _ => Some(p),
    })
}

/// Post with the highest like count; the first such post wins ties.
pub fn most_liked(posts: &[Post]) -> Option<&Post> {
    posts.iter().fold(None, |best: Option<&Post>, p| match best {
        Some(b) if b.likes >= p.likes => Some(b),
        _ => Some(p),
    })
}

/// Most frequent post type and its occurrence count; the lexicographically
/// first type wins ties.
pub fn most_popular_type(posts: &[Post]) -> Option<(String, usize)> {
    let mut counts = BTreeMap::<&str, usize>::new();
    for p in posts {
        *counts.entry(p.post_type.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .fold(None, |best: Option<(&str, usize)>, (kind, n)| match best {
            Some((bk, bn)) if bn >= n => Some((bk, bn)),
            _ => Some((kind, n)),
        })
        .map(|(kind, n)| (kind.to_string(), n))
}

/// Group likes and comments by post type (deterministic key order).
pub fn totals_by_type(posts: &[Post]) -> BTreeMap<String, TypeTotals> {
    let mut totals = BTreeMap::<String, TypeTotals>::new();
    for p in posts {
        let t = totals.entry(p.post_type.clone()).or_default();
        t.likes += p.likes;
        t.comments += p.comments;
    }
    totals
}

/// Render the human-readable summary report with headed sections.
pub fn render_report(posts: &[Post]) -> String {
    let mut out = String::new();

    out.push_str("Most Commented Post:\n");
    match most_commented(posts) {
        Some(p) => {
            let _ = writeln!(out, "{p}");
        }
        None => out.push_str("(no posts)\n"),
    }
    out.push('\n');

    out.push_str("Most Liked Post:\n");
    match most_liked(posts) {
        Some(p) => {
            let _ = writeln!(out, "{p}");
        }
        None => out.push_str("(no posts)\n"),
    }
    out.push('\n');

    out.push_str("Most Popular Post Type:\n");
    match most_popular_type(posts) {
        Some((kind, n)) => {
            let _ = writeln!(out, "{kind} ({n} posts)");
        }
        None => out.push_str("(no posts)\n"),
    }
    out.push('\n');

    out.push_str("Total Likes and Comments by Post Type:\n");
    for (kind, t) in totals_by_type(posts) {
        let _ = writeln!(out, "{kind}: likes={} comments={}", t.likes, t.comments);
    }
    out
}
