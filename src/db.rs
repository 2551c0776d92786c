//! Connection handling and schema management for the social-posts database.

use crate::error::ExportError;
use crate::import::SplitPosts;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rusqlite::{params, Connection};
use std::path::Path;

/// DDL for the three post tables. A rebuild drops and recreates them, so
/// repeated builds always start from a clean slate.
pub(crate) const SCHEMA: &str = "\
    DROP TABLE IF EXISTS Post_Types;
    DROP TABLE IF EXISTS Post_Comments;
    DROP TABLE IF EXISTS Post_Likes;

    CREATE TABLE Post_Types (
        Post_id INTEGER PRIMARY KEY,
        Post_Type TEXT
    );

    CREATE TABLE Post_Comments (
        Post_id INTEGER PRIMARY KEY,
        comments INTEGER
    );

    CREATE TABLE Post_Likes (
        Post_id INTEGER PRIMARY KEY,
        likes INTEGER
    );
";

/// Open an existing database for export: presence check, open, liveness probe.
pub fn open_existing(path: &Path) -> Result<Connection, ExportError> {
    if !path.exists() {
        return Err(ExportError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let conn = Connection::open(path).map_err(ExportError::Connection)?;
    // Opening succeeds without touching the file contents; a trivial query
    // proves the database actually answers.
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
        .map_err(ExportError::Connection)?;
    Ok(conn)
}

/// Drop and recreate the three post tables.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA).context("initialize schema")?;
    Ok(())
}

/// Populate the three tables from a split row set inside one transaction.
pub fn populate(conn: &mut Connection, posts: &SplitPosts, pb: Option<&ProgressBar>) -> Result<()> {
    let tx = conn.transaction().context("begin populate transaction")?;
    {
        let mut ins = tx.prepare("INSERT INTO Post_Types (Post_id, Post_Type) VALUES (?1, ?2)")?;
        for (id, kind) in &posts.types {
            ins.execute(params![id, kind])
                .with_context(|| format!("insert Post_Types row {id}"))?;
            if let Some(pb) = pb {
                pb.inc(1);
            }
        }

        let mut ins = tx.prepare("INSERT INTO Post_Comments (Post_id, comments) VALUES (?1, ?2)")?;
        for (id, comments) in &posts.comments {
            ins.execute(params![id, comments])
                .with_context(|| format!("insert Post_Comments row {id}"))?;
            if let Some(pb) = pb {
                pb.inc(1);
            }
        }

        let mut ins = tx.prepare("INSERT INTO Post_Likes (Post_id, likes) VALUES (?1, ?2)")?;
        for (id, likes) in &posts.likes {
            ins.execute(params![id, likes])
                .with_context(|| format!("insert Post_Likes row {id}"))?;
            if let Some(pb) = pb {
                pb.inc(1);
            }
        }
    }
    tx.commit().context("commit populate transaction")?;
    Ok(())
}
