//! The exporter: one fixed JOIN over the three post tables, decoded row by
//! row into `Post` records and written as a tab-indented JSON array.

use crate::config::ExportOptions;
use crate::db::open_existing;
use crate::error::{classify_row_error, ExportError};
use crate::progress::make_count_progress;
use crate::record::Post;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Left joins keep posts that never received a comment or like; the
/// ascending id ordering is part of the output contract.
pub(crate) const EXPORT_QUERY: &str = "\
    SELECT
        pt.Post_id,
        pt.Post_Type,
        pc.comments,
        pl.likes
    FROM
        Post_Types AS pt
    LEFT JOIN Post_Comments AS pc ON pt.Post_id = pc.Post_id
    LEFT JOIN Post_Likes AS pl ON pt.Post_id = pl.Post_id
    ORDER BY pt.Post_id";

/// Run the full export: collect, serialize, write. Returns the number of
/// records written. The output file is only touched once the whole row set
/// has been collected successfully.
pub(crate) fn run(opts: &ExportOptions) -> Result<usize, ExportError> {
    let posts = collect(opts)?;
    let json = render_json(&posts)?;
    write_output(opts, &json)?;
    tracing::info!(
        count = posts.len(),
        out = %opts.out_path.display(),
        "saved combined post data"
    );
    Ok(posts.len())
}

/// Presence check, connection + liveness probe, query, row mapping.
/// Rows whose columns fail to decode are logged and skipped; any other
/// cursor error aborts the run.
pub(crate) fn collect(opts: &ExportOptions) -> Result<Vec<Post>, ExportError> {
    let conn = open_existing(&opts.db_path)?;
    tracing::info!(db = %opts.db_path.display(), "connected to database");

    let pb = if opts.progress {
        let total: i64 = conn
            .query_row("SELECT COUNT(*) FROM Post_Types", [], |row| row.get(0))
            .map_err(ExportError::Query)?;
        let label = opts.progress_label.as_deref().unwrap_or("Exporting posts");
        Some(make_count_progress(total.max(0) as u64, label))
    } else {
        None
    };

    let mut stmt = conn.prepare(EXPORT_QUERY).map_err(ExportError::Query)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Post {
                post_id: row.get(0)?,
                post_type: row.get(1)?,
                // NULL counts mean "no matching aggregate row"; default to 0.
                comments: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
                likes: row.get::<_, Option<i64>>(3)?.unwrap_or(0),
            })
        })
        .map_err(ExportError::Query)?;

    let mut posts = Vec::new();
    for row in rows {
        match row {
            Ok(post) => {
                posts.push(post);
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
            }
            Err(e) => match classify_row_error(e) {
                ExportError::RowDecode(e) => {
                    tracing::warn!(error = %e, "failed to decode row, skipping");
                }
                fatal => return Err(fatal),
            },
        }
    }
    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }
    Ok(posts)
}

/// Serialize to a tab-indented pretty JSON array, fully in memory so a
/// serialization failure never leaves a partial output file behind.
pub(crate) fn render_json(posts: &[Post]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::with_capacity(64 * posts.len().max(1));
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    posts
        .serialize(&mut ser)
        .map_err(ExportError::Serialization)?;
    Ok(buf)
}

/// Write the rendered document, overwriting any existing file at the
/// destination.
pub(crate) fn write_output(opts: &ExportOptions, json: &[u8]) -> Result<(), ExportError> {
    let write_err = |source| ExportError::Write {
        path: opts.out_path.clone(),
        source,
    };
    let file = File::create(&opts.out_path).map_err(write_err)?;
    let mut w = BufWriter::with_capacity(opts.write_buffer_bytes, file);
    w.write_all(json).map_err(write_err)?;
    w.flush().map_err(write_err)?;
    Ok(())
}
