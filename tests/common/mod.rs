use rusqlite::{params, Connection};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One source row as it appears in the original CSV:
/// `(post_id, post_type, comments, likes)`. A `None` count means the post
/// has **no** matching row in that aggregate table, exercising the
/// left-join path.
pub type SourceRow = (i64, &'static str, Option<i64>, Option<i64>);

/// The example rows from the output contract: post 2 has no comment row and
/// must surface with `comments: 0`.
pub fn sample_rows() -> Vec<SourceRow> {
    vec![(1, "photo", Some(3), Some(10)), (2, "video", None, Some(5))]
}

/// Create `dir/social_posts.db` with the three post tables populated from
/// `rows`. Built with raw SQL so the fixtures stay independent of the
/// library under test.
pub fn make_db(dir: &Path, rows: &[SourceRow]) -> PathBuf {
    let db_path = dir.join("social_posts.db");
    let conn = Connection::open(&db_path).unwrap();
    conn.execute_batch(
        "CREATE TABLE Post_Types (Post_id INTEGER PRIMARY KEY, Post_Type TEXT);
         CREATE TABLE Post_Comments (Post_id INTEGER PRIMARY KEY, comments INTEGER);
         CREATE TABLE Post_Likes (Post_id INTEGER PRIMARY KEY, likes INTEGER);",
    )
    .unwrap();
    for (id, kind, comments, likes) in rows {
        conn.execute(
            "INSERT INTO Post_Types (Post_id, Post_Type) VALUES (?1, ?2)",
            params![id, kind],
        )
        .unwrap();
        if let Some(c) = comments {
            conn.execute(
                "INSERT INTO Post_Comments (Post_id, comments) VALUES (?1, ?2)",
                params![id, c],
            )
            .unwrap();
        }
        if let Some(l) = likes {
            conn.execute(
                "INSERT INTO Post_Likes (Post_id, likes) VALUES (?1, ?2)",
                params![id, l],
            )
            .unwrap();
        }
    }
    db_path
}

/// Run arbitrary SQL against an existing fixture database (poison rows,
/// explicit NULLs, schema tweaks).
pub fn exec_sql(db_path: &Path, sql: &str) {
    let conn = Connection::open(db_path).unwrap();
    conn.execute_batch(sql).unwrap();
}

/// Read a file as a UTF-8 string.
pub fn read_text(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Parse an exported file into a JSON value.
pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&read_text(path)).unwrap()
}

/// Write a posts CSV (header + rows) for import tests.
pub fn write_csv(path: &Path, rows: &[(i64, &str, i64, i64)]) {
    let mut f = File::create(path).unwrap();
    writeln!(f, "Post_id,Post_Type,comments,likes").unwrap();
    for (id, kind, comments, likes) in rows {
        writeln!(f, "{id},{kind},{comments},{likes}").unwrap();
    }
}
