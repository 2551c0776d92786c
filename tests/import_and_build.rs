#[path = "common/mod.rs"]
mod common;

use common::*;
use petl::{split_posts_csv, PostsEtl};
use serde_json::json;

/// Splitting a well-formed CSV yields the three per-table row sets, in
/// source order.
#[test]
fn csv_splits_into_three_row_sets() {
    let csv = "\
Post_id,Post_Type,comments,likes
101,Carousel,268,16382
102,Reel,138,9267
103,Reel,1089,10100
104,Reel,271,6943
105,Reel,145,17158
";

    let split = split_posts_csv(csv).unwrap();

    assert_eq!(
        split.types,
        vec![
            (101, "Carousel".to_string()),
            (102, "Reel".to_string()),
            (103, "Reel".to_string()),
            (104, "Reel".to_string()),
            (105, "Reel".to_string()),
        ]
    );
    assert_eq!(
        split.comments,
        vec![(101, 268), (102, 138), (103, 1089), (104, 271), (105, 145)]
    );
    assert_eq!(
        split.likes,
        vec![
            (101, 16382),
            (102, 9267),
            (103, 10100),
            (104, 6943),
            (105, 17158),
        ]
    );
    assert_eq!(split.row_count(), 5);
}

/// A CSV whose header does not match the expected columns is rejected
/// outright.
#[test]
fn csv_header_mismatch_is_rejected() {
    let err = split_posts_csv("id,type,comments,likes\n1,photo,2,3\n").unwrap_err();
    assert!(err.to_string().contains("header"), "got {err:#}");
}

/// Field parse failures name the offending 1-based line.
#[test]
fn csv_bad_integer_reports_line_number() {
    let csv = "\
Post_id,Post_Type,comments,likes
1,photo,2,3
2,video,many,4
";
    let err = split_posts_csv(csv).unwrap_err();
    assert!(err.to_string().contains("line 3"), "got {err:#}");
}

/// Blank lines between rows are skipped, not errors.
#[test]
fn csv_blank_lines_are_skipped() {
    let csv = "Post_id,Post_Type,comments,likes\n1,photo,2,3\n\n2,video,4,5\n";
    let split = split_posts_csv(csv).unwrap();
    assert_eq!(split.row_count(), 2);
}

/// A row with the wrong field count is rejected with its line number.
#[test]
fn csv_short_row_is_rejected() {
    let csv = "Post_id,Post_Type,comments,likes\n1,photo,2\n";
    let err = split_posts_csv(csv).unwrap_err();
    assert!(err.to_string().contains("line 2"), "got {err:#}");
}

/// Full pipeline: CSV → database → JSON. The exported records must match
/// the source rows exactly.
#[test]
fn build_database_then_export_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("posts.csv");
    write_csv(&csv, &[(1, "photo", 3, 10), (2, "video", 0, 5)]);
    let db = dir.path().join("database").join("social_posts.db");
    let out = dir.path().join("posts.json");

    let etl = PostsEtl::new()
        .csv_path(&csv)
        .db_path(&db)
        .out_path(&out)
        .progress(false);
    etl.clone().build_database().unwrap();
    let count = etl.export_to_json().unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        read_json(&out),
        json!([
            {"post_id": 1, "post_type": "photo", "comments": 3, "likes": 10},
            {"post_id": 2, "post_type": "video", "comments": 0, "likes": 5},
        ])
    );
}

/// Rebuilding drops the old tables: the second CSV fully replaces the first.
#[test]
fn rebuild_replaces_existing_rows() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("posts.csv");
    let db = dir.path().join("social_posts.db");
    let out = dir.path().join("posts.json");

    let etl = PostsEtl::new()
        .csv_path(&csv)
        .db_path(&db)
        .out_path(&out)
        .progress(false);

    write_csv(&csv, &[(1, "photo", 3, 10), (2, "video", 0, 5)]);
    etl.clone().build_database().unwrap();

    write_csv(&csv, &[(7, "story", 1, 2)]);
    etl.clone().build_database().unwrap();
    let count = etl.export_to_json().unwrap();

    assert_eq!(count, 1);
    assert_eq!(
        read_json(&out),
        json!([{"post_id": 7, "post_type": "story", "comments": 1, "likes": 2}])
    );
}

/// A missing source CSV fails the build with the path in the error chain.
#[test]
fn build_fails_on_missing_csv() {
    let dir = tempfile::tempdir().unwrap();
    let err = PostsEtl::new()
        .csv_path(dir.path().join("absent.csv"))
        .db_path(dir.path().join("social_posts.db"))
        .progress(false)
        .build_database()
        .unwrap_err();
    assert!(format!("{err:#}").contains("absent.csv"), "got {err:#}");
}
