use anyhow::Result;
use petl::{read_posts_json, render_report, PostsEtl};
use std::fs;
use std::path::Path;

const DB_PATH: &str = "./database/social_posts.db";
const JSON_OUTPUT_PATH: &str = "./data/posts.json";

fn main() -> Result<()> {
    let out_path = Path::new(JSON_OUTPUT_PATH);
    if let Some(dir) = out_path.parent() {
        fs::create_dir_all(dir)?;
    }

    let count = PostsEtl::new()
        .db_path(DB_PATH)
        .out_path(out_path)
        .progress(true)
        .export_to_json()?;

    println!("Successfully queried and processed {count} posts.");
    println!("Successfully saved combined post data to {JSON_OUTPUT_PATH}");
    println!();

    let posts = read_posts_json(out_path)?;
    print!("{}", render_report(&posts));

    Ok(())
}
