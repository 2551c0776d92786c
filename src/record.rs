use serde::{Deserialize, Serialize};
use std::fmt;

/// One post's combined statistics — the unit serialized to the output file.
/// Field order here fixes the field order of the JSON projection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: i64,
    pub post_type: String,
    #[serde(default)]
    pub comments: i64,
    #[serde(default)]
    pub likes: i64,
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "post_id={} post_type={} comments={} likes={}",
            self.post_id, self.post_type, self.comments, self.likes
        )
    }
}
