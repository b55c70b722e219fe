use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//===================================================
// Post
//===================================================

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: PostAuthor,
    /// Publish date shown on the card; not every payload carries one.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    pub username: String,
}

/// Envelope of the `GET /api/v1/posts` payload.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_payload() {
        let payload = r#"{
            "posts": [
                {
                    "title": "Hello",
                    "description": "First post",
                    "tags": ["Go", "Rust"],
                    "author": { "username": "alice123" },
                    "createdAt": "2024-05-01T12:00:00Z"
                },
                {
                    "title": "Bare",
                    "description": "No tags, no date",
                    "author": { "username": "bob" }
                }
            ]
        }"#;

        let response: PostsResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.posts.len(), 2);
        assert_eq!(response.posts[0].tags, vec!["Go", "Rust"]);
        assert_eq!(response.posts[0].author.username, "alice123");
        assert!(response.posts[0].created_at.is_some());
        assert!(response.posts[1].tags.is_empty());
        assert!(response.posts[1].created_at.is_none());
    }
}
