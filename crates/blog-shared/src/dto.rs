//! Data Transfer Objects - request/response types for the `/blogposts` API.

use serde::{Deserialize, Serialize};

/// POST /blogposts body. Fields are optional on the wire so that a missing
/// field is reported as a validation failure rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
}

/// PUT /blogposts/:id body. Unknown fields such as `author` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A single post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created_at: String,
}

/// GET /blogposts body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostListResponse {
    pub blogposts: Vec<BlogPostResponse>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_uses_camel_case_timestamp() {
        let post = BlogPostResponse {
            id: "1".to_string(),
            title: "t".to_string(),
            author: "a".to_string(),
            content: "c".to_string(),
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        };
        let value = serde_json::to_value(&post).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["author", "content", "createdAt", "id", "title"]);
    }

    #[test]
    fn create_request_tolerates_missing_fields() {
        let req: CreateBlogPostRequest = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("x"));
        assert!(req.author.is_none());
        assert!(req.content.is_none());
    }
}
