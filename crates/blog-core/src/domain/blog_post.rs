use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// BlogPost entity - a single post in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Fields submitted when creating a post. Absent fields are rejected by
/// [`BlogPost::create`].
#[derive(Debug, Clone, Default)]
pub struct NewBlogPost {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
}

/// Partial update. Only `title` and `content` are mutable.
#[derive(Debug, Clone, Default)]
pub struct BlogPostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogPost {
    pub const ENTITY_TYPE: &'static str = "BlogPost";

    /// Validate the submitted fields and build a post with a fresh id and
    /// creation timestamp.
    pub fn create(fields: NewBlogPost) -> Result<Self, DomainError> {
        let mut missing = Vec::new();
        let title = required("title", fields.title, &mut missing);
        let author = required("author", fields.author, &mut missing);
        let content = required("content", fields.content, &mut missing);

        match (title, author, content) {
            (Some(title), Some(author), Some(content)) => Ok(Self {
                id: Uuid::new_v4(),
                title,
                author,
                content,
                created_at: Utc::now(),
            }),
            _ => Err(DomainError::Validation(format!(
                "missing required field(s): {}",
                missing.join(", ")
            ))),
        }
    }

    /// Apply a partial update in place. Fields not present are left untouched.
    pub fn apply(&mut self, changes: BlogPostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
    }
}

impl BlogPostChanges {
    /// Present fields must not be blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        let blank: Vec<&str> = [("title", &self.title), ("content", &self.content)]
            .into_iter()
            .filter(|(_, value)| value.as_deref().is_some_and(|v| v.trim().is_empty()))
            .map(|(name, _)| name)
            .collect();

        if blank.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "field(s) must not be blank: {}",
                blank.join(", ")
            )))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

fn required(
    name: &'static str,
    value: Option<String>,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            missing.push(name);
            None
        }
    }
}
