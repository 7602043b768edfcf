use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// `pt-BR` date-time rendering, e.g. `19/10/2026, 14:03:22`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Request/offer discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PostKind {
    #[default]
    #[serde(rename = "pedido")]
    Request,
    #[serde(rename = "oferta")]
    Offer,
}

impl PostKind {
    /// Literal used in the persisted snapshot.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Request => "pedido",
            PostKind::Offer => "oferta",
        }
    }

    /// Heading shown above a post in the list.
    pub fn label(&self) -> &'static str {
        match self {
            PostKind::Request => "PEDIDO DE AJUDA",
            PostKind::Offer => "OFERTA DE AJUDA",
        }
    }

    /// Short label used by the kind selector.
    pub fn short_label(&self) -> &'static str {
        match self {
            PostKind::Request => "Pedido",
            PostKind::Offer => "Oferta",
        }
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pedido" | "request" => Ok(PostKind::Request),
            "oferta" | "offer" => Ok(PostKind::Offer),
            other => Err(format!("unknown post kind: {other}")),
        }
    }
}

/// Post entity - one help request or offer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub content: String,
    /// Display-only creation time, never parsed back.
    #[serde(rename = "timestamp")]
    pub created_at: String,
}

impl Post {
    /// Create a new post stamped with `now`.
    ///
    /// Returns `None` when `raw_content` is empty after trimming.
    /// The id is the creation instant in epoch milliseconds, so two posts
    /// created within the same millisecond share an id.
    pub fn new<Tz>(kind: PostKind, raw_content: &str, now: DateTime<Tz>) -> Option<Self>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let content = raw_content.trim();
        if content.is_empty() {
            return None;
        }

        Some(Self {
            id: now.timestamp_millis().to_string(),
            kind,
            content: content.to_string(),
            created_at: now.format(TIMESTAMP_FORMAT).to_string(),
        })
    }
}

/// Ordered posts, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostCollection(Vec<Post>);

impl PostCollection {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a post at the front. This is the only mutation.
    pub fn prepend(&mut self, post: Post) {
        self.0.insert(0, post);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Post> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Post] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Post> {
        self.0
    }
}

impl From<Vec<Post>> for PostCollection {
    fn from(posts: Vec<Post>) -> Self {
        Self(posts)
    }
}

impl<'a> IntoIterator for &'a PostCollection {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn instant() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2026-10-19T14:03:22.123-03:00").unwrap()
    }

    #[test]
    fn test_new_post_trims_and_stamps() {
        let post = Post::new(PostKind::Request, "  need milk  ", instant()).unwrap();

        assert_eq!(post.content, "need milk");
        assert_eq!(post.kind, PostKind::Request);
        assert_eq!(post.id, "1792429402123");
        assert_eq!(post.created_at, "19/10/2026, 14:03:22");
    }

    #[test]
    fn test_new_post_rejects_blank_content() {
        assert!(Post::new(PostKind::Offer, "", Utc::now()).is_none());
        assert!(Post::new(PostKind::Offer, " \t\n ", Utc::now()).is_none());
    }

    #[test]
    fn test_post_serializes_with_snapshot_field_names() {
        let post = Post::new(PostKind::Offer, "posso passear com cachorros", instant()).unwrap();
        let value = serde_json::to_value(&post).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": "1792429402123",
                "type": "oferta",
                "content": "posso passear com cachorros",
                "timestamp": "19/10/2026, 14:03:22",
            })
        );
    }

    #[test]
    fn test_unknown_kind_literal_is_rejected() {
        let raw = r#"{"id":"1","type":"troca","content":"x","timestamp":"t"}"#;
        assert!(serde_json::from_str::<Post>(raw).is_err());
    }

    #[test]
    fn test_kind_parsing_and_labels() {
        assert_eq!("pedido".parse::<PostKind>().unwrap(), PostKind::Request);
        assert_eq!(" Oferta ".parse::<PostKind>().unwrap(), PostKind::Offer);
        assert!("outro".parse::<PostKind>().is_err());
        assert_eq!(PostKind::default(), PostKind::Request);
        assert_eq!(PostKind::Request.label(), "PEDIDO DE AJUDA");
        assert_eq!(PostKind::Offer.label(), "OFERTA DE AJUDA");
    }

    #[test]
    fn test_collection_prepend_keeps_newest_first() {
        let mut posts = PostCollection::new();
        let a = Post::new(PostKind::Request, "a", instant()).unwrap();
        let b = Post::new(PostKind::Offer, "b", instant()).unwrap();

        posts.prepend(a.clone());
        posts.prepend(b.clone());

        assert_eq!(posts.as_slice(), &[b, a]);
        assert_eq!(serde_json::to_value(&posts).unwrap().as_array().unwrap().len(), 2);
    }
}
