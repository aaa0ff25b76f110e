//! Per-page discussion threads. New posts are prepended; there is no edit,
//! delete, or pagination, and the full history renders every time.

use serde::{Deserialize, Serialize};

/// Storage key for one page's comment thread.
#[must_use]
pub fn storage_key(page_id: &str) -> String {
    format!("comments_{page_id}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub username: String,
    pub text: String,
    pub timestamp: String,
}

/// Ordered sequence of posts, newest first.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Thread {
    posts: Vec<Post>,
}

impl Thread {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Prepend a post. Whitespace-only bodies are rejected and leave the
    /// thread untouched; accepted bodies are stored raw, untrimmed.
    pub fn post(&mut self, id: u64, username: &str, text: &str, timestamp: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.posts.insert(
            0,
            Post {
                id,
                username: username.to_string(),
                text: text.to_string(),
                timestamp: timestamp.to_string(),
            },
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_posts_land_at_index_zero() {
        let mut thread = Thread::new();
        assert!(thread.post(1, "Alice", "first", "t1"));
        assert!(thread.post(2, "Bob", "second", "t2"));
        assert_eq!(thread.posts()[0].username, "Bob");
        assert_eq!(thread.posts()[1].username, "Alice");
    }

    #[test]
    fn blank_bodies_never_append() {
        let mut thread = Thread::new();
        assert!(!thread.post(1, "Alice", "", "t"));
        assert!(!thread.post(2, "Alice", "   \n\t", "t"));
        assert!(thread.is_empty());
    }

    #[test]
    fn accepted_text_is_stored_raw() {
        let mut thread = Thread::new();
        assert!(thread.post(1, "Alice", "  spaced out  ", "t"));
        assert_eq!(thread.posts()[0].text, "  spaced out  ");
    }

    #[test]
    fn ordering_survives_a_round_trip() {
        let mut thread = Thread::new();
        thread.post(1, "Alice", "first", "t1");
        thread.post(2, "Bob", "second", "t2");
        let json = serde_json::to_string(&thread).expect("serializes");
        let back: Thread = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, thread);
        assert_eq!(back.posts()[0].id, 2);
    }

    #[test]
    fn post_objects_keep_their_wire_shape() {
        let mut thread = Thread::new();
        thread.post(7, "Alice", "hi", "1/1/2026, 10:00:00 AM");
        let json = serde_json::to_string(&thread).expect("serializes");
        assert!(json.contains(r#""id":7"#));
        assert!(json.contains(r#""username":"Alice""#));
        assert!(json.contains(r#""text":"hi""#));
        assert!(json.contains(r#""timestamp":"1/1/2026, 10:00:00 AM""#));
    }
}
