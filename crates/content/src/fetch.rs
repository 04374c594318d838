use crate::post::PostDocument;
use thiserror::Error;

/// Failure surfaced by the content-fetch collaborator.
///
/// The core never retries; retry policy, if any, belongs to the HTTP layer
/// behind the [`PostSource`] implementation.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("post not found: {author}/{permlink}")]
    NotFound { author: String, permlink: String },

    /// Upstream status is passed through unmodified for the caller to act on.
    #[error("upstream failure (status {status})")]
    Upstream { status: u16 },

    #[error("malformed post document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Source of post documents, keyed by `(author, permlink)`.
///
/// Implementations wrap whatever transport the content platform exposes; the
/// map core only ever sees the returned document.
pub trait PostSource {
    fn fetch(&self, author: &str, permlink: &str) -> Result<PostDocument, FetchError>;
}

/// In-memory source for tests and offline fixtures.
#[derive(Debug, Default)]
pub struct StaticPostSource {
    posts: Vec<PostDocument>,
}

impl StaticPostSource {
    pub fn new(posts: Vec<PostDocument>) -> Self {
        Self { posts }
    }
}

impl PostSource for StaticPostSource {
    fn fetch(&self, author: &str, permlink: &str) -> Result<PostDocument, FetchError> {
        self.posts
            .iter()
            .find(|p| p.author == author && p.permlink == permlink)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                author: author.to_string(),
                permlink: permlink.to_string(),
            })
    }
}
