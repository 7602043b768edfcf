//! In-memory application state for the post list screen.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::{ComposeForm, Post, PostCollection, PostKind};
use crate::error::StoreError;
use crate::ports::Clock;

use super::PostStore;

/// How a create reacts to a failed snapshot write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistMode {
    /// Update memory first, write through, log and swallow failures.
    #[default]
    BestEffort,
    /// Write first; only commit to memory once the write succeeded.
    Strict,
}

impl fmt::Display for PersistMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistMode::BestEffort => f.write_str("best-effort"),
            PersistMode::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for PersistMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "best-effort" | "best_effort" | "besteffort" => Ok(PersistMode::BestEffort),
            "strict" => Ok(PersistMode::Strict),
            other => Err(format!("unknown persist mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(Post),
    /// Content was empty after trimming. Nothing changed.
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Post),
    Rejected,
    NotOpen,
}

/// Owns the current post list and the compose form.
///
/// All mutation goes through `&mut self`, so there is exactly one writer.
pub struct PostListController {
    store: PostStore,
    clock: Arc<dyn Clock>,
    mode: PersistMode,
    posts: PostCollection,
    compose: ComposeForm,
}

impl PostListController {
    pub fn new(store: PostStore, clock: Arc<dyn Clock>, mode: PersistMode) -> Self {
        Self {
            store,
            clock,
            mode,
            posts: PostCollection::new(),
            compose: ComposeForm::default(),
        }
    }

    pub fn mode(&self) -> PersistMode {
        self.mode
    }

    /// Hydrate the list from the store. Never fails: an unreadable snapshot
    /// leaves the list empty.
    pub async fn initialize(&mut self) {
        match self.store.load().await {
            Ok(posts) => {
                tracing::info!(count = posts.len(), "Posts loaded");
                self.posts = posts;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load posts, starting empty");
                self.posts = PostCollection::new();
            }
        }
    }

    /// Create a post from `raw_content` and write the list through.
    ///
    /// Only [`PersistMode::Strict`] can return an error.
    pub async fn create_post(
        &mut self,
        kind: PostKind,
        raw_content: &str,
    ) -> Result<CreateOutcome, StoreError> {
        let Some(post) = Post::new(kind, raw_content, self.clock.now()) else {
            tracing::debug!(kind = %kind, "Rejected post with empty content");
            return Ok(CreateOutcome::Rejected);
        };

        match self.mode {
            PersistMode::BestEffort => {
                self.posts.prepend(post.clone());
                if let Err(e) = self.store.save(&self.posts).await {
                    tracing::error!(error = %e, post_id = %post.id, "Failed to save posts");
                }
            }
            PersistMode::Strict => {
                let mut next = self.posts.clone();
                next.prepend(post.clone());
                self.store.save(&next).await?;
                self.posts = next;
            }
        }

        tracing::info!(post_id = %post.id, kind = %post.kind, "Post created");
        Ok(CreateOutcome::Created(post))
    }

    /// Current posts, newest first.
    pub fn get_all(&self) -> &[Post] {
        self.posts.as_slice()
    }

    pub fn posts(&self) -> &PostCollection {
        &self.posts
    }

    pub fn compose(&self) -> &ComposeForm {
        &self.compose
    }

    pub fn start_compose(&mut self) {
        self.compose.start();
    }

    pub fn set_draft_kind(&mut self, kind: PostKind) -> bool {
        self.compose.set_kind(kind)
    }

    pub fn set_draft_content(&mut self, content: impl Into<String>) -> bool {
        self.compose.set_content(content)
    }

    pub fn cancel_compose(&mut self) {
        self.compose.cancel();
    }

    /// Submit the open draft. The form closes only when a post is created;
    /// otherwise the draft stays as it was.
    pub async fn submit_compose(&mut self) -> Result<SubmitOutcome, StoreError> {
        let Some(draft) = self.compose.draft().cloned() else {
            return Ok(SubmitOutcome::NotOpen);
        };

        match self.create_post(draft.kind, &draft.content).await? {
            CreateOutcome::Created(post) => {
                self.compose.cancel();
                Ok(SubmitOutcome::Created(post))
            }
            CreateOutcome::Rejected => Ok(SubmitOutcome::Rejected),
        }
    }
}
