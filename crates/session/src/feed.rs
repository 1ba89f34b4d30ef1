//! Feed tab: posts with likes, reactions and comments.
//!
//! Initial like counts come from a seeded RNG so a given seed always
//! renders the same feed.

use catalog::{Catalog, FeedPost, PostId, Profile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use tracing::debug;

/// Range initial like counts are drawn from
pub const INITIAL_LIKES: Range<u32> = 5..25;

/// Reactions offered on every post
pub const REACTIONS: [&str; 6] = ["👍", "🎉", "❤️", "🚀", "🙌", "👏"];

/// A post as displayed, with its author and like state
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub post: FeedPost,
    pub author: Profile,
    pub likes: u32,
    pub liked: bool,
    /// Comments added this session, oldest first
    pub comments: Vec<String>,
}

pub struct FeedSession {
    entries: Vec<FeedEntry>,
}

impl FeedSession {
    /// Build the feed from the catalog. Posts whose author is unknown are
    /// left out.
    pub fn new(catalog: &Catalog, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let entries = catalog
            .feed()
            .iter()
            .filter_map(|post| {
                let author = catalog.profile(post.author_id)?.clone();
                Some(FeedEntry {
                    post: post.clone(),
                    author,
                    likes: rng.random_range(INITIAL_LIKES),
                    liked: false,
                    comments: Vec::new(),
                })
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    /// Like or unlike a post. Returns the new like count, or `None` for an
    /// unknown post.
    pub fn toggle_like(&mut self, post_id: PostId) -> Option<u32> {
        let entry = self.entry_mut(post_id)?;
        if entry.liked {
            entry.likes -= 1;
        } else {
            entry.likes += 1;
        }
        entry.liked = !entry.liked;
        debug!("Post {} liked={} likes={}", post_id, entry.liked, entry.likes);
        Some(entry.likes)
    }

    /// React to a post with one of [`REACTIONS`]. A reaction always counts
    /// as one more like and leaves the post liked, even if it already was.
    ///
    /// Returns the new like count, or `None` for an unknown post or emoji.
    pub fn react(&mut self, post_id: PostId, emoji: &str) -> Option<u32> {
        if !REACTIONS.contains(&emoji) {
            debug!("Unsupported reaction {:?}", emoji);
            return None;
        }
        let entry = self.entry_mut(post_id)?;
        entry.liked = true;
        entry.likes += 1;
        debug!("Post {} reacted {} likes={}", post_id, emoji, entry.likes);
        Some(entry.likes)
    }

    /// Append a comment. Blank text and unknown posts are rejected.
    pub fn add_comment(&mut self, post_id: PostId, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        match self.entry_mut(post_id) {
            Some(entry) => {
                entry.comments.push(text.to_string());
                debug!("Post {} has {} comments", post_id, entry.comments.len());
                true
            }
            None => false,
        }
    }

    fn entry_mut(&mut self, post_id: PostId) -> Option<&mut FeedEntry> {
        self.entries.iter_mut().find(|e| e.post.id == post_id)
    }
}
