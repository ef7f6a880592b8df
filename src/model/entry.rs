use crate::link::parse_video_id;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single video in the playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Identifier assigned by the store, never reused
    pub id: u64,

    /// Display title
    #[serde(rename = "nombre")]
    pub title: String,

    /// Video link as entered by the user
    pub link: String,

    /// Number of likes, only ever incremented
    #[serde(rename = "likes")]
    pub like_count: u64,

    /// Favorite flag
    #[serde(rename = "favorito")]
    pub is_favorite: bool,
}

impl Entry {
    /// Create a fresh entry with no likes, not marked as favorite
    pub fn new(id: u64, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self::with_stats(id, title, link, 0, false)
    }

    /// Create an entry with existing like count and favorite flag
    pub fn with_stats(
        id: u64,
        title: impl Into<String>,
        link: impl Into<String>,
        like_count: u64,
        is_favorite: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            link: link.into(),
            like_count,
            is_favorite,
        }
    }

    /// Add one like
    pub fn like(&mut self) {
        self.like_count = self.like_count.saturating_add(1);
    }

    /// Flip the favorite flag
    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }

    /// Video identifier extracted from the link
    pub fn video_id(&self) -> Option<String> {
        parse_video_id(&self.link)
    }

    /// Player URL for embedding the video in a page
    pub fn embed_url(&self) -> Option<String> {
        self.video_id()
            .map(|id| format!("https://www.youtube.com/embed/{}", id))
    }

    /// Preview image URL
    pub fn thumbnail_url(&self) -> Option<String> {
        self.video_id()
            .map(|id| format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let star = if self.is_favorite { "★" } else { " " };
        write!(
            f,
            "{:>4} {} {} ({} likes) {}",
            self.id, star, self.title, self.like_count, self.link
        )
    }
}
