// src/watch/types.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::store::StoreResponse;

/// One feed entry, entity-decoded. Fields the feed omits become `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub published: String,
    pub description: String,
}

/// Insert payload for the `artist_updates` collection. `published` is the
/// feed's own `pubDate` text, stored unparsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistUpdate {
    pub artist_name: String,
    pub title: String,
    pub url: String,
    pub published: String,
    pub source: String,
}

#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Entries in document order, newest first as served by the feed.
    async fn fetch_latest(&self) -> Result<Vec<FeedEntry>>;
    /// Feed URL, recorded as the `source` of every match.
    fn url(&self) -> &str;
}

#[async_trait::async_trait]
pub trait UpdateSink: Send + Sync {
    async fn save_update(&self, update: &ArtistUpdate) -> Result<StoreResponse>;
}
