// src/watch/mod.rs
//! Feed watcher: poll the news feeds, scan the newest entries for roster
//! mentions, write one update row per matched entry. Runs until killed.

pub mod rss;
pub mod types;

use std::time::Duration;

use anyhow::Result;
use chrono::Local;

use crate::watch::types::{ArtistUpdate, FeedEntry, FeedSource, UpdateSink};

/// K-pop news RSS feeds, polled in order.
pub const RSS_FEEDS: [&str; 2] = [
    "https://www.soompi.com/feed",
    "https://www.allkpop.com/feed",
];

/// Artists to track. Order doubles as match priority: the first name found
/// in an entry wins and the rest are not checked.
pub const TRACKED_ARTISTS: [&str; 11] = [
    "BTS", "BLACKPINK", "Stray Kids", "NewJeans", "SEVENTEEN", "aespa", "IVE", "TWICE", "ATEEZ",
    "TXT", "ENHYPEN",
];

/// Only the newest slice of each feed is inspected.
pub const LATEST_ENTRIES: usize = 10;

/// Fixed pause between polling cycles.
pub const POLL_INTERVAL: Duration = Duration::from_secs(3600);

/// Case-insensitive substring scan over title and description; the first
/// roster name found wins. Plain substring on purpose, so short names also
/// hit inside longer words.
pub fn match_entry<'a>(entry: &FeedEntry, roster: &[&'a str]) -> Option<&'a str> {
    let title = entry.title.to_lowercase();
    let description = entry.description.to_lowercase();
    roster
        .iter()
        .find(|name| {
            let needle = name.to_lowercase();
            title.contains(&needle) || description.contains(&needle)
        })
        .copied()
}

/// Scan up to [`LATEST_ENTRIES`] entries in document order and build one
/// update per matched entry.
pub fn scan_entries(source: &str, entries: &[FeedEntry], roster: &[&str]) -> Vec<ArtistUpdate> {
    let mut out = Vec::new();
    for entry in entries.iter().take(LATEST_ENTRIES) {
        if let Some(artist) = match_entry(entry, roster) {
            out.push(ArtistUpdate {
                artist_name: artist.to_string(),
                title: entry.title.clone(),
                url: entry.link.clone(),
                published: entry.published.clone(),
                source: source.to_string(),
            });
        }
    }
    out
}

/// Tallies for one polling cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    pub feeds_failed: usize,
    pub entries_scanned: usize,
    pub matches_saved: usize,
    pub saves_failed: usize,
}

/// One pass over every feed, sequentially. An unreachable or malformed feed
/// is logged and treated as empty for the cycle; a transport failure while
/// saving a match aborts the cycle.
pub async fn run_cycle<S: UpdateSink>(
    sources: &[Box<dyn FeedSource>],
    roster: &[&str],
    sink: &S,
) -> Result<CycleStats> {
    let mut stats = CycleStats::default();
    for source in sources {
        let entries = match source.fetch_latest().await {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(feed = source.url(), error = ?error, "feed fetch failed, treating as empty");
                stats.feeds_failed += 1;
                continue;
            }
        };
        stats.entries_scanned += entries.len().min(LATEST_ENTRIES);

        for update in scan_entries(source.url(), &entries, roster) {
            let reply = sink.save_update(&update).await?;
            if reply.is_created() {
                println!("✅ Saved to database");
                stats.matches_saved += 1;
            } else {
                tracing::warn!(
                    status = reply.status,
                    artist = %update.artist_name,
                    "update insert rejected"
                );
                println!("❌ Error: {}", reply.body);
                stats.saves_failed += 1;
            }
            println!("Found {} news: {}", update.artist_name, update.title);
        }
    }
    Ok(stats)
}

/// Poll forever: one cycle, fixed sleep, repeat. Returns only by error.
pub async fn run_forever<S: UpdateSink>(
    sources: &[Box<dyn FeedSource>],
    roster: &[&str],
    sink: &S,
    interval: Duration,
) -> Result<()> {
    loop {
        println!("Checking feeds at {}", Local::now());
        let stats = run_cycle(sources, roster, sink).await?;
        tracing::info!(
            feeds = sources.len(),
            feeds_failed = stats.feeds_failed,
            entries = stats.entries_scanned,
            saved = stats.matches_saved,
            rejected = stats.saves_failed,
            "cycle complete"
        );
        tokio::time::sleep(interval).await;
    }
}
