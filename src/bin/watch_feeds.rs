//! Endless RSS polling loop: scan the K-pop news feeds for tracked artists
//! and record every match in the hosted store. Stops only when killed.

use kpop_stagehand::watch::rss::RssFeed;
use kpop_stagehand::watch::types::FeedSource;
use kpop_stagehand::watch::{self, POLL_INTERVAL, RSS_FEEDS, TRACKED_ARTISTS};
use kpop_stagehand::{init_tracing, StoreConfig, SupabaseClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local runs; a missing file is fine.
    let _ = dotenvy::dotenv();
    init_tracing();

    let sources: Vec<Box<dyn FeedSource>> = RSS_FEEDS
        .iter()
        .map(|url| Box::new(RssFeed::from_url(*url)) as Box<dyn FeedSource>)
        .collect();
    let sink = SupabaseClient::new(StoreConfig::from_env());

    watch::run_forever(&sources, &TRACKED_ARTISTS, &sink, POLL_INTERVAL).await
}
