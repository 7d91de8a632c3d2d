//! One-shot seeding of the hard-coded artist roster into the hosted store.

use kpop_stagehand::seeder::{self, NEW_ARTISTS_2025};
use kpop_stagehand::{init_tracing, StoreConfig, SupabaseClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local runs; a missing file is fine.
    let _ = dotenvy::dotenv();
    init_tracing();

    let store = SupabaseClient::new(StoreConfig::from_env());
    seeder::seed_artists(&store, &NEW_ARTISTS_2025).await?;
    Ok(())
}
