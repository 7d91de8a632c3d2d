// src/seeder.rs
//! One-shot roster seeding: look up each hard-coded artist by exact name and
//! insert the missing ones with default metadata. Rows are never updated.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::store::StoreResponse;

/// Group type as stored in the `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    BoyGroup,
    GirlGroup,
}

/// One hard-coded roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedArtist {
    pub name: &'static str,
    pub group_type: GroupType,
    pub agency: &'static str,
}

/// New artists to add (update this list monthly as groups debut).
pub const NEW_ARTISTS_2025: [SeedArtist; 5] = [
    SeedArtist {
        name: "RIIZE",
        group_type: GroupType::BoyGroup,
        agency: "SM Entertainment",
    },
    SeedArtist {
        name: "BOYNEXTDOOR",
        group_type: GroupType::BoyGroup,
        agency: "HYBE",
    },
    SeedArtist {
        name: "TWS",
        group_type: GroupType::BoyGroup,
        agency: "PLEDIS",
    },
    SeedArtist {
        name: "UNIS",
        group_type: GroupType::GirlGroup,
        agency: "F&F Entertainment",
    },
    SeedArtist {
        name: "MEOVV",
        group_type: GroupType::GirlGroup,
        agency: "THEBLACKLABEL",
    },
];

pub const DEFAULT_GENRE: &str = "K-pop";
pub const DEFAULT_POPULARITY: u32 = 50;
pub const DEFAULT_DEBUT_YEAR: u32 = 2025;

/// Insert payload for the `artists` collection. `created_at` is left out so
/// the store's column default stamps the row server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistRow {
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: GroupType,
    pub agency: String,
    pub genres: Vec<String>,
    pub popularity: u32,
    pub debut_year: u32,
}

impl SeedArtist {
    pub fn insert_payload(&self) -> ArtistRow {
        ArtistRow {
            name: self.name.to_string(),
            group_type: self.group_type,
            agency: self.agency.to_string(),
            genres: vec![DEFAULT_GENRE.to_string()],
            popularity: DEFAULT_POPULARITY,
            debut_year: DEFAULT_DEBUT_YEAR,
        }
    }
}

/// Outcome of the by-name existence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    Present,
    Absent,
    /// The store answered with a non-2xx status; the row state is unknown.
    Failed { status: u16, body: String },
}

#[async_trait]
pub trait ArtistStore: Send + Sync {
    async fn lookup_by_name(&self, name: &str) -> Result<Presence>;
    async fn insert_artist(&self, row: &ArtistRow) -> Result<StoreResponse>;
}

/// Per-record tallies for a whole seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub added: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Walk the roster once, in order. Existing rows are skipped, rejected
/// lookups and inserts are counted and the batch keeps going; only a
/// transport error aborts the run.
pub async fn seed_artists<S: ArtistStore>(store: &S, roster: &[SeedArtist]) -> Result<SeedReport> {
    println!("🎵 Starting artist update - {}", Local::now());
    println!("{}", "-".repeat(40));

    let mut report = SeedReport::default();
    for artist in roster {
        match store.lookup_by_name(artist.name).await? {
            Presence::Present => {
                println!("⏭️  {} already exists, skipping...", artist.name);
                report.skipped += 1;
            }
            Presence::Absent => {
                let reply = store.insert_artist(&artist.insert_payload()).await?;
                if reply.is_created() {
                    println!("✅ Added {} successfully!", artist.name);
                    report.added += 1;
                } else {
                    println!("❌ Error adding {}: {}", artist.name, reply.body);
                    report.failed += 1;
                }
            }
            Presence::Failed { status, body } => {
                tracing::warn!(artist = artist.name, status, "artist lookup rejected");
                println!("❌ Error checking {}: {}", artist.name, body);
                report.failed += 1;
            }
        }
    }

    println!("{}", "-".repeat(40));
    println!("✨ Update complete! Added {} new artists.", report.added);
    Ok(report)
}
