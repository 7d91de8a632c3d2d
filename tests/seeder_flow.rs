// tests/seeder_flow.rs
use std::collections::HashSet;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use kpop_stagehand::seeder::{
    seed_artists, ArtistRow, ArtistStore, Presence, NEW_ARTISTS_2025,
};
use kpop_stagehand::store::StoreResponse;

/// In-memory store: a fixed set of pre-existing names plus a log of every
/// insert the seeder issues.
struct FakeStore {
    existing: HashSet<String>,
    inserted: Mutex<Vec<ArtistRow>>,
    reject_inserts: bool,
}

impl FakeStore {
    fn with_existing(names: &[&str]) -> Self {
        Self {
            existing: names.iter().map(|n| n.to_string()).collect(),
            inserted: Mutex::new(Vec::new()),
            reject_inserts: false,
        }
    }
}

#[async_trait]
impl ArtistStore for FakeStore {
    async fn lookup_by_name(&self, name: &str) -> Result<Presence> {
        Ok(if self.existing.contains(name) {
            Presence::Present
        } else {
            Presence::Absent
        })
    }

    async fn insert_artist(&self, row: &ArtistRow) -> Result<StoreResponse> {
        self.inserted.lock().unwrap().push(row.clone());
        Ok(if self.reject_inserts {
            StoreResponse {
                status: 409,
                body: "duplicate key value violates unique constraint".into(),
            }
        } else {
            StoreResponse {
                status: 201,
                body: String::new(),
            }
        })
    }
}

#[tokio::test]
async fn existing_artists_are_never_inserted() {
    let store = FakeStore::with_existing(&["RIIZE", "TWS"]);
    let report = seed_artists(&store, &NEW_ARTISTS_2025).await.unwrap();

    assert_eq!(report.skipped, 2);
    assert_eq!(report.added, 3);
    assert_eq!(report.failed, 0);

    let inserted = store.inserted.lock().unwrap();
    let names: Vec<&str> = inserted.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["BOYNEXTDOOR", "UNIS", "MEOVV"]);
}

#[tokio::test]
async fn missing_artists_get_exactly_one_insert_with_defaults() {
    let store = FakeStore::with_existing(&[]);
    let report = seed_artists(&store, &NEW_ARTISTS_2025).await.unwrap();

    assert_eq!(report.added, NEW_ARTISTS_2025.len());
    let inserted = store.inserted.lock().unwrap();
    assert_eq!(inserted.len(), NEW_ARTISTS_2025.len());
    for row in inserted.iter() {
        assert_eq!(row.genres, ["K-pop"]);
        assert_eq!(row.popularity, 50);
        assert_eq!(row.debut_year, 2025);
    }
}

#[tokio::test]
async fn rejected_insert_is_counted_and_the_batch_keeps_going() {
    let mut store = FakeStore::with_existing(&["UNIS"]);
    store.reject_inserts = true;
    let report = seed_artists(&store, &NEW_ARTISTS_2025).await.unwrap();

    assert_eq!(report.skipped, 1);
    assert_eq!(report.added, 0);
    assert_eq!(report.failed, 4);
    // Every non-existing artist was still attempted.
    assert_eq!(store.inserted.lock().unwrap().len(), 4);
}

/// A store whose lookups come back non-2xx: the row state is unknown, so the
/// seeder must not insert and must count the record as failed.
struct BrokenLookupStore;

#[async_trait]
impl ArtistStore for BrokenLookupStore {
    async fn lookup_by_name(&self, _name: &str) -> Result<Presence> {
        Ok(Presence::Failed {
            status: 401,
            body: r#"{"message":"Invalid API key"}"#.into(),
        })
    }

    async fn insert_artist(&self, _row: &ArtistRow) -> Result<StoreResponse> {
        panic!("insert must not be issued when the lookup failed");
    }
}

#[tokio::test]
async fn failed_lookup_skips_the_insert() {
    let report = seed_artists(&BrokenLookupStore, &NEW_ARTISTS_2025)
        .await
        .unwrap();
    assert_eq!(report.failed, NEW_ARTISTS_2025.len());
    assert_eq!(report.added, 0);
    assert_eq!(report.skipped, 0);
}
