// src/store.rs
//! Thin Supabase REST client for the two collections the utilities touch.
//! Transport failures are `Err`; non-2xx replies are data the callers report.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::config::StoreConfig;
use crate::seeder::{ArtistRow, ArtistStore, Presence};
use crate::watch::types::{ArtistUpdate, UpdateSink};

const ARTISTS_PATH: &str = "/rest/v1/artists";
const UPDATES_PATH: &str = "/rest/v1/artist_updates";

/// Status and body of a store write, kept around for the operator-facing
/// error lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreResponse {
    pub status: u16,
    pub body: String,
}

impl StoreResponse {
    /// The store answers inserts with 201 Created; anything else is a reject.
    pub fn is_created(&self) -> bool {
        self.status == 201
    }
}

/// REST client authenticated with the project's static anon key.
#[derive(Clone)]
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl SupabaseClient {
    /// Default `reqwest` client on purpose: timeouts stay at library
    /// defaults, and every call blocks its task until the store answers.
    pub fn new(cfg: StoreConfig) -> Self {
        Self {
            base_url: cfg.base_url,
            api_key: cfg.api_key,
            http: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ArtistStore for SupabaseClient {
    async fn lookup_by_name(&self, name: &str) -> Result<Presence> {
        let resp = self
            .http
            .get(self.endpoint(ARTISTS_PATH))
            .query(&[("name", format!("eq.{name}"))])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .send()
            .await
            .context("artist lookup request")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.context("reading lookup reject body")?;
            return Ok(Presence::Failed {
                status: status.as_u16(),
                body,
            });
        }

        let rows: Vec<serde_json::Value> =
            resp.json().await.context("decoding artist lookup rows")?;
        Ok(if rows.is_empty() {
            Presence::Absent
        } else {
            Presence::Present
        })
    }

    async fn insert_artist(&self, row: &ArtistRow) -> Result<StoreResponse> {
        let resp = self
            .http
            .post(self.endpoint(ARTISTS_PATH))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .context("artist insert request")?;

        let status = resp.status().as_u16();
        let body = resp.text().await.context("reading insert reply body")?;
        Ok(StoreResponse { status, body })
    }
}

#[async_trait]
impl UpdateSink for SupabaseClient {
    async fn save_update(&self, update: &ArtistUpdate) -> Result<StoreResponse> {
        let resp = self
            .http
            .post(self.endpoint(UPDATES_PATH))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(update)
            .send()
            .await
            .context("artist update insert request")?;

        let status = resp.status().as_u16();
        let body = resp.text().await.context("reading update reply body")?;
        Ok(StoreResponse { status, body })
    }
}
