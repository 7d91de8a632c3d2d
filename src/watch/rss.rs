// src/watch/rss.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::watch::types::{FeedEntry, FeedSource};

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(default, rename = "item")]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
}

enum Mode {
    Http { client: reqwest::Client },
    Fixture(String),
}

/// Generic RSS 2.0 source; both news sites serve the same channel/item shape.
pub struct RssFeed {
    url: String,
    mode: Mode,
}

impl RssFeed {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: Mode::Http {
                client: reqwest::Client::new(),
            },
        }
    }

    /// Parse canned XML instead of fetching; `url` still labels the matches.
    pub fn from_xml(url: impl Into<String>, xml: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: Mode::Fixture(xml.into()),
        }
    }

    fn parse_entries(xml: &str) -> Result<Vec<FeedEntry>> {
        let clean = scrub_html_entities_for_xml(xml);
        let rss: Rss = from_str(&clean).context("parsing rss xml")?;
        Ok(rss
            .channel
            .item
            .into_iter()
            .map(|it| FeedEntry {
                title: decode_entities(it.title),
                link: decode_entities(it.link),
                published: it.pub_date.unwrap_or_default(),
                description: decode_entities(it.description),
            })
            .collect())
    }
}

#[async_trait]
impl FeedSource for RssFeed {
    async fn fetch_latest(&self) -> Result<Vec<FeedEntry>> {
        match &self.mode {
            Mode::Fixture(xml) => Self::parse_entries(xml),
            Mode::Http { client } => {
                let body = client
                    .get(&self.url)
                    .send()
                    .await
                    .with_context(|| format!("fetching {}", self.url))?
                    .text()
                    .await
                    .with_context(|| format!("reading body of {}", self.url))?;
                Self::parse_entries(&body)
            }
        }
    }

    fn url(&self) -> &str {
        &self.url
    }
}

fn decode_entities(field: Option<String>) -> String {
    field
        .map(|s| html_escape::decode_html_entities(&s).into_owned())
        .unwrap_or_default()
}

/// Bare named entities are invalid XML; swap the usual offenders before the
/// parser sees them. Numeric references survive for the real decode above.
fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}
