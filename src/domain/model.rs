use crate::utils::error::{LootboxError, Result};
use serde::{Deserialize, Serialize};

/// User-entered search text, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LootboxError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameMetadata {
    /// Canonical name, the key for every downstream lookup.
    pub name: String,
    pub image: String,
    pub description: String,
    pub release_date: String,
    pub platforms: Vec<String>,
    pub rating: Option<f64>,
}

/// Result of the metadata lookup: either a game or the error reported upstream.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataLookup {
    Found(GameMetadata),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceOffer {
    pub store_name: String,
    pub normal_price: f64,
    pub sale_price: f64,
    pub deal_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoCandidate {
    pub title: String,
    pub embed_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoLookup {
    /// The video service answered with a non-success status.
    Unavailable { status: u16 },
    Listed(Vec<VideoCandidate>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEntry {
    pub user_name: String,
    pub viewer_count: u64,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Panel {
    Metadata,
    Prices,
    Videos,
    Streams,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Metadata, Panel::Prices, Panel::Videos, Panel::Streams];

    /// Element id of the panel in the rendered page.
    pub fn id(self) -> &'static str {
        match self {
            Panel::Metadata => "metadata",
            Panel::Prices => "prices",
            Panel::Videos => "videos",
            Panel::Streams => "streams",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Panel::Metadata => "Game",
            Panel::Prices => "Prices",
            Panel::Videos => "Videos",
            Panel::Streams => "Live Streams",
        }
    }
}

/// Paths of the four lookup endpoints, relative to the service base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub game_info: String,
    pub prices: String,
    pub videos: String,
    pub streams: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            game_info: "/gameinfo".to_string(),
            prices: "/search_game".to_string(),
            videos: "/youtube".to_string(),
            streams: "/twitch".to_string(),
        }
    }
}

/// How the price, video and stream lookups are issued once the canonical name is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FanOut {
    #[default]
    Concurrent,
    Sequential,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Empty query; nothing was requested.
    Rejected,
    /// The metadata source reported an error and the pipeline stopped.
    MetadataError(String),
    Completed,
    /// A transport or parse failure aborted the pipeline.
    Failed,
}
