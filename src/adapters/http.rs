use crate::core::{
    ConfigProvider, GameMetadata, GameSources, MetadataLookup, PriceOffer, Query, StreamEntry,
    VideoCandidate, VideoLookup,
};
use crate::domain::model::Endpoints;
use crate::utils::error::{LootboxError, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

/// `GameSources` backed by the four JSON endpoints of the lookup service.
#[derive(Debug, Clone)]
pub struct HttpGameSources {
    client: Client,
    base_url: String,
    endpoints: Endpoints,
}

impl HttpGameSources {
    pub fn new(base_url: &str, endpoints: Endpoints) -> Result<Self> {
        Url::parse(base_url)?;

        Ok(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoints,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.base_url(), config.endpoints().clone())
    }

    fn endpoint_url(&self, path: &str, key: &str, value: &str) -> Result<Url> {
        let raw = format!(
            "{}{}?{}={}",
            self.base_url,
            path,
            key,
            urlencoding::encode(value)
        );
        Ok(Url::parse(&raw)?)
    }

    async fn get(&self, path: &str, key: &str, value: &str) -> Result<Response> {
        let url = self.endpoint_url(path, key, value)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Upstream amounts arrive either as JSON numbers or as numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    fn value(&self) -> Option<f64> {
        match self {
            Amount::Number(n) => Some(*n),
            Amount::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GameInfoPayload {
    error: Option<String>,
    name: Option<String>,
    image: Option<String>,
    description: Option<String>,
    release_date: Option<String>,
    platforms: Option<Vec<String>>,
    rating: Option<Amount>,
}

impl GameInfoPayload {
    fn into_lookup(self) -> Result<MetadataLookup> {
        if let Some(error) = self.error {
            return Ok(MetadataLookup::Failed(error));
        }

        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| LootboxError::MalformedResponse {
                source_name: "gameinfo",
                reason: "response carries neither an error nor a name".to_string(),
            })?;

        Ok(MetadataLookup::Found(GameMetadata {
            name,
            image: self.image.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            release_date: self.release_date.unwrap_or_default(),
            platforms: self.platforms.unwrap_or_default(),
            rating: self.rating.and_then(|rating| rating.value()),
        }))
    }
}

#[derive(Debug, Deserialize)]
struct PricePayload {
    price: Option<Vec<PriceOfferPayload>>,
}

#[derive(Debug, Deserialize)]
struct PriceOfferPayload {
    title: String,
    #[serde(rename = "normalPrice")]
    normal_price: Amount,
    #[serde(rename = "salePrice")]
    sale_price: Amount,
    #[serde(rename = "dealLink")]
    deal_link: String,
}

impl PriceOfferPayload {
    fn into_offer(self) -> Result<PriceOffer> {
        let invalid = |field: &str| LootboxError::MalformedResponse {
            source_name: "search_game",
            reason: format!("{} of '{}' is not a number", field, self.title),
        };
        let normal_price = self.normal_price.value().ok_or_else(|| invalid("normalPrice"))?;
        let sale_price = self.sale_price.value().ok_or_else(|| invalid("salePrice"))?;

        Ok(PriceOffer {
            store_name: self.title,
            normal_price,
            sale_price,
            deal_link: self.deal_link,
        })
    }
}

#[derive(Debug, Deserialize)]
struct VideoPayload {
    videos: Option<Vec<VideoCandidate>>,
}

#[derive(Debug, Deserialize)]
struct StreamPayload {
    data: Option<Vec<StreamEntry>>,
}

#[async_trait::async_trait]
impl GameSources for HttpGameSources {
    async fn game_info(&self, query: &Query) -> Result<MetadataLookup> {
        // Errors come back as JSON bodies with 4xx/5xx statuses, so the body is read regardless.
        let response = self
            .get(&self.endpoints.game_info, "query", query.as_str())
            .await?;
        let payload: GameInfoPayload = decode(response).await?;
        payload.into_lookup()
    }

    async fn price_offers(&self, canonical_name: &str) -> Result<Vec<PriceOffer>> {
        let response = self
            .get(&self.endpoints.prices, "name", canonical_name)
            .await?;

        if !response.status().is_success() {
            tracing::warn!(
                "Price lookup for '{}' returned status {}",
                canonical_name,
                response.status()
            );
            return Ok(Vec::new());
        }

        let payload: PricePayload = decode(response).await?;
        payload
            .price
            .unwrap_or_default()
            .into_iter()
            .map(PriceOfferPayload::into_offer)
            .collect()
    }

    async fn videos(&self, canonical_name: &str) -> Result<VideoLookup> {
        let response = self
            .get(&self.endpoints.videos, "query", canonical_name)
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Ok(VideoLookup::Unavailable {
                status: status.as_u16(),
            });
        }

        let payload: VideoPayload = decode(response).await?;
        Ok(VideoLookup::Listed(payload.videos.unwrap_or_default()))
    }

    async fn streams(&self, canonical_name: &str) -> Result<Vec<StreamEntry>> {
        let response = self
            .get(&self.endpoints.streams, "game", canonical_name)
            .await?;

        if !response.status().is_success() {
            tracing::warn!(
                "Stream lookup for '{}' returned status {}",
                canonical_name,
                response.status()
            );
            return Ok(Vec::new());
        }

        let payload: StreamPayload = decode(response).await?;
        Ok(payload.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn sources(server: &MockServer) -> HttpGameSources {
        HttpGameSources::new(&server.base_url(), Endpoints::default()).unwrap()
    }

    #[tokio::test]
    async fn test_game_info_parses_metadata() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/gameinfo").query_param("query", "zelda");
                then.status(200).json_body(serde_json::json!({
                    "name": "The Legend of Zelda",
                    "description": "Classic",
                    "image": "https://img.example/zelda.jpg",
                    "release_date": "1986-02-21",
                    "rating": "4.4",
                    "platforms": ["NES", "Wii U"]
                }));
            })
            .await;

        let query = Query::parse("zelda").unwrap();
        let lookup = sources(&server).game_info(&query).await.unwrap();

        mock.assert_async().await;
        match lookup {
            MetadataLookup::Found(game) => {
                assert_eq!(game.name, "The Legend of Zelda");
                assert_eq!(game.platforms, vec!["NES", "Wii U"]);
                assert_eq!(game.rating, Some(4.4));
            }
            other => panic!("expected metadata, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_game_info_error_body_with_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/gameinfo");
                then.status(404)
                    .json_body(serde_json::json!({"error": "Game not found"}));
            })
            .await;

        let query = Query::parse("nothing like this").unwrap();
        let lookup = sources(&server).game_info(&query).await.unwrap();

        assert_eq!(lookup, MetadataLookup::Failed("Game not found".to_string()));
    }

    #[tokio::test]
    async fn test_game_info_without_name_is_malformed() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/gameinfo");
                then.status(200).json_body(serde_json::json!({"rating": 3.0}));
            })
            .await;

        let query = Query::parse("zelda").unwrap();
        let result = sources(&server).game_info(&query).await;

        assert!(matches!(result, Err(LootboxError::MalformedResponse { .. })));
    }

    #[tokio::test]
    async fn test_price_offers_accept_string_amounts() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/search_game")
                    .query_param("name", "The Legend of Zelda");
                then.status(200).json_body(serde_json::json!({
                    "price": [
                        {"title": "Store A", "normalPrice": "19.99", "salePrice": "4.99", "dealLink": "https://deals.example/a"},
                        {"title": "Store B", "normalPrice": 29.5, "salePrice": 10, "dealLink": "https://deals.example/b"}
                    ]
                }));
            })
            .await;

        let offers = sources(&server)
            .price_offers("The Legend of Zelda")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].store_name, "Store A");
        assert_eq!(offers[0].normal_price, 19.99);
        assert_eq!(offers[1].sale_price, 10.0);
    }

    #[tokio::test]
    async fn test_price_failure_status_is_no_offers() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search_game");
                then.status(500).body("upstream exploded");
            })
            .await;

        let offers = sources(&server).price_offers("Hades").await.unwrap();

        assert!(offers.is_empty());
    }

    #[tokio::test]
    async fn test_videos_failure_status_is_unavailable() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/youtube").query_param("query", "Hades");
                then.status(404)
                    .json_body(serde_json::json!({"error": "No videos"}));
            })
            .await;

        let lookup = sources(&server).videos("Hades").await.unwrap();

        assert_eq!(lookup, VideoLookup::Unavailable { status: 404 });
    }

    #[tokio::test]
    async fn test_videos_missing_field_is_empty_list() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/youtube");
                then.status(200).json_body(serde_json::json!({}));
            })
            .await;

        let lookup = sources(&server).videos("Hades").await.unwrap();

        assert_eq!(lookup, VideoLookup::Listed(vec![]));
    }

    #[tokio::test]
    async fn test_streams_parse_entries() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/twitch").query_param("game", "Hades");
                then.status(200).json_body(serde_json::json!({
                    "data": [{
                        "user_name": "speedy",
                        "viewer_count": 321,
                        "title": "Heat 32 attempts",
                        "thumbnail_url": "https://thumbs.example/speedy-300x200.jpg",
                        "embed_url": "https://player.twitch.tv/?channel=speedy"
                    }]
                }));
            })
            .await;

        let streams = sources(&server).streams("Hades").await.unwrap();

        assert_eq!(streams.len(), 1);
        assert_eq!(streams[0].user_name, "speedy");
        assert_eq!(streams[0].viewer_count, 321);
    }

    #[tokio::test]
    async fn test_malformed_json_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/twitch");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let result = sources(&server).streams("Hades").await;

        assert!(matches!(result, Err(LootboxError::SerializationError(_))));
    }

    #[test]
    fn test_endpoint_url_percent_encodes_value() {
        let sources = HttpGameSources::new("http://localhost:5000/", Endpoints::default()).unwrap();
        let url = sources
            .endpoint_url("/search_game", "name", "Ori & the Blind Forest")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/search_game?name=Ori%20%26%20the%20Blind%20Forest"
        );
    }
}
