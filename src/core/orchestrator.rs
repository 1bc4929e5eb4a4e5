use crate::core::relevance::filter_relevant;
use crate::core::render;
use crate::domain::model::{FanOut, MetadataLookup, Panel, Query, SearchOutcome, VideoLookup};
use crate::domain::ports::{GameSources, Notifier, RenderTarget};
use crate::utils::error::Result;

/// Drives one search: metadata first, then prices, videos and streams keyed
/// by the canonical name, each rendered into its own panel.
pub struct SearchOrchestrator<G: GameSources, R: RenderTarget, N: Notifier> {
    sources: G,
    target: R,
    notifier: N,
    fan_out: FanOut,
}

impl<G: GameSources, R: RenderTarget, N: Notifier> SearchOrchestrator<G, R, N> {
    pub fn new(sources: G, target: R, notifier: N) -> Self {
        Self {
            sources,
            target,
            notifier,
            fan_out: FanOut::default(),
        }
    }

    pub fn with_fan_out(mut self, fan_out: FanOut) -> Self {
        self.fan_out = fan_out;
        self
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub async fn run_search(&self, raw_query: &str) -> SearchOutcome {
        let query = match Query::parse(raw_query) {
            Ok(query) => query,
            Err(e) => {
                tracing::warn!("Search rejected: {}", e);
                self.notifier.notify(render::EMPTY_QUERY_NOTICE);
                return SearchOutcome::Rejected;
            }
        };

        for panel in Panel::ALL {
            self.target.render(panel, render::loading());
        }

        tracing::info!("Searching for '{}'", query.as_str());

        match self.drive(&query).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(
                    "Search for '{}' failed: {} (Category: {:?})",
                    query.as_str(),
                    e,
                    e.category()
                );
                self.target
                    .render(Panel::Metadata, render::message(render::LOAD_FAILURE));
                SearchOutcome::Failed
            }
        }
    }

    async fn drive(&self, query: &Query) -> Result<SearchOutcome> {
        let game = match self.sources.game_info(query).await? {
            MetadataLookup::Found(game) => game,
            MetadataLookup::Failed(message) => {
                tracing::warn!("Metadata source reported: {}", message);
                self.target.render(Panel::Metadata, render::message(&message));
                self.target
                    .render(Panel::Prices, render::message(render::NO_OFFERS));
                self.target
                    .render(Panel::Videos, render::message(render::NO_VIDEOS));
                self.target
                    .render(Panel::Streams, render::message(render::NO_STREAMS));
                return Ok(SearchOutcome::MetadataError(message));
            }
        };

        self.target
            .render(Panel::Metadata, render::game_metadata(&game));

        let name = game.name.as_str();
        if name != query.as_str() {
            tracing::debug!("Canonical name '{}' for query '{}'", name, query.as_str());
        }

        match self.fan_out {
            FanOut::Sequential => {
                self.show_prices(name).await?;
                self.show_videos(name).await?;
                self.show_streams(name).await?;
            }
            FanOut::Concurrent => {
                let (prices, videos, streams) = tokio::join!(
                    self.show_prices(name),
                    self.show_videos(name),
                    self.show_streams(name)
                );

                let mut failures = [prices, videos, streams]
                    .into_iter()
                    .filter_map(|step| step.err());
                if let Some(first) = failures.next() {
                    for other in failures {
                        tracing::error!("Additional lookup failure for '{}': {}", name, other);
                    }
                    return Err(first);
                }
            }
        }

        tracing::info!("Search for '{}' completed", name);
        Ok(SearchOutcome::Completed)
    }

    async fn show_prices(&self, name: &str) -> Result<()> {
        let offers = self.sources.price_offers(name).await?;
        tracing::debug!("{} price offers for '{}'", offers.len(), name);

        let html = if offers.is_empty() {
            render::message(render::NO_OFFERS)
        } else {
            render::price_table(&offers)
        };
        self.target.render(Panel::Prices, html);
        Ok(())
    }

    async fn show_videos(&self, name: &str) -> Result<()> {
        let candidates = match self.sources.videos(name).await? {
            VideoLookup::Listed(candidates) => candidates,
            VideoLookup::Unavailable { status } => {
                tracing::warn!("Video lookup for '{}' returned status {}", name, status);
                self.videos_unavailable();
                return Ok(());
            }
        };

        let relevant = filter_relevant(&candidates, name);
        tracing::debug!(
            "{} of {} videos relevant to '{}'",
            relevant.len(),
            candidates.len(),
            name
        );

        if relevant.is_empty() {
            self.videos_unavailable();
        } else {
            self.target
                .render(Panel::Videos, render::video_players(&relevant));
        }
        Ok(())
    }

    fn videos_unavailable(&self) {
        self.target
            .render(Panel::Videos, render::message(render::NO_VIDEOS));
        self.notifier.notify(render::NO_VIDEOS_NOTICE);
    }

    async fn show_streams(&self, name: &str) -> Result<()> {
        let streams = self.sources.streams(name).await?;
        tracing::debug!("{} live streams for '{}'", streams.len(), name);

        if streams.is_empty() {
            self.target
                .render(Panel::Streams, render::message(render::NO_STREAMS));
            self.notifier.notify(render::NO_STREAMS_NOTICE);
        } else {
            self.target
                .render(Panel::Streams, render::stream_cards(&streams));
        }
        Ok(())
    }
}
