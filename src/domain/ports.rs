use crate::domain::model::{
    Endpoints, FanOut, MetadataLookup, Panel, PriceOffer, Query, StreamEntry, VideoLookup,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The four upstream lookups. `Err` means a transport or parse failure;
/// per-source unavailability is expressed in the `Ok` value.
#[async_trait]
pub trait GameSources: Send + Sync {
    async fn game_info(&self, query: &Query) -> Result<MetadataLookup>;
    async fn price_offers(&self, canonical_name: &str) -> Result<Vec<PriceOffer>>;
    async fn videos(&self, canonical_name: &str) -> Result<VideoLookup>;
    async fn streams(&self, canonical_name: &str) -> Result<Vec<StreamEntry>>;
}

/// Four independently replaceable output slots.
pub trait RenderTarget: Send + Sync {
    fn render(&self, panel: Panel, html: String);
}

/// Secondary, user-facing notices (empty query, missing videos or streams).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn endpoints(&self) -> &Endpoints;
    fn fan_out(&self) -> FanOut;
    fn output_dir(&self) -> &str;
    fn page_name(&self) -> &str;
}
