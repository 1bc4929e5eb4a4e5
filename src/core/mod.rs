pub mod orchestrator;
pub mod relevance;
pub mod render;

pub use crate::domain::model::{
    FanOut, GameMetadata, MetadataLookup, Panel, PriceOffer, Query, SearchOutcome, StreamEntry,
    VideoCandidate, VideoLookup,
};
pub use crate::domain::ports::{ConfigProvider, GameSources, Notifier, RenderTarget, Storage};
pub use crate::utils::error::Result;
