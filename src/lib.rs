pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::SearchConfig;

pub use adapters::{ConsoleNotifier, HttpGameSources, LocalStorage, PanelBoard, RecordingNotifier};
pub use crate::core::{orchestrator::SearchOrchestrator, relevance::filter_relevant};
pub use domain::model::{Panel, SearchOutcome};
pub use utils::error::{LootboxError, Result};
