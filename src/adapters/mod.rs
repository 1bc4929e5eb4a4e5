// Adapters layer: concrete implementations of the domain ports (http, panels, notices, storage).

pub mod http;
pub mod notify;
pub mod panels;
pub mod storage;

pub use http::HttpGameSources;
pub use notify::{ConsoleNotifier, RecordingNotifier};
pub use panels::PanelBoard;
pub use storage::LocalStorage;
