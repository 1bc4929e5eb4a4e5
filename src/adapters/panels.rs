use crate::core::render;
use crate::core::{Panel, RenderTarget};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct BoardState {
    current: BTreeMap<Panel, String>,
    history: Vec<(Panel, String)>,
}

/// In-memory render target keeping the latest HTML of each panel plus every
/// render in the order it happened.
#[derive(Debug, Default)]
pub struct PanelBoard {
    state: Mutex<BoardState>,
}

impl PanelBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn panel(&self, panel: Panel) -> Option<String> {
        self.lock().current.get(&panel).cloned()
    }

    pub fn history(&self) -> Vec<(Panel, String)> {
        self.lock().history.clone()
    }

    pub fn to_page(&self) -> String {
        let panels: Vec<(Panel, String)> = self
            .lock()
            .current
            .iter()
            .map(|(panel, html)| (*panel, html.clone()))
            .collect();
        render::page(&panels)
    }
}

impl RenderTarget for PanelBoard {
    fn render(&self, panel: Panel, html: String) {
        tracing::trace!("Rendering panel '{}' ({} bytes)", panel.id(), html.len());
        let mut state = self.lock();
        state.current.insert(panel, html.clone());
        state.history.push((panel, html));
    }
}
