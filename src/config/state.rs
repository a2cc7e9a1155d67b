// src/config/state.rs
use super::options::AppOptions;

/// Dashboard tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Flights,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Overview, Tab::Flights];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Flights => "All flights",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active dashboard tab
    pub tab: Tab,

    /// Month chart: chronological (true) or first-seen (false) order
    pub chart_chronological: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 720,
            tab: Tab::Overview,
            chart_chronological: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn from_env() -> Self {
        Self { options: AppOptions::from_env(), gui: GuiState::default() }
    }
}
