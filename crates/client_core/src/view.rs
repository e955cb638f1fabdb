//! Pure mapping from controller state to what a front end should draw.

use shared::protocol::{FestivalOption, GeneratedImage, HistoryEntry};

use crate::state::ClientState;

pub const HISTORY_DISPLAY_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainView {
    Loading,
    Result(GeneratedImage),
    Welcome,
    /// Nothing in the main area; only the history grid is shown.
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub main: MainView,
    pub history: Vec<HistoryEntry>,
    pub error_banner: Option<String>,
    pub submit_enabled: bool,
    pub festival_options: Vec<FestivalOption>,
}

pub fn derive_view(state: &ClientState) -> ViewModel {
    let main = if state.loading {
        MainView::Loading
    } else if let Some(image) = &state.current {
        MainView::Result(image.clone())
    } else if state.history.is_empty() {
        MainView::Welcome
    } else {
        MainView::Blank
    };

    ViewModel {
        main,
        history: state
            .history
            .iter()
            .take(HISTORY_DISPLAY_LIMIT)
            .cloned()
            .collect(),
        error_banner: state.error.clone(),
        submit_enabled: !state.loading,
        festival_options: state.festivals.clone(),
    }
}
