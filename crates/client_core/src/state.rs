use shared::protocol::{FestivalOption, GeneratedImage, GenerationRequest, HistoryEntry};

/// Everything the controller owns. Snapshots of it feed [`crate::view::derive_view`].
#[derive(Default, Debug, Clone)]
pub struct ClientState {
    pub festivals: Vec<FestivalOption>,
    pub request: GenerationRequest,
    pub festival_chosen_by_user: bool,
    pub loading: bool,
    pub current: Option<GeneratedImage>,
    pub error: Option<String>,
    pub history: Vec<HistoryEntry>,
    pub(crate) latest_submit: u64,
    pub(crate) latest_history_refresh: u64,
}

impl ClientState {
    pub(crate) fn next_submit_token(&mut self) -> u64 {
        self.latest_submit += 1;
        self.latest_submit
    }

    pub(crate) fn next_history_token(&mut self) -> u64 {
        self.latest_history_refresh += 1;
        self.latest_history_refresh
    }

    pub fn knows_festival(&self, festival: &str) -> bool {
        self.festivals.iter().any(|f| f.id.as_str() == festival)
    }
}
