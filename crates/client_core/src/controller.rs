use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use shared::{
    domain::{AspectRatio, FestivalId, ImageId, Style},
    protocol::{GeneratedImage, HistoryEntry},
};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, error, info, warn};

use crate::{
    backend::FestPostBackend,
    download::save_image,
    error::{SubmitError, ValidationError},
    state::ClientState,
    view::{derive_view, ViewModel},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    FestivalsLoaded { count: usize },
    HistoryUpdated { count: usize },
    GenerationStarted,
    GenerationSucceeded(GeneratedImage),
    GenerationFailed(String),
    GenerationSuperseded,
    ResultSelected(GeneratedImage),
}

/// Sole owner of the client state. Every mutation goes through one of the
/// operations below; the state lock is never held across a backend call.
pub struct ViewController {
    backend: Arc<dyn FestPostBackend>,
    download_dir: PathBuf,
    inner: Mutex<ClientState>,
    events: broadcast::Sender<ControllerEvent>,
}

impl ViewController {
    pub fn new(backend: Arc<dyn FestPostBackend>, download_dir: impl Into<PathBuf>) -> Arc<Self> {
        let (events, _) = broadcast::channel(256);
        Arc::new(Self {
            backend,
            download_dir: download_dir.into(),
            inner: Mutex::new(ClientState::default()),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ControllerEvent> {
        self.events.subscribe()
    }

    pub async fn snapshot(&self) -> ClientState {
        self.inner.lock().await.clone()
    }

    pub async fn view(&self) -> ViewModel {
        let guard = self.inner.lock().await;
        derive_view(&guard)
    }

    /// Loads festivals and history concurrently. Neither failure reaches the
    /// error slot.
    pub async fn initialize(&self) {
        tokio::join!(self.load_festivals(), self.refresh_history());
    }

    pub async fn load_festivals(&self) {
        let festivals = match self.backend.list_festivals().await {
            Ok(festivals) => festivals,
            Err(err) => {
                warn!("festivals: fetch failed: {err:#}");
                return;
            }
        };

        let count = festivals.len();
        {
            let mut guard = self.inner.lock().await;
            if !guard.festival_chosen_by_user && guard.request.festival.is_unset() {
                if let Some(first) = festivals.first() {
                    guard.request.festival = first.id.clone();
                }
            }
            guard.festivals = festivals;
        }
        info!(count, "festivals: loaded");
        let _ = self.events.send(ControllerEvent::FestivalsLoaded { count });
    }

    pub async fn refresh_history(&self) {
        let token = self.inner.lock().await.next_history_token();

        let images = match self.backend.list_images().await {
            Ok(images) => images,
            Err(err) => {
                warn!("history: fetch failed: {err:#}");
                return;
            }
        };

        let count = images.len();
        {
            let mut guard = self.inner.lock().await;
            if guard.latest_history_refresh != token {
                debug!(
                    token,
                    latest = guard.latest_history_refresh,
                    "history: dropping stale refresh"
                );
                return;
            }
            guard.history = images;
        }
        let _ = self.events.send(ControllerEvent::HistoryUpdated { count });
    }

    fn spawn_history_refresh(self: &Arc<Self>) {
        let controller = Arc::clone(self);
        tokio::spawn(async move {
            controller.refresh_history().await;
        });
    }

    pub async fn set_business_name(&self, business_name: impl Into<String>) {
        self.inner.lock().await.request.business_name = business_name.into();
    }

    pub async fn set_tagline(&self, tagline: impl Into<String>) {
        self.inner.lock().await.request.tagline = tagline.into();
    }

    pub async fn select_festival(&self, festival: impl Into<FestivalId>) {
        let mut guard = self.inner.lock().await;
        guard.request.festival = festival.into();
        guard.festival_chosen_by_user = true;
    }

    pub async fn set_style(&self, style: Style) {
        self.inner.lock().await.request.style = style;
    }

    pub async fn set_aspect_ratio(&self, aspect_ratio: AspectRatio) {
        self.inner.lock().await.request.aspect_ratio = aspect_ratio;
    }

    /// Sends the current form to the generator. A response that arrives after
    /// a newer submit has started is discarded and reported as superseded.
    pub async fn submit(self: &Arc<Self>) -> std::result::Result<GeneratedImage, SubmitError> {
        let (token, request) = {
            let mut guard = self.inner.lock().await;
            validate(&guard)?;
            let token = guard.next_submit_token();
            guard.loading = true;
            guard.error = None;
            guard.current = None;
            (token, guard.request.clone())
        };
        let _ = self.events.send(ControllerEvent::GenerationStarted);
        info!(
            token,
            business_name = %request.business_name,
            festival = %request.festival,
            style = request.style.as_str(),
            aspect_ratio = request.aspect_ratio.as_str(),
            "generate: request sent"
        );

        let outcome = self.backend.generate(&request).await;

        let mut guard = self.inner.lock().await;
        if guard.latest_submit != token {
            debug!(
                token,
                latest = guard.latest_submit,
                "generate: dropping superseded response"
            );
            drop(guard);
            let _ = self.events.send(ControllerEvent::GenerationSuperseded);
            return Err(SubmitError::Superseded);
        }

        match outcome {
            Ok(image) => {
                guard.current = Some(image.clone());
                self.spawn_history_refresh();
                guard.loading = false;
                drop(guard);
                info!(token, image_url = %image.image_url, "generate: succeeded");
                let _ = self
                    .events
                    .send(ControllerEvent::GenerationSucceeded(image.clone()));
                Ok(image)
            }
            Err(err) => {
                let message = err.user_message();
                guard.error = Some(message.clone());
                guard.loading = false;
                drop(guard);
                warn!(token, "generate: failed: {err}");
                let _ = self
                    .events
                    .send(ControllerEvent::GenerationFailed(message.clone()));
                Err(SubmitError::Generation(message))
            }
        }
    }

    pub async fn select_history_item(&self, entry: &HistoryEntry) {
        let image = GeneratedImage::from(entry);
        self.inner.lock().await.current = Some(image.clone());
        let _ = self.events.send(ControllerEvent::ResultSelected(image));
    }

    /// Fetches one stored generation and shows it as the current result.
    pub async fn open_image(&self, image_id: &ImageId) -> Result<HistoryEntry> {
        let entry = self.backend.image_details(image_id).await?;
        self.select_history_item(&entry).await;
        Ok(entry)
    }

    /// Saves `image_url` as `{suggested_name}.png`. Failures are logged only.
    pub async fn download(&self, image_url: &str, suggested_name: Option<&str>) -> Option<PathBuf> {
        match save_image(
            self.backend.as_ref(),
            image_url,
            suggested_name,
            &self.download_dir,
        )
        .await
        {
            Ok(path) => Some(path),
            Err(err) => {
                error!("download: {err:#}");
                None
            }
        }
    }

    pub async fn download_current(&self) -> Option<PathBuf> {
        let (image_url, name) = {
            let guard = self.inner.lock().await;
            let Some(current) = guard.current.as_ref() else {
                warn!("download: no current image");
                return None;
            };
            (
                current.image_url.clone(),
                format!(
                    "{}-{}",
                    guard.request.business_name, guard.request.festival
                ),
            )
        };
        self.download(&image_url, Some(&name)).await
    }
}

fn validate(state: &ClientState) -> std::result::Result<(), ValidationError> {
    if state.request.business_name.trim().is_empty() {
        return Err(ValidationError::MissingBusinessName);
    }
    let festival = &state.request.festival;
    if festival.is_unset() {
        return Err(ValidationError::MissingFestival);
    }
    if !state.knows_festival(festival.as_str()) {
        return Err(ValidationError::UnknownFestival(festival.to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
