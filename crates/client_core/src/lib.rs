//! Client side of the FestPost image generator: the backend seam, settings,
//! and the view controller that owns form, result, error and history state.

pub mod backend;
pub mod config;
pub mod controller;
pub mod download;
pub mod error;
pub mod state;
pub mod view;

pub use backend::{FestPostBackend, HttpBackend};
pub use config::{load_settings, ClientSettings};
pub use controller::{ControllerEvent, ViewController};
pub use error::{GenerateError, SubmitError, ValidationError};
pub use state::ClientState;
pub use view::{derive_view, MainView, ViewModel, HISTORY_DISPLAY_LIMIT};
