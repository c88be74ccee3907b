// ABOUTME: Core library for the Housni Fast Charge screen.
// ABOUTME: Everything the window shows is computed here so it can be tested without rendering.

pub mod clock;
pub mod config;
pub mod date;
pub mod i18n;
pub mod settings;
pub mod state;
pub mod suggest;
pub mod theme;
pub mod view;

pub use config::Config;
pub use i18n::{Language, Text};
pub use settings::SettingsPanel;
pub use state::{AppState, ChargeStatus};
pub use suggest::{GeminiClient, NameGenerator, SuggestError};
pub use view::ScreenModel;
