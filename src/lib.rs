pub mod app;
pub mod calendar;
pub mod config;
pub mod controller;
pub mod date_key;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod records;
pub mod state;
pub mod storage;
pub mod streak;
pub mod ui;

pub use app::router;
pub use config::AppConfig;
pub use controller::{DayStatusController, Notice, RolloverOutcome, ToggleOutcome};
pub use date_key::DateKey;
pub use errors::{AppError, TrackerError};
pub use models::{DayStatus, TrackingMode, UserProgress};
pub use state::AppState;
pub use storage::{load_progress, persist_progress, resolve_data_path};
