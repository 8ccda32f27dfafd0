use crate::models::TrackingMode;
use crate::storage::resolve_data_path;
use std::{env, path::PathBuf};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_path: PathBuf,
    pub mode: TrackingMode,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, std::io::Error> {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        Ok(Self {
            port,
            data_path: resolve_data_path()?,
            mode: parse_mode(env::var("TRACKING_MODE").ok().as_deref()),
        })
    }
}

fn parse_mode(raw: Option<&str>) -> TrackingMode {
    match raw {
        None => TrackingMode::default(),
        Some(value) => value.parse().unwrap_or_else(|err| {
            warn!("{err}, using {}", TrackingMode::default());
            TrackingMode::default()
        }),
    }
}
