use crate::errors::{AppError, TrackerError};
use crate::models::UserProgress;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

pub fn decode_progress(bytes: &[u8]) -> Result<UserProgress, TrackerError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Loads the saved progress, or the empty default when the file is missing
/// or unreadable.
pub async fn load_progress(path: &Path) -> UserProgress {
    match fs::read(path).await {
        Ok(bytes) => match decode_progress(&bytes) {
            Ok(progress) => progress,
            Err(err) => {
                error!("failed to parse data file: {err}");
                UserProgress::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => UserProgress::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            UserProgress::default()
        }
    }
}

pub async fn persist_progress(path: &Path, progress: &UserProgress) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(progress).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
