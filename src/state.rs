use crate::controller::DayStatusController;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub controller: Arc<Mutex<DayStatusController>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, controller: DayStatusController) -> Self {
        Self {
            data_path,
            controller: Arc::new(Mutex::new(controller)),
        }
    }
}
