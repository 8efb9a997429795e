use crate::models::AppData;
use crate::wheel::WheelConfig;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub wheel: WheelConfig,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            wheel: WheelConfig::default(),
            data: Arc::new(Mutex::new(data)),
        }
    }
}
