pub mod app;
pub mod calendar;
pub mod errors;
pub mod habits;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod state;
pub mod storage;
pub mod ui;
pub mod wheel;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
