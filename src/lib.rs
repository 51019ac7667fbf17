pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod errors;
pub mod fence;
pub mod handlers;
pub mod input;
pub mod models;
pub mod render;
pub mod state;
pub mod ui;
pub mod view;

pub use api::{HttpTaskApi, TaskApi};
pub use app::router;
pub use config::Config;
pub use controller::Controller;
pub use state::AppState;
