mod app;
mod panels;
mod state;
mod widgets;
mod services;

pub use app::DashboardApp;
pub use state::{AppState, View};
