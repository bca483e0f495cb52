mod action;
mod state;
pub mod views;

pub use action::Action;
pub use state::{AppMode, AppState, SessionStats, ViewMode};
