pub mod action;
pub mod catalog;
pub mod forms;
pub mod overlay;
pub mod state;

pub use action::Action;
pub use state::{AppState, ViewMode};
