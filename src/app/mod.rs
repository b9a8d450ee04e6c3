// ABOUTME: Main application structure and state management for the TUI

pub mod events;
pub mod state;
pub mod task;

pub use events::{AppEvent, EventHandler};
pub use state::{App, AppState, Notification, NotificationType, View};
pub use task::PendingTask;
