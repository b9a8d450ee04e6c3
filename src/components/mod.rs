// ABOUTME: UI components for the TUI interface including the wizard, slide viewer, history and help

pub mod help;
pub mod history;
pub mod layout;
pub mod presentation_viewer;
pub mod wizard;

pub use help::HelpComponent;
pub use history::HistoryComponent;
pub use layout::LayoutComponent;
pub use presentation_viewer::{PresentationViewerComponent, ViewerProps};
pub use wizard::WizardComponent;
