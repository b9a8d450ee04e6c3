// ABOUTME: Presentation wizard - step controller, product picker and renderer

pub mod component;
pub mod error;
pub mod product_picker;
pub mod state;
pub mod view;

pub use component::WizardComponent;
pub use error::{ConsolidateError, ValidationError};
pub use product_picker::{FilePreview, PickerRow, ProductPicker};
pub use state::{ReportRequest, Step5Mode, Transition, WizardState, WizardStep};
pub use view::{IdentificationFocus, TextInput, WizardView};
