//! Built-in widgets: Frame, Label, Button, TextEntry, Dropdown, Spinner, DatePicker.
//!
//! Each module holds the variant's state and its creation config. Creation
//! itself (validation, registration, placement) lives in the form's factory.

pub mod frame;
pub mod label;
pub mod button;
pub mod entry;
pub mod dropdown;
pub mod spinner;
pub mod date_picker;

pub use frame::{Frame, FrameConfig};
pub use label::{Label, LabelConfig};
pub use button::{Button, ButtonConfig, Callback};
pub use entry::{TextEntry, TextEntryConfig, MIN_ENTRY_WIDTH};
pub use dropdown::{Dropdown, DropdownConfig, DEFAULT_OPTIONS};
pub use spinner::{Spinner, SpinnerConfig};
pub use date_picker::{DatePicker, DatePickerConfig, DATE_FORMAT};
