//! Checkbox cascades, toggle switches and range sliders.

pub mod range;
pub mod selection;
pub mod toggles;

pub use range::{range_display, RangeSlider};
pub use selection::{RowSelection, SelectAllCheckbox};
pub use toggles::{ToggleGroup, ToggleSwitch};
