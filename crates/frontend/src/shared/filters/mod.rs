//! Filter bar state.
//!
//! The controls hold the only filter state there is; "Apply" is a stub and
//! nothing is filtered.

pub mod filter_bar;

pub use filter_bar::FilterBar;

use crate::shared::notifications::Notifier;
use crate::shared::stubs::{invoke_stub, StubInvoked};
use contracts::shared::actions::StubAction;
use contracts::shared::error::UiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterControlKind {
    Text { value: String },
    Select { options: Vec<String>, selected: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub name: String,
    pub label: String,
    pub kind: FilterControlKind,
}

impl FilterControl {
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FilterControlKind::Text {
                value: String::new(),
            },
        }
    }

    pub fn select(name: &str, label: &str, options: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FilterControlKind::Select {
                options: options.iter().map(|o| o.to_string()).collect(),
                selected: 0,
            },
        }
    }

    /// True when the control differs from its default.
    pub fn is_active(&self) -> bool {
        match &self.kind {
            FilterControlKind::Text { value } => !value.is_empty(),
            FilterControlKind::Select { selected, .. } => *selected != 0,
        }
    }

    fn reset(&mut self) {
        match &mut self.kind {
            FilterControlKind::Text { value } => value.clear(),
            FilterControlKind::Select { selected, .. } => *selected = 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterBarState {
    pub controls: Vec<FilterControl>,
}

impl FilterBarState {
    pub fn new(controls: Vec<FilterControl>) -> Self {
        Self { controls }
    }

    fn control_mut(&mut self, name: &str) -> Result<&mut FilterControl, UiError> {
        self.controls
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| UiError::missing(format!("filter control `{name}`")))
    }

    pub fn set_text(&mut self, name: &str, text: &str) -> Result<(), UiError> {
        match &mut self.control_mut(name)?.kind {
            FilterControlKind::Text { value } => {
                *value = text.to_string();
                Ok(())
            }
            FilterControlKind::Select { .. } => {
                Err(UiError::missing(format!("text input `{name}`")))
            }
        }
    }

    pub fn select_index(&mut self, name: &str, index: usize) -> Result<(), UiError> {
        match &mut self.control_mut(name)?.kind {
            FilterControlKind::Select { options, selected } if index < options.len() => {
                *selected = index;
                Ok(())
            }
            FilterControlKind::Select { .. } => {
                Err(UiError::missing(format!("option {index} of `{name}`")))
            }
            FilterControlKind::Text { .. } => Err(UiError::missing(format!("select `{name}`"))),
        }
    }

    /// Resets every control: text inputs to empty, selects to index 0.
    pub fn clear(&mut self) {
        log::info!("clearing filters");
        for control in &mut self.controls {
            control.reset();
        }
    }

    pub fn active_count(&self) -> usize {
        self.controls.iter().filter(|c| c.is_active()).count()
    }

    pub fn apply(&self, notifier: &dyn Notifier) -> StubInvoked {
        log::info!("applying filters ({} active)", self.active_count());
        invoke_stub(notifier, StubAction::ApplyFilters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::testing::RecordingNotifier;

    fn bar() -> FilterBarState {
        FilterBarState::new(vec![
            FilterControl::text("search", "Search"),
            FilterControl::select("agent", "Agent", &["All agents", "Jane", "Omar", "Lena"]),
        ])
    }

    #[test]
    fn test_clear_resets_text_and_select() {
        let mut state = bar();
        state.set_text("search", "foo").unwrap();
        state.select_index("agent", 2).unwrap();
        assert_eq!(state.active_count(), 2);

        state.clear();

        assert_eq!(
            state.controls[0].kind,
            FilterControlKind::Text { value: String::new() }
        );
        assert!(matches!(
            state.controls[1].kind,
            FilterControlKind::Select { selected: 0, .. }
        ));
        assert_eq!(state.active_count(), 0);
    }

    #[test]
    fn test_out_of_range_option_is_rejected() {
        let mut state = bar();
        assert!(state.select_index("agent", 9).is_err());
        assert!(state.set_text("agent", "x").is_err());
        assert!(state.set_text("missing", "x").is_err());
        assert_eq!(state, bar());
    }

    #[test]
    fn test_apply_only_notifies() {
        let mut state = bar();
        state.set_text("search", "refund").unwrap();
        let before = state.clone();
        let notifier = RecordingNotifier::default();
        state.apply(&notifier);
        assert_eq!(state, before);
        assert_eq!(notifier.messages(), vec!["Filters would be applied to the data"]);
    }
}
