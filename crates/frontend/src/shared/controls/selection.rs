use contracts::shared::error::UiError;
use contracts::shared::markup;
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Row checkboxes of one table plus its select-all control.
///
/// The cascade is one-way: select-all writes every row, rows never write
/// back to select-all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    row_ids: Vec<String>,
    checked: BTreeSet<String>,
    select_all: bool,
}

impl RowSelection {
    pub fn new(row_ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            row_ids: row_ids.into_iter().collect(),
            checked: BTreeSet::new(),
            select_all: false,
        }
    }

    pub fn set_all(&mut self, checked: bool) {
        self.select_all = checked;
        if checked {
            self.checked = self.row_ids.iter().cloned().collect();
        } else {
            self.checked.clear();
        }
    }

    pub fn set_row(&mut self, id: &str, checked: bool) -> Result<(), UiError> {
        if !self.row_ids.iter().any(|r| r == id) {
            return Err(UiError::missing(format!("row checkbox `{id}`")));
        }
        if checked {
            self.checked.insert(id.to_string());
        } else {
            self.checked.remove(id);
        }
        Ok(())
    }

    pub fn is_select_all(&self) -> bool {
        self.select_all
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }
}

/// Header checkbox driving every row checkbox of the table.
#[component]
pub fn SelectAllCheckbox(selection: RwSignal<RowSelection>) -> impl IntoView {
    view! {
        <input
            id=markup::SELECT_ALL_ID
            type="checkbox"
            class="table__checkbox"
            prop:checked=move || selection.with(|s| s.is_select_all())
            on:change=move |ev| {
                let checked = event_target_checked(&ev);
                log::debug!("select all: {checked}");
                selection.update(|s| s.set_all(checked));
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_rows() -> RowSelection {
        RowSelection::new((1..=5).map(|i| format!("C-10{i}")))
    }

    #[test]
    fn test_select_all_checks_every_row() {
        let mut s = five_rows();
        s.set_all(true);
        assert_eq!(s.checked_count(), 5);
        s.set_all(false);
        assert_eq!(s.checked_count(), 0);
    }

    #[test]
    fn test_row_change_does_not_touch_select_all() {
        let mut s = five_rows();
        s.set_all(true);
        s.set_row("C-103", false).unwrap();
        assert!(s.is_select_all());
        assert_eq!(s.checked_count(), 4);
        assert!(!s.is_checked("C-103"));
    }

    #[test]
    fn test_checking_every_row_leaves_select_all_off() {
        let mut s = five_rows();
        for i in 1..=5 {
            s.set_row(&format!("C-10{i}"), true).unwrap();
        }
        assert!(!s.is_select_all());
        assert_eq!(s.checked_count(), 5);
    }

    #[test]
    fn test_unknown_row_is_missing_target() {
        let mut s = five_rows();
        assert!(s.set_row("C-999", true).is_err());
        assert_eq!(s.checked_count(), 0);
    }
}
