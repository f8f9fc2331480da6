//! Evaluation form designer.
//!
//! Only item selection is real: at most one form item is active. Adding
//! fields and sections, editing fields and submitting are stubs.

use crate::shared::notifications::Notifier;
use crate::shared::stubs::{invoke_stub, StubInvoked};
use contracts::shared::actions::StubAction;
use contracts::shared::error::UiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub id: String,
    pub label: String,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSection {
    pub title: String,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormItem {
    pub id: String,
    pub name: String,
    pub sections: Vec<FormSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDesigner {
    pub items: Vec<FormItem>,
    active: Option<String>,
}

impl FormDesigner {
    pub fn new(items: Vec<FormItem>) -> Self {
        Self {
            items,
            active: None,
        }
    }

    /// Click on a form item in the list: it becomes the only active item.
    pub fn select(&mut self, id: &str) -> Result<(), UiError> {
        if !self.items.iter().any(|i| i.id == id) {
            return Err(UiError::missing(format!("form item `{id}`")));
        }
        self.active = Some(id.to_string());
        Ok(())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn active_item(&self) -> Option<&FormItem> {
        let id = self.active.as_deref()?;
        self.items.iter().find(|i| i.id == id)
    }

    pub fn add_field(&self, section: &str, notifier: &dyn Notifier) -> StubInvoked {
        log::info!("add field to section '{section}'");
        invoke_stub(notifier, StubAction::AddField)
    }

    pub fn add_section(&self, notifier: &dyn Notifier) -> StubInvoked {
        invoke_stub(notifier, StubAction::AddSection)
    }

    pub fn edit_field(&self, field_id: &str, notifier: &dyn Notifier) -> StubInvoked {
        log::info!("edit field '{field_id}'");
        invoke_stub(notifier, StubAction::EditField)
    }

    pub fn create_new_form(&self, notifier: &dyn Notifier) -> StubInvoked {
        invoke_stub(notifier, StubAction::CreateNewForm)
    }

    pub fn submit(&self, notifier: &dyn Notifier) -> StubInvoked {
        let form = self
            .active_item()
            .map(|i| i.name.clone())
            .unwrap_or_default();
        invoke_stub(notifier, StubAction::SubmitForm { form })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::testing::RecordingNotifier;

    fn designer() -> FormDesigner {
        let item = |id: &str, name: &str| FormItem {
            id: id.to_string(),
            name: name.to_string(),
            sections: vec![FormSection {
                title: "Opening".to_string(),
                fields: vec![FormField {
                    id: format!("{id}-greeting"),
                    label: "Greeting used".to_string(),
                    kind: "yes/no".to_string(),
                }],
            }],
        };
        FormDesigner::new(vec![
            item("f1", "Inbound Support"),
            item("f2", "Collections"),
            item("f3", "Sales"),
        ])
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut d = designer();
        assert!(d.active_item().is_none());
        d.select("f1").unwrap();
        d.select("f3").unwrap();
        let active: Vec<_> = d.items.iter().filter(|i| d.is_active(&i.id)).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(d.active_item().map(|i| i.name.as_str()), Some("Sales"));
    }

    #[test]
    fn test_unknown_item_keeps_selection() {
        let mut d = designer();
        d.select("f2").unwrap();
        assert!(d.select("f9").is_err());
        assert!(d.is_active("f2"));
    }

    #[test]
    fn test_designer_actions_are_stubs() {
        let d = designer();
        let notifier = RecordingNotifier::default();
        d.add_field("Opening", &notifier);
        d.add_section(&notifier);
        d.edit_field("f1-greeting", &notifier);
        assert_eq!(
            notifier.messages(),
            vec![
                "Field designer would open here to add a new field",
                "New section would be added here",
                "Field editor would open here",
            ]
        );
        assert_eq!(d, designer());
    }

    #[test]
    fn test_submit_names_active_form() {
        let mut d = designer();
        d.select("f2").unwrap();
        let notifier = RecordingNotifier::default();
        let receipt = d.submit(&notifier);
        assert_eq!(
            receipt.action,
            StubAction::SubmitForm {
                form: "Collections".to_string()
            }
        );
    }
}
