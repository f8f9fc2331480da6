use crate::shared::notifications::Notifier;
use contracts::shared::actions::StubAction;
use contracts::shared::notification::Notification;
use std::fmt;

/// Receipt of an intentionally unimplemented action. Stubs never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct StubInvoked {
    pub action: StubAction,
    pub notification: Notification,
}

impl fmt::Display for StubInvoked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stub invoked: {}", self.action)
    }
}

/// Logs `action` and acknowledges it through `notifier`.
pub fn invoke_stub(notifier: &dyn Notifier, action: StubAction) -> StubInvoked {
    log::info!("stub invoked: {}", action);
    let notification = action.acknowledgement();
    notifier.notify(notification.clone());
    StubInvoked {
        action,
        notification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::testing::RecordingNotifier;
    use contracts::shared::notification::NotificationLevel;

    #[test]
    fn test_every_stub_notifies_once() {
        let actions = vec![
            StubAction::ExportData { format: "CSV".into() },
            StubAction::ExportReport { format: "PDF".into() },
            StubAction::CreateTrainingPlan {
                form_data: serde_json::json!({ "agent": "Jane", "focus": "empathy" }),
            },
            StubAction::RunSync,
            StubAction::CreateNewForm,
            StubAction::ViewDetails { kind: "parameter".into(), id: "greeting".into() },
            StubAction::CreateActionPlan { parameter: "greeting".into() },
            StubAction::SaveConfiguration,
            StubAction::AddUser,
            StubAction::AddField,
            StubAction::AddSection,
            StubAction::EditField,
            StubAction::ApplyFilters,
            StubAction::SubmitForm { form: "coaching".into() },
        ];
        let notifier = RecordingNotifier::default();
        for action in actions.iter().cloned() {
            invoke_stub(&notifier, action);
        }
        assert_eq!(notifier.seen.borrow().len(), actions.len());
    }

    #[test]
    fn test_receipt_matches_notification() {
        let notifier = RecordingNotifier::default();
        let receipt = invoke_stub(&notifier, StubAction::SaveConfiguration);
        assert_eq!(receipt.notification.level, NotificationLevel::Success);
        assert_eq!(notifier.messages(), vec!["Configuration saved successfully!"]);
        assert_eq!(receipt.to_string(), "stub invoked: save_configuration");
    }
}
