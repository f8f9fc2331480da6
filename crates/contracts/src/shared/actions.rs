//! Placeholder actions of the prototype.
//!
//! Each variant carries the parameters its button would hand to a real
//! implementation. Invoking one only logs and acknowledges it.

use crate::shared::notification::{Notification, NotificationLevel};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum StubAction {
    ExportData { format: String },
    ExportReport { format: String },
    CreateTrainingPlan { form_data: serde_json::Value },
    RunSync,
    CreateNewForm,
    ViewDetails { kind: String, id: String },
    CreateActionPlan { parameter: String },
    SaveConfiguration,
    AddUser,
    AddField,
    AddSection,
    EditField,
    ApplyFilters,
    SubmitForm { form: String },
}

impl StubAction {
    /// Stable key used in logs.
    pub fn key(&self) -> &'static str {
        match self {
            StubAction::ExportData { .. } => "export_data",
            StubAction::ExportReport { .. } => "export_report",
            StubAction::CreateTrainingPlan { .. } => "create_training_plan",
            StubAction::RunSync => "run_sync",
            StubAction::CreateNewForm => "create_new_form",
            StubAction::ViewDetails { .. } => "view_details",
            StubAction::CreateActionPlan { .. } => "create_action_plan",
            StubAction::SaveConfiguration => "save_configuration",
            StubAction::AddUser => "add_user",
            StubAction::AddField => "add_field",
            StubAction::AddSection => "add_section",
            StubAction::EditField => "edit_field",
            StubAction::ApplyFilters => "apply_filters",
            StubAction::SubmitForm { .. } => "submit_form",
        }
    }

    /// Acknowledgement shown to the user in place of the real effect.
    pub fn acknowledgement(&self) -> Notification {
        match self {
            StubAction::ExportData { format } => {
                Notification::info(format!("Data would be exported as {format}"))
            }
            StubAction::ExportReport { .. } => {
                Notification::success("Report exported successfully!")
            }
            StubAction::CreateTrainingPlan { .. } => {
                Notification::info("Training plan would be created with this data")
            }
            StubAction::RunSync => Notification::info("Manual sync would be triggered"),
            StubAction::CreateNewForm => Notification::info("New form designer would open here"),
            StubAction::ViewDetails { kind, id } => {
                Notification::info(format!("Details view would open for {kind} {id}"))
            }
            StubAction::CreateActionPlan { parameter } => {
                Notification::info(format!("Action plan creator would open for: {parameter}"))
            }
            StubAction::SaveConfiguration => {
                Notification::success("Configuration saved successfully!")
            }
            StubAction::AddUser => Notification::info("User creation form would open here"),
            StubAction::AddField => {
                Notification::info("Field designer would open here to add a new field")
            }
            StubAction::AddSection => Notification::info("New section would be added here"),
            StubAction::EditField => Notification::info("Field editor would open here"),
            StubAction::ApplyFilters => Notification::info("Filters would be applied to the data"),
            StubAction::SubmitForm { .. } => {
                Notification::info("Form would be submitted in a real application")
            }
        }
    }

    pub fn level(&self) -> NotificationLevel {
        self.acknowledgement().level
    }
}

impl fmt::Display for StubAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StubAction::ExportData { format } | StubAction::ExportReport { format } => {
                write!(f, "{} (format: {format})", self.key())
            }
            StubAction::CreateTrainingPlan { form_data } => {
                write!(f, "{} ({form_data})", self.key())
            }
            StubAction::ViewDetails { kind, id } => write!(f, "{} ({kind} {id})", self.key()),
            StubAction::CreateActionPlan { parameter } => {
                write!(f, "{} (parameter: {parameter})", self.key())
            }
            StubAction::SubmitForm { form } => write!(f, "{} (form: {form})", self.key()),
            _ => f.write_str(self.key()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledgement_carries_parameters() {
        let export = StubAction::ExportData {
            format: "CSV".to_string(),
        };
        assert_eq!(export.acknowledgement().message, "Data would be exported as CSV");

        let details = StubAction::ViewDetails {
            kind: "parameter".to_string(),
            id: "greeting".to_string(),
        };
        assert_eq!(
            details.acknowledgement().message,
            "Details view would open for parameter greeting"
        );
    }

    #[test]
    fn test_report_and_config_are_success() {
        let report = StubAction::ExportReport {
            format: "PDF".to_string(),
        };
        assert_eq!(report.level(), NotificationLevel::Success);
        assert_eq!(StubAction::SaveConfiguration.level(), NotificationLevel::Success);
        assert_eq!(StubAction::RunSync.level(), NotificationLevel::Info);
    }

    #[test]
    fn test_display_includes_key() {
        let plan = StubAction::CreateActionPlan {
            parameter: "empathy".to_string(),
        };
        assert_eq!(plan.to_string(), "create_action_plan (parameter: empathy)");
        assert_eq!(StubAction::AddUser.to_string(), "add_user");
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_value(StubAction::ExportReport {
            format: "PDF".to_string(),
        })
        .unwrap();
        assert_eq!(json["action"], "export_report");
        assert_eq!(json["format"], "PDF");
    }
}
