pub mod ui;

pub use ui::SettingsPage;

use crate::shared::controls::ToggleGroup;

pub const AUTO_SCORING: &str = "Automatic scoring";
pub const SENTIMENT_ANALYSIS: &str = "Sentiment analysis";
pub const EMAIL_ALERTS: &str = "Email alerts";
pub const WEEKLY_DIGEST: &str = "Weekly digest";

/// Settings switches with their initial positions.
pub fn default_toggles() -> ToggleGroup {
    ToggleGroup::new([
        (AUTO_SCORING, true),
        (SENTIMENT_ANALYSIS, true),
        (EMAIL_ALERTS, false),
        (WEEKLY_DIGEST, true),
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember { name: "Jane Cooper", role: "Agent" },
    TeamMember { name: "Omar Haddad", role: "Agent" },
    TeamMember { name: "Lena Fischer", role: "Agent" },
    TeamMember { name: "Priya Nair", role: "QA Lead" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::testing::RecordingNotifier;

    #[test]
    fn test_default_toggles() {
        let mut toggles = default_toggles();
        assert!(toggles.is_on(AUTO_SCORING));
        assert!(!toggles.is_on(EMAIL_ALERTS));

        let notifier = RecordingNotifier::default();
        toggles.set(EMAIL_ALERTS, true, &notifier).unwrap();
        assert_eq!(notifier.messages(), vec!["Email alerts enabled"]);
    }
}
