pub mod ui;

pub use ui::list::QualityParameterList;

use crate::shared::data::sample::QualityParameter;
use contracts::shared::actions::StubAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterStatus {
    OnTarget,
    NearTarget,
    BelowTarget,
}

impl ParameterStatus {
    /// Within 5 points of the target counts as near.
    pub fn of(current: u8, target: u8) -> Self {
        if current >= target {
            ParameterStatus::OnTarget
        } else if target - current <= 5 {
            ParameterStatus::NearTarget
        } else {
            ParameterStatus::BelowTarget
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ParameterStatus::OnTarget => "On target",
            ParameterStatus::NearTarget => "Near target",
            ParameterStatus::BelowTarget => "Below target",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ParameterStatus::OnTarget => "param-status param-status--ok",
            ParameterStatus::NearTarget => "param-status param-status--near",
            ParameterStatus::BelowTarget => "param-status param-status--below",
        }
    }
}

impl QualityParameter {
    pub fn status(&self, target: u8) -> ParameterStatus {
        ParameterStatus::of(self.current, target)
    }

    /// Both `data-param` buttons hand their stub the parameter key.
    pub fn action_plan(&self) -> StubAction {
        StubAction::CreateActionPlan {
            parameter: self.key.to_string(),
        }
    }

    pub fn details(&self) -> StubAction {
        StubAction::ViewDetails {
            kind: "parameter".to_string(),
            id: self.key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::sample::quality_parameters;

    #[test]
    fn test_status_bands() {
        assert_eq!(ParameterStatus::of(95, 95), ParameterStatus::OnTarget);
        assert_eq!(ParameterStatus::of(100, 80), ParameterStatus::OnTarget);
        assert_eq!(ParameterStatus::of(90, 95), ParameterStatus::NearTarget);
        assert_eq!(ParameterStatus::of(71, 85), ParameterStatus::BelowTarget);
    }

    #[test]
    fn test_parameter_buttons_pass_key() {
        let empathy = quality_parameters()
            .into_iter()
            .find(|p| p.key == "empathy")
            .unwrap();
        assert_eq!(
            empathy.action_plan(),
            StubAction::CreateActionPlan {
                parameter: "empathy".to_string()
            }
        );
        assert_eq!(
            empathy.details(),
            StubAction::ViewDetails {
                kind: "parameter".to_string(),
                id: "empathy".to_string()
            }
        );
    }

    #[test]
    fn test_status_follows_moved_target() {
        let empathy = quality_parameters()
            .into_iter()
            .find(|p| p.key == "empathy")
            .unwrap();
        assert_eq!(empathy.status(empathy.target), ParameterStatus::BelowTarget);
        assert_eq!(empathy.status(70), ParameterStatus::OnTarget);
    }
}
