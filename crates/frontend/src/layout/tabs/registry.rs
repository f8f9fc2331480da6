//! Tab content registry - единственный источник правды для маппинга tab.key → View

use crate::dashboards::d100_quality_overview::QualityOverviewDashboard;
use crate::domain::a100_evaluation_form::EvaluationFormDesigner;
use crate::domain::a101_quality_parameter::QualityParameterList;
use crate::projections::p100_call_register::CallRegisterList;
use crate::system::settings::SettingsPage;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDef {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const TABS: &[TabDef] = &[
    TabDef { key: "overview", label: "Overview", icon: "dashboard" },
    TabDef { key: "calls", label: "Call Evaluations", icon: "phone" },
    TabDef { key: "forms", label: "Evaluation Forms", icon: "form" },
    TabDef { key: "parameters", label: "Quality Parameters", icon: "sliders" },
    TabDef { key: "settings", label: "Settings", icon: "settings" },
];

pub fn tab_keys() -> Vec<String> {
    TABS.iter().map(|t| t.key.to_string()).collect()
}

/// Panel view for `key`, `None` when the key has no panel.
pub fn render_tab_content(key: &str) -> Option<AnyView> {
    let view = match key {
        "overview" => view! { <QualityOverviewDashboard /> }.into_any(),
        "calls" => view! { <CallRegisterList /> }.into_any(),
        "forms" => view! { <EvaluationFormDesigner /> }.into_any(),
        "parameters" => view! { <QualityParameterList /> }.into_any(),
        "settings" => view! { <SettingsPage /> }.into_any(),
        _ => return None,
    };
    Some(view)
}
