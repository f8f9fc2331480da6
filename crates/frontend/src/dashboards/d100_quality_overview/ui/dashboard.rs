use crate::dashboards::d100_quality_overview::stats::QualityStats;
use crate::layout::tabs::query_for_tab;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::sample::sample_records;
use crate::shared::icons::icon;
use crate::shared::navigation::navigate_to;
use crate::shared::notifications::{use_toasts, Notifier};
use crate::shared::page::{PageCategory, PageFrame};
use crate::shared::stubs::invoke_stub;
use contracts::shared::actions::StubAction;
use contracts::shared::notification::Notification;
use leptos::prelude::*;
use thaw::*;

/// Quality overview dashboard
#[component]
pub fn QualityOverviewDashboard() -> impl IntoView {
    let toasts = use_toasts();
    let stats = StoredValue::new(QualityStats::from_records(&sample_records()));

    Effect::new(move |_| {
        log::info!("Charts would be initialized here");
    });

    let export_data = move |_| {
        invoke_stub(
            &toasts,
            StubAction::ExportData {
                format: "CSV".to_string(),
            },
        );
    };

    let view_all_calls = move |_| {
        if let Err(e) = navigate_to(&query_for_tab("calls")) {
            log::warn!("{e}");
            toasts.notify(Notification::error("Could not open the call list"));
        }
    };

    let stat = move |f: fn(&QualityStats) -> Option<String>| {
        Signal::derive(move || stats.with_value(|s| f(s)))
    };

    view! {
        <PageFrame
            entity="d100_quality_overview"
            category=PageCategory::Dashboard
            title="Quality Overview"
            actions=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=export_data>
                    {icon("download")}
                    " Export CSV"
                </Button>
            }
        >
            <div class="stat-grid">
                <StatCard
                    label="Calls Evaluated"
                    icon_name="phone"
                    value=stat(|s| Some(s.total_calls.to_string()))
                />
                <StatCard
                    label="Average Score"
                    icon_name="dashboard"
                    value=stat(QualityStats::avg_score_display)
                    subtitle="out of 100".to_string()
                />
                <StatCard
                    label="Average Duration"
                    icon_name="sliders"
                    value=stat(QualityStats::avg_duration_display)
                />
                <StatCard
                    label="Positive Sentiment"
                    icon_name="users"
                    value=stat(|s| s.positive_share().map(|p| format!("{p}%")))
                    subtitle=stats.with_value(|s| {
                        format!("{} neutral, {} negative", s.neutral, s.negative)
                    })
                />
            </div>

            <div class="chart-placeholder">
                <p>"Score trend"</p>
                <span class="chart-placeholder__hint">
                    {stats
                        .with_value(|s| s.latest_call_display())
                        .map(|t| format!("Latest call {t}"))
                        .unwrap_or_else(|| "No calls yet".to_string())}
                </span>
            </div>

            <Space>
                {view! {
                    <Button appearance=ButtonAppearance::Subtle on_click=view_all_calls>
                        {icon("eye")}
                        " View all calls"
                    </Button>
                }.into_any()}
            </Space>
        </PageFrame>
    }
}
