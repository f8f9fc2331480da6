use super::{default_toggles, AUTO_SCORING, EMAIL_ALERTS, SENTIMENT_ANALYSIS, TEAM, WEEKLY_DIGEST};
use crate::shared::controls::{RangeSlider, ToggleSwitch};
use crate::shared::icons::icon;
use crate::shared::notifications::use_toasts;
use crate::shared::page::{PageCategory, PageFrame};
use crate::shared::stubs::invoke_stub;
use contracts::shared::actions::StubAction;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let toasts = use_toasts();
    let toggles = RwSignal::new(default_toggles());
    let passing_score = RwSignal::new(75u8);

    let save_all = move |_| {
        invoke_stub(&toasts, StubAction::SaveConfiguration);
    };
    let sync_now = move |_| {
        invoke_stub(&toasts, StubAction::RunSync);
    };
    let add_user = move |_| {
        invoke_stub(&toasts, StubAction::AddUser);
    };

    view! {
        <PageFrame
            entity="settings"
            category=PageCategory::System
            title="Settings"
            actions=move || view! {
                <Button appearance=ButtonAppearance::Primary on_click=save_all>
                    "Save All Changes"
                </Button>
            }
        >
            <Card>
                <h3 class="settings__section-title">"Scoring"</h3>
                <ToggleSwitch group=toggles name=AUTO_SCORING />
                <ToggleSwitch group=toggles name=SENTIMENT_ANALYSIS />
                <RangeSlider label="Passing score" value=passing_score />
            </Card>

            <Card>
                <h3 class="settings__section-title">"Notifications"</h3>
                <ToggleSwitch group=toggles name=EMAIL_ALERTS />
                <ToggleSwitch group=toggles name=WEEKLY_DIGEST />
            </Card>

            <Card>
                <h3 class="settings__section-title">"Integrations"</h3>
                <p class="settings__hint">"Call recordings are imported from the telephony platform."</p>
                <Button appearance=ButtonAppearance::Secondary on_click=sync_now>
                    {icon("refresh")}
                    " Sync Now"
                </Button>
            </Card>

            <Card>
                <h3 class="settings__section-title">"Users"</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Role"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {TEAM
                            .iter()
                            .map(|member| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{member.name}</td>
                                    <td class="table__cell">{member.role}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
                <Button appearance=ButtonAppearance::Subtle on_click=add_user>
                    {icon("users")}
                    " Add User"
                </Button>
            </Card>
        </PageFrame>
    }
}
