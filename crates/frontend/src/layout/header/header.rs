use crate::shared::icons::icon;
use crate::shared::notifications::use_toasts;
use crate::shared::stubs::invoke_stub;
use contracts::shared::actions::StubAction;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Space};

#[component]
pub fn Header() -> impl IntoView {
    let toasts = use_toasts();

    let export_report = move |_| {
        invoke_stub(
            &toasts,
            StubAction::ExportReport {
                format: "PDF".to_string(),
            },
        );
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                {icon("dashboard")}
                <span class="header__title">"Quality Automation"</span>
            </div>
            <div class="header__actions">
                <Space>
                    {view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=export_report>
                            {icon("download")}
                            " Export"
                        </Button>
                    }.into_any()}
                </Space>
            </div>
        </header>
    }
}
