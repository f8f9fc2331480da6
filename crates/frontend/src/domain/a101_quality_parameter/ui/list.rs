use crate::shared::controls::{range_display, RangeSlider};
use crate::shared::data::sample::{quality_parameters, QualityParameter};
use crate::shared::icons::icon;
use crate::shared::notifications::{use_toasts, ToastService};
use crate::shared::page::{PageCategory, PageFrame};
use crate::shared::stubs::invoke_stub;
use leptos::prelude::*;

#[component]
pub fn QualityParameterList() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <PageFrame
            entity="a101_quality_parameter"
            category=PageCategory::List
            title="Quality Parameters"
        >
            <div class="param-list">
                {quality_parameters()
                    .into_iter()
                    .map(|parameter| view! { <ParameterRow parameter=parameter toasts=toasts /> })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}

#[component]
fn ParameterRow(parameter: QualityParameter, toasts: ToastService) -> impl IntoView {
    let target = RwSignal::new(parameter.target);
    let key = parameter.key;
    let name = parameter.name;
    let status = {
        let parameter = parameter.clone();
        move || parameter.status(target.get())
    };
    let status_class = status.clone();
    let plan_action = parameter.action_plan();
    let details_action = parameter.details();

    view! {
        <div class="param-row">
            <div class="param-row__info">
                <h3 class="param-row__name">{name}</h3>
                <p class="param-row__description">{parameter.description}</p>
                <span class="param-row__current">
                    "Current: " {range_display(parameter.current)}
                </span>
                <span class=move || status_class().class()>{move || status().label()}</span>
            </div>
            <RangeSlider label="Target" value=target />
            <div class="param-row__actions">
                <button
                    class="btn-secondary"
                    data-param=key
                    on:click=move |_| {
                        invoke_stub(&toasts, plan_action.clone());
                    }
                >
                    {icon("plus")}
                    " Create Action Plan"
                </button>
                <button
                    class="btn-link"
                    data-param=key
                    on:click=move |_| {
                        invoke_stub(&toasts, details_action.clone());
                    }
                >
                    {icon("eye")}
                    " View Details"
                </button>
            </div>
        </div>
    }
}
