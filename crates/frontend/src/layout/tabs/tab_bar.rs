use super::registry::TABS;
use super::use_tabs;
use crate::shared::icons::icon;
use contracts::shared::markup;
use leptos::prelude::*;

#[component]
pub fn TabBar() -> impl IntoView {
    let tabs = use_tabs();

    view! {
        <nav class="tabs-nav" role="tablist">
            {TABS
                .iter()
                .map(|tab| {
                    let key = tab.key;
                    view! {
                        <button
                            class=markup::CLASS_TAB_BUTTON
                            class:active=move || tabs.is_trigger_active(key)
                            role="tab"
                            aria-selected=move || tabs.is_trigger_active(key).to_string()
                            data-tab=key
                            on:click=move |_| tabs.select(key)
                        >
                            {icon(tab.icon)}
                            <span>{tab.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
