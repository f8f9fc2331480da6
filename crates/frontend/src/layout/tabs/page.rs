//! TabPanel component - wrapper для отображения контента таба

use super::use_tabs;
use contracts::shared::markup;
use leptos::prelude::*;

/// Panel for one tab key. Rendered once, shown or hidden by the `active` class.
#[component]
pub fn TabPanel(key: &'static str, children: Children) -> impl IntoView {
    let tabs = use_tabs();

    view! {
        <section
            id=key
            class=markup::CLASS_TAB_CONTENT
            class:active=move || tabs.is_panel_visible(key)
            data-panel=key
        >
            {children()}
        </section>
    }
}
