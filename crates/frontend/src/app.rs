use crate::layout::tabs::registry::tab_keys;
use crate::layout::tabs::{TabController, TabSet};
use crate::layout::ModalService;
use crate::routes::routes::AppRoutes;
use crate::shared::config::UiConfig;
use crate::shared::notifications::ToastService;
use crate::shared::transcript::TranscriptViewer;
use leptos::prelude::*;

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    // Provide ModalService for centralized modal management
    let modals = ModalService::new();
    modals.install_escape_listener();
    provide_context(modals);

    let toasts = ToastService::new(&config);
    provide_context(toasts);
    provide_context(TranscriptViewer::new(modals, toasts));

    match TabSet::init(tab_keys(), tab_keys(), Some(config.default_tab.as_str())) {
        Ok(set) => provide_context(TabController::new(set)),
        Err(e) => log::error!("tabs not initialised: {e}"),
    }

    provide_context(config);

    view! {
        <AppRoutes />
    }
}
