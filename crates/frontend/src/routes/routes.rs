use crate::layout::tabs::TabController;
use crate::layout::Shell;
use crate::shared::transcript::TranscriptModal;
use leptos::prelude::*;

#[component]
fn MainLayout(tabs: TabController) -> impl IntoView {
    // Restore the tab from the URL once, then keep `?tab=` in sync.
    tabs.init_url_sync();

    view! {
        <Shell />
        <TranscriptModal />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    match use_context::<TabController>() {
        Some(tabs) => view! { <MainLayout tabs=tabs /> }.into_any(),
        None => view! {
            <div class="app-error">"Dashboard could not be initialised. See the console for details."</div>
        }
        .into_any(),
    }
}
