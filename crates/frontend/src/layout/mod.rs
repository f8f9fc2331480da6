pub mod header;
pub mod modal_service;
pub mod tabs;

pub use modal_service::{Modal, ModalService};

use crate::shared::notifications::ToastHost;
use leptos::prelude::*;
use tabs::registry::{render_tab_content, TABS};
use tabs::{TabBar, TabPanel};

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, export)                  |
/// +------------------------------------------+
/// |  TabBar                                  |
/// +------------------------------------------+
/// |  active TabPanel                         |
/// +------------------------------------------+
/// ```
///
/// Panels are all mounted up front and switched with the `active` class, so
/// controller state (filters, selections) survives tab switches.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <TabBar />
            <main class="app-main">
                {TABS
                    .iter()
                    .filter_map(|tab| {
                        render_tab_content(tab.key)
                            .map(|content| view! { <TabPanel key=tab.key>{content}</TabPanel> })
                    })
                    .collect_view()}
            </main>
            <ToastHost />
        </div>
    }
}
