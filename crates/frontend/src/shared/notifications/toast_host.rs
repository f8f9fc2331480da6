use super::{use_toasts, Toast};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Renders the toast list in the bottom-right corner. Mount once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.toasts()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.notification.level.css_modifier());
                    view! {
                        <div class=class>
                            <span class="toast__message">{toast.notification.message}</span>
                            <button
                                class="button button--icon toast__close"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
