use leptos::prelude::*;

/// Badge carrying a ready-made class list (`score-badge score-high`, ...).
///
/// The transcript viewer copies that class list verbatim, so the badge must
/// not add classes of its own.
#[component]
pub fn ClassBadge(
    #[prop(into)] class: String,
    #[prop(into)] text: String,
) -> impl IntoView {
    view! { <span class=class>{text}</span> }
}
