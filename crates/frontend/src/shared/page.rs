//! PageFrame: root wrapper for every page rendered inside a tab panel.
//!
//! The root element carries `id="{entity}--{category}"` and
//! `data-page-category`, so a page found in the DOM inspector can be traced
//! back to its module (`p100_call_register--list` → `projections/p100_call_register`).

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Table with filters.
    List,
    /// Analytical overview.
    Dashboard,
    /// Editor / designer page.
    Designer,
    /// System settings.
    System,
}

impl PageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Dashboard => "dashboard",
            PageCategory::Designer => "designer",
            PageCategory::System => "system",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            PageCategory::Dashboard => "page page--dashboard",
            PageCategory::Designer => "page page--designer",
            PageCategory::List | PageCategory::System => "page",
        }
    }
}

/// Page id in the `{entity}--{category}` format.
pub fn page_id(entity: &str, category: PageCategory) -> String {
    format!("{entity}--{}", category.as_str())
}

#[component]
pub fn PageFrame(
    /// Module name of the page, e.g. `"p100_call_register"`.
    entity: &'static str,
    category: PageCategory,
    /// Page title shown in the header
    #[prop(into)]
    title: String,
    /// Header actions (buttons)
    #[prop(optional, into)]
    actions: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id(entity, category)
            class=category.class()
            data-page-category=category.as_str()
        >
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
                <div class="page__actions">
                    {actions.map(|a| a.run())}
                </div>
            </div>
            <div class="page__content">
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert_eq!(
            page_id("p100_call_register", PageCategory::List),
            "p100_call_register--list"
        );
        assert_eq!(
            page_id("d100_quality_overview", PageCategory::Dashboard),
            "d100_quality_overview--dashboard"
        );
    }
}
