//! Tab management module
//!
//! - `TabSet` - mutually exclusive trigger/panel selection
//! - `TabController` - reactive wrapper shared through context, mirrors the
//!   active tab into `?tab=` in the page URL
//! - `registry` - tab keys, labels and their panel views
//! - `page` / `tab_bar` - the views

pub mod page;
pub mod registry;
pub mod tab_bar;

pub use page::TabPanel;
pub use tab_bar::TabBar;

use contracts::shared::error::UiError;
use leptos::prelude::*;
use std::collections::{BTreeSet, HashMap};
use web_sys::window;

const TAB_QUERY_PARAM: &str = "tab";

/// Triggers and panels keyed by the same string.
///
/// After `init` exactly one trigger is active. The active panel is the one
/// keyed like the active trigger; when no such panel exists no panel is
/// visible and the selection still moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    triggers: Vec<String>,
    panels: BTreeSet<String>,
    active_trigger: String,
    active_panel: Option<String>,
}

impl TabSet {
    /// Selects `default_key` when it names a trigger, the first trigger otherwise.
    pub fn init(
        triggers: Vec<String>,
        panels: impl IntoIterator<Item = String>,
        default_key: Option<&str>,
    ) -> Result<Self, UiError> {
        let first = triggers
            .first()
            .cloned()
            .ok_or_else(|| UiError::missing("tab triggers"))?;
        let initial = default_key
            .filter(|key| triggers.iter().any(|t| t == key))
            .map(str::to_string)
            .unwrap_or(first);

        let mut set = Self {
            triggers,
            panels: panels.into_iter().collect(),
            active_trigger: initial.clone(),
            active_panel: None,
        };
        set.select(&initial)?;
        Ok(set)
    }

    /// Click on the trigger keyed `key`.
    pub fn select(&mut self, key: &str) -> Result<(), UiError> {
        if !self.triggers.iter().any(|t| t == key) {
            return Err(UiError::missing(format!("tab trigger [data-tab={key}]")));
        }
        self.active_trigger = key.to_string();
        if self.panels.contains(key) {
            self.active_panel = Some(key.to_string());
        } else {
            log::warn!("{}", UiError::missing(format!("tab panel #{key}")));
            self.active_panel = None;
        }
        Ok(())
    }

    pub fn active_trigger(&self) -> &str {
        &self.active_trigger
    }

    pub fn active_panel(&self) -> Option<&str> {
        self.active_panel.as_deref()
    }

    pub fn is_trigger_active(&self, key: &str) -> bool {
        self.active_trigger == key
    }

    pub fn is_panel_visible(&self, key: &str) -> bool {
        self.active_panel.as_deref() == Some(key)
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }
}

/// Reads the tab key from a `location.search` string.
pub fn tab_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(TAB_QUERY_PARAM).cloned()
}

/// Builds the `location.search` string for `key`.
pub fn query_for_tab(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([(TAB_QUERY_PARAM, key)])).unwrap_or_default();
    format!("?{}", query)
}

#[derive(Clone, Copy)]
pub struct TabController {
    state: RwSignal<TabSet>,
}

impl TabController {
    pub fn new(set: TabSet) -> Self {
        Self {
            state: RwSignal::new(set),
        }
    }

    pub fn select(&self, key: &str) {
        log::debug!("select tab: key='{}'", key);
        if let Some(Err(e)) = self.state.try_update(|s| s.select(key)) {
            log::warn!("{e}");
        }
    }

    pub fn is_trigger_active(&self, key: &str) -> bool {
        self.state.with(|s| s.is_trigger_active(key))
    }

    pub fn is_panel_visible(&self, key: &str) -> bool {
        self.state.with(|s| s.is_panel_visible(key))
    }

    pub fn active_trigger(&self) -> String {
        self.state.with(|s| s.active_trigger().to_string())
    }

    /// Restores the tab from `?tab=` and keeps the URL in sync afterwards.
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = tab_from_query(&search) {
            self.select(&key);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for_tab(&this.active_trigger());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

pub fn use_tabs() -> TabController {
    use_context::<TabController>().expect("TabController not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn assert_single_active(set: &TabSet) {
        let active: Vec<_> = set
            .triggers()
            .iter()
            .filter(|t| set.is_trigger_active(t))
            .collect();
        assert_eq!(active.len(), 1);
        let visible: Vec<_> = set
            .triggers()
            .iter()
            .filter(|t| set.is_panel_visible(t))
            .collect();
        assert!(visible.len() <= 1);
        if let Some(panel) = set.active_panel() {
            assert_eq!(panel, set.active_trigger());
        }
    }

    #[test]
    fn test_init_uses_default_or_first() {
        let triggers = keys(&["overview", "calls", "forms"]);
        let set = TabSet::init(triggers.clone(), triggers.clone(), Some("calls")).unwrap();
        assert_eq!(set.active_trigger(), "calls");
        assert_eq!(set.active_panel(), Some("calls"));

        let set = TabSet::init(triggers.clone(), triggers, Some("missing")).unwrap();
        assert_eq!(set.active_trigger(), "overview");
    }

    #[test]
    fn test_init_without_triggers_is_missing_target() {
        let err = TabSet::init(Vec::new(), Vec::new(), None).unwrap_err();
        assert_eq!(err, UiError::missing("tab triggers"));
    }

    #[test]
    fn test_exactly_one_active_after_every_click() {
        let triggers = keys(&["overview", "calls", "forms", "settings"]);
        let mut set = TabSet::init(triggers.clone(), triggers, None).unwrap();
        assert_single_active(&set);
        for key in ["calls", "calls", "settings", "overview", "forms"] {
            set.select(key).unwrap();
            assert_single_active(&set);
            assert_eq!(set.active_panel(), Some(key));
        }
    }

    #[test]
    fn test_trigger_without_panel_hides_all_panels() {
        let triggers = keys(&["overview", "reports"]);
        let mut set = TabSet::init(triggers, keys(&["overview"]), None).unwrap();
        set.select("reports").unwrap();
        assert_eq!(set.active_trigger(), "reports");
        assert_eq!(set.active_panel(), None);
        assert!(!set.is_panel_visible("overview"));
        assert_single_active(&set);
    }

    #[test]
    fn test_unknown_trigger_keeps_selection() {
        let triggers = keys(&["overview", "calls"]);
        let mut set = TabSet::init(triggers.clone(), triggers, None).unwrap();
        assert!(set.select("nope").is_err());
        assert_eq!(set.active_trigger(), "overview");
    }

    #[test]
    fn test_query_round_trip() {
        assert_eq!(query_for_tab("calls"), "?tab=calls");
        assert_eq!(tab_from_query("?tab=calls"), Some("calls".to_string()));
        assert_eq!(tab_from_query(""), None);
    }
}
