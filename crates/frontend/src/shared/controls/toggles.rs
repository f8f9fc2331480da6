use crate::shared::notifications::{use_toasts, Notifier};
use contracts::shared::error::UiError;
use contracts::shared::markup;
use contracts::shared::notification::Notification;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Named on/off settings. Changing one only logs and notifies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleGroup {
    switches: BTreeMap<String, bool>,
}

impl ToggleGroup {
    pub fn new<'a>(switches: impl IntoIterator<Item = (&'a str, bool)>) -> Self {
        Self {
            switches: switches
                .into_iter()
                .map(|(name, on)| (name.to_string(), on))
                .collect(),
        }
    }

    pub fn set(
        &mut self,
        name: &str,
        checked: bool,
        notifier: &dyn Notifier,
    ) -> Result<(), UiError> {
        let state = self
            .switches
            .get_mut(name)
            .ok_or_else(|| UiError::missing(format!("toggle `{name}`")))?;
        *state = checked;
        log::info!("toggle changed: {name} = {checked}");
        let word = if checked { "enabled" } else { "disabled" };
        notifier.notify(Notification::info(format!("{name} {word}")));
        Ok(())
    }

    pub fn is_on(&self, name: &str) -> bool {
        self.switches.get(name).copied().unwrap_or(false)
    }
}

#[component]
pub fn ToggleSwitch(
    group: RwSignal<ToggleGroup>,
    #[prop(into)] name: String,
) -> impl IntoView {
    let toasts = use_toasts();
    let label = name.clone();
    let key = name.clone();

    view! {
        <label class=markup::CLASS_TOGGLE_SWITCH>
            <input
                type="checkbox"
                prop:checked=move || group.with(|g| g.is_on(&key))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    if let Some(Err(e)) = group.try_update(|g| g.set(&name, checked, &toasts)) {
                        log::warn!("{e}");
                    }
                }
            />
            <span class="toggle-switch__slider"></span>
            <span class="toggle-switch__label">{label}</span>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::testing::RecordingNotifier;

    #[test]
    fn test_toggle_notifies_change() {
        let mut group = ToggleGroup::new([("Auto-scoring", false), ("Email alerts", true)]);
        let notifier = RecordingNotifier::default();
        group.set("Auto-scoring", true, &notifier).unwrap();
        assert!(group.is_on("Auto-scoring"));
        assert!(group.is_on("Email alerts"));
        assert_eq!(notifier.messages(), vec!["Auto-scoring enabled"]);
    }

    #[test]
    fn test_unknown_toggle_is_missing_target() {
        let mut group = ToggleGroup::new([("Email alerts", true)]);
        let notifier = RecordingNotifier::default();
        assert!(group.set("Pager", true, &notifier).is_err());
        assert!(notifier.seen.borrow().is_empty());
    }
}
