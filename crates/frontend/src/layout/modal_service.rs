use crate::shared::icons::icon;
use contracts::shared::error::UiError;
use contracts::shared::markup;
use leptos::ev;
use leptos::prelude::*;
use std::collections::BTreeMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Where a pointer event inside a modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The overlay itself, outside the content surface.
    Backdrop,
    Content,
}

/// Visibility of every registered modal.
///
/// No stacking order: any number of modals may be open, Escape closes all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalRegistry {
    modals: BTreeMap<String, bool>,
}

impl ModalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a modal in the hidden state. Re-registering keeps its state.
    pub fn register(&mut self, id: &str) {
        self.modals.entry(id.to_string()).or_insert(false);
    }

    pub fn open(&mut self, id: &str) -> Result<(), UiError> {
        let visible = self
            .modals
            .get_mut(id)
            .ok_or_else(|| UiError::missing(format!("modal #{id}")))?;
        *visible = true;
        Ok(())
    }

    pub fn close(&mut self, id: &str) -> Result<(), UiError> {
        let visible = self
            .modals
            .get_mut(id)
            .ok_or_else(|| UiError::missing(format!("modal #{id}")))?;
        *visible = false;
        Ok(())
    }

    /// Escape handler. Returns how many modals were open.
    pub fn close_all(&mut self) -> usize {
        let mut closed = 0;
        for visible in self.modals.values_mut() {
            if *visible {
                closed += 1;
            }
            *visible = false;
        }
        closed
    }

    /// Pointer click inside modal `id`. Only a backdrop click closes it.
    pub fn click(&mut self, id: &str, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop => match self.modals.get_mut(id) {
                Some(visible) if *visible => {
                    *visible = false;
                    true
                }
                _ => false,
            },
            ClickTarget::Content => false,
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.modals.get(id).copied().unwrap_or(false)
    }

    pub fn open_count(&self) -> usize {
        self.modals.values().filter(|v| **v).count()
    }
}

/// Сервис для централизованного управления модальными окнами
#[derive(Clone, Copy)]
pub struct ModalService {
    registry: RwSignal<ModalRegistry>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            registry: RwSignal::new(ModalRegistry::new()),
        }
    }

    pub fn register(&self, id: &str) {
        self.registry.update(|r| r.register(id));
    }

    /// Показать модальное окно
    pub fn open(&self, id: &str) {
        if let Some(Err(e)) = self.registry.try_update(|r| r.open(id)) {
            log::warn!("{e}");
        }
    }

    /// Скрыть модальное окно
    pub fn close(&self, id: &str) {
        if let Some(Err(e)) = self.registry.try_update(|r| r.close(id)) {
            log::warn!("{e}");
        }
    }

    pub fn close_all(&self) {
        let closed = self.registry.try_update(|r| r.close_all()).unwrap_or(0);
        if closed > 0 {
            log::debug!("escape closed {closed} modal(s)");
        }
    }

    pub fn click(&self, id: &str, target: ClickTarget) {
        self.registry.update(|r| {
            r.click(id, target);
        });
    }

    /// Проверить, открыто ли модальное окно
    pub fn is_open(&self, id: &str) -> bool {
        self.registry.with(|r| r.is_open(id))
    }

    /// Runs `f` against the registry and notifies subscribers.
    pub fn update_registry<U>(&self, f: impl FnOnce(&mut ModalRegistry) -> U) -> Option<U> {
        self.registry.try_update(f)
    }

    /// Global Escape handler. Install once for the application lifetime.
    pub fn install_escape_listener(&self) {
        let svc = *self;
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    svc.close_all();
                }
            }
        }) as Box<dyn FnMut(_)>);

        match web_sys::window().and_then(|w| w.document()) {
            Some(document) => {
                let _ = document
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
                closure.forget();
            }
            None => log::warn!("{}", UiError::missing("document for Escape handler")),
        }
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modals() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

/// Modal dialog bound to `ModalService` by `id`.
///
/// Closes on its close button, on a click that lands on the backdrop itself,
/// and on Escape (handled globally).
#[component]
pub fn Modal(
    /// Element id, also the registry key
    id: &'static str,
    /// Title of the modal
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    let modals = use_modals();
    modals.register(id);

    let handle_backdrop_click = move |ev: ev::MouseEvent| {
        let target = match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) if t == ct => ClickTarget::Backdrop,
            _ => ClickTarget::Content,
        };
        modals.click(id, target);
    };

    view! {
        <div
            id=id
            class=markup::CLASS_MODAL
            class:active=move || modals.is_open(id)
            on:click=handle_backdrop_click
        >
            <div class=markup::CLASS_MODAL_CONTENT>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        class=format!("button button--icon {}", markup::CLASS_MODAL_CLOSE)
                        on:click=move |_| modals.close(id)
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(ids: &[&str]) -> ModalRegistry {
        let mut r = ModalRegistry::new();
        for id in ids {
            r.register(id);
        }
        r
    }

    #[test]
    fn test_modals_start_hidden() {
        let r = registry(&["transcriptModal", "planModal"]);
        assert_eq!(r.open_count(), 0);
        assert!(!r.is_open("transcriptModal"));
    }

    #[test]
    fn test_escape_closes_every_open_modal() {
        let mut r = registry(&["a", "b", "c"]);
        for sequence in [vec!["a"], vec!["a", "b", "c"], vec!["b", "b", "c"], vec![]] {
            for id in &sequence {
                r.open(id).unwrap();
            }
            r.close_all();
            assert_eq!(r.open_count(), 0);
        }
    }

    #[test]
    fn test_backdrop_click_closes_only_that_modal() {
        let mut r = registry(&["a", "b"]);
        r.open("a").unwrap();
        r.open("b").unwrap();
        assert!(r.click("a", ClickTarget::Backdrop));
        assert!(!r.is_open("a"));
        assert!(r.is_open("b"));
    }

    #[test]
    fn test_content_click_keeps_modal_open() {
        let mut r = registry(&["a"]);
        r.open("a").unwrap();
        assert!(!r.click("a", ClickTarget::Content));
        assert!(r.is_open("a"));
    }

    #[test]
    fn test_close_button_closes_modal() {
        let mut r = registry(&["a"]);
        r.open("a").unwrap();
        r.close("a").unwrap();
        assert!(!r.is_open("a"));
    }

    #[test]
    fn test_unknown_modal_is_missing_target() {
        let mut r = registry(&["a"]);
        assert_eq!(r.open("nope"), Err(UiError::missing("modal #nope")));
        assert_eq!(r.open_count(), 0);
    }

    #[test]
    fn test_register_keeps_existing_state() {
        let mut r = registry(&["a"]);
        r.open("a").unwrap();
        r.register("a");
        assert!(r.is_open("a"));
    }
}
