//! Non-blocking notifications.
//!
//! Controllers report through the `Notifier` trait. In the browser the
//! `ToastService` renders short-lived toasts; anything that only needs the log
//! can use `LogNotifier`.

pub mod toast_host;

use crate::shared::config::UiConfig;
use contracts::shared::notification::{Notification, NotificationLevel};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;

pub use toast_host::ToastHost;

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => log::error!("{}", notification.message),
            NotificationLevel::Warning => log::warn!("{}", notification.message),
            NotificationLevel::Info | NotificationLevel::Success => {
                log::info!("{}", notification.message)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub notification: Notification,
}

/// Appends `toast`, dropping the oldest entries beyond `max`.
pub fn push_capped(toasts: &mut Vec<Toast>, toast: Toast, max: usize) {
    toasts.push(toast);
    if toasts.len() > max {
        let overflow = toasts.len() - max;
        toasts.drain(..overflow);
    }
}

/// Toast list shared through context.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    timeout_ms: u32,
    max_toasts: usize,
}

impl ToastService {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            timeout_ms: config.toast_timeout_ms,
            max_toasts: config.max_toasts.max(1),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Notifier for ToastService {
    fn notify(&self, notification: Notification) {
        LogNotifier.notify(notification.clone());

        let id = Uuid::new_v4();
        let max = self.max_toasts;
        self.toasts
            .update(|list| push_capped(list, Toast { id, notification }, max));

        if self.timeout_ms > 0 {
            let svc = *self;
            let timeout = self.timeout_ms;
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(timeout).await;
                svc.dismiss(id);
            });
        }
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Notifier;
    use contracts::shared::notification::Notification;
    use std::cell::RefCell;

    /// Collects notifications for assertions.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub seen: RefCell<Vec<Notification>>,
    }

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<String> {
            self.seen.borrow().iter().map(|n| n.message.clone()).collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.seen.borrow_mut().push(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(message: &str) -> Toast {
        Toast {
            id: Uuid::new_v4(),
            notification: Notification::info(message),
        }
    }

    #[test]
    fn test_push_capped_keeps_newest() {
        let mut list = Vec::new();
        for msg in ["a", "b", "c", "d"] {
            push_capped(&mut list, toast(msg), 3);
        }
        let messages: Vec<_> = list.iter().map(|t| t.notification.message.as_str()).collect();
        assert_eq!(messages, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_push_capped_under_limit() {
        let mut list = Vec::new();
        push_capped(&mut list, toast("only"), 5);
        assert_eq!(list.len(), 1);
    }
}
