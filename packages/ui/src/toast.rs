use std::time::Duration;

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    pub auto_close: Duration,
    next_id: u64,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Duration::from_millis(5000))
    }
}

impl Toasts {
    pub fn new(auto_close: Duration) -> Self {
        Self {
            entries: Vec::new(),
            auto_close,
            next_id: 0,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.entries.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Queue a notification; it is removed after the configured delay even when
/// the calling component is gone by then.
pub fn notify(toasts: &mut Signal<Toasts>, kind: ToastKind, message: &str) {
    match kind {
        ToastKind::Error => tracing::warn!("{message}"),
        _ => tracing::info!("{message}"),
    }
    let id = toasts.write().push(kind, message);
    let delay = toasts.peek().auto_close;
    if delay.is_zero() {
        return;
    }
    let mut toasts = *toasts;
    // Root scope: the caller may unmount before the delay ends.
    let task = spawn_forever(async move {
        sleep(delay).await;
        toasts.write().dismiss(id);
    });
    if task.is_none() {
        tracing::warn!("toast {id} will stay until dismissed: no runtime");
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Provides the toast signal and renders the stack in the top-right corner.
#[component]
pub fn ToastHost(auto_close_ms: u32, children: Element) -> Element {
    let mut toasts =
        use_context_provider(|| Signal::new(Toasts::new(Duration::from_millis(auto_close_ms.into()))));
    let entries = toasts().entries;

    rsx! {
        {children}
        div {
            class: "toast-stack",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Error => "toast toast-error",
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Info => "toast toast-info",
                    },
                    title: "Dismiss",
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}
