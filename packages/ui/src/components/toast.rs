//! Toast notifications.
//!
//! [`ToastProvider`] mounts the stack once near the app root and puts a
//! [`ToastApi`] handle in context. Screens call [`use_toast`] and report
//! outcomes with `toast.success(...)` / `toast.error(...)`; each toast
//! dismisses itself after its delay.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct ToastItem {
    id: u64,
    kind: ToastKind,
    message: String,
}

/// Per-toast options. Currently only the auto-dismiss delay; failure
/// toasts pass a longer one so their text can actually be read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToastOptions {
    duration_ms: u64,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self { duration_ms: 4000 }
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for pushing toasts, available anywhere under [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct ToastApi {
    toasts: Signal<Vec<ToastItem>>,
    next_id: Signal<u64>,
}

impl ToastApi {
    pub fn success(&self, message: String, options: ToastOptions) {
        self.push(ToastKind::Success, message, options);
    }

    pub fn error(&self, message: String, options: ToastOptions) {
        self.push(ToastKind::Error, message, options);
    }

    fn push(&self, kind: ToastKind, message: String, options: ToastOptions) {
        let mut toasts = self.toasts;
        let mut next_id = self.next_id;

        let id = next_id() + 1;
        next_id.set(id);
        toasts.write().push(ToastItem { id, kind, message });

        // Auto-dismiss after the configured delay
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(std::time::Duration::from_millis(options.duration_ms))
                .await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_millis(options.duration_ms)).await;

            toasts.write().retain(|toast| toast.id != id);
        });
    }
}

/// Get the toast handle.
pub fn use_toast() -> ToastApi {
    use_context::<ToastApi>()
}

/// Provider component that owns the toast stack.
/// Wrap your app with this component to enable toasts.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::<ToastItem>::new);
    let next_id = use_signal(|| 0u64);

    use_context_provider(|| ToastApi { toasts, next_id });

    rsx! {
        {children}
        div {
            class: "toast-stack",
            for toast in toasts() {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_duration_is_configurable() {
        let padrao = ToastOptions::new();
        assert_eq!(padrao.duration_ms, 4000);

        let longa = ToastOptions::new().duration_ms(6000);
        assert_eq!(longa.duration_ms, 6000);
    }
}
