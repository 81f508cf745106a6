use dioxus::prelude::*;

use gloo_timers::callback::Timeout;

const TOAST_DISMISS_MS: u32 = 4000;

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub message: String,
}

/// Single-slot toast holder. A new toast replaces the current one and resets
/// the dismissal clock.
#[derive(Clone, Copy)]
pub struct Toasts {
    current: Signal<Option<Toast>>,
    epoch: Signal<u32>,
}

impl Toasts {
    pub fn show(&mut self, message: impl Into<String>) {
        let stamp = self.epoch.peek().wrapping_add(1);
        self.epoch.set(stamp);
        self.current.set(Some(Toast {
            message: message.into(),
        }));

        let mut current = self.current;
        let epoch = self.epoch;
        let task = Timeout::new(TOAST_DISMISS_MS, move || {
            // Only dismiss if no newer toast has claimed the slot since.
            if *epoch.peek() == stamp {
                current.set(None);
            }
        });
        task.forget();
    }
}

pub fn use_toast_provider() -> Toasts {
    let current = use_signal(|| None);
    let epoch = use_signal(|| 0);

    use_context_provider(|| Toasts { current, epoch })
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn Toaster() -> Element {
    let toasts = use_toasts();
    let current = toasts.current.read().clone();

    rsx! {
        div { class: "toast-region",
            {current.map(|toast| rsx! {
                div { class: "toast", "{toast.message}" }
            })}
        }
    }
}
