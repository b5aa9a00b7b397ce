use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TOAST_DISMISS_MS: u32 = 4_500;

thread_local! {
    static NEXT_TOAST_ID: Cell<u64> = const { Cell::new(0) };
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub message: String,
}

/// Transient notification stack. Provided once at the root; pages push
/// through the handle and entries dismiss themselves.
#[derive(Clone, Copy)]
pub struct Toasts(pub RwSignal<Vec<Toast>>);

impl Toasts {
    pub fn expect() -> Self {
        expect_context::<Toasts>()
    }

    pub fn success(self, title: &str, message: &str) {
        self.push(ToastLevel::Success, title, message);
    }

    pub fn error(self, title: &str, message: &str) {
        self.push(ToastLevel::Error, title, message);
    }

    fn push(self, level: ToastLevel, title: &str, message: &str) {
        let id = NEXT_TOAST_ID.with(|counter| {
            let id = counter.get();
            counter.set(id + 1);
            id
        });
        let Toasts(list) = self;
        list.update(|toasts| {
            toasts.push(Toast {
                id,
                level,
                title: title.to_string(),
                message: message.to_string(),
            });
        });
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            list.update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let Toasts(list) = Toasts::expect();

    view! {
        <div style="position: fixed; bottom: 20px; right: 20px; z-index: 200; display: flex; flex-direction: column; gap: 8px; max-width: 340px;">
            {move || {
                list.get()
                    .into_iter()
                    .map(|toast| {
                        let accent = match toast.level {
                            ToastLevel::Success => "#16a34a",
                            ToastLevel::Error => "#dc2626",
                        };
                        view! {
                            <div style="background: #161921; border: 1px solid #282c3e; border-radius: 6px; overflow: hidden; box-shadow: 0 4px 16px rgba(0,0,0,0.5); display: flex; flex-direction: row;">
                                <div style=format!("width: 3px; flex-shrink: 0; background: {accent};") />
                                <div style="padding: 10px 12px; flex: 1;">
                                    <div style="font-size: 0.8rem; font-weight: 700; color: #e2e0d8;">
                                        {toast.title}
                                    </div>
                                    <div style="font-size: 0.72rem; color: #9a9590; margin-top: 2px;">
                                        {toast.message}
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
