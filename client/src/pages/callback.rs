use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::session::{self, Auth};

/// OAuth landing route: exchanges the authorization code for a session,
/// then moves on to the application form. Failures show briefly and fall
/// back to the home page.
#[component]
pub fn DiscordCallback() -> impl IntoView {
    let auth = Auth::expect();
    let navigate = use_navigate();
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let query = window.location().search().unwrap_or_default();
        let code = session::query_param(&query, "code");
        let navigate = navigate.clone();

        spawn_local(async move {
            let Some(code) = code else {
                error.set(Some("No authorization code received from Discord".to_string()));
                TimeoutFuture::new(3_000).await;
                navigate("/", Default::default());
                return;
            };

            match api::exchange_discord_code(&code).await {
                Ok(resp) => {
                    auth.login(&resp.token, resp.user);
                    navigate("/apply", Default::default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Discord callback error: {e}").into());
                    error.set(Some(e));
                    TimeoutFuture::new(3_000).await;
                    navigate("/", Default::default());
                }
            }
        });
    });

    view! {
        <div style="min-height: 60vh; display: flex; align-items: center; justify-content: center;">
            <div style="text-align: center;">
                {move || match error.get() {
                    Some(message) => view! {
                        <p style="font-size: 0.95rem; font-weight: 600; color: #dc2626; margin: 0 0 6px;">
                            {message}
                        </p>
                        <p style="font-size: 0.8rem; color: #9a9590; margin: 0;">
                            "Redirecting to home..."
                        </p>
                    }
                    .into_any(),
                    None => view! {
                        <p style="font-size: 0.9rem; color: #9a9590; margin: 0;">
                            "Authenticating with Discord..."
                        </p>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
