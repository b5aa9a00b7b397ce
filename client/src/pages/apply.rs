use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use serde_json::{Map, Value};
use wasm_bindgen_futures::spawn_local;

use portal_shared::Position;
use portal_shared::forms;

use crate::api;
use crate::form::ApplicationForm;
use crate::session::Auth;
use crate::toast::Toasts;

#[component]
pub fn Apply() -> impl IntoView {
    let auth = Auth::expect();
    let toasts = Toasts::expect();
    let navigate = use_navigate();

    let selected: RwSignal<Option<Position>> = RwSignal::new(None);
    let submitting = RwSignal::new(false);
    let success_dialog = RwSignal::new(false);

    let on_submit = Callback::new(move |form_data: Map<String, Value>| {
        let Some(position) = selected.get_untracked() else {
            toasts.error("Not Ready", "Please log in and select a position");
            return;
        };
        if !auth.is_authenticated() {
            toasts.error("Not Ready", "Please log in and select a position");
            return;
        }

        submitting.set(true);
        spawn_local(async move {
            match api::submit_application(position, form_data).await {
                Ok(()) => success_dialog.set(true),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to submit application: {e}").into(),
                    );
                    toasts.error(
                        "Submission Failed",
                        &format!("Failed to submit application: {e}"),
                    );
                }
            }
            submitting.set(false);
        });
    });

    // Give the confirmation dialog a moment, then move on to the profile.
    Effect::new(move || {
        if !success_dialog.get() {
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            TimeoutFuture::new(2_000).await;
            navigate("/profile", Default::default());
        });
    });

    view! {
        <section style="border-bottom: 1px solid #282c3e;">
            <div style="max-width: 680px; margin: 0 auto; padding: 56px 20px;">
                <h1 style="font-size: 1.7rem; font-weight: 600; color: #e2e0d8; margin: 0 0 8px;">"Apply"</h1>
                {move || if auth.is_authenticated() {
                    view! {
                        <p style="font-size: 0.9rem; color: #9a9590; margin: 0;">
                            "Select a position and complete the application form."
                        </p>
                    }
                    .into_any()
                } else {
                    view! {
                        <p style="font-size: 0.9rem; color: #9a9590; margin: 0 0 16px;">
                            "You must be logged in to apply."
                        </p>
                        <a
                            href="/"
                            style="display: inline-flex; padding: 9px 18px; font-size: 0.85rem; font-weight: 600; color: #0c0e17; background: #f5c542; border-radius: 6px; text-decoration: none;"
                        >
                            "Go Home"
                        </a>
                    }
                    .into_any()
                }}
            </div>
        </section>

        {move || auth.is_authenticated().then(|| view! {
            <section style="padding: 40px 0;">
                <div style="max-width: 680px; margin: 0 auto; padding: 0 20px;">
                    <div style="margin-bottom: 28px;">
                        <label for="position-select" style="display: block; font-size: 0.85rem; font-weight: 600; color: #e2e0d8; margin-bottom: 8px;">
                            "Position"
                        </label>
                        <select
                            id="position-select"
                            style="width: 100%; max-width: 320px; padding: 9px 12px; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 6px; color: #e2e0d8; font-size: 0.88rem; outline: none;"
                            on:change=move |ev| selected.set(Position::from_str(&event_target_value(&ev)))
                        >
                            <option value="" disabled=true selected=move || selected.get().is_none()>
                                "Select a position..."
                            </option>
                            {Position::ALL
                                .iter()
                                .map(|&position| {
                                    let label = if position.category() == "Staff" {
                                        format!("{} (Staff)", position.label())
                                    } else {
                                        position.label().to_string()
                                    };
                                    view! { <option value=position.as_str()>{label}</option> }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    {move || match selected.get() {
                        Some(position) => view! {
                            <div style="border: 1px solid #282c3e; border-radius: 6px;">
                                <div style="padding: 12px 20px; border-bottom: 1px solid #282c3e; background: #13161f;">
                                    <h2 style="font-size: 0.95rem; font-weight: 600; color: #e2e0d8; margin: 0;">
                                        {format!("{} Application", position.label())}
                                    </h2>
                                </div>
                                <div style="padding: 20px;">
                                    <ApplicationForm
                                        schema=forms::schema_for(position)
                                        on_submit=on_submit
                                        submitting=submitting
                                    />
                                </div>
                            </div>
                        }
                        .into_any(),
                        None => view! {
                            <p style="font-size: 0.85rem; color: #9a9590; margin: 0;">
                                "Select a position above to view the application form."
                            </p>
                        }
                        .into_any(),
                    }}
                </div>
            </section>
        })}

        {move || success_dialog.get().then(|| view! {
            <div style="position: fixed; inset: 0; z-index: 100; background: rgba(0,0,0,0.6); display: flex; align-items: center; justify-content: center; padding: 20px;">
                <div style="max-width: 420px; background: #13161f; border: 1px solid #282c3e; border-radius: 8px; padding: 24px;">
                    <h2 style="font-size: 1.1rem; font-weight: 700; color: #e2e0d8; margin: 0 0 10px;">
                        "Application Submitted!"
                    </h2>
                    <p style="font-size: 0.85rem; color: #9a9590; margin: 0;">
                        "Your application has been successfully submitted. You'll be redirected to your profile in a moment. Our team will review your application and contact you through Discord."
                    </p>
                </div>
            </div>
        })}
    }
}
