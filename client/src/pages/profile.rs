use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use portal_shared::avatar::rgb_css;
use portal_shared::time_text::format_date_time;
use portal_shared::{Application, ApplicationStatus};

use crate::api;
use crate::layout::Avatar;
use crate::session::Auth;

fn status_pill(status: ApplicationStatus) -> impl IntoView {
    let (r, g, b) = status.color_rgb();
    view! {
        <div style=format!(
            "display: inline-flex; align-items: center; gap: 7px; padding: 5px 14px; border-radius: 999px; font-size: 0.8rem; font-weight: 600; color: {}; background: rgba({r},{g},{b},0.12); border: 1px solid rgba({r},{g},{b},0.35); width: fit-content;",
            rgb_css(r, g, b),
        )>
            <span>{status.glyph()}</span>
            <span>{status.label()}</span>
        </div>
    }
}

#[component]
pub fn Profile() -> impl IntoView {
    let auth = Auth::expect();

    let applications: RwSignal<Vec<Application>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(true);
    let copied = RwSignal::new(false);

    Effect::new(move || {
        if !auth.is_authenticated() {
            return;
        }
        spawn_local(async move {
            match api::fetch_my_applications().await {
                Ok(list) => applications.set(list),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch applications: {e}").into(),
                    );
                }
            }
            loading.set(false);
        });
    });

    let copy_user_id = move |id: String| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let _ = window.navigator().clipboard().write_text(&id);
        copied.set(true);
        spawn_local(async move {
            TimeoutFuture::new(2_000).await;
            copied.set(false);
        });
    };

    view! {
        <div style="max-width: 900px; margin: 0 auto; padding: 36px 20px;">
            {move || match auth.user.get() {
                None => view! {
                    <p style="font-size: 0.9rem; color: #9a9590;">
                        "Please log in to view your profile."
                    </p>
                }
                .into_any(),
                Some(user) => {
                    let (r, g, b) = user.role.color_rgb();
                    let user_id = user.id.clone();
                    view! {
                        <div style="background: #13161f; border: 1px solid #282c3e; border-radius: 8px; padding: 28px; margin-bottom: 28px; display: flex; gap: 22px; align-items: center; flex-wrap: wrap;">
                            <Avatar username=user.username.clone() avatar=user.avatar.clone() size=88 />
                            <div style="flex: 1; min-width: 240px;">
                                <h1 style="font-size: 1.7rem; font-weight: 700; color: #e2e0d8; margin: 0 0 4px;">
                                    {user.username.clone()}
                                </h1>
                                <p style="font-size: 0.88rem; color: #9a9590; margin: 0 0 12px;">
                                    {user.email.clone()}
                                </p>
                                <div style="display: flex; gap: 10px; flex-wrap: wrap; margin-bottom: 12px;">
                                    <span style=format!(
                                        "padding: 3px 10px; border-radius: 4px; font-size: 0.72rem; font-weight: 700; letter-spacing: 0.05em; text-transform: uppercase; color: #e2e0d8; background: {};",
                                        rgb_css(r, g, b),
                                    )>
                                        {user.role.label()}
                                    </span>
                                    {user.role.can_access_admin().then(|| view! {
                                        <span style="padding: 3px 10px; border-radius: 4px; font-size: 0.72rem; font-weight: 700; color: #f5c542; border: 1px solid rgba(245,197,66,0.4);">
                                            "Admin Access"
                                        </span>
                                    })}
                                </div>
                                <p style="font-size: 0.8rem; color: #9a9590; margin: 0 0 14px;">
                                    {format!("Joined {}", format_date_time(&user.joined_at))}
                                </p>
                                <button
                                    style="padding: 7px 14px; font-size: 0.8rem; color: #e2e0d8; background: transparent; border: 1px solid #282c3e; border-radius: 6px; cursor: pointer;"
                                    on:click=move |_| copy_user_id(user_id.clone())
                                >
                                    {move || if copied.get() { "\u{2713} Copied!" } else { "Copy User ID" }}
                                </button>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}

            {move || auth.is_authenticated().then(|| view! {
                <div style="background: #13161f; border: 1px solid #282c3e; border-radius: 8px; padding: 24px;">
                    <h2 style="font-size: 1.05rem; font-weight: 600; color: #e2e0d8; margin: 0 0 4px;">
                        "Your Applications"
                    </h2>
                    <p style="font-size: 0.8rem; color: #9a9590; margin: 0 0 18px;">
                        {move || {
                            let count = applications.with(Vec::len);
                            if count == 0 {
                                "You haven't submitted any applications yet.".to_string()
                            } else if count == 1 {
                                "You have 1 application".to_string()
                            } else {
                                format!("You have {count} applications")
                            }
                        }}
                    </p>

                    {move || {
                        if loading.get() {
                            view! {
                                <div style="padding: 28px; text-align: center; color: #9a9590; font-size: 0.85rem;">
                                    "Loading applications..."
                                </div>
                            }
                            .into_any()
                        } else if applications.with(Vec::is_empty) {
                            view! {
                                <div style="padding: 28px; text-align: center;">
                                    <p style="font-size: 0.85rem; color: #9a9590; margin: 0 0 14px;">"No applications yet"</p>
                                    <a
                                        href="/apply"
                                        style="display: inline-flex; padding: 9px 18px; font-size: 0.85rem; font-weight: 600; color: #0c0e17; background: #f5c542; border-radius: 6px; text-decoration: none;"
                                    >
                                        "Apply"
                                    </a>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div style="display: flex; flex-direction: column; gap: 12px;">
                                    {applications
                                        .get()
                                        .into_iter()
                                        .map(|app| view! {
                                            <div style="display: flex; align-items: center; justify-content: space-between; gap: 14px; padding: 16px; border: 1px solid #282c3e; border-radius: 8px; flex-wrap: wrap;">
                                                <div style="flex: 1; min-width: 220px;">
                                                    <h3 style="font-size: 0.95rem; font-weight: 600; color: #e2e0d8; margin: 0 0 3px;">
                                                        {app.position.label()}
                                                    </h3>
                                                    <p style="font-size: 0.78rem; color: #9a9590; margin: 0;">
                                                        {format!("Submitted on {}", format_date_time(&app.submitted_at))}
                                                    </p>
                                                    {app.reviewed_at.map(|reviewed| view! {
                                                        <p style="font-size: 0.78rem; color: #9a9590; margin: 2px 0 0;">
                                                            {format!("Reviewed on {}", format_date_time(&reviewed))}
                                                        </p>
                                                    })}
                                                    {app.review_notes.clone().map(|notes| view! {
                                                        <p style="font-size: 0.78rem; color: #9a9590; font-style: italic; margin: 6px 0 0;">
                                                            {format!("Notes: {notes}")}
                                                        </p>
                                                    })}
                                                </div>
                                                {status_pill(app.status)}
                                            </div>
                                        })
                                        .collect_view()}
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </div>

                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; margin-top: 28px;">
                    <StatCard
                        title="Total Applications"
                        value=Signal::derive(move || applications.with(Vec::len))
                        color="#e2e0d8"
                    />
                    <StatCard
                        title="Approved"
                        value=Signal::derive(move || applications.with(|apps| {
                            apps.iter().filter(|a| a.status == ApplicationStatus::Approved).count()
                        }))
                        color="#16a34a"
                    />
                    <StatCard
                        title="Pending Review"
                        value=Signal::derive(move || applications.with(|apps| {
                            apps.iter().filter(|a| a.status == ApplicationStatus::Pending).count()
                        }))
                        color="#ca8a04"
                    />
                </div>
            })}
        </div>
    }
}

#[component]
fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<usize>,
    color: &'static str,
) -> impl IntoView {
    view! {
        <div style="background: #13161f; border: 1px solid #282c3e; border-radius: 8px; padding: 18px;">
            <div style="font-size: 0.78rem; font-weight: 600; color: #9a9590; margin-bottom: 8px;">{title}</div>
            <div style=format!("font-size: 1.5rem; font-weight: 700; color: {color};")>
                {move || value.get()}
            </div>
        </div>
    }
}
