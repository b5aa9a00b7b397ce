use leptos::prelude::*;
use leptos_router::hooks::use_location;
use wasm_bindgen_futures::spawn_local;

use portal_shared::avatar::{fallback_color, rgb_css};

use crate::api;
use crate::app::StaffPanelOpen;
use crate::session::Auth;
use crate::toast::Toasts;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Apply", "/apply"),
    ("About", "/about"),
    ("Contact", "/contact"),
];

/// Ask the backend for the OAuth redirect URL and send the browser there.
pub(crate) fn begin_discord_login(toasts: Toasts) {
    spawn_local(async move {
        match api::fetch_discord_auth_url().await {
            Ok(url) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&url);
                }
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Failed to get Discord login URL: {e}").into(),
                );
                toasts.error("Login Failed", "Failed to initiate Discord login");
            }
        }
    });
}

/// Avatar image with a colored-initial fallback when no image URL is known.
#[component]
pub fn Avatar(username: String, avatar: String, #[prop(default = 32)] size: u32) -> impl IntoView {
    if avatar.is_empty() {
        let initial = username
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();
        let (r, g, b) = fallback_color(&username);
        view! {
            <div style=format!(
                "width: {size}px; height: {size}px; border-radius: 50%; background: {}; display: flex; align-items: center; justify-content: center; font-weight: 700; font-size: {}px; color: #0c0e17; flex-shrink: 0;",
                rgb_css(r, g, b),
                size / 2,
            )>
                {initial}
            </div>
        }
        .into_any()
    } else {
        view! {
            <img
                src=avatar
                alt=username
                style=format!("width: {size}px; height: {size}px; border-radius: 50%; flex-shrink: 0;")
            />
        }
        .into_any()
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = Auth::expect();
    let toasts = Toasts::expect();
    let StaffPanelOpen(staff_open) = expect_context();
    let location = use_location();
    let menu_open = RwSignal::new(false);

    view! {
        <header style="position: sticky; top: 0; z-index: 50; border-bottom: 1px solid #282c3e; background: rgba(12,14,23,0.95); backdrop-filter: blur(6px);">
            <div style="max-width: 1100px; margin: 0 auto; padding: 0 20px; height: 60px; display: flex; align-items: center; justify-content: space-between;">
                <a href="/" style="font-size: 1.05rem; font-weight: 600; color: #e2e0d8; text-decoration: none;">
                    "Fakepixel Giveaways"
                </a>

                <nav aria-label="Main navigation" style="flex: 1; margin: 0 28px;">
                    <ul style="display: flex; gap: 4px; list-style: none; margin: 0; padding: 0;">
                        {NAV_ITEMS
                            .iter()
                            .map(|&(label, path)| {
                                let active =
                                    move || location.pathname.get() == path;
                                view! {
                                    <li>
                                        <a
                                            href=path
                                            aria-current=move || active().then_some("page")
                                            style="display: inline-flex; padding: 7px 14px; font-size: 0.85rem; font-weight: 500; border-radius: 6px; text-decoration: none; transition: color 0.15s, background 0.15s;"
                                            style:color=move || if active() { "#f5c542" } else { "#9a9590" }
                                            style:background=move || if active() { "#1a1d2a" } else { "transparent" }
                                        >
                                            {label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>

                <div style="display: flex; align-items: center; gap: 10px;">
                    {move || match auth.user.get() {
                        Some(user) => {
                            let username = user.username.clone();
                            let avatar = user.avatar.clone();
                            let is_admin = user.role.can_access_admin();
                            view! {
                                {is_admin.then(|| view! {
                                    <a
                                        href="/admin"
                                        style="padding: 6px 12px; font-size: 0.8rem; color: #e2e0d8; background: #13161f; border: 1px solid #282c3e; border-radius: 6px; text-decoration: none;"
                                    >
                                        "Admin"
                                    </a>
                                })}
                                <button
                                    style="padding: 6px 12px; font-size: 0.8rem; color: #9a9590; background: transparent; border: 1px solid #282c3e; border-radius: 6px; cursor: pointer;"
                                    on:click=move |_| staff_open.update(|open| *open = !*open)
                                >
                                    "Staff"
                                </button>
                                <div style="position: relative;">
                                    <button
                                        style="background: none; border: none; padding: 0; cursor: pointer; display: flex;"
                                        on:click=move |_| menu_open.update(|open| *open = !*open)
                                    >
                                        <Avatar username=username.clone() avatar=avatar.clone() size=32 />
                                    </button>
                                    {move || menu_open.get().then(|| {
                                        let username = username.clone();
                                        view! {
                                            <div style="position: absolute; right: 0; top: 40px; min-width: 170px; background: #13161f; border: 1px solid #282c3e; border-radius: 6px; box-shadow: 0 4px 16px rgba(0,0,0,0.5); padding: 6px; z-index: 60;">
                                                <div style="padding: 7px 10px; font-size: 0.82rem; font-weight: 600; color: #e2e0d8; border-bottom: 1px solid #282c3e;">
                                                    {username}
                                                </div>
                                                <a
                                                    href="/profile"
                                                    style="display: block; padding: 7px 10px; font-size: 0.82rem; color: #9a9590; text-decoration: none;"
                                                    on:click=move |_| menu_open.set(false)
                                                >
                                                    "Profile"
                                                </a>
                                                <button
                                                    style="display: block; width: 100%; text-align: left; padding: 7px 10px; font-size: 0.82rem; color: #dc2626; background: none; border: none; cursor: pointer;"
                                                    on:click=move |_| {
                                                        menu_open.set(false);
                                                        auth.logout();
                                                    }
                                                >
                                                    "Logout"
                                                </button>
                                            </div>
                                        }
                                    })}
                                </div>
                            }
                            .into_any()
                        }
                        None => view! {
                            <button
                                style="padding: 7px 14px; font-size: 0.85rem; font-weight: 600; color: #fff; background: #5865f2; border: none; border-radius: 6px; cursor: pointer;"
                                on:click=move |_| begin_discord_login(toasts)
                            >
                                "Login with Discord"
                            </button>
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer style="border-top: 1px solid #282c3e; padding: 22px 0; margin-top: auto;">
            <div style="max-width: 1100px; margin: 0 auto; padding: 0 20px; display: flex; align-items: center; justify-content: space-between; gap: 16px;">
                <span style="font-size: 0.85rem; font-weight: 600; color: #e2e0d8;">
                    "Fakepixel Giveaways"
                </span>
                <p style="font-size: 0.8rem; color: #5a5860; margin: 0;">
                    "\u{00A9} 2026 All rights reserved"
                </p>
            </div>
        </footer>
    }
}
