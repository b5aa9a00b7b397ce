use leptos::prelude::*;

use crate::layout::begin_discord_login;
use crate::session::Auth;
use crate::toast::Toasts;

const CTA_STYLE: &str = "display: inline-flex; align-items: center; padding: 10px 20px; font-size: 0.9rem; font-weight: 600; color: #fff; background: #5865f2; border: none; border-radius: 6px; cursor: pointer; text-decoration: none;";
const SECONDARY_STYLE: &str = "display: inline-flex; align-items: center; padding: 10px 20px; font-size: 0.9rem; font-weight: 600; color: #e2e0d8; background: #13161f; border: 1px solid #282c3e; border-radius: 6px; cursor: pointer; text-decoration: none;";

#[component]
pub fn Home() -> impl IntoView {
    let auth = Auth::expect();
    let toasts = Toasts::expect();

    view! {
        <section style="border-bottom: 1px solid #282c3e; background: linear-gradient(to bottom, rgba(245,197,66,0.06), transparent);">
            <div style="max-width: 760px; margin: 0 auto; padding: 90px 20px; text-align: center;">
                <h1 style="font-size: 2.6rem; font-weight: 700; color: #e2e0d8; margin: 0 0 12px; line-height: 1.15;">
                    "Fakepixel Giveaways Team"
                </h1>
                <h2 style="font-size: 1.5rem; font-weight: 600; color: #f5c542; margin: 0 0 20px;">
                    "Apply Server"
                </h2>
                <p style="font-size: 1rem; color: #9a9590; margin: 0 0 28px;">
                    "Join our community and apply to become part of the Fakepixel Giveaways team. We're looking for dedicated members to help grow our Discord community."
                </p>
                <div style="display: flex; gap: 12px; justify-content: center; flex-wrap: wrap;">
                    {move || if auth.is_authenticated() {
                        view! {
                            <a href="/apply" style=CTA_STYLE>"Begin Application"</a>
                            <a href="/about" style=SECONDARY_STYLE>"Learn More"</a>
                        }
                        .into_any()
                    } else {
                        view! {
                            <button style=CTA_STYLE on:click=move |_| begin_discord_login(toasts)>
                                "Join with Discord"
                            </button>
                            <a href="/about" style=SECONDARY_STYLE>"Learn More"</a>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </section>

        <section style="padding: 56px 0;">
            <div style="max-width: 1100px; margin: 0 auto; padding: 0 20px;">
                <h2 style="font-size: 1.2rem; font-weight: 600; color: #e2e0d8; margin: 0 0 4px;">
                    "Available Positions"
                </h2>
                <p style="font-size: 0.85rem; color: #9a9590; margin: 0 0 28px;">
                    "Choose a position that fits your experience"
                </p>
                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 16px; max-width: 680px;">
                    <PositionCard
                        title="Staff Positions"
                        description="Help moderate and assist members."
                        positions=vec!["Junior Helper"]
                    />
                    <PositionCard
                        title="Carrier Positions"
                        description="Help players through content."
                        positions=vec!["Dungeon Carrier", "Slayer Carrier"]
                    />
                </div>
            </div>
        </section>

        <section style="padding: 44px 0; border-top: 1px solid #282c3e; background: #13161f;">
            <div style="max-width: 1100px; margin: 0 auto; padding: 0 20px;">
                <div style="max-width: 680px;">
                    <p style="font-size: 0.85rem; color: #9a9590; margin: 0 0 18px;">
                        "All applications are reviewed by our team. You'll hear back from us through Discord once we've reviewed your submission."
                    </p>
                    {move || if auth.is_authenticated() {
                        view! { <a href="/apply" style=CTA_STYLE>"Begin Application"</a> }.into_any()
                    } else {
                        view! {
                            <button style=CTA_STYLE on:click=move |_| begin_discord_login(toasts)>
                                "Join with Discord"
                            </button>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PositionCard(
    title: &'static str,
    description: &'static str,
    positions: Vec<&'static str>,
) -> impl IntoView {
    view! {
        <a href="/apply" style="display: block; padding: 20px; border: 1px solid #282c3e; border-radius: 6px; background: #13161f; text-decoration: none; transition: border-color 0.15s;">
            <h3 style="font-size: 1.05rem; font-weight: 600; color: #e2e0d8; margin: 0 0 4px;">{title}</h3>
            <p style="font-size: 0.82rem; color: #9a9590; margin: 0 0 12px;">{description}</p>
            <ul style="list-style: none; margin: 0 0 12px; padding: 0; display: flex; flex-direction: column; gap: 4px;">
                {positions
                    .into_iter()
                    .map(|position| view! {
                        <li style="font-size: 0.85rem; color: #e2e0d8;">{format!("\u{2014} {position}")}</li>
                    })
                    .collect_view()}
            </ul>
            <p style="font-size: 0.85rem; color: #f5c542; margin: 0;">"Apply \u{2192}"</p>
        </a>
    }
}
