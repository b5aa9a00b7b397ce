use leptos::prelude::*;

const FEATURES: &[(&str, &str)] = &[
    (
        "What is Fakepixel Giveaways?",
        "Fakepixel Giveaways is a Discord server that hosts giveaways and provides carrier services for the Fakepixel game. We organize events, manage carriers, and maintain a community for players.",
    ),
    (
        "Why do we need staff and carriers?",
        "Staff members help moderate the server, assist members, and ensure the community runs smoothly. Carriers provide in-game services to help other players progress through dungeon floors and slayer bosses.",
    ),
    (
        "How are applications reviewed?",
        "All applications are reviewed by the admin team. We evaluate each application based on the information provided, including experience, availability, and qualifications. You will be contacted through Discord if accepted.",
    ),
];

const REQUIREMENTS: &[&str] = &[
    "Staff applicants must be at least 13 years old",
    "Carrier applicants must not be involved with competing giveaway servers",
    "All information provided must be accurate and truthful",
    "Applications are processed in the order they are received",
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section style="border-bottom: 1px solid #282c3e;">
            <div style="max-width: 680px; margin: 0 auto; padding: 56px 20px;">
                <h1 style="font-size: 1.7rem; font-weight: 600; color: #e2e0d8; margin: 0 0 8px;">"About"</h1>
                <p style="font-size: 0.9rem; color: #9a9590; margin: 0;">
                    "Learn more about Fakepixel Giveaways and what we're looking for."
                </p>
            </div>
        </section>

        <section style="padding: 48px 0;">
            <div style="max-width: 680px; margin: 0 auto; padding: 0 20px; display: flex; flex-direction: column; gap: 28px;">
                {FEATURES
                    .iter()
                    .map(|&(title, description)| view! {
                        <div>
                            <h3 style="font-size: 0.95rem; font-weight: 600; color: #e2e0d8; margin: 0 0 4px;">{title}</h3>
                            <p style="font-size: 0.85rem; color: #9a9590; margin: 0;">{description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>

        <section style="padding: 48px 0; border-top: 1px solid #282c3e;">
            <div style="max-width: 680px; margin: 0 auto; padding: 0 20px;">
                <h2 style="font-size: 0.95rem; font-weight: 600; color: #e2e0d8; margin: 0 0 14px;">"Requirements"</h2>
                <ul style="list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 8px;">
                    {REQUIREMENTS
                        .iter()
                        .map(|&req| view! {
                            <li style="font-size: 0.85rem; color: #9a9590;">{format!("\u{2014} {req}")}</li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
