use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section style="border-bottom: 1px solid #282c3e;">
            <div style="max-width: 680px; margin: 0 auto; padding: 56px 20px;">
                <h1 style="font-size: 1.9rem; font-weight: 700; color: #e2e0d8; margin: 0 0 8px;">"Get in Touch"</h1>
                <p style="font-size: 1rem; color: #9a9590; margin: 0;">
                    "Join our community and connect with the Fakepixel Giveaways team."
                </p>
            </div>
        </section>

        <section style="padding: 48px 0;">
            <div style="max-width: 680px; margin: 0 auto; padding: 0 20px; display: flex; flex-direction: column; gap: 28px;">
                <div>
                    <h2 style="font-size: 1.25rem; font-weight: 600; color: #e2e0d8; margin: 0 0 18px;">
                        "Join Our Discord"
                    </h2>
                    <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 16px;">
                        <InviteCard
                            title="Main Server"
                            description="Our main community server"
                            href="https://discord.gg/72BHBVhmNJ"
                            label="Join Server"
                        />
                        <InviteCard
                            title="Support Server"
                            description="Get help and support"
                            href="https://discord.gg/Bj5tcCSn3k"
                            label="Join Support"
                        />
                    </div>
                </div>

                <div style="padding: 18px; background: #13161f; border: 1px solid #282c3e; border-radius: 6px;">
                    <h3 style="font-size: 0.95rem; font-weight: 600; color: #e2e0d8; margin: 0 0 10px;">
                        "Application Guidelines"
                    </h3>
                    <p style="font-size: 0.85rem; color: #9a9590; margin: 0;">
                        "Please do not contact staff members directly about your application status. All applicants will be notified through official channels once a decision has been made."
                    </p>
                </div>

                <div style="padding: 20px; border: 1px solid rgba(202,138,4,0.3); background: rgba(202,138,4,0.05); border-radius: 6px;">
                    <h3 style="font-size: 0.95rem; font-weight: 600; color: #e2e0d8; margin: 0 0 8px;">
                        "For Urgent Issues"
                    </h3>
                    <p style="font-size: 0.85rem; color: #9a9590; margin: 0;">
                        "If anything super important needs immediate attention, please contact "
                        <span style="font-weight: 600; color: #e2e0d8;">"darkwall0901_"</span>
                        " on Discord."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InviteCard(
    title: &'static str,
    description: &'static str,
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div style="padding: 18px; background: #13161f; border: 1px solid #282c3e; border-radius: 6px;">
            <h3 style="font-size: 0.95rem; font-weight: 600; color: #e2e0d8; margin: 0 0 2px;">{title}</h3>
            <p style="font-size: 0.8rem; color: #9a9590; margin: 0 0 14px;">{description}</p>
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                style="display: block; text-align: center; padding: 9px 0; font-size: 0.85rem; font-weight: 600; color: #0c0e17; background: #f5c542; border-radius: 6px; text-decoration: none;"
            >
                {label}
            </a>
        </div>
    }
}
