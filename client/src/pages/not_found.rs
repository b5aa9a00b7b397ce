use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div style="max-width: 680px; margin: 0 auto; padding: 90px 20px; text-align: center;">
            <h1 style="font-size: 2.4rem; font-weight: 700; color: #e2e0d8; margin: 0 0 8px;">"404"</h1>
            <p style="font-size: 0.95rem; color: #9a9590; margin: 0 0 24px;">
                "The page you're looking for doesn't exist."
            </p>
            <a
                href="/"
                style="display: inline-flex; padding: 10px 20px; font-size: 0.9rem; font-weight: 600; color: #0c0e17; background: #f5c542; border-radius: 6px; text-decoration: none;"
            >
                "Go Home"
            </a>
        </div>
    }
}
