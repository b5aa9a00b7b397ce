use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::layout::{Footer, Header};
use crate::pages::about::About;
use crate::pages::admin::AdminPortal;
use crate::pages::apply::Apply;
use crate::pages::callback::DiscordCallback;
use crate::pages::contact::Contact;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::profile::Profile;
use crate::session::Auth;
use crate::staff_panel::StaffPanel;
use crate::toast::{ToastHost, Toasts};

/// Whether the staff directory slide-over is open.
#[derive(Clone, Copy)]
pub(crate) struct StaffPanelOpen(pub RwSignal<bool>);

/// Root application component. Provides session, toasts, and routing.
#[component]
pub fn App() -> impl IntoView {
    let auth = Auth::new();
    provide_context(auth);
    provide_context(Toasts(RwSignal::new(Vec::new())));
    provide_context(StaffPanelOpen(RwSignal::new(false)));

    // Capture the OAuth redirect or rehydrate the stored session before any
    // gated route decides what it may render; `auth.loading` holds them off.
    Effect::new(move || {
        auth.init();
    });

    view! {
        <Router>
            <div style="min-height: 100vh; display: flex; flex-direction: column; background: #0c0e17; color: #e2e0d8; font-family: 'Inter', system-ui, sans-serif;">
                <Header />
                <main style="flex: 1;">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/apply") view=Apply />
                        <Route path=path!("/about") view=About />
                        <Route path=path!("/contact") view=Contact />
                        <Route path=path!("/profile") view=Profile />
                        <Route path=path!("/admin") view=AdminPortal />
                        <Route path=path!("/auth/discord/callback") view=DiscordCallback />
                    </Routes>
                </main>
                <Footer />
            </div>
            <StaffPanel />
            <ToastHost />
        </Router>
    }
}
