use chrono::DateTime;
use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;

use portal_shared::avatar::rgb_css;
use portal_shared::time_text::{format_date, format_date_time};
use portal_shared::{
    Application, ApplicationStatus, Collection, DashboardStats, Position, Role, StaffMember,
};

use crate::api;
use crate::layout::Avatar;
use crate::pages::not_found::NotFound;
use crate::session::Auth;
use crate::toast::Toasts;

const USERS_PAGE_SIZE: u32 = 20;
const DB_FETCH_LIMIT: u32 = 100;

const FILTER_SELECT_STYLE: &str = "width: 100%; max-width: 260px; padding: 8px 12px; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 6px; color: #e2e0d8; font-size: 0.85rem; outline: none;";
const PANEL_STYLE: &str = "background: #13161f; border: 1px solid #282c3e; border-radius: 8px; padding: 20px;";
const TH_STYLE: &str = "padding: 10px 14px; text-align: left; font-size: 0.75rem; font-weight: 700; color: #9a9590; border-bottom: 1px solid #282c3e;";
const TD_STYLE: &str = "padding: 10px 14px; font-size: 0.82rem; color: #e2e0d8; border-bottom: 1px solid #1a1d2a;";
const PRIMARY_BTN: &str = "padding: 8px 16px; font-size: 0.82rem; font-weight: 600; color: #0c0e17; background: #f5c542; border: none; border-radius: 6px; cursor: pointer;";
const GHOST_BTN: &str = "padding: 8px 16px; font-size: 0.82rem; color: #e2e0d8; background: transparent; border: 1px solid #282c3e; border-radius: 6px; cursor: pointer;";
const DANGER_BTN: &str = "padding: 8px 16px; font-size: 0.82rem; font-weight: 600; color: #fff; background: #dc2626; border: none; border-radius: 6px; cursor: pointer;";

/// Turn a camelCase form-data key into a readable label.
fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if ch.is_uppercase() && i > 0 {
            out.push(' ');
            out.extend(ch.to_lowercase());
        } else if ch == '_' {
            out.push(' ');
        } else {
            out.push(ch);
        }
    }
    out
}

fn doc_str(doc: &Value, key: &str) -> String {
    doc.get(key).and_then(Value::as_str).unwrap_or("").to_string()
}

fn doc_nested_str(doc: &Value, outer: &str, inner: &str) -> String {
    doc.get(outer)
        .and_then(|v| v.get(inner))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn doc_date(doc: &Value, key: &str) -> String {
    let raw = doc_str(doc, key);
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(dt) => format_date(&dt.to_utc()),
        Err(_) => raw,
    }
}

fn status_pill(status: ApplicationStatus) -> impl IntoView {
    let (r, g, b) = status.color_rgb();
    view! {
        <span style=format!(
            "display: inline-flex; align-items: center; gap: 6px; padding: 4px 12px; border-radius: 999px; font-size: 0.76rem; font-weight: 600; color: {}; background: rgba({r},{g},{b},0.12); border: 1px solid rgba({r},{g},{b},0.35);",
            rgb_css(r, g, b),
        )>
            <span>{status.glyph()}</span>
            <span>{status.label()}</span>
        </span>
    }
}

#[component]
fn Modal(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div style="position: fixed; inset: 0; z-index: 100; background: rgba(0,0,0,0.6); display: flex; align-items: center; justify-content: center; padding: 20px;">
            <div style="width: 100%; max-width: 640px; max-height: 85vh; overflow-y: auto; background: #13161f; border: 1px solid #282c3e; border-radius: 8px; padding: 24px;">
                <h2 style="font-size: 1.05rem; font-weight: 700; color: #e2e0d8; margin: 0 0 16px;">{title}</h2>
                {children()}
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Applications,
    Users,
    Database,
    Statistics,
}

impl AdminTab {
    const ALL: [AdminTab; 4] = [
        AdminTab::Applications,
        AdminTab::Users,
        AdminTab::Database,
        AdminTab::Statistics,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Applications => "Applications",
            Self::Users => "Users",
            Self::Database => "Database",
            Self::Statistics => "Statistics",
        }
    }
}

/// Role-gated admin route: anything but an owner/main admin session gets the
/// not-found view, exactly as an unknown URL would.
#[component]
pub fn AdminPortal() -> impl IntoView {
    let auth = Auth::expect();

    view! {
        {move || {
            if auth.loading.get() {
                return view! {
                    <div style="max-width: 1100px; margin: 0 auto; padding: 56px 20px; text-align: center; color: #9a9590; font-size: 0.9rem;">
                        "Loading..."
                    </div>
                }
                .into_any();
            }
            let privileged = auth
                .user
                .with(|user| user.as_ref().is_some_and(|u| u.role.can_access_admin()));
            if privileged {
                view! { <Dashboard /> }.into_any()
            } else {
                view! { <NotFound /> }.into_any()
            }
        }}
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let active_tab = RwSignal::new(AdminTab::Applications);

    view! {
        <div style="max-width: 1100px; margin: 0 auto; padding: 36px 20px;">
            <h1 style="font-size: 1.7rem; font-weight: 700; color: #e2e0d8; margin: 0 0 4px;">"Admin Portal"</h1>
            <p style="font-size: 0.88rem; color: #9a9590; margin: 0 0 24px;">
                "Manage applications, users, and database"
            </p>

            <div style="display: flex; gap: 4px; border-bottom: 1px solid #282c3e; margin-bottom: 24px;">
                {AdminTab::ALL
                    .iter()
                    .map(|&tab| view! {
                        <button
                            style="padding: 9px 16px; font-size: 0.85rem; font-weight: 600; background: none; border: none; border-bottom: 2px solid transparent; cursor: pointer;"
                            style:color=move || if active_tab.get() == tab { "#f5c542" } else { "#9a9590" }
                            style:border-bottom-color=move || if active_tab.get() == tab { "#f5c542" } else { "transparent" }
                            on:click=move |_| active_tab.set(tab)
                        >
                            {tab.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            {move || match active_tab.get() {
                AdminTab::Applications => view! { <ApplicationsTab /> }.into_any(),
                AdminTab::Users => view! { <UsersTab /> }.into_any(),
                AdminTab::Database => view! { <DatabaseTab /> }.into_any(),
                AdminTab::Statistics => view! { <StatisticsTab /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ApplicationsTab() -> impl IntoView {
    let toasts = Toasts::expect();
    let applications: RwSignal<Vec<Application>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(true);
    let status_filter: RwSignal<Option<ApplicationStatus>> = RwSignal::new(None);
    let position_filter: RwSignal<Option<Position>> = RwSignal::new(None);
    let reload = RwSignal::new(0u32);
    let selected: RwSignal<Option<Application>> = RwSignal::new(None);
    let review_notes = RwSignal::new(String::new());

    Effect::new(move || {
        let status = status_filter.get();
        let position = position_filter.get();
        reload.get();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_all_applications(status, position, None).await {
                Ok(resp) => applications.set(resp.applications),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch applications: {e}").into(),
                    );
                }
            }
            loading.set(false);
        });
    });

    let submit_review = move |status: ApplicationStatus| {
        let Some(app) = selected.get_untracked() else {
            return;
        };
        // Reviews only ever move a pending application to a terminal state.
        if !app.status.can_transition_to(status) {
            return;
        }
        let notes = review_notes.get_untracked();
        spawn_local(async move {
            match api::review_application(&app.id, status, &notes).await {
                Ok(()) => {
                    selected.set(None);
                    review_notes.set(String::new());
                    reload.update(|n| *n += 1);
                }
                Err(e) => toasts.error("Review Failed", &e),
            }
        });
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 20px;">
            <div style=PANEL_STYLE>
                <h3 style="font-size: 0.95rem; font-weight: 600; color: #e2e0d8; margin: 0 0 14px;">"Filters"</h3>
                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px;">
                    <div>
                        <label style="display: block; font-size: 0.8rem; font-weight: 600; color: #e2e0d8; margin-bottom: 6px;">"Status"</label>
                        <select
                            style=FILTER_SELECT_STYLE
                            on:change=move |ev| {
                                status_filter.set(ApplicationStatus::from_str(&event_target_value(&ev)));
                            }
                        >
                            <option value="all">"All statuses"</option>
                            <option value="pending">"Pending"</option>
                            <option value="approved">"Approved"</option>
                            <option value="declined">"Declined"</option>
                        </select>
                    </div>
                    <div>
                        <label style="display: block; font-size: 0.8rem; font-weight: 600; color: #e2e0d8; margin-bottom: 6px;">"Position"</label>
                        <select
                            style=FILTER_SELECT_STYLE
                            on:change=move |ev| {
                                position_filter.set(Position::from_str(&event_target_value(&ev)));
                            }
                        >
                            <option value="all">"All positions"</option>
                            {Position::ALL
                                .iter()
                                .map(|&p| view! { <option value=p.as_str()>{p.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>
            </div>

            <div style=PANEL_STYLE>
                <h3 style="font-size: 0.95rem; font-weight: 600; color: #e2e0d8; margin: 0 0 4px;">"Applications"</h3>
                <p style="font-size: 0.78rem; color: #9a9590; margin: 0 0 16px;">
                    {move || {
                        if loading.get() {
                            "Loading...".to_string()
                        } else {
                            let count = applications.with(Vec::len);
                            if count == 1 {
                                "1 application".to_string()
                            } else {
                                format!("{count} applications")
                            }
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
                            <div style="padding: 28px; text-align: center; color: #9a9590; font-size: 0.85rem;">
                                "No applications found"
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div style="display: flex; flex-direction: column; gap: 12px;">
                                {applications
                                    .get()
                                    .into_iter()
                                    .map(|app| {
                                        let username = app
                                            .applicant
                                            .as_ref()
                                            .map(|a| a.username.clone())
                                            .unwrap_or_else(|| "Unknown".to_string());
                                        let email = app
                                            .applicant
                                            .as_ref()
                                            .map(|a| a.email.clone())
                                            .unwrap_or_default();
                                        let is_pending = app.status == ApplicationStatus::Pending;
                                        let row = app.clone();
                                        view! {
                                            <div style="display: flex; align-items: center; justify-content: space-between; gap: 14px; padding: 14px 16px; border: 1px solid #282c3e; border-radius: 8px; flex-wrap: wrap;">
                                                <div style="display: flex; align-items: center; gap: 12px; flex: 1; min-width: 240px;">
                                                    <Avatar username=username.clone() avatar=String::new() size=34 />
                                                    <div>
                                                        <div style="font-size: 0.88rem; font-weight: 600; color: #e2e0d8;">{username}</div>
                                                        <div style="font-size: 0.75rem; color: #9a9590;">{email}</div>
                                                        <div style="display: flex; gap: 8px; margin-top: 6px; flex-wrap: wrap;">
                                                            <span style="padding: 2px 8px; font-size: 0.7rem; color: #9a9590; border: 1px solid #282c3e; border-radius: 4px;">
                                                                {app.position.label()}
                                                            </span>
                                                            <span style="padding: 2px 8px; font-size: 0.7rem; color: #9a9590; background: #1a1d2a; border-radius: 4px;">
                                                                {format_date_time(&app.submitted_at)}
                                                            </span>
                                                        </div>
                                                    </div>
                                                </div>
                                                <div style="display: flex; align-items: center; gap: 10px;">
                                                    {status_pill(app.status)}
                                                    {is_pending.then(|| view! {
                                                        <button
                                                            style=PRIMARY_BTN
                                                            on:click=move |_| selected.set(Some(row.clone()))
                                                        >
                                                            "Review"
                                                        </button>
                                                    })}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>

            {move || selected.get().map(|app| view! {
                <Modal title="Review Application">
                    <div style="font-size: 0.85rem; color: #9a9590; display: flex; flex-direction: column; gap: 4px; margin-bottom: 16px;">
                        <span>
                            <strong style="color: #e2e0d8;">"Applicant: "</strong>
                            {app.applicant.as_ref().map(|a| a.username.clone()).unwrap_or_else(|| "Unknown".to_string())}
                        </span>
                        <span>
                            <strong style="color: #e2e0d8;">"Position: "</strong>
                            {app.position.label()}
                        </span>
                        <span>
                            <strong style="color: #e2e0d8;">"Submitted: "</strong>
                            {format_date_time(&app.submitted_at)}
                        </span>
                    </div>

                    <h4 style="font-size: 0.88rem; font-weight: 600; color: #e2e0d8; margin: 0 0 8px;">
                        "Application Details"
                    </h4>
                    <div style="background: #1a1d2a; border-radius: 6px; padding: 14px; max-height: 300px; overflow-y: auto; display: flex; flex-direction: column; gap: 10px; margin-bottom: 16px;">
                        {app.form_data
                            .iter()
                            .map(|(key, value)| {
                                let rendered = match value {
                                    Value::String(s) => s.clone(),
                                    other => other.to_string(),
                                };
                                view! {
                                    <div>
                                        <strong style="font-size: 0.78rem; color: #e2e0d8; text-transform: capitalize;">
                                            {humanize_key(key)}
                                        </strong>
                                        <p style="font-size: 0.8rem; color: #9a9590; margin: 2px 0 0; white-space: pre-wrap;">{rendered}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <label style="display: block; font-size: 0.8rem; font-weight: 600; color: #e2e0d8; margin-bottom: 6px;">
                        "Review Notes (Optional)"
                    </label>
                    <textarea
                        placeholder="Add any feedback or notes for the applicant..."
                        style="width: 100%; min-height: 70px; padding: 9px 12px; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 6px; color: #e2e0d8; font-size: 0.82rem; outline: none; resize: vertical; font-family: inherit;"
                        prop:value=move || review_notes.get()
                        on:input=move |ev| review_notes.set(event_target_value(&ev))
                    />

                    <div style="display: flex; gap: 10px; justify-content: flex-end; margin-top: 18px;">
                        <button style=GHOST_BTN on:click=move |_| {
                            selected.set(None);
                            review_notes.set(String::new());
                        }>
                            "Cancel"
                        </button>
                        <button style=DANGER_BTN on:click=move |_| submit_review(ApplicationStatus::Declined)>
                            "\u{2715} Decline"
                        </button>
                        <button style=PRIMARY_BTN on:click=move |_| submit_review(ApplicationStatus::Approved)>
                            "\u{2713} Approve"
                        </button>
                    </div>
                </Modal>
            })}
        </div>
    }
}

#[component]
fn UsersTab() -> impl IntoView {
    let users: RwSignal<Vec<StaffMember>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(true);
    let role_filter: RwSignal<Option<Role>> = RwSignal::new(None);
    let page = RwSignal::new(1u32);
    let selected: RwSignal<Option<StaffMember>> = RwSignal::new(None);
    let selected_role = RwSignal::new(Role::Default);
    let updating = RwSignal::new(false);

    Effect::new(move || {
        let role = role_filter.get();
        let current_page = page.get();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_users(Some(current_page), Some(USERS_PAGE_SIZE), role).await {
                Ok(resp) => users.set(resp.users),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch users: {e}").into());
                }
            }
            loading.set(false);
        });
    });

    let update_role = move || {
        let Some(user) = selected.get_untracked() else {
            return;
        };
        let role = selected_role.get_untracked();
        updating.set(true);
        spawn_local(async move {
            match api::update_user_role(&user.id, role).await {
                Ok(()) => {
                    // Optimistic local patch; the statistics panel refetches
                    // on its next mount.
                    users.update(|list| {
                        if let Some(entry) = list.iter_mut().find(|u| u.id == user.id) {
                            entry.role = role;
                        }
                    });
                    selected.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to update role: {e}").into());
                }
            }
            updating.set(false);
        });
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 20px;">
            <div style=PANEL_STYLE>
                <h3 style="font-size: 0.95rem; font-weight: 600; color: #e2e0d8; margin: 0 0 14px;">"Filters"</h3>
                <div>
                    <label style="display: block; font-size: 0.8rem; font-weight: 600; color: #e2e0d8; margin-bottom: 6px;">"Role"</label>
                    <select
                        style=FILTER_SELECT_STYLE
                        on:change=move |ev| {
                            role_filter.set(Role::from_str(&event_target_value(&ev)));
                            page.set(1);
                        }
                    >
                        <option value="all">"All roles"</option>
                        {Role::ASSIGNABLE
                            .iter()
                            .map(|&role| view! { <option value=role.as_str()>{role.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div style=PANEL_STYLE>
                <h3 style="font-size: 0.95rem; font-weight: 600; color: #e2e0d8; margin: 0 0 4px;">"Users Database"</h3>
                <p style="font-size: 0.78rem; color: #9a9590; margin: 0 0 16px;">
                    {move || {
                        if loading.get() {
                            "Loading...".to_string()
                        } else {
                            format!("Displaying {} users", users.with(Vec::len))
                        }
                    }}
                </p>

                {move || {
                    if loading.get() {
                        view! {
                            <div style="padding: 28px; text-align: center; color: #9a9590; font-size: 0.85rem;">
                                "Loading users..."
                            </div>
                        }
                        .into_any()
                    } else if users.with(Vec::is_empty) {
                        view! {
                            <div style="padding: 28px; text-align: center; color: #9a9590; font-size: 0.85rem;">
                                "No users found"
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div style="overflow-x: auto;">
                                <table style="width: 100%; border-collapse: collapse;">
                                    <thead>
                                        <tr>
                                            <th style=TH_STYLE>"User"</th>
                                            <th style=TH_STYLE>"Email"</th>
                                            <th style=TH_STYLE>"Role"</th>
                                            <th style=TH_STYLE>"Joined"</th>
                                            <th style=TH_STYLE>"Action"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {users
                                            .get()
                                            .into_iter()
                                            .map(|user| {
                                                let row = user.clone();
                                                view! {
                                                    <tr>
                                                        <td style=TD_STYLE>
                                                            <div style="display: flex; align-items: center; gap: 10px;">
                                                                <Avatar username=user.username.clone() avatar=user.avatar.clone() size=30 />
                                                                <span style="font-weight: 600;">{user.username.clone()}</span>
                                                            </div>
                                                        </td>
                                                        <td style=TD_STYLE>
                                                            <span style="color: #9a9590;">{user.email.clone()}</span>
                                                        </td>
                                                        <td style=TD_STYLE>
                                                            <span style="padding: 2px 8px; font-size: 0.72rem; color: #9a9590; border: 1px solid #282c3e; border-radius: 4px;">
                                                                {user.role.label()}
                                                            </span>
                                                        </td>
                                                        <td style=TD_STYLE>
                                                            <span style="color: #9a9590;">{format_date(&user.joined_at)}</span>
                                                        </td>
                                                        <td style=TD_STYLE>
                                                            <button
                                                                style=GHOST_BTN
                                                                on:click=move |_| {
                                                                    selected_role.set(row.role);
                                                                    selected.set(Some(row.clone()));
                                                                }
                                                            >
                                                                "Manage"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                        .into_any()
                    }
                }}

                <div style="display: flex; gap: 10px; justify-content: flex-end; margin-top: 16px;">
                    <button
                        style=GHOST_BTN
                        disabled=move || page.get() <= 1
                        on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                    >
                        "Previous"
                    </button>
                    <span style="align-self: center; font-size: 0.8rem; color: #9a9590;">
                        {move || format!("Page {}", page.get())}
                    </span>
                    <button
                        style=GHOST_BTN
                        disabled=move || users.with(|list| (list.len() as u32) < USERS_PAGE_SIZE)
                        on:click=move |_| page.update(|p| *p += 1)
                    >
                        "Next"
                    </button>
                </div>
            </div>

            {move || selected.get().map(|user| view! {
                <Modal title="Manage User Role">
                    <p style="font-size: 0.85rem; color: #9a9590; margin: 0 0 16px;">
                        {format!("Assign a role to {}", user.username)}
                    </p>
                    <label style="display: block; font-size: 0.8rem; font-weight: 600; color: #e2e0d8; margin-bottom: 6px;">
                        "Select Role:"
                    </label>
                    <select
                        style=FILTER_SELECT_STYLE
                        prop:value=move || selected_role.get().as_str()
                        on:change=move |ev| {
                            if let Some(role) = Role::from_str(&event_target_value(&ev)) {
                                selected_role.set(role);
                            }
                        }
                    >
                        {Role::ASSIGNABLE
                            .iter()
                            .map(|&role| view! { <option value=role.as_str()>{role.label()}</option> })
                            .collect_view()}
                    </select>

                    <div style="display: flex; gap: 10px; justify-content: flex-end; margin-top: 20px;">
                        <button style=GHOST_BTN on:click=move |_| selected.set(None)>
                            "Cancel"
                        </button>
                        <button
                            style=PRIMARY_BTN
                            disabled=move || updating.get()
                            on:click=move |_| update_role()
                        >
                            {move || if updating.get() { "Updating..." } else { "Update Role" }}
                        </button>
                    </div>
                </Modal>
            })}
        </div>
    }
}

#[component]
fn DatabaseTab() -> impl IntoView {
    let toasts = Toasts::expect();
    let user_docs: RwSignal<Vec<Value>> = RwSignal::new(Vec::new());
    let application_docs: RwSignal<Vec<Value>> = RwSignal::new(Vec::new());
    let log_docs: RwSignal<Vec<Value>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0u32);
    let active: RwSignal<Collection> = RwSignal::new(Collection::Users);

    let editing: RwSignal<Option<(Collection, Value)>> = RwSignal::new(None);
    let edit_text = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    Effect::new(move || {
        reload.get();
        loading.set(true);
        spawn_local(async move {
            for (collection, target) in [
                (Collection::Users, user_docs),
                (Collection::Applications, application_docs),
                (Collection::AuditLogs, log_docs),
            ] {
                match api::fetch_collection(collection, DB_FETCH_LIMIT).await {
                    Ok(docs) => target.set(docs),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch database collections: {e}").into(),
                        );
                    }
                }
            }
            loading.set(false);
        });
    });

    let open_document = move |collection: Collection, doc: Value| {
        edit_text.set(serde_json::to_string_pretty(&doc).unwrap_or_default());
        editing.set(Some((collection, doc)));
    };

    let save_document = move || {
        let Some((collection, original)) = editing.get_untracked() else {
            return;
        };
        let updated: Value = match serde_json::from_str(&edit_text.get_untracked()) {
            Ok(value) => value,
            Err(_) => {
                toasts.error("Save Failed", "Invalid JSON format");
                return;
            }
        };
        let id = doc_str(&original, "_id");
        saving.set(true);
        spawn_local(async move {
            match api::update_document(collection, &id, &updated).await {
                Ok(()) => {
                    editing.set(None);
                    edit_text.set(String::new());
                    reload.update(|n| *n += 1);
                }
                Err(_) => toasts.error("Save Failed", "Failed to save document"),
            }
            saving.set(false);
        });
    };

    let delete_document = move || {
        let Some((collection, original)) = editing.get_untracked() else {
            return;
        };
        let confirmed = web_sys::window().is_some_and(|window| {
            window
                .confirm_with_message(&format!(
                    "Are you sure you want to delete this {} document?",
                    collection.as_str()
                ))
                .unwrap_or(false)
        });
        if !confirmed {
            return;
        }
        let id = doc_str(&original, "_id");
        saving.set(true);
        spawn_local(async move {
            match api::delete_document(collection, &id).await {
                Ok(()) => {
                    editing.set(None);
                    edit_text.set(String::new());
                    reload.update(|n| *n += 1);
                }
                Err(_) => toasts.error("Delete Failed", "Failed to delete document"),
            }
            saving.set(false);
        });
    };

    let docs_for = move |collection: Collection| match collection {
        Collection::Users => user_docs.get(),
        Collection::Applications => application_docs.get(),
        Collection::AuditLogs => log_docs.get(),
    };

    view! {
        <div style=PANEL_STYLE>
            <div style="display: flex; align-items: center; justify-content: space-between; gap: 14px; margin-bottom: 16px; flex-wrap: wrap;">
                <div>
                    <h3 style="font-size: 0.95rem; font-weight: 600; color: #e2e0d8; margin: 0 0 2px;">"Database Collections"</h3>
                    <p style="font-size: 0.78rem; color: #9a9590; margin: 0;">
                        "Click on any row to edit and update the backing store"
                    </p>
                </div>
                <button
                    style=PRIMARY_BTN
                    disabled=move || loading.get()
                    on:click=move |_| reload.update(|n| *n += 1)
                >
                    {move || if loading.get() { "Loading..." } else { "Refresh" }}
                </button>
            </div>

            <div style="display: flex; gap: 4px; margin-bottom: 18px;">
                {Collection::ALL
                    .iter()
                    .map(|&collection| view! {
                        <button
                            style="padding: 7px 14px; font-size: 0.8rem; font-weight: 600; background: none; border: 1px solid #282c3e; border-radius: 6px; cursor: pointer;"
                            style:color=move || if active.get() == collection { "#f5c542" } else { "#9a9590" }
                            style:border-color=move || if active.get() == collection { "rgba(245,197,66,0.4)" } else { "#282c3e" }
                            on:click=move |_| active.set(collection)
                        >
                            {move || format!("{} ({})", collection.label(), docs_for(collection).len())}
                        </button>
                    })
                    .collect_view()}
            </div>

            {move || {
                let collection = active.get();
                if loading.get() {
                    return view! {
                        <div style="padding: 28px; text-align: center; color: #9a9590; font-size: 0.85rem;">
                            "Loading..."
                        </div>
                    }
                    .into_any();
                }
                let docs = docs_for(collection);
                if docs.is_empty() {
                    return view! {
                        <div style="padding: 28px; text-align: center; color: #9a9590; font-size: 0.85rem;">
                            "No documents found"
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <CollectionTable
                        collection=collection
                        docs=docs
                        on_open=Callback::new(move |doc| open_document(collection, doc))
                    />
                }
                    .into_any()
            }}

            {move || editing.get().map(|(collection, doc)| view! {
                <Modal title=format!("Edit Document - {}", collection.as_str())>
                    <label style="display: block; font-size: 0.8rem; font-weight: 600; color: #e2e0d8; margin-bottom: 6px;">
                        "Document ID"
                    </label>
                    <input
                        type="text"
                        disabled=true
                        prop:value=doc_str(&doc, "_id")
                        style="width: 100%; padding: 8px 12px; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 6px; color: #9a9590; font-size: 0.8rem; margin-bottom: 14px;"
                    />

                    <label style="display: block; font-size: 0.8rem; font-weight: 600; color: #e2e0d8; margin-bottom: 6px;">
                        "JSON Data"
                    </label>
                    <textarea
                        placeholder="Edit JSON here..."
                        style="width: 100%; height: 260px; padding: 10px 12px; background: #0c0e17; border: 1px solid #282c3e; border-radius: 6px; color: #e2e0d8; font-family: 'JetBrains Mono', monospace; font-size: 0.74rem; outline: none; resize: none;"
                        prop:value=move || edit_text.get()
                        on:input=move |ev| edit_text.set(event_target_value(&ev))
                    />

                    <div style="display: flex; gap: 10px; justify-content: flex-end; margin-top: 18px;">
                        <button
                            style=DANGER_BTN
                            disabled=move || saving.get()
                            on:click=move |_| delete_document()
                        >
                            "Delete"
                        </button>
                        <button
                            style=GHOST_BTN
                            disabled=move || saving.get()
                            on:click=move |_| {
                                editing.set(None);
                                edit_text.set(String::new());
                            }
                        >
                            "Cancel"
                        </button>
                        <button
                            style=PRIMARY_BTN
                            disabled=move || saving.get()
                            on:click=move |_| save_document()
                        >
                            {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </Modal>
            })}
        </div>
    }
}

#[component]
fn CollectionTable(
    collection: Collection,
    docs: Vec<Value>,
    on_open: Callback<Value>,
) -> impl IntoView {
    let headers: &'static [&'static str] = match collection {
        Collection::Users => &["Username", "Email", "Role", "Discord ID", "Joined"],
        Collection::Applications => &["Username", "Position", "Status", "Submitted", "Reviewed"],
        Collection::AuditLogs => &["Action", "Admin", "Target", "Details", "Timestamp"],
    };

    let cells = move |doc: &Value| -> [String; 5] {
        match collection {
            Collection::Users => [
                doc_str(doc, "username"),
                doc_str(doc, "email"),
                Role::from_str(&doc_str(doc, "role"))
                    .map(|role| role.label().to_string())
                    .unwrap_or_else(|| doc_str(doc, "role")),
                doc_str(doc, "discordId"),
                doc_date(doc, "joinedAt"),
            ],
            Collection::Applications => [
                {
                    let username = doc_nested_str(doc, "userId", "username");
                    if username.is_empty() { "Unknown".to_string() } else { username }
                },
                doc_str(doc, "position").replace('-', " "),
                doc_str(doc, "status"),
                doc_date(doc, "submittedAt"),
                {
                    let reviewed = doc_date(doc, "reviewedAt");
                    if reviewed.is_empty() { "-".to_string() } else { reviewed }
                },
            ],
            Collection::AuditLogs => [
                doc_str(doc, "action"),
                {
                    let actor = doc_nested_str(doc, "userId", "username");
                    if actor.is_empty() { "System".to_string() } else { actor }
                },
                doc_str(doc, "targetType"),
                {
                    let details = doc
                        .get("details")
                        .map(|value| value.to_string())
                        .unwrap_or_default();
                    if details.chars().count() > 50 {
                        let short: String = details.chars().take(50).collect();
                        format!("{short}...")
                    } else {
                        details
                    }
                },
                doc_date(doc, "timestamp"),
            ],
        }
    };

    view! {
        <div style="overflow-x: auto; border: 1px solid #282c3e; border-radius: 8px;">
            <table style="width: 100%; border-collapse: collapse;">
                <thead style="background: #1a1d2a;">
                    <tr>
                        {headers
                            .iter()
                            .map(|&header| view! { <th style=TH_STYLE>{header}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {docs
                        .into_iter()
                        .map(|doc| {
                            let row = cells(&doc);
                            view! {
                                <tr
                                    style="cursor: pointer;"
                                    on:click=move |_| on_open.run(doc.clone())
                                >
                                    {row
                                        .into_iter()
                                        .map(|cell| view! {
                                            <td style=TD_STYLE>
                                                <span style="color: #9a9590;">{cell}</span>
                                            </td>
                                        })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn StatisticsTab() -> impl IntoView {
    let stats: RwSignal<Option<DashboardStats>> = RwSignal::new(None);

    Effect::new(move || {
        spawn_local(async move {
            match api::fetch_dashboard_stats().await {
                Ok(fetched) => stats.set(Some(fetched)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch stats: {e}").into());
                }
            }
        });
    });

    view! {
        {move || match stats.get() {
            None => view! {
                <div style="padding: 28px; text-align: center; color: #9a9590; font-size: 0.85rem;">
                    "Loading statistics..."
                </div>
            }
            .into_any(),
            Some(stats) => view! {
                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px;">
                    <div style=PANEL_STYLE>
                        <div style="font-size: 0.78rem; font-weight: 600; color: #9a9590; margin-bottom: 8px;">"Total Users"</div>
                        <div style="font-size: 1.5rem; font-weight: 700; color: #e2e0d8;">{stats.total_users}</div>
                    </div>
                    {stats
                        .users_by_role
                        .iter()
                        .map(|(role, count)| {
                            let label = Role::from_str(role)
                                .map(|r| r.label().to_string())
                                .unwrap_or_else(|| role.replace('_', " "));
                            view! {
                                <div style=PANEL_STYLE>
                                    <div style="font-size: 0.78rem; font-weight: 600; color: #9a9590; margin-bottom: 8px; text-transform: capitalize;">
                                        {label}
                                    </div>
                                    <div style="font-size: 1.5rem; font-weight: 700; color: #e2e0d8;">{*count}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::{doc_nested_str, doc_str, humanize_key};
    use serde_json::json;

    #[test]
    fn humanize_key_splits_camel_case() {
        assert_eq!(humanize_key("discordUserId"), "discord user id");
        assert_eq!(humanize_key("age"), "age");
        assert_eq!(humanize_key("target_type"), "target type");
    }

    #[test]
    fn doc_helpers_tolerate_missing_fields() {
        let doc = json!({"username": "dw", "userId": {"username": "actor"}});
        assert_eq!(doc_str(&doc, "username"), "dw");
        assert_eq!(doc_str(&doc, "missing"), "");
        assert_eq!(doc_nested_str(&doc, "userId", "username"), "actor");
        assert_eq!(doc_nested_str(&doc, "userId", "email"), "");
    }
}
