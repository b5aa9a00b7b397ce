use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use portal_shared::avatar::rgb_css;
use portal_shared::role::sort_by_hierarchy;
use portal_shared::{Role, StaffMember};

use crate::api;
use crate::app::StaffPanelOpen;
use crate::layout::Avatar;
use crate::session::Auth;

/// Slide-over staff directory: fetched on first open, searchable by name or
/// role label, grouped and ordered by the role hierarchy.
#[component]
pub fn StaffPanel() -> impl IntoView {
    let auth = Auth::expect();
    let StaffPanelOpen(open) = expect_context();

    let staff: RwSignal<Vec<StaffMember>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let search = RwSignal::new(String::new());

    // Refetch whenever the panel opens with an authenticated session.
    Effect::new(move || {
        if !open.get() || !auth.is_authenticated() {
            return;
        }
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_users(None, None, None).await {
                Ok(resp) => staff.set(resp.users),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching staff: {e}").into());
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    let groups = Memo::new(move |_| {
        let query = search.get().to_lowercase();
        let mut members = staff.get();
        if !query.is_empty() {
            members.retain(|member| {
                member.username.to_lowercase().contains(&query)
                    || member.role.label().to_lowercase().contains(&query)
            });
        }
        sort_by_hierarchy(&mut members, |member| member.role);

        let mut groups: Vec<(Role, Vec<StaffMember>)> = Vec::new();
        for member in members {
            match groups.last_mut() {
                Some((role, list)) if *role == member.role => list.push(member),
                _ => groups.push((member.role, vec![member])),
            }
        }
        groups
    });

    let visible_count =
        Memo::new(move |_| groups.get().iter().map(|(_, list)| list.len()).sum::<usize>());

    view! {
        {move || open.get().then(|| view! {
            <div
                aria-hidden="true"
                style="position: fixed; inset: 0; z-index: 40; background: rgba(0,0,0,0.3);"
                on:click=move |_| open.set(false)
            />
        })}

        <div
            style="position: fixed; right: 0; top: 0; bottom: 0; z-index: 50; width: 360px; max-width: 100vw; background: #13161f; border-left: 1px solid #282c3e; box-shadow: -4px 0 20px rgba(0,0,0,0.4); display: flex; flex-direction: column; transition: transform 0.25s ease;"
            style:transform=move || if open.get() { "translateX(0)" } else { "translateX(100%)" }
            style:pointer-events=move || if open.get() { "auto" } else { "none" }
        >
            <div style="display: flex; align-items: center; justify-content: space-between; padding: 14px 16px; border-bottom: 1px solid #282c3e;">
                <h2 style="font-size: 1rem; font-weight: 600; color: #e2e0d8; margin: 0;">"Online Staff"</h2>
                <button
                    aria-label="Close staff panel"
                    style="background: none; border: none; color: #5a5860; font-size: 1rem; cursor: pointer;"
                    on:click=move |_| open.set(false)
                >
                    "\u{2715}"
                </button>
            </div>

            <div style="padding: 10px 16px; border-bottom: 1px solid #282c3e;">
                <input
                    type="text"
                    placeholder="Search by name or role..."
                    style="width: 100%; padding: 8px 12px; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 6px; color: #e2e0d8; font-size: 0.85rem; outline: none;"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>

            <div style="flex: 1; overflow-y: auto;">
                {move || {
                    if loading.get() {
                        view! {
                            <div style="padding: 32px; text-align: center; color: #9a9590; font-size: 0.85rem;">
                                "Loading staff..."
                            </div>
                        }
                        .into_any()
                    } else if let Some(message) = error.get() {
                        view! {
                            <div style="margin: 16px; padding: 12px; background: rgba(220,38,38,0.08); border: 1px solid rgba(220,38,38,0.25); border-radius: 6px; color: #dc2626; font-size: 0.8rem;">
                                {message}
                            </div>
                        }
                        .into_any()
                    } else if groups.get().is_empty() {
                        view! {
                            <div style="padding: 32px; text-align: center; color: #9a9590; font-size: 0.85rem;">
                                "No staff members found"
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div style="padding: 14px 16px; display: flex; flex-direction: column; gap: 18px;">
                                {groups
                                    .get()
                                    .into_iter()
                                    .map(|(role, members)| view! { <RoleGroup role=role members=members /> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>

            <div style="padding: 12px 16px; border-top: 1px solid #282c3e; text-align: center; font-size: 0.72rem; color: #5a5860;">
                {move || {
                    let count = visible_count.get();
                    if count == 1 {
                        "1 staff member".to_string()
                    } else {
                        format!("{count} staff members")
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn RoleGroup(role: Role, members: Vec<StaffMember>) -> impl IntoView {
    let (r, g, b) = role.color_rgb();

    view! {
        <div style="display: flex; flex-direction: column; gap: 6px;">
            <span style=format!(
                "align-self: flex-start; padding: 2px 8px; border-radius: 4px; font-size: 0.68rem; font-weight: 700; letter-spacing: 0.04em; text-transform: uppercase; color: #e2e0d8; background: {};",
                rgb_css(r, g, b),
            )>
                {role.label()}
            </span>
            {members
                .into_iter()
                .map(|member| {
                    let dot = member.color.clone();
                    view! {
                        <div style="display: flex; align-items: center; gap: 10px; padding: 5px 6px; border-radius: 6px;">
                            <Avatar username=member.username.clone() avatar=member.avatar.clone() size=32 />
                            <span style="flex: 1; min-width: 0; font-size: 0.85rem; color: #e2e0d8; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                                {member.username.clone()}
                            </span>
                            {dot.map(|color| view! {
                                <span
                                    title=format!("Role color: {color}")
                                    style=format!("width: 12px; height: 12px; border-radius: 50%; border: 1px solid #282c3e; flex-shrink: 0; background: {color};")
                                />
                            })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
