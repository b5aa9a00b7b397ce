use leptos::prelude::*;
use serde_json::{Map, Value};

use portal_shared::forms::{self, FieldErrors, FieldKind, FieldSpec, FormSchema, FormValues};

use crate::toast::Toasts;

const INPUT_STYLE: &str = "max-width: 360px; padding: 9px 12px; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 6px; color: #e2e0d8; font-size: 0.88rem; outline: none;";
const INPUT_NARROW_STYLE: &str = "max-width: 180px; padding: 9px 12px; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 6px; color: #e2e0d8; font-size: 0.88rem; outline: none;";
const TEXTAREA_STYLE: &str = "width: 100%; padding: 9px 12px; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 6px; color: #e2e0d8; font-size: 0.88rem; outline: none; resize: vertical; font-family: inherit;";
const SELECT_STYLE: &str = "max-width: 280px; padding: 9px 12px; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 6px; color: #e2e0d8; font-size: 0.88rem; outline: none;";

/// Generic application form driven by a static field schema. Holds field
/// state and validation locally; a clean submit hands the JSON payload to
/// the caller, which performs the network I/O.
#[component]
pub fn ApplicationForm(
    schema: &'static FormSchema,
    #[prop(into)] on_submit: Callback<Map<String, Value>>,
    #[prop(into)] submitting: Signal<bool>,
) -> impl IntoView {
    let toasts = Toasts::expect();
    let values = RwSignal::new(FormValues::new());
    let errors: RwSignal<FieldErrors> = RwSignal::new(FieldErrors::new());
    let disqualified = Memo::new(move |_| values.with(|vals| forms::disqualified(schema, vals)));

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if disqualified.get_untracked() {
            toasts.error(
                "Not Eligible",
                "You are not eligible to apply because you are involved with other giveaway servers.",
            );
            return;
        }

        let current = values.get_untracked();
        let found = forms::validate(schema, &current);
        let clean = found.is_empty();
        errors.set(found);
        if !clean {
            toasts.error(
                "Validation Error",
                "Please fill in all required fields correctly.",
            );
            return;
        }

        on_submit.run(forms::to_payload(schema, &current));
    };

    view! {
        <form on:submit=handle_submit style="display: flex; flex-direction: column; gap: 18px;">
            {schema
                .fields
                .iter()
                .map(|field| view! { <FieldRow field=field values=values errors=errors /> })
                .collect_view()}

            {move || disqualified.get().then(|| view! {
                <div role="alert" style="padding: 12px; background: rgba(220,38,38,0.08); border: 1px solid rgba(220,38,38,0.25); border-radius: 6px; font-size: 0.8rem; color: #dc2626;">
                    "You are not eligible to apply. Applicants involved with other giveaway servers cannot be accepted."
                </div>
            })}

            <div style="padding-top: 6px;">
                <button
                    type="submit"
                    disabled=move || submitting.get() || disqualified.get()
                    style="padding: 10px 20px; font-size: 0.88rem; font-weight: 600; color: #0c0e17; background: #f5c542; border: none; border-radius: 6px; cursor: pointer;"
                    style:opacity=move || if submitting.get() || disqualified.get() { "0.5" } else { "1" }
                >
                    {move || if submitting.get() { "Submitting..." } else { "Submit Application" }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn FieldRow(
    field: &'static FieldSpec,
    values: RwSignal<FormValues>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let name = field.name;
    let set_value = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        values.update(|map| {
            map.insert(name.to_string(), value);
        });
    };
    let current = move || values.with(|map| map.get(name).cloned().unwrap_or_default());
    let error = move || errors.with(|map| map.get(name).copied());

    let control = match field.kind {
        FieldKind::Text => view! {
            <input
                type="text"
                id=name
                placeholder=field.placeholder.unwrap_or("")
                prop:value=current
                on:input=set_value
                style=INPUT_STYLE
            />
        }
        .into_any(),
        FieldKind::Number => view! {
            <input
                type="number"
                id=name
                min=field.min.map(|min| min.to_string()).unwrap_or_default()
                prop:value=current
                on:input=set_value
                style=INPUT_NARROW_STYLE
            />
        }
        .into_any(),
        FieldKind::TextArea(rows) => view! {
            <textarea
                id=name
                rows=rows.to_string()
                placeholder=field.placeholder.unwrap_or("")
                prop:value=current
                on:input=set_value
                style=TEXTAREA_STYLE
            />
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select id=name prop:value=current on:change=set_value style=SELECT_STYLE>
                <option value="" disabled=true>"Select"</option>
                {options
                    .iter()
                    .map(|option| view! { <option value=option.value>{option.label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 6px;">
            <label for=name style="font-size: 0.85rem; font-weight: 600; color: #e2e0d8;">
                {field.label}
                {field.required.then(|| view! {
                    <span aria-label="required" style="color: #dc2626; margin-left: 3px;">"*"</span>
                })}
            </label>
            {field.description.map(|description| view! {
                <p style="font-size: 0.75rem; color: #9a9590; margin: 0;">{description}</p>
            })}
            {control}
            {move || error().map(|message| view! {
                <p role="alert" style="font-size: 0.75rem; color: #dc2626; margin: 0;">{message}</p>
            })}
        </div>
    }
}
