//! One labelled signup input with its inline error slot.

use leptos::prelude::*;
use widgets::form::FieldId;

use crate::state::signup::{SignupState, field_choices, field_label};

fn input_type(field: FieldId) -> &'static str {
    match field {
        FieldId::Password | FieldId::PasswordConfirm => "password",
        FieldId::Email => "email",
        FieldId::Age => "number",
        _ => "text",
    }
}

#[component]
pub fn FieldRow(state: RwSignal<SignupState>, field: FieldId) -> impl IntoView {
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.edit(field, value));
    };
    let error = move || state.with(|s| s.field_error(field).map(str::to_owned));
    let choices = field_choices(field);

    let control = if choices.is_empty() {
        view! {
            <input
                id=field.dom_id()
                name=field.name()
                type=input_type(field)
                class="form-control"
                class:error=move || error().is_some()
                prop:value=move || state.with(|s| s.value(field).to_owned())
                on:input=on_input
            />
        }
        .into_any()
    } else {
        view! {
            <select
                id=field.dom_id()
                name=field.name()
                class="form-control"
                class:error=move || error().is_some()
                prop:value=move || state.with(|s| s.value(field).to_owned())
                on:change=on_input
            >
                <option value="">"선택해주세요"</option>
                {choices
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=field.dom_id()>{field_label(field)}</label>
            {control}
            <Show when=move || error().is_some()>
                <div class="error-message">{move || error().unwrap_or_default()}</div>
            </Show>
        </div>
    }
}
