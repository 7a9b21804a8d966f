//! Profile edit page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stored values come from the `profile-data` JSON block. The save button
//! follows `ProfileEditor::save_enabled`; submission is a native form POST,
//! and the server redirects back with `?saved=true`, which this page turns
//! into the saved dialog before cleaning the URL. The risk attitude value is
//! computed server-side and is shown read-only outside the editor.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use widgets::profile::{ProfileEditor, RISK_ATTITUDE_FIELD, RISK_ATTITUDE_TOOLTIP, saved_notice};

use crate::components::readonly_field::ReadonlyField;
use crate::components::saved_modal::SavedModal;
use crate::util::location::{alert, current_path, current_query, replace_url};
use crate::util::page_data::{csrf_token, read_profile_values};

/// A field on the profile form: name attribute, label, required, and select
/// choices (empty for a text input).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileField {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub choices: &'static [(&'static str, &'static str)],
}

pub const PROFILE_FIELDS: &[ProfileField] = &[
    ProfileField { name: "name", label: "이름", required: true, choices: &[] },
    ProfileField {
        name: "교육수준분류",
        label: "교육수준",
        required: false,
        choices: &[
            ("1", "고등학교 중퇴 이하"),
            ("2", "고등학교 졸업"),
            ("3", "대학교 중퇴/전문대 졸업"),
            ("4", "대학교 졸업 이상"),
        ],
    },
    ProfileField {
        name: "연령대분류",
        label: "연령대",
        required: false,
        choices: &[
            ("1", "18-25세"),
            ("2", "26-35세"),
            ("3", "36-45세"),
            ("4", "46-55세"),
            ("5", "56-65세"),
            ("6", "66세 이상"),
        ],
    },
    ProfileField { name: "가구주성별", label: "성별", required: false, choices: &[("1", "남성"), ("2", "여성")] },
    ProfileField {
        name: "결혼상태",
        label: "결혼상태",
        required: false,
        choices: &[("1", "기혼"), ("2", "미혼/기타")],
    },
    ProfileField {
        name: "저축여부",
        label: "저축습관",
        required: false,
        choices: &[("1", "저축 안함"), ("2", "일부 저축"), ("3", "적극적 저축")],
    },
    ProfileField {
        name: "직업분류1",
        label: "직업분류",
        required: false,
        choices: &[
            ("1", "일반 직장인/중간관리직"),
            ("2", "고소득 전문직/사업가/경영진"),
            ("3", "은퇴자/연금수급자"),
            ("4", "저소득층/학생/비정규직"),
        ],
    },
];

/// Editor seeded with the stored values for every known field.
pub fn editor_from_values(values: Vec<(String, String)>) -> ProfileEditor {
    let required: Vec<&str> = PROFILE_FIELDS.iter().filter(|f| f.required).map(|f| f.name).collect();
    let initial = PROFILE_FIELDS.iter().map(|f| {
        let value = values.iter().find(|(k, _)| k == f.name).map(|(_, v)| v.clone()).unwrap_or_default();
        (f.name, value)
    });
    ProfileEditor::new(initial, &required)
}

/// Stored risk attitude, or empty when the profile has none yet.
pub fn risk_attitude_value(values: &[(String, String)]) -> String {
    values.iter().find(|(k, _)| k == RISK_ATTITUDE_FIELD).map(|(_, v)| v.clone()).unwrap_or_default()
}

#[component]
pub fn ProfileEditPage() -> impl IntoView {
    let values = read_profile_values();
    let risk_attitude = risk_attitude_value(&values);
    let editor = RwSignal::new(editor_from_values(values));
    let saved_open = RwSignal::new(false);

    if let Some(rest) = saved_notice(&current_query()) {
        saved_open.set(true);
        replace_url(&rest.to_href(&current_path()));
    }

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::beforeunload, move |ev| {
            if editor.with_untracked(ProfileEditor::warn_on_leave) {
                ev.prevent_default();
                ev.set_return_value(widgets::profile::LEAVE_WARNING);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        match editor.try_update(ProfileEditor::begin_submit) {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                ev.prevent_default();
                alert(&e.to_string());
            }
            None => ev.prevent_default(),
        }
    };

    view! {
        <div class="profile-edit-page">
            <h1>"프로필 수정"</h1>
            <form class="profile-edit-form" method="post" on:submit=on_submit>
                <input type="hidden" name="csrfmiddlewaretoken" value=csrf_token()/>
                {PROFILE_FIELDS
                    .iter()
                    .map(|field| {
                        let name = field.name;
                        let invalid = move || editor.with(|e| e.is_field_invalid(name));
                        let value = move || editor.with(|e| e.value(name).to_owned());
                        let on_change = move |ev: leptos::ev::Event| {
                            let next = event_target_value(&ev);
                            editor.update(|e| e.set(name, &next));
                        };
                        let control = if field.choices.is_empty() {
                            view! {
                                <input
                                    id=format!("id_{name}")
                                    name=name
                                    type="text"
                                    class="form-control"
                                    class:invalid=invalid
                                    required=field.required
                                    prop:value=value
                                    on:input=on_change
                                />
                            }
                            .into_any()
                        } else {
                            view! {
                                <select
                                    id=format!("id_{name}")
                                    name=name
                                    class="form-control"
                                    class:invalid=invalid
                                    required=field.required
                                    prop:value=value
                                    on:change=on_change
                                >
                                    <option value="">"선택해주세요"</option>
                                    {field
                                        .choices
                                        .iter()
                                        .map(|(v, l)| view! { <option value=*v>{*l}</option> })
                                        .collect_view()}
                                </select>
                            }
                            .into_any()
                        };
                        view! {
                            <div class="form-group">
                                <label for=format!("id_{name}")>{field.label}</label>
                                {control}
                            </div>
                        }
                    })
                    .collect_view()}
                <ReadonlyField
                    id=format!("id_{RISK_ATTITUDE_FIELD}")
                    label=RISK_ATTITUDE_FIELD
                    value=risk_attitude
                    tooltip=RISK_ATTITUDE_TOOLTIP
                />
                <button
                    type="submit"
                    class="save-button"
                    class:active=move || editor.with(ProfileEditor::save_enabled)
                    disabled=move || !editor.with(ProfileEditor::save_enabled)
                >
                    {move || if editor.with(ProfileEditor::is_submitting) { "저장 중..." } else { "저장하기" }}
                </button>
            </form>
            <Show when=move || saved_open.get()>
                <SavedModal on_close=Callback::new(move |()| saved_open.set(false))/>
            </Show>
        </div>
    }
}
