//! Login page: username and password over a native POST.
//!
//! Fields are checked as they lose focus and cleared on the next keystroke.
//! Enter moves to the next input and submits from the last one. The submit
//! button shows a loading state that is released after
//! [`BUTTON_RESTORE_MS`] in case the server answers without navigating.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::html::Input;
use leptos::prelude::*;
use widgets::consts::BUTTON_RESTORE_MS;
use widgets::login::{AuthField, AuthForm, PasswordToggle};

use crate::util::page_data::csrf_token;

const LOGIN_ACTION: &str = "/accounts/login/";
const SIGNUP_URL: &str = "/accounts/signup/";

pub const LOGIN_FIELDS: [AuthField; 2] = [AuthField::Username, AuthField::Password];

pub fn field_label(field: AuthField) -> &'static str {
    match field {
        AuthField::Username => "아이디",
        AuthField::Password => "비밀번호",
        AuthField::PasswordConfirm => "비밀번호 확인",
        AuthField::Email => "이메일",
    }
}

/// `type` attribute for a login input given the password toggle.
pub fn input_type(field: AuthField, toggle: PasswordToggle) -> &'static str {
    match field {
        AuthField::Password | AuthField::PasswordConfirm => toggle.input_type(),
        AuthField::Email => "email",
        AuthField::Username => "text",
    }
}

fn schedule_release(form: RwSignal<AuthForm>) {
    #[cfg(feature = "csr")]
    gloo_timers::callback::Timeout::new(BUTTON_RESTORE_MS, move || {
        form.update(AuthForm::release_submit);
    })
    .forget();
    #[cfg(not(feature = "csr"))]
    let _ = (form, BUTTON_RESTORE_MS);
}

fn focus(input: NodeRef<Input>) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = input.get_untracked() {
            if let Err(e) = el.focus() {
                leptos::logging::warn!("focus failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = input;
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(AuthForm::new(&LOGIN_FIELDS));
    let toggle = RwSignal::new(PasswordToggle::default());
    let refs = LOGIN_FIELDS.map(|field| (field, NodeRef::<Input>::new()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        if form.try_update(AuthForm::begin_submit) == Some(true) {
            schedule_release(form);
        } else {
            ev.prevent_default();
        }
    };

    let rows = refs
        .into_iter()
        .map(|(field, node)| {
            let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() != "Enter" {
                    return;
                }
                let next = form.with_untracked(|f| f.next_field(field));
                if let Some((_, next_ref)) = next.and_then(|n| refs.into_iter().find(|(f, _)| *f == n)) {
                    ev.prevent_default();
                    focus(next_ref);
                }
            };
            let error = move || form.with(|f| f.error(field).map(ToString::to_string));
            let is_password = field == AuthField::Password;
            view! {
                <div class="form-group">
                    <label for=format!("id_{}", field.name())>{field_label(field)}</label>
                    <div class="input-wrapper">
                        <input
                            id=format!("id_{}", field.name())
                            name=field.name()
                            class="form-input"
                            class:error=move || error().is_some()
                            type=move || input_type(field, toggle.get())
                            node_ref=node
                            prop:value=move || form.with(|f| f.value(field).to_owned())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.edit(field, &value));
                            }
                            on:blur=move |_| {
                                form.update(|f| {
                                    f.blur(field);
                                });
                            }
                            on:keydown=on_keydown
                        />
                        {is_password.then(|| view! {
                            <button
                                type="button"
                                class="password-toggle"
                                class:shown=move || toggle.get().is_shown()
                                title=move || if toggle.get().is_shown() { "비밀번호 숨기기" } else { "비밀번호 보기" }
                                on:click=move |_| toggle.update(PasswordToggle::toggle)
                            >
                                <span class="eye-icon"></span>
                            </button>
                        })}
                    </div>
                    <Show when=move || error().is_some()>
                        <div class="field-error">{move || error().unwrap_or_default()}</div>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"로그인"</h1>
                <form class="login-form" method="post" action=LOGIN_ACTION on:submit=on_submit>
                    <input type="hidden" name="csrfmiddlewaretoken" value=csrf_token()/>
                    {rows}
                    <button class="login-button" type="submit" disabled=move || form.with(AuthForm::is_submitting)>
                        <Show
                            when=move || form.with(AuthForm::is_submitting)
                            fallback=|| view! { <span class="button-text">"로그인"</span> }
                        >
                            <span class="button-loader"></span>
                        </Show>
                    </button>
                </form>
                <p class="login-card__subtitle">
                    "아직 회원이 아니신가요? " <a href=SIGNUP_URL>"회원가입"</a>
                </p>
            </div>
        </div>
    }
}
