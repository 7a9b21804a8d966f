//! Signup page: the five-step wizard over one native `<form>`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every panel stays mounted so values typed on earlier steps are still in the
//! form when it is finally submitted. Only the active panel is shown. The
//! wizard decides when the form may be submitted; the submit itself is an
//! ordinary POST handled by the server.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::html::Form;
use leptos::prelude::*;
use widgets::consts::BUTTON_RESTORE_MS;
use widgets::step::{Step, WizardView};
use widgets::wizard::Advance;

use crate::components::agreement_list::AgreementList;
use crate::components::field_row::FieldRow;
use crate::components::step_chrome::{StepButtons, StepErrors, StepHeading};
use crate::state::signup::{SignupState, step_fields};
use crate::state::ui::UiState;
use crate::util::host::BrowserHost;
use crate::util::location::current_query;
use crate::util::page_data::{csrf_token, read_rule_config};

const SIGNUP_ACTION: &str = "/accounts/signup/";

/// Blocks inside the signup form, top to bottom. Step errors head the
/// active step so they are seen before the fields they refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormRegion {
    Errors,
    Panels,
    Buttons,
}

const FORM_LAYOUT: [FormRegion; 3] = [FormRegion::Errors, FormRegion::Panels, FormRegion::Buttons];

fn panel_index(step: Step) -> usize {
    usize::from(step.index().saturating_sub(1))
}

/// Re-enable the next button if the page is still here after a submit.
fn schedule_submit_release(state: RwSignal<SignupState>) {
    #[cfg(feature = "csr")]
    gloo_timers::callback::Timeout::new(BUTTON_RESTORE_MS, move || {
        state.update(SignupState::release_submit);
    })
    .forget();
    #[cfg(not(feature = "csr"))]
    let _ = (state, BUTTON_RESTORE_MS);
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let mut initial = SignupState::new(read_rule_config());
    if let Err(e) = initial.resume_from_query(&current_query()) {
        leptos::logging::warn!("ignoring signup step parameter: {e}");
    }
    let state = RwSignal::new(initial);
    let config = state.with_untracked(|s| s.wizard().config().clone());
    let form_ref = NodeRef::<Form>::new();

    let view_state = Signal::derive(move || state.with(SignupState::view));
    let busy = Signal::derive(move || state.with(|s| s.wizard().is_submitting()));
    let step_errors = Signal::derive(move || state.with(|s| s.step_errors().to_vec()));

    let on_next = Callback::new(move |()| {
        let mut host = BrowserHost::new(form_ref);
        if let Some(Advance::Submitted) = state.try_update(|s| s.advance(&mut host)) {
            schedule_submit_release(state);
        }
    });
    let on_prev = Callback::new(move |()| {
        state.update(|s| {
            s.retreat();
        });
    });
    let on_finish = Callback::new(move |()| {
        let mut host = BrowserHost::new(form_ref);
        state.update(|s| {
            s.finish(&mut host);
        });
    });

    let on_check_username = move |_| {
        let Some(value) = state.try_update(SignupState::begin_availability_check).flatten() else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use widgets::availability::UsernameAvailability;

            let outcome = crate::net::api::HttpAvailability.check_username_available(&value).await;
            if let Err(e) = &outcome {
                crate::components::notice_stack::notify(ui, widgets::notice::NoticeLevel::Error, e.to_string());
            }
            state.update(|s| s.resolve_availability(&value, outcome));
        });
        #[cfg(not(feature = "csr"))]
        let _ = (value, ui);
    };

    let panel = move |step: Step, body: AnyView| {
        let index = panel_index(step);
        view! {
            <div
                class="step-panel"
                data-step=step.index().to_string()
                class:active=move || view_state.with(|v: &WizardView| v.panels[index])
            >
                {body}
            </div>
        }
    };

    let field_panel = move |step: Step| {
        let rows = step_fields(step, &config)
            .into_iter()
            .map(|field| view! { <FieldRow state=state field=field/> })
            .collect_view();
        if step == Step::Credentials && config.require_availability_check {
            view! {
                {rows}
                <div class="username-check">
                    <button type="button" class="btn-check-username" on:click=on_check_username>
                        "아이디 중복확인"
                    </button>
                    <span class="username-check__status">
                        {move || state.with(|s| s.availability_message().unwrap_or_default())}
                    </span>
                </div>
            }
            .into_any()
        } else {
            rows.into_any()
        }
    };

    let panels = move || {
        view! {
            {panel(Step::Agreement, view! { <AgreementList state=state/> }.into_any())}
            {panel(Step::Credentials, field_panel(Step::Credentials))}
            {panel(Step::Personal, field_panel(Step::Personal))}
            {panel(Step::Financial, field_panel(Step::Financial))}
            {panel(
                Step::Complete,
                view! {
                    <div class="signup-complete">
                        <p>"회원가입이 완료되었습니다."</p>
                        <p>"로그인 후 맞춤 금융상품 추천을 받아보세요."</p>
                    </div>
                }
                    .into_any(),
            )}
        }
    };

    view! {
        <div class="signup-container">
            <StepHeading view=view_state/>
            <form
                class="signup-form"
                method="post"
                action=SIGNUP_ACTION
                node_ref=form_ref
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_next.run(());
                }
            >
                <input type="hidden" name="csrfmiddlewaretoken" value=csrf_token()/>
                {FORM_LAYOUT
                    .into_iter()
                    .map(|region| match region {
                        FormRegion::Errors => view! { <StepErrors errors=step_errors/> }.into_any(),
                        FormRegion::Panels => panels().into_any(),
                        FormRegion::Buttons => {
                            view! {
                                <StepButtons
                                    view=view_state
                                    busy=busy
                                    on_prev=on_prev
                                    on_next=on_next
                                    on_finish=on_finish
                                />
                            }
                                .into_any()
                        }
                    })
                    .collect_view()}
            </form>
        </div>
    }
}
