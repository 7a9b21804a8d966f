//! Agreement checkboxes with the "agree to all" box.

use leptos::prelude::*;

use crate::state::signup::{AGREEMENTS, SignupState};

#[component]
pub fn AgreementList(state: RwSignal<SignupState>) -> impl IntoView {
    view! {
        <div class="agreement-section">
            <label class="agree-all">
                <input
                    type="checkbox"
                    id="agreeAll"
                    prop:checked=move || state.with(|s| s.wizard().agreements().all_checked())
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        state.update(|s| s.set_all_agreements(checked));
                    }
                />
                <span>"전체 동의"</span>
            </label>
            {AGREEMENTS
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    view! {
                        <label class="agreement-item">
                            <input
                                type="checkbox"
                                class="agreement-checkbox"
                                name=format!("agreement_{index}")
                                required=item.mandatory
                                prop:checked=move || state.with(|s| s.wizard().agreements().item(index))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    state.update(|s| s.set_agreement(index, checked));
                                }
                            />
                            <span>{item.label}</span>
                            <span class="agreement-tag">
                                {if item.mandatory { "(필수)" } else { "(선택)" }}
                            </span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}
