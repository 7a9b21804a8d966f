//! Wizard header and the previous / next / login button row.

use leptos::prelude::*;
use widgets::step::WizardView;

#[component]
pub fn StepHeading(#[prop(into)] view: Signal<WizardView>) -> impl IntoView {
    view! {
        <div class="signup-header">
            <span class="step-indicator">{move || view.get().header.indicator}</span>
            <h2 class="step-title">{move || view.get().header.title}</h2>
        </div>
    }
}

/// Navigation buttons. Visibility comes straight from the [`WizardView`].
#[component]
pub fn StepButtons(
    #[prop(into)] view: Signal<WizardView>,
    #[prop(into)] busy: Signal<bool>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
    on_finish: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-navigation">
            <Show when=move || view.get().prev_visible>
                <button type="button" class="btn-prev" on:click=move |_| on_prev.run(())>
                    "이전"
                </button>
            </Show>
            <Show when=move || view.get().next_visible>
                <button
                    type="button"
                    class="btn-next"
                    disabled=move || busy.get()
                    on:click=move |_| on_next.run(())
                >
                    {move || if busy.get() { "처리 중..." } else { "다음" }}
                </button>
            </Show>
            <Show when=move || view.get().terminal_visible>
                <button type="button" class="btn-login" on:click=move |_| on_finish.run(())>
                    {move || view.get().terminal_label()}
                </button>
            </Show>
        </div>
    }
}

/// Aggregated step-level errors above the buttons.
#[component]
pub fn StepErrors(#[prop(into)] errors: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || !errors.get().is_empty()>
            <div class="step-errors" role="alert">
                <ul>
                    {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                </ul>
            </div>
        </Show>
    }
}
