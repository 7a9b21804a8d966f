//! Read-only input with a hover tooltip explaining where its value comes from.

use leptos::prelude::*;
use widgets::tooltip::{Tooltip, TooltipToken};

/// Hide the tooltip after the dismiss delay unless a newer hover replaced it.
fn schedule_expire(tip: RwSignal<Tooltip>, token: TooltipToken) {
    #[cfg(feature = "csr")]
    gloo_timers::callback::Timeout::new(widgets::consts::TOOLTIP_DISMISS_MS, move || {
        tip.update(|t| {
            t.expire(token);
        });
    })
    .forget();
    #[cfg(not(feature = "csr"))]
    let _ = (tip, token);
}

/// The input carries no `name`, so its value is never posted.
#[component]
pub fn ReadonlyField(id: String, label: &'static str, value: String, tooltip: &'static str) -> impl IntoView {
    let tip = RwSignal::new(Tooltip::default());

    let on_enter = move |_| {
        let token = tip.try_update(Tooltip::show);
        if let Some(token) = token {
            schedule_expire(tip, token);
        }
    };

    view! {
        <div class="form-group form-group--readonly">
            <label for=id.clone()>{label}</label>
            <input
                id=id
                type="text"
                class="form-control"
                readonly=true
                value=value
                on:mouseenter=on_enter
                on:mouseleave=move |_| tip.update(Tooltip::hide)
            />
            <Show when=move || tip.with(Tooltip::is_visible)>
                <div class="field-tooltip">{tooltip}</div>
            </Show>
        </div>
    }
}
