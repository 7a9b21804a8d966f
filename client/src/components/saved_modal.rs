//! Dialog shown after the profile is saved.

use leptos::prelude::*;
use widgets::profile::{SAVED_LINES, SAVED_TITLE, SavedAction};

use crate::util::location::set_href;

/// Overlay click dismisses; each button navigates to its destination.
#[component]
pub fn SavedModal(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="login-modal">
            <div class="modal-overlay" on:click=move |_| on_close.run(())></div>
            <div class="modal-content" role="dialog">
                <h3>{SAVED_TITLE}</h3>
                {SAVED_LINES.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                <div class="modal-buttons">
                    {SavedAction::ALL
                        .into_iter()
                        .map(|action| {
                            let class = match action {
                                SavedAction::Home => "modal-btn cancel-btn",
                                SavedAction::Products => "modal-btn confirm-btn",
                            };
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    on:click=move |_| {
                                        on_close.run(());
                                        set_href(action.href());
                                    }
                                >
                                    {action.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
