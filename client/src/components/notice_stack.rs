//! Floating notifications in the corner of every page.

use leptos::prelude::*;
use widgets::notice::NoticeLevel;

use crate::state::ui::UiState;

/// Show a notice and arm its dismiss timer.
pub fn notify(ui: RwSignal<UiState>, level: NoticeLevel, message: impl Into<String>) {
    let message = message.into();
    let id = ui.try_update(|u| u.notices.push(level, message)).unwrap_or_default();

    #[cfg(feature = "csr")]
    gloo_timers::callback::Timeout::new(widgets::consts::NOTICE_DISMISS_MS, move || {
        ui.update(|u| {
            u.notices.dismiss(id);
        });
    })
    .forget();
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

#[component]
pub fn NoticeStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="notification-stack">
            {move || {
                ui.with(|u| u.notices.items().to_vec())
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div class=notice.level.class() role="status">
                                <span>{notice.message}</span>
                                <button
                                    class="notification__close"
                                    title="닫기"
                                    on:click=move |_| {
                                        ui.update(|u| {
                                            u.notices.dismiss(id);
                                        });
                                    }
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
