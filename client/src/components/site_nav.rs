//! Top navigation with the shared mega dropdown.
//!
//! Hover state lives in `UiState::menu`; this component only forwards pointer
//! events and arms the close timer with the token the menu hands back.

use leptos::prelude::*;
use widgets::menu::CloseToken;

use crate::state::ui::{NAV_SECTIONS, UiState};

fn schedule_close(ui: RwSignal<UiState>, token: CloseToken) {
    #[cfg(feature = "csr")]
    gloo_timers::callback::Timeout::new(widgets::consts::MENU_CLOSE_DELAY_MS, move || {
        ui.update(|u| {
            u.menu.close_elapsed(token);
        });
    })
    .forget();
    #[cfg(not(feature = "csr"))]
    let _ = (ui, token);
}

#[component]
pub fn SiteNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_leave = move |_| {
        if let Some(token) = ui.try_update(|u| u.menu.leave()) {
            schedule_close(ui, token);
        }
    };

    view! {
        <header class="site-header">
            <a class="site-logo" href="/">"CodeDoc"</a>
            <nav class="main-nav">
                <ul class="nav-list">
                    {NAV_SECTIONS
                        .iter()
                        .enumerate()
                        .map(|(index, section)| {
                            view! {
                                <li
                                    class="nav-item"
                                    class:active=move || ui.with(|u| u.menu.is_active(index))
                                    on:mouseenter=move |_| ui.update(|u| u.menu.hover_item(index))
                                    on:mouseleave=on_leave
                                >
                                    {section.label}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            <div
                class="mega-dropdown"
                class:show=move || ui.with(|u| u.menu.is_open())
                on:mouseenter=move |_| ui.update(|u| u.menu.hover_dropdown())
                on:mouseleave=on_leave
            >
                {NAV_SECTIONS
                    .iter()
                    .enumerate()
                    .map(|(index, section)| {
                        view! {
                            <div
                                class="menu-column"
                                class:active-column=move || ui.with(|u| u.menu.is_active(index))
                            >
                                <h3>{section.label}</h3>
                                <ul>
                                    {section
                                        .links
                                        .iter()
                                        .map(|(href, label)| view! { <li><a href=*href>{*label}</a></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </header>
    }
}
