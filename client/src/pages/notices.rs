//! Customer support notice board with client-side title search.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use leptos::prelude::*;
use serde::Deserialize;
use widgets::search::{NO_RESULTS_MESSAGE, SearchOutcome, filter_titles};

use crate::util::page_data::read_json_block;

pub const NOTICE_DATA_ID: &str = "notice-data";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NoticeItem {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub important: bool,
}

/// Run a search over the board. A blank term shows every notice again.
pub fn search_notices(items: &[NoticeItem], term: &str) -> SearchOutcome {
    filter_titles(items.iter().map(|n| n.title.as_str()), term)
}

#[component]
pub fn NoticeListPage() -> impl IntoView {
    let items = StoredValue::new(read_json_block::<Vec<NoticeItem>>(NOTICE_DATA_ID).unwrap_or_default());
    let term = RwSignal::new(String::new());
    let outcome = RwSignal::new(items.with_value(|items| search_notices(items, "")));

    let run_search = move || {
        let next = items.with_value(|items| search_notices(items, &term.get_untracked()));
        outcome.set(next);
    };

    view! {
        <div class="notice-page">
            <h1>"공지사항"</h1>
            <div class="notice-toolbar">
                <span class="total-count">{move || outcome.with(SearchOutcome::count_label)}</span>
                <form
                    class="notice-search"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        run_search();
                    }
                >
                    <input
                        class="search-input"
                        type="text"
                        placeholder="제목 검색"
                        prop:value=move || term.get()
                        on:input=move |ev| term.set(event_target_value(&ev))
                    />
                    <button class="notice-search-btn" type="submit">"검색"</button>
                </form>
            </div>
            <ul class="notice-list">
                {move || {
                    let visible = outcome.get();
                    items.with_value(|items| {
                        items
                            .iter()
                            .enumerate()
                            .filter(|(i, _)| visible.is_visible(*i))
                            .map(|(_, item)| {
                                let item = item.clone();
                                view! {
                                    <li class="notice-item" class:important=item.important>
                                        <span class="notice-title">
                                            <a href=item.url>{item.title}</a>
                                        </span>
                                        <span class="notice-date">{item.date}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    })
                }}
                <Show when=move || outcome.with(SearchOutcome::show_empty)>
                    <li class="no-search-results">{NO_RESULTS_MESSAGE}</li>
                </Show>
            </ul>
        </div>
    }
}
