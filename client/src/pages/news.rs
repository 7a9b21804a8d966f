//! News list: category tabs, headline search, and a manual refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filtering is server-side. Changing a tab or submitting a search rebuilds the
//! query string with `QueryParams` and navigates, so the server renders the
//! next page of results. The current tab is read back from the URL on load.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use leptos::prelude::*;
use serde::Deserialize;
use widgets::notice::NoticeLevel;
use widgets::query::QueryParams;

use crate::components::notice_stack::notify;
use crate::state::ui::UiState;
use crate::util::location::{current_path, current_query, set_href};
use crate::util::page_data::read_json_block;

pub const NEWS_DATA_ID: &str = "news-data";

/// `(value, label)` for each category tab, `all` first. Values are the
/// server's stored category names; the list view filters on them verbatim.
pub const NEWS_CATEGORIES: &[(&str, &str)] = &[
    ("all", "전체"),
    ("주식/증권", "주식/증권"),
    ("채권", "채권"),
    ("금리", "금리"),
    ("환율/외환", "환율/외환"),
    ("부동산", "부동산"),
    ("은행/대출", "은행/대출"),
    ("보험/연금", "보험/연금"),
    ("투자/자산관리", "투자/자산관리"),
    ("경제지표", "경제지표"),
    ("정책/규제", "정책/규제"),
    ("기타금융", "기타금융"),
];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub published: String,
}

/// Where a tab click goes.
pub fn category_href(query: &QueryParams, path: &str, category: &str) -> String {
    query.with_category(category).to_href(path)
}

/// Where a search submit goes.
pub fn search_href(query: &QueryParams, path: &str, term: &str) -> String {
    query.with_search(term).to_href(path)
}

/// Label for a category value, falling back to the raw value.
pub fn category_label(value: &str) -> &str {
    NEWS_CATEGORIES.iter().find(|(v, _)| *v == value).map_or(value, |(_, label)| label)
}

#[component]
pub fn NewsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let query = QueryParams::parse(&current_query());
    let path = current_path();
    let items = read_json_block::<Vec<NewsItem>>(NEWS_DATA_ID).unwrap_or_default();
    let active = query.active_category().to_owned();
    let search = RwSignal::new(query.search().to_owned());
    let refreshing = RwSignal::new(false);

    let on_search = {
        let query = query.clone();
        let path = path.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            set_href(&search_href(&query, &path, &search.get_untracked()));
        }
    };

    let on_refresh = move |_| {
        if refreshing.get_untracked() {
            return;
        }
        refreshing.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let token = crate::util::page_data::csrf_token();
            match crate::net::api::refresh_news(&token).await {
                Ok(message) => {
                    leptos::logging::log!("news refreshed: {message}");
                    set_href(&format!("{}{}", current_path(), current_query()));
                }
                Err(e) => {
                    leptos::logging::warn!("news refresh failed: {e}");
                    notify(ui, NoticeLevel::Error, e);
                    refreshing.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            notify(ui, NoticeLevel::Error, "뉴스 새로고침은 브라우저에서만 가능합니다.");
            refreshing.set(false);
        }
    };

    view! {
        <div class="news-page">
            <div class="news-header">
                <h1>"금융뉴스"</h1>
                <button class="news-refresh-btn" disabled=move || refreshing.get() on:click=on_refresh>
                    {move || if refreshing.get() { "새로고침 중..." } else { "새로고침" }}
                </button>
            </div>
            <div class="news-tabs">
                {NEWS_CATEGORIES
                    .iter()
                    .map(|(value, label)| {
                        let href = category_href(&query, &path, value);
                        view! {
                            <button
                                class="tab-btn"
                                class:active=active == *value
                                data-tab=*value
                                on:click=move |_| set_href(&href)
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <form class="news-search" on:submit=on_search>
                <input
                    class="search-input"
                    type="text"
                    placeholder="뉴스 검색"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="news-search-btn" type="submit">"검색"</button>
            </form>
            <ul class="news-list">
                {if items.is_empty() {
                    view! { <li class="no-search-results">{widgets::search::NO_RESULTS_MESSAGE}</li> }.into_any()
                } else {
                    items
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li class="news-item">
                                    <div class="news-title">
                                        <a href=item.url target="_blank" rel="noopener">{item.title}</a>
                                    </div>
                                    <div class="news-meta">
                                        <span>{item.source}</span>
                                        <span>{item.published}</span>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </ul>
            <p class="news-category-label">{category_label(&active).to_owned()}</p>
        </div>
    }
}
