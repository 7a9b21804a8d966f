//! Product list with category filter tabs and name/company search, plus the
//! recommendation landing page with its service detail modal.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;
use serde::Deserialize;
use widgets::query::ALL_CATEGORY;
use widgets::search::{ProductCard, filter_products, section_visible};

use crate::components::service_modal::{SERVICES, ServiceDetail, ServiceModal};
use crate::util::location::set_href;
use crate::util::page_data::read_json_block;

pub const PRODUCT_DATA_ID: &str = "product-data";

const AI_RECOMMEND_URL: &str = "/products/recommend/ai/";

/// `(value, label)` for each filter tab.
pub const PRODUCT_FILTERS: &[(&str, &str)] = &[
    (ALL_CATEGORY, "전체"),
    ("deposit", "예금"),
    ("savings", "적금"),
    ("loan", "대출"),
    ("card", "카드"),
];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    pub company: String,
    #[serde(default)]
    pub ai_recommended: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProductSection {
    pub category: String,
    pub title: String,
    pub products: Vec<ProductEntry>,
}

impl ProductSection {
    fn cards(&self) -> Vec<ProductCard> {
        self.products.iter().map(|p| ProductCard::new(p.name.clone(), p.company.clone())).collect()
    }
}

/// Per-section card visibility for a search term, in section order.
pub fn visible_cards(sections: &[ProductSection], term: &str) -> Vec<Vec<usize>> {
    sections.iter().map(|s| filter_products(&s.cards(), term)).collect()
}

/// Number of AI-recommended products shown under `filter`.
pub fn recommended_count(sections: &[ProductSection], filter: &str) -> usize {
    sections
        .iter()
        .filter(|s| section_visible(filter, &s.category))
        .flat_map(|s| s.products.iter())
        .filter(|p| p.ai_recommended)
        .count()
}

#[component]
pub fn ProductListPage() -> impl IntoView {
    let sections = StoredValue::new(read_json_block::<Vec<ProductSection>>(PRODUCT_DATA_ID).unwrap_or_default());
    let filter = RwSignal::new(ALL_CATEGORY.to_owned());
    let term = RwSignal::new(String::new());
    let visible = Memo::new(move |_| sections.with_value(|s| visible_cards(s, &term.get())));

    view! {
        <div class="product-list-page">
            <div class="filter-tabs">
                {PRODUCT_FILTERS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <button
                                class="filter-btn"
                                class:active=move || filter.with(|f| f == value)
                                data-filter=*value
                                on:click=move |_| filter.set((*value).to_owned())
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <input
                id="productSearch"
                class="search-input"
                type="text"
                placeholder="상품명 또는 회사명 검색"
                prop:value=move || term.get()
                on:input=move |ev| term.set(event_target_value(&ev))
            />
            <p class="ai-count">
                {move || format!("AI 추천 상품 {}개", sections.with_value(|s| recommended_count(s, &filter.get())))}
            </p>
            {sections
                .get_value()
                .into_iter()
                .enumerate()
                .map(|(section_index, section)| {
                    let category = section.category.clone();
                    view! {
                        <section
                            class="products-section"
                            data-category=category.clone()
                            style:display=move || {
                                if filter.with(|f| section_visible(f, &category)) { "block" } else { "none" }
                            }
                        >
                            <h2>{section.title}</h2>
                            {section
                                .products
                                .into_iter()
                                .enumerate()
                                .map(|(card_index, product)| {
                                    let shown = move || {
                                        visible.with(|v| v.get(section_index).is_some_and(|cards| cards.contains(&card_index)))
                                    };
                                    view! {
                                        <div
                                            class="product-cards"
                                            class:ai-recommended=product.ai_recommended
                                            style:display=move || if shown() { "block" } else { "none" }
                                        >
                                            <span class="product-name">{product.name}</span>
                                            <span class="info-value">{product.company}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn RecommendPage() -> impl IntoView {
    let open = RwSignal::new(None::<ServiceDetail>);
    let on_close = Callback::new(move |()| open.set(None));

    view! {
        <div class="recommend-page">
            <div class="service-grid">
                {SERVICES
                    .iter()
                    .map(|service| {
                        let service = *service;
                        view! {
                            <div class="service-card" on:click=move |_| open.set(Some(service))>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <button class="btn-ai-recommend" on:click=move |_| set_href(AI_RECOMMEND_URL)>
                "AI 맞춤 추천 받기"
            </button>
            {move || open.get().map(|detail| view! { <ServiceModal detail=detail on_close=on_close/> })}
        </div>
    }
}
