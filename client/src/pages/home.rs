//! Landing page: main slide carousel and the featured product strip.

use leptos::prelude::*;

use crate::components::main_carousel::{MainCarousel, ProductSlider, ProductTile, Slide};

const SLIDES: &[Slide] = &[
    Slide {
        title: "나에게 꼭 맞는 금융상품",
        body: "AI가 고객님의 재정 상황을 분석해 최적의 상품을 추천합니다.",
        href: "/products/recommend/",
    },
    Slide {
        title: "오늘의 금융뉴스",
        body: "경제, 증권, 부동산 소식을 한눈에 확인하세요.",
        href: "/news/",
    },
    Slide {
        title: "간편 회원가입",
        body: "몇 단계만으로 맞춤 추천 서비스를 시작할 수 있습니다.",
        href: "/accounts/signup/",
    },
];

const FEATURED: &[ProductTile] = &[
    ProductTile { name: "청년 우대 적금", company: "신한은행" },
    ProductTile { name: "정기예금 플러스", company: "KB국민은행" },
    ProductTile { name: "전세자금 대출", company: "하나은행" },
    ProductTile { name: "여행 특화 카드", company: "우리카드" },
    ProductTile { name: "AI 맞춤 적금", company: "NH농협은행" },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <MainCarousel slides=SLIDES/>
            <h2 class="section-title">"추천 상품"</h2>
            <ProductSlider tiles=FEATURED/>
        </div>
    }
}
