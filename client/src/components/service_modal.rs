//! Detail modal for a recommended financial service.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceDetail {
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

pub const SERVICES: &[ServiceDetail] = &[
    ServiceDetail {
        title: "맞춤설계로 Smart하게",
        description: "AI 기반 분석을 통해 고객님의 라이프스타일과 재정 상황을 종합적으로 분석하여 최적의 맞춤상품을 추천합니다.",
        benefits: &["개인 맞춤형 포트폴리오", "AI 기반 리스크 분석", "실시간 상품 비교", "전문가 상담 연결"],
    },
    ServiceDetail {
        title: "자녀보호터 노후대비까지",
        description: "생애주기별 필요한 다양한 보장상품을 체계적으로 설계하여 현재와 미래의 안정을 동시에 보장합니다.",
        benefits: &["생애주기별 맞춤 보장", "교육비 준비 플랜", "노후 자금 설계", "가족 보호 종합 솔루션"],
    },
    ServiceDetail {
        title: "간편설문조사로 Quick하게",
        description: "5분 내외의 간단한 설문을 통해 즉시 개인화된 상품 추천을 받을 수 있는 빠른 진단 서비스입니다.",
        benefits: &["5분 내 빠른 진단", "즉시 결과 확인", "모바일 최적화", "간편한 UI/UX"],
    },
    ServiceDetail {
        title: "나와 비슷한 사람들의 선택",
        description: "수십만 고객의 실제 선택 데이터를 바탕으로 나와 유사한 조건의 사람들이 선택한 검증된 상품을 추천합니다.",
        benefits: &["빅데이터 기반 분석", "유사 고객군 매칭", "검증된 상품 추천", "만족도 기반 랭킹"],
    },
];

/// Fullscreen modal with the service description and its feature list.
/// Closes on the backdrop, the close button, or Escape.
#[component]
pub fn ServiceModal(detail: ServiceDetail, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="service-modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="service-modal"
                role="dialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="service-modal__header">
                    <h3>{detail.title}</h3>
                    <button class="service-modal__close" title="닫기" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <div class="service-modal__body">
                    <p>{detail.description}</p>
                    <h4>"주요 특징:"</h4>
                    <ul>{detail.benefits.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}</ul>
                </div>
            </div>
        </div>
    }
}
