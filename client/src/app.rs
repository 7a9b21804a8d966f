//! Root application component with routing and the shared UI context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_stack::NoticeStack;
use crate::components::site_nav::SiteNav;
use crate::pages::{
    home::HomePage,
    login::LoginPage,
    news::NewsPage,
    notices::NoticeListPage,
    products::{ProductListPage, RecommendPage},
    profile::ProfileEditPage,
    signup::SignupPage,
};
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the site-wide [`UiState`] and routes each server path to its page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Title text="CodeDoc"/>

        <Router>
            <SiteNav/>
            <main class="site-main">
                <Routes fallback=|| "페이지를 찾을 수 없습니다.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("accounts"), StaticSegment("signup")) view=SignupPage/>
                    <Route path=(StaticSegment("accounts"), StaticSegment("login")) view=LoginPage/>
                    <Route path=(StaticSegment("accounts"), StaticSegment("profile")) view=ProfileEditPage/>
                    <Route path=StaticSegment("news") view=NewsPage/>
                    <Route path=(StaticSegment("support"), StaticSegment("notice")) view=NoticeListPage/>
                    <Route path=(StaticSegment("products"), StaticSegment("list")) view=ProductListPage/>
                    <Route path=(StaticSegment("products"), StaticSegment("recommend")) view=RecommendPage/>
                </Routes>
            </main>
            <NoticeStack/>
        </Router>
    }
}
