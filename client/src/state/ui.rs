//! Site-wide chrome state shared through context: the floating notices and
//! the navigation dropdown.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use widgets::menu::MegaMenu;
use widgets::notice::Notices;

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub notices: Notices,
    pub menu: MegaMenu,
}

/// One top-level navigation entry and the links in its dropdown column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub label: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        label: "상품추천",
        links: &[("/products/list/", "상품 목록"), ("/products/recommend/", "맞춤 추천")],
    },
    NavSection {
        label: "금융뉴스",
        links: &[("/news/", "뉴스 목록"), ("/news/?category=금리", "금리"), ("/news/?category=주식/증권", "주식/증권")],
    },
    NavSection {
        label: "고객지원",
        links: &[("/support/notice/", "공지사항"), ("/support/guide/", "서비스 안내")],
    },
    NavSection {
        label: "마이페이지",
        links: &[("/accounts/login/", "로그인"), ("/accounts/profile/", "프로필 수정"), ("/accounts/logout/", "로그아웃")],
    },
];
