use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_has_no_notices() {
    let state = UiState::default();
    assert!(state.notices.is_empty());
}

#[test]
fn ui_state_default_menu_closed() {
    let state = UiState::default();
    assert!(!state.menu.is_open());
    assert_eq!(state.menu.active(), None);
}

// =============================================================
// Navigation table
// =============================================================

#[test]
fn nav_sections_have_links() {
    assert!(!NAV_SECTIONS.is_empty());
    for section in NAV_SECTIONS {
        assert!(!section.links.is_empty(), "{} has no links", section.label);
        for (href, _) in section.links {
            assert!(href.starts_with('/'), "{href} is not site-relative");
        }
    }
}

fn nav_hrefs() -> Vec<&'static str> {
    NAV_SECTIONS.iter().flat_map(|s| s.links.iter()).map(|(href, _)| *href).collect()
}

#[test]
fn nav_links_use_server_routes() {
    let hrefs = nav_hrefs();
    for expected in ["/accounts/profile/", "/products/list/", "/products/recommend/", "/support/notice/", "/news/"] {
        assert!(hrefs.contains(&expected), "missing {expected} in {hrefs:?}");
    }
    for stale in ["/accounts/profile/edit/", "/products/", "/support/notices/"] {
        assert!(!hrefs.contains(&stale), "{stale} is not served");
    }
}

#[test]
fn nav_news_links_use_server_categories() {
    use crate::pages::news::NEWS_CATEGORIES;
    use widgets::query::QueryParams;

    let categories: Vec<_> = nav_hrefs()
        .into_iter()
        .filter_map(|href| href.strip_prefix("/news/"))
        .filter(|rest| !rest.is_empty())
        .map(|rest| QueryParams::parse(rest).active_category().to_owned())
        .collect();
    assert!(!categories.is_empty());
    for category in categories {
        assert!(NEWS_CATEGORIES.iter().any(|(v, _)| *v == category), "{category} is not filterable");
    }
}
