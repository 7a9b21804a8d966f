use super::*;

// =============================================================================
// Title search
// =============================================================================

#[test]
fn matches_case_insensitive_substring() {
    let titles = ["Holiday Notice", "시스템 점검 안내", "New holiday hours"];
    let outcome = filter_titles(titles, "HOLIDAY");
    assert_eq!(outcome.visible, vec![0, 2]);
    assert_eq!(outcome.count_label(), "총 2건");
    assert!(!outcome.show_empty());
    assert!(outcome.is_visible(2));
    assert!(!outcome.is_visible(1));
}

#[test]
fn no_match_shows_empty_state() {
    let outcome = filter_titles(["a", "b"], "zzz");
    assert_eq!(outcome.count(), 0);
    assert_eq!(outcome.count_label(), "총 0건");
    assert!(outcome.show_empty());
}

#[test]
fn blank_term_keeps_everything() {
    let outcome = filter_titles(["a", "b", "c"], "   ");
    assert_eq!(outcome.visible, vec![0, 1, 2]);
}

#[test]
fn term_is_trimmed() {
    let outcome = filter_titles(["점검 안내", "이벤트"], " 점검 ");
    assert_eq!(outcome.visible, vec![0]);
}

// =============================================================================
// Products
// =============================================================================

#[test]
fn product_matches_name_or_company() {
    let cards = vec![
        ProductCard::new("Super Savings", "KB Bank"),
        ProductCard::new("청년 적금", "신한은행"),
        ProductCard::new("Travel Card", "Hana"),
    ];
    assert_eq!(filter_products(&cards, "kb"), vec![0]);
    assert_eq!(filter_products(&cards, "적금"), vec![1]);
    assert_eq!(filter_products(&cards, "a"), vec![0, 2]);
    assert_eq!(filter_products(&cards, ""), vec![0, 1, 2]);
}

#[test]
fn all_tab_shows_only_all_section() {
    assert!(section_visible("all", "all"));
    assert!(!section_visible("all", "deposit"));
}

#[test]
fn category_tab_shows_only_its_section() {
    assert!(section_visible("deposit", "deposit"));
    assert!(!section_visible("deposit", "all"));
    assert!(!section_visible("deposit", "loan"));
}
