use super::*;

#[test]
fn parse_accepts_leading_question_mark() {
    let query = QueryParams::parse("?category=economy&page=3");
    assert_eq!(query.get("category"), Some("economy"));
    assert_eq!(query.get("page"), Some("3"));
    assert_eq!(QueryParams::parse("category=economy"), QueryParams::parse("?category=economy"));
}

#[test]
fn parse_decodes_percent_and_plus() {
    let query = QueryParams::parse("search=%EA%B8%88%EB%A6%AC+%EC%9D%B8%EC%83%81");
    assert_eq!(query.search(), "금리 인상");
}

#[test]
fn active_category_defaults_to_all() {
    assert_eq!(QueryParams::parse("").active_category(), "all");
    assert_eq!(QueryParams::parse("category=stock").active_category(), "stock");
}

#[test]
fn category_change_keeps_search_and_resets_page() {
    let query = QueryParams::parse("search=bank&page=4");
    let next = query.with_category("economy");
    assert_eq!(next.get("category"), Some("economy"));
    assert_eq!(next.search(), "bank");
    assert_eq!(next.get("page"), None);
}

#[test]
fn all_category_removes_parameter() {
    let query = QueryParams::parse("category=economy&page=2");
    let next = query.with_category("all");
    assert_eq!(next.get("category"), None);
    assert!(next.is_empty());
    assert_eq!(next.to_href("/news/"), "/news/");
}

#[test]
fn search_keeps_category_and_resets_page() {
    let query = QueryParams::parse("category=economy&page=9");
    let next = query.with_search("  금리 ");
    assert_eq!(next.search(), "금리");
    assert_eq!(next.active_category(), "economy");
    assert_eq!(next.get("page"), None);
}

#[test]
fn empty_search_removes_term() {
    let next = QueryParams::parse("search=old").with_search("   ");
    assert_eq!(next.get("search"), None);
}

#[test]
fn explicit_all_category_dropped_on_search() {
    let next = QueryParams::parse("category=all").with_search("x");
    assert_eq!(next.get("category"), None);
}

#[test]
fn set_replaces_in_place_and_keeps_unknown_keys() {
    let mut query = QueryParams::parse("ref=home&category=a&sort=new&category=b");
    query.set("category", "c");
    assert_eq!(query.to_query_string(), "ref=home&category=c&sort=new");
}

#[test]
fn serialization_encodes_values() {
    let next = QueryParams::default().with_search("a&b c");
    assert_eq!(next.to_query_string(), "search=a%26b+c");
    assert_eq!(next.to_href("/news/"), "/news/?search=a%26b+c");
}

#[test]
fn take_flag_removes_and_reports() {
    let mut query = QueryParams::parse("saved=true&tab=2");
    assert!(query.take_flag("saved", "true"));
    assert_eq!(query.to_query_string(), "tab=2");
    assert!(!query.take_flag("saved", "true"));

    let mut other = QueryParams::parse("saved=false");
    assert!(!other.take_flag("saved", "true"));
    assert!(other.is_empty());
}
