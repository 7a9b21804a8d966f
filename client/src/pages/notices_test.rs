use super::*;

fn board() -> Vec<NoticeItem> {
    serde_json::from_str(
        r#"[
            {"title": "시스템 점검 안내", "url": "/support/notices/1/", "date": "2025-01-02", "important": true},
            {"title": "설 연휴 고객센터 운영", "url": "/support/notices/2/"},
            {"title": "정기 시스템 업데이트", "url": "/support/notices/3/"}
        ]"#,
    )
    .unwrap()
}

#[test]
fn blank_search_shows_all() {
    let outcome = search_notices(&board(), "");
    assert_eq!(outcome.count_label(), "총 3건");
}

#[test]
fn search_narrows_and_counts() {
    let outcome = search_notices(&board(), "시스템");
    assert_eq!(outcome.visible, vec![0, 2]);
    assert_eq!(outcome.count_label(), "총 2건");
}

#[test]
fn no_match_shows_empty_state() {
    let outcome = search_notices(&board(), "환불");
    assert!(outcome.show_empty());
    assert_eq!(outcome.count_label(), "총 0건");
}

#[test]
fn optional_fields_default() {
    let items = board();
    assert!(items[0].important);
    assert!(!items[1].important);
    assert!(items[1].date.is_empty());
}
