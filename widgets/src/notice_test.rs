use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut notices = Notices::new();
    let a = notices.error("뉴스 새로고침에 실패했습니다.");
    let b = notices.success("저장되었습니다.");
    assert!(b > a);
    assert_eq!(notices.items().len(), 2);
    assert_eq!(notices.items()[0].level, NoticeLevel::Error);
    assert_eq!(notices.items()[1].message, "저장되었습니다.");
}

#[test]
fn dismiss_removes_only_that_notice() {
    let mut notices = Notices::new();
    let a = notices.error("a");
    let b = notices.error("b");
    assert!(notices.dismiss(a));
    assert_eq!(notices.items().len(), 1);
    assert_eq!(notices.items()[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut notices = Notices::new();
    let a = notices.error("a");
    assert!(notices.dismiss(a));
    assert!(!notices.dismiss(a));
    assert!(!notices.dismiss(99));
    assert!(notices.is_empty());
}

#[test]
fn level_classes() {
    assert_eq!(NoticeLevel::Success.class(), "notification success");
    assert_eq!(NoticeLevel::Error.class(), "notification error");
}
