use super::*;
use crate::validate::IssueKind;

fn result(issues: Vec<Issue>) -> ValidationResult {
    ValidationResult { issues }
}

#[test]
fn show_splits_field_and_step_issues() {
    let mut board = ErrorBoard::default();
    board.show(&result(vec![
        Issue::field(FieldId::Username, IssueKind::UsernameTooShort),
        Issue::step(IssueKind::GenderRequired),
        Issue::step(IssueKind::EducationRequired),
    ]));
    assert_eq!(board.field_error(FieldId::Username), Some("아이디는 4자 이상이어야 합니다."));
    assert_eq!(board.step_errors(), &["성별을 선택해주세요.".to_owned(), "교육수준을 선택해주세요.".to_owned()]);
}

#[test]
fn show_replaces_previous_run() {
    let mut board = ErrorBoard::default();
    board.show(&result(vec![Issue::field(FieldId::Email, IssueKind::EmailRequired)]));
    board.show(&result(vec![Issue::step(IssueKind::AgeRequired)]));
    assert_eq!(board.field_error(FieldId::Email), None);
    assert_eq!(board.step_errors().len(), 1);
}

#[test]
fn clear_field_leaves_other_fields() {
    let mut board = ErrorBoard::default();
    board.show(&result(vec![
        Issue::field(FieldId::Username, IssueKind::UsernameRequired),
        Issue::field(FieldId::Email, IssueKind::EmailRequired),
    ]));
    board.clear_field(FieldId::Username);
    assert_eq!(board.field_error(FieldId::Username), None);
    assert!(board.field_error(FieldId::Email).is_some());
}

#[test]
fn second_issue_for_field_replaces_first() {
    let mut board = ErrorBoard::default();
    board.show_issue(&Issue::field(FieldId::Password, IssueKind::PasswordTooShort));
    board.show_issue(&Issue::field(FieldId::Password, IssueKind::PasswordCommon));
    assert_eq!(board.field_error(FieldId::Password), Some("일상적인 단어는 비밀번호로 사용할 수 없습니다."));
}

#[test]
fn clear_all_empties_board() {
    let mut board = ErrorBoard::default();
    board.show(&result(vec![Issue::step(IssueKind::MandatoryAgreement)]));
    assert!(!board.is_empty());
    board.clear_all();
    assert!(board.is_empty());
}
