use super::*;

#[test]
fn new_group_is_unchecked() {
    let group = CheckGroup::new(3);
    assert_eq!(group.items(), &[false, false, false]);
    assert!(!group.all_checked());
}

#[test]
fn checking_group_checks_every_item() {
    let mut group = CheckGroup::new(3);
    group.set_all(true);
    assert_eq!(group.items(), &[true, true, true]);
    assert!(group.all_checked());
}

#[test]
fn unchecking_group_unchecks_every_item() {
    let mut group = CheckGroup::new(2);
    group.set_all(true);
    group.set_all(false);
    assert_eq!(group.items(), &[false, false]);
}

#[test]
fn unchecking_one_item_unchecks_group() {
    let mut group = CheckGroup::new(3);
    group.set_all(true);
    group.set_item(1, false);
    assert!(!group.all_checked());
    assert!(group.item(0));
    assert!(!group.item(1));
}

#[test]
fn rechecking_every_item_rechecks_group() {
    let mut group = CheckGroup::new(3);
    group.set_all(true);
    group.set_item(2, false);
    group.set_item(2, true);
    assert!(group.all_checked());

    let mut fresh = CheckGroup::new(2);
    fresh.set_item(0, true);
    assert!(!fresh.all_checked());
    fresh.set_item(1, true);
    assert!(fresh.all_checked());
}

#[test]
fn out_of_range_item_is_ignored() {
    let mut group = CheckGroup::new(1);
    group.set_item(5, true);
    assert_eq!(group.items(), &[false]);
    assert!(!group.item(5));
}
