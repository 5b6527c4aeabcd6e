use super::*;

#[test]
fn push_assigns_unique_ids_in_order() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeLevel::Info, "first");
    let b = state.push(NoticeLevel::Error, "second");
    assert_ne!(a, b);
    assert_eq!(state.notices.len(), 2);
    assert_eq!(state.notices[0].message, "first");
    assert_eq!(state.notices[1].level, NoticeLevel::Error);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeLevel::Success, "kept");
    let b = state.push(NoticeLevel::Error, "dropped");
    state.dismiss(b);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].id, a);
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = NoticeState::default();
    state.push(NoticeLevel::Info, "only");
    state.dismiss(999);
    assert_eq!(state.notices.len(), 1);
}
