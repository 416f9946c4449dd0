use super::*;

#[test]
fn empty_query_lists_every_group() {
    let state = GroupsState::default();
    assert_eq!(state.visible().len(), GROUPS.len());
}

#[test]
fn query_matches_name_case_insensitively() {
    let state = GroupsState { query: "PIXEL".to_owned(), ..GroupsState::default() };
    let ids: Vec<_> = state.visible().iter().map(|g| g.id).collect();
    assert_eq!(ids, vec!["pixel-dreamers"]);
}

#[test]
fn query_matches_topic() {
    let state = GroupsState { query: " music ".to_owned(), ..GroupsState::default() };
    let ids: Vec<_> = state.visible().iter().map(|g| g.id).collect();
    assert_eq!(ids, vec!["beat-lab"]);
}

#[test]
fn query_without_match_is_empty() {
    let state = GroupsState { query: "gardening".to_owned(), ..GroupsState::default() };
    assert!(state.visible().is_empty());
}

#[test]
fn join_then_leave_updates_member_count() {
    let mut state = GroupsState::default();
    let group = &GROUPS[0];

    state.toggle_join(group.id);
    assert!(state.is_joined(group.id));
    assert_eq!(state.member_count(group), group.members + 1);

    state.toggle_join(group.id);
    assert!(!state.is_joined(group.id));
    assert_eq!(state.member_count(group), group.members);
}

#[test]
fn joining_unknown_group_is_ignored() {
    let mut state = GroupsState::default();
    state.toggle_join("ghost-club");
    assert!(state.joined.is_empty());
}
