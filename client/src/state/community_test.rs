use super::*;

#[test]
fn default_thread_is_seeded() {
    let state = CommunityState::default();
    assert_eq!(state.comments.len(), SEED.len());
    assert!(state.comments.iter().all(|c| !c.liked));
}

#[test]
fn posting_whitespace_does_not_add_an_entry() {
    let mut state = CommunityState::default();
    let before = state.comments.len();
    assert!(!state.post("   \n\t "));
    assert_eq!(state.comments.len(), before);
}

#[test]
fn posting_prepends_trimmed_comment_by_self() {
    let mut state = CommunityState::default();
    assert!(state.post("  hello community  "));
    let first = &state.comments[0];
    assert_eq!(first.author, SELF_AUTHOR);
    assert_eq!(first.body, "hello community");
    assert_eq!(first.likes, 0);
}

#[test]
fn toggle_like_adds_then_removes() {
    let mut state = CommunityState::default();
    let id = state.comments[0].id.clone();
    let base = state.comments[0].likes;

    state.toggle_like(&id);
    assert_eq!(state.comments[0].likes, base + 1);
    assert!(state.comments[0].liked);

    state.toggle_like(&id);
    assert_eq!(state.comments[0].likes, base);
    assert!(!state.comments[0].liked);
}

#[test]
fn toggle_like_unknown_id_is_noop() {
    let mut state = CommunityState::default();
    let before: Vec<u32> = state.comments.iter().map(|c| c.likes).collect();
    state.toggle_like("missing");
    let after: Vec<u32> = state.comments.iter().map(|c| c.likes).collect();
    assert_eq!(before, after);
}
