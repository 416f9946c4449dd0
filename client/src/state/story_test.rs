use super::*;

// =============================================================
// Scene graph integrity
// =============================================================

#[test]
fn start_scene_exists() {
    assert!(scene(START_SCENE).is_some());
}

#[test]
fn every_choice_targets_an_existing_scene() {
    for s in SCENES {
        for choice in s.choices {
            assert!(scene(choice.target).is_some(), "{} -> {} is dangling", s.id, choice.target);
        }
    }
}

#[test]
fn scene_ids_are_unique() {
    for (i, a) in SCENES.iter().enumerate() {
        for b in &SCENES[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn graph_has_at_least_one_ending() {
    assert!(SCENES.iter().any(Scene::is_ending));
}

// =============================================================
// Traversal
// =============================================================

#[test]
fn default_state_is_at_start() {
    let state = StoryState::default();
    assert_eq!(state.current, START_SCENE);
    assert_eq!(state.steps_taken(), 0);
}

#[test]
fn choose_follows_target_and_records_path() {
    let mut state = StoryState::default();
    assert!(state.choose(1));
    assert_eq!(state.current, "cove");
    assert!(state.choose(0));
    assert_eq!(state.current, "gate");
    assert_eq!(state.path, vec!["shore", "cove"]);
}

#[test]
fn out_of_range_choice_is_ignored() {
    let mut state = StoryState::default();
    assert!(!state.choose(5));
    assert_eq!(state.current, START_SCENE);
    assert!(state.path.is_empty());
}

#[test]
fn ending_has_no_choices() {
    let mut state = StoryState::default();
    state.choose(0);
    state.choose(0);
    state.choose(0);
    let ending = state.current_scene().unwrap();
    assert_eq!(ending.id, "rescue");
    assert!(ending.is_ending());
    assert!(!state.choose(0));
}

#[test]
fn restart_returns_to_start() {
    let mut state = StoryState::default();
    state.choose(1);
    state.choose(1);
    state.restart();
    assert_eq!(state, StoryState::default());
}
