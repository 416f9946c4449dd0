use super::*;

fn answer_all(option: usize) -> PsychState {
    let mut state = PsychState::default();
    for q in 0..QUESTIONS.len() {
        assert!(state.answer(q, option));
    }
    state
}

#[test]
fn incomplete_quiz_has_no_result() {
    let mut state = PsychState::default();
    state.answer(0, 2);
    assert_eq!(state.answered(), 1);
    assert!(!state.is_complete());
    assert_eq!(state.score(), None);
    assert!(state.result().is_none());
}

#[test]
fn lowest_answers_give_reflective_profile() {
    let state = answer_all(0);
    assert_eq!(state.score(), Some(6));
    assert_eq!(state.result().unwrap().name, "The Reflective Dreamer");
}

#[test]
fn highest_answers_give_spark_profile() {
    let state = answer_all(3);
    assert_eq!(state.score(), Some(24));
    assert_eq!(state.result().unwrap().name, "The Radiant Spark");
}

#[test]
fn bucket_boundaries_are_inclusive() {
    assert_eq!(profile_for(10).name, "The Reflective Dreamer");
    assert_eq!(profile_for(11).name, "The Steady Anchor");
    assert_eq!(profile_for(15).name, "The Steady Anchor");
    assert_eq!(profile_for(16).name, "The Curious Explorer");
    assert_eq!(profile_for(21).name, "The Radiant Spark");
}

#[test]
fn out_of_range_answers_are_ignored() {
    let mut state = PsychState::default();
    assert!(!state.answer(QUESTIONS.len(), 0));
    assert!(!state.answer(0, 9));
    assert_eq!(state.answered(), 0);
}

#[test]
fn changing_an_answer_replaces_it() {
    let mut state = answer_all(0);
    state.answer(0, 3);
    assert_eq!(state.score(), Some(9));
}

#[test]
fn reset_clears_answers() {
    let mut state = answer_all(1);
    state.reset();
    assert_eq!(state.answered(), 0);
}
