use super::*;

fn ready_state() -> CreationState {
    let mut state = CreationState::default();
    assert!(state.select_model("canvas-xl"));
    state.prompt = "a lighthouse at dusk".to_owned();
    state
}

// =============================================================
// Generate button gating
// =============================================================

#[test]
fn generate_disabled_without_model() {
    let state = CreationState { prompt: "cats".to_owned(), ..CreationState::default() };
    assert!(!state.can_generate());
}

#[test]
fn generate_disabled_with_blank_prompt() {
    let mut state = CreationState::default();
    state.select_model("melody");
    state.prompt = "   ".to_owned();
    assert!(!state.can_generate());
}

#[test]
fn selecting_model_enables_generate() {
    let state = ready_state();
    assert!(state.can_generate());
}

#[test]
fn unknown_model_keeps_previous_selection() {
    let mut state = ready_state();
    assert!(!state.select_model("nope"));
    assert_eq!(state.selected.map(|m| m.id), Some("canvas-xl"));
}

// =============================================================
// Progress
// =============================================================

#[test]
fn tick_without_start_is_noop() {
    let mut state = ready_state();
    assert!(!state.tick(state.run()));
    assert_eq!(state.progress, 0);
    assert_eq!(state.status, CreationStatus::Idle);
}

#[test]
fn progress_reaches_100_then_yields_result() {
    let mut state = ready_state();
    assert!(state.start());
    assert!(!state.can_generate());

    let run = state.run();
    let mut ticks = 0;
    while state.tick(run) {
        ticks += 1;
        assert!(state.progress < 100);
    }
    assert_eq!(ticks + 1, usize::from(100 / PROGRESS_STEP));
    assert_eq!(state.progress, 100);
    assert_eq!(
        state.status,
        CreationStatus::Done(placeholder_result("Canvas XL", "a lighthouse at dusk"))
    );
}

#[test]
fn start_twice_is_rejected_while_generating() {
    let mut state = ready_state();
    assert!(state.start());
    state.tick(state.run());
    assert!(!state.start());
    assert_eq!(state.progress, PROGRESS_STEP);
}

#[test]
fn reset_returns_to_idle_and_keeps_model() {
    let mut state = ready_state();
    state.start();
    let run = state.run();
    while state.tick(run) {}
    state.reset();
    assert_eq!(state.status, CreationStatus::Idle);
    assert_eq!(state.progress, 0);
    assert!(state.prompt.is_empty());
    assert!(state.selected.is_some());
}

#[test]
fn model_ids_are_unique() {
    for (i, a) in MODELS.iter().enumerate() {
        for b in &MODELS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn loop_from_before_reset_stops_on_next_tick() {
    let mut state = ready_state();
    assert!(state.start());
    let old = state.run();
    assert!(state.tick(old));

    state.reset();
    state.prompt = "a lighthouse at dawn".to_owned();
    assert!(state.start());
    let new = state.run();
    assert_ne!(old, new);

    assert!(!state.tick(old));
    assert!(state.tick(new));
    assert_eq!(state.progress, PROGRESS_STEP);
}

#[test]
fn reset_mid_run_stops_the_loop() {
    let mut state = ready_state();
    state.start();
    let run = state.run();
    state.tick(run);
    state.reset();
    assert!(!state.tick(run));
    assert_eq!(state.progress, 0);
    assert_eq!(state.status, CreationStatus::Idle);
}
