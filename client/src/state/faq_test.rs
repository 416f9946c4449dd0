use super::*;

#[test]
fn accordion_starts_closed() {
    assert_eq!(FaqState::default().open, None);
}

#[test]
fn opening_another_entry_closes_the_first() {
    let mut state = FaqState::default();
    state.toggle(0);
    state.toggle(2);
    assert!(!state.is_open(0));
    assert!(state.is_open(2));
}

#[test]
fn clicking_open_entry_closes_it() {
    let mut state = FaqState::default();
    state.toggle(1);
    state.toggle(1);
    assert_eq!(state.open, None);
}

#[test]
fn out_of_range_index_closes_everything() {
    let mut state = FaqState { open: Some(0) };
    state.toggle(FAQ.len());
    assert_eq!(state.open, None);
}
