#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_in_non_hydrate_tests() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn set_returns_requested_theme() {
    assert_eq!(set(Theme::Dark), Theme::Dark);
}

#[test]
fn storage_key_is_namespaced() {
    assert!(STORAGE_KEY.starts_with("lumina_"));
}
