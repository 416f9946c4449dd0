use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light_with_nav_closed() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.nav_open);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_toggle_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_parse_accepts_persisted_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse(" dark\n"), Some(Theme::Dark));
}

#[test]
fn theme_parse_rejects_unknown_values() {
    assert_eq!(Theme::parse("true"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
}

#[test]
fn theme_as_str_matches_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn theme_toggle_icon_points_at_other_theme() {
    assert_eq!(Theme::Light.toggle_icon(), "☾");
    assert_eq!(Theme::Dark.toggle_icon(), "☀");
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}
