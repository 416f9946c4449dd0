use super::*;

#[test]
fn paths_are_unique() {
    for (i, a) in AppRoute::ALL.iter().enumerate() {
        for b in &AppRoute::ALL[i + 1..] {
            assert_ne!(a.path(), b.path(), "{a:?} and {b:?} share a path");
        }
    }
}

#[test]
fn paths_are_absolute() {
    for route in AppRoute::ALL {
        assert!(route.path().starts_with('/'), "{route:?}");
    }
}

#[test]
fn nav_and_footer_entries_are_linkable() {
    for route in NAV {
        assert!(route.href().is_some(), "{route:?}");
    }
    for (_, links) in FOOTER {
        for route in *links {
            assert!(route.href().is_some(), "{route:?}");
        }
    }
}

#[test]
fn parameterised_route_has_no_href() {
    assert_eq!(AppRoute::BlogPost.href(), None);
    assert_eq!(AppRoute::Chat.href(), Some("/chat"));
}

#[test]
fn titles_mention_the_product() {
    for route in AppRoute::ALL {
        assert!(route.title().contains("Lumina"), "{route:?}");
    }
}

#[test]
fn home_is_only_active_on_root() {
    assert!(is_active(AppRoute::Home, "/"));
    assert!(!is_active(AppRoute::Home, "/chat"));
}

#[test]
fn nested_paths_activate_their_section() {
    assert!(is_active(AppRoute::Blog, "/blog/introducing-lumina"));
    assert!(is_active(AppRoute::Chat, "/chat"));
    assert!(!is_active(AppRoute::Chat, "/chatter"));
}
