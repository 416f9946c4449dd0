use super::*;

#[test]
fn all_filter_returns_everything_in_order() {
    let ids: Vec<_> = filter_media(MediaFilter::All).iter().map(|m| m.id).collect();
    let expected: Vec<_> = MEDIA.iter().map(|m| m.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn kind_filter_returns_only_that_kind() {
    for kind in [MediaKind::Image, MediaKind::Video, MediaKind::Music] {
        let items = filter_media(MediaFilter::Only(kind));
        assert!(!items.is_empty());
        assert!(items.iter().all(|m| m.kind == kind));
    }
}

#[test]
fn filters_partition_the_gallery() {
    let total: usize = MediaFilter::ALL[1..].iter().map(|f| filter_media(*f).len()).sum();
    assert_eq!(total, MEDIA.len());
}

#[test]
fn only_timed_media_have_durations() {
    for item in MEDIA {
        assert_eq!(item.duration.is_some(), item.kind != MediaKind::Image, "{}", item.id);
    }
}

#[test]
fn filter_labels() {
    assert_eq!(MediaFilter::default().label(), "All");
    assert_eq!(MediaFilter::Only(MediaKind::Music).label(), "Music");
}
