//! Media gallery items and category filter.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Music,
}

impl MediaKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Music => "Music",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MediaFilter {
    #[default]
    All,
    Only(MediaKind),
}

impl MediaFilter {
    pub const ALL: [Self; 4] =
        [Self::All, Self::Only(MediaKind::Image), Self::Only(MediaKind::Video), Self::Only(MediaKind::Music)];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(kind) => kind.label(),
        }
    }

    pub fn matches(self, kind: MediaKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == kind,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaItem {
    pub id: &'static str,
    pub title: &'static str,
    pub creator: &'static str,
    pub kind: MediaKind,
    pub thumbnail: &'static str,
    pub duration: Option<&'static str>,
}

pub const MEDIA: &[MediaItem] = &[
    MediaItem {
        id: "m1",
        title: "Neon Harbour",
        creator: "Devon",
        kind: MediaKind::Image,
        thumbnail: "/images/media/neon-harbour.svg",
        duration: None,
    },
    MediaItem {
        id: "m2",
        title: "Morning Loop",
        creator: "Beat Lab",
        kind: MediaKind::Music,
        thumbnail: "/images/media/waveform.svg",
        duration: Some("0:30"),
    },
    MediaItem {
        id: "m3",
        title: "Paper Cranes",
        creator: "Maya",
        kind: MediaKind::Video,
        thumbnail: "/images/media/paper-cranes.svg",
        duration: Some("0:12"),
    },
    MediaItem {
        id: "m4",
        title: "Forest Library",
        creator: "Priya",
        kind: MediaKind::Image,
        thumbnail: "/images/media/forest-library.svg",
        duration: None,
    },
    MediaItem {
        id: "m5",
        title: "Rain on Glass",
        creator: "Lumina Studio",
        kind: MediaKind::Music,
        thumbnail: "/images/media/waveform.svg",
        duration: Some("0:30"),
    },
    MediaItem {
        id: "m6",
        title: "City in a Bottle",
        creator: "Jonah",
        kind: MediaKind::Video,
        thumbnail: "/images/media/city-bottle.svg",
        duration: Some("0:08"),
    },
];

pub fn filter_media(filter: MediaFilter) -> Vec<&'static MediaItem> {
    MEDIA.iter().filter(|m| filter.matches(m.kind)).collect()
}
