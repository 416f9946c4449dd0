//! Community feed: seeded discussion plus a local comment box.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

/// A comment in the community thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub body: String,
    pub posted: &'static str,
    pub likes: u32,
    pub liked: bool,
}

/// Topics shown in the sidebar. Display only.
pub const TRENDING_TOPICS: &[(&str, u32)] = &[
    ("#PromptOfTheWeek", 1284),
    ("#AIArtShowcase", 972),
    ("#StudyBuddies", 651),
    ("#LuminaTips", 433),
];

const SEED: &[(&str, &str, &str, u32)] = &[
    ("Maya", "The new companion voice is so much warmer. Anyone else notice?", "2h ago", 24),
    ("Devon", "Shared my first Canvas XL piece in the gallery, feedback welcome!", "5h ago", 17),
    ("Priya", "Tip: ask Lumina for a weekly plan and paste it into your notes app.", "1d ago", 41),
];

pub const SELF_AUTHOR: &str = "You";

#[derive(Clone, Debug)]
pub struct CommunityState {
    pub comments: Vec<Comment>,
}

impl Default for CommunityState {
    fn default() -> Self {
        let comments = SEED
            .iter()
            .map(|&(author, body, posted, likes)| Comment {
                id: uuid::Uuid::new_v4().to_string(),
                author: author.to_owned(),
                body: body.to_owned(),
                posted,
                likes,
                liked: false,
            })
            .collect();
        Self { comments }
    }
}

impl CommunityState {
    /// Post a comment at the top of the thread. Blank input is ignored.
    pub fn post(&mut self, text: &str) -> bool {
        let body = text.trim();
        if body.is_empty() {
            return false;
        }
        self.comments.insert(
            0,
            Comment {
                id: uuid::Uuid::new_v4().to_string(),
                author: SELF_AUTHOR.to_owned(),
                body: body.to_owned(),
                posted: "just now",
                likes: 0,
                liked: false,
            },
        );
        true
    }

    pub fn toggle_like(&mut self, id: &str) {
        if let Some(comment) = self.comments.iter_mut().find(|c| c.id == id) {
            if comment.liked {
                comment.likes = comment.likes.saturating_sub(1);
            } else {
                comment.likes += 1;
            }
            comment.liked = !comment.liked;
        }
    }
}
