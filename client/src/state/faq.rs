//! Help centre questions and accordion state.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Is Lumina free to use?",
        answer: "Yes. The Free plan includes daily chats, one companion and full community access.",
    },
    FaqEntry {
        question: "Are my conversations saved?",
        answer: "Not in this preview. Conversations disappear when you leave the page.",
    },
    FaqEntry {
        question: "How do I switch to dark mode?",
        answer: "Use the moon button in the header or pick a theme on the Settings page.",
    },
    FaqEntry {
        question: "Can I cancel my membership at any time?",
        answer: "Of course. Plans renew each billing period and can be cancelled before renewal.",
    },
    FaqEntry {
        question: "Who owns what I create?",
        answer: "You do. Creations are yours to share, remix or keep private.",
    },
];

/// Accordion with at most one entry open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqState {
    pub open: Option<usize>,
}

impl FaqState {
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) || index >= FAQ.len() { None } else { Some(index) };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
