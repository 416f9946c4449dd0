//! Personality quiz: fixed questions, scored options, bucketed profiles.
//!
//! DESIGN
//! ======
//! Each option is worth 1-4 points. The total is bucketed into one of four
//! profiles by `PROFILES[..].max_score`. A result exists only once every
//! question has an answer.

#[cfg(test)]
#[path = "psych_test.rs"]
mod psych_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: &'static str,
    pub points: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub summary: &'static str,
    /// Inclusive upper bound of the score bucket.
    pub max_score: u32,
}

const fn opts(labels: [&'static str; 4]) -> [AnswerOption; 4] {
    [
        AnswerOption { label: labels[0], points: 1 },
        AnswerOption { label: labels[1], points: 2 },
        AnswerOption { label: labels[2], points: 3 },
        AnswerOption { label: labels[3], points: 4 },
    ]
}

const Q1: [AnswerOption; 4] = opts(["Curl up with a book", "Call a close friend", "Try a new café", "Throw a party"]);
const Q2: [AnswerOption; 4] = opts(["Plan every detail", "Make a rough outline", "Decide on the way", "Just go"]);
const Q3: [AnswerOption; 4] = opts(["Listen quietly", "Ask a question", "Share an idea", "Lead the discussion"]);
const Q4: [AnswerOption; 4] = opts(["Routine", "Small changes", "Regular adventures", "Constant novelty"]);
const Q5: [AnswerOption; 4] = opts(["Write it down", "Sleep on it", "Talk it through", "Act immediately"]);
const Q6: [AnswerOption; 4] = opts(["A quiet forest", "A lakeside cabin", "A busy market", "A music festival"]);

pub const QUESTIONS: &[Question] = &[
    Question { prompt: "It's a free evening. You...", options: &Q1 },
    Question { prompt: "Before a trip you usually...", options: &Q2 },
    Question { prompt: "In a group conversation you tend to...", options: &Q3 },
    Question { prompt: "Which pace of life suits you?", options: &Q4 },
    Question { prompt: "Facing a hard decision you...", options: &Q5 },
    Question { prompt: "Pick a place to recharge.", options: &Q6 },
];

pub const PROFILES: &[Profile] = &[
    Profile {
        name: "The Reflective Dreamer",
        summary: "You draw energy from quiet and think deeply before you act.",
        max_score: 10,
    },
    Profile {
        name: "The Steady Anchor",
        summary: "Calm and dependable, you balance curiosity with care.",
        max_score: 15,
    },
    Profile {
        name: "The Curious Explorer",
        summary: "You love new ideas and people, and you bring others along.",
        max_score: 20,
    },
    Profile {
        name: "The Radiant Spark",
        summary: "Bold and energetic, you light up every room you enter.",
        max_score: u32::MAX,
    },
];

pub fn profile_for(score: u32) -> &'static Profile {
    PROFILES
        .iter()
        .find(|p| score <= p.max_score)
        .unwrap_or(&PROFILES[PROFILES.len() - 1])
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PsychState {
    pub answers: Vec<Option<usize>>,
}

impl Default for PsychState {
    fn default() -> Self {
        Self { answers: vec![None; QUESTIONS.len()] }
    }
}

impl PsychState {
    /// Record option `option` for question `question`. Out-of-range indexes
    /// are ignored.
    pub fn answer(&mut self, question: usize, option: usize) -> bool {
        let valid = QUESTIONS.get(question).is_some_and(|q| option < q.options.len());
        if valid {
            self.answers[question] = Some(option);
        }
        valid
    }

    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered() == QUESTIONS.len()
    }

    pub fn score(&self) -> Option<u32> {
        if !self.is_complete() {
            return None;
        }
        QUESTIONS
            .iter()
            .zip(&self.answers)
            .map(|(q, a)| a.and_then(|i| q.options.get(i)).map(|o| o.points))
            .sum()
    }

    pub fn result(&self) -> Option<&'static Profile> {
        self.score().map(profile_for)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
