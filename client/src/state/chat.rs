//! Simulated chat conversations.
//!
//! DESIGN
//! ======
//! A submitted message is appended immediately and marks the conversation as
//! pending. The caller reads `turn` and schedules `deliver_reply(turn)` after
//! `REPLY_DELAY_MS`, which appends exactly one canned line for the persona.
//! Every submit and every clear starts a new turn, so a timer armed before a
//! clear finds a stale turn and does nothing. Replies rotate through the
//! persona's list so repeated questions do not echo the same sentence.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Simulated latency between a user message and the canned reply.
pub const REPLY_DELAY_MS: u64 = 1200;

/// Which character a chat view talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persona {
    Assistant,
    Companion,
    DigitalHuman,
}

impl Persona {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Assistant => "Lumina",
            Self::Companion => "Aria",
            Self::DigitalHuman => "Nova",
        }
    }

    pub fn greeting(self) -> &'static str {
        match self {
            Self::Assistant => "Hi, I'm Lumina. Ask me anything about writing, planning or learning.",
            Self::Companion => "Hey you! I saved you a seat. How was your day?",
            Self::DigitalHuman => "Hello, I'm Nova. I can talk you through our product in real time.",
        }
    }

    pub fn replies(self) -> &'static [&'static str] {
        match self {
            Self::Assistant => &[
                "Great question! Here is a short overview to get you started.",
                "I've broken that down into three simple steps you can try today.",
                "That's an interesting idea. Would you like me to expand on it?",
                "Here's a draft you can tweak to fit your own voice.",
            ],
            Self::Companion => &[
                "That sounds like a lot. I'm proud of you for getting through it.",
                "Ha! You always know how to make me smile.",
                "Tell me more, I'm all ears.",
            ],
            Self::DigitalHuman => &[
                "Sure. Lumina Pro includes unlimited chats and priority creation.",
                "I can show you the creation studio next, just say the word.",
                "Our community hosts weekly events you can join for free.",
            ],
        }
    }
}

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single chat line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content: content.into() }
    }
}

/// Conversation view-model for one chat page.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub persona: Persona,
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
    reply_cursor: usize,
    turn: u32,
}

impl ChatState {
    /// Fresh conversation seeded with the persona's greeting.
    pub fn new(persona: Persona) -> Self {
        Self {
            persona,
            messages: vec![ChatMessage::new(Role::Assistant, persona.greeting())],
            pending: false,
            reply_cursor: 0,
            turn: 0,
        }
    }

    /// Identifies the latest submission. A scheduled reply must carry it.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Append a user message. Returns `false` (and changes nothing) for
    /// whitespace-only input or while a reply is still pending.
    pub fn submit(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || self.pending {
            return false;
        }
        self.messages.push(ChatMessage::new(Role::User, text));
        self.pending = true;
        self.turn = self.turn.wrapping_add(1);
        true
    }

    /// Append the next canned reply if one is owed to `turn`. Replies for an
    /// older turn are dropped.
    pub fn deliver_reply(&mut self, turn: u32) -> bool {
        if !self.pending || turn != self.turn {
            return false;
        }
        let replies = self.persona.replies();
        let reply = replies[self.reply_cursor % replies.len()];
        self.reply_cursor += 1;
        self.messages.push(ChatMessage::new(Role::Assistant, reply));
        self.pending = false;
        true
    }

    /// Drop the history and start over with the greeting.
    pub fn clear(&mut self) {
        let turn = self.turn.wrapping_add(1);
        *self = Self { turn, ..Self::new(self.persona) };
    }
}
