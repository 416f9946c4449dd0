//! Interest groups directory.

#[cfg(test)]
#[path = "groups_test.rs"]
mod groups_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Group {
    pub id: &'static str,
    pub name: &'static str,
    pub topic: &'static str,
    pub members: u32,
    pub description: &'static str,
}

pub const GROUPS: &[Group] = &[
    Group {
        id: "prompt-crafters",
        name: "Prompt Crafters",
        topic: "Writing",
        members: 12_480,
        description: "Swap prompts, critique outputs and run weekly challenges.",
    },
    Group {
        id: "pixel-dreamers",
        name: "Pixel Dreamers",
        topic: "Art",
        members: 8_913,
        description: "AI-assisted illustration, from sketches to finished pieces.",
    },
    Group {
        id: "night-owls",
        name: "Night Owls Study Club",
        topic: "Learning",
        members: 5_302,
        description: "Late-night study sessions with Lumina as your tutor.",
    },
    Group {
        id: "beat-lab",
        name: "Beat Lab",
        topic: "Music",
        members: 3_764,
        description: "Share Melody loops and remix each other's tracks.",
    },
    Group {
        id: "mindful-minutes",
        name: "Mindful Minutes",
        topic: "Wellbeing",
        members: 2_118,
        description: "Daily check-ins and gentle conversations with companions.",
    },
];

#[derive(Clone, Debug, Default)]
pub struct GroupsState {
    pub query: String,
    pub joined: Vec<&'static str>,
}

impl GroupsState {
    /// Groups whose name or topic contains the query, case-insensitively.
    pub fn visible(&self) -> Vec<&'static Group> {
        let needle = self.query.trim().to_lowercase();
        GROUPS
            .iter()
            .filter(|g| {
                needle.is_empty() || g.name.to_lowercase().contains(&needle) || g.topic.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn is_joined(&self, id: &str) -> bool {
        self.joined.iter().any(|j| *j == id)
    }

    pub fn toggle_join(&mut self, id: &str) {
        if let Some(pos) = self.joined.iter().position(|j| *j == id) {
            self.joined.remove(pos);
        } else if let Some(group) = GROUPS.iter().find(|g| g.id == id) {
            self.joined.push(group.id);
        }
    }

    /// Listed member count including the local user when joined.
    pub fn member_count(&self, group: &Group) -> u32 {
        group.members + u32::from(self.is_joined(group.id))
    }
}
