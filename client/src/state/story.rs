//! Interactive story: a fixed scene graph walked by button clicks.

#[cfg(test)]
#[path = "story_test.rs"]
mod story_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub target: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scene {
    pub id: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    /// Empty for endings.
    pub choices: &'static [Choice],
}

impl Scene {
    pub fn is_ending(&self) -> bool {
        self.choices.is_empty()
    }
}

pub const START_SCENE: &str = "shore";

pub const SCENES: &[Scene] = &[
    Scene {
        id: "shore",
        title: "The Silent Lighthouse",
        text: "You wake on a cold beach. Up the cliff, a lighthouse blinks a pattern that looks almost like a message.",
        choices: &[
            Choice { label: "Climb toward the lighthouse", target: "cliff" },
            Choice { label: "Follow the footprints along the shore", target: "cove" },
        ],
    },
    Scene {
        id: "cliff",
        title: "The Cliff Path",
        text: "The path is narrow and slick with spray. Halfway up, a rope ladder dangles beside a locked gate.",
        choices: &[
            Choice { label: "Take the rope ladder", target: "lamp_room" },
            Choice { label: "Search for the gate key", target: "cove" },
        ],
    },
    Scene {
        id: "cove",
        title: "The Hidden Cove",
        text: "The footprints end at a rowing boat. Inside is a brass key and a logbook with one page torn out.",
        choices: &[
            Choice { label: "Pocket the key and head up the cliff", target: "gate" },
            Choice { label: "Row out toward the blinking light", target: "adrift" },
        ],
    },
    Scene {
        id: "gate",
        title: "The Keeper's Gate",
        text: "The key turns. Behind the gate a spiral stair rises into warm yellow light.",
        choices: &[Choice { label: "Climb the stairs", target: "lamp_room" }],
    },
    Scene {
        id: "lamp_room",
        title: "The Lamp Room",
        text: "An old keeper looks up from a radio. \"You read the signal,\" she says. \"Will you help me answer it?\"",
        choices: &[
            Choice { label: "Send the reply", target: "rescue" },
            Choice { label: "Ask who is on the other end", target: "secret" },
        ],
    },
    Scene {
        id: "rescue",
        title: "Safe Harbour",
        text: "Lights answer from the sea. By dawn a ship has come for everyone stranded on the island. The end.",
        choices: &[],
    },
    Scene {
        id: "secret",
        title: "The Keeper's Secret",
        text: "She smiles and hands you the headset. The voice on the radio is your own. The end?",
        choices: &[],
    },
    Scene {
        id: "adrift",
        title: "Adrift",
        text: "The current pulls you past the light and into fog. Somewhere behind you, the signal stops. The end.",
        choices: &[],
    },
];

pub fn scene(id: &str) -> Option<&'static Scene> {
    SCENES.iter().find(|s| s.id == id)
}

/// Playthrough position plus the scenes visited so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoryState {
    pub current: &'static str,
    pub path: Vec<&'static str>,
}

impl Default for StoryState {
    fn default() -> Self {
        Self { current: START_SCENE, path: Vec::new() }
    }
}

impl StoryState {
    pub fn current_scene(&self) -> Option<&'static Scene> {
        scene(self.current)
    }

    /// Follow choice `index` of the current scene. Out-of-range choices and
    /// targets missing from the graph are ignored.
    pub fn choose(&mut self, index: usize) -> bool {
        let Some(choice) = self.current_scene().and_then(|s| s.choices.get(index)) else {
            return false;
        };
        let Some(next) = scene(choice.target) else {
            return false;
        };
        self.path.push(self.current);
        self.current = next.id;
        true
    }

    pub fn restart(&mut self) {
        *self = Self::default();
    }

    pub fn steps_taken(&self) -> usize {
        self.path.len()
    }
}
