//! AI creation studio view-model.
//!
//! DESIGN
//! ======
//! Generation is a fake progress bar: `start` arms it and opens a new run, the
//! page calls `tick(run)` every `PROGRESS_TICK_MS`, and once progress reaches
//! 100 the status flips to `Done` with a placeholder result. `reset` also
//! opens a new run, so a loop armed for an earlier run stops on its next
//! tick. No model is ever invoked.

#[cfg(test)]
#[path = "creation_test.rs"]
mod creation_test;

pub const PROGRESS_STEP: u8 = 10;
pub const PROGRESS_TICK_MS: u64 = 300;

/// A model offered in the studio picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreationModel {
    pub id: &'static str,
    pub name: &'static str,
    pub medium: &'static str,
    pub description: &'static str,
}

pub const MODELS: &[CreationModel] = &[
    CreationModel {
        id: "canvas-xl",
        name: "Canvas XL",
        medium: "Image",
        description: "Detailed illustrations and concept art.",
    },
    CreationModel {
        id: "storyteller",
        name: "Storyteller",
        medium: "Text",
        description: "Short stories, captions and poems.",
    },
    CreationModel {
        id: "melody",
        name: "Melody",
        medium: "Music",
        description: "Thirty-second loops in any mood.",
    },
    CreationModel {
        id: "motion",
        name: "Motion",
        medium: "Video",
        description: "Looping clips from a single prompt.",
    },
];

pub fn find_model(id: &str) -> Option<&'static CreationModel> {
    MODELS.iter().find(|m| m.id == id)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CreationStatus {
    #[default]
    Idle,
    Generating,
    Done(String),
}

#[derive(Clone, Debug, Default)]
pub struct CreationState {
    pub selected: Option<&'static CreationModel>,
    pub prompt: String,
    pub progress: u8,
    pub status: CreationStatus,
    run: u32,
}

impl CreationState {
    /// Select a model by id. Unknown ids leave the selection unchanged.
    pub fn select_model(&mut self, id: &str) -> bool {
        match find_model(id) {
            Some(model) => {
                self.selected = Some(model);
                true
            }
            None => false,
        }
    }

    pub fn is_generating(&self) -> bool {
        self.status == CreationStatus::Generating
    }

    /// Generate is enabled once a model is picked and the prompt is not blank.
    pub fn can_generate(&self) -> bool {
        self.selected.is_some() && !self.prompt.trim().is_empty() && !self.is_generating()
    }

    /// The current run. A progress loop must pass it back to `tick`.
    pub fn run(&self) -> u32 {
        self.run
    }

    pub fn start(&mut self) -> bool {
        if !self.can_generate() {
            return false;
        }
        self.run = self.run.wrapping_add(1);
        self.progress = 0;
        self.status = CreationStatus::Generating;
        true
    }

    /// Advance progress one step for `run`. Returns `true` while more ticks
    /// are needed; a stale run gets `false` and changes nothing.
    pub fn tick(&mut self, run: u32) -> bool {
        if !self.is_generating() || run != self.run {
            return false;
        }
        self.progress = self.progress.saturating_add(PROGRESS_STEP).min(100);
        if self.progress < 100 {
            return true;
        }
        let name = self.selected.map_or("Unknown", |m| m.name);
        self.status = CreationStatus::Done(placeholder_result(name, self.prompt.trim()));
        false
    }

    /// Return to idle, keeping the chosen model.
    pub fn reset(&mut self) {
        self.run = self.run.wrapping_add(1);
        self.prompt.clear();
        self.progress = 0;
        self.status = CreationStatus::Idle;
    }
}

pub fn placeholder_result(model_name: &str, prompt: &str) -> String {
    format!("{model_name} finished your creation for \"{prompt}\". Preview rendering is coming soon.")
}
