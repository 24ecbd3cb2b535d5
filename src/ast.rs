//! The play tree consumed by the statistics engine.
//!
//! A [`Play`] is built once by the markup reader and never mutated afterwards.
//! Only structure and counts are kept: line text is discarded at read time.

use serde::Serialize;

/// A whole play: its roster plus the act/scene/speech hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Play {
    /// The play's own title, if the markup carries one.
    pub title: Option<String>,
    /// Primary roster entries followed by grouped entries, in document order.
    pub cast: Vec<String>,
    pub acts: Vec<Act>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Act {
    /// Cosmetic only; an untitled act is valid.
    pub title: Option<String>,
    pub scenes: Vec<Scene>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scene {
    /// Cosmetic only; an untitled scene is valid.
    pub title: Option<String>,
    pub speeches: Vec<Speech>,
}

/// One contiguous block of dialogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Speech {
    /// `None` when the markup gave no usable speaker.
    pub speaker: Option<String>,
    /// Number of line entries; their text is not retained.
    pub lines: usize,
}

impl Play {
    /// Total number of scenes across all acts.
    pub fn scene_count(&self) -> usize {
        self.acts.iter().map(|act| act.scenes.len()).sum()
    }
}

impl Speech {
    pub fn new(speaker: impl Into<String>, lines: usize) -> Self {
        Self {
            speaker: Some(speaker.into()),
            lines,
        }
    }

    /// A speech with no speaker designation.
    pub fn unattributed(lines: usize) -> Self {
        Self {
            speaker: None,
            lines,
        }
    }
}

impl Scene {
    pub fn with_speeches(speeches: Vec<Speech>) -> Self {
        Self {
            title: None,
            speeches,
        }
    }
}

impl Act {
    pub fn with_scenes(scenes: Vec<Scene>) -> Self {
        Self {
            title: None,
            scenes,
        }
    }
}
