//! Speech aggregation.
//!
//! Speeches are tallied per speaker within each scene, producing one
//! [`SpeechRecord`] per distinct `(speaker, scene)` pair.

use std::collections::HashMap;

use serde::Serialize;

use crate::ast::{Play, Scene};
use crate::errors::{FolioError, FolioResult};
use crate::stats::scenes::scene_positions;

/// Lines spoken by one speaker in one scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeechRecord {
    pub speaker: String,
    pub lines: usize,
    pub scene_index: usize,
}

impl SpeechRecord {
    pub fn new(speaker: impl Into<String>, lines: usize, scene_index: usize) -> Self {
        Self {
            speaker: speaker.into(),
            lines,
            scene_index,
        }
    }
}

/// Aggregates every speech of `play` into per-scene, per-speaker records.
///
/// Records are produced scene by scene in ascending scene index, then the
/// whole sequence is stably sorted by speaker name, descending. That order is
/// the baseline the character ranking breaks ties with.
///
/// # Errors
///
/// [`FolioError::MalformedSpeech`] for the first speech without a speaker. No
/// partial result is returned.
pub fn aggregate_speeches(play: &Play) -> FolioResult<Vec<SpeechRecord>> {
    let mut records = Vec::new();
    for position in scene_positions(play) {
        records.extend(tally_scene(position.node, position.scene_index)?);
    }
    records.sort_by(|a, b| b.speaker.cmp(&a.speaker));
    Ok(records)
}

/// Sums line counts per speaker, keeping speakers in first-appearance order.
fn tally_scene(scene: &Scene, scene_index: usize) -> FolioResult<Vec<SpeechRecord>> {
    let mut tally: Vec<SpeechRecord> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for speech in &scene.speeches {
        let speaker = speech
            .speaker
            .as_deref()
            .ok_or(FolioError::MalformedSpeech { scene_index })?;
        match slots.get(speaker) {
            Some(&slot) => tally[slot].lines += speech.lines,
            None => {
                slots.insert(speaker, tally.len());
                tally.push(SpeechRecord::new(speaker, speech.lines, scene_index));
            }
        }
    }
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Speech;

    #[test]
    fn test_tally_keeps_first_appearance_order() {
        let scene = Scene::with_speeches(vec![
            Speech::new("B", 1),
            Speech::new("A", 2),
            Speech::new("B", 4),
        ]);
        let tally = tally_scene(&scene, 7).unwrap();
        assert_eq!(
            tally,
            vec![SpeechRecord::new("B", 5, 7), SpeechRecord::new("A", 2, 7)]
        );
    }
}
