//! Character ranking by total lines.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::stats::speeches::SpeechRecord;

/// A character and every line they speak in the play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterTotal {
    pub name: String,
    pub total_lines: usize,
}

impl CharacterTotal {
    pub fn new(name: impl Into<String>, total_lines: usize) -> Self {
        Self {
            name: name.into(),
            total_lines,
        }
    }
}

/// Ranks characters by total lines, descending.
///
/// Totals accumulate in the order speakers are first met in `records`; the sort
/// is stable, so equal totals keep that order. Roster names that never speak
/// are appended afterwards with a zero total, in roster order.
pub fn rank_characters(records: &[SpeechRecord], cast: &[String]) -> Vec<CharacterTotal> {
    let mut ranking: Vec<CharacterTotal> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match slots.get(record.speaker.as_str()) {
            Some(&slot) => ranking[slot].total_lines += record.lines,
            None => {
                slots.insert(&record.speaker, ranking.len());
                ranking.push(CharacterTotal::new(&record.speaker, record.lines));
            }
        }
    }
    ranking.sort_by(|a, b| b.total_lines.cmp(&a.total_lines));

    let mut seen: HashSet<&str> = slots.into_keys().collect();
    for name in cast {
        if seen.insert(name) {
            ranking.push(CharacterTotal::new(name, 0));
        }
    }
    ranking
}
