//! Grid shaping: the character by scene matrix every renderer reads from.

use std::collections::HashMap;

use serde::Serialize;

use crate::stats::ranking::CharacterTotal;
use crate::stats::scenes::SceneLabel;
use crate::stats::speeches::SpeechRecord;

/// Header text of the trailing totals column.
pub const TOTAL_COLUMN: &str = "TOTAL LINES";

/// One ranked character's lines per scene.
///
/// `cells[i]` belongs to the i-th scene in enumeration order and is `None` when
/// the character has no recorded lines in that scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub name: String,
    pub cells: Vec<Option<usize>>,
    pub total_lines: usize,
}

/// Rows in ranking order, columns in scene enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsGrid {
    pub scenes: Vec<SceneLabel>,
    pub rows: Vec<GridRow>,
}

/// Joins scene labels, the ranking and the speech records into a [`StatsGrid`].
///
/// Pure: the same inputs always give the same grid.
pub fn shape_grid(
    scenes: &[SceneLabel],
    ranking: &[CharacterTotal],
    records: &[SpeechRecord],
) -> StatsGrid {
    let lookup: HashMap<(&str, usize), usize> = records
        .iter()
        .map(|r| ((r.speaker.as_str(), r.scene_index), r.lines))
        .collect();

    let rows = ranking
        .iter()
        .map(|character| GridRow {
            name: character.name.clone(),
            cells: scenes
                .iter()
                .map(|scene| {
                    lookup
                        .get(&(character.name.as_str(), scene.scene_index))
                        .copied()
                })
                .collect(),
            total_lines: character.total_lines,
        })
        .collect();

    StatsGrid {
        scenes: scenes.to_vec(),
        rows,
    }
}

impl GridRow {
    /// Cells with absent entries read as zero.
    pub fn counts(&self) -> Vec<usize> {
        self.cells.iter().map(|cell| cell.unwrap_or(0)).collect()
    }

    /// True when the character never speaks.
    pub fn is_silent(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

impl StatsGrid {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.scenes.iter().map(|s| s.label.as_str()).collect()
    }

    /// Export header: an empty name cell, the scene labels, then the totals column.
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(self.scenes.len() + 2);
        header.push(String::new());
        header.extend(self.scenes.iter().map(|s| s.label.clone()));
        header.push(TOTAL_COLUMN.to_string());
        header
    }

    /// Export rows: name, one cell per scene (absent cells left empty), total.
    pub fn export_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let mut record = Vec::with_capacity(row.cells.len() + 2);
                record.push(row.name.clone());
                record.extend(
                    row.cells
                        .iter()
                        .map(|cell| cell.map(|n| n.to_string()).unwrap_or_default()),
                );
                record.push(row.total_lines.to_string());
                record
            })
            .collect()
    }

    /// A copy without characters that never speak.
    pub fn without_silent(&self) -> Self {
        Self {
            scenes: self.scenes.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| !row.is_silent())
                .cloned()
                .collect(),
        }
    }
}
