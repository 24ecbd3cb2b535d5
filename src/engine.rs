use std::collections::HashSet;

use serde::Serialize;

use crate::ast::Play;
use crate::errors::FolioResult;
use crate::stats::{
    aggregate_speeches, enumerate_scenes, rank_characters, shape_grid, CharacterTotal,
    SceneLabel, SpeechRecord, StatsGrid,
};
use crate::syntax::parse_play;

// ============================================================================
// STATISTICS PIPELINE
// ============================================================================

/// Every derived view of one play, computed in a single pass.
///
/// Built fresh per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayStats {
    pub title: Option<String>,
    pub scenes: Vec<SceneLabel>,
    pub records: Vec<SpeechRecord>,
    pub ranking: Vec<CharacterTotal>,
    pub grid: StatsGrid,
}

impl PlayStats {
    /// Runs the scene enumerator, speech aggregator, character ranker and grid
    /// shaper over `play`.
    ///
    /// # Errors
    ///
    /// The first failure of any stage, unchanged.
    pub fn compute(play: &Play) -> FolioResult<Self> {
        let scenes = enumerate_scenes(play)?;
        tracing::debug!(scenes = scenes.len(), "enumerated scenes");

        let records = aggregate_speeches(play)?;
        tracing::debug!(records = records.len(), "aggregated speeches");

        let ranking = rank_characters(&records, &play.cast);
        tracing::debug!(characters = ranking.len(), "ranked characters");

        let grid = shape_grid(&scenes, &ranking, &records);

        Ok(Self {
            title: play.title.clone(),
            scenes,
            records,
            ranking,
            grid,
        })
    }

    /// Parses `source` and computes its statistics.
    pub fn from_source(source: &str, name: &str) -> FolioResult<Self> {
        let play = parse_play(source, name)?;
        Self::compute(&play)
    }

    // ------------------------------------------------------------------------
    // Output surface
    // ------------------------------------------------------------------------

    /// `(name, total_lines)` pairs in ranked order.
    pub fn totals(&self) -> Vec<(&str, usize)> {
        self.ranking
            .iter()
            .map(|c| (c.name.as_str(), c.total_lines))
            .collect()
    }

    /// One series per ranked character over the scene axis.
    pub fn chart(&self) -> ChartData {
        ChartData {
            title: self.title.clone(),
            labels: self.scenes.iter().map(|s| s.label.clone()).collect(),
            series: self
                .grid
                .rows
                .iter()
                .map(|row| ChartSeries {
                    name: row.name.clone(),
                    points: row.counts(),
                })
                .collect(),
            y_max: round_up_to_hundred(self.largest_scene_count()),
        }
    }

    /// The largest single per-scene line count, or 0 for a play with no speech.
    pub fn largest_scene_count(&self) -> usize {
        self.records.iter().map(|r| r.lines).max().unwrap_or(0)
    }

    /// Same statistics with characters who never speak dropped from the
    /// ranking and the grid.
    pub fn speakers_only(&self) -> Self {
        let speakers: HashSet<&str> = self.records.iter().map(|r| r.speaker.as_str()).collect();
        let grid = self.grid.without_silent();
        let ranking = self
            .ranking
            .iter()
            .filter(|c| speakers.contains(c.name.as_str()))
            .cloned()
            .collect();
        Self {
            title: self.title.clone(),
            scenes: self.scenes.clone(),
            records: self.records.clone(),
            ranking,
            grid,
        }
    }
}

// ============================================================================
// CHART DATA
// ============================================================================

/// Line counts per scene for one character; absent scenes are 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<usize>,
}

/// Everything a line chart renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub title: Option<String>,
    /// X axis, in scene enumeration order.
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    /// Y axis ceiling: the largest scene count rounded up to a hundred.
    pub y_max: usize,
}

fn round_up_to_hundred(n: usize) -> usize {
    n.div_ceil(100) * 100
}
