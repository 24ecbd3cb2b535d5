//! Scene enumeration.
//!
//! Scenes are numbered in document order across the whole play: the counter is
//! never reset when a new act starts. Both the enumerator and the speech
//! aggregator walk the play through [`scene_positions`], so they always agree on
//! which global index belongs to which scene.

use serde::Serialize;

use crate::ast::{Play, Scene};
use crate::errors::FolioResult;
use crate::stats::numeral::position_numeral;

/// A scene's global index and its `act.scene` label, e.g. `"ii.iv"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneLabel {
    pub scene_index: usize,
    pub label: String,
}

/// Where a scene sits in the play.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScenePosition<'a> {
    /// 1-based act number.
    pub act: usize,
    /// 1-based scene number within its act.
    pub scene: usize,
    /// 1-based index across the whole play.
    pub scene_index: usize,
    pub node: &'a Scene,
}

/// Every scene of `play` in document order, with a running global index.
pub(crate) fn scene_positions(play: &Play) -> Vec<ScenePosition<'_>> {
    let mut positions = Vec::with_capacity(play.scene_count());
    let mut scene_index = 0;
    for (act_offset, act) in play.acts.iter().enumerate() {
        for (scene_offset, node) in act.scenes.iter().enumerate() {
            scene_index += 1;
            positions.push(ScenePosition {
                act: act_offset + 1,
                scene: scene_offset + 1,
                scene_index,
                node,
            });
        }
    }
    positions
}

/// Labels every scene of `play` as `<act>.<scene>` in lowercase Roman numerals.
///
/// An act without scenes contributes no labels; a play without acts yields an
/// empty sequence.
///
/// # Errors
///
/// [`crate::FolioError::OutOfRange`] if an act or scene number has no numeral.
pub fn enumerate_scenes(play: &Play) -> FolioResult<Vec<SceneLabel>> {
    scene_positions(play)
        .into_iter()
        .map(|position| {
            let act = position_numeral(position.act)?;
            let scene = position_numeral(position.scene)?;
            Ok(SceneLabel {
                scene_index: position.scene_index,
                label: format!("{act}.{scene}").to_lowercase(),
            })
        })
        .collect()
}
