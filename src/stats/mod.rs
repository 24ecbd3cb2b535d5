//! # Play Statistics
//!
//! The four derivations the engine composes, leaves first:
//!
//! - **Scenes**: global scene numbering and `act.scene` labels ([`scenes`])
//! - **Speeches**: per-scene, per-speaker line tallies ([`speeches`])
//! - **Ranking**: characters ordered by total lines ([`ranking`])
//! - **Grid**: the character by scene matrix ([`grid`])
//!
//! Each stage is a pure function from immutable inputs to a new collection.

pub mod grid;
pub mod numeral;
pub mod ranking;
pub mod scenes;
pub mod speeches;

pub use grid::{shape_grid, GridRow, StatsGrid, TOTAL_COLUMN};
pub use numeral::to_roman;
pub use ranking::{rank_characters, CharacterTotal};
pub use scenes::{enumerate_scenes, SceneLabel};
pub use speeches::{aggregate_speeches, SpeechRecord};
