//! Commonly used types for ease of import.

pub use crate::{Battle, BattleEvent, Coordinate, Outcome, PlayerId, Scenario, ShotResult, Verdict};

#[cfg(feature = "std")]
pub use crate::ui::write_transcript;
