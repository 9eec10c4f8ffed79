//! Achievements: static definitions and the unlock evaluator

mod checker;
mod definitions;

pub use checker::evaluate;
pub use definitions::{ACHIEVEMENTS, Achievement, AchievementId};
