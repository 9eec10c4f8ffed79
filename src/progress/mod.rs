//! Learning progress: record, persistence, streaks, achievements and statistics
//!
//! # Usage
//!
//! ```ignore
//! let mut progress = ProgressModel::load(store, Arc::new(SystemClock), ProgressOptions::default());
//! let outcome = progress.record_completion("js-basics", true)?;
//! let stats = progress.statistics();
//! ```

pub mod achievements;
mod clock;
mod export;
mod model;
mod record;
mod stats;
mod streaks;
mod timestamp;

pub use clock::{Clock, FixedClock, SystemClock};
pub use export::{EXPORT_FILE_NAME, ExportDocument};
pub use model::{
    CompletionOutcome, PROGRESS_KEY, ProgressError, ProgressEvent, ProgressModel, ProgressOptions,
};
pub use record::{CompletionEntry, ProgressRecord};
pub use stats::{CategoryProgress, ProgressStats, percent};
pub use streaks::{StreakUpdate, advance_streak, current_streak, is_active, relative_day};
pub use timestamp::parse_timestamp;
