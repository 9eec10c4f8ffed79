//! GalaxyCode - learning progress and page navigation core
//!
//! GalaxyCode tracks a learner's progress through a catalog of small coding
//! challenges. Completions, streaks and achievements are kept in a persistent
//! [`progress::ProgressRecord`]; a [`router::Router`] keeps exactly one page of
//! the application active at a time.
//!
//! ## Layout
//!
//! - [`store`]: JSON values in a SQLite-backed key-value store
//! - [`catalog`]: the static challenge table
//! - [`progress`]: the progress model, streaks, statistics and achievements
//! - [`router`]: page navigation
//! - [`grader`]: pattern-based submission checks
//! - [`playground`]: draft and saved snippets of the code playground
//! - [`session`]: the application context tying the above together

pub mod catalog;
pub mod config;
pub mod convert;
pub mod grader;
pub mod playground;
pub mod progress;
pub mod router;
pub mod session;
pub mod store;

pub use session::Session;
