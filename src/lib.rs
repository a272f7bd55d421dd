//! fitpath - weekly workout plan generator and progress tracker
//!
//! A short onboarding profile turns into a fixed 7-day plan of rest and
//! workout days; progress through the week is stored locally.

pub mod catalog;
pub mod coach;
pub mod db;
pub mod export;
pub mod profile;
pub mod progress;
pub mod routine;
pub mod tui;

pub use db::Database;
pub use profile::UserProfile;
pub use progress::Progress;
pub use routine::{generate, DayRoutine, Schedule};
