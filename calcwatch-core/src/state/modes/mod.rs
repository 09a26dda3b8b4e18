//! Per-mode state
//!
//! Every mode's state stays resident for the life of the watch; only the
//! active mode's state is touched by event handling.

pub mod alarm;
pub mod calculator;
pub mod database;
pub mod dual_time;
pub mod home;
pub mod stopwatch;

pub use alarm::AlarmState;
pub use calculator::{CalculatorState, Operator};
pub use database::DatabaseState;
pub use dual_time::DualTimeState;
pub use home::HomeState;
pub use stopwatch::StopwatchState;
