//! Board-agnostic core logic for the calculator watch firmware
//!
//! This crate contains all watch behaviour that does not depend on a
//! specific board:
//!
//! - Calendar and duration math
//! - Interrupt-shared device state and its producers
//! - Prioritized event extraction
//! - The six-mode state machine (home, databank, calculator, alarm,
//!   stopwatch, dual time)
//! - Full-frame screen rendering
//! - Default configuration
//! - The [`watch::Watch`] main loop tying it all together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod device;
pub mod state;
pub mod time;
pub mod ui;
pub mod watch;

pub use watch::Watch;
