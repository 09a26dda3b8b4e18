//! Calcwatch Hardware Abstraction Layer
//!
//! This crate defines the traits the watch core uses to reach its
//! external collaborators. Board support code implements them on top of
//! the chip HAL; the core and display crates only see these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  calcwatch-core (modes, events, clock)  │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ calcwatch-    │       │ calcwatch-hal │
//! │ display       │──────▶│ (this crate)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Button lines and keypad matrix
//! - [`i2c::I2cBus`] - Display controller bus
//! - [`audio::Buzzer`] - Piezo key clicks

#![no_std]
#![deny(unsafe_code)]

pub mod audio;
pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use audio::Buzzer;
pub use gpio::{InputPin, OutputPin};
pub use i2c::{I2cBus, I2cError};
