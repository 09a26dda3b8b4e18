//! Device state and event extraction
//!
//! Interrupt handlers write raw input and timer state into a shared
//! [`DeviceState`]; the main loop turns changes in that state into one
//! logical [`Event`](crate::state::Event) per call through an
//! [`EventExtractor`].

pub mod extract;
pub mod keypad;
pub mod state;

pub use extract::EventExtractor;
pub use keypad::{Button, Key};
pub use state::{ButtonLines, DeviceState, KeypadMatrix, PinButtons, PinMatrix, TimeSnapshot};
