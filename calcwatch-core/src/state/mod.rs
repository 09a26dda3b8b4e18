//! Mode state machine
//!
//! Six modes cycled by the mode button. All watch behaviour is a
//! function of the current mode, its resident state and an event.

pub mod events;
pub mod machine;
pub mod modes;

pub use events::Event;
pub use machine::{CasioState, Effect, Effects, Mode};
