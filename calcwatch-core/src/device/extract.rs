//! Prioritized event extraction
//!
//! The extractor keeps a private copy of every watched field. Each poll
//! walks [`WATCHERS`] in priority order; the first field that differs
//! from its copy decides the event, and every other difference waits for
//! a later poll. Some changes are absorbed without an event (backlight
//! countdown steps, high-rate ticks while disabled); the copy is updated
//! all the same and the walk carries on.

use crate::state::Event;

use super::keypad::{Button, Key};
use super::state::DeviceState;

/// One watched field
struct Watcher {
    /// Read the field's current value
    observe: fn(&DeviceState) -> u32,
    /// Event for a change from `previous` to `current`, if any
    emit: fn(previous: u32, current: u32, state: &DeviceState) -> Option<Event>,
}

/// Watched fields, highest priority first
const WATCHERS: [Watcher; 5] = [
    Watcher {
        observe: observe_buttons,
        emit: button_event,
    },
    Watcher {
        observe: observe_keypad,
        emit: key_event,
    },
    Watcher {
        observe: observe_backlight,
        emit: backlight_event,
    },
    Watcher {
        observe: observe_epoch,
        emit: second_event,
    },
    Watcher {
        observe: observe_fast_ticks,
        emit: fast_tick_event,
    },
];

fn observe_buttons(state: &DeviceState) -> u32 {
    u32::from(state.buttons())
}

fn observe_keypad(state: &DeviceState) -> u32 {
    u32::from(state.keypad())
}

fn observe_backlight(state: &DeviceState) -> u32 {
    u32::from(state.backlight())
}

fn observe_epoch(state: &DeviceState) -> u32 {
    state.epoch()
}

fn observe_fast_ticks(state: &DeviceState) -> u32 {
    state.fast_ticks()
}

/// Press of the first new bit, or release of the first old one
fn button_event(previous: u32, current: u32, _: &DeviceState) -> Option<Event> {
    if current == 0 {
        Button::first_in(previous as u8).map(Event::ButtonReleased)
    } else {
        Button::first_in(current as u8).map(Event::ButtonPressed)
    }
}

/// Press of the new code, or release of the previous one
fn key_event(previous: u32, current: u32, _: &DeviceState) -> Option<Event> {
    if current == 0 {
        Key::from_code(previous as u8).map(Event::KeyReleased)
    } else {
        Key::from_code(current as u8).map(Event::KeyPressed)
    }
}

fn backlight_event(_: u32, current: u32, _: &DeviceState) -> Option<Event> {
    (current == 0).then_some(Event::BacklightExpired)
}

fn second_event(_: u32, _: u32, _: &DeviceState) -> Option<Event> {
    Some(Event::SecondTick)
}

fn fast_tick_event(_: u32, _: u32, state: &DeviceState) -> Option<Event> {
    state.fast_tick_enabled().then_some(Event::FastTick)
}

/// Turns device state changes into events
pub struct EventExtractor {
    /// Last observed value of each watcher
    history: [u32; WATCHERS.len()],
}

impl Default for EventExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EventExtractor {
    /// Start with every watched field assumed zero
    pub const fn new() -> Self {
        Self {
            history: [0; WATCHERS.len()],
        }
    }

    /// Check once for a pending event
    pub fn poll(&mut self, state: &DeviceState) -> Option<Event> {
        for (watcher, seen) in WATCHERS.iter().zip(self.history.iter_mut()) {
            let current = (watcher.observe)(state);
            if current == *seen {
                continue;
            }
            let previous = core::mem::replace(seen, current);
            if let Some(event) = (watcher.emit)(previous, current, state) {
                return Some(event);
            }
        }
        None
    }

    /// Wait for the next event
    pub fn next_event(&mut self, state: &DeviceState) -> Event {
        loop {
            if let Some(event) = self.poll(state) {
                return event;
            }
            core::hint::spin_loop();
        }
    }
}
