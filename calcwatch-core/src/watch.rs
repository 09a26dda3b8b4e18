//! Main loop
//!
//! The [`Watch`] owns everything the main loop touches: the event
//! extractor, the mode state, the frame and the output collaborators.
//! Interrupt handlers only ever see the shared [`DeviceState`].
//!
//! Each step waits for one event, lets the state machine process it,
//! carries out the requested effects and pushes a freshly drawn frame.

use calcwatch_display::{DisplayError, DisplayTransport, Framebuffer};
use calcwatch_hal::Buzzer;

use crate::config::WatchConfig;
use crate::device::{DeviceState, EventExtractor};
use crate::state::{CasioState, Effect, Event};
use crate::ui;

/// Watch runner
pub struct Watch<'d, D, B> {
    device: &'d DeviceState,
    extractor: EventExtractor,
    state: CasioState,
    frame: Framebuffer,
    display: D,
    buzzer: B,
}

impl<'d, D: DisplayTransport, B: Buzzer> Watch<'d, D, B> {
    pub fn new(device: &'d DeviceState, display: D, buzzer: B, config: WatchConfig) -> Self {
        Self {
            device,
            extractor: EventExtractor::new(),
            state: CasioState::new(config),
            frame: Framebuffer::new(),
            display,
            buzzer,
        }
    }

    /// Bring up the display and seed the clock
    ///
    /// An error here means the panel never came up; the caller is
    /// expected to signal distress and halt.
    pub fn start(&mut self) -> Result<(), DisplayError> {
        self.display.init()?;
        self.display.set_window()?;

        #[cfg(feature = "defmt")]
        defmt::info!("Display initialized");

        self.device.seed_epoch(self.state.seed_epoch());

        if let Err(_err) = self.display.clear() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Display clear failed: {}", _err.code());
        }
        Ok(())
    }

    /// Wait for the next event, handle it and redraw
    pub fn step(&mut self) -> Event {
        let event = self.extractor.next_event(self.device);
        self.handle(event);
        event
    }

    /// Run forever
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Process one event, apply its effects and redraw
    pub fn handle(&mut self, event: Event) {
        #[cfg(feature = "defmt")]
        defmt::trace!("Event: {}", event);

        let effects = self.state.process(event, self.device.snapshot());
        for effect in effects {
            self.apply(effect);
        }
        self.device
            .set_fast_tick_enabled(self.state.wants_fast_tick());

        self.redraw();
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Beep(tone) => self.buzzer.beep(tone.frequency_hz, tone.duration_ms),
            Effect::SetContrast(value) => {
                if let Err(_err) = self.display.set_contrast(value) {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Contrast update failed: {}", _err.code());
                }
            }
            Effect::ArmBacklight(ticks) => self.device.arm_backlight(ticks),
        }
    }

    /// Draw the current state and push it
    ///
    /// A failed push is logged and dropped; the next event redraws.
    pub fn redraw(&mut self) {
        ui::render(&mut self.frame, &self.state, self.device.snapshot());
        if let Err(_err) = self.display.push_frame(&self.frame) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Display update failed: {}", _err.code());
        }
    }

    pub fn state(&self) -> &CasioState {
        &self.state
    }

    /// Last rendered frame
    pub fn frame(&self) -> &Framebuffer {
        &self.frame
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn buzzer(&self) -> &B {
        &self.buzzer
    }
}
