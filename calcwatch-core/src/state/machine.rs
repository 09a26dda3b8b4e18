//! State machine definition
//!
//! [`CasioState::process`] applies one event and returns the side
//! effects (tones, contrast changes, backlight arming) for the caller to
//! carry out. Mode changes only ever come from the mode button.

use heapless::Vec;

use crate::config::{Tone, WatchConfig};
use crate::device::{Button, Key, TimeSnapshot};
use crate::time::{datetime_to_epoch, epoch_to_datetime};

use super::events::Event;
use super::modes::{
    AlarmState, CalculatorState, DatabaseState, DualTimeState, HomeState, StopwatchState,
};

/// Watch modes, in mode-button order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Time and date
    Home,
    /// Databank
    Database,
    /// Calculator
    Calculator,
    /// Alarm icons
    Alarm,
    /// Stopwatch
    Stopwatch,
    /// Second time zone
    DualTime,
}

impl Mode {
    /// Mode after a mode-button press
    pub fn next(self) -> Self {
        match self {
            Mode::Home => Mode::Database,
            Mode::Database => Mode::Calculator,
            Mode::Calculator => Mode::Alarm,
            Mode::Alarm => Mode::Stopwatch,
            Mode::Stopwatch => Mode::DualTime,
            Mode::DualTime => Mode::Home,
        }
    }
}

/// Side effect requested by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Sound the buzzer
    Beep(Tone),
    /// Send a new contrast to the panel
    SetContrast(u8),
    /// Start the backlight countdown (ticks)
    ArmBacklight(u16),
}

/// Effects from one event; no event needs more than two
pub type Effects = Vec<Effect, 4>;

/// Root watch state
///
/// Every mode's state stays resident, but only [`CasioState::process`]
/// changes it; everyone else gets read access.
#[derive(Debug, Clone)]
pub struct CasioState {
    mode: Mode,
    config: WatchConfig,
    pub(crate) home: HomeState,
    pub(crate) database: DatabaseState,
    pub(crate) calculator: CalculatorState,
    pub(crate) alarm: AlarmState,
    pub(crate) stopwatch: StopwatchState,
    pub(crate) dual_time: DualTimeState,
}

impl CasioState {
    /// Power-on state: home mode at the configured date-time
    pub fn new(config: WatchConfig) -> Self {
        let epoch = datetime_to_epoch(&config.default_datetime);
        Self {
            mode: Mode::Home,
            home: HomeState::new(
                config.default_datetime,
                epoch_to_datetime(epoch),
                config.language,
                config.contrast,
            ),
            database: DatabaseState::new(),
            calculator: CalculatorState::new(),
            alarm: AlarmState::default(),
            stopwatch: StopwatchState::new(),
            dual_time: DualTimeState::new(
                config.dual_time_label.clone(),
                config.dual_time_offset_s,
                epoch,
            ),
            config,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    pub fn database(&self) -> &DatabaseState {
        &self.database
    }

    pub fn calculator(&self) -> &CalculatorState {
        &self.calculator
    }

    pub fn alarm(&self) -> &AlarmState {
        &self.alarm
    }

    pub fn stopwatch(&self) -> &StopwatchState {
        &self.stopwatch
    }

    pub fn dual_time(&self) -> &DualTimeState {
        &self.dual_time
    }

    /// Epoch matching the configured start date-time
    pub fn seed_epoch(&self) -> u32 {
        datetime_to_epoch(&self.home.set)
    }

    /// Whether high-rate ticks are needed
    ///
    /// Only a running stopwatch and the databank intro animate.
    pub fn wants_fast_tick(&self) -> bool {
        match self.mode {
            Mode::Stopwatch => self.stopwatch.running,
            Mode::Database => self.database.intro_active(),
            _ => false,
        }
    }

    /// Apply one event
    pub fn process(&mut self, event: Event, now: TimeSnapshot) -> Effects {
        let mut effects = Effects::new();

        self.process_global(event, now, &mut effects);

        match self.mode {
            Mode::Home => self.process_home(event, &mut effects),
            Mode::Database => self.process_database(event, &mut effects),
            Mode::Calculator => self.process_calculator(event, &mut effects),
            Mode::Alarm => self.process_alarm(event, &mut effects),
            Mode::Stopwatch => self.process_stopwatch(event, now, &mut effects),
            Mode::DualTime => self.process_dual_time(event, &mut effects),
        }

        effects
    }

    /// Handling shared by every mode
    fn process_global(&mut self, event: Event, now: TimeSnapshot, effects: &mut Effects) {
        match event {
            Event::SecondTick => {
                self.home.now = epoch_to_datetime(now.epoch);
                self.dual_time.update(now.epoch);
            }
            Event::ButtonPressed(Button::Light) if !self.home.backlight_on => {
                self.home.backlight_on = true;
                push(effects, Effect::ArmBacklight(self.config.backlight_ticks));
                push(effects, Effect::SetContrast(self.config.backlight_contrast));
            }
            Event::BacklightExpired => {
                self.home.backlight_on = false;
                push(effects, Effect::SetContrast(self.home.contrast));
            }
            _ => {}
        }

        if let Some(key) = event.pressed_key() {
            push(effects, Effect::Beep(self.config.key_tone(key.index())));
        }
    }

    fn advance_mode(&mut self) {
        self.mode = self.mode.next();
        if self.mode == Mode::Database {
            self.database.start_intro(self.config.database_intro_ticks);
        }
    }

    fn click(&self, effects: &mut Effects) {
        push(effects, Effect::Beep(self.config.click));
    }

    fn process_home(&mut self, event: Event, effects: &mut Effects) {
        match event {
            Event::ButtonPressed(Button::Mode) => self.advance_mode(),
            Event::ButtonPressed(Button::Action) => {
                self.click(effects);
                self.home.use_24h = !self.home.use_24h;
            }
            Event::KeyPressed(Key::A) => self.home.show_dual_time = true,
            Event::KeyPressed(Key::D) => self.home.show_database = true,
            Event::KeyReleased(Key::A) => self.home.show_dual_time = false,
            Event::KeyReleased(Key::D) => self.home.show_database = false,
            _ => {}
        }
    }

    fn process_database(&mut self, event: Event, effects: &mut Effects) {
        match event {
            Event::ButtonPressed(Button::Mode) => self.advance_mode(),
            Event::ButtonPressed(Button::Action) => self.click(effects),
            Event::KeyPressed(key) => self.database.press(key),
            Event::FastTick => self.database.fast_tick(),
            _ => {}
        }
    }

    fn process_calculator(&mut self, event: Event, effects: &mut Effects) {
        match event {
            Event::ButtonPressed(Button::Mode) => self.advance_mode(),
            Event::ButtonPressed(Button::Action) => {
                self.calculator.clear();
                self.click(effects);
            }
            Event::KeyPressed(key) => self.calculator.press(key),
            _ => {}
        }
    }

    fn process_alarm(&mut self, event: Event, effects: &mut Effects) {
        match event {
            Event::ButtonPressed(Button::Mode) => self.advance_mode(),
            Event::ButtonPressed(Button::Action) => self.click(effects),
            Event::KeyPressed(key) => self.alarm.press(key),
            _ => {}
        }
    }

    fn process_stopwatch(&mut self, event: Event, now: TimeSnapshot, effects: &mut Effects) {
        match event {
            Event::ButtonPressed(Button::Mode) => self.advance_mode(),
            Event::ButtonPressed(Button::Split) => {
                if self.stopwatch.split_pressed(now.ticks) {
                    self.click(effects);
                }
            }
            Event::ButtonPressed(Button::Action) => {
                self.click(effects);
                self.stopwatch.start_stop_pressed(now.ticks);
            }
            Event::KeyPressed(Key::A) => {
                self.home.contrast = self.home.contrast.saturating_sub(self.config.contrast_step);
                push(effects, Effect::SetContrast(self.home.contrast));
            }
            Event::KeyPressed(Key::D) => {
                self.home.contrast = self.home.contrast.saturating_add(self.config.contrast_step);
                push(effects, Effect::SetContrast(self.home.contrast));
            }
            _ => {}
        }
    }

    fn process_dual_time(&mut self, event: Event, _effects: &mut Effects) {
        match event {
            Event::ButtonPressed(Button::Mode) => self.advance_mode(),
            Event::KeyPressed(Key::A) => self.dual_time.show_home = true,
            Event::KeyPressed(Key::D) => self.dual_time.show_database = true,
            Event::KeyReleased(Key::A) => self.dual_time.show_home = false,
            Event::KeyReleased(Key::D) => self.dual_time.show_database = false,
            _ => {}
        }
    }
}

impl Default for CasioState {
    fn default() -> Self {
        Self::new(WatchConfig::default())
    }
}

fn push(effects: &mut Effects, effect: Effect) {
    // Capacity exceeds the most effects any single event produces
    let _ = effects.push(effect);
}
