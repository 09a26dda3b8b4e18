//! Interrupt-shared device state
//!
//! Every field is a lock-free scalar cell. Apart from the keypad code
//! (latched by the column interrupt, cleared by the timer) and the
//! backlight countdown (armed by the main loop, counted down by the
//! timer), each field has exactly one writer. The main loop only reads,
//! through the [`EventExtractor`](super::EventExtractor).

use calcwatch_hal::{InputPin, OutputPin};
use portable_atomic::{AtomicBool, AtomicU16, AtomicU32, AtomicU8, Ordering};

use super::keypad::Button;

/// Timer ticks per second
pub const TICKS_PER_SECOND: u8 = 100;
/// Timer ticks per high-rate tick
pub const TICKS_PER_FAST_TICK: u8 = 15;
/// Keypad rows
pub const KEYPAD_ROWS: u8 = 4;

/// Keypad matrix as seen by the timer interrupt
pub trait KeypadMatrix {
    /// Drive `row` (0-3) and release the other rows
    fn drive_row(&mut self, row: u8);

    /// Whether column 1-4 currently reads high
    fn column_is_high(&self, column: u8) -> bool;
}

/// Side button lines as seen by the timer interrupt
pub trait ButtonLines {
    /// Whether the button's line still reads pressed
    fn is_held(&self, button: Button) -> bool;
}

/// Keypad matrix over four row outputs and four column inputs
pub struct PinMatrix<R, C> {
    rows: [R; 4],
    columns: [C; 4],
}

impl<R: OutputPin, C: InputPin> PinMatrix<R, C> {
    pub fn new(rows: [R; 4], columns: [C; 4]) -> Self {
        Self { rows, columns }
    }
}

impl<R: OutputPin, C: InputPin> KeypadMatrix for PinMatrix<R, C> {
    fn drive_row(&mut self, row: u8) {
        for (i, pin) in self.rows.iter_mut().enumerate() {
            pin.set_state(i == row as usize);
        }
    }

    fn column_is_high(&self, column: u8) -> bool {
        (column as usize)
            .checked_sub(1)
            .and_then(|i| self.columns.get(i))
            .is_some_and(|pin| pin.is_high())
    }
}

/// Side buttons over four input lines, in [`Button::ALL`] order
pub struct PinButtons<P> {
    lines: [P; 4],
}

impl<P: InputPin> PinButtons<P> {
    pub fn new(lines: [P; 4]) -> Self {
        Self { lines }
    }
}

impl<P: InputPin> ButtonLines for PinButtons<P> {
    fn is_held(&self, button: Button) -> bool {
        self.lines[button as usize].is_high()
    }
}

/// Timer readings taken together by the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeSnapshot {
    /// Hundredths of a second since start
    pub ticks: u32,
    /// Seconds since 1970
    pub epoch: u32,
}

/// State shared between interrupt producers and the main loop
pub struct DeviceState {
    /// Hundredths of a second since start
    clock: AtomicU32,
    /// Seconds since 1970
    epoch: AtomicU32,
    /// Held side button mask
    buttons: AtomicU8,
    /// Latched keypad code, 0 = none
    keypad: AtomicU8,
    /// Keypad row being driven
    scan_row: AtomicU8,
    /// Ticks into the current second
    sub_second: AtomicU8,
    /// Ticks into the current high-rate period
    sub_fast: AtomicU8,
    /// High-rate periods elapsed
    fast_ticks: AtomicU32,
    /// Backlight countdown in ticks
    backlight: AtomicU16,
    /// Whether high-rate ticks reach the state machine
    fast_tick_enabled: AtomicBool,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceState {
    pub const fn new() -> Self {
        Self {
            clock: AtomicU32::new(0),
            epoch: AtomicU32::new(0),
            buttons: AtomicU8::new(0),
            keypad: AtomicU8::new(0),
            scan_row: AtomicU8::new(0),
            sub_second: AtomicU8::new(0),
            sub_fast: AtomicU8::new(0),
            fast_ticks: AtomicU32::new(0),
            backlight: AtomicU16::new(0),
            fast_tick_enabled: AtomicBool::new(false),
        }
    }

    // Producers

    /// Rising edge on a side button line
    pub fn button_edge(&self, button: Button) {
        self.buttons.store(button.mask(), Ordering::Relaxed);
    }

    /// Rising edge on keypad column 1-4 while the current row is driven
    pub fn keypad_column_edge(&self, column: u8) {
        let row = self.scan_row.load(Ordering::Relaxed);
        self.keypad.store(row * 10 + column, Ordering::Relaxed);
    }

    /// 100 Hz timer interrupt
    ///
    /// Advances the counters, counts the backlight down, checks whether
    /// the latched key and held button are still down and steps the
    /// keypad scan. While a key is latched the scan stays on its row.
    pub fn timer_tick<M: KeypadMatrix, B: ButtonLines>(&self, matrix: &mut M, buttons: &B) {
        self.clock.fetch_add(1, Ordering::Relaxed);

        let sub = self.sub_second.load(Ordering::Relaxed) + 1;
        if sub >= TICKS_PER_SECOND {
            self.sub_second.store(0, Ordering::Relaxed);
            self.epoch.fetch_add(1, Ordering::Relaxed);
        } else {
            self.sub_second.store(sub, Ordering::Relaxed);
        }

        let sub = self.sub_fast.load(Ordering::Relaxed) + 1;
        if sub >= TICKS_PER_FAST_TICK {
            self.sub_fast.store(0, Ordering::Relaxed);
            self.fast_ticks.fetch_add(1, Ordering::Relaxed);
        } else {
            self.sub_fast.store(sub, Ordering::Relaxed);
        }

        let _ = self
            .backlight
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1));

        let code = self.keypad.load(Ordering::Relaxed);
        if code != 0 {
            if matrix.column_is_high(code % 10) {
                return;
            }
            self.keypad.store(0, Ordering::Relaxed);
        }

        if let Some(button) = Button::first_in(self.buttons.load(Ordering::Relaxed)) {
            if !buttons.is_held(button) {
                self.buttons.store(0, Ordering::Relaxed);
            }
        }

        let row = (self.scan_row.load(Ordering::Relaxed) + 1) % KEYPAD_ROWS;
        self.scan_row.store(row, Ordering::Relaxed);
        matrix.drive_row(row);
    }

    // Main loop writers

    /// Seed the epoch at startup
    pub fn seed_epoch(&self, epoch: u32) {
        self.epoch.store(epoch, Ordering::Relaxed);
    }

    /// Start the backlight countdown
    pub fn arm_backlight(&self, ticks: u16) {
        self.backlight.store(ticks, Ordering::Relaxed);
    }

    /// Let high-rate ticks through (or not)
    pub fn set_fast_tick_enabled(&self, enabled: bool) {
        self.fast_tick_enabled.store(enabled, Ordering::Relaxed);
    }

    // Readers

    pub fn clock(&self) -> u32 {
        self.clock.load(Ordering::Relaxed)
    }

    pub fn epoch(&self) -> u32 {
        self.epoch.load(Ordering::Relaxed)
    }

    pub fn buttons(&self) -> u8 {
        self.buttons.load(Ordering::Relaxed)
    }

    pub fn keypad(&self) -> u8 {
        self.keypad.load(Ordering::Relaxed)
    }

    pub fn scan_row(&self) -> u8 {
        self.scan_row.load(Ordering::Relaxed)
    }

    pub fn fast_ticks(&self) -> u32 {
        self.fast_ticks.load(Ordering::Relaxed)
    }

    pub fn backlight(&self) -> u16 {
        self.backlight.load(Ordering::Relaxed)
    }

    pub fn fast_tick_enabled(&self) -> bool {
        self.fast_tick_enabled.load(Ordering::Relaxed)
    }

    /// Read tick counter and epoch
    ///
    /// The two reads are not atomic as a pair; callers only use them
    /// for display and stopwatch snapshots.
    pub fn snapshot(&self) -> TimeSnapshot {
        TimeSnapshot {
            ticks: self.clock(),
            epoch: self.epoch(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Keypad with one column optionally held
    #[derive(Default)]
    pub(crate) struct MockMatrix {
        pub driven: Option<u8>,
        pub held_column: Option<u8>,
    }

    impl KeypadMatrix for MockMatrix {
        fn drive_row(&mut self, row: u8) {
            self.driven = Some(row);
        }

        fn column_is_high(&self, column: u8) -> bool {
            self.held_column == Some(column)
        }
    }

    /// Side buttons with an optional held button
    #[derive(Default)]
    pub(crate) struct MockButtons {
        pub held: Option<Button>,
    }

    impl ButtonLines for MockButtons {
        fn is_held(&self, button: Button) -> bool {
            self.held == Some(button)
        }
    }

    fn ticks(state: &DeviceState, matrix: &mut MockMatrix, buttons: &MockButtons, n: u32) {
        for _ in 0..n {
            state.timer_tick(matrix, buttons);
        }
    }

    #[test]
    fn test_counters() {
        let state = DeviceState::new();
        state.seed_epoch(1000);
        let mut matrix = MockMatrix::default();
        let buttons = MockButtons::default();

        ticks(&state, &mut matrix, &buttons, 99);
        assert_eq!(state.epoch(), 1000);
        assert_eq!(state.fast_ticks(), 6);

        ticks(&state, &mut matrix, &buttons, 1);
        assert_eq!(state.clock(), 100);
        assert_eq!(state.epoch(), 1001);
    }

    #[test]
    fn test_backlight_counts_down_to_zero() {
        let state = DeviceState::new();
        let mut matrix = MockMatrix::default();
        let buttons = MockButtons::default();

        state.arm_backlight(3);
        ticks(&state, &mut matrix, &buttons, 5);
        assert_eq!(state.backlight(), 0);
    }

    #[test]
    fn test_row_scan_round_robin() {
        let state = DeviceState::new();
        let mut matrix = MockMatrix::default();
        let buttons = MockButtons::default();

        let mut rows = Vec::new();
        for _ in 0..5 {
            state.timer_tick(&mut matrix, &buttons);
            rows.push(matrix.driven.unwrap());
        }
        assert_eq!(rows, [1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_latched_key_pauses_scan_until_release() {
        let state = DeviceState::new();
        let mut matrix = MockMatrix::default();
        let buttons = MockButtons::default();

        ticks(&state, &mut matrix, &buttons, 2);
        state.keypad_column_edge(3);
        assert_eq!(state.keypad(), 23);

        matrix.held_column = Some(3);
        ticks(&state, &mut matrix, &buttons, 10);
        assert_eq!(state.keypad(), 23);
        assert_eq!(state.scan_row(), 2);

        matrix.held_column = None;
        state.timer_tick(&mut matrix, &buttons);
        assert_eq!(state.keypad(), 0);
        assert_eq!(state.scan_row(), 3);
    }

    #[test]
    fn test_button_release_detected_by_timer() {
        let state = DeviceState::new();
        let mut matrix = MockMatrix::default();
        let mut buttons = MockButtons {
            held: Some(Button::Mode),
        };

        state.button_edge(Button::Mode);
        state.timer_tick(&mut matrix, &buttons);
        assert_eq!(state.buttons(), Button::Mode.mask());

        buttons.held = None;
        state.timer_tick(&mut matrix, &buttons);
        assert_eq!(state.buttons(), 0);
    }

    struct Line(std::rc::Rc<std::cell::Cell<bool>>);

    impl OutputPin for Line {
        fn set_high(&mut self) {
            self.0.set(true);
        }

        fn set_low(&mut self) {
            self.0.set(false);
        }
    }

    impl InputPin for Line {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_pin_matrix_drives_one_row() {
        use std::cell::Cell;
        use std::rc::Rc;

        let levels: [Rc<Cell<bool>>; 4] = Default::default();
        let rows = levels.clone().map(Line);
        let column_levels: [Rc<Cell<bool>>; 4] = Default::default();
        let columns = column_levels.map(Line);
        let mut matrix = PinMatrix::new(rows, columns);

        matrix.drive_row(2);
        let driven: Vec<bool> = levels.iter().map(|l| l.get()).collect();
        assert_eq!(driven, [false, false, true, false]);

        assert!(!matrix.column_is_high(1));
        assert!(!matrix.column_is_high(0));
        assert!(!matrix.column_is_high(9));
    }

    #[test]
    fn test_pin_buttons_order() {
        use std::cell::Cell;
        use std::rc::Rc;

        let levels: [Rc<Cell<bool>>; 4] = Default::default();
        levels[2].set(true);
        let lines = PinButtons::new(levels.clone().map(Line));

        assert!(lines.is_held(Button::Mode));
        assert!(!lines.is_held(Button::Light));
    }
}
