//! Piezo buzzer abstraction

/// Fire-and-forget tone output
///
/// Key clicks are cosmetic: implementations start the tone and return
/// immediately, and failures are swallowed by the implementation.
pub trait Buzzer {
    /// Sound `frequency_hz` for `duration_ms` milliseconds
    fn beep(&mut self, frequency_hz: u32, duration_ms: u32);
}
