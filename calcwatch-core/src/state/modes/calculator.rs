//! Calculator mode
//!
//! Single-step arithmetic: an operator key moves the operand into the
//! accumulator, `#` applies the operator to the accumulator and the new
//! operand. Choosing a second operator before `#` replaces the first
//! without evaluating it.

use core::fmt::Write;

use heapless::String;

use crate::device::Key;

/// Maximum operand length, decimal point included
pub const MAX_OPERAND_LEN: usize = 8;

/// Pending arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Operator selected by keys A-D
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::A => Some(Operator::Add),
            Key::B => Some(Operator::Subtract),
            Key::C => Some(Operator::Multiply),
            Key::D => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

/// Calculator mode state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorState {
    /// Digits typed so far
    pub operand: String<MAX_OPERAND_LEN>,
    pub operator: Option<Operator>,
    pub accumulator: f64,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset accumulator, operand and operator
    pub fn clear(&mut self) {
        self.operand.clear();
        self.operator = None;
        self.accumulator = 0.0;
    }

    /// Operand as a number; unparsable text counts as zero
    fn operand_value(&self) -> f64 {
        self.operand.parse().unwrap_or(0.0)
    }

    /// Handle a keypad press
    pub fn press(&mut self, key: Key) {
        if let Some(digit) = key.digit() {
            // Full buffer ignores further input
            let _ = self.operand.push(char::from(b'0' + digit));
        } else if key == Key::Star {
            if !self.operand.contains('.') {
                let _ = self.operand.push('.');
            }
        } else if let Some(op) = Operator::from_key(key) {
            self.operator = Some(op);
            self.accumulator = self.operand_value();
            self.operand.clear();
        } else if key == Key::Pound {
            self.equals();
        }
    }

    fn equals(&mut self) {
        if let Some(op) = self.operator.take() {
            self.accumulator = op.apply(self.accumulator, self.operand_value());
            self.operand.clear();
        } else if !self.operand.is_empty() {
            self.accumulator = self.operand_value();
            self.operand.clear();
        }
    }

    /// Text for the main digits
    ///
    /// The operand while one is being typed, otherwise the accumulator
    /// with trailing fractional zeros dropped. The decimal point stays so
    /// the last integer digit lights its dot.
    pub fn display(&self) -> String<24> {
        let mut out = String::new();
        if !self.operand.is_empty() {
            let _ = write!(out, "{:>8}", self.operand.as_str());
            return out;
        }

        let mut value: String<24> = String::new();
        if write!(value, "{:.9}", self.accumulator).is_err() {
            // Too large for the display
            let _ = out.push_str("        E");
            return out;
        }
        let trimmed = value.trim_end_matches('0');
        let _ = write!(out, "{trimmed:>9}");
        out
    }
}
