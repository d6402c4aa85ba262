//! Calculator input state machine
//!
//! Digits accumulate in the display buffer. An operator press moves the
//! display into the pending expression buffer. Evaluation offers the display
//! to the passcode gate first and only computes arithmetic when the gate
//! declines.

use super::expr::{evaluate, sanitize, EvalError, Operator};
use super::format::{format_number, format_result};
use crate::models::HistoryItem;
use crate::util::unix_millis_now;

/// Text shown on the display after a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

const INITIAL_DISPLAY: &str = "0";

/// Result of pressing `=`
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// The gate accepted the display; buffers were reset without computing
    GateAccepted,
    /// Nothing pending to compute; display left as is
    Idle,
    /// Arithmetic succeeded; the entry should be recorded in history
    Computed(HistoryItem),
    /// Arithmetic failed; display shows [`ERROR_DISPLAY`]
    Failed(EvalError),
}

/// Display and pending-expression buffers of the calculator
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    expression: String,
    held_result: Option<f64>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            expression: String::new(),
            held_result: None,
        }
    }

    /// Text in the main display
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Pending expression shown above the display, e.g. `2 + `
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Whether the display holds a computed or restored result
    pub const fn has_held_result(&self) -> bool {
        self.held_result.is_some()
    }

    /// Press a digit key or the decimal point.
    ///
    /// Replaces the display when it shows `0`, an error, or a held result.
    pub fn press_digit(&mut self, key: char) {
        if !(key.is_ascii_digit() || key == '.') {
            return;
        }
        if self.display == INITIAL_DISPLAY
            || self.display == ERROR_DISPLAY
            || self.held_result.is_some()
        {
            self.display = key.to_string();
            self.held_result = None;
        } else {
            self.display.push(key);
        }
    }

    /// Press an operator key: the display moves into the expression buffer
    pub fn press_operator(&mut self, op: Operator) {
        self.expression = format!("{} {} ", self.display, op);
        self.display = INITIAL_DISPLAY.to_string();
        self.held_result = None;
    }

    /// Reset both buffers and any held result
    pub fn clear(&mut self) {
        self.display = INITIAL_DISPLAY.to_string();
        self.expression.clear();
        self.held_result = None;
    }

    /// Apply unary minus to the displayed number
    pub fn negate(&mut self) {
        self.map_display(|value| -value);
    }

    /// Divide the displayed number by 100.
    ///
    /// Always treats the display as an absolute value, even mid-expression.
    pub fn percent(&mut self) {
        self.map_display(|value| value / 100.0);
    }

    /// Load a history entry's result into the display, discarding any pending expression
    pub fn restore(&mut self, item: &HistoryItem) {
        self.display.clone_from(&item.result);
        self.expression.clear();
        self.held_result = item.result.parse().ok();
    }

    /// Press `=`.
    ///
    /// `gate` receives the display text and returns whether it accepted it as
    /// a passcode. When it does, both buffers reset and nothing is computed.
    pub fn evaluate(&mut self, gate: impl FnOnce(&str) -> bool) -> Evaluation {
        if gate(&self.display) {
            self.clear();
            return Evaluation::GateAccepted;
        }

        if self.expression.is_empty() {
            return Evaluation::Idle;
        }

        let full_expression = format!("{}{}", self.expression, self.display);
        match evaluate(&sanitize(&full_expression)) {
            Ok(value) => {
                let result = format_result(value);
                self.display.clone_from(&result);
                self.expression.clear();
                self.held_result = Some(value);
                Evaluation::Computed(HistoryItem {
                    expression: full_expression,
                    result,
                    timestamp: unix_millis_now(),
                })
            }
            Err(error) => {
                tracing::debug!("Evaluation of `{full_expression}` failed: {error}");
                self.display = ERROR_DISPLAY.to_string();
                self.expression.clear();
                self.held_result = None;
                Evaluation::Failed(error)
            }
        }
    }

    fn map_display(&mut self, f: impl FnOnce(f64) -> f64) {
        match self.display.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => self.display = format_number(f(value)),
            _ => self.display = ERROR_DISPLAY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(calc: &mut Calculator, digits: &str) {
        for key in digits.chars() {
            calc.press_digit(key);
        }
    }

    fn no_gate(_: &str) -> bool {
        false
    }

    #[test]
    fn test_digits_replace_initial_zero() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "042");
        assert_eq!(calc.display(), "42");
    }

    #[test]
    fn test_two_plus_three() {
        let mut calc = Calculator::new();
        calc.press_digit('2');
        calc.press_operator(Operator::Add);
        assert_eq!(calc.expression(), "2 + ");
        assert_eq!(calc.display(), "0");
        calc.press_digit('3');

        let outcome = calc.evaluate(no_gate);
        match outcome {
            Evaluation::Computed(item) => {
                assert_eq!(item.expression, "2 + 3");
                assert_eq!(item.result, "5");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn test_digit_after_result_starts_fresh() {
        let mut calc = Calculator::new();
        calc.press_digit('2');
        calc.press_operator(Operator::Multiply);
        calc.press_digit('4');
        calc.evaluate(no_gate);
        calc.press_digit('7');
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_division_by_zero_shows_error() {
        let mut calc = Calculator::new();
        calc.press_digit('5');
        calc.press_operator(Operator::Divide);
        calc.press_digit('0');

        let outcome = calc.evaluate(no_gate);
        assert_eq!(outcome, Evaluation::Failed(EvalError::NonFinite));
        assert_eq!(calc.display(), ERROR_DISPLAY);
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn test_equals_without_expression_is_idle() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "9999");
        assert_eq!(calc.evaluate(no_gate), Evaluation::Idle);
        assert_eq!(calc.display(), "9999");
    }

    #[test]
    fn test_gate_acceptance_skips_arithmetic() {
        let mut calc = Calculator::new();
        calc.press_digit('1');
        calc.press_operator(Operator::Add);
        type_digits(&mut calc, "1234");

        let mut offered = String::new();
        let outcome = calc.evaluate(|input| {
            offered = input.to_string();
            true
        });
        assert_eq!(outcome, Evaluation::GateAccepted);
        assert_eq!(offered, "1234");
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn test_negate_and_percent() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "50");
        calc.negate();
        assert_eq!(calc.display(), "-50");
        calc.percent();
        assert_eq!(calc.display(), "-0.5");
        calc.negate();
        assert_eq!(calc.display(), "0.5");
    }

    #[test]
    fn test_percent_ignores_pending_operand() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "200");
        calc.press_operator(Operator::Add);
        type_digits(&mut calc, "10");
        calc.percent();
        assert_eq!(calc.display(), "0.1");
        assert_eq!(calc.expression(), "200 + ");
    }

    #[test]
    fn test_negate_zero_stays_zero() {
        let mut calc = Calculator::new();
        calc.negate();
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_negate_error_display_stays_error() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "1..2");
        calc.negate();
        assert_eq!(calc.display(), ERROR_DISPLAY);
    }

    #[test]
    fn test_restore_loads_result_and_discards_expression() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "8");
        calc.press_operator(Operator::Subtract);

        calc.restore(&HistoryItem {
            expression: "2 + 3".to_string(),
            result: "5".to_string(),
            timestamp: 1,
        });
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.expression(), "");
        assert!(calc.has_held_result());

        calc.press_digit('9');
        assert_eq!(calc.display(), "9");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "12");
        calc.press_operator(Operator::Add);
        type_digits(&mut calc, "3");
        calc.clear();
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_chained_result_feeds_next_expression() {
        let mut calc = Calculator::new();
        calc.press_digit('6');
        calc.press_operator(Operator::Divide);
        calc.press_digit('4');
        calc.evaluate(no_gate);
        assert_eq!(calc.display(), "1.5");

        calc.press_operator(Operator::Multiply);
        calc.press_digit('2');
        match calc.evaluate(no_gate) {
            Evaluation::Computed(item) => assert_eq!(item.expression, "1.5 * 2"),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(calc.display(), "3");
    }
}
