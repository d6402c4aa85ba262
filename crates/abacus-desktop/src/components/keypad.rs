//! Calculator keypad

use dioxus::prelude::*;

use abacus_core::calc::Operator;

use crate::theme::palette;

/// A calculator key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcKey {
    /// `0`-`9` or `.`
    Digit(char),
    Operator(Operator),
    Clear,
    Negate,
    Percent,
    Equals,
}

impl CalcKey {
    /// Map a keyboard key name to a calculator key
    pub fn from_keyboard(key: &str) -> Option<Self> {
        let key = match key {
            "Enter" | "=" => Self::Equals,
            "Escape" | "Delete" | "c" | "C" => Self::Clear,
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "*" | "x" => Self::Operator(Operator::Multiply),
            "/" => Self::Operator(Operator::Divide),
            "%" => Self::Percent,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() || c == '.' => Self::Digit(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum KeyStyle {
    Number,
    Function,
    Operator,
}

struct KeySpec {
    label: &'static str,
    key: CalcKey,
    style: KeyStyle,
    wide: bool,
}

const fn key(label: &'static str, key: CalcKey, style: KeyStyle) -> KeySpec {
    KeySpec {
        label,
        key,
        style,
        wide: false,
    }
}

const KEYS: [KeySpec; 19] = [
    key("C", CalcKey::Clear, KeyStyle::Function),
    key("\u{00B1}", CalcKey::Negate, KeyStyle::Function),
    key("%", CalcKey::Percent, KeyStyle::Function),
    key("\u{00F7}", CalcKey::Operator(Operator::Divide), KeyStyle::Operator),
    key("7", CalcKey::Digit('7'), KeyStyle::Number),
    key("8", CalcKey::Digit('8'), KeyStyle::Number),
    key("9", CalcKey::Digit('9'), KeyStyle::Number),
    key("\u{00D7}", CalcKey::Operator(Operator::Multiply), KeyStyle::Operator),
    key("4", CalcKey::Digit('4'), KeyStyle::Number),
    key("5", CalcKey::Digit('5'), KeyStyle::Number),
    key("6", CalcKey::Digit('6'), KeyStyle::Number),
    key("\u{2212}", CalcKey::Operator(Operator::Subtract), KeyStyle::Operator),
    key("1", CalcKey::Digit('1'), KeyStyle::Number),
    key("2", CalcKey::Digit('2'), KeyStyle::Number),
    key("3", CalcKey::Digit('3'), KeyStyle::Number),
    key("+", CalcKey::Operator(Operator::Add), KeyStyle::Operator),
    KeySpec {
        label: "0",
        key: CalcKey::Digit('0'),
        style: KeyStyle::Number,
        wide: true,
    },
    key(".", CalcKey::Digit('.'), KeyStyle::Number),
    key("=", CalcKey::Equals, KeyStyle::Operator),
];

/// Four-column keypad
#[component]
pub fn Keypad(on_key: EventHandler<CalcKey>) -> Element {
    let colors = palette();

    rsx! {
        div {
            class: "keypad",
            style: "
                display: grid;
                grid-template-columns: repeat(4, 1fr);
                gap: 12px;
                padding: 16px;
            ",

            for spec in KEYS.iter() {
                {
                    let (bg, fg) = match spec.style {
                        KeyStyle::Number => (colors.bg_tertiary, colors.text_primary),
                        KeyStyle::Function => (colors.key_function, colors.key_function_text),
                        KeyStyle::Operator => (colors.accent, colors.accent_text),
                    };
                    let span = if spec.wide { "span 2" } else { "span 1" };
                    let radius = if spec.wide { "40px" } else { "50%" };
                    let ratio = if spec.wide { "auto" } else { "1" };
                    let pressed = spec.key;

                    rsx! {
                        button {
                            key: "{spec.label}",
                            class: "calc-key",
                            style: "
                                grid-column: {span};
                                aspect-ratio: {ratio};
                                min-height: 64px;
                                border: none;
                                border-radius: {radius};
                                background: {bg};
                                color: {fg};
                                font-size: 28px;
                                cursor: pointer;
                            ",
                            onclick: move |_| on_key.call(pressed),
                            "{spec.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_digits_and_decimal_point() {
        assert_eq!(CalcKey::from_keyboard("7"), Some(CalcKey::Digit('7')));
        assert_eq!(CalcKey::from_keyboard("."), Some(CalcKey::Digit('.')));
        assert_eq!(CalcKey::from_keyboard("a"), None);
        assert_eq!(CalcKey::from_keyboard("Shift"), None);
    }

    #[test]
    fn keyboard_operators_and_commands() {
        assert_eq!(
            CalcKey::from_keyboard("*"),
            Some(CalcKey::Operator(Operator::Multiply))
        );
        assert_eq!(CalcKey::from_keyboard("Enter"), Some(CalcKey::Equals));
        assert_eq!(CalcKey::from_keyboard("Escape"), Some(CalcKey::Clear));
        assert_eq!(CalcKey::from_keyboard("%"), Some(CalcKey::Percent));
    }

    #[test]
    fn keypad_has_every_digit() {
        for digit in '0'..='9' {
            assert!(KEYS.iter().any(|spec| spec.key == CalcKey::Digit(digit)));
        }
    }
}
