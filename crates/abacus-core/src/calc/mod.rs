//! Calculator: expression engine, input buffers and history

mod calculator;
mod expr;
mod format;
mod history;

pub use calculator::{Calculator, Evaluation, ERROR_DISPLAY};
pub use expr::{evaluate, sanitize, EvalError, Operator};
pub use format::{format_number, format_result};
pub use history::HistoryLog;
