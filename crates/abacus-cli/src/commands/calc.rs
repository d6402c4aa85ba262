use abacus_core::calc::{evaluate, format_result, sanitize};
use abacus_core::models::HistoryItem;
use abacus_core::services::VaultService;
use abacus_core::util::unix_millis_now;

use crate::error::CliError;

/// Evaluate the joined expression and record it in history.
///
/// The passcode gate is never consulted here.
pub fn calculate(vault: &VaultService, expression_parts: &[String]) -> Result<HistoryItem, CliError> {
    let expression = expression_parts.join(" ").trim().to_string();
    if expression.is_empty() {
        return Err(CliError::EmptyExpression);
    }

    let value = evaluate(&sanitize(&expression)).map_err(abacus_core::Error::from)?;
    let item = HistoryItem {
        expression,
        result: format_result(value),
        timestamp: unix_millis_now(),
    };

    vault.history()?.record(item.clone())?;
    tracing::debug!("Recorded `{}` = {}", item.expression, item.result);
    Ok(item)
}

pub fn run_calc(vault: &VaultService, expression_parts: &[String]) -> Result<(), CliError> {
    let item = calculate(vault, expression_parts)?;
    println!("{}", item.result);
    Ok(())
}
