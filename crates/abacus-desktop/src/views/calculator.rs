//! Calculator view - the disguise and the passcode entry point

use dioxus::prelude::*;

use abacus_core::calc::{Calculator, Evaluation, HistoryLog};
use abacus_core::gate::{PasscodeGate, UnlockOutcome, GATE_UNAVAILABLE_NOTICE};
use abacus_core::models::HistoryItem;

use crate::components::{CalcKey, HistoryPanel, Keypad};
use crate::services::{confirm, show_error};
use crate::state::{AppState, VaultStatus};
use crate::theme::palette;

#[component]
pub fn CalculatorView() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();

    let mut calc = use_signal(Calculator::new);
    let mut gate = use_signal(|| None::<PasscodeGate>);
    let mut history = use_signal(|| None::<HistoryLog>);
    let mut history_open = use_signal(|| false);

    // Load the gate and history once the vault is open
    use_effect(move || {
        let Some(vault) = (state.vault)() else {
            return;
        };
        match vault.passcode_gate() {
            Ok(loaded) => gate.set(Some(loaded)),
            Err(e) => {
                tracing::error!("Failed to load passcode: {}", e);
                state.show_notice(GATE_UNAVAILABLE_NOTICE);
            }
        }
        history.set(Some(HistoryLog::load_or_empty(vault.kv())));
    });

    let mut press = move |key: CalcKey| match key {
        CalcKey::Digit(digit) => calc.write().press_digit(digit),
        CalcKey::Operator(op) => calc.write().press_operator(op),
        CalcKey::Clear => calc.write().clear(),
        CalcKey::Negate => calc.write().negate(),
        CalcKey::Percent => calc.write().percent(),
        CalcKey::Equals => {
            let mut outcome = None;
            let evaluation = calc.write().evaluate(|input| {
                let mut gate = gate.write();
                let Some(gate) = gate.as_mut() else {
                    return false;
                };
                match gate.attempt_unlock(input) {
                    Ok(result) => {
                        outcome = Some(result);
                        result.is_accepted()
                    }
                    Err(e) => {
                        tracing::error!("Passcode check failed: {}", e);
                        false
                    }
                }
            });

            if let Evaluation::Computed(item) = evaluation {
                if let Some(log) = history.write().as_mut() {
                    if let Err(e) = log.record(item) {
                        tracing::error!("Failed to save history: {}", e);
                    }
                }
            }

            if let Some(outcome) = outcome {
                handle_outcome(&mut state, outcome);
            }
        }
    };

    let on_keydown = move |evt: Event<KeyboardData>| {
        if let Some(key) = CalcKey::from_keyboard(&evt.key().to_string()) {
            evt.prevent_default();
            press(key);
        }
    };

    let restore = move |item: HistoryItem| {
        calc.write().restore(&item);
        history_open.set(false);
    };

    let clear_history = move |()| {
        spawn(async move {
            if !confirm("Clear history", "Remove every past calculation? This cannot be undone.").await {
                return;
            }
            let result = history.write().as_mut().map(HistoryLog::clear);
            if let Some(Err(e)) = result {
                tracing::error!("Failed to clear history: {}", e);
                show_error("History could not be cleared.").await;
            }
        });
    };

    let history_items: Vec<HistoryItem> = history
        .read()
        .as_ref()
        .map(|log| log.items().to_vec())
        .unwrap_or_default();
    let display = calc.read().display().to_string();
    let expression = calc.read().expression().to_string();
    let display_size = if display.len() > 9 { "40px" } else { "64px" };
    let storage_failed = matches!((state.vault_status)(), VaultStatus::Failed(_));

    rsx! {
        div {
            class: "calculator",
            tabindex: "0",
            autofocus: true,
            onkeydown: on_keydown,
            style: "
                height: 100vh;
                display: flex;
                flex-direction: column;
                justify-content: flex-end;
                outline: none;
            ",

            div {
                style: "display: flex; justify-content: flex-start; padding: 12px 16px;",
                button {
                    class: "history-toggle",
                    title: "History",
                    style: "border: none; background: transparent; color: {colors.accent}; font-size: 22px; cursor: pointer;",
                    onclick: move |_| history_open.set(true),
                    "\u{1F553}"
                }
                if storage_failed {
                    span {
                        style: "margin-left: auto; font-size: 12px; color: {colors.text_muted};",
                        "Offline"
                    }
                }
            }

            div {
                class: "calc-screen",
                style: "flex: 1; display: flex; flex-direction: column; justify-content: flex-end; padding: 0 24px 8px;",
                div {
                    class: "calc-expression",
                    style: "min-height: 24px; text-align: right; font-size: 20px; color: {colors.text_secondary};",
                    "{expression}"
                }
                div {
                    class: "calc-display",
                    style: "
                        text-align: right;
                        font-size: {display_size};
                        font-weight: 300;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{display}"
                }
            }

            Keypad { on_key: move |key| press(key) }

            if history_open() {
                HistoryPanel {
                    items: history_items,
                    on_restore: restore,
                    on_clear: clear_history,
                    on_close: move |()| history_open.set(false),
                }
            }
        }
    }
}

fn handle_outcome(state: &mut AppState, outcome: UnlockOutcome) {
    if let Some(message) = outcome.notice() {
        state.show_notice(message);
    }
    if outcome.should_navigate() {
        state.unlock();
    }
}
