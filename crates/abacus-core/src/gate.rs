//! Passcode gate
//!
//! The first numeric entry of at least [`MIN_PASSCODE_LEN`] digits becomes the
//! passcode. Afterwards an exact match unlocks the hidden views. The passcode
//! is never changed or removed from here.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::kv::{KeyValueStore, PASSCODE_KEY};

/// Minimum number of digits for a new passcode
pub const MIN_PASSCODE_LEN: usize = 4;

/// Warning shown when a first-time passcode is too short
pub const PASSCODE_TOO_SHORT_WARNING: &str =
    "Security requirement: Password must be at least 4 digits long.";

/// One-time advisory shown after the passcode is created
pub const RETENTION_ADVISORY: &str = "Keep the app installed to keep your data.";

/// Shown when the stored passcode cannot be read and the gate is unavailable
pub const GATE_UNAVAILABLE_NOTICE: &str =
    "Passcode record is unreadable. Run `abacus reset --passcode` to set a new one.";

/// What happened to an unlock attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// No passcode existed; the input became the passcode
    PasscodeCreated,
    /// The input matched the stored passcode
    Unlocked,
    /// No passcode existed and the numeric input was too short
    TooShort,
    /// No passcode existed and the input was not purely numeric
    NotNumeric,
    /// The input did not match the stored passcode
    Mismatch,
}

impl UnlockOutcome {
    /// Whether the calculator should clear its display instead of computing
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::PasscodeCreated | Self::Unlocked)
    }

    /// Whether the caller should navigate to the home view
    pub const fn should_navigate(self) -> bool {
        matches!(self, Self::Unlocked)
    }

    /// Message to show the user, if any
    pub const fn notice(self) -> Option<&'static str> {
        match self {
            Self::PasscodeCreated => Some(RETENTION_ADVISORY),
            Self::TooShort => Some(PASSCODE_TOO_SHORT_WARNING),
            Self::Unlocked | Self::NotNumeric | Self::Mismatch => None,
        }
    }
}

/// Passcode check backed by the key-value store
pub struct PasscodeGate {
    store: Arc<dyn KeyValueStore>,
    passcode: Option<String>,
}

impl PasscodeGate {
    /// Load the stored passcode, validating its shape
    pub fn load(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let passcode = store.get(PASSCODE_KEY)?;
        if let Some(stored) = &passcode {
            if !is_valid_passcode(stored) {
                return Err(Error::CorruptRecord {
                    key: PASSCODE_KEY.to_string(),
                    reason: format!("expected at least {MIN_PASSCODE_LEN} digits"),
                });
            }
        }
        Ok(Self { store, passcode })
    }

    /// Whether a passcode has been set
    pub const fn is_set(&self) -> bool {
        self.passcode.is_some()
    }

    /// Offer calculator input to the gate
    pub fn attempt_unlock(&mut self, input: &str) -> Result<UnlockOutcome> {
        let Some(passcode) = &self.passcode else {
            return self.try_create(input);
        };

        if input == passcode {
            tracing::info!("Passcode accepted");
            Ok(UnlockOutcome::Unlocked)
        } else {
            Ok(UnlockOutcome::Mismatch)
        }
    }

    fn try_create(&mut self, input: &str) -> Result<UnlockOutcome> {
        if !is_numeric(input) {
            return Ok(UnlockOutcome::NotNumeric);
        }
        if input.len() < MIN_PASSCODE_LEN {
            return Ok(UnlockOutcome::TooShort);
        }

        self.store.set(PASSCODE_KEY, input)?;
        self.passcode = Some(input.to_string());
        tracing::info!("Passcode created");
        Ok(UnlockOutcome::PasscodeCreated)
    }
}

fn is_numeric(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

fn is_valid_passcode(value: &str) -> bool {
    is_numeric(value) && value.len() >= MIN_PASSCODE_LEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKeyValueStore;

    fn empty_store() -> Arc<dyn KeyValueStore> {
        Arc::new(MemoryKeyValueStore::new())
    }

    #[test]
    fn test_first_valid_input_sets_passcode() {
        let store = empty_store();
        let mut gate = PasscodeGate::load(Arc::clone(&store)).unwrap();
        assert!(!gate.is_set());

        let outcome = gate.attempt_unlock("1234").unwrap();
        assert_eq!(outcome, UnlockOutcome::PasscodeCreated);
        assert!(outcome.is_accepted());
        assert!(!outcome.should_navigate());
        assert_eq!(outcome.notice(), Some(RETENTION_ADVISORY));
        assert_eq!(store.get(PASSCODE_KEY).unwrap().as_deref(), Some("1234"));
    }

    #[test]
    fn test_passcode_is_stable_across_attempts() {
        for candidate in ["0000", "1234", "98765", "0123456789"] {
            let store = empty_store();
            let mut gate = PasscodeGate::load(Arc::clone(&store)).unwrap();
            gate.attempt_unlock(candidate).unwrap();

            assert_eq!(gate.attempt_unlock("5555").unwrap(), UnlockOutcome::Mismatch);
            assert_eq!(gate.attempt_unlock(candidate).unwrap(), UnlockOutcome::Unlocked);

            let mut reloaded = PasscodeGate::load(Arc::clone(&store)).unwrap();
            assert_eq!(
                reloaded.attempt_unlock(candidate).unwrap(),
                UnlockOutcome::Unlocked
            );
            assert_eq!(store.get(PASSCODE_KEY).unwrap().as_deref(), Some(candidate));
        }
    }

    #[test]
    fn test_short_numeric_input_is_rejected_with_warning() {
        for candidate in ["1", "12", "123"] {
            let store = empty_store();
            let mut gate = PasscodeGate::load(Arc::clone(&store)).unwrap();

            let outcome = gate.attempt_unlock(candidate).unwrap();
            assert_eq!(outcome, UnlockOutcome::TooShort);
            assert!(!outcome.is_accepted());
            assert_eq!(outcome.notice(), Some(PASSCODE_TOO_SHORT_WARNING));
            assert!(!gate.is_set());
            assert_eq!(store.get(PASSCODE_KEY).unwrap(), None);
        }
    }

    #[test]
    fn test_non_numeric_input_is_rejected_silently() {
        for candidate in ["", "12.5", "-1234", "Error", "12 34"] {
            let store = empty_store();
            let mut gate = PasscodeGate::load(Arc::clone(&store)).unwrap();

            let outcome = gate.attempt_unlock(candidate).unwrap();
            assert_eq!(outcome, UnlockOutcome::NotNumeric);
            assert_eq!(outcome.notice(), None);
            assert!(!gate.is_set());
        }
    }

    #[test]
    fn test_existing_passcode_requires_exact_match() {
        let store = empty_store();
        store.set(PASSCODE_KEY, "1234").unwrap();
        let mut gate = PasscodeGate::load(store).unwrap();

        assert_eq!(gate.attempt_unlock("1234").unwrap(), UnlockOutcome::Unlocked);
        assert_eq!(gate.attempt_unlock("01234").unwrap(), UnlockOutcome::Mismatch);
        assert_eq!(gate.attempt_unlock("9999").unwrap(), UnlockOutcome::Mismatch);
        assert!(UnlockOutcome::Unlocked.should_navigate());
    }

    #[test]
    fn test_corrupt_stored_passcode() {
        let store = empty_store();
        store.set(PASSCODE_KEY, "12ab").unwrap();
        assert!(matches!(
            PasscodeGate::load(store),
            Err(Error::CorruptRecord { .. })
        ));
    }

    #[test]
    fn test_unavailable_notice_names_the_reset_command() {
        assert!(GATE_UNAVAILABLE_NOTICE.contains("abacus reset --passcode"));
    }
}
