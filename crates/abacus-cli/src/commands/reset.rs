use abacus_core::services::VaultService;

use crate::error::CliError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetTarget {
    Passcode,
    Everything,
}

pub async fn run_reset(
    vault: &VaultService,
    target: ResetTarget,
    confirmed: bool,
) -> Result<(), CliError> {
    match target {
        ResetTarget::Passcode => {
            if !confirmed {
                return Err(CliError::ConfirmationRequired("reset the passcode"));
            }
            vault.reset_passcode()?;
            println!("Passcode removed; the next qualifying entry sets a new one");
        }
        ResetTarget::Everything => {
            if !confirmed {
                return Err(CliError::ConfirmationRequired("erase the vault"));
            }
            vault.reset_all().await?;
            println!("Vault erased");
        }
    }
    Ok(())
}
