use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::constants::UPDATE_VAULT_DISCRIMINATOR;
use crate::encode::{encode_optional_string, encode_optional_string_vec};
use crate::error::{InstructionError, ValidationError};
use crate::validation::*;

use super::{vault_pda, VaultInstruction};

/// Fields left as `None` are sent as absent and keep their on-chain value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateVaultParams {
    pub owner: Pubkey,
    pub slug: String,
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
}

impl UpdateVaultParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.categories.is_none()
        {
            return Err(ValidationError::NothingToUpdate);
        }
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(url) = &self.url {
            validate_url(url)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        if let Some(categories) = &self.categories {
            validate_categories(categories)?;
        }
        Ok(())
    }
}

/// Builds the update_vault instruction.
///
/// Accounts: vault PDA (writable), owner (signer).
pub fn build_update_vault(
    program_id: &Pubkey,
    params: &UpdateVaultParams,
) -> Result<VaultInstruction, InstructionError> {
    params.validate()?;

    let vault_pda = vault_pda(&params.slug, program_id)?;

    let mut data = UPDATE_VAULT_DISCRIMINATOR.to_vec();
    encode_optional_string(&mut data, params.name.as_deref())?;
    encode_optional_string(&mut data, params.url.as_deref())?;
    encode_optional_string(&mut data, params.description.as_deref())?;
    encode_optional_string_vec(&mut data, params.categories.as_deref())?;

    let instruction = Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(vault_pda, false),
            AccountMeta::new_readonly(params.owner, true),
        ],
        data,
    };

    Ok(VaultInstruction {
        instruction,
        vault_pda,
    })
}
