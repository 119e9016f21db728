use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use crate::constants::CREATE_VAULT_DISCRIMINATOR;
use crate::encode::{encode_key_vec, encode_string, encode_string_vec};
use crate::error::{EncodeError, InstructionError, ValidationError};
use crate::validation::*;

use super::{vault_pda, VaultInstruction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVaultParams {
    /// Fee payer and rent funder
    pub payer: Pubkey,
    pub owners: Vec<Pubkey>,
    pub threshold: u8,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub description: String,
    pub categories: Vec<String>,
}

impl CreateVaultParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_owners(&self.owners)?;
        validate_threshold(self.threshold)?;
        validate_name(&self.name)?;
        validate_slug(&self.slug)?;
        validate_url(&self.url)?;
        validate_description(&self.description)?;
        validate_categories(&self.categories)
    }
}

/// Encodes the create_vault arguments without the discriminator. This is also
/// the field layout of the vault account between its discriminator and
/// `created_at`.
pub fn encode_create_args(params: &CreateVaultParams) -> Result<Vec<u8>, EncodeError> {
    let mut data = Vec::new();
    encode_key_vec(&mut data, &params.owners)?;
    data.push(params.threshold);
    encode_string(&mut data, &params.name)?;
    encode_string(&mut data, &params.slug)?;
    encode_string(&mut data, &params.url)?;
    encode_string(&mut data, &params.description)?;
    encode_string_vec(&mut data, &params.categories)?;
    Ok(data)
}

/// Builds the create_vault instruction.
///
/// Accounts: vault PDA (writable), payer (signer, writable), system program.
pub fn build_create_vault(
    program_id: &Pubkey,
    params: &CreateVaultParams,
) -> Result<VaultInstruction, InstructionError> {
    params.validate()?;

    let vault_pda = vault_pda(&params.slug, program_id)?;

    let mut data = CREATE_VAULT_DISCRIMINATOR.to_vec();
    data.extend(encode_create_args(params)?);

    let instruction = Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(vault_pda, false),
            AccountMeta::new(params.payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    };

    Ok(VaultInstruction {
        instruction,
        vault_pda,
    })
}
