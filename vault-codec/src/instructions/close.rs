use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use crate::constants::CLOSE_VAULT_DISCRIMINATOR;
use crate::error::InstructionError;

use super::{vault_pda, VaultInstruction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseVaultParams {
    /// Receives the reclaimed rent
    pub owner: Pubkey,
    pub slug: String,
}

/// Builds the close_vault instruction. The payload is the discriminator
/// alone.
///
/// Accounts: vault PDA (writable), owner (signer, writable), system program.
pub fn build_close_vault(
    program_id: &Pubkey,
    params: &CloseVaultParams,
) -> Result<VaultInstruction, InstructionError> {
    let vault_pda = vault_pda(&params.slug, program_id)?;

    let instruction = Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(vault_pda, false),
            AccountMeta::new(params.owner, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: CLOSE_VAULT_DISCRIMINATOR.to_vec(),
    };

    Ok(VaultInstruction {
        instruction,
        vault_pda,
    })
}
