use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use crate::constants::DONATE_DISCRIMINATOR;
use crate::encode::encode_u64_le;
use crate::error::{InstructionError, ValidationError};

use super::{vault_pda, VaultInstruction};

/// Length of the donate payload: discriminator at 0..8, amount at 8..16.
pub const DONATE_DATA_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonateParams {
    pub donor: Pubkey,
    pub slug: String,
    /// Recipients in the vault's owner order
    pub owners: Vec<Pubkey>,
    pub lamports: u64,
}

/// Builds the donate instruction. The program splits `lamports` across the
/// owner accounts passed after the system program.
///
/// Accounts: vault PDA (writable), donor (signer, writable), system program,
/// each owner (writable).
pub fn build_donate(
    program_id: &Pubkey,
    params: &DonateParams,
) -> Result<VaultInstruction, InstructionError> {
    if params.lamports == 0 {
        return Err(ValidationError::ZeroAmount.into());
    }
    if params.owners.is_empty() {
        return Err(ValidationError::NoRecipients.into());
    }

    let vault_pda = vault_pda(&params.slug, program_id)?;

    let mut data = Vec::with_capacity(DONATE_DATA_LEN);
    data.extend_from_slice(&DONATE_DISCRIMINATOR);
    encode_u64_le(&mut data, params.lamports);

    let mut accounts = vec![
        AccountMeta::new(vault_pda, false),
        AccountMeta::new(params.donor, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    accounts.extend(
        params
            .owners
            .iter()
            .map(|owner| AccountMeta::new(*owner, false)),
    );

    Ok(VaultInstruction {
        instruction: Instruction {
            program_id: *program_id,
            accounts,
            data,
        },
        vault_pda,
    })
}
