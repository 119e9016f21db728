pub mod close;
pub mod create;
pub mod donate;
pub mod update;

pub use close::*;
pub use create::*;
pub use donate::*;
pub use update::*;

use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

use crate::error::InstructionError;
use crate::pda::find_vault_address;

/// A ready-to-sign instruction together with the vault it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultInstruction {
    pub instruction: Instruction,
    pub vault_pda: Pubkey,
}

fn vault_pda(slug: &str, program_id: &Pubkey) -> Result<Pubkey, InstructionError> {
    find_vault_address(slug, program_id)
        .map(|(address, _bump)| address)
        .ok_or_else(|| InstructionError::AddressDerivation(slug.to_string()))
}
