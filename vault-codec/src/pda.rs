use solana_sdk::pubkey::Pubkey;

use crate::constants::VAULT_SEED;

/// Derives the vault address for `slug` under `program_id`.
///
/// Seeds are `["vault", slug]`. Returns `None` when no address exists, which
/// happens for slugs longer than the 32-byte seed limit.
pub fn find_vault_address(slug: &str, program_id: &Pubkey) -> Option<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[VAULT_SEED, slug.as_bytes()], program_id)
}
