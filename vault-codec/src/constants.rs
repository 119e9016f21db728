pub const VAULT_SEED: &[u8] = b"vault";

pub const DISCRIMINATOR_LEN: usize = 8;

pub const CREATE_VAULT_DISCRIMINATOR: [u8; 8] = [0x1d, 0xed, 0xf7, 0xd0, 0xc1, 0x52, 0x36, 0x87];
pub const UPDATE_VAULT_DISCRIMINATOR: [u8; 8] = [0x43, 0xe5, 0xb9, 0xbc, 0xe2, 0x0b, 0xd2, 0x3c];
pub const CLOSE_VAULT_DISCRIMINATOR: [u8; 8] = [0x8d, 0x67, 0x11, 0x7e, 0x48, 0x4b, 0x1d, 0x1d];
pub const DONATE_DISCRIMINATOR: [u8; 8] = [0x79, 0xba, 0xda, 0xd3, 0x49, 0x46, 0xc4, 0xb4];
pub const VAULT_ACCOUNT_DISCRIMINATOR: [u8; 8] = [0xd3, 0x08, 0xe8, 0x2b, 0x02, 0x98, 0x75, 0x77];

pub const MAX_OWNERS: usize = 10;
pub const MAX_CATEGORIES: usize = 5;

/// Only single-signer vaults are accepted by the deployed program.
pub const FIXED_THRESHOLD: u8 = 1;

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SLUG_LEN: usize = 32;
pub const MAX_URL_LEN: usize = 128;
pub const MAX_DESCRIPTION_LEN: usize = 280;
pub const MAX_CATEGORY_LEN: usize = 32;

/// Category reported for accounts created before categories existed.
pub const DEFAULT_CATEGORY: &str = "non-profit";

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
pub const SOL_DECIMALS: usize = 9;
