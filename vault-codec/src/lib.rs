//! Soluddy Vault Codec
//!
//! Byte-exact instruction builders and account decoder for the Soluddy
//! donation-vault program. Builders validate their input and produce
//! ready-to-sign instructions; the decoder turns raw vault account data into
//! a [`VaultRecord`].
//!
//! Everything here is synchronous and free of shared state.

pub mod categories;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod instructions;
pub mod lamports;
pub mod pda;
pub mod slug;
pub mod state;
pub mod validation;

pub use error::{DecodeError, EncodeError, InstructionError, ValidationError};
pub use instructions::*;
pub use lamports::{format_lamports_to_sol, parse_donation_lamports, DonationSplit};
pub use pda::find_vault_address;
pub use slug::{generate_slug, BannedSlugs};
pub use state::{check_vault_discriminator, VaultRecord};
