//! Ledger access and vault lookup

pub mod rpc;
pub mod vault_reader;

pub use rpc::{AccountSource, RpcClient};
pub use vault_reader::{fetch_vault, list_vaults, VaultEntry};
