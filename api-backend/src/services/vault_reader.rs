//! Vault lookup over an [`AccountSource`]

use solana_sdk::pubkey::Pubkey;
use tracing::{debug, error, info, warn};
use vault_codec::{find_vault_address, VaultRecord};

use crate::error::{BackendError, Result};
use crate::services::rpc::{AccountSource, RawAccount};

/// A decoded vault and the account it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultEntry {
    pub record: VaultRecord,
    pub pda: Pubkey,
}

/// Decodes one scanned account. Accounts of other kinds are skipped silently,
/// corrupt vaults are logged and skipped.
fn decode_scanned(account: &RawAccount) -> Option<VaultEntry> {
    match VaultRecord::try_from_account_data(&account.data) {
        Ok(record) => Some(VaultEntry {
            record,
            pda: account.address,
        }),
        Err(err) if err.is_foreign() => None,
        Err(err) => {
            warn!(account = %account.address, error = %err, "Skipping unreadable vault account");
            None
        }
    }
}

/// Decodes every vault owned by `program_id`. Each account is decoded on its
/// own; one bad account never hides the others.
pub async fn scan_vaults(source: &dyn AccountSource, program_id: &Pubkey) -> Result<Vec<VaultEntry>> {
    let accounts = source.get_program_accounts(program_id).await?;
    let total = accounts.len();

    let vaults: Vec<VaultEntry> = accounts.iter().filter_map(decode_scanned).collect();

    debug!(total, vaults = vaults.len(), "Scanned program accounts");
    Ok(vaults)
}

/// All vaults, newest first
pub async fn list_vaults(source: &dyn AccountSource, program_id: &Pubkey) -> Result<Vec<VaultEntry>> {
    let mut vaults = scan_vaults(source, program_id).await?;
    vaults.sort_by(|a, b| b.record.created_at.cmp(&a.record.created_at));
    Ok(vaults)
}

async fn find_by_scan(
    source: &dyn AccountSource,
    program_id: &Pubkey,
    slug: &str,
    not_found: &'static str,
) -> Result<VaultEntry> {
    let found = scan_vaults(source, program_id)
        .await?
        .into_iter()
        .find(|entry| entry.record.slug.to_lowercase() == slug);

    match found {
        Some(entry) => {
            info!(slug, pda = %entry.pda, "Found vault by scanning program accounts");
            Ok(entry)
        }
        None => Err(BackendError::NotFound(not_found)),
    }
}

/// Looks a vault up by slug.
///
/// The derived address is tried first. If it holds no vault (missing, owned by
/// another program, or another account kind) every program account is scanned
/// for a matching slug. A vault at the derived address that fails to decode is
/// reported as a parse failure.
pub async fn fetch_vault(
    source: &dyn AccountSource,
    program_id: &Pubkey,
    raw_slug: &str,
) -> Result<VaultEntry> {
    if raw_slug.is_empty() {
        return Err(BackendError::BadRequest("Missing slug parameter".to_string()));
    }
    let slug = raw_slug.to_lowercase();

    let Some((pda, _bump)) = find_vault_address(&slug, program_id) else {
        return find_by_scan(source, program_id, &slug, "Campaign not found").await;
    };

    let Some(account) = source.get_account(&pda).await? else {
        return find_by_scan(source, program_id, &slug, "Campaign not found").await;
    };

    if account.owner != *program_id {
        return find_by_scan(
            source,
            program_id,
            &slug,
            "Account owned by a different program",
        )
        .await;
    }

    match VaultRecord::try_from_account_data(&account.data) {
        Ok(record) => Ok(VaultEntry { record, pda }),
        Err(err) if err.is_foreign() => {
            find_by_scan(source, program_id, &slug, "Campaign not found").await
        }
        Err(err) => {
            error!(slug, pda = %pda, error = %err, "Failed to parse vault account");
            Err(BackendError::ParseFailed)
        }
    }
}

#[cfg(test)]
pub mod fixtures {
    //! Vault account bytes for tests

    use super::*;
    use vault_codec::constants::VAULT_ACCOUNT_DISCRIMINATOR;
    use vault_codec::{encode_create_args, CreateVaultParams};

    pub fn vault_data(owners: &[Pubkey], slug: &str, created_at: i64) -> Vec<u8> {
        let params = CreateVaultParams {
            payer: owners[0],
            owners: owners.to_vec(),
            threshold: 1,
            name: format!("Campaign {slug}"),
            slug: slug.to_string(),
            url: String::new(),
            description: String::new(),
            categories: vec!["defi".to_string()],
        };
        let mut data = VAULT_ACCOUNT_DISCRIMINATOR.to_vec();
        data.extend(encode_create_args(&params).unwrap());
        data.extend_from_slice(&created_at.to_le_bytes());
        data.push(255);
        data
    }

    pub fn vault_account(program_id: &Pubkey, owners: &[Pubkey], slug: &str, created_at: i64) -> RawAccount {
        let (address, _) = find_vault_address(slug, program_id).unwrap();
        RawAccount {
            address,
            owner: *program_id,
            data: vault_data(owners, slug, created_at),
        }
    }
}
