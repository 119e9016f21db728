//! Request and response types for the Soluddy API backend

use anyhow::Context;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use vault_codec::{constants::FIXED_THRESHOLD, BannedSlugs, VaultInstruction, VaultRecord};

/// Decoded vault as served to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultResponse {
    /// Owner public keys (base58)
    pub owners: Vec<String>,
    pub threshold: u8,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub description: String,
    pub categories: Vec<String>,
    /// ISO-8601, millisecond precision
    pub created_at: String,
    pub bump: u8,
    /// Vault account address (base58)
    pub pda: String,
}

impl VaultResponse {
    pub fn new(record: &VaultRecord, pda: &Pubkey) -> Self {
        Self {
            owners: record.owners.iter().map(Pubkey::to_string).collect(),
            threshold: record.threshold,
            name: record.name.clone(),
            slug: record.slug.clone(),
            url: record.url.clone(),
            description: record.description.clone(),
            categories: record.categories.clone(),
            created_at: record.created_at_iso(),
            bump: record.bump,
            pda: pda.to_string(),
        }
    }
}

/// Response for GET /api/vaults/all
#[derive(Debug, Serialize)]
pub struct VaultsResponse {
    pub vaults: Vec<VaultResponse>,
    pub count: usize,
}

/// One entry of the category catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

/// Public runtime settings for the UI
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfigResponse {
    pub rpc_url: String,
    pub app_base_url: String,
    pub config_pda: String,
    pub featured_slugs: Vec<String>,
    pub banned_slugs: Vec<String>,
    pub report_email: String,
    pub google_analytics_measurement_id: Option<String>,
    pub categories: Vec<CategoryOption>,
}

fn default_threshold() -> u8 {
    FIXED_THRESHOLD
}

/// Request for a create_vault instruction
///
/// When `slug` is omitted one is generated from `name`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVaultRequest {
    /// Fee payer (base58)
    pub payer: String,

    /// Owner public keys (base58)
    pub owners: Vec<String>,

    #[serde(default = "default_threshold")]
    pub threshold: u8,

    pub name: String,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub description: String,

    pub categories: Vec<String>,
}

/// Request for an update_vault instruction
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVaultRequest {
    /// Signing vault owner (base58)
    pub owner: String,
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

/// Request for a close_vault instruction
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseVaultRequest {
    /// Signing vault owner (base58)
    pub owner: String,
    pub slug: String,
}

/// Request for a donate instruction
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonateRequest {
    /// Donor wallet (base58)
    pub donor: String,
    pub slug: String,
    /// SOL amount, up to 9 decimal places
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMetaResponse {
    pub pubkey: String,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// Unsigned instruction ready for a wallet
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionResponse {
    pub program_id: String,
    pub accounts: Vec<AccountMetaResponse>,
    /// Instruction data (base64 encoded)
    pub data: String,
    pub vault_pda: String,
}

impl From<&VaultInstruction> for InstructionResponse {
    fn from(built: &VaultInstruction) -> Self {
        use base64::{engine::general_purpose::STANDARD, Engine};

        let instruction = &built.instruction;
        Self {
            program_id: instruction.program_id.to_string(),
            accounts: instruction
                .accounts
                .iter()
                .map(|meta| AccountMetaResponse {
                    pubkey: meta.pubkey.to_string(),
                    is_signer: meta.is_signer,
                    is_writable: meta.is_writable,
                })
                .collect(),
            data: STANDARD.encode(&instruction.data),
            vault_pda: built.vault_pda.to_string(),
        }
    }
}

/// One owner's part of a donation
#[derive(Debug, Serialize)]
pub struct OwnerShare {
    pub owner: String,
    /// Lamports (as string to handle u64)
    pub lamports: String,
}

/// Response for a donate instruction
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonateResponse {
    #[serde(flatten)]
    pub instruction: InstructionResponse,
    /// Total lamports (as string to handle u64)
    pub lamports: String,
    /// Total formatted as SOL
    pub amount_sol: String,
    pub per_owner: String,
    /// Extra lamports credited to the first owner
    pub remainder: String,
    pub distribution: Vec<OwnerShare>,
}

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: i64,
    pub program_id: String,
}

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;
const DEFAULT_APP_BASE_URL: &str = "https://soluddy.com";
const DEFAULT_CONFIG_PDA: &str = "HCJDvoVrye24txi3hex5V4UMSaNVDd7wKP5VogDLkhsC";
const DEFAULT_FEATURED_SLUGS: &[&str] = &["soluddy"];
const DEFAULT_REPORT_EMAIL: &str = "support@soluddy.com";

/// Configuration for the backend server, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// CORS allowed origins
    pub cors_origins: Vec<String>,

    /// Deployed vault program
    pub program_id: Pubkey,

    /// Ledger JSON-RPC endpoint
    pub rpc_url: String,

    /// Per-request RPC timeout in seconds
    pub rpc_timeout_secs: u64,

    pub app_base_url: String,

    pub config_pda: String,

    pub featured_slugs: Vec<String>,

    pub banned_slugs: BannedSlugs,

    /// Contact for reserved-name and abuse reports
    pub report_email: String,

    pub google_analytics_measurement_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
            program_id: Pubkey::default(),
            rpc_url: DEFAULT_RPC_URL.to_string(),
            rpc_timeout_secs: DEFAULT_RPC_TIMEOUT_SECS,
            app_base_url: DEFAULT_APP_BASE_URL.to_string(),
            config_pda: DEFAULT_CONFIG_PDA.to_string(),
            featured_slugs: DEFAULT_FEATURED_SLUGS.iter().map(|s| s.to_string()).collect(),
            banned_slugs: BannedSlugs::default(),
            report_email: DEFAULT_REPORT_EMAIL.to_string(),
            google_analytics_measurement_id: None,
        }
    }
}

/// Reads a variable, treating blank values as unset
fn read_env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

fn read_env_list(key: &str) -> Vec<String> {
    read_env_string(key)
        .map(|value| parse_list(&value))
        .unwrap_or_default()
}

/// Parses a JSON array of slugs
pub fn parse_banned_slugs(json: &str) -> anyhow::Result<BannedSlugs> {
    let entries: Vec<String> =
        serde_json::from_str(json).context("banned slugs must be a JSON array of strings")?;
    Ok(BannedSlugs::new(entries))
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = read_env_string("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let cors_origins = Some(read_env_list("CORS_ORIGINS"))
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.cors_origins);

        let program_id = read_env_string("PROGRAM_ID").context("PROGRAM_ID must be set")?;
        let program_id = Pubkey::from_str(&program_id)
            .with_context(|| format!("PROGRAM_ID {program_id:?} is not a valid public key"))?;

        let rpc_timeout_secs = read_env_string("RPC_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.rpc_timeout_secs);

        let featured_slugs = Some(read_env_list("FEATURED_SLUGS"))
            .filter(|slugs| !slugs.is_empty())
            .unwrap_or(defaults.featured_slugs);

        let banned_slugs = match read_env_string("BANNED_SLUGS_PATH") {
            Some(path) => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read banned slugs from {path}"))?;
                parse_banned_slugs(&json)?
            }
            None => defaults.banned_slugs,
        };

        Ok(Self {
            port,
            cors_origins,
            program_id,
            rpc_url: read_env_string("RPC_URL").unwrap_or(defaults.rpc_url),
            rpc_timeout_secs,
            app_base_url: read_env_string("APP_BASE_URL").unwrap_or(defaults.app_base_url),
            config_pda: read_env_string("CONFIG_PDA").unwrap_or(defaults.config_pda),
            featured_slugs,
            banned_slugs,
            report_email: read_env_string("REPORT_EMAIL").unwrap_or(defaults.report_email),
            google_analytics_measurement_id: read_env_string("GA_MEASUREMENT_ID"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_parse_list_drops_blanks() {
        assert_eq!(parse_list(" a, ,b ,"), vec!["a", "b"]);
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_parse_banned_slugs() {
        let banned = parse_banned_slugs(r#"[" Scam ", "", "FAKE"]"#).unwrap();
        assert_eq!(banned.entries(), &["scam".to_string(), "fake".to_string()]);

        assert!(parse_banned_slugs(r#"{"slugs": []}"#).is_err());
        assert!(parse_banned_slugs(r#"["ok", 3]"#).is_err());
    }

    #[test]
    fn test_vault_response_shape() {
        let owner = Pubkey::new_unique();
        let pda = Pubkey::new_unique();
        let record = VaultRecord {
            owners: vec![owner],
            threshold: 1,
            name: "Garden".to_string(),
            slug: "garden-abc123".to_string(),
            url: String::new(),
            description: String::new(),
            categories: vec!["non-profit".to_string()],
            created_at: DateTime::from_timestamp(1_704_067_200, 0).unwrap(),
            bump: 255,
        };

        let json = serde_json::to_value(VaultResponse::new(&record, &pda)).unwrap();

        assert_eq!(json["owners"][0], owner.to_string());
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00.000Z");
        assert_eq!(json["pda"], pda.to_string());
        assert_eq!(json["bump"], 255);
        assert_eq!(json["categories"][0], "non-profit");
    }

    #[test]
    fn test_create_request_defaults() {
        let req: CreateVaultRequest = serde_json::from_str(
            r#"{"payer": "p", "owners": ["p"], "name": "Garden", "categories": ["defi"]}"#,
        )
        .unwrap();

        assert_eq!(req.threshold, 1);
        assert!(req.slug.is_none());
        assert!(req.url.is_empty());
        assert!(req.description.is_empty());
    }

    #[test]
    fn test_runtime_config_null_measurement_id() {
        let json = serde_json::to_value(RuntimeConfigResponse {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            app_base_url: DEFAULT_APP_BASE_URL.to_string(),
            config_pda: DEFAULT_CONFIG_PDA.to_string(),
            featured_slugs: vec![],
            banned_slugs: vec![],
            report_email: DEFAULT_REPORT_EMAIL.to_string(),
            google_analytics_measurement_id: None,
            categories: vec![],
        })
        .unwrap();

        assert!(json["googleAnalyticsMeasurementId"].is_null());
        assert_eq!(json["configPda"], DEFAULT_CONFIG_PDA);
    }
}
