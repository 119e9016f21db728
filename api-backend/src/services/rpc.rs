//! JSON-RPC reader for on-chain accounts
//!
//! Responses are deserialized into typed structs and converted into
//! [`RawAccount`] values before any account byte reaches the decoder.

use base64::{engine::general_purpose::STANDARD, Engine};
use futures::future::{BoxFuture, FutureExt};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use solana_sdk::pubkey::Pubkey;
use std::{str::FromStr, time::Duration};
use tracing::{debug, warn};

use crate::error::{BackendError, Result};

/// Account bytes and owning program as returned by the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAccount {
    pub address: Pubkey,
    pub owner: Pubkey,
    pub data: Vec<u8>,
}

/// Source of on-chain accounts
pub trait AccountSource: Send + Sync {
    /// Fetch a single account, `None` if it does not exist
    fn get_account<'a>(&'a self, address: &'a Pubkey) -> BoxFuture<'a, Result<Option<RawAccount>>>;

    /// Fetch every account owned by `program_id`
    fn get_program_accounts<'a>(
        &'a self,
        program_id: &'a Pubkey,
    ) -> BoxFuture<'a, Result<Vec<RawAccount>>>;
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct WithContext<T> {
    value: T,
}

/// Account as encoded by the RPC with `"encoding": "base64"`
#[derive(Debug, Deserialize)]
struct UiAccount {
    /// `[payload, encoding]`
    data: (String, String),
    owner: String,
}

#[derive(Debug, Deserialize)]
struct KeyedUiAccount {
    pubkey: String,
    account: UiAccount,
}

fn parse_rpc_pubkey(s: &str) -> Result<Pubkey> {
    Pubkey::from_str(s).map_err(|e| BackendError::Rpc(format!("invalid pubkey {s:?}: {e}")))
}

impl UiAccount {
    fn into_raw(self, address: Pubkey) -> Result<RawAccount> {
        let (payload, encoding) = self.data;
        if encoding != "base64" {
            return Err(BackendError::Rpc(format!(
                "unexpected account encoding {encoding:?}"
            )));
        }
        let data = STANDARD
            .decode(payload)
            .map_err(|e| BackendError::Rpc(format!("invalid account data: {e}")))?;

        Ok(RawAccount {
            address,
            owner: parse_rpc_pubkey(&self.owner)?,
            data,
        })
    }
}

impl KeyedUiAccount {
    fn into_raw(self) -> Result<RawAccount> {
        let address = parse_rpc_pubkey(&self.pubkey)?;
        self.account.into_raw(address)
    }
}

/// Converts a program-account listing. Entries that cannot be converted are
/// logged and skipped so the rest of the listing survives.
fn collect_program_accounts(accounts: Vec<KeyedUiAccount>) -> Vec<RawAccount> {
    accounts
        .into_iter()
        .filter_map(|keyed| {
            let pubkey = keyed.pubkey.clone();
            match keyed.into_raw() {
                Ok(account) => Some(account),
                Err(err) => {
                    warn!(account = %pubkey, error = %err, "Skipping unreadable program account");
                    None
                }
            }
        })
        .collect()
}

fn account_config() -> Value {
    json!({ "encoding": "base64", "commitment": "confirmed" })
}

/// Ledger JSON-RPC client
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
}

impl RpcClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        debug!(method, url = %self.url, "RPC request");

        let response: RpcResponse<T> = self
            .http
            .post(&self.url)
            .json(&RpcRequest {
                jsonrpc: "2.0",
                id: 1,
                method,
                params,
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        unwrap_rpc_response(method, response)
    }
}

fn unwrap_rpc_response<T>(method: &str, response: RpcResponse<T>) -> Result<T> {
    if let Some(err) = response.error {
        return Err(BackendError::Rpc(format!(
            "{method} failed ({}): {}",
            err.code, err.message
        )));
    }
    response
        .result
        .ok_or_else(|| BackendError::Rpc(format!("{method} returned no result")))
}

impl AccountSource for RpcClient {
    fn get_account<'a>(&'a self, address: &'a Pubkey) -> BoxFuture<'a, Result<Option<RawAccount>>> {
        async move {
            let result: WithContext<Option<UiAccount>> = self
                .call(
                    "getAccountInfo",
                    json!([address.to_string(), account_config()]),
                )
                .await?;
            result
                .value
                .map(|account| account.into_raw(*address))
                .transpose()
        }
        .boxed()
    }

    fn get_program_accounts<'a>(
        &'a self,
        program_id: &'a Pubkey,
    ) -> BoxFuture<'a, Result<Vec<RawAccount>>> {
        async move {
            let accounts: Vec<KeyedUiAccount> = self
                .call(
                    "getProgramAccounts",
                    json!([program_id.to_string(), account_config()]),
                )
                .await?;
            Ok(collect_program_accounts(accounts))
        }
        .boxed()
    }
}
