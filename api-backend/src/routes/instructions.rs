//! Instruction building endpoints
//!
//! Each endpoint validates its request and returns an unsigned instruction
//! for the client's wallet to sign and submit.

use axum::{extract::State, routing::post, Json, Router};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use tracing::info;
use vault_codec::{
    build_close_vault, build_create_vault, build_donate, build_update_vault, format_lamports_to_sol,
    generate_slug, parse_donation_lamports, CloseVaultParams, CreateVaultParams, DonateParams,
    DonationSplit, UpdateVaultParams, ValidationError,
};

use crate::{
    error::{BackendError, Result},
    routes::AppState,
    services::{fetch_vault, VaultEntry},
    types::{
        CloseVaultRequest, CreateVaultRequest, DonateRequest, DonateResponse, InstructionResponse,
        OwnerShare, UpdateVaultRequest,
    },
};

/// Create instructions router
pub fn instructions_router(state: AppState) -> Router {
    Router::new()
        .route("/api/instructions/create", post(create_vault))
        .route("/api/instructions/update", post(update_vault))
        .route("/api/instructions/close", post(close_vault))
        .route("/api/instructions/donate", post(donate))
        .with_state(state)
}

/// Parse a base58 public key
fn parse_pubkey(s: &str) -> Result<Pubkey> {
    Pubkey::from_str(s).map_err(|e| BackendError::InvalidPubkey(format!("{s:?}: {e}")))
}

/// Fetch the vault and make sure `wallet` is one of its owners
async fn owned_vault(
    state: &AppState,
    slug: &str,
    wallet: &Pubkey,
    action: &'static str,
) -> Result<VaultEntry> {
    let entry = fetch_vault(state.accounts.as_ref(), &state.config.program_id, slug).await?;
    if !entry.record.is_owner(wallet) {
        return Err(BackendError::NotOwner(action));
    }
    Ok(entry)
}

/// Build create_vault
///
/// POST /api/instructions/create
async fn create_vault(
    State(state): State<AppState>,
    Json(req): Json<CreateVaultRequest>,
) -> Result<Json<InstructionResponse>> {
    let payer = parse_pubkey(&req.payer)?;
    let owners = req
        .owners
        .iter()
        .map(|owner| parse_pubkey(owner))
        .collect::<Result<Vec<_>>>()?;

    let banned = &state.config.banned_slugs;
    let slug = match req.slug {
        Some(slug) => {
            if banned.matches(&slug) {
                return Err(ValidationError::BannedSlug.into());
            }
            slug
        }
        None => generate_slug(&req.name, banned, &mut rand::thread_rng())?,
    };

    let params = CreateVaultParams {
        payer,
        owners,
        threshold: req.threshold,
        name: req.name,
        slug,
        url: req.url,
        description: req.description,
        categories: req.categories,
    };
    let built = build_create_vault(&state.config.program_id, &params)?;

    info!(
        slug = %params.slug,
        owners = params.owners.len(),
        pda = %built.vault_pda,
        "Built create_vault instruction"
    );

    Ok(Json(InstructionResponse::from(&built)))
}

/// Build update_vault
///
/// POST /api/instructions/update
async fn update_vault(
    State(state): State<AppState>,
    Json(req): Json<UpdateVaultRequest>,
) -> Result<Json<InstructionResponse>> {
    let owner = parse_pubkey(&req.owner)?;

    let params = UpdateVaultParams {
        owner,
        slug: req.slug,
        name: req.name,
        url: req.url,
        description: req.description,
        categories: req.categories,
    };
    params.validate()?;

    let entry = owned_vault(&state, &params.slug, &owner, "update").await?;
    let params = UpdateVaultParams {
        slug: entry.record.slug,
        ..params
    };
    let built = build_update_vault(&state.config.program_id, &params)?;

    info!(slug = %params.slug, pda = %built.vault_pda, "Built update_vault instruction");

    Ok(Json(InstructionResponse::from(&built)))
}

/// Build close_vault
///
/// POST /api/instructions/close
async fn close_vault(
    State(state): State<AppState>,
    Json(req): Json<CloseVaultRequest>,
) -> Result<Json<InstructionResponse>> {
    let owner = parse_pubkey(&req.owner)?;

    let entry = owned_vault(&state, &req.slug, &owner, "close").await?;
    let params = CloseVaultParams {
        owner,
        slug: entry.record.slug,
    };
    let built = build_close_vault(&state.config.program_id, &params)?;

    info!(slug = %params.slug, pda = %built.vault_pda, "Built close_vault instruction");

    Ok(Json(InstructionResponse::from(&built)))
}

/// Build donate, splitting the amount across the vault's owners
///
/// POST /api/instructions/donate
async fn donate(
    State(state): State<AppState>,
    Json(req): Json<DonateRequest>,
) -> Result<Json<DonateResponse>> {
    let donor = parse_pubkey(&req.donor)?;
    let lamports = parse_donation_lamports(&req.amount)?;

    if state.config.banned_slugs.matches(&req.slug) {
        return Err(ValidationError::CampaignUnavailable.into());
    }
    let entry = fetch_vault(state.accounts.as_ref(), &state.config.program_id, &req.slug).await?;
    let split = DonationSplit::new(lamports, entry.record.owners.len())?;

    let params = DonateParams {
        donor,
        slug: entry.record.slug,
        owners: entry.record.owners,
        lamports,
    };
    let built = build_donate(&state.config.program_id, &params)?;

    info!(
        slug = %params.slug,
        lamports,
        owners = params.owners.len(),
        "Built donate instruction"
    );

    let distribution = params
        .owners
        .iter()
        .zip(split.shares())
        .map(|(owner, lamports)| OwnerShare {
            owner: owner.to_string(),
            lamports: lamports.to_string(),
        })
        .collect();

    Ok(Json(DonateResponse {
        instruction: InstructionResponse::from(&built),
        lamports: lamports.to_string(),
        amount_sol: format_lamports_to_sol(lamports),
        per_owner: split.per_owner.to_string(),
        remainder: split.remainder.to_string(),
        distribution,
    }))
}
