//! Read-only NFT endpoints.
//!
//! Each handler binds its path/query bundle, invokes one service method with
//! the arguments in documented order, and passes the result through
//! untouched. Lookups have no validation step, so every failure surfaces
//! through the generic error path.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use tracing::instrument;

use crate::api::error::ApiError;
use crate::api::models::{AccountQuery, BalancePath, TokenPath, TxPath};
use crate::app_state::AppState;

#[utoipa::path(
    get,
    path = "/v3/nft/balance/{chain}/{contractAddress}/{address}",
    params(BalancePath),
    responses(
        (status = 200, description = "Token ids owned by the address"),
        (status = 500, description = "Operation failed", body = crate::api::models::ErrorResponse)
    ),
    tag = "NFT"
)]
/// Returns the token ids an address owns under a contract.
#[instrument(skip(state), fields(chain = %path.chain))]
pub async fn get_balance(
    State(state): State<AppState>,
    Path(path): Path<BalancePath>,
) -> Result<Json<Value>, ApiError> {
    let tokens = state
        .service
        .tokens_of_owner(path.chain, &path.address, &path.contract_address)
        .await
        .map_err(ApiError::lookup)?;

    Ok(Json(tokens))
}

#[utoipa::path(
    get,
    path = "/v3/nft/transaction/{chain}/{txId}",
    params(TxPath),
    responses(
        (status = 200, description = "Transaction detail"),
        (status = 500, description = "Operation failed", body = crate::api::models::ErrorResponse)
    ),
    tag = "NFT"
)]
/// Returns the detail of an NFT transaction.
#[instrument(skip(state), fields(chain = %path.chain))]
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(path): Path<TxPath>,
) -> Result<Json<Value>, ApiError> {
    let detail = state
        .service
        .transaction(path.chain, &path.tx_id)
        .await
        .map_err(ApiError::lookup)?;

    Ok(Json(detail))
}

#[utoipa::path(
    get,
    path = "/v3/nft/address/{chain}/{txId}",
    params(TxPath),
    responses(
        (status = 200, description = "Deployed contract address"),
        (status = 500, description = "Operation failed", body = crate::api::models::ErrorResponse)
    ),
    tag = "NFT"
)]
/// Returns the contract address created by a deploy transaction.
#[instrument(skip(state), fields(chain = %path.chain))]
pub async fn get_contract_address(
    State(state): State<AppState>,
    Path(path): Path<TxPath>,
) -> Result<Json<Value>, ApiError> {
    let address = state
        .service
        .contract_address(path.chain, &path.tx_id)
        .await
        .map_err(ApiError::lookup)?;

    Ok(Json(address))
}

#[utoipa::path(
    get,
    path = "/v3/nft/metadata/{chain}/{contractAddress}/{tokenId}",
    params(TokenPath, AccountQuery),
    responses(
        (status = 200, description = "Token metadata"),
        (status = 500, description = "Operation failed", body = crate::api::models::ErrorResponse)
    ),
    tag = "NFT"
)]
/// Returns the metadata of a token.
#[instrument(skip(state), fields(chain = %path.chain))]
pub async fn get_metadata(
    State(state): State<AppState>,
    Path(path): Path<TokenPath>,
    Query(query): Query<AccountQuery>,
) -> Result<Json<Value>, ApiError> {
    let metadata = state
        .service
        .metadata(
            path.chain,
            &path.token_id,
            &path.contract_address,
            query.account.as_deref(),
        )
        .await
        .map_err(ApiError::lookup)?;

    Ok(Json(metadata))
}

#[utoipa::path(
    get,
    path = "/v3/nft/royalty/{chain}/{contractAddress}/{tokenId}",
    params(TokenPath),
    responses(
        (status = 200, description = "Royalty record"),
        (status = 500, description = "Operation failed", body = crate::api::models::ErrorResponse)
    ),
    tag = "NFT"
)]
/// Returns the royalty/cashback record of a token.
#[instrument(skip(state), fields(chain = %path.chain))]
pub async fn get_royalty(
    State(state): State<AppState>,
    Path(path): Path<TokenPath>,
) -> Result<Json<Value>, ApiError> {
    let royalty = state
        .service
        .royalty(path.chain, &path.token_id, &path.contract_address)
        .await
        .map_err(ApiError::lookup)?;

    Ok(Json(royalty))
}
