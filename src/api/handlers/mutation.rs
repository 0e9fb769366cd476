//! Mutating NFT endpoints.
//!
//! Every handler follows the identical pattern, parameterized only by which
//! service method it invokes: bind the chain-discriminated body, delegate,
//! answer an explicit `200 OK` with the service result on success, and
//! classify the failure structurally otherwise. The explicit 200 marks the
//! operation as accepted and processed synchronously; no resource was
//! created in the REST sense.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::instrument;

use crate::api::error::ApiError;
use crate::api::models::{
    BurnRequest, DeployRequest, MintBatchRequest, MintRequest, TransferRequest,
    UpdateRoyaltyRequest,
};
use crate::app_state::AppState;

#[utoipa::path(
    post,
    path = "/v3/nft/transaction",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Transaction id of the transfer"),
        (status = 400, description = "Validation failed", body = [crate::error::ValidationIssue]),
        (status = 500, description = "Operation failed", body = crate::api::models::ErrorResponse)
    ),
    tag = "NFT"
)]
/// Transfers a token to another account.
#[instrument(skip(state, body), fields(chain = %body.chain()))]
pub async fn transfer(
    State(state): State<AppState>,
    Json(body): Json<TransferRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let result = state
        .service
        .transfer(body)
        .await
        .map_err(ApiError::classify)?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    post,
    path = "/v3/nft/mint",
    request_body = MintRequest,
    responses(
        (status = 200, description = "Transaction id of the mint"),
        (status = 400, description = "Validation failed", body = [crate::error::ValidationIssue]),
        (status = 500, description = "Operation failed", body = crate::api::models::ErrorResponse)
    ),
    tag = "NFT"
)]
/// Mints a single token.
#[instrument(skip(state, body), fields(chain = %body.chain()))]
pub async fn mint(
    State(state): State<AppState>,
    Json(body): Json<MintRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let result = state.service.mint(body).await.map_err(ApiError::classify)?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    post,
    path = "/v3/nft/mint/batch",
    request_body = MintBatchRequest,
    responses(
        (status = 200, description = "Transaction id(s) of the batch mint"),
        (status = 400, description = "Validation failed", body = [crate::error::ValidationIssue]),
        (status = 500, description = "Operation failed", body = crate::api::models::ErrorResponse)
    ),
    tag = "NFT"
)]
/// Mints a batch of tokens.
#[instrument(skip(state, body), fields(chain = %body.chain()))]
pub async fn mint_batch(
    State(state): State<AppState>,
    Json(body): Json<MintBatchRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let result = state
        .service
        .mint_batch(body)
        .await
        .map_err(ApiError::classify)?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    put,
    path = "/v3/nft/royalty",
    request_body = UpdateRoyaltyRequest,
    responses(
        (status = 200, description = "Transaction id of the update"),
        (status = 400, description = "Validation failed", body = [crate::error::ValidationIssue]),
        (status = 500, description = "Operation failed", body = crate::api::models::ErrorResponse)
    ),
    tag = "NFT"
)]
/// Updates the cashback record of a token for its author.
#[instrument(skip(state, body), fields(chain = %body.chain()))]
pub async fn update_royalty(
    State(state): State<AppState>,
    Json(body): Json<UpdateRoyaltyRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let result = state
        .service
        .update_royalty(body)
        .await
        .map_err(ApiError::classify)?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    post,
    path = "/v3/nft/burn",
    request_body = BurnRequest,
    responses(
        (status = 200, description = "Transaction id of the burn"),
        (status = 400, description = "Validation failed", body = [crate::error::ValidationIssue]),
        (status = 500, description = "Operation failed", body = crate::api::models::ErrorResponse)
    ),
    tag = "NFT"
)]
/// Burns a token.
#[instrument(skip(state, body), fields(chain = %body.chain()))]
pub async fn burn(
    State(state): State<AppState>,
    Json(body): Json<BurnRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let result = state.service.burn(body).await.map_err(ApiError::classify)?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    post,
    path = "/v3/nft/deploy",
    request_body = DeployRequest,
    responses(
        (status = 200, description = "Descriptor of the deployed contract"),
        (status = 400, description = "Validation failed", body = [crate::error::ValidationIssue]),
        (status = 500, description = "Operation failed", body = crate::api::models::ErrorResponse)
    ),
    tag = "NFT"
)]
/// Deploys a new NFT contract.
#[instrument(skip(state, body), fields(chain = %body.chain()))]
pub async fn deploy(
    State(state): State<AppState>,
    Json(body): Json<DeployRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let result = state
        .service
        .deploy(body)
        .await
        .map_err(ApiError::classify)?;

    Ok((StatusCode::OK, Json(result)))
}
