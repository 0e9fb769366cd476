//! OpenAPI documentation for the REST API.

use utoipa::OpenApi;

use crate::api::handlers;

/// OpenAPI documentation for the REST API.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::lookup::get_balance,
        handlers::lookup::get_transaction,
        handlers::lookup::get_contract_address,
        handlers::lookup::get_metadata,
        handlers::lookup::get_royalty,
        handlers::mutation::transfer,
        handlers::mutation::mint,
        handlers::mutation::mint_batch,
        handlers::mutation::update_royalty,
        handlers::mutation::burn,
        handlers::mutation::deploy,
    ),
    components(schemas(
        crate::chain::Chain,
        crate::error::ValidationIssue,
        crate::api::models::Fee,
        crate::api::models::FeeCurrency,
        crate::api::models::TransferRequest,
        crate::api::models::MintRequest,
        crate::api::models::MintBatchRequest,
        crate::api::models::BurnRequest,
        crate::api::models::DeployRequest,
        crate::api::models::UpdateRoyaltyRequest,
        crate::api::models::EthTransfer,
        crate::api::models::CeloTransfer,
        crate::api::models::FlowTransfer,
        crate::api::models::EthMint,
        crate::api::models::CeloMint,
        crate::api::models::FlowMint,
        crate::api::models::EthMintBatch,
        crate::api::models::CeloMintBatch,
        crate::api::models::FlowMintBatch,
        crate::api::models::EthBurn,
        crate::api::models::CeloBurn,
        crate::api::models::FlowBurn,
        crate::api::models::EthDeploy,
        crate::api::models::CeloDeploy,
        crate::api::models::FlowDeploy,
        crate::api::models::EthRoyaltyUpdate,
        crate::api::models::CeloRoyaltyUpdate,
        crate::api::models::ErrorResponse,
        crate::api::models::HealthResponse,
    )),
    tags(
        (name = "NFT", description = "NFT lifecycle operations"),
        (name = "Health", description = "Health check endpoints"),
    ),
    info(
        title = "NFT Gateway API",
        version = "0.1.0",
        description = "HTTP gateway for NFT lifecycle operations on Celo, Ethereum and Flow",
    )
)]
pub struct ApiDoc;
