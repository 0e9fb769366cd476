//! Axum server setup and routing.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{docs::ApiDoc, handlers, middleware as api_middleware};
use crate::app_state::AppState;
use crate::error::{NftError, NftResult};

/// Build the `/v3/nft` router around the given state.
///
/// Kept separate from [`run_server`] so tests can drive the routes without
/// binding a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v3/nft/balance/:chain/:contractAddress/:address",
            get(handlers::lookup::get_balance),
        )
        .route(
            "/v3/nft/transaction/:chain/:txId",
            get(handlers::lookup::get_transaction),
        )
        .route(
            "/v3/nft/transaction",
            post(handlers::mutation::transfer),
        )
        .route(
            "/v3/nft/address/:chain/:txId",
            get(handlers::lookup::get_contract_address),
        )
        .route(
            "/v3/nft/metadata/:chain/:contractAddress/:tokenId",
            get(handlers::lookup::get_metadata),
        )
        .route(
            "/v3/nft/royalty/:chain/:contractAddress/:tokenId",
            get(handlers::lookup::get_royalty),
        )
        .route("/v3/nft/royalty", put(handlers::mutation::update_royalty))
        .route("/v3/nft/mint", post(handlers::mutation::mint))
        .route("/v3/nft/mint/batch", post(handlers::mutation::mint_batch))
        .route("/v3/nft/burn", post(handlers::mutation::burn))
        .route("/v3/nft/deploy", post(handlers::mutation::deploy))
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}

/// Run the Axum API server.
///
/// # Errors
///
/// Returns an error if the listen socket cannot be bound or the server
/// loop fails.
pub async fn run_server(
    state: AppState,
    port: u16,
    rate_limit_rpm: u32,
    cors_origins: Vec<String>,
) -> NftResult<()> {
    let limiter = api_middleware::build_rate_limiter(rate_limit_rpm);
    let cors = build_cors_layer(cors_origins);

    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(middleware::from_fn(api_middleware::log_requests))
        .layer(middleware::from_fn(move |req, next| {
            api_middleware::rate_limit(limiter.clone(), req, next)
        }));

    let app = build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware_stack);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "Starting NFT gateway");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| NftError::unexpected(format!("failed to bind {addr}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| NftError::unexpected(format!("server error: {e}")))
}

fn build_cors_layer(origins: Vec<String>) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let mut layer = CorsLayer::new();
        for origin in origins {
            if let Ok(header) = origin.parse::<HeaderValue>() {
                layer = layer.clone().allow_origin(header);
            }
        }
        layer
    }
}
