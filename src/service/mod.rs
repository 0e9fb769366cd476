//! Operation-service seam.
//!
//! The gateway never talks to a blockchain itself. Every endpoint delegates
//! to exactly one method of [`NftOperations`], an injected collaborator that
//! performs the actual chain interaction (signing, broadcast, contract
//! calls). The production implementation is [`RemoteNftService`], which
//! forwards operations to a hosted blockchain API; tests substitute a stub.

use async_trait::async_trait;
use serde_json::Value;

use crate::api::models::{
    BurnRequest, DeployRequest, MintBatchRequest, MintRequest, TransferRequest,
    UpdateRoyaltyRequest,
};
use crate::chain::Chain;
use crate::error::NftResult;

pub mod remote;
pub mod validate;

pub use remote::RemoteNftService;

/// Capability set of the delegated blockchain layer, one method per
/// endpoint.
///
/// Results are opaque JSON passed through to the client verbatim; the
/// gateway never inspects them. Argument order mirrors the upstream API and
/// must not be changed by callers.
#[async_trait]
pub trait NftOperations: Send + Sync {
    /// Token ids owned by `address` under `contract_address`.
    async fn tokens_of_owner(
        &self,
        chain: Chain,
        address: &str,
        contract_address: &str,
    ) -> NftResult<Value>;

    /// Detail of an NFT transaction.
    async fn transaction(&self, chain: Chain, tx_id: &str) -> NftResult<Value>;

    /// Address of the contract deployed by `tx_id`.
    async fn contract_address(&self, chain: Chain, tx_id: &str) -> NftResult<Value>;

    /// Metadata of a token, optionally scoped to an account.
    async fn metadata(
        &self,
        chain: Chain,
        token_id: &str,
        contract_address: &str,
        account: Option<&str>,
    ) -> NftResult<Value>;

    /// Royalty/cashback record of a token.
    async fn royalty(
        &self,
        chain: Chain,
        token_id: &str,
        contract_address: &str,
    ) -> NftResult<Value>;

    /// Transfer a token to another account.
    async fn transfer(&self, request: TransferRequest) -> NftResult<Value>;

    /// Mint a single token.
    async fn mint(&self, request: MintRequest) -> NftResult<Value>;

    /// Mint a batch of tokens.
    async fn mint_batch(&self, request: MintBatchRequest) -> NftResult<Value>;

    /// Update the cashback record of a token.
    async fn update_royalty(&self, request: UpdateRoyaltyRequest) -> NftResult<Value>;

    /// Burn a token.
    async fn burn(&self, request: BurnRequest) -> NftResult<Value>;

    /// Deploy a new NFT contract.
    async fn deploy(&self, request: DeployRequest) -> NftResult<Value>;
}
