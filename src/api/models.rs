//! API request and response models.
//!
//! Request bodies are tagged unions keyed by the `chain` discriminator, one
//! variant per supported network. Deserialization is the dispatch table:
//! a body whose fields do not match its chain's shape never reaches a
//! handler.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::chain::Chain;

/// Path parameters for the balance endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
#[serde(rename_all = "camelCase")]
pub struct BalancePath {
    /// Target chain
    pub chain: Chain,
    /// NFT contract address
    pub contract_address: String,
    /// Owner account address
    pub address: String,
}

/// Path parameters for transaction-scoped lookups.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
#[serde(rename_all = "camelCase")]
pub struct TxPath {
    /// Target chain
    pub chain: Chain,
    /// Transaction identifier
    pub tx_id: String,
}

/// Path parameters for token-scoped lookups (metadata, royalty).
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
#[serde(rename_all = "camelCase")]
pub struct TokenPath {
    /// Target chain
    pub chain: Chain,
    /// NFT contract address
    pub contract_address: String,
    /// Token identifier
    pub token_id: String,
}

/// Optional query parameters for the metadata endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AccountQuery {
    /// Account the metadata lookup is scoped to (Flow only)
    pub account: Option<String>,
}

/// Custom transaction fee for EVM chains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    /// Gas limit, in gas units
    pub gas_limit: String,
    /// Gas price, in wei
    pub gas_price: String,
}

/// Currency a Celo transaction pays its fee in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FeeCurrency {
    /// Native CELO
    #[serde(rename = "CELO")]
    Celo,
    /// Celo Dollar
    #[serde(rename = "CUSD")]
    Cusd,
    /// Celo Euro
    #[serde(rename = "CEUR")]
    Ceur,
}

/// Ethereum ERC-721 transfer payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EthTransfer {
    /// Recipient address
    pub to: String,
    /// Token to transfer
    pub token_id: String,
    /// NFT contract address
    pub contract_address: String,
    /// Private key of the sending account
    pub from_private_key: String,
    /// Transaction nonce override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Custom fee override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

/// Celo ERC-721 transfer payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CeloTransfer {
    /// Recipient address
    pub to: String,
    /// Token to transfer
    pub token_id: String,
    /// NFT contract address
    pub contract_address: String,
    /// Private key of the sending account
    pub from_private_key: String,
    /// Currency the fee is paid in
    pub fee_currency: FeeCurrency,
    /// Transaction nonce override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Custom fee override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

/// Flow NFT transfer payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlowTransfer {
    /// Recipient address
    pub to: String,
    /// Token to transfer
    pub token_id: String,
    /// NFT contract address
    pub contract_address: String,
    /// Signing account address
    pub account: String,
    /// Signing key (mutually exclusive with mnemonic)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Signing mnemonic (requires index)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
    /// Derivation index for the mnemonic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

/// Ethereum ERC-721 mint payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EthMint {
    /// Recipient of the minted token
    pub to: String,
    /// Token identifier to assign
    pub token_id: String,
    /// NFT contract address
    pub contract_address: String,
    /// Metadata URL of the token
    pub url: String,
    /// Private key of the minting account
    pub from_private_key: String,
    /// Provenance cashback recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_addresses: Option<Vec<String>>,
    /// Cashback values, one per author address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cashback_values: Option<Vec<String>>,
    /// Transaction nonce override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Custom fee override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

/// Celo ERC-721 mint payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CeloMint {
    /// Recipient of the minted token
    pub to: String,
    /// Token identifier to assign
    pub token_id: String,
    /// NFT contract address
    pub contract_address: String,
    /// Metadata URL of the token
    pub url: String,
    /// Private key of the minting account
    pub from_private_key: String,
    /// Currency the fee is paid in
    pub fee_currency: FeeCurrency,
    /// Provenance cashback recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_addresses: Option<Vec<String>>,
    /// Cashback values, one per author address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cashback_values: Option<Vec<String>>,
    /// Transaction nonce override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Custom fee override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

/// Flow NFT mint payload. Token ids are assigned by the contract.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlowMint {
    /// Recipient of the minted token
    pub to: String,
    /// Metadata URL of the token
    pub url: String,
    /// NFT contract address
    pub contract_address: String,
    /// Signing account address
    pub account: String,
    /// Signing key (mutually exclusive with mnemonic)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Signing mnemonic (requires index)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
    /// Derivation index for the mnemonic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

/// Ethereum ERC-721 batch mint payload. The arrays are parallel.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EthMintBatch {
    /// Recipients, one per minted token
    pub to: Vec<String>,
    /// Token identifiers, one per recipient
    pub token_id: Vec<String>,
    /// Metadata URLs, one per token
    pub url: Vec<String>,
    /// NFT contract address
    pub contract_address: String,
    /// Private key of the minting account
    pub from_private_key: String,
    /// Transaction nonce override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Custom fee override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

/// Celo ERC-721 batch mint payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CeloMintBatch {
    /// Recipients, one per minted token
    pub to: Vec<String>,
    /// Token identifiers, one per recipient
    pub token_id: Vec<String>,
    /// Metadata URLs, one per token
    pub url: Vec<String>,
    /// NFT contract address
    pub contract_address: String,
    /// Private key of the minting account
    pub from_private_key: String,
    /// Currency the fee is paid in
    pub fee_currency: FeeCurrency,
    /// Transaction nonce override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Custom fee override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

/// Flow NFT batch mint payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlowMintBatch {
    /// Recipients, one per minted token
    pub to: Vec<String>,
    /// Metadata URLs, one per token
    pub url: Vec<String>,
    /// NFT contract address
    pub contract_address: String,
    /// Signing account address
    pub account: String,
    /// Signing key (mutually exclusive with mnemonic)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Signing mnemonic (requires index)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
    /// Derivation index for the mnemonic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

/// Ethereum ERC-721 burn payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EthBurn {
    /// Token to burn
    pub token_id: String,
    /// NFT contract address
    pub contract_address: String,
    /// Private key of the owning account
    pub from_private_key: String,
    /// Transaction nonce override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Custom fee override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

/// Celo ERC-721 burn payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CeloBurn {
    /// Token to burn
    pub token_id: String,
    /// NFT contract address
    pub contract_address: String,
    /// Private key of the owning account
    pub from_private_key: String,
    /// Currency the fee is paid in
    pub fee_currency: FeeCurrency,
    /// Transaction nonce override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Custom fee override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

/// Flow NFT burn payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlowBurn {
    /// Token to burn
    pub token_id: String,
    /// NFT contract address
    pub contract_address: String,
    /// Signing account address
    pub account: String,
    /// Signing key (mutually exclusive with mnemonic)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Signing mnemonic (requires index)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
    /// Derivation index for the mnemonic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

/// Ethereum ERC-721 contract deploy payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EthDeploy {
    /// Collection name
    pub name: String,
    /// Collection symbol
    pub symbol: String,
    /// Private key of the deploying account
    pub from_private_key: String,
    /// Transaction nonce override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Custom fee override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

/// Celo ERC-721 contract deploy payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CeloDeploy {
    /// Collection name
    pub name: String,
    /// Collection symbol
    pub symbol: String,
    /// Private key of the deploying account
    pub from_private_key: String,
    /// Currency the fee is paid in
    pub fee_currency: FeeCurrency,
    /// Transaction nonce override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Custom fee override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

/// Flow NFT contract deploy payload. The contract template is fixed; only
/// the deploying account is configurable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlowDeploy {
    /// Deploying account address
    pub account: String,
    /// Signing key (mutually exclusive with mnemonic)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Signing mnemonic (requires index)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
    /// Derivation index for the mnemonic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

/// Ethereum royalty/cashback update payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EthRoyaltyUpdate {
    /// Token whose cashback record changes
    pub token_id: String,
    /// NFT contract address
    pub contract_address: String,
    /// New cashback value for the author
    pub cashback_value: String,
    /// Private key of the author account
    pub from_private_key: String,
    /// Transaction nonce override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Custom fee override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

/// Celo royalty/cashback update payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CeloRoyaltyUpdate {
    /// Token whose cashback record changes
    pub token_id: String,
    /// NFT contract address
    pub contract_address: String,
    /// New cashback value for the author
    pub cashback_value: String,
    /// Private key of the author account
    pub from_private_key: String,
    /// Currency the fee is paid in
    pub fee_currency: FeeCurrency,
    /// Transaction nonce override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Custom fee override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

/// Chain-discriminated transfer request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "chain")]
pub enum TransferRequest {
    /// Ethereum variant
    #[serde(rename = "ETH")]
    Eth(EthTransfer),
    /// Celo variant
    #[serde(rename = "CELO")]
    Celo(CeloTransfer),
    /// Flow variant
    #[serde(rename = "FLOW")]
    Flow(FlowTransfer),
}

/// Chain-discriminated mint request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "chain")]
pub enum MintRequest {
    /// Ethereum variant
    #[serde(rename = "ETH")]
    Eth(EthMint),
    /// Celo variant
    #[serde(rename = "CELO")]
    Celo(CeloMint),
    /// Flow variant
    #[serde(rename = "FLOW")]
    Flow(FlowMint),
}

/// Chain-discriminated batch-mint request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "chain")]
pub enum MintBatchRequest {
    /// Ethereum variant
    #[serde(rename = "ETH")]
    Eth(EthMintBatch),
    /// Celo variant
    #[serde(rename = "CELO")]
    Celo(CeloMintBatch),
    /// Flow variant
    #[serde(rename = "FLOW")]
    Flow(FlowMintBatch),
}

/// Chain-discriminated burn request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "chain")]
pub enum BurnRequest {
    /// Ethereum variant
    #[serde(rename = "ETH")]
    Eth(EthBurn),
    /// Celo variant
    #[serde(rename = "CELO")]
    Celo(CeloBurn),
    /// Flow variant
    #[serde(rename = "FLOW")]
    Flow(FlowBurn),
}

/// Chain-discriminated contract deploy request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "chain")]
pub enum DeployRequest {
    /// Ethereum variant
    #[serde(rename = "ETH")]
    Eth(EthDeploy),
    /// Celo variant
    #[serde(rename = "CELO")]
    Celo(CeloDeploy),
    /// Flow variant
    #[serde(rename = "FLOW")]
    Flow(FlowDeploy),
}

/// Chain-discriminated royalty update request.
///
/// Cashback updates exist only on the EVM chains; there is deliberately no
/// Flow variant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "chain")]
pub enum UpdateRoyaltyRequest {
    /// Ethereum variant
    #[serde(rename = "ETH")]
    Eth(EthRoyaltyUpdate),
    /// Celo variant
    #[serde(rename = "CELO")]
    Celo(CeloRoyaltyUpdate),
}

impl TransferRequest {
    /// Chain this request targets.
    #[must_use]
    pub const fn chain(&self) -> Chain {
        match self {
            Self::Eth(_) => Chain::Ethereum,
            Self::Celo(_) => Chain::Celo,
            Self::Flow(_) => Chain::Flow,
        }
    }
}

impl MintRequest {
    /// Chain this request targets.
    #[must_use]
    pub const fn chain(&self) -> Chain {
        match self {
            Self::Eth(_) => Chain::Ethereum,
            Self::Celo(_) => Chain::Celo,
            Self::Flow(_) => Chain::Flow,
        }
    }
}

impl MintBatchRequest {
    /// Chain this request targets.
    #[must_use]
    pub const fn chain(&self) -> Chain {
        match self {
            Self::Eth(_) => Chain::Ethereum,
            Self::Celo(_) => Chain::Celo,
            Self::Flow(_) => Chain::Flow,
        }
    }
}

impl BurnRequest {
    /// Chain this request targets.
    #[must_use]
    pub const fn chain(&self) -> Chain {
        match self {
            Self::Eth(_) => Chain::Ethereum,
            Self::Celo(_) => Chain::Celo,
            Self::Flow(_) => Chain::Flow,
        }
    }
}

impl DeployRequest {
    /// Chain this request targets.
    #[must_use]
    pub const fn chain(&self) -> Chain {
        match self {
            Self::Eth(_) => Chain::Ethereum,
            Self::Celo(_) => Chain::Celo,
            Self::Flow(_) => Chain::Flow,
        }
    }
}

impl UpdateRoyaltyRequest {
    /// Chain this request targets.
    #[must_use]
    pub const fn chain(&self) -> Chain {
        match self {
            Self::Eth(_) => Chain::Ethereum,
            Self::Celo(_) => Chain::Celo,
        }
    }
}

/// Error response body for generic and upstream failures.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// HTTP status of the response
    pub status_code: u16,
    /// Machine-readable error code
    pub error_code: String,
    /// Human-readable message
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status, always "up" when reachable
    pub status: String,
    /// Application version
    pub version: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mint_dispatches_on_chain_tag() {
        let body = json!({
            "chain": "ETH",
            "to": "0x7c21d9b8c531cbfb7225f4d8f5d87ac5e4e15e15",
            "tokenId": "1",
            "contractAddress": "0x89205a3a3b2a69de6dbf7f01ed13b2108b2c43e7",
            "url": "https://example.com/meta/1",
            "fromPrivateKey": "0x05ea79ae9dba4a28b9b2da99ba868ddb8dc4d9c5fca0ce8e6d3f0b8a1b2c3d4e"
        });

        let req: MintRequest = serde_json::from_value(body).unwrap();
        assert!(matches!(req, MintRequest::Eth(_)));
        assert_eq!(req.chain(), Chain::Ethereum);
    }

    #[test]
    fn test_celo_shape_requires_fee_currency() {
        let body = json!({
            "chain": "CELO",
            "to": "0x7c21d9b8c531cbfb7225f4d8f5d87ac5e4e15e15",
            "tokenId": "1",
            "contractAddress": "0x89205a3a3b2a69de6dbf7f01ed13b2108b2c43e7",
            "fromPrivateKey": "0x05ea79ae9dba4a28b9b2da99ba868ddb8dc4d9c5fca0ce8e6d3f0b8a1b2c3d4e"
        });

        let req: Result<TransferRequest, _> = serde_json::from_value(body);
        assert!(req.is_err());
    }

    #[test]
    fn test_missing_chain_tag_rejected() {
        let body = json!({
            "tokenId": "1",
            "contractAddress": "0x89205a3a3b2a69de6dbf7f01ed13b2108b2c43e7",
            "fromPrivateKey": "0x05ea79ae9dba4a28b9b2da99ba868ddb8dc4d9c5fca0ce8e6d3f0b8a1b2c3d4e"
        });

        let req: Result<BurnRequest, _> = serde_json::from_value(body);
        assert!(req.is_err());
    }

    #[test]
    fn test_royalty_update_has_no_flow_variant() {
        let body = json!({
            "chain": "FLOW",
            "tokenId": "1",
            "contractAddress": "0x89205a3a3b2a69de6dbf7f01ed13b2108b2c43e7",
            "cashbackValue": "0.1",
            "fromPrivateKey": "0x05ea79ae9dba4a28b9b2da99ba868ddb8dc4d9c5fca0ce8e6d3f0b8a1b2c3d4e"
        });

        let req: Result<UpdateRoyaltyRequest, _> = serde_json::from_value(body);
        assert!(req.is_err());
    }

    #[test]
    fn test_flow_transfer_parses_with_mnemonic() {
        let body = json!({
            "chain": "FLOW",
            "to": "0x2d55ab98bd36a2d1",
            "tokenId": "12",
            "contractAddress": "0x716db717f9240d8a",
            "account": "0x955cd3f17b2fd8ad",
            "mnemonic": "urge pulp usage sister evidence arrest palm math please chief egg abuse",
            "index": 0
        });

        let req: TransferRequest = serde_json::from_value(body).unwrap();
        match req {
            TransferRequest::Flow(flow) => {
                assert!(flow.private_key.is_none());
                assert_eq!(flow.index, Some(0));
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_serialization_keeps_chain_tag() {
        let req = BurnRequest::Eth(EthBurn {
            token_id: "3".to_string(),
            contract_address: "0x89205a3a3b2a69de6dbf7f01ed13b2108b2c43e7".to_string(),
            from_private_key:
                "0x05ea79ae9dba4a28b9b2da99ba868ddb8dc4d9c5fca0ce8e6d3f0b8a1b2c3d4e".to_string(),
            nonce: None,
            fee: None,
        });

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["chain"], "ETH");
        assert_eq!(value["tokenId"], "3");
        assert!(value.get("nonce").is_none());
    }
}
