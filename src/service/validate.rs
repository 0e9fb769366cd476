//! Request body validation.
//!
//! Mutation payloads are checked field by field before being forwarded
//! upstream. Each violated rule yields one [`ValidationIssue`]; a non-empty
//! issue list becomes [`NftError::Validation`], which the HTTP layer turns
//! into a 400 carrying the issues verbatim.

use crate::api::models::{
    BurnRequest, CeloBurn, CeloDeploy, CeloMint, CeloMintBatch, CeloRoyaltyUpdate, CeloTransfer,
    DeployRequest, EthBurn, EthDeploy, EthMint, EthMintBatch, EthRoyaltyUpdate, EthTransfer, Fee,
    FlowBurn, FlowDeploy, FlowMint, FlowMintBatch, FlowTransfer, MintBatchRequest, MintRequest,
    TransferRequest, UpdateRoyaltyRequest,
};
use crate::error::{NftError, NftResult, ValidationIssue};

/// Collected issues for one request.
#[derive(Debug, Default)]
struct Issues(Vec<ValidationIssue>);

impl Issues {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(ValidationIssue::new(field, message));
    }

    fn require(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.push(field, format!("{field} must not be empty"));
        }
    }

    fn evm_address(&mut self, field: &str, value: &str) {
        if !is_hex_of_len(value, 40) {
            self.push(field, format!("{field} must be a 0x-prefixed 20-byte address"));
        }
    }

    fn private_key(&mut self, field: &str, value: &str) {
        if !is_hex_of_len(value, 64) {
            self.push(field, format!("{field} must be a 0x-prefixed 32-byte key"));
        }
    }

    fn token_id(&mut self, field: &str, value: &str) {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            self.push(field, format!("{field} must be a numeric token id"));
        }
    }

    fn decimal(&mut self, field: &str, value: &str) {
        match value.parse::<f64>() {
            Ok(v) if v >= 0.0 => {}
            _ => self.push(field, format!("{field} must be a non-negative decimal")),
        }
    }

    fn fee(&mut self, fee: Option<&Fee>) {
        if let Some(fee) = fee {
            if fee.gas_limit.parse::<u64>().is_err() {
                self.push("fee.gasLimit", "fee.gasLimit must be a number");
            }
            if fee.gas_price.parse::<u64>().is_err() {
                self.push("fee.gasPrice", "fee.gasPrice must be a number");
            }
        }
    }

    /// Flow signing: exactly one of privateKey or mnemonic+index.
    fn flow_credentials(
        &mut self,
        private_key: Option<&str>,
        mnemonic: Option<&str>,
        index: Option<u32>,
    ) {
        match (private_key, mnemonic) {
            (Some(_), Some(_)) => {
                self.push("privateKey", "privateKey and mnemonic are mutually exclusive");
            }
            (None, None) => {
                self.push("privateKey", "either privateKey or mnemonic must be present");
            }
            (Some(key), None) => {
                if key.is_empty() {
                    self.push("privateKey", "privateKey must not be empty");
                }
            }
            (None, Some(mnemonic)) => {
                if mnemonic.is_empty() {
                    self.push("mnemonic", "mnemonic must not be empty");
                }
                if index.is_none() {
                    self.push("index", "index is required with mnemonic");
                }
            }
        }
    }

    fn cashback(&mut self, authors: Option<&[String]>, values: Option<&[String]>) {
        match (authors, values) {
            (None, None) => {}
            (Some(authors), Some(values)) => {
                if authors.len() != values.len() {
                    self.push(
                        "cashbackValues",
                        "cashbackValues must match authorAddresses in length",
                    );
                }
                for author in authors {
                    self.evm_address("authorAddresses", author);
                }
                for value in values {
                    self.decimal("cashbackValues", value);
                }
            }
            _ => self.push(
                "authorAddresses",
                "authorAddresses and cashbackValues must be present together",
            ),
        }
    }

    fn parallel_arrays(&mut self, lists: &[(&str, usize)]) {
        if lists.iter().any(|(_, len)| *len == 0) {
            for (field, len) in lists {
                if *len == 0 {
                    self.push(field, format!("{field} must not be empty"));
                }
            }
            return;
        }
        let first = lists[0].1;
        if lists.iter().any(|(_, len)| *len != first) {
            self.push(lists[0].0, "batch arrays must have equal length");
        }
    }

    fn finish(self) -> NftResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(NftError::Validation(self.0))
        }
    }
}

fn is_hex_of_len(value: &str, hex_len: usize) -> bool {
    value
        .strip_prefix("0x")
        .is_some_and(|hex| hex.len() == hex_len && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Validate a transfer request.
pub fn transfer(request: &TransferRequest) -> NftResult<()> {
    let mut issues = Issues::default();
    match request {
        TransferRequest::Eth(body) => eth_transfer(&mut issues, body),
        TransferRequest::Celo(body) => celo_transfer(&mut issues, body),
        TransferRequest::Flow(body) => flow_transfer(&mut issues, body),
    }
    issues.finish()
}

/// Validate a mint request.
pub fn mint(request: &MintRequest) -> NftResult<()> {
    let mut issues = Issues::default();
    match request {
        MintRequest::Eth(body) => eth_mint(&mut issues, body),
        MintRequest::Celo(body) => celo_mint(&mut issues, body),
        MintRequest::Flow(body) => flow_mint(&mut issues, body),
    }
    issues.finish()
}

/// Validate a batch-mint request.
pub fn mint_batch(request: &MintBatchRequest) -> NftResult<()> {
    let mut issues = Issues::default();
    match request {
        MintBatchRequest::Eth(body) => eth_mint_batch(&mut issues, body),
        MintBatchRequest::Celo(body) => celo_mint_batch(&mut issues, body),
        MintBatchRequest::Flow(body) => flow_mint_batch(&mut issues, body),
    }
    issues.finish()
}

/// Validate a burn request.
pub fn burn(request: &BurnRequest) -> NftResult<()> {
    let mut issues = Issues::default();
    match request {
        BurnRequest::Eth(body) => eth_burn(&mut issues, body),
        BurnRequest::Celo(body) => celo_burn(&mut issues, body),
        BurnRequest::Flow(body) => flow_burn(&mut issues, body),
    }
    issues.finish()
}

/// Validate a deploy request.
pub fn deploy(request: &DeployRequest) -> NftResult<()> {
    let mut issues = Issues::default();
    match request {
        DeployRequest::Eth(body) => eth_deploy(&mut issues, body),
        DeployRequest::Celo(body) => celo_deploy(&mut issues, body),
        DeployRequest::Flow(body) => flow_deploy(&mut issues, body),
    }
    issues.finish()
}

/// Validate a royalty update request.
pub fn update_royalty(request: &UpdateRoyaltyRequest) -> NftResult<()> {
    let mut issues = Issues::default();
    match request {
        UpdateRoyaltyRequest::Eth(body) => eth_royalty(&mut issues, body),
        UpdateRoyaltyRequest::Celo(body) => celo_royalty(&mut issues, body),
    }
    issues.finish()
}

fn eth_transfer(issues: &mut Issues, body: &EthTransfer) {
    issues.evm_address("to", &body.to);
    issues.token_id("tokenId", &body.token_id);
    issues.evm_address("contractAddress", &body.contract_address);
    issues.private_key("fromPrivateKey", &body.from_private_key);
    issues.fee(body.fee.as_ref());
}

fn celo_transfer(issues: &mut Issues, body: &CeloTransfer) {
    issues.evm_address("to", &body.to);
    issues.token_id("tokenId", &body.token_id);
    issues.evm_address("contractAddress", &body.contract_address);
    issues.private_key("fromPrivateKey", &body.from_private_key);
    issues.fee(body.fee.as_ref());
}

fn flow_transfer(issues: &mut Issues, body: &FlowTransfer) {
    issues.require("to", &body.to);
    issues.token_id("tokenId", &body.token_id);
    issues.require("contractAddress", &body.contract_address);
    issues.require("account", &body.account);
    issues.flow_credentials(
        body.private_key.as_deref(),
        body.mnemonic.as_deref(),
        body.index,
    );
}

fn eth_mint(issues: &mut Issues, body: &EthMint) {
    issues.evm_address("to", &body.to);
    issues.token_id("tokenId", &body.token_id);
    issues.evm_address("contractAddress", &body.contract_address);
    issues.require("url", &body.url);
    issues.private_key("fromPrivateKey", &body.from_private_key);
    issues.cashback(body.author_addresses.as_deref(), body.cashback_values.as_deref());
    issues.fee(body.fee.as_ref());
}

fn celo_mint(issues: &mut Issues, body: &CeloMint) {
    issues.evm_address("to", &body.to);
    issues.token_id("tokenId", &body.token_id);
    issues.evm_address("contractAddress", &body.contract_address);
    issues.require("url", &body.url);
    issues.private_key("fromPrivateKey", &body.from_private_key);
    issues.cashback(body.author_addresses.as_deref(), body.cashback_values.as_deref());
    issues.fee(body.fee.as_ref());
}

fn flow_mint(issues: &mut Issues, body: &FlowMint) {
    issues.require("to", &body.to);
    issues.require("url", &body.url);
    issues.require("contractAddress", &body.contract_address);
    issues.require("account", &body.account);
    issues.flow_credentials(
        body.private_key.as_deref(),
        body.mnemonic.as_deref(),
        body.index,
    );
}

fn eth_mint_batch(issues: &mut Issues, body: &EthMintBatch) {
    issues.parallel_arrays(&[
        ("to", body.to.len()),
        ("tokenId", body.token_id.len()),
        ("url", body.url.len()),
    ]);
    for to in &body.to {
        issues.evm_address("to", to);
    }
    for token_id in &body.token_id {
        issues.token_id("tokenId", token_id);
    }
    issues.evm_address("contractAddress", &body.contract_address);
    issues.private_key("fromPrivateKey", &body.from_private_key);
    issues.fee(body.fee.as_ref());
}

fn celo_mint_batch(issues: &mut Issues, body: &CeloMintBatch) {
    issues.parallel_arrays(&[
        ("to", body.to.len()),
        ("tokenId", body.token_id.len()),
        ("url", body.url.len()),
    ]);
    for to in &body.to {
        issues.evm_address("to", to);
    }
    for token_id in &body.token_id {
        issues.token_id("tokenId", token_id);
    }
    issues.evm_address("contractAddress", &body.contract_address);
    issues.private_key("fromPrivateKey", &body.from_private_key);
    issues.fee(body.fee.as_ref());
}

fn flow_mint_batch(issues: &mut Issues, body: &FlowMintBatch) {
    issues.parallel_arrays(&[("to", body.to.len()), ("url", body.url.len())]);
    for to in &body.to {
        issues.require("to", to);
    }
    issues.require("contractAddress", &body.contract_address);
    issues.require("account", &body.account);
    issues.flow_credentials(
        body.private_key.as_deref(),
        body.mnemonic.as_deref(),
        body.index,
    );
}

fn eth_burn(issues: &mut Issues, body: &EthBurn) {
    issues.token_id("tokenId", &body.token_id);
    issues.evm_address("contractAddress", &body.contract_address);
    issues.private_key("fromPrivateKey", &body.from_private_key);
    issues.fee(body.fee.as_ref());
}

fn celo_burn(issues: &mut Issues, body: &CeloBurn) {
    issues.token_id("tokenId", &body.token_id);
    issues.evm_address("contractAddress", &body.contract_address);
    issues.private_key("fromPrivateKey", &body.from_private_key);
    issues.fee(body.fee.as_ref());
}

fn flow_burn(issues: &mut Issues, body: &FlowBurn) {
    issues.token_id("tokenId", &body.token_id);
    issues.require("contractAddress", &body.contract_address);
    issues.require("account", &body.account);
    issues.flow_credentials(
        body.private_key.as_deref(),
        body.mnemonic.as_deref(),
        body.index,
    );
}

fn eth_deploy(issues: &mut Issues, body: &EthDeploy) {
    issues.require("name", &body.name);
    issues.require("symbol", &body.symbol);
    issues.private_key("fromPrivateKey", &body.from_private_key);
    issues.fee(body.fee.as_ref());
}

fn celo_deploy(issues: &mut Issues, body: &CeloDeploy) {
    issues.require("name", &body.name);
    issues.require("symbol", &body.symbol);
    issues.private_key("fromPrivateKey", &body.from_private_key);
    issues.fee(body.fee.as_ref());
}

fn flow_deploy(issues: &mut Issues, body: &FlowDeploy) {
    issues.require("account", &body.account);
    issues.flow_credentials(
        body.private_key.as_deref(),
        body.mnemonic.as_deref(),
        body.index,
    );
}

fn eth_royalty(issues: &mut Issues, body: &EthRoyaltyUpdate) {
    issues.token_id("tokenId", &body.token_id);
    issues.evm_address("contractAddress", &body.contract_address);
    issues.decimal("cashbackValue", &body.cashback_value);
    issues.private_key("fromPrivateKey", &body.from_private_key);
    issues.fee(body.fee.as_ref());
}

fn celo_royalty(issues: &mut Issues, body: &CeloRoyaltyUpdate) {
    issues.token_id("tokenId", &body.token_id);
    issues.evm_address("contractAddress", &body.contract_address);
    issues.decimal("cashbackValue", &body.cashback_value);
    issues.private_key("fromPrivateKey", &body.from_private_key);
    issues.fee(body.fee.as_ref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::FeeCurrency;
    use crate::error::NftError;

    const ADDR: &str = "0x89205a3a3b2a69de6dbf7f01ed13b2108b2c43e7";
    const KEY: &str = "0x05ea79ae9dba4a28b9b2da99ba868ddb8dc4d9c5fca0ce8e6d3f0b8a1b2c3d4e";

    fn eth_transfer_body() -> EthTransfer {
        EthTransfer {
            to: ADDR.to_string(),
            token_id: "1".to_string(),
            contract_address: ADDR.to_string(),
            from_private_key: KEY.to_string(),
            nonce: None,
            fee: None,
        }
    }

    fn issue_fields(err: NftError) -> Vec<String> {
        match err {
            NftError::Validation(issues) => issues.into_iter().map(|i| i.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_eth_transfer_passes() {
        let request = TransferRequest::Eth(eth_transfer_body());
        assert!(transfer(&request).is_ok());
    }

    #[test]
    fn test_bad_recipient_address_flagged() {
        let mut body = eth_transfer_body();
        body.to = "not-an-address".to_string();
        let err = transfer(&TransferRequest::Eth(body)).unwrap_err();
        assert_eq!(issue_fields(err), ["to"]);
    }

    #[test]
    fn test_multiple_issues_collected() {
        let body = EthTransfer {
            to: String::new(),
            token_id: "abc".to_string(),
            contract_address: ADDR.to_string(),
            from_private_key: "0xshort".to_string(),
            nonce: None,
            fee: None,
        };
        let err = transfer(&TransferRequest::Eth(body)).unwrap_err();
        assert_eq!(issue_fields(err), ["to", "tokenId", "fromPrivateKey"]);
    }

    #[test]
    fn test_batch_length_mismatch() {
        let body = EthMintBatch {
            to: vec![ADDR.to_string(), ADDR.to_string()],
            token_id: vec!["1".to_string()],
            url: vec!["https://a".to_string(), "https://b".to_string()],
            contract_address: ADDR.to_string(),
            from_private_key: KEY.to_string(),
            nonce: None,
            fee: None,
        };
        let err = mint_batch(&MintBatchRequest::Eth(body)).unwrap_err();
        assert!(issue_fields(err).contains(&"to".to_string()));
    }

    #[test]
    fn test_flow_requires_exactly_one_credential() {
        let body = FlowBurn {
            token_id: "1".to_string(),
            contract_address: "0x716db717f9240d8a".to_string(),
            account: "0x955cd3f17b2fd8ad".to_string(),
            private_key: None,
            mnemonic: None,
            index: None,
        };
        let err = burn(&BurnRequest::Flow(body.clone())).unwrap_err();
        assert_eq!(issue_fields(err), ["privateKey"]);

        let both = FlowBurn {
            private_key: Some("abc".to_string()),
            mnemonic: Some("urge pulp usage".to_string()),
            index: Some(0),
            ..body
        };
        let err = burn(&BurnRequest::Flow(both)).unwrap_err();
        assert_eq!(issue_fields(err), ["privateKey"]);
    }

    #[test]
    fn test_flow_mnemonic_requires_index() {
        let body = FlowDeploy {
            account: "0x955cd3f17b2fd8ad".to_string(),
            private_key: None,
            mnemonic: Some("urge pulp usage".to_string()),
            index: None,
        };
        let err = deploy(&DeployRequest::Flow(body)).unwrap_err();
        assert_eq!(issue_fields(err), ["index"]);
    }

    #[test]
    fn test_cashback_arity_enforced() {
        let body = EthMint {
            to: ADDR.to_string(),
            token_id: "1".to_string(),
            contract_address: ADDR.to_string(),
            url: "https://example.com/meta/1".to_string(),
            from_private_key: KEY.to_string(),
            author_addresses: Some(vec![ADDR.to_string()]),
            cashback_values: Some(vec!["0.5".to_string(), "0.25".to_string()]),
            nonce: None,
            fee: None,
        };
        let err = mint(&MintRequest::Eth(body)).unwrap_err();
        assert_eq!(issue_fields(err), ["cashbackValues"]);
    }

    #[test]
    fn test_royalty_update_decimal() {
        let body = CeloRoyaltyUpdate {
            token_id: "1".to_string(),
            contract_address: ADDR.to_string(),
            cashback_value: "-2".to_string(),
            from_private_key: KEY.to_string(),
            fee_currency: FeeCurrency::Cusd,
            nonce: None,
            fee: None,
        };
        let err = update_royalty(&UpdateRoyaltyRequest::Celo(body)).unwrap_err();
        assert_eq!(issue_fields(err), ["cashbackValue"]);
    }

    #[test]
    fn test_bad_fee_flagged() {
        let mut body = eth_transfer_body();
        body.fee = Some(Fee {
            gas_limit: "forty".to_string(),
            gas_price: "20000000000".to_string(),
        });
        let err = transfer(&TransferRequest::Eth(body)).unwrap_err();
        assert_eq!(issue_fields(err), ["fee.gasLimit"]);
    }
}
