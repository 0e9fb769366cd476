//! Upstream HTTP implementation of the operation service.
//!
//! Forwards every operation to a hosted blockchain API over the same
//! `/v3/nft` surface this gateway exposes, authenticated with an API key
//! header. Mutation bodies are validated locally before dispatch, the way
//! the upstream SDK validates its DTOs client-side.
//!
//! Failure mapping:
//! - non-2xx responses with a JSON error body become [`NftError::Domain`],
//!   preserving the upstream status, `errorCode` and `message`
//! - transport failures (connect, timeout, body read) become
//!   [`NftError::Unexpected`]

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::api::models::{
    BurnRequest, DeployRequest, MintBatchRequest, MintRequest, TransferRequest,
    UpdateRoyaltyRequest,
};
use crate::chain::Chain;
use crate::config::Config;
use crate::error::{NftError, NftResult};
use crate::service::{validate, NftOperations};

/// Header carrying the upstream API key.
const API_KEY_HEADER: &str = "x-api-key";

/// Fallback error code for upstream bodies that carry none.
const GENERIC_ERROR_CODE: &str = "nft.error";

/// `reqwest`-backed [`NftOperations`] implementation.
pub struct RemoteNftService {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RemoteNftService {
    /// Build a client from the gateway configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn from_config(config: &Config) -> NftResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.service_url().to_string(),
            api_key: config.service_api_key().to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a prepared request and map the outcome.
    async fn dispatch(&self, request: reqwest::RequestBuilder) -> NftResult<Value> {
        let response = request.header(API_KEY_HEADER, &self.api_key).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(status = status.as_u16(), "Upstream response received");

        if status.is_success() {
            if body.is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&body)
                .map_err(|e| NftError::unexpected(format!("malformed upstream body: {e}")))
        } else {
            Err(classify_upstream(status.as_u16(), &body))
        }
    }
}

/// Map a non-2xx upstream response into a domain error.
///
/// The upstream reports failures as `{ statusCode, errorCode, message }`.
/// Missing pieces degrade gracefully: the message falls back to the raw
/// body text, then to the status line; the code falls back to the generic
/// one.
fn classify_upstream(status: u16, body: &str) -> NftError {
    let parsed = serde_json::from_str::<Value>(body).ok();

    let message = parsed
        .as_ref()
        .and_then(|v| v.get("message"))
        .map(|m| match m {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| {
            if body.is_empty() {
                format!("upstream returned status {status}")
            } else {
                body.to_string()
            }
        });

    let code = parsed
        .as_ref()
        .and_then(|v| v.get("errorCode"))
        .and_then(Value::as_str)
        .unwrap_or(GENERIC_ERROR_CODE)
        .to_string();

    NftError::Domain {
        status,
        code,
        message,
    }
}

#[async_trait]
impl NftOperations for RemoteNftService {
    async fn tokens_of_owner(
        &self,
        chain: Chain,
        address: &str,
        contract_address: &str,
    ) -> NftResult<Value> {
        let url = self.url(&format!("/v3/nft/balance/{chain}/{contract_address}/{address}"));
        self.dispatch(self.client.get(url)).await
    }

    async fn transaction(&self, chain: Chain, tx_id: &str) -> NftResult<Value> {
        let url = self.url(&format!("/v3/nft/transaction/{chain}/{tx_id}"));
        self.dispatch(self.client.get(url)).await
    }

    async fn contract_address(&self, chain: Chain, tx_id: &str) -> NftResult<Value> {
        let url = self.url(&format!("/v3/nft/address/{chain}/{tx_id}"));
        self.dispatch(self.client.get(url)).await
    }

    async fn metadata(
        &self,
        chain: Chain,
        token_id: &str,
        contract_address: &str,
        account: Option<&str>,
    ) -> NftResult<Value> {
        let url = self.url(&format!("/v3/nft/metadata/{chain}/{contract_address}/{token_id}"));
        let mut request = self.client.get(url);
        if let Some(account) = account {
            request = request.query(&[("account", account)]);
        }
        self.dispatch(request).await
    }

    async fn royalty(
        &self,
        chain: Chain,
        token_id: &str,
        contract_address: &str,
    ) -> NftResult<Value> {
        let url = self.url(&format!("/v3/nft/royalty/{chain}/{contract_address}/{token_id}"));
        self.dispatch(self.client.get(url)).await
    }

    async fn transfer(&self, request: TransferRequest) -> NftResult<Value> {
        validate::transfer(&request)?;
        let url = self.url("/v3/nft/transaction");
        self.dispatch(self.client.post(url).json(&request)).await
    }

    async fn mint(&self, request: MintRequest) -> NftResult<Value> {
        validate::mint(&request)?;
        let url = self.url("/v3/nft/mint");
        self.dispatch(self.client.post(url).json(&request)).await
    }

    async fn mint_batch(&self, request: MintBatchRequest) -> NftResult<Value> {
        validate::mint_batch(&request)?;
        let url = self.url("/v3/nft/mint/batch");
        self.dispatch(self.client.post(url).json(&request)).await
    }

    async fn update_royalty(&self, request: UpdateRoyaltyRequest) -> NftResult<Value> {
        validate::update_royalty(&request)?;
        let url = self.url("/v3/nft/royalty");
        self.dispatch(self.client.put(url).json(&request)).await
    }

    async fn burn(&self, request: BurnRequest) -> NftResult<Value> {
        validate::burn(&request)?;
        let url = self.url("/v3/nft/burn");
        self.dispatch(self.client.post(url).json(&request)).await
    }

    async fn deploy(&self, request: DeployRequest) -> NftResult<Value> {
        validate::deploy(&request)?;
        let url = self.url("/v3/nft/deploy");
        self.dispatch(self.client.post(url).json(&request)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_preserves_status_code_and_message() {
        let err = classify_upstream(
            403,
            r#"{"statusCode":403,"errorCode":"nft.insufficient.funds","message":"not enough gas"}"#,
        );
        assert_eq!(
            err,
            NftError::domain(403, "nft.insufficient.funds", "not enough gas")
        );
    }

    #[test]
    fn test_classify_defaults_error_code() {
        let err = classify_upstream(429, r#"{"message":"slow down"}"#);
        assert_eq!(err, NftError::domain(429, "nft.error", "slow down"));
    }

    #[test]
    fn test_classify_falls_back_to_raw_body() {
        let err = classify_upstream(502, "Bad Gateway");
        assert_eq!(err, NftError::domain(502, "nft.error", "Bad Gateway"));
    }

    #[test]
    fn test_classify_falls_back_to_status_line() {
        let err = classify_upstream(504, "");
        assert_eq!(
            err,
            NftError::domain(504, "nft.error", "upstream returned status 504")
        );
    }

    #[test]
    fn test_classify_stringifies_structured_message() {
        let err = classify_upstream(400, r#"{"message":["to must be an address"]}"#);
        match err {
            NftError::Domain { message, .. } => {
                assert_eq!(message, r#"["to must be an address"]"#);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }
}
