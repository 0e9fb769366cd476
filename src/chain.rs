//! Supported blockchain networks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Blockchain network a request targets.
///
/// Carried on nearly every request, either as a path segment
/// (`/v3/nft/balance/ETH/...`) or as the `chain` discriminator of a
/// request body. Path segments that do not name one of these networks
/// are rejected at binding time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Chain {
    /// Ethereum mainnet/testnet (ERC-721 contracts).
    #[serde(rename = "ETH")]
    Ethereum,
    /// Celo (ERC-721 contracts, configurable fee currency).
    #[serde(rename = "CELO")]
    Celo,
    /// Flow (Cadence NFT contracts).
    #[serde(rename = "FLOW")]
    Flow,
}

impl Chain {
    /// Wire identifier used in URL paths and body discriminators.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ethereum => "ETH",
            Self::Celo => "CELO",
            Self::Flow => "FLOW",
        }
    }

    /// Whether the chain uses EVM-style `0x` addresses and keys.
    #[must_use]
    pub const fn is_evm(self) -> bool {
        matches!(self, Self::Ethereum | Self::Celo)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ETH" => Ok(Self::Ethereum),
            "CELO" => Ok(Self::Celo),
            "FLOW" => Ok(Self::Flow),
            other => Err(format!("unsupported chain: {other}")),
        }
    }
}
