//! # NFT Gateway
//!
//! HTTP gateway exposing NFT lifecycle operations (balance and metadata
//! lookups, mint, mint-batch, transfer, burn, deploy, royalty updates)
//! across Celo, Ethereum and Flow.
//!
//! The gateway is a routing and validation shim: each endpoint binds
//! path/query/body parameters into a typed request, invokes exactly one
//! method on an injected operation service, and maps the outcome to an
//! HTTP response. The actual blockchain work (signing, broadcast, contract
//! encoding) lives behind the [`service::NftOperations`] seam.
//!
//! ## Architecture
//!
//! 1. **Config layer** ([`config`]) - environment variable loading
//! 2. **Chain model** ([`chain`]) - supported-network enumeration
//! 3. **Service layer** ([`service`]) - operation trait, upstream client,
//!    request validation
//! 4. **API layer** ([`api`]) - models, handlers, error mapping, router
//! 5. **Error layer** ([`error`]) - the three-way failure taxonomy
//!
//! ## Quick Start
//!
//! ```bash
//! NFT_SERVICE_URL=https://api.example.com \
//! NFT_SERVICE_API_KEY=your-key \
//! cargo run --release -- serve
//! ```
//!
//! ## Error Handling
//!
//! Service failures carry one of three structural shapes and map to HTTP
//! accordingly: validation issues answer 400 with the issue list, upstream
//! domain errors pass through with their own status, and everything else
//! becomes a generic 500:
//!
//! ```rust
//! use nft_gateway::error::{NftError, NftResult};
//!
//! fn example() -> NftResult<()> {
//!     Err(NftError::validation_field("to", "to must not be empty"))
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod api;
pub mod app_state;
pub mod chain;
pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod service;
