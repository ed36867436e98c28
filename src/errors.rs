//! Errors raised by each stage of a claim run

use alloy::{primitives::Address, transports::TransportError};
use reqwest::StatusCode;
use thiserror::Error;

/// One variant per stage, so the final log line says where the run stopped.
/// Wrapping variants keep the underlying error as `source` only, it is
/// reported on its own line.
#[derive(Debug, Error)]
pub enum ClaimError {
    /// Missing or malformed environment configuration
    #[error("invalid configuration: {0}")]
    Config(String),
    /// The RPC endpoint serves another chain than the configured source chain
    #[error("RPC endpoint is on chain {actual}, expected chain {expected}")]
    ChainMismatch { expected: u64, actual: u64 },
    /// A read-only RPC call failed
    #[error("RPC request failed")]
    Rpc(#[from] TransportError),
    /// The claim API could not be queried or returned unusable data
    #[error("Failed to fetch claim data for {account}")]
    ClaimFetch {
        account: Address,
        #[source]
        source: FetchError,
    },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("API request failed with status {0}")]
    Status(StatusCode),
    #[error("failed to parse claim data")]
    Parse(#[from] serde_json::Error),
    #[error("request to claim API failed")]
    Transport(#[from] reqwest::Error),
}

impl ClaimError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
