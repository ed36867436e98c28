use std::{env, str::FromStr};

use alloy::primitives::{Address, B256, U256};

use crate::{
    constants::{
        ACCOUNT_PROXY_ADDRESS, ARBITRUM_CHAIN_ID, CLAIM_API_URL_VAR, CLAIM_CONTRACT_ADDRESS,
        CLAIM_DATA_URL, MAINNET_CHAIN_ID, PRIVATE_KEY_VAR, REGISTRY_ADDRESS, RPC_URL_VAR,
        TOKEN_CONTRACT_ADDRESS, TOKEN_CONTRACT_VAR, TOKEN_ID, TOKEN_ID_VAR,
    },
    errors::ClaimError,
};

/// Connection and signing secrets, only ever read from the environment
#[derive(Clone)]
pub struct Secrets {
    pub rpc_url: String,
    pub private_key: String,
}

impl Secrets {
    pub fn from_env() -> Result<Self, ClaimError> {
        Ok(Self {
            rpc_url: required_var(RPC_URL_VAR)?,
            private_key: required_var(PRIVATE_KEY_VAR)?,
        })
    }
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Everything the claim flow targets: the NFT owning the account, where the
/// account is derived from, and where the claim is executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimConfig {
    pub token_contract: Address,
    pub token_id: U256,
    pub claim_contract: Address,
    pub source_chain_id: u64,
    pub destination_chain_id: u64,
    pub registry: Address,
    pub implementation: Address,
    pub salt: B256,
    pub claim_api_url: String,
}

impl Default for ClaimConfig {
    fn default() -> Self {
        Self {
            token_contract: TOKEN_CONTRACT_ADDRESS,
            token_id: U256::from(TOKEN_ID),
            claim_contract: CLAIM_CONTRACT_ADDRESS,
            source_chain_id: ARBITRUM_CHAIN_ID,
            destination_chain_id: MAINNET_CHAIN_ID,
            registry: REGISTRY_ADDRESS,
            implementation: ACCOUNT_PROXY_ADDRESS,
            salt: B256::ZERO,
            claim_api_url: CLAIM_DATA_URL.to_string(),
        }
    }
}

impl ClaimConfig {
    /// Defaults with the optional environment overrides applied.
    pub fn from_env() -> Result<Self, ClaimError> {
        let mut config = Self::default();

        if let Some(url) = optional_var(CLAIM_API_URL_VAR) {
            config.claim_api_url = url;
        }
        if let Some(contract) = optional_var(TOKEN_CONTRACT_VAR) {
            config.token_contract = parse_var(TOKEN_CONTRACT_VAR, &contract)?;
        }
        if let Some(id) = optional_var(TOKEN_ID_VAR) {
            config.token_id = parse_var(TOKEN_ID_VAR, &id)?;
        }

        Ok(config)
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn required_var(name: &str) -> Result<String, ClaimError> {
    optional_var(name).ok_or_else(|| ClaimError::config(format!("{name} is not set")))
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ClaimError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ClaimError::config(format!("{name} is malformed: {e}")))
}
