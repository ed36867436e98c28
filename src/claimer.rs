use alloy::{
    network::Ethereum,
    primitives::{Address, Bytes, U256},
    providers::Provider,
    sol,
    sol_types::SolCall,
    transports::Transport,
};
use reqwest::Client;
use serde::Serialize;

use IEigenClaim::claimCall;
use IERC6551Executable::executeCall;

use crate::{
    account::{is_deployed, resolve_account},
    claim_data::{fetch_claim_data, ClaimData},
    client::ensure_chain,
    config::ClaimConfig,
    errors::ClaimError,
};

sol! {
    interface IEigenClaim {
        function claim(uint256 index, address account, uint256 amount, bytes32[] calldata merkleProof) external;
    }

    interface IERC6551Executable {
        function execute(address to, uint256 value, bytes calldata data, uint8 operation) external payable returns (bytes memory);
    }
}

const CALL_OPERATION: u8 = 0;

/// A call to be sent to `to` on chain `chainId`, executed by `account`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionParams {
    pub account: Address,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
    pub chain_id: u64,
}

impl ExecutionParams {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

#[derive(Clone, Debug)]
pub struct PreparedClaim {
    pub tba: Address,
    pub claim_data: ClaimData,
    pub claim_call: Bytes,
    pub execution: ExecutionParams,
}

pub fn encode_claim(claim_data: &ClaimData, account: Address) -> Bytes {
    claimCall {
        index: claim_data.index,
        account,
        amount: claim_data.amount,
        merkleProof: claim_data.proof.clone(),
    }
    .abi_encode()
    .into()
}

/// Wraps a call into the account's own `execute`, so whoever holds the NFT
/// can relay it to the account on `chain_id`.
pub fn prepare_execution(
    account: Address,
    to: Address,
    value: U256,
    data: Bytes,
    chain_id: u64,
) -> ExecutionParams {
    let input = executeCall {
        to,
        value,
        data,
        operation: CALL_OPERATION,
    }
    .abi_encode();

    ExecutionParams {
        account,
        to: account,
        value: U256::ZERO,
        data: input.into(),
        chain_id,
    }
}

pub fn prepare_claim(config: &ClaimConfig, tba: Address, claim_data: ClaimData) -> PreparedClaim {
    tracing::info!(
        "Preparing claim of {} for {tba} on chain {}",
        claim_data.amount,
        config.destination_chain_id
    );

    let claim_call = encode_claim(&claim_data, tba);
    let execution = prepare_execution(
        tba,
        config.claim_contract,
        U256::ZERO,
        claim_call.clone(),
        config.destination_chain_id,
    );

    PreparedClaim {
        tba,
        claim_data,
        claim_call,
        execution,
    }
}

/// Resolves the account, fetches its claim and prepares the execution.
/// Nothing is signed or sent.
pub async fn run<P, T>(
    provider: &P,
    http: &Client,
    config: &ClaimConfig,
) -> Result<PreparedClaim, ClaimError>
where
    P: Provider<T, Ethereum>,
    T: Transport + Clone,
{
    ensure_chain(provider, config.source_chain_id).await?;

    let tba = resolve_account(config);
    tracing::info!("TBA Address: {tba}");

    if is_deployed(provider, tba).await? {
        tracing::info!("TBA is deployed on chain {}", config.source_chain_id);
    } else {
        tracing::warn!("TBA has no code on chain {}", config.source_chain_id);
    }

    let claim_data = fetch_claim_data(http, &config.claim_api_url, tba).await?;
    tracing::info!("Claim data received: {claim_data}");
    tracing::debug!("Merkle proof: {:?}", claim_data.proof);

    Ok(prepare_claim(config, tba, claim_data))
}
