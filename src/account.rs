//! ERC-6551 token-bound account resolution
//!
//! Accounts are CREATE2 deployments of a fixed minimal proxy by the registry,
//! so the address is a pure function of the implementation, salt, and the
//! NFT (chain id, contract, token id). The chain id is the NFT's home chain,
//! which makes the address identical on every chain the registry lives on.

use alloy::{
    network::Ethereum,
    primitives::{Address, B256, U256},
    providers::Provider,
    sol_types::SolValue,
    transports::Transport,
};

use crate::{
    config::ClaimConfig,
    constants::{ACCOUNT_PROXY_FOOTER, ACCOUNT_PROXY_HEADER},
    errors::ClaimError,
};

pub fn account_init_code(
    implementation: Address,
    salt: B256,
    chain_id: u64,
    token_contract: Address,
    token_id: U256,
) -> Vec<u8> {
    let token_data = (salt, U256::from(chain_id), token_contract, token_id).abi_encode();

    let mut code = Vec::with_capacity(
        ACCOUNT_PROXY_HEADER.len() + 20 + ACCOUNT_PROXY_FOOTER.len() + token_data.len(),
    );
    code.extend_from_slice(&ACCOUNT_PROXY_HEADER);
    code.extend_from_slice(implementation.as_slice());
    code.extend_from_slice(&ACCOUNT_PROXY_FOOTER);
    code.extend_from_slice(&token_data);

    code
}

pub fn compute_account(
    registry: Address,
    implementation: Address,
    salt: B256,
    chain_id: u64,
    token_contract: Address,
    token_id: U256,
) -> Address {
    let init_code = account_init_code(implementation, salt, chain_id, token_contract, token_id);
    registry.create2_from_code(salt, init_code)
}

pub fn resolve_account(config: &ClaimConfig) -> Address {
    compute_account(
        config.registry,
        config.implementation,
        config.salt,
        config.source_chain_id,
        config.token_contract,
        config.token_id,
    )
}

/// Whether the account has code on the provider's chain. Undeployed accounts
/// still have a valid address, so this is informational only.
pub async fn is_deployed<P, T>(provider: &P, account: Address) -> Result<bool, ClaimError>
where
    P: Provider<T, Ethereum>,
    T: Transport + Clone,
{
    let code = provider.get_code_at(account).await?;
    Ok(!code.is_empty())
}
