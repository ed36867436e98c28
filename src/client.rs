use std::str::FromStr;

use alloy::{
    network::{Ethereum, EthereumWallet, NetworkWallet},
    primitives::Address,
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::{http::Http, Transport},
};
use alloy_chains::NamedChain;
use reqwest::{Client, Url};

use crate::{config::Secrets, errors::ClaimError};

/// Provider for the source chain plus the wallet it signs with
pub struct ChainClient<P> {
    pub provider: P,
    pub wallet: EthereumWallet,
}

impl<P> ChainClient<P> {
    pub fn address(&self) -> Address {
        <EthereumWallet as NetworkWallet<Ethereum>>::default_signer_address(&self.wallet)
    }
}

pub fn parse_wallet(private_key: &str) -> Result<EthereumWallet, ClaimError> {
    let signer = PrivateKeySigner::from_str(private_key.trim())
        .map_err(|e| ClaimError::config(format!("PRIVATE_KEY is invalid: {e}")))?;

    Ok(EthereumWallet::new(signer))
}

/// Builds the HTTP provider and wallet. Performs no network I/O.
pub fn init_chain_client(
    secrets: &Secrets,
    chain_id: u64,
) -> Result<ChainClient<impl Provider<Http<Client>, Ethereum>>, ClaimError> {
    let wallet = parse_wallet(&secrets.private_key)?;

    let rpc_url = secrets
        .rpc_url
        .trim()
        .parse::<Url>()
        .map_err(|e| ClaimError::config(format!("RPC_URL is invalid: {e}")))?;

    let chain = NamedChain::try_from(chain_id)
        .map_err(|_| ClaimError::config(format!("unknown chain id {chain_id}")))?;

    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet.clone())
        .with_chain(chain)
        .on_http(rpc_url);

    Ok(ChainClient { provider, wallet })
}

/// Checks that the endpoint actually serves the chain the account lives on.
pub async fn ensure_chain<P, T>(provider: &P, expected: u64) -> Result<u64, ClaimError>
where
    P: Provider<T, Ethereum>,
    T: Transport + Clone,
{
    let actual = provider.get_chain_id().await?;

    if actual != expected {
        return Err(ClaimError::ChainMismatch { expected, actual });
    }

    tracing::info!("Connected to chain {actual}");

    Ok(actual)
}
