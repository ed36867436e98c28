use alloy::primitives::{address, hex, Address};

// NFT owning the token-bound account
pub const TOKEN_CONTRACT_ADDRESS: Address = address!("d022977a22f9a681Df8F3c51ed9ad144BDc5bb38");
pub const TOKEN_ID: u64 = 539;

// EigenLayer claim contract on mainnet
pub const CLAIM_CONTRACT_ADDRESS: Address = address!("2ec90ef34e312a855becf74762d198d8369eece1");
pub const CLAIM_DATA_URL: &str = "https://claim.ether.fi/api/eigenlayer-claim-data";

pub const ARBITRUM_CHAIN_ID: u64 = 42161;
pub const MAINNET_CHAIN_ID: u64 = 1;

// ERC-6551
pub const REGISTRY_ADDRESS: Address = address!("000000006551c19487814612e58FE06813775758");
pub const ACCOUNT_PROXY_ADDRESS: Address = address!("55266d75D1a14E4572138116aF39863Ed6596E7F");
pub const ACCOUNT_PROXY_HEADER: [u8; 20] = hex!("3d60ad80600a3d3981f3363d3d373d3d3d363d73");
pub const ACCOUNT_PROXY_FOOTER: [u8; 15] = hex!("5af43d82803e903d91602b57fd5bf3");

// ENV
pub const RPC_URL_VAR: &str = "RPC_URL";
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
pub const CLAIM_API_URL_VAR: &str = "CLAIM_API_URL";
pub const TOKEN_CONTRACT_VAR: &str = "TOKEN_CONTRACT";
pub const TOKEN_ID_VAR: &str = "TOKEN_ID";
