pub mod account;
pub mod claim_data;
pub mod claimer;
pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logger;
