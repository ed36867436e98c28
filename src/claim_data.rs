use std::{collections::HashMap, fmt, str::FromStr};

use alloy::primitives::{Address, B256, U256};
use reqwest::{Client, Method};
use serde::{de, Deserialize, Deserializer};

use crate::errors::{ClaimError, FetchError};

/// Eligibility entry of one account in the published merkle distribution
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClaimData {
    #[serde(deserialize_with = "deserialize_u256")]
    pub index: U256,
    #[serde(deserialize_with = "deserialize_u256")]
    pub amount: U256,
    pub proof: Vec<B256>,
}

impl fmt::Display for ClaimData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {}, amount {}, proof of {} hashes",
            self.index,
            self.amount,
            self.proof.len()
        )
    }
}

/// Accepts `3`, `"3"` and `"0x03"`. Bare JSON numbers are limited to `u64`,
/// larger values have to come as strings.
fn deserialize_u256<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(U256::from(n)),
        NumberOrString::String(s) => U256::from_str(s.trim()).map_err(de::Error::custom),
    }
}

#[derive(Clone)]
pub struct RequestParams<'a> {
    pub url: &'a str,
    pub method: Method,
    pub query_args: Option<HashMap<&'a str, &'a str>>,
}

pub async fn send_http_request(
    client: &Client,
    request_params: &RequestParams<'_>,
) -> Result<String, FetchError> {
    let mut request = client.request(request_params.method.clone(), request_params.url);

    if let Some(params) = &request_params.query_args {
        request = request.query(&params);
    }

    let response = request
        .send()
        .await
        .inspect_err(|e| tracing::error!("Request failed: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!("Non-successful status code: {}", status);
        return Err(FetchError::Status(status));
    }

    let text = response
        .text()
        .await
        .inspect_err(|e| tracing::error!("Failed to retrieve response text: {}", e))?;

    Ok(text)
}

pub fn parse_claim_data(response_text: &str) -> Result<ClaimData, FetchError> {
    Ok(serde_json::from_str(response_text)?)
}

pub async fn fetch_claim_data(
    client: &Client,
    api_url: &str,
    account: Address,
) -> Result<ClaimData, ClaimError> {
    tracing::info!("Fetching claim data for {account}");

    let address = account.to_string();
    let query_args = [("address", address.as_str())].into_iter().collect();

    let request_params = RequestParams {
        url: api_url,
        method: Method::GET,
        query_args: Some(query_args),
    };

    let fetch = async {
        let text = send_http_request(client, &request_params).await?;
        parse_claim_data(&text)
    };

    fetch
        .await
        .map_err(|source| ClaimError::ClaimFetch { account, source })
}
