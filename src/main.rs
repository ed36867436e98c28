use std::process::ExitCode;

use reqwest::Client;
use tba_claimer::{
    claimer::run,
    client::init_chain_client,
    config::{ClaimConfig, Secrets},
    errors::ClaimError,
    logger::init_default_logger,
};

async fn claim() -> Result<(), ClaimError> {
    let secrets = Secrets::from_env()?;
    let config = ClaimConfig::from_env()?;

    let client = init_chain_client(&secrets, config.source_chain_id)?;
    tracing::info!("Initialized with wallet address: {}", client.address());

    let prepared = run(&client.provider, &Client::new(), &config).await?;
    tracing::info!("Prepared execution: {}", prepared.execution.to_json());
    tracing::info!("Execution for {} prepared, not submitted", prepared.tba);

    Ok(())
}

fn report(err: ClaimError) {
    let report = eyre::Report::new(err);

    tracing::error!("Error: {report}");
    for cause in report.chain().skip(1) {
        tracing::error!("Caused by: {cause}");
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let guard = init_default_logger();

    let code = match claim().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(err);
            ExitCode::FAILURE
        }
    };

    // flush buffered logs before exiting
    drop(guard);
    code
}
