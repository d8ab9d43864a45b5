use std::process::ExitCode;

use anyhow::Result;
use ahmia_core::config::AppConfig;
use ahmia_core::StatusError;
use ahmia_search::ElasticsearchIndex;
use ahmia_validators::{validate_status, validate_submission};

/// Validation failures are a verdict (exit 1); index failures are errors.
fn verdict<T>(result: Result<T, StatusError>, ok: impl FnOnce(T)) -> Result<ExitCode> {
    match result {
        Ok(v) => {
            ok(v);
            Ok(ExitCode::SUCCESS)
        }
        Err(StatusError::Validation(e)) => {
            println!("rejected: {}", e);
            Ok(ExitCode::FAILURE)
        }
        Err(StatusError::Index(e)) => Err(e.into()),
    }
}

pub async fn run(config: AppConfig, domain: String) -> Result<ExitCode> {
    let index = ElasticsearchIndex::from_config(&config.elasticsearch)?;
    let result = validate_status(&index, &config.elasticsearch, &domain).await;
    verdict(result, |()| println!("not banned: {}", domain))
}

pub async fn submit(config: AppConfig, url: String) -> Result<ExitCode> {
    let index = ElasticsearchIndex::from_config(&config.elasticsearch)?;
    let result = validate_submission(&index, &config.elasticsearch, &url).await;
    verdict(result, |domain| println!("accepted: {}", domain))
}
