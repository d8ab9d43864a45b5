use std::process::ExitCode;

use ahmia_core::config::AppConfig;
use ahmia_core::InvalidUrlError;
use ahmia_validators::{
    extract_domain, validate_full_onion_url, validate_onion, validate_onion_url, RedirectPolicy,
};

fn report(value: &str, result: Result<(), InvalidUrlError>) -> ExitCode {
    match result {
        Ok(()) => {
            println!("valid: {}", value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("invalid: {}", e);
            ExitCode::FAILURE
        }
    }
}

pub fn onion(value: &str) -> ExitCode {
    report(value, validate_onion(value))
}

pub fn url(url: &str, full: bool) -> ExitCode {
    let result = if full {
        validate_full_onion_url(url)
    } else {
        validate_onion_url(url)
    };
    report(url, result)
}

pub fn redirect(config: &AppConfig, url: &str) -> ExitCode {
    let policy = RedirectPolicy::from_config(&config.redirect);
    if policy.allows(url) {
        println!("allowed: {}", url);
        ExitCode::SUCCESS
    } else {
        println!("not allowed: {}", url);
        ExitCode::FAILURE
    }
}

pub fn domain(url: &str) -> ExitCode {
    match extract_domain(url) {
        Some(d) => {
            println!("{}", d);
            ExitCode::SUCCESS
        }
        None => {
            println!("no domain in {}", url);
            ExitCode::FAILURE
        }
    }
}
