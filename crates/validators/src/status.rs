use tracing::{debug, warn};

use ahmia_core::config::ElasticsearchConfig;
use ahmia_core::{DocumentIndex, IndexError, StatusError, TermFilter, ValidationError};

/// Reject a domain the index has flagged as banned.
///
/// One count query against `cfg.tor_index`; no retries. An index failure
/// comes back as [`StatusError::Index`], never as a verdict.
pub async fn validate_status<I>(
    index: &I,
    cfg: &ElasticsearchConfig,
    value: &str,
) -> Result<(), StatusError>
where
    I: DocumentIndex + ?Sized,
{
    let filter = TermFilter::banned_domain(value);
    let count = index
        .count(&cfg.tor_index, &cfg.doc_type, &filter)
        .await
        .map_err(|e| {
            warn!(domain = value, error = %e, "ban lookup failed");
            e
        })?;

    if count > 0 {
        warn!(domain = value, count, "banned onion rejected");
        return Err(ValidationError::Banned {
            domain: value.to_string(),
        }
        .into());
    }

    debug!(domain = value, "onion not banned");
    Ok(())
}

/// `Ok(false)` when banned; index failures pass through.
pub async fn is_not_banned<I>(
    index: &I,
    cfg: &ElasticsearchConfig,
    value: &str,
) -> Result<bool, IndexError>
where
    I: DocumentIndex + ?Sized,
{
    match validate_status(index, cfg, value).await {
        Ok(()) => Ok(true),
        Err(StatusError::Validation(_)) => Ok(false),
        Err(StatusError::Index(e)) => Err(e),
    }
}
