use tracing::info;

use ahmia_core::config::ElasticsearchConfig;
use ahmia_core::{DocumentIndex, StatusError};

use crate::onion::parse_onion_url;
use crate::status::validate_status;

/// Check a user-submitted onion service URL before it is queued for
/// indexing: the URL must be a well-formed service root and its domain must
/// not be banned. Returns the domain (`<address>.onion`).
pub async fn validate_submission<I>(
    index: &I,
    cfg: &ElasticsearchConfig,
    url: &str,
) -> Result<String, StatusError>
where
    I: DocumentIndex + ?Sized,
{
    let domain = parse_onion_url(url)?.domain();
    validate_status(index, cfg, &domain).await?;

    info!(domain = %domain, "onion submission accepted");
    Ok(domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{es_config, FailingIndex, FakeIndex};
    use ahmia_core::{IndexError, InvalidUrlError, ValidationError};

    #[tokio::test]
    async fn test_accepts_clean_onion() {
        let index = FakeIndex::with_banned(&[]);
        let domain = validate_submission(&index, &es_config(), "http://www.3g2upl4pq6kufc4m.onion/")
            .await
            .unwrap();
        assert_eq!(domain, "3g2upl4pq6kufc4m.onion");
        assert_eq!(
            index.calls()[0].2,
            ahmia_core::TermFilter::banned_domain("3g2upl4pq6kufc4m.onion")
        );
    }

    #[tokio::test]
    async fn test_rejects_banned_onion() {
        let index = FakeIndex::with_banned(&["3g2upl4pq6kufc4m.onion"]);
        let err = validate_submission(&index, &es_config(), "http://3g2upl4pq6kufc4m.onion")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StatusError::Validation(ValidationError::Banned { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_url_skips_index() {
        let index = FakeIndex::with_banned(&[]);
        let err = validate_submission(&index, &es_config(), "3g2upl4pq6kufc4m.onion")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StatusError::Validation(ValidationError::InvalidUrl(
                InvalidUrlError::MissingScheme { .. }
            ))
        ));
        assert!(index.calls().is_empty());
    }

    #[tokio::test]
    async fn test_index_failure_is_not_a_verdict() {
        let err = validate_submission(&FailingIndex, &es_config(), "http://3g2upl4pq6kufc4m.onion")
            .await
            .unwrap_err();
        assert!(matches!(err, StatusError::Index(IndexError::Transport(_))));
    }
}
