use once_cell::sync::Lazy;
use tracing::debug;
use url::Url;

use ahmia_core::config::RedirectConfig;

static DEFAULT_POLICY: Lazy<RedirectPolicy> = Lazy::new(RedirectPolicy::default);

/// Main domain of a URL: the last two dot-separated labels of `host[:port]`.
///
/// Returns `None` when the string does not parse as an absolute URL or has
/// no host; callers treat that as a rejection.
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str().filter(|h| !h.is_empty())?;

    let netloc = match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };

    let labels: Vec<&str> = netloc.split('.').collect();
    let start = labels.len().saturating_sub(2);
    Some(labels[start..].join("."))
}

/// Which redirect targets the site will send a visitor to.
#[derive(Debug, Clone)]
pub struct RedirectPolicy {
    allowed_domains: Vec<String>,
    allowed_tlds: Vec<String>,
}

impl RedirectPolicy {
    pub fn new(allowed_domains: Vec<String>, allowed_tlds: Vec<String>) -> Self {
        Self {
            allowed_domains,
            allowed_tlds,
        }
    }

    pub fn from_config(cfg: &RedirectConfig) -> Self {
        Self::new(cfg.allowed_domains.clone(), cfg.allowed_tlds.clone())
    }

    /// True if the main domain is a listed partner or sits under an allowed
    /// top-level label (`.onion`, `.i2p`).
    pub fn allows(&self, redirect_url: &str) -> bool {
        let Some(main_domain) = extract_domain(redirect_url) else {
            debug!(url = redirect_url, "redirect rejected: no domain");
            return false;
        };

        if self.allowed_domains.iter().any(|d| *d == main_domain) {
            return true;
        }

        let tld = main_domain.rsplit('.').next().unwrap_or_default();
        let allowed = self.allowed_tlds.iter().any(|t| t == tld);
        if !allowed {
            debug!(url = redirect_url, domain = %main_domain, "redirect rejected");
        }
        allowed
    }
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self::from_config(&RedirectConfig::default())
    }
}

/// [`RedirectPolicy::allows`] with the built-in partner list.
pub fn allowed_url(redirect_url: &str) -> bool {
    DEFAULT_POLICY.allows(redirect_url)
}
