use once_cell::sync::Lazy;
use regex::Regex;

use ahmia_core::InvalidUrlError;

const ONION_SUFFIX: &str = ".onion";

/// Bare v2 (16) or v3 (56) address, optional `.onion`. Anchored both ends.
static ONION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z2-7]{16}([a-z2-7]{40})?(\.onion)?$").unwrap());

// Anchored at the start only: anything after `.onion` is left to the path check.
static FULL_ONION_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://([a-z0-9-]+[.])*[a-z2-7]{16}([a-z2-7]{40})?[.]onion").unwrap()
});

/// Host of an `http(s)://[sub.]<address>.onion` URL, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnionUrlParts<'a> {
    pub scheme: &'a str,
    pub subdomain: Option<&'a str>,
    pub address: &'a str,
}

impl OnionUrlParts<'_> {
    /// `<address>.onion`, the key the index stores domains under.
    pub fn domain(&self) -> String {
        format!("{}{}", self.address, ONION_SUFFIX)
    }
}

/// Check a bare hidden-service address such as `msydqstlz2kzerdg` or
/// `msydqstlz2kzerdg.onion`.
pub fn validate_onion(onion: &str) -> Result<(), InvalidUrlError> {
    if onion.is_empty() {
        return Err(InvalidUrlError::EmptyOnion);
    }

    if !ONION_RE.is_match(onion.trim()) {
        return Err(InvalidUrlError::InvalidOnion {
            onion: onion.to_string(),
        });
    }
    Ok(())
}

/// Parse `http(s)://[sub.]<address>.onion[/]`. Surrounding whitespace and
/// trailing slashes are ignored; a path is not allowed. At most one
/// subdomain label is accepted and it is not itself validated.
pub fn parse_onion_url(url: &str) -> Result<OnionUrlParts<'_>, InvalidUrlError> {
    if url.is_empty() {
        return Err(InvalidUrlError::MissingUrl);
    }

    let url = url.trim().trim_end_matches('/');

    let (scheme, rest) = if let Some(rest) = url.strip_prefix("http://") {
        ("http", rest)
    } else if let Some(rest) = url.strip_prefix("https://") {
        ("https", rest)
    } else {
        return Err(InvalidUrlError::MissingScheme {
            url: url.to_string(),
        });
    };

    let host = rest
        .strip_suffix(ONION_SUFFIX)
        .ok_or_else(|| InvalidUrlError::MissingOnionSuffix {
            url: url.to_string(),
        })?;

    // The whole host may itself be `<address>.onion`; only split off a
    // subdomain when it is not.
    let (subdomain, address) = if validate_onion(host).is_ok() {
        (None, host)
    } else {
        match host.split_once('.') {
            Some((sub, address)) => {
                validate_onion(address)?;
                (Some(sub), address)
            }
            None => {
                validate_onion(host)?;
                (None, host)
            }
        }
    };

    let address = address.trim();
    Ok(OnionUrlParts {
        scheme,
        subdomain,
        address: address.strip_suffix(ONION_SUFFIX).unwrap_or(address),
    })
}

/// Check an onion service root URL, e.g. `http://3g2upl4pq6kufc4m.onion/`.
pub fn validate_onion_url(url: &str) -> Result<(), InvalidUrlError> {
    parse_onion_url(url).map(|_| ())
}

/// Check an onion URL that may carry a path, e.g.
/// `http://msydqstlz2kzerdg.onion/search/?q=tor`.
///
/// Only the prefix up to `.onion` is matched against the address pattern;
/// whatever follows just has to start with `/`. Without any `.onion` the
/// whole input counts as the path.
pub fn validate_full_onion_url(url: &str) -> Result<(), InvalidUrlError> {
    let path = url.split_once(ONION_SUFFIX).map_or(url, |(_, path)| path);
    if !path.is_empty() && !path.starts_with('/') {
        return Err(InvalidUrlError::PathWithoutSlash {
            url: url.to_string(),
        });
    }

    if !FULL_ONION_URL_RE.is_match(url.trim()) {
        return Err(InvalidUrlError::NotOnionUrl {
            url: url.to_string(),
        });
    }
    Ok(())
}

/// [`validate_full_onion_url`] for raw request bytes.
pub fn validate_full_onion_url_bytes(raw: &[u8]) -> Result<(), InvalidUrlError> {
    let url = std::str::from_utf8(raw).map_err(|_| InvalidUrlError::Undecodable)?;
    validate_full_onion_url(url)
}

pub fn is_valid_onion(onion: &str) -> bool {
    validate_onion(onion).is_ok()
}

pub fn is_valid_onion_url(url: &str) -> bool {
    validate_onion_url(url).is_ok()
}

pub fn is_valid_full_onion_url(url: &str) -> bool {
    validate_full_onion_url(url).is_ok()
}
