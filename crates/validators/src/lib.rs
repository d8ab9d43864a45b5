pub mod domain;
pub mod onion;
pub mod status;
pub mod submission;

#[cfg(test)]
mod testing;

pub use domain::{allowed_url, extract_domain, RedirectPolicy};
pub use onion::{
    is_valid_full_onion_url, is_valid_onion, is_valid_onion_url, parse_onion_url,
    validate_full_onion_url, validate_full_onion_url_bytes, validate_onion, validate_onion_url,
    OnionUrlParts,
};
pub use status::{is_not_banned, validate_status};
pub use submission::validate_submission;
