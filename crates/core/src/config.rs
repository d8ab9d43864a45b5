use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub general: GeneralConfig,
    #[serde(default)]
    pub redirect: RedirectConfig,
    pub elasticsearch: ElasticsearchConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedirectConfig {
    /// Partner sites compared against the main domain (last two host labels).
    #[serde(default = "default_allowed_domains")]
    pub allowed_domains: Vec<String>,
    /// Top-level labels that are always allowed.
    #[serde(default = "default_allowed_tlds")]
    pub allowed_tlds: Vec<String>,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            allowed_domains: default_allowed_domains(),
            allowed_tlds: default_allowed_tlds(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ElasticsearchConfig {
    pub url: String,
    #[serde(default = "default_tor_index")]
    pub tor_index: String,
    #[serde(default = "default_doc_type")]
    pub doc_type: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

pub const DEFAULT_ALLOWED_DOMAINS: [&str; 4] = [
    "webropolsurveys.com",
    "pelastakaalapset.fi",
    "mielenterveystalo.fi",
    "iterapi.se",
];

fn default_allowed_domains() -> Vec<String> {
    DEFAULT_ALLOWED_DOMAINS.iter().map(|d| d.to_string()).collect()
}
fn default_allowed_tlds() -> Vec<String> {
    vec!["i2p".to_string(), "onion".to_string()]
}
fn default_tor_index() -> String { "tor".to_string() }
fn default_doc_type() -> String { "doc".to_string() }
fn default_timeout() -> u64 { 10 }

impl AppConfig {
    /// Apply `AHMIA_DEBUG` and `ELASTICSEARCH_*` overrides. `lookup` is
    /// normally `std::env::var(..).ok()`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("AHMIA_DEBUG") {
            self.general.debug = v != "0" && v.to_lowercase() != "false";
        }
        if let Some(v) = lookup("ELASTICSEARCH_URL") {
            self.elasticsearch.url = v;
        }
        if let Some(v) = lookup("ELASTICSEARCH_TOR_INDEX") {
            self.elasticsearch.tor_index = v;
        }
        if let Some(v) = lookup("ELASTICSEARCH_TYPE") {
            self.elasticsearch.doc_type = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_fills_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [general]
            [elasticsearch]
            url = "http://localhost:9200"
            "#,
        )
        .unwrap();

        assert!(!cfg.general.debug);
        assert_eq!(cfg.redirect.allowed_domains.len(), 4);
        assert_eq!(cfg.redirect.allowed_tlds, vec!["i2p", "onion"]);
        assert_eq!(cfg.elasticsearch.tor_index, "tor");
        assert_eq!(cfg.elasticsearch.doc_type, "doc");
        assert_eq!(cfg.elasticsearch.timeout_seconds, 10);
    }

    #[test]
    fn test_env_overrides() {
        let mut cfg: AppConfig = toml::from_str(
            r#"
            [general]
            debug = true
            [elasticsearch]
            url = "http://localhost:9200"
            "#,
        )
        .unwrap();

        cfg.apply_env_overrides(|key| match key {
            "AHMIA_DEBUG" => Some("false".into()),
            "ELASTICSEARCH_URL" => Some("http://es:9200".into()),
            "ELASTICSEARCH_TOR_INDEX" => Some("latest-crawl".into()),
            _ => None,
        });

        assert!(!cfg.general.debug);
        assert_eq!(cfg.elasticsearch.url, "http://es:9200");
        assert_eq!(cfg.elasticsearch.tor_index, "latest-crawl");
        assert_eq!(cfg.elasticsearch.doc_type, "doc");
    }
}
