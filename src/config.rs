// Configuration: endpoint, bearer token and rate-limit headers come from the
// environment, with the token falling back to a file in the home directory.
// The transport built here is the only place authorization is attached.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use std::path::PathBuf;

use crate::api::{ApiClient, RateLimitPolicy};

pub const DEFAULT_ENDPOINT: &str = "https://api.intra.42.fr/v2";
const TOKEN_FILE: &str = ".intra_token";

/// Settings needed to assemble an authenticated `ApiClient`.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub token: Option<String>,
    pub rate_limits: RateLimitPolicy,
}

impl Config {
    /// Read `INTRA_API_ENDPOINT`, `INTRA_TOKEN` and `INTRA_RATELIMIT_HEADERS`.
    /// Without `INTRA_TOKEN` the persisted token file is tried.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::from_lookup(|key| std::env::var(key).ok())?;
        if config.token.is_none() {
            config.token = load_token().ok();
        }
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let endpoint = lookup("INTRA_API_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.into());
        let token = lookup("INTRA_TOKEN").filter(|t| !t.trim().is_empty());
        let rate_limits = match lookup("INTRA_RATELIMIT_HEADERS") {
            Some(raw) => parse_rate_limit_headers(&raw)?,
            None => RateLimitPolicy::default(),
        };
        Ok(Config {
            endpoint,
            token,
            rate_limits,
        })
    }

    /// Build the transport: a blocking client that sends `token` as a bearer
    /// credential on every request.
    pub fn transport(&self, token: &str) -> Result<Client> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .context("Token is not a valid header value")?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")
    }

    pub fn client(&self, token: &str) -> Result<ApiClient> {
        let api = ApiClient::new(&self.endpoint, self.transport(token)?);
        Ok(api.with_rate_limits(self.rate_limits.clone()))
    }
}

fn parse_rate_limit_headers(raw: &str) -> Result<RateLimitPolicy> {
    let headers = raw
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            HeaderName::from_bytes(name.as_bytes())
                .with_context(|| format!("Invalid header name: {name}"))
        })
        .collect::<Result<Vec<_>>>()?;
    if headers.is_empty() {
        anyhow::bail!("INTRA_RATELIMIT_HEADERS names no headers");
    }
    Ok(RateLimitPolicy::new(headers))
}

fn token_path() -> PathBuf {
    let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.join(TOKEN_FILE)
}

/// Persist the token into a file in the user's home directory.
pub fn persist_token(token: &str) -> Result<()> {
    let path = token_path();
    std::fs::write(&path, token.trim())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Load the token from the user's home directory file.
pub fn load_token() -> Result<String> {
    let data = std::fs::read_to_string(token_path())?;
    let token = data.trim();
    if token.is_empty() {
        anyhow::bail!("Token file is empty");
    }
    Ok(token.to_string())
}
