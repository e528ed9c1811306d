//! Brightbox API client
//!
//! Thin typed wrapper over the Brightbox REST API, using Bearer token
//! authentication. Only the zones endpoint is consumed here; compute and
//! network resources go through their own clients.

use crate::error::{BrightboxError, Result};
use async_trait::async_trait;
use nimbus_cloud::ProviderContext;
use serde::Deserialize;

const BRIGHTBOX_API_BASE: &str = "https://api.gb1.brightbox.com";

/// A Brightbox availability zone, as returned by `GET /1.0/zones`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Zone {
    /// Vendor-assigned identifier, e.g. "zon-328ds"
    pub id: String,

    /// Human-facing handle, e.g. "gb1-a"
    pub handle: String,
}

/// Zone listing access, kept behind a trait so topology code can be
/// exercised against canned zone lists
#[async_trait]
pub trait ZoneApi: Send + Sync {
    /// List every zone visible to the configured account
    async fn list_zones(&self) -> Result<Vec<Zone>>;
}

/// Configuration for the Brightbox API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_url: String,
    pub access_token: String,
    pub account_id: String,
}

impl ApiConfig {
    /// Create ApiConfig from environment variables
    ///
    /// Reads `BRIGHTBOX_ACCESS_TOKEN` and `BRIGHTBOX_ACCOUNT_ID`;
    /// `BRIGHTBOX_API_URL` overrides the default endpoint.
    pub fn from_env() -> Result<Self> {
        let access_token = std::env::var("BRIGHTBOX_ACCESS_TOKEN")
            .map_err(|_| BrightboxError::MissingEnvVar("BRIGHTBOX_ACCESS_TOKEN".to_string()))?;
        let account_id = std::env::var("BRIGHTBOX_ACCOUNT_ID")
            .map_err(|_| BrightboxError::MissingEnvVar("BRIGHTBOX_ACCOUNT_ID".to_string()))?;
        let api_url =
            std::env::var("BRIGHTBOX_API_URL").unwrap_or_else(|_| BRIGHTBOX_API_BASE.to_string());

        Ok(Self {
            api_url,
            access_token,
            account_id,
        })
    }

    /// The account scope this configuration operates under
    pub fn provider_context(&self) -> ProviderContext {
        ProviderContext::new(&self.account_id)
    }
}

/// Brightbox REST API client
pub struct BrightboxApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl BrightboxApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ZoneApi for BrightboxApiClient {
    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let url = format!("{}/1.0/zones", self.config.api_url);
        tracing::debug!("Fetching zones from {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body.describe(status.as_u16()),
                Err(_) => format!("HTTP {}", status),
            };
            return Err(BrightboxError::Api(message));
        }

        let zones: Vec<Zone> = response.json().await?;
        Ok(zones)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error_name: Option<String>,
    #[serde(default)]
    errors: Vec<String>,
}

impl ApiErrorBody {
    fn describe(&self, status: u16) -> String {
        let name = self.error_name.as_deref().unwrap_or("unknown error");
        if self.errors.is_empty() {
            format!("HTTP {}: {}", status, name)
        } else {
            format!("HTTP {}: {} ({})", status, name, self.errors.join(", "))
        }
    }
}
