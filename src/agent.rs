//! Wallet-agent collaborator
//!
//! The desktop stand-in for a browser wallet extension: a local process that
//! holds key material and answers network and public-key queries over an HTTP
//! bridge. Private keys never cross this interface.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::WalletError;

/// Default local bridge endpoint
pub const DEFAULT_AGENT_URL: &str = "http://127.0.0.1:8137";

/// Network details reported by the agent
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkDetails {
    /// Full network name, e.g. "Test SDF Network ; September 2015"
    pub network: String,

    /// Query endpoint the agent suggests for this network, if any
    #[serde(rename = "networkUrl", default)]
    pub network_url: Option<String>,
}

/// Key-holding agent operations consumed by the session layer
#[async_trait]
pub trait WalletAgent: Send + Sync {
    /// Name (and optional query URL) of the network the agent targets
    async fn network_details(&self) -> Result<NetworkDetails, WalletError>;

    /// Active public key. The agent may prompt the user for approval;
    /// a declined or absent key surfaces as an error.
    async fn public_key(&self) -> Result<String, WalletError>;
}

#[derive(Debug, Deserialize)]
struct PublicKeyResponse {
    #[serde(rename = "publicKey")]
    public_key: String,
}

/// HTTP implementation speaking JSON to the local agent bridge
pub struct HttpWalletAgent {
    http: reqwest::Client,
    base_url: String,
}

impl HttpWalletAgent {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, WalletError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| WalletError::AgentUnreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WalletError::AgentUnreachable(format!(
                "agent returned status {}",
                response.status()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WalletError::AgentUnreachable(e.to_string()))
    }
}

impl Default for HttpWalletAgent {
    fn default() -> Self {
        Self::new(DEFAULT_AGENT_URL)
    }
}

#[async_trait]
impl WalletAgent for HttpWalletAgent {
    async fn network_details(&self) -> Result<NetworkDetails, WalletError> {
        self.get_json("/v1/network-details").await
    }

    async fn public_key(&self) -> Result<String, WalletError> {
        let response: PublicKeyResponse = self.get_json("/v1/public-key").await?;
        if response.public_key.is_empty() {
            return Err(WalletError::WalletUnavailable);
        }
        Ok(response.public_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_details_parsing() {
        let details: NetworkDetails = serde_json::from_str(
            r#"{"network": "Test SDF Network ; September 2015", "networkUrl": "https://horizon-testnet.stellar.org"}"#,
        )
        .unwrap();
        assert_eq!(details.network, "Test SDF Network ; September 2015");
        assert_eq!(
            details.network_url.as_deref(),
            Some("https://horizon-testnet.stellar.org")
        );
    }

    #[test]
    fn network_details_url_is_optional() {
        let details: NetworkDetails =
            serde_json::from_str(r#"{"network": "Standalone Network"}"#).unwrap();
        assert_eq!(details.network, "Standalone Network");
        assert!(details.network_url.is_none());
    }

    #[test]
    fn agent_url_trailing_slash_is_trimmed() {
        let agent = HttpWalletAgent::new("http://localhost:8137/");
        assert_eq!(agent.base_url, "http://localhost:8137");
    }
}
