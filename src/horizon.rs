//! Horizon ledger-query client
//!
//! Owns the resolved query endpoint. The session layer reconfigures the
//! client when the detected network changes; there is no hidden module-level
//! cache of the endpoint or network name.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::info;

use crate::agent::NetworkDetails;
use crate::error::WalletError;

/// Passphrase-style network names reported by wallet agents
pub const PUBLIC_NETWORK: &str = "Public Global Stellar Network ; September 2015";
pub const TEST_NETWORK: &str = "Test SDF Network ; September 2015";

/// Default to testnet
pub const DEFAULT_HORIZON_URL: &str = "https://horizon-testnet.stellar.org";

/// Map well-known network names to Horizon endpoints
fn horizon_url_for(network: &str) -> Option<&'static str> {
    match network {
        PUBLIC_NETWORK => Some("https://horizon.stellar.org"),
        TEST_NETWORK => Some(DEFAULT_HORIZON_URL),
        _ => None,
    }
}

/// A single balance entry on an account record
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceRecord {
    pub asset_type: String,
    pub balance: String,
}

/// The subset of a Horizon account record this application reads
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRecord {
    pub balances: Vec<BalanceRecord>,
}

impl AccountRecord {
    /// Native-asset balance, or "0" when the account carries none
    pub fn native_balance(&self) -> String {
        self.balances
            .iter()
            .find(|b| b.asset_type == "native")
            .map(|b| b.balance.clone())
            .unwrap_or_else(|| "0".to_string())
    }
}

/// Read-only ledger access consumed by the session layer
#[async_trait]
pub trait LedgerQuery: Send + Sync {
    /// Point the client at the endpoint for the given network
    fn reconfigure(&mut self, details: &NetworkDetails);

    /// Network name the client is currently configured for, if any
    fn network_name(&self) -> Option<&str>;

    /// Native-asset balance of the account, as the ledger reports it
    async fn native_balance(&self, address: &str) -> Result<String, WalletError>;
}

/// HTTP client for a Horizon query endpoint
pub struct HorizonClient {
    http: reqwest::Client,
    base_url: String,
    network_name: Option<String>,
    // A pinned client never changes its endpoint on reconfigure
    pinned: bool,
}

impl HorizonClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            network_name: None,
            pinned: false,
        }
    }

    /// A client pinned to a fixed endpoint (configuration override)
    pub fn pinned(base_url: impl Into<String>) -> Self {
        let mut client = Self::new(base_url);
        client.pinned = true;
        client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Load the full account record for an address
    pub async fn load_account(&self, address: &str) -> Result<AccountRecord, WalletError> {
        let url = format!("{}/accounts/{}", self.base_url, address);
        let response = self.http.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(WalletError::AccountNotFound),
            status if !status.is_success() => Err(WalletError::UnexpectedStatus(status.as_u16())),
            _ => Ok(response.json::<AccountRecord>().await?),
        }
    }
}

impl Default for HorizonClient {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON_URL)
    }
}

#[async_trait]
impl LedgerQuery for HorizonClient {
    fn reconfigure(&mut self, details: &NetworkDetails) {
        if self.pinned {
            self.network_name = Some(details.network.clone());
            return;
        }
        if self.network_name.as_deref() == Some(details.network.as_str()) {
            return;
        }
        let url = horizon_url_for(&details.network)
            .map(str::to_string)
            .or_else(|| details.network_url.clone())
            .unwrap_or_else(|| DEFAULT_HORIZON_URL.to_string());
        info!("Switching to network: {} ({})", details.network, url);
        self.base_url = url.trim_end_matches('/').to_string();
        self.network_name = Some(details.network.clone());
    }

    fn network_name(&self) -> Option<&str> {
        self.network_name.as_deref()
    }

    async fn native_balance(&self, address: &str) -> Result<String, WalletError> {
        let account = self.load_account(address).await?;
        Ok(account.native_balance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(network: &str, url: Option<&str>) -> NetworkDetails {
        NetworkDetails {
            network: network.to_string(),
            network_url: url.map(str::to_string),
        }
    }

    #[test]
    fn known_networks_map_to_horizon_urls() {
        assert_eq!(
            horizon_url_for(PUBLIC_NETWORK),
            Some("https://horizon.stellar.org")
        );
        assert_eq!(horizon_url_for(TEST_NETWORK), Some(DEFAULT_HORIZON_URL));
        assert_eq!(horizon_url_for("Standalone Network"), None);
    }

    #[test]
    fn reconfigure_switches_endpoint_for_known_network() {
        let mut client = HorizonClient::default();
        client.reconfigure(&details(PUBLIC_NETWORK, None));
        assert_eq!(client.base_url(), "https://horizon.stellar.org");
        assert_eq!(client.network_name(), Some(PUBLIC_NETWORK));
    }

    #[test]
    fn reconfigure_prefers_agent_url_for_unknown_network() {
        let mut client = HorizonClient::default();
        client.reconfigure(&details(
            "Standalone Network",
            Some("http://localhost:8000"),
        ));
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn reconfigure_falls_back_to_default_for_unknown_network_without_url() {
        let mut client = HorizonClient::new("https://horizon.stellar.org");
        client.reconfigure(&details("Standalone Network", None));
        assert_eq!(client.base_url(), DEFAULT_HORIZON_URL);
    }

    #[test]
    fn reconfigure_is_a_noop_for_unchanged_network() {
        let mut client = HorizonClient::default();
        client.reconfigure(&details("Standalone Network", Some("http://localhost:8000")));
        // Same network again, this time without a URL: endpoint must not move
        client.reconfigure(&details("Standalone Network", None));
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn pinned_client_keeps_its_endpoint() {
        let mut client = HorizonClient::pinned("http://localhost:8000");
        client.reconfigure(&details(PUBLIC_NETWORK, None));
        assert_eq!(client.base_url(), "http://localhost:8000");
        // The network name is still tracked for display purposes
        assert_eq!(client.network_name(), Some(PUBLIC_NETWORK));
    }

    #[test]
    fn native_balance_extraction() {
        let account: AccountRecord = serde_json::from_str(
            r#"{"balances": [
                {"asset_type": "credit_alphanum4", "balance": "12.0000000"},
                {"asset_type": "native", "balance": "100.5000000"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(account.native_balance(), "100.5000000");
    }

    #[test]
    fn missing_native_balance_reads_as_zero() {
        let account: AccountRecord = serde_json::from_str(
            r#"{"balances": [{"asset_type": "credit_alphanum4", "balance": "12.0000000"}]}"#,
        )
        .unwrap();
        assert_eq!(account.native_balance(), "0");
    }
}
