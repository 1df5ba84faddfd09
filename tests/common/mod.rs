//! Shared stub collaborators for integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use agrocylo::agent::{NetworkDetails, WalletAgent};
use agrocylo::error::WalletError;
use agrocylo::horizon::{LedgerQuery, TEST_NETWORK};

/// Agent stub: `None` fields fail the corresponding query
pub struct StubAgent {
    pub network: Option<NetworkDetails>,
    pub key: Option<String>,
}

impl StubAgent {
    pub fn online(key: &str) -> Self {
        Self {
            network: Some(NetworkDetails {
                network: TEST_NETWORK.to_string(),
                network_url: None,
            }),
            key: Some(key.to_string()),
        }
    }

    pub fn offline() -> Self {
        Self {
            network: None,
            key: None,
        }
    }
}

#[async_trait]
impl WalletAgent for StubAgent {
    async fn network_details(&self) -> Result<NetworkDetails, WalletError> {
        self.network
            .clone()
            .ok_or_else(|| WalletError::AgentUnreachable("agent offline".to_string()))
    }

    async fn public_key(&self) -> Result<String, WalletError> {
        self.key.clone().ok_or(WalletError::WalletUnavailable)
    }
}

/// Ledger stub serving a fixed balance; counts queries
pub struct StubLedger {
    balance: Option<String>,
    network: Option<String>,
    pub calls: Arc<AtomicUsize>,
}

impl StubLedger {
    pub fn with_balance(balance: &str) -> Self {
        Self {
            balance: Some(balance.to_string()),
            network: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn not_found() -> Self {
        Self {
            balance: None,
            network: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl LedgerQuery for StubLedger {
    fn reconfigure(&mut self, details: &NetworkDetails) {
        self.network = Some(details.network.clone());
    }

    fn network_name(&self) -> Option<&str> {
        self.network.as_deref()
    }

    async fn native_balance(&self, _address: &str) -> Result<String, WalletError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.balance.clone().ok_or(WalletError::AccountNotFound)
    }
}
