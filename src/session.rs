//! Wallet session state container
//!
//! Owns the session entity and the only operations that mutate it. All real
//! work is delegated to the wallet agent and the ledger-query client; this
//! layer sequences the calls, persists the minimal session data and publishes
//! state snapshots to subscribers.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, info, warn};

use crate::agent::WalletAgent;
use crate::error::WalletError;
use crate::horizon::{LedgerQuery, TEST_NETWORK};
use crate::storage::SessionStore;

/// Connection state shown to the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletSession {
    /// Account identifier once connected
    pub address: Option<String>,
    /// Human-readable native balance; None until fetched or on fetch failure
    pub balance: Option<String>,
    pub connected: bool,
    /// True only during an in-flight connect
    pub loading: bool,
    /// Last failure message; cleared on a new connect attempt and on disconnect
    pub error: Option<String>,
    /// Name of the network currently targeted
    pub network: Option<String>,
}

/// Owns the wallet session and its collaborators.
///
/// Connect resolves the network, then the public key, then the initial
/// balance, in that order. Each state change is pushed to subscribers as a
/// cloned snapshot; a subscriber unsubscribes by dropping its receiver.
pub struct SessionManager {
    agent: Box<dyn WalletAgent>,
    ledger: Box<dyn LedgerQuery>,
    store: SessionStore,
    session: WalletSession,
    subscribers: Vec<Sender<WalletSession>>,
}

impl SessionManager {
    pub fn new(
        agent: Box<dyn WalletAgent>,
        ledger: Box<dyn LedgerQuery>,
        store: SessionStore,
    ) -> Self {
        Self {
            agent,
            ledger,
            store,
            session: WalletSession::default(),
            subscribers: Vec::new(),
        }
    }

    /// Current state snapshot
    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    /// Register a subscriber; drop the receiver to unsubscribe
    pub fn subscribe(&mut self) -> Receiver<WalletSession> {
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push(sender);
        receiver
    }

    /// Restore a previously stored session without consulting the agent,
    /// then make exactly one balance-refresh attempt, ignoring its failure.
    pub async fn restore(&mut self) {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to read stored session: {e:#}");
                return;
            }
        };
        let Some(address) = stored.address else {
            return;
        };
        info!("Restoring session for {address}");
        self.session.address = Some(address.clone());
        self.session.connected = true;
        self.session.network = stored.network;
        self.notify();

        match self.ledger.native_balance(&address).await {
            Ok(balance) => {
                self.session.balance = Some(balance);
                self.notify();
            }
            Err(e) => debug!("Balance refresh after restore failed: {e}"),
        }
    }

    /// Connect via the wallet agent and fetch the initial balance.
    ///
    /// A second call while one is in flight is rejected without touching
    /// state. On any failure of the fallible sequence the session resets to
    /// disconnected and the failure message lands in `error`.
    pub async fn connect(&mut self) {
        if self.session.loading {
            warn!("Connect already in flight, ignoring");
            return;
        }
        self.session.loading = true;
        self.session.error = None;
        self.notify();

        if let Err(e) = self.try_connect().await {
            self.session.address = None;
            self.session.balance = None;
            self.session.connected = false;
            self.session.error = Some(e.to_string());
        }
        self.session.loading = false;
        self.notify();
    }

    async fn try_connect(&mut self) -> Result<(), WalletError> {
        // Network resolution never aborts the connect: fall back to the
        // ledger client's cached network, then testnet.
        let network_name = match self.agent.network_details().await {
            Ok(details) => {
                self.ledger.reconfigure(&details);
                details.network
            }
            Err(e) => {
                warn!("Failed to detect agent network, using fallback: {e}");
                self.ledger.network_name().unwrap_or(TEST_NETWORK).to_string()
            }
        };
        self.session.network = Some(network_name.clone());
        if let Err(e) = self.store.save_network(&network_name) {
            warn!("Failed to persist network: {e:#}");
        }

        let address = self.agent.public_key().await?;
        self.session.address = Some(address.clone());
        if let Err(e) = self.store.save_address(&address) {
            warn!("Failed to persist address: {e:#}");
        }
        self.session.connected = true;
        info!("Connected as {address}");

        // Initial balance fetch; a failure here aborts the whole connect
        let balance = self.ledger.native_balance(&address).await?;
        self.session.balance = Some(balance);
        Ok(())
    }

    /// Refresh the native balance of the given or current address.
    ///
    /// Silent no-op when no address is resolvable: no external call, no
    /// notification. A fetch failure lands in `error` and leaves the
    /// connection state alone.
    pub async fn refresh_balance(&mut self, address: Option<&str>) {
        let Some(address) = address
            .map(str::to_string)
            .or_else(|| self.session.address.clone())
        else {
            return;
        };
        match self.ledger.native_balance(&address).await {
            Ok(balance) => self.session.balance = Some(balance),
            Err(e) => {
                warn!("Failed to fetch balance: {e}");
                self.session.error = Some(e.to_string());
            }
        }
        self.notify();
    }

    /// Reset the session and drop the persisted keys. Never fails.
    pub fn disconnect(&mut self) {
        self.session.address = None;
        self.session.balance = None;
        self.session.connected = false;
        self.session.error = None;
        self.session.network = None;
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear stored session: {e:#}");
        }
        self.notify();
    }

    fn notify(&mut self) {
        let snapshot = self.session.clone();
        self.subscribers.retain(|s| s.send(snapshot.clone()).is_ok());
    }
}
