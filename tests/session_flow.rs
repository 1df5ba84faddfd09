//! End-to-end wallet session flows against stub collaborators

mod common;

use agrocylo::gui::widgets::wallet::{network_display, short_addr};
use agrocylo::horizon::TEST_NETWORK;
use agrocylo::session::SessionManager;
use agrocylo::storage::{SessionStore, StoredSession};

use common::{StubAgent, StubLedger};

const ADDRESS: &str = "GDQP2KPQGKIHYJGXNUIYOMHARUARCA7DJT5FO2FFOOKY3B2WSQHG4W37";
const BALANCE: &str = "42.5000000";

#[tokio::test]
async fn restored_session_shows_address_then_balance() {
    let dir = tempfile::tempdir().unwrap();
    SessionStore::new(dir.path()).save_address(ADDRESS).unwrap();

    let mut manager = SessionManager::new(
        Box::new(StubAgent::offline()),
        Box::new(StubLedger::with_balance(BALANCE)),
        SessionStore::new(dir.path()),
    );
    let events = manager.subscribe();

    manager.restore().await;

    // First snapshot: the stored address renders immediately, balance pending
    let first = events.try_recv().unwrap();
    assert!(first.connected);
    assert_eq!(short_addr(first.address.as_deref()), "GDQP2K...HG4W37");
    assert!(first.balance.is_none());
    assert_eq!(network_display(first.network.as_deref()), "-");

    // Second snapshot: the fetched balance replaces the placeholder
    let second = events.try_recv().unwrap();
    assert_eq!(second.balance.as_deref(), Some(BALANCE));
}

#[tokio::test]
async fn connect_then_disconnect_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = SessionManager::new(
        Box::new(StubAgent::online(ADDRESS)),
        Box::new(StubLedger::with_balance(BALANCE)),
        SessionStore::new(dir.path()),
    );

    manager.connect().await;
    {
        let session = manager.session();
        assert!(session.connected);
        assert_eq!(session.address.as_deref(), Some(ADDRESS));
        assert_eq!(session.balance.as_deref(), Some(BALANCE));
        assert_eq!(network_display(session.network.as_deref()), "Testnet");
    }
    let stored = SessionStore::new(dir.path()).load().unwrap();
    assert_eq!(stored.address.as_deref(), Some(ADDRESS));
    assert_eq!(stored.network.as_deref(), Some(TEST_NETWORK));

    manager.disconnect();
    let session = manager.session();
    assert!(!session.connected);
    assert!(session.address.is_none());
    assert!(session.error.is_none());
    assert_eq!(
        SessionStore::new(dir.path()).load().unwrap(),
        StoredSession::default()
    );
}

#[tokio::test]
async fn failed_connect_leaves_no_partial_state_behind() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = SessionManager::new(
        Box::new(StubAgent::online(ADDRESS)),
        Box::new(StubLedger::not_found()),
        SessionStore::new(dir.path()),
    );

    manager.connect().await;

    let session = manager.session();
    assert!(!session.connected);
    assert!(session.address.is_none());
    assert!(session.balance.is_none());
    assert!(!session.loading);
    assert!(session
        .error
        .as_deref()
        .unwrap()
        .contains("Account not found"));
}
