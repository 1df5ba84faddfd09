//! Messages (events) that drive the application state machine

use crate::session::WalletSession;

/// All possible messages/events in the application
#[derive(Debug, Clone)]
pub enum Message {
    // Wallet connection
    ConnectPressed,
    DisconnectPressed,

    // Balance refresh
    RefreshTick,
    LookupAddressChanged(String),
    LookupPressed,

    // Snapshot delivered by the session container
    SessionChanged(WalletSession),

    // Completion marker for fire-and-forget tasks
    TaskDone,
}
