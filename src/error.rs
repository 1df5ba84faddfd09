//! Error types for the wallet session layer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Could not get public key from wallet agent")]
    WalletUnavailable,

    #[error("Wallet agent unreachable: {0}")]
    AgentUnreachable(String),

    #[error("Account not found on this network. Please ensure the account is funded.")]
    AccountNotFound,

    #[error("Ledger query returned status {0}")]
    UnexpectedStatus(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WalletError>;
