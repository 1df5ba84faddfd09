// Library interface for the AgroCylo wallet companion
// Exposes public modules for testing

pub mod agent;
pub mod config;
pub mod error;
pub mod horizon;
pub mod session;
pub mod storage;

// GUI module - only include if iced feature is enabled
#[cfg(feature = "gui")]
pub mod gui;
