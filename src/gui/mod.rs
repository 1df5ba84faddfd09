//! Graphical user interface for the AgroCylo wallet companion
//!
//! Built with Iced framework for a native-feeling desktop application.

pub mod app;
pub mod message;
pub mod theme;
pub mod views;
pub mod widgets;

pub use app::CyloApp;

use crate::config::Config;

/// Run the GUI application
pub fn run(config: Config) -> iced::Result {
    iced::application(CyloApp::title, CyloApp::update, CyloApp::view)
        .theme(CyloApp::theme)
        .subscription(CyloApp::subscription)
        .run_with(move || CyloApp::new(config))
}
