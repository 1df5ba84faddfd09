//! Wallet connection widgets
//!
//! Pure render over a session snapshot: the connect/disconnect button and the
//! address / balance / network / error display shown in the navbar.

use iced::widget::{column, row, text};
use iced::Element;

use crate::gui::message::Message;
use crate::gui::theme::{font_size, spacing, AppTheme};
use crate::gui::widgets::ui::{badge, muted_text, ui_button, BadgeVariant, ButtonSize, ButtonVariant, TextVariant};
use crate::session::WalletSession;

/// Shorten an account ID for display: first 6 and last 6 characters
pub fn short_addr(addr: Option<&str>) -> String {
    match addr {
        None => "-".to_string(),
        Some(a) if a.len() <= 12 => a.to_string(),
        Some(a) => format!("{}...{}", &a[..6], &a[a.len() - 6..]),
    }
}

/// Normalize a network passphrase to a short label
pub fn network_display(network: Option<&str>) -> String {
    match network {
        None => "-".to_string(),
        Some(net) => {
            let lower = net.to_lowercase();
            if lower.contains("public") {
                "Mainnet".to_string()
            } else if lower.contains("test") {
                "Testnet".to_string()
            } else {
                net.to_string()
            }
        }
    }
}

/// Connect action when disconnected, disconnect action when connected
pub fn wallet_button(session: &WalletSession) -> Element<'static, Message> {
    if session.connected {
        ui_button(
            "Disconnect",
            ButtonVariant::Danger,
            ButtonSize::Sm,
            Some(Message::DisconnectPressed),
        )
    } else {
        let label = if session.loading {
            "Connecting..."
        } else {
            "Connect Wallet"
        };
        let on_press = (!session.loading).then_some(Message::ConnectPressed);
        ui_button(label, ButtonVariant::Primary, ButtonSize::Sm, on_press)
    }
}

/// Address, balance, network and error read-out
pub fn wallet_display(session: &WalletSession) -> Element<'static, Message> {
    let address = if session.connected {
        short_addr(session.address.as_deref())
    } else {
        "Not connected".to_string()
    };
    let balance = if session.connected {
        format!("{} XLM", session.balance.as_deref().unwrap_or("-"))
    } else {
        "-".to_string()
    };
    let network = network_display(session.network.as_deref());
    let network_badge = match network.as_str() {
        "Mainnet" => BadgeVariant::Success,
        "Testnet" => BadgeVariant::Warning,
        _ => BadgeVariant::Default,
    };

    let mut col = column![row![
        field("Address", &address),
        field("Balance", &balance),
        column![
            muted_text("Network", TextVariant::Caption),
            badge(&network, network_badge),
        ]
        .spacing(2),
    ]
    .spacing(spacing::LARGE)]
    .spacing(spacing::SMALL);

    if let Some(ref error) = session.error {
        col = col.push(
            text(format!("Error: {error}"))
                .size(font_size::SMALL)
                .color(AppTheme::default().danger),
        );
    }

    col.into()
}

fn field(label: &str, value: &str) -> Element<'static, Message> {
    column![
        muted_text(label, TextVariant::Caption),
        text(value.to_string()).size(font_size::NORMAL),
    ]
    .spacing(2)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_addr_keeps_six_character_ends() {
        assert_eq!(
            short_addr(Some("GABCDEF1234567890XYZ")),
            "GABCDE...890XYZ"
        );
    }

    #[test]
    fn short_addr_placeholder_when_absent() {
        assert_eq!(short_addr(None), "-");
    }

    #[test]
    fn short_addr_leaves_short_strings_alone() {
        assert_eq!(short_addr(Some("GABC")), "GABC");
    }

    #[test]
    fn network_display_normalizes_known_networks() {
        assert_eq!(
            network_display(Some("Public Global Stellar Network ; September 2015")),
            "Mainnet"
        );
        assert_eq!(
            network_display(Some("Test SDF Network ; September 2015")),
            "Testnet"
        );
    }

    #[test]
    fn network_display_passes_unknown_names_through() {
        assert_eq!(network_display(Some("Standalone Network")), "Standalone Network");
    }

    #[test]
    fn network_display_placeholder_when_absent() {
        assert_eq!(network_display(None), "-");
    }
}
