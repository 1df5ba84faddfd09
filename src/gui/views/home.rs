//! Home page: navbar with the wallet widgets over a hero section

use iced::widget::{column, container, row, text};
use iced::{Element, Length, Theme};

use crate::gui::message::Message;
use crate::gui::theme::{spacing, AppTheme};
use crate::gui::widgets::ui::{
    card, card_content, card_footer, card_header, card_title, labeled_input, muted_text,
    page_container, styled_text, ui_button, ButtonSize, ButtonVariant, CardPadding, CardVariant,
    ContainerSize, TextVariant,
};
use crate::gui::widgets::wallet::{wallet_button, wallet_display};
use crate::session::WalletSession;

/// Render the home page
pub fn view(session: &WalletSession, lookup_address: &str) -> Element<'static, Message> {
    column![
        navbar(session),
        page_container(
            column![hero(), lookup_card(lookup_address)].spacing(spacing::XLARGE),
            ContainerSize::Md,
        ),
    ]
    .spacing(spacing::XLARGE)
    .into()
}

fn navbar(session: &WalletSession) -> Element<'static, Message> {
    container(
        row![
            styled_text("AgroCylo", TextVariant::H3),
            // Spacer
            container(text("")).width(Length::Fill),
            wallet_display(session),
            wallet_button(session),
        ]
        .spacing(spacing::LARGE)
        .align_y(iced::Alignment::Center),
    )
    .padding(spacing::MEDIUM)
    .width(Length::Fill)
    .style(|_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(AppTheme::default().surface)),
        ..Default::default()
    })
    .into()
}

fn hero() -> Element<'static, Message> {
    container(
        column![
            styled_text("AgroCylo Global", TextVariant::H1),
            muted_text("Welcome to AGROCYLO", TextVariant::Body),
        ]
        .spacing(spacing::MEDIUM)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding(spacing::XLARGE)
    .into()
}

fn lookup_card(lookup_address: &str) -> Element<'static, Message> {
    let error = lookup_error(lookup_address);
    let valid = error.is_none() && !lookup_address.is_empty();

    card(
        column![
            card_header(card_title("Check an account balance")),
            card_content(muted_text(
                "Look up the native XLM balance of any funded account.",
                TextVariant::BodySmall,
            )),
            labeled_input(
                "Account",
                "G...",
                lookup_address,
                Message::LookupAddressChanged,
                error,
                Some("Stellar account ID"),
            ),
            card_footer(ui_button(
                "Check Balance",
                ButtonVariant::Outline,
                ButtonSize::Md,
                valid.then_some(Message::LookupPressed),
            )),
        ]
        .spacing(spacing::SMALL),
        CardVariant::Elevated,
        CardPadding::Lg,
    )
}

// Presentation-level validation only; the ledger is the authority
fn lookup_error(value: &str) -> Option<&'static str> {
    if value.is_empty() || (value.len() == 56 && value.starts_with('G')) {
        None
    } else {
        Some("Enter a full Stellar account ID (starts with G, 56 characters)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_error_accepts_empty_and_well_formed_input() {
        assert!(lookup_error("").is_none());
        assert!(
            lookup_error("GDQP2KPQGKIHYJGXNUIYOMHARUARCA7DJT5FO2FFOOKY3B2WSQHG4W37").is_none()
        );
    }

    #[test]
    fn lookup_error_flags_malformed_input() {
        assert!(lookup_error("GABC").is_some());
        assert!(
            lookup_error("XDQP2KPQGKIHYJGXNUIYOMHARUARCA7DJT5FO2FFOOKY3B2WSQHG4W37").is_some()
        );
    }
}
