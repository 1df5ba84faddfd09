//! Reusable widgets: presentation primitives and the wallet read-outs

pub mod ui;
pub mod wallet;

pub use ui::{
    badge, card, card_content, card_footer, card_header, card_title, labeled_input, muted_text,
    page_container, styled_text, ui_button,
};
pub use wallet::{wallet_button, wallet_display};
