//! Reusable presentation primitives
//!
//! Stateless view helpers parameterized by variant and size enums. They carry
//! no business logic; pages and the wallet widgets compose them. Unstyled
//! behavior (focus, hover, disabled) comes from the underlying iced widgets.

use iced::widget::{button, column, container, text, text_input};
use iced::{Background, Border, Color, Element, Length, Padding, Shadow, Theme, Vector};

use crate::gui::theme::{font_size, spacing, AppTheme};

/// Visual variants for action buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

/// Button sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    Md,
    Lg,
}

impl ButtonSize {
    fn padding(self) -> u16 {
        match self {
            ButtonSize::Sm => 6,
            ButtonSize::Md => 10,
            ButtonSize::Lg => 15,
        }
    }

    fn text_size(self) -> u16 {
        match self {
            ButtonSize::Sm => font_size::SMALL,
            ButtonSize::Md => font_size::NORMAL,
            ButtonSize::Lg => font_size::MEDIUM,
        }
    }
}

/// Styled action button. `on_press: None` renders it disabled.
pub fn ui_button<'a, Message: Clone + 'a>(
    label: &str,
    variant: ButtonVariant,
    size: ButtonSize,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    button(text(label.to_string()).size(size.text_size()))
        .on_press_maybe(on_press)
        .padding(size.padding())
        .style(move |_theme: &Theme, status| button_style(variant, status))
        .into()
}

fn button_style(variant: ButtonVariant, status: button::Status) -> button::Style {
    let palette = AppTheme::default();
    let (background, text_color, border_color) = match variant {
        ButtonVariant::Primary => (Some(palette.primary), Color::WHITE, palette.primary),
        ButtonVariant::Secondary => (Some(palette.secondary), palette.background, palette.secondary),
        ButtonVariant::Outline => (None, palette.text, palette.border),
        ButtonVariant::Ghost => (None, palette.text, Color::TRANSPARENT),
        ButtonVariant::Danger => (Some(palette.danger), Color::WHITE, palette.danger),
    };

    let background = match status {
        button::Status::Hovered => match background {
            Some(color) => Some(shade(color, 1.15)),
            None => Some(palette.surface),
        },
        button::Status::Pressed => match background {
            Some(color) => Some(shade(color, 0.85)),
            None => Some(shade(palette.surface, 0.85)),
        },
        button::Status::Disabled => background.map(|color| faded(color)),
        _ => background,
    };

    let text_color = match status {
        button::Status::Disabled => faded(text_color),
        _ => text_color,
    };

    button::Style {
        background: background.map(Background::Color),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Card variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    Elevated,
    Outlined,
    Filled,
}

/// Card padding steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPadding {
    None,
    Sm,
    Md,
    Lg,
}

/// Surface panel wrapping arbitrary content
pub fn card<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    variant: CardVariant,
    padding: CardPadding,
) -> Element<'a, Message> {
    let padding = match padding {
        CardPadding::None => 0,
        CardPadding::Sm => spacing::SMALL,
        CardPadding::Md => spacing::MEDIUM,
        CardPadding::Lg => spacing::LARGE,
    };
    container(content)
        .padding(padding)
        .style(move |_theme: &Theme| card_style(variant))
        .into()
}

fn card_style(variant: CardVariant) -> container::Style {
    let palette = AppTheme::default();
    let background = match variant {
        CardVariant::Elevated | CardVariant::Filled => Some(Background::Color(palette.surface)),
        CardVariant::Outlined => None,
    };
    let shadow = match variant {
        CardVariant::Elevated => Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        _ => Shadow::default(),
    };
    container::Style {
        background,
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow,
        ..Default::default()
    }
}

/// Card heading with the standard bottom gap
pub fn card_header<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(content)
        .padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: spacing::MEDIUM as f32,
            left: 0.0,
        })
        .into()
}

pub fn card_title<'a, Message: 'a>(label: &str) -> Element<'a, Message> {
    styled_text(label, TextVariant::H4).into()
}

/// Card body; rendered in the muted text color
pub fn card_content<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(content)
        .style(|_theme: &Theme| container::Style {
            text_color: Some(AppTheme::default().text_muted),
            ..Default::default()
        })
        .into()
}

/// Card action strip with the standard top gap
pub fn card_footer<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(content)
        .padding(Padding {
            top: spacing::MEDIUM as f32,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        })
        .into()
}

/// Badge variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Outline,
}

/// Small status label
pub fn badge<'a, Message: 'a>(label: &str, variant: BadgeVariant) -> Element<'a, Message> {
    container(text(label.to_string()).size(font_size::SMALL))
        .padding(Padding {
            top: 2.0,
            right: 8.0,
            bottom: 2.0,
            left: 8.0,
        })
        .style(move |_theme: &Theme| badge_style(variant))
        .into()
}

fn badge_style(variant: BadgeVariant) -> container::Style {
    let palette = AppTheme::default();
    let (background, text_color, border_color) = match variant {
        BadgeVariant::Default => (Some(palette.surface), palette.text_muted, Color::TRANSPARENT),
        BadgeVariant::Primary => (Some(faded(palette.primary)), palette.text, Color::TRANSPARENT),
        BadgeVariant::Secondary => {
            (Some(faded(palette.secondary)), palette.text, Color::TRANSPARENT)
        }
        BadgeVariant::Success => (Some(faded(palette.success)), palette.text, Color::TRANSPARENT),
        BadgeVariant::Warning => (Some(faded(palette.warning)), palette.text, Color::TRANSPARENT),
        BadgeVariant::Error => (Some(faded(palette.danger)), palette.text, Color::TRANSPARENT),
        BadgeVariant::Outline => (None, palette.text, palette.border),
    };
    container::Style {
        background: background.map(Background::Color),
        text_color: Some(text_color),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

/// Text variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVariant {
    H1,
    H2,
    H3,
    H4,
    Body,
    BodySmall,
    Caption,
    Label,
}

impl TextVariant {
    fn size(self) -> u16 {
        match self {
            TextVariant::H1 => font_size::TITLE,
            TextVariant::H2 => font_size::XLARGE,
            TextVariant::H3 => font_size::LARGE,
            TextVariant::H4 => font_size::MEDIUM,
            TextVariant::Body => font_size::MEDIUM,
            TextVariant::BodySmall => font_size::NORMAL,
            TextVariant::Caption => font_size::SMALL,
            TextVariant::Label => font_size::NORMAL,
        }
    }
}

/// Typographic text; captions render muted
pub fn styled_text<'a>(content: &str, variant: TextVariant) -> iced::widget::Text<'a> {
    let palette = AppTheme::default();
    let color = match variant {
        TextVariant::Caption => palette.text_muted,
        _ => palette.text,
    };
    text(content.to_string()).size(variant.size()).color(color)
}

pub fn muted_text<'a>(content: &str, variant: TextVariant) -> iced::widget::Text<'a> {
    text(content.to_string())
        .size(variant.size())
        .color(AppTheme::default().text_muted)
}

/// Page container sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerSize {
    Sm,
    Md,
    Lg,
    Full,
}

impl ContainerSize {
    fn max_width(self) -> Option<f32> {
        match self {
            ContainerSize::Sm => Some(640.0),
            ContainerSize::Md => Some(768.0),
            ContainerSize::Lg => Some(1024.0),
            ContainerSize::Full => None,
        }
    }
}

/// Horizontally centered page container with a capped width
pub fn page_container<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    size: ContainerSize,
) -> Element<'a, Message> {
    let inner = container(content)
        .width(Length::Fill)
        .padding(Padding {
            top: 0.0,
            right: spacing::MEDIUM as f32,
            bottom: 0.0,
            left: spacing::MEDIUM as f32,
        });
    let inner = match size.max_width() {
        Some(max) => inner.max_width(max),
        None => inner,
    };
    container(inner)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

/// Labeled text input with an optional error or hint line.
/// The error line wins when both are present.
pub fn labeled_input<'a, Message: Clone + 'a>(
    label: &str,
    placeholder: &str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    error: Option<&str>,
    hint: Option<&str>,
) -> Element<'a, Message> {
    let palette = AppTheme::default();
    let has_error = error.is_some();

    let input = text_input(placeholder, value)
        .on_input(on_input)
        .padding(10)
        .style(move |_theme: &Theme, status| input_style(has_error, status));

    let mut col = column![styled_text(label, TextVariant::Label), input].spacing(5);

    if let Some(message) = error {
        col = col.push(
            text(message.to_string())
                .size(font_size::SMALL)
                .color(palette.danger),
        );
    } else if let Some(message) = hint {
        col = col.push(muted_text(message, TextVariant::Caption));
    }

    col.into()
}

fn input_style(has_error: bool, status: text_input::Status) -> text_input::Style {
    let palette = AppTheme::default();
    let border_color = if has_error {
        palette.danger
    } else {
        match status {
            text_input::Status::Focused => palette.primary,
            _ => palette.border,
        }
    };
    text_input::Style {
        background: Background::Color(palette.background),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        icon: palette.text_muted,
        placeholder: palette.text_muted,
        value: palette.text,
        selection: palette.primary,
    }
}

fn shade(color: Color, factor: f32) -> Color {
    Color {
        r: (color.r * factor).min(1.0),
        g: (color.g * factor).min(1.0),
        b: (color.b * factor).min(1.0),
        a: color.a,
    }
}

fn faded(color: Color) -> Color {
    Color {
        a: color.a * 0.5,
        ..color
    }
}
