//! Theme and styling for the application

use iced::Color;

/// Application color palette
pub struct AppTheme {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            // Harvest green as primary
            primary: Color::from_rgb(0.13, 0.63, 0.33),
            secondary: Color::from_rgb(0.83, 0.62, 0.15),
            success: Color::from_rgb(0.20, 0.73, 0.45),
            warning: Color::from_rgb(0.95, 0.77, 0.20),
            danger: Color::from_rgb(0.86, 0.20, 0.27),
            background: Color::from_rgb(0.05, 0.05, 0.06),
            surface: Color::from_rgb(0.11, 0.11, 0.13),
            border: Color::from_rgb(0.25, 0.25, 0.30),
            text: Color::from_rgb(0.95, 0.95, 0.97),
            text_muted: Color::from_rgb(0.60, 0.60, 0.65),
        }
    }
}

/// Spacing constants
pub mod spacing {
    pub const SMALL: u16 = 8;
    pub const MEDIUM: u16 = 16;
    pub const LARGE: u16 = 24;
    pub const XLARGE: u16 = 32;
}

/// Font sizes
pub mod font_size {
    pub const SMALL: u16 = 12;
    pub const NORMAL: u16 = 14;
    pub const MEDIUM: u16 = 16;
    pub const LARGE: u16 = 20;
    pub const XLARGE: u16 = 24;
    pub const TITLE: u16 = 32;
}
