//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` rather than hardcoding `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    // Text colors
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);

    // Semantic colors
    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);
    pub const INFO: Color = Color::Rgb(0, 217, 255);
}

/// Folder input field styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = Color::Rgb(0, 217, 255); // Electric cyan
    pub const BORDER_UNFOCUSED: Color = Color::Rgb(90, 92, 119);
    pub const HINT: Color = Color::Rgb(198, 120, 221); // Vibrant purple
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Results table styles
pub mod results {
    use super::*;

    pub const BORDER_FOCUSED: Color = Color::Rgb(0, 217, 255);
    pub const BORDER_UNFOCUSED: Color = Color::Rgb(90, 92, 119);
    pub const BORDER_ERROR: Color = Color::Rgb(224, 108, 117);
    pub const BACKGROUND: Color = Color::Rgb(26, 26, 46);

    pub const HEADER: Style = Style::new()
        .fg(Color::Rgb(255, 217, 61))
        .add_modifier(Modifier::BOLD);
    pub const PLAYER: Color = Color::Rgb(236, 236, 244);
    pub const NUMBER: Color = Color::Rgb(0, 217, 255);
    pub const PENDING: Color = Color::Rgb(130, 133, 158);
    pub const ERROR_TEXT: Color = Color::Rgb(224, 108, 117);
}

/// Per-source error panel styles
pub mod errors {
    use super::*;

    pub const BORDER: Color = Color::Rgb(255, 217, 61);
    pub const TEXT: Color = Color::Rgb(255, 184, 108); // Orange
}

/// Help line at the bottom of the screen
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(0, 217, 255);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
}

/// Notification colors, one set per notification type
pub mod notification {
    use super::*;

    pub const INFO_FG: Color = palette::TEXT;
    pub const INFO_BG: Color = Color::Rgb(45, 45, 72);
    pub const INFO_BORDER: Color = palette::TEXT_MUTED;

    pub const WARNING_FG: Color = palette::BG_DARK;
    pub const WARNING_BG: Color = palette::WARNING;
    pub const WARNING_BORDER: Color = palette::WARNING;

    pub const ERROR_FG: Color = palette::TEXT;
    pub const ERROR_BG: Color = Color::Rgb(150, 50, 60);
    pub const ERROR_BORDER: Color = palette::ERROR;
}
