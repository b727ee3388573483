use crate::content::Glyph;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(15, 23, 42);
    pub const BG_SURFACE: Color = Color::Rgb(30, 41, 59);
    pub const BG_ELEVATED: Color = Color::Rgb(51, 65, 85);
    pub const BG_CODE: Color = Color::Rgb(2, 6, 23);
    pub const BORDER_DIM: Color = Color::Rgb(71, 85, 105);

    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Rgb(203, 213, 225);
    pub const TEXT_MUTED: Color = Color::Rgb(148, 163, 184);

    pub const ACCENT_BLUE: Color = Color::Rgb(96, 165, 250);
    pub const ACCENT_CYAN: Color = Color::Rgb(34, 211, 238);
    pub const ACCENT_GREEN: Color = Color::Rgb(74, 222, 128);
    pub const ACCENT_PURPLE: Color = Color::Rgb(192, 132, 252);
    pub const BUTTON: Color = Color::Rgb(37, 99, 235);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn brand() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_DARK)
    }

    pub fn link() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn link_target() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn body() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn emphasis() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_title() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn section_title() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn badge() -> Style {
        Style::default().fg(Self::ACCENT_BLUE).bg(Self::BG_SURFACE)
    }

    pub fn button_primary() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .bg(Self::BUTTON)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_secondary() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_active() -> Style {
        Self::button_primary()
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_SURFACE)
    }

    pub fn stat_value(index: usize) -> Style {
        let color = if index % 2 == 0 {
            Self::ACCENT_BLUE
        } else {
            Self::ACCENT_CYAN
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn table_header() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn rule() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn code() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_CODE)
    }

    pub fn notice() -> Style {
        Style::default().fg(Self::ACCENT_BLUE)
    }

    pub fn overlay_bg() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn status_key() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Self::ACCENT_BLUE)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Self::BG_ELEVATED)
    }

    /// Accent color the page pairs with each glyph.
    pub fn glyph(glyph: Glyph) -> Style {
        let color = match glyph {
            Glyph::Cpu | Glyph::Code => Self::ACCENT_BLUE,
            Glyph::Leaf => Self::ACCENT_GREEN,
            Glyph::Zap => Self::ACCENT_PURPLE,
            _ => Self::ACCENT_CYAN,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}
