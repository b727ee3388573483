use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::view::Presentation;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const PAGE_KEYS: &[(&str, &str)] = &[
    ("1-4", "panel"),
    ("←→", "cycle"),
    ("m", "menu"),
    ("g", "get started"),
    ("↑↓", "scroll"),
    ("q", "quit"),
];

const OVERLAY_KEYS: &[(&str, &str)] = &[("Esc", "close"), ("↑↓", "scroll"), ("q", "quit")];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, presentation: Presentation) {
    let view = state.view.state();
    let mut parts: Vec<Span> = Vec::new();

    // Active panel label
    if let Some(record) = state.view.registry().get(view.active_panel) {
        parts.push(Span::styled(
            format!(" [{}] ", record.label),
            Style::default().fg(Theme::ACCENT_GREEN).bg(Theme::BG_ELEVATED),
        ));
    }

    // Presentation indicator, right-aligned
    let mode = match presentation {
        Presentation::Compact => "COMPACT",
        Presentation::Full => "FULL",
    };
    let mut used: usize = parts.iter().map(|s| s.content.width()).sum();

    // Key hints, as many as fit before the indicator
    if state.config.ui.show_key_hints {
        let keys = if view.overlay_visible {
            OVERLAY_KEYS
        } else {
            PAGE_KEYS
        };
        for (key, what) in keys {
            let key = format!(" {}", key);
            let what = format!(" {} ", what);
            let w = key.width() + what.width();
            if used + w + mode.len() + 4 > area.width as usize {
                break;
            }
            parts.push(Span::styled(key, Theme::status_key()));
            parts.push(Span::styled(what, Theme::status_bar()));
            used += w;
        }
    }

    let remaining = (area.width as usize).saturating_sub(used + mode.len() + 4);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", mode),
        Style::default().fg(Theme::ACCENT_CYAN).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
