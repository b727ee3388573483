use crate::content::page::OverlayContent;
use crate::ui::layout::popup_area;
use crate::ui::text::{wrap, wrap_runs};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

/// Draw the popup. `scroll` is clamped so the last line stays at the bottom edge.
pub fn render(frame: &mut Frame, overlay: &OverlayContent, scroll: u16) {
    let area = frame.area();
    // Borders plus one column of padding on each side.
    let probe = popup_area(area, area.height);
    let inner_width = probe.width.saturating_sub(4) as usize;
    let lines = build_lines(overlay, inner_width);

    let popup = popup_area(area, lines.len() as u16 + 2);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", overlay.title))
        .title_style(Theme::title())
        .title_bottom(Line::from(" Esc/c close ").right_aligned())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_BLUE))
        .style(Theme::overlay_bg());

    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    if inner.width < 4 || inner.height == 0 {
        return;
    }
    let padded = Rect::new(inner.x + 1, inner.y, inner.width - 2, inner.height);
    let max_scroll = lines.len().saturating_sub(padded.height as usize);
    let offset = (scroll as usize).min(max_scroll);
    frame.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), padded);

    // Scrollbar sits in the right padding column.
    if max_scroll > 0 {
        let bar_area = Rect::new(inner.x + inner.width - 1, inner.y, 1, inner.height);
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .thumb_style(Theme::scrollbar_thumb())
                .track_style(Theme::scrollbar_track()),
            bar_area,
            &mut scrollbar_state,
        );
    }
}

pub fn build_lines(overlay: &OverlayContent, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.extend(wrap(overlay.subtitle, Theme::body(), width));
    lines.push(Line::default());

    for item in overlay.cards {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", item.glyph.symbol()), Theme::glyph(item.glyph)),
            Span::styled(item.card.title, Theme::glyph(item.glyph)),
        ]));
        for mut line in wrap(item.card.body, Theme::body(), width.saturating_sub(2)) {
            line.spans.insert(0, Span::raw("  "));
            lines.push(line);
        }
    }
    lines.push(Line::default());

    lines.extend(wrap_runs(
        &[
            ("Getting Started: ", Theme::notice().add_modifier(Modifier::BOLD)),
            (overlay.intro, Theme::notice()),
        ],
        width,
    ));

    // Verbatim, one terminal line per source line.
    for raw in overlay.instructions.lines() {
        lines.push(Line::from(Span::styled(format!(" {} ", raw), Theme::code())));
    }
    lines.push(Line::default());

    let repo = &overlay.repository;
    let repo_label = match repo.glyph {
        Some(glyph) => format!(" {} {} ", glyph.symbol(), repo.label),
        None => format!(" {} ", repo.label),
    };
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", overlay.close_label), Theme::button_secondary()),
        Span::raw("  "),
        Span::styled(repo_label, Theme::button_primary()),
        Span::styled(format!(" {}", repo.target.display()), Theme::link_target()),
    ]));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LinksConfig;
    use crate::content::page::LAUNCH_INSTRUCTIONS;
    use crate::content::Page;
    use crate::ui::text::line_text;

    #[test]
    fn test_instructions_are_verbatim_lines() {
        let page = Page::new(&LinksConfig::default());
        let text: Vec<_> = build_lines(&page.overlay, 60)
            .iter()
            .map(|l| line_text(l).trim().to_string())
            .collect();
        for raw in LAUNCH_INSTRUCTIONS.lines().filter(|l| !l.is_empty()) {
            assert!(text.iter().any(|t| t == raw), "missing line {raw:?}");
        }
    }

    #[test]
    fn test_all_cards_listed() {
        let page = Page::new(&LinksConfig::default());
        let text: String = build_lines(&page.overlay, 80)
            .iter()
            .map(line_text)
            .collect::<Vec<_>>()
            .join("\n");
        for title in [
            "Recyclable Classification",
            "Smart Agriculture Simulator",
            "Quantum AI Simulation",
            "Performance Analytics",
        ] {
            assert!(text.contains(title));
        }
        assert!(text.contains("View Repository"));
    }
}
