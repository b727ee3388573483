//! The scrollable page body: hero, stats, tab strip, active panel, call to
//! action and footer, flattened into styled lines.

use crate::content::block::{Element, Stat};
use crate::content::page::{CallToAction, Footer, Hero};
use crate::content::{ContentBlock, Glyph, Link, PanelId};
use crate::ui::text::{center, fit, wrap, wrap_runs};
use crate::ui::theme::Theme;
use crate::view::{Node, Tab};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use unicode_width::UnicodeWidthStr;

const MAX_TEXT_WIDTH: usize = 96;

pub fn render(frame: &mut Frame, area: Rect, nodes: &[&Node], scroll: u16) {
    if area.width < 4 || area.height == 0 {
        return;
    }
    // Leave the last column for the scrollbar.
    let text_width = area.width.saturating_sub(1);
    let lines = build_lines(nodes, text_width as usize);

    let max_scroll = lines.len().saturating_sub(area.height as usize);
    let offset = (scroll as usize).min(max_scroll);

    let text_area = Rect::new(area.x, area.y, text_width, area.height);
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(Theme::BG_DARK))
        .scroll((offset as u16, 0));
    frame.render_widget(paragraph, text_area);

    if max_scroll > 0 {
        let bar_area = Rect::new(area.x + text_width, area.y, 1, area.height);
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

pub fn build_lines(nodes: &[&Node], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for node in nodes {
        match node {
            Node::Hero(hero) => hero_lines(&mut lines, hero, width),
            Node::Stats(stats) => stat_lines(&mut lines, stats, width),
            Node::TabStrip(tabs) => tab_lines(&mut lines, tabs, width),
            Node::Panel { id, content } => panel_lines(&mut lines, *id, content, width),
            Node::CallToAction(cta) => cta_lines(&mut lines, cta, width),
            Node::Footer(footer) => footer_lines(&mut lines, footer, width),
            Node::NavBar { .. } | Node::CompactMenu(_) | Node::Overlay(_) => {}
        }
    }
    lines
}

fn blank(lines: &mut Vec<Line<'static>>) {
    lines.push(Line::default());
}

fn rule(lines: &mut Vec<Line<'static>>, width: usize) {
    lines.push(Line::from(Span::styled("─".repeat(width), Theme::rule())));
}

fn centered(mut wrapped: Vec<Line<'static>>) -> Vec<Line<'static>> {
    for line in &mut wrapped {
        line.alignment = Some(Alignment::Center);
    }
    wrapped
}

fn hero_lines(lines: &mut Vec<Line<'static>>, hero: &Hero, width: usize) {
    let text_width = width.min(MAX_TEXT_WIDTH);
    blank(lines);
    lines.push(Line::from(Span::styled(format!("  {}  ", hero.badge), Theme::badge())).centered());
    blank(lines);
    lines.push(
        Line::from(vec![
            Span::styled(hero.title, Theme::heading()),
            Span::styled(hero.title_accent, Theme::brand()),
        ])
        .centered(),
    );
    blank(lines);
    lines.extend(centered(wrap(hero.tagline, Theme::body(), text_width)));
    blank(lines);
    lines.push(
        Line::from(vec![
            Span::styled(
                format!(" {} {} ", hero.primary_button, Glyph::ArrowRight.symbol()),
                Theme::button_primary(),
            ),
            Span::styled(" (g) ", Theme::muted()),
            Span::raw("   "),
            Span::styled(format!(" {} ", hero.secondary_button), Theme::button_secondary()),
        ])
        .centered(),
    );
    blank(lines);
}

fn stat_lines(lines: &mut Vec<Line<'static>>, stats: &[Stat], width: usize) {
    if stats.is_empty() {
        return;
    }
    let col = (width / stats.len()).max(1);
    let values: Vec<Span> = stats
        .iter()
        .enumerate()
        .map(|(i, s)| Span::styled(center(s.value, col), Theme::stat_value(i)))
        .collect();
    let captions: Vec<Span> = stats
        .iter()
        .map(|s| Span::styled(center(s.caption, col), Theme::muted()))
        .collect();
    lines.push(Line::from(values));
    lines.push(Line::from(captions));
    blank(lines);
}

fn tab_lines(lines: &mut Vec<Line<'static>>, tabs: &[Tab], width: usize) {
    let mut spans = Vec::new();
    let mut used = 0;
    for (i, tab) in tabs.iter().enumerate() {
        let label = format!(" {} {} {} ", i + 1, tab.glyph.symbol(), tab.label);
        let w = label.width() + 1;
        if used > 0 && used + w > width {
            lines.push(Line::from(std::mem::take(&mut spans)).centered());
            used = 0;
        }
        let style = if tab.active {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        used += w;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans).centered());
    }
    blank(lines);
}

fn panel_lines(lines: &mut Vec<Line<'static>>, id: PanelId, content: &ContentBlock, width: usize) {
    let inner = width.saturating_sub(4).clamp(1, MAX_TEXT_WIDTH);
    let indent = || Span::raw("  ");
    let mut body = Vec::new();

    for element in content.elements {
        match element {
            Element::Heading(text) => {
                body.push(Line::from(Span::styled(text.to_string(), Theme::heading())));
                blank(&mut body);
            }
            Element::Paragraph(runs) => {
                let styled: Vec<_> = runs
                    .iter()
                    .map(|r| {
                        let style = if r.emphasis {
                            Theme::emphasis()
                        } else {
                            Theme::body()
                        };
                        (r.text, style)
                    })
                    .collect();
                body.extend(wrap_runs(&styled, inner));
                blank(&mut body);
            }
            Element::Bullets { title, items } => {
                body.push(Line::from(Span::styled(title.to_string(), Theme::card_title())));
                for item in *items {
                    body.push(Line::from(vec![
                        indent(),
                        Span::styled(format!("• {}", item), Theme::body()),
                    ]));
                }
                blank(&mut body);
            }
            Element::Cards { title, cards } => {
                if let Some(title) = title {
                    body.push(Line::from(Span::styled(title.to_string(), Theme::card_title())));
                    blank(&mut body);
                }
                for card in *cards {
                    body.push(Line::from(Span::styled(
                        format!("▸ {}", card.title),
                        Theme::card_title(),
                    )));
                    for mut line in wrap(card.body, Theme::muted(), inner.saturating_sub(2)) {
                        line.spans.insert(0, indent());
                        body.push(line);
                    }
                }
                blank(&mut body);
            }
            Element::Details { title, entries } => {
                body.push(Line::from(Span::styled(title.to_string(), Theme::section_title())));
                for entry in *entries {
                    body.push(Line::from(vec![
                        indent(),
                        Span::styled(entry.title.to_string(), Theme::card_title()),
                    ]));
                    for mut line in wrap(entry.body, Theme::muted(), inner.saturating_sub(4)) {
                        line.spans.insert(0, Span::raw("    "));
                        body.push(line);
                    }
                }
                blank(&mut body);
            }
            Element::Stats(stats) => stat_lines(&mut body, stats, inner),
            Element::Table { headers, rows } => {
                table_lines(&mut body, headers, rows, inner);
                blank(&mut body);
            }
        }
    }

    // Top rule carries the panel's in-page anchor.
    let anchor = format!("─ #{} ", id);
    lines.push(Line::from(vec![
        Span::styled(anchor.clone(), Theme::rule()),
        Span::styled("─".repeat(width.saturating_sub(anchor.width())), Theme::rule()),
    ]));
    for mut line in body {
        line.spans.insert(0, Span::raw("  "));
        lines.push(line);
    }
    rule(lines, width);
    blank(lines);
}

fn table_lines(
    lines: &mut Vec<Line<'static>>,
    headers: &[&str],
    rows: &[&[&str]],
    width: usize,
) {
    let cols = headers.len();
    if cols == 0 {
        return;
    }
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(cols) {
            widths[i] = widths[i].max(cell.width());
        }
    }
    // Shrink to the available width, keeping two columns of gap per cell.
    let budget = width.saturating_sub(2 * cols).max(cols);
    let total: usize = widths.iter().sum();
    if total > budget {
        for w in &mut widths {
            *w = (*w * budget / total).max(1);
        }
    }

    let header: Vec<Span> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| Span::styled(format!("{}  ", fit(h, widths[i])), Theme::table_header()))
        .collect();
    lines.push(Line::from(header));
    let rule_width: usize = widths.iter().map(|w| w + 2).sum();
    lines.push(Line::from(Span::styled("─".repeat(rule_width), Theme::rule())));
    for row in rows {
        let cells: Vec<Span> = row
            .iter()
            .enumerate()
            .take(cols)
            .map(|(i, cell)| {
                let style = if i == 0 {
                    Theme::title()
                } else {
                    Theme::body()
                };
                Span::styled(format!("{}  ", fit(cell, widths[i])), style)
            })
            .collect();
        lines.push(Line::from(cells));
    }
}

fn link_spans(link: &Link) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let label = match link.glyph {
        Some(glyph) => format!(" {} {} ", glyph.symbol(), link.label),
        None => format!(" {} ", link.label),
    };
    spans.push(Span::styled(label, Theme::button_secondary()));
    spans.push(Span::styled(format!(" {}", link.target.display()), Theme::link_target()));
    spans
}

fn cta_lines(lines: &mut Vec<Line<'static>>, cta: &CallToAction, width: usize) {
    let text_width = width.min(MAX_TEXT_WIDTH);
    lines.push(Line::from(Span::styled(cta.title, Theme::heading())).centered());
    blank(lines);
    lines.extend(centered(wrap(cta.body, Theme::body(), text_width)));
    blank(lines);
    let mut spans = Vec::new();
    for (i, link) in cta.links.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("    "));
        }
        spans.extend(link_spans(link));
    }
    lines.push(Line::from(spans).centered());
    blank(lines);
}

fn footer_lines(lines: &mut Vec<Line<'static>>, footer: &Footer, width: usize) {
    rule(lines, width);
    let cols = footer.columns.len().max(1);
    let col = (width / cols).max(1);
    lines.push(Line::from(
        footer
            .columns
            .iter()
            .map(|c| Span::styled(fit(&format!(" {}", c.title), col), Theme::card_title()))
            .collect::<Vec<_>>(),
    ));
    let depth = footer.columns.iter().map(|c| c.items.len()).max().unwrap_or(0);
    for row in 0..depth {
        lines.push(Line::from(
            footer
                .columns
                .iter()
                .map(|c| {
                    let item = c.items.get(row).copied().unwrap_or("");
                    Span::styled(fit(&format!(" {}", item), col), Theme::muted())
                })
                .collect::<Vec<_>>(),
        ));
    }
    blank(lines);
    lines.push(Line::from(Span::styled(footer.tagline, Theme::muted())).centered());
    lines.push(Line::from(Span::styled(footer.copyright, Theme::muted())).centered());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::store::{Transition, ViewStore};
    use crate::config::LinksConfig;
    use crate::content::{Page, PanelRegistry};
    use crate::ui::text::line_text;
    use crate::view::{project, Presentation};

    fn body_text(store: &ViewStore, page: &Page) -> String {
        let tree = project(store.state(), store.registry(), page, Presentation::Full);
        let nodes: Vec<&Node> = tree.nodes.iter().collect();
        build_lines(&nodes, 100)
            .iter()
            .map(line_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_only_active_panel_text_is_drawn() {
        let mut store = ViewStore::new(PanelRegistry::builtin().unwrap());
        let page = Page::new(&LinksConfig::default());

        let text = body_text(&store, &page);
        assert!(text.contains("TensorFlow Lite Edge AI"));
        assert!(text.contains("#overview"));
        assert!(!text.contains("Key Features"));

        store.apply(Transition::SelectPanel(PanelId::Features));
        let text = body_text(&store, &page);
        assert!(text.contains("Key Features"));
        assert!(text.contains("Model Quantization"));
        assert!(!text.contains("TensorFlow Lite Edge AI"));

        store.apply(Transition::SelectPanel(PanelId::Quantum));
        let text = body_text(&store, &page);
        assert!(text.contains("Quantum AI vs Classical AI"));
        assert!(text.contains("Massive Parallelism"));
        assert!(!text.contains("Key Features"));
    }

    #[test]
    fn test_static_sections_are_drawn() {
        let store = ViewStore::new(PanelRegistry::builtin().unwrap());
        let page = Page::new(&LinksConfig::default());
        let text = body_text(&store, &page);
        assert!(text.contains("Pioneering Tomorrow's AI Innovations"));
        assert!(text.contains("Inference Time"));
        assert!(text.contains("Ready to Deploy Edge AI?"));
        assert!(text.contains("© 2025 Edge AI Innovations. MIT Licensed."));
    }

    #[test]
    fn test_table_shrinks_to_width() {
        let mut lines = Vec::new();
        table_lines(
            &mut lines,
            &["Aspect", "Classical AI", "Quantum AI"],
            &[&["Processing", "Sequential/Limited Parallel", "Massive Parallelism"]],
            40,
        );
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| line_text(l).width() <= 40));
    }
}
