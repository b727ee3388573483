use crate::content::{Glyph, Link, LinkTarget};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, brand: &str, links: &[Link], toggle: Option<Glyph>) {
    frame.render_widget(Block::default().style(Theme::nav_bar()), area);

    let left = Line::from(vec![
        Span::styled(format!(" {} ", Glyph::Cpu.symbol()), Theme::glyph(Glyph::Cpu)),
        Span::styled(brand.to_string(), Theme::brand()),
    ]);
    frame.render_widget(Paragraph::new(left).style(Theme::nav_bar()), area);

    let mut right: Vec<Span> = Vec::new();
    for link in links {
        match link.target {
            LinkTarget::Section(_) => {
                right.push(Span::styled(format!("{}  ", link.label), Theme::link()));
            }
            LinkTarget::External(_) => {
                right.push(Span::styled(format!(" {} ", link.label), Theme::button_primary()));
                right.push(Span::raw(" "));
            }
        }
    }
    if let Some(glyph) = toggle {
        right.push(Span::styled(format!("{} ", glyph.symbol()), Theme::title()));
        right.push(Span::styled("(m) ", Theme::muted()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(right))
            .alignment(Alignment::Right)
            .style(Theme::nav_bar()),
        area,
    );
}

/// Height the compact menu needs for `links`, including its bottom border.
pub fn menu_height(links: &[Link]) -> u16 {
    links.len() as u16 + 1
}

pub fn render_menu(frame: &mut Frame, area: Rect, links: &[Link]) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border())
        .style(Theme::nav_bar());

    let items: Vec<ListItem> = links
        .iter()
        .map(|link| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("  {:<16}", link.label), Theme::link()),
                Span::styled(link.target.display().to_string(), Theme::link_target()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
