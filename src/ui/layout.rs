use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub nav_bar: Rect,
    pub compact_menu: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

/// `menu_height` is zero when the compact menu is not part of the frame.
pub fn compute_layout(area: Rect, menu_height: u16) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Nav bar
            Constraint::Length(menu_height), // Compact menu
            Constraint::Min(3),              // Page body
            Constraint::Length(1),           // Status bar
        ])
        .split(area);

    AppLayout {
        nav_bar: chunks[0],
        compact_menu: chunks[1],
        body: chunks[2],
        status_bar: chunks[3],
    }
}

/// Centered popup rect: 70% width, sized to `content_height`, bounded by the frame.
pub fn popup_area(area: Rect, content_height: u16) -> Rect {
    let w = ((u32::from(area.width) * 70 / 100) as u16)
        .max(60)
        .min(area.width.saturating_sub(4));
    let h = content_height.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_height_is_reserved() {
        let l = compute_layout(Rect::new(0, 0, 80, 30), 5);
        assert_eq!(l.nav_bar.height, 1);
        assert_eq!(l.compact_menu.height, 5);
        assert_eq!(l.status_bar.y, 29);
        assert_eq!(l.body.height, 30 - 1 - 5 - 1);
    }

    #[test]
    fn test_popup_fits_small_frames() {
        let area = Rect::new(0, 0, 50, 12);
        let popup = popup_area(area, 40);
        assert!(popup.width <= 46);
        assert!(popup.height <= 10);
        assert!(popup.right() <= area.right());
    }

    #[test]
    fn test_popup_on_very_wide_frame() {
        let area = Rect::new(0, 0, 1000, 30);
        let popup = popup_area(area, 20);
        assert_eq!(popup.width, 700);
        assert_eq!(popup.x, 150);
        assert_eq!(popup.height, 20);
    }
}
