use crate::app::action::{Action, Scroll};
use crate::app::store::{Transition, ViewStore};
use crate::config::AppConfig;
use crate::content::{Page, PanelRegistry};

/// Everything the event loop owns: the view-state store plus terminal-only
/// concerns (body scroll position, quit and redraw flags).
pub struct AppState {
    pub config: AppConfig,
    pub view: ViewStore,
    pub page: Page,
    /// Body scroll offset in lines. Clamped by the painter.
    pub scroll: u16,
    /// Overlay scroll offset, reset whenever the overlay opens.
    pub overlay_scroll: u16,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, registry: PanelRegistry) -> Self {
        let page = Page::new(&config.links);
        Self {
            config,
            view: ViewStore::new(registry),
            page,
            scroll: 0,
            overlay_scroll: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::View(transition) => {
                if transition == Transition::ShowOverlay {
                    self.overlay_scroll = 0;
                }
                self.view.apply(transition);
            }
            Action::Scroll(scroll) => apply_scroll(&mut self.scroll, scroll),
            Action::OverlayScroll(scroll) => apply_scroll(&mut self.overlay_scroll, scroll),
            Action::Redraw => {}
            Action::Quit => {
                self.should_quit = true;
                return;
            }
        }
        self.dirty = true;
    }
}

fn apply_scroll(offset: &mut u16, scroll: Scroll) {
    *offset = match scroll {
        Scroll::Up(n) => offset.saturating_sub(n),
        Scroll::Down(n) => offset.saturating_add(n),
        Scroll::Top => 0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PanelId;

    fn state() -> AppState {
        let mut s = AppState::new(AppConfig::default(), PanelRegistry::builtin().unwrap());
        s.dirty = false;
        s
    }

    #[test]
    fn test_transition_marks_dirty() {
        let mut s = state();
        s.dispatch(Action::View(Transition::SelectPanel(PanelId::Quantum)));
        assert!(s.dirty);
        assert_eq!(s.view.state().active_panel, PanelId::Quantum);
        assert_eq!(s.view.revision(), 1);
    }

    #[test]
    fn test_scroll_saturates() {
        let mut s = state();
        s.dispatch(Action::Scroll(Scroll::Up(5)));
        assert_eq!(s.scroll, 0);
        s.dispatch(Action::Scroll(Scroll::Down(7)));
        s.dispatch(Action::Scroll(Scroll::Up(3)));
        assert_eq!(s.scroll, 4);
        s.dispatch(Action::Scroll(Scroll::Top));
        assert_eq!(s.scroll, 0);
    }

    #[test]
    fn test_quit_does_not_request_redraw() {
        let mut s = state();
        s.dispatch(Action::Quit);
        assert!(s.should_quit);
        assert!(!s.dirty);
    }

    #[test]
    fn test_scroll_leaves_view_state_alone() {
        let mut s = state();
        let before = *s.view.state();
        s.dispatch(Action::Scroll(Scroll::Down(3)));
        assert_eq!(*s.view.state(), before);
        assert_eq!(s.view.revision(), 0);
    }

    #[test]
    fn test_overlay_scroll_resets_on_open() {
        let mut s = state();
        s.dispatch(Action::View(Transition::ShowOverlay));
        s.dispatch(Action::OverlayScroll(Scroll::Down(6)));
        assert_eq!(s.overlay_scroll, 6);
        assert_eq!(s.scroll, 0);

        s.dispatch(Action::View(Transition::HideOverlay));
        s.dispatch(Action::View(Transition::ShowOverlay));
        assert_eq!(s.overlay_scroll, 0);
    }
}
