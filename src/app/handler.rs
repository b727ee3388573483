use crate::app::action::{Action, Scroll};
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::app::store::Transition;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

const PAGE_LINES: u16 = 10;

/// Map one input event to the actions it triggers. Never mutates state;
/// the event loop dispatches the returned actions.
pub fn handle_event(state: &AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Interrupt => vec![Action::Quit],
    }
}

fn handle_terminal(state: &AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(_, _) => vec![Action::Redraw],
        _ => vec![],
    }
}

fn handle_mouse(state: &AppState, mouse: MouseEvent) -> Vec<Action> {
    let step = state.config.ui.scroll_step;
    let scroll = match mouse.kind {
        MouseEventKind::ScrollUp => Scroll::Up(step),
        MouseEventKind::ScrollDown => Scroll::Down(step),
        _ => return vec![],
    };
    // Wheel over the overlay scrolls the popup, never the page underneath.
    if state.view.state().overlay_visible {
        vec![Action::OverlayScroll(scroll)]
    } else {
        vec![Action::Scroll(scroll)]
    }
}

/// Scroll keys shared by the page body and the overlay.
fn scroll_for_key(code: KeyCode, step: u16) -> Option<Scroll> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Scroll::Up(step)),
        KeyCode::Down | KeyCode::Char('j') => Some(Scroll::Down(step)),
        KeyCode::PageUp => Some(Scroll::Up(PAGE_LINES)),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Scroll::Down(PAGE_LINES)),
        KeyCode::Home => Some(Scroll::Top),
        _ => None,
    }
}

fn handle_key(state: &AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Overlay captures all input when visible
    if state.view.state().overlay_visible {
        return handle_overlay_key(state, key);
    }

    let registry = state.view.registry();
    let active = state.view.state().active_panel;
    let step = state.config.ui.scroll_step;
    if let Some(scroll) = scroll_for_key(key.code, step) {
        return vec![Action::Scroll(scroll)];
    }

    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char('m') => vec![Action::View(Transition::ToggleMenu)],
        KeyCode::Char('g') | KeyCode::Enter => vec![Action::View(Transition::ShowOverlay)],
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            match registry.at(index) {
                Some(id) => vec![Action::View(Transition::SelectPanel(id))],
                None => vec![],
            }
        }
        KeyCode::Right | KeyCode::Tab => {
            vec![Action::View(Transition::SelectPanel(registry.next_after(active)))]
        }
        KeyCode::Left | KeyCode::BackTab => {
            vec![Action::View(Transition::SelectPanel(registry.prev_before(active)))]
        }
        _ => vec![],
    }
}

fn handle_overlay_key(state: &AppState, key: KeyEvent) -> Vec<Action> {
    if let Some(scroll) = scroll_for_key(key.code, state.config.ui.scroll_step) {
        return vec![Action::OverlayScroll(scroll)];
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('c') => vec![Action::View(Transition::HideOverlay)],
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::content::{PanelId, PanelRegistry};
    use crossterm::event::KeyEventState;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), PanelRegistry::builtin().unwrap())
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn press(state: &mut AppState, code: KeyCode) {
        for action in handle_event(state, key(code)) {
            state.dispatch(action);
        }
    }

    #[test]
    fn test_number_keys_select_by_position() {
        let s = state();
        assert_eq!(
            handle_event(&s, key(KeyCode::Char('4'))),
            vec![Action::View(Transition::SelectPanel(PanelId::Quantum))]
        );
        assert_eq!(
            handle_event(&s, key(KeyCode::Char('2'))),
            vec![Action::View(Transition::SelectPanel(PanelId::Features))]
        );
        assert!(handle_event(&s, key(KeyCode::Char('5'))).is_empty());
    }

    #[test]
    fn test_arrows_cycle_panels() {
        let mut s = state();
        press(&mut s, KeyCode::Left);
        assert_eq!(s.view.state().active_panel, PanelId::Quantum);
        press(&mut s, KeyCode::Right);
        press(&mut s, KeyCode::Tab);
        assert_eq!(s.view.state().active_panel, PanelId::Features);
    }

    #[test]
    fn test_menu_key_toggles() {
        let mut s = state();
        press(&mut s, KeyCode::Char('m'));
        assert!(s.view.state().menu_open);
        press(&mut s, KeyCode::Char('m'));
        assert!(!s.view.state().menu_open);
    }

    #[test]
    fn test_overlay_opens_and_captures_input() {
        let mut s = state();
        press(&mut s, KeyCode::Char('g'));
        assert!(s.view.state().overlay_visible);

        // Panel and menu keys are swallowed while the overlay is open.
        assert!(handle_event(&s, key(KeyCode::Char('3'))).is_empty());
        assert!(handle_event(&s, key(KeyCode::Char('m'))).is_empty());
        assert_eq!(
            handle_event(&s, key(KeyCode::Down)),
            vec![Action::OverlayScroll(Scroll::Down(3))]
        );
        assert_eq!(
            handle_event(&s, key(KeyCode::PageUp)),
            vec![Action::OverlayScroll(Scroll::Up(PAGE_LINES))]
        );

        press(&mut s, KeyCode::Esc);
        assert!(!s.view.state().overlay_visible);
        assert_eq!(s.view.state().active_panel, PanelId::Overview);
    }

    #[test]
    fn test_close_key_hides_overlay() {
        let mut s = state();
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Char('c'));
        assert!(!s.view.state().overlay_visible);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut s = state();
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&s, ctrl_c), vec![Action::Quit]);

        press(&mut s, KeyCode::Char('g'));
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&s, ctrl_c), vec![Action::Quit]);
        assert_eq!(handle_event(&s, AppEvent::Interrupt), vec![Action::Quit]);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let s = state();
        let release = AppEvent::Terminal(CEvent::Key(KeyEvent {
            code: KeyCode::Char('m'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }));
        assert!(handle_event(&s, release).is_empty());
    }

    #[test]
    fn test_wheel_scrolls_by_configured_step() {
        let s = state();
        let wheel = AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(handle_event(&s, wheel), vec![Action::Scroll(Scroll::Down(3))]);
    }

    #[test]
    fn test_wheel_scrolls_overlay_when_open() {
        let mut s = state();
        press(&mut s, KeyCode::Char('g'));
        let wheel = AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }));
        for action in handle_event(&s, wheel) {
            s.dispatch(action);
        }
        assert_eq!(s.overlay_scroll, 3);
        assert_eq!(s.scroll, 0);
    }

    #[test]
    fn test_resize_requests_redraw() {
        let s = state();
        assert_eq!(
            handle_event(&s, AppEvent::Terminal(CEvent::Resize(80, 24))),
            vec![Action::Redraw]
        );
    }
}
