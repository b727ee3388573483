use crate::app::store::Transition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Up(u16),
    Down(u16),
    Top,
}

/// What the event loop should do in response to an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View(Transition),
    Scroll(Scroll),
    /// Scroll inside the overlay popup.
    OverlayScroll(Scroll),
    Redraw,
    Quit,
}
