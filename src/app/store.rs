//! View-state store: the three page state variables and their transitions.
//!
//! Each transition writes exactly one variable. [`ViewStore::apply`] is the
//! single entry point used by the event loop and bumps the revision once per
//! call, which the loop turns into one render pass.

use crate::content::{PanelId, PanelRegistry};

/// Snapshot of the page's interaction state. All combinations are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub menu_open: bool,
    pub active_panel: PanelId,
    pub overlay_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    ToggleMenu,
    SelectPanel(PanelId),
    ShowOverlay,
    HideOverlay,
}

#[derive(Debug)]
pub struct ViewStore {
    state: ViewState,
    registry: PanelRegistry,
    revision: u64,
}

impl ViewStore {
    /// Starts with the menu collapsed, the overlay hidden, and the overview
    /// panel active (or the registry's first panel if it has no overview).
    pub fn new(registry: PanelRegistry) -> Self {
        let active_panel = if registry.contains(PanelId::Overview) {
            PanelId::Overview
        } else {
            registry.first().id
        };
        Self {
            state: ViewState {
                menu_open: false,
                active_panel,
                overlay_visible: false,
            },
            registry,
            revision: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    /// Number of transitions applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::ToggleMenu => self.toggle_menu(),
            Transition::SelectPanel(id) => self.select_panel(id),
            Transition::ShowOverlay => self.show_overlay(),
            Transition::HideOverlay => self.hide_overlay(),
        }
        self.revision += 1;
        tracing::debug!(
            ?transition,
            revision = self.revision,
            state = ?self.state,
            "transition applied"
        );
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
    }

    /// Ids always come from the registry itself, so the membership check
    /// never fails for the built-in registry.
    pub fn select_panel(&mut self, id: PanelId) {
        if !self.registry.contains(id) {
            tracing::warn!(panel = %id, "ignoring selection of unregistered panel");
            return;
        }
        self.state.active_panel = id;
    }

    pub fn show_overlay(&mut self) {
        self.state.overlay_visible = true;
    }

    pub fn hide_overlay(&mut self) {
        self.state.overlay_visible = false;
    }
}
