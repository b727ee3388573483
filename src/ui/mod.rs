mod body;
mod layout;
mod nav_bar;
mod overlay;
mod status_bar;
mod text;
mod theme;

use crate::app::state::AppState;
use crate::view::{self, Node, Presentation};
use ratatui::prelude::*;

/// Paint one frame. Projects the current view state, then draws the tree
/// top to bottom with the overlay last so it sits above the page.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let presentation = Presentation::for_width(area.width, state.config.ui.compact_breakpoint);
    let tree = view::project(
        state.view.state(),
        state.view.registry(),
        &state.page,
        presentation,
    );

    let menu_height = tree.compact_menu().map(nav_bar::menu_height).unwrap_or(0);
    let app_layout = layout::compute_layout(area, menu_height);

    let mut body_nodes: Vec<&Node> = Vec::new();
    for node in &tree.nodes {
        match node {
            Node::NavBar {
                brand,
                links,
                toggle,
            } => nav_bar::render(frame, app_layout.nav_bar, brand, links, *toggle),
            Node::CompactMenu(links) => nav_bar::render_menu(frame, app_layout.compact_menu, links),
            Node::Overlay(_) => {}
            _ => body_nodes.push(node),
        }
    }

    body::render(frame, app_layout.body, &body_nodes, state.scroll);
    status_bar::render(frame, app_layout.status_bar, state, tree.presentation);

    if let Some(content) = tree.overlay() {
        overlay::render(frame, content, state.overlay_scroll);
    }
}
