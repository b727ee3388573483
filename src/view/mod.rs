//! Pure projection from view state to a [`ViewTree`].
//!
//! [`project`] reads the state, the panel registry and the static page, and
//! returns the nodes to paint in order. It performs no I/O and keeps no
//! state between calls; the painter in [`crate::ui`] calls it once per frame.

mod tree;

pub use tree::{Node, Presentation, Tab, ViewTree};

use crate::app::store::ViewState;
use crate::content::{Glyph, Page, PanelRegistry};

pub fn project<'a>(
    state: &ViewState,
    registry: &PanelRegistry,
    page: &'a Page,
    presentation: Presentation,
) -> ViewTree<'a> {
    let mut nodes = Vec::with_capacity(10);

    let (links, toggle) = match presentation {
        Presentation::Full => (page.nav_links.as_slice(), None),
        Presentation::Compact => {
            let glyph = if state.menu_open {
                Glyph::Close
            } else {
                Glyph::Menu
            };
            (&[][..], Some(glyph))
        }
    };
    nodes.push(Node::NavBar {
        brand: page.brand,
        links,
        toggle,
    });

    if state.menu_open {
        nodes.push(Node::CompactMenu(&page.compact_links));
    }

    nodes.push(Node::Hero(&page.hero));
    nodes.push(Node::Stats(page.stats));

    nodes.push(Node::TabStrip(
        registry
            .records()
            .iter()
            .map(|r| Tab {
                id: r.id,
                label: r.label,
                glyph: r.glyph,
                active: r.id == state.active_panel,
            })
            .collect(),
    ));

    if let Some(record) = registry.get(state.active_panel) {
        nodes.push(Node::Panel {
            id: record.id,
            content: record.content,
        });
    }

    nodes.push(Node::CallToAction(&page.call_to_action));
    nodes.push(Node::Footer(&page.footer));

    if state.overlay_visible {
        nodes.push(Node::Overlay(&page.overlay));
    }

    ViewTree { presentation, nodes }
}
