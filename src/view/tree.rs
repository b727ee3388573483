use crate::content::block::Stat;
use crate::content::page::{CallToAction, Footer, Hero, OverlayContent};
use crate::content::{ContentBlock, Glyph, Link, PanelId};

/// Binary layout choice made from the terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Compact,
    Full,
}

impl Presentation {
    pub fn for_width(width: u16, breakpoint: u16) -> Self {
        if width < breakpoint {
            Presentation::Compact
        } else {
            Presentation::Full
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: PanelId,
    pub label: &'static str,
    pub glyph: Glyph,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub enum Node<'a> {
    NavBar {
        brand: &'a str,
        /// Inline links, full presentation only.
        links: &'a [Link],
        /// Menu toggle glyph, compact presentation only.
        toggle: Option<Glyph>,
    },
    CompactMenu(&'a [Link]),
    Hero(&'a Hero),
    Stats(&'a [Stat]),
    TabStrip(Vec<Tab>),
    Panel {
        id: PanelId,
        content: ContentBlock,
    },
    CallToAction(&'a CallToAction),
    Footer(&'a Footer),
    Overlay(&'a OverlayContent),
}

/// Ordered output of one render pass.
#[derive(Debug, Clone)]
pub struct ViewTree<'a> {
    pub presentation: Presentation,
    pub nodes: Vec<Node<'a>>,
}

impl<'a> ViewTree<'a> {
    pub fn compact_menu(&self) -> Option<&'a [Link]> {
        self.nodes.iter().find_map(|n| match n {
            Node::CompactMenu(links) => Some(*links),
            _ => None,
        })
    }

    pub fn overlay(&self) -> Option<&'a OverlayContent> {
        self.nodes.iter().find_map(|n| match n {
            Node::Overlay(o) => Some(*o),
            _ => None,
        })
    }
}

#[cfg(test)]
impl<'a> ViewTree<'a> {
    /// Ids of every panel whose content block is present.
    pub fn panels(&self) -> Vec<PanelId> {
        self.nodes
            .iter()
            .filter_map(|n| match n {
                Node::Panel { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn nav_bar(&self) -> Option<&Node<'a>> {
        self.nodes.iter().find(|n| matches!(n, Node::NavBar { .. }))
    }
}
