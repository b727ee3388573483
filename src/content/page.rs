//! Page chrome around the panels: navigation, hero, stats, call to action,
//! footer and the companion tool overlay.

use super::block::{Card, Stat};
use super::glyph::Glyph;
use crate::config::LinksConfig;

/// Launch steps for the companion analysis studio. Displayed verbatim, never run.
pub const LAUNCH_INSTRUCTIONS: &str = "# Install dependencies
pip install -r streamlit_requirements.txt

# Run the Streamlit app
streamlit run streamlit_app.py

# Open your browser to http://localhost:8501";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// In-page anchor such as `#features`.
    Section(&'static str),
    External(String),
}

impl LinkTarget {
    pub fn display(&self) -> &str {
        match self {
            LinkTarget::Section(anchor) => anchor,
            LinkTarget::External(url) => url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub glyph: Option<Glyph>,
    pub target: LinkTarget,
}

impl Link {
    fn section(label: &'static str, anchor: &'static str) -> Self {
        Self {
            label,
            glyph: None,
            target: LinkTarget::Section(anchor),
        }
    }

    fn external(label: &'static str, url: &str) -> Self {
        Self {
            label,
            glyph: None,
            target: LinkTarget::External(url.to_string()),
        }
    }

    fn with_glyph(mut self, glyph: Glyph) -> Self {
        self.glyph = Some(glyph);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Hero {
    pub badge: &'static str,
    pub title: &'static str,
    pub title_accent: &'static str,
    pub tagline: &'static str,
    /// Opens the overlay.
    pub primary_button: &'static str,
    pub secondary_button: &'static str,
}

#[derive(Debug, Clone)]
pub struct CallToAction {
    pub title: &'static str,
    pub body: &'static str,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone)]
pub struct FooterColumn {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct Footer {
    pub columns: &'static [FooterColumn],
    pub tagline: &'static str,
    pub copyright: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct OverlayCard {
    pub glyph: Glyph,
    pub card: Card,
}

#[derive(Debug, Clone)]
pub struct OverlayContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cards: &'static [OverlayCard],
    pub intro: &'static str,
    pub instructions: &'static str,
    pub close_label: &'static str,
    pub repository: Link,
}

/// Everything on the page except the panels themselves.
#[derive(Debug, Clone)]
pub struct Page {
    pub brand: &'static str,
    pub nav_links: Vec<Link>,
    /// Subset of the nav links listed in the compact menu.
    pub compact_links: Vec<Link>,
    pub hero: Hero,
    pub stats: &'static [Stat],
    pub call_to_action: CallToAction,
    pub footer: Footer,
    pub overlay: OverlayContent,
}

const STATS: &[Stat] = &[
    Stat { value: "2000+", caption: "Lines of Code" },
    Stat { value: "7", caption: "Python Scripts" },
    Stat { value: "35ms", caption: "Inference Time" },
    Stat { value: "<2MB", caption: "Model Size" },
];

const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn { title: "Project", items: &["Features", "Documentation", "GitHub"] },
    FooterColumn { title: "Resources", items: &["Quick Start", "API Reference", "Examples"] },
    FooterColumn { title: "Community", items: &["Contribute", "Issues", "Discussions"] },
    FooterColumn { title: "About", items: &["MIT License", "Privacy", "Contact"] },
];

const OVERLAY_CARDS: &[OverlayCard] = &[
    OverlayCard {
        glyph: Glyph::Cpu,
        card: Card {
            title: "Recyclable Classification",
            body: "Analyze recyclable items with real-time classification. Adjust model \
                   parameters and simulate predictions.",
        },
    },
    OverlayCard {
        glyph: Glyph::Leaf,
        card: Card {
            title: "Smart Agriculture Simulator",
            body: "Monitor sensor data, get AI recommendations, and visualize crop health \
                   predictions.",
        },
    },
    OverlayCard {
        glyph: Glyph::Zap,
        card: Card {
            title: "Quantum AI Simulation",
            body: "Compare classical vs quantum computing approaches to optimization problems.",
        },
    },
    OverlayCard {
        glyph: Glyph::Code,
        card: Card {
            title: "Performance Analytics",
            body: "Explore model performance metrics, accuracy data, and deployment cost \
                   analysis.",
        },
    },
];

impl Page {
    pub fn new(links: &LinksConfig) -> Self {
        let compact_links = vec![
            Link::section("Features", "#features"),
            Link::section("Agriculture", "#agriculture"),
            Link::section("Documentation", "#docs"),
        ];
        let mut nav_links = compact_links.clone();
        nav_links.push(Link::external("GitHub", &links.repository_url));

        Self {
            brand: "Edge AI",
            nav_links,
            compact_links,
            hero: Hero {
                badge: "Pioneering Tomorrow's AI Innovations",
                title: "Edge AI at the",
                title_accent: " Edge",
                tagline: "Deploy intelligent AI models on edge devices for real-time inference \
                          without cloud latency. Reduce response times, enhance privacy, and \
                          enable autonomous decision-making.",
                primary_button: "Get Started",
                secondary_button: "View Documentation",
            },
            stats: STATS,
            call_to_action: CallToAction {
                title: "Ready to Deploy Edge AI?",
                body: "Get started with our comprehensive documentation, production-ready \
                       code, and automated deployment scripts.",
                links: vec![
                    Link::external("View on GitHub", &links.repository_url)
                        .with_glyph(Glyph::GitBranch),
                    Link::external("Read Docs", &links.docs_url).with_glyph(Glyph::BookOpen),
                ],
            },
            footer: Footer {
                columns: FOOTER_COLUMNS,
                tagline: "AI Future Directions — Pioneering Tomorrow's AI Innovations",
                copyright: "© 2025 Edge AI Innovations. MIT Licensed.",
            },
            overlay: OverlayContent {
                title: "Launch Analysis Studio",
                subtitle: "Interactive data analysis powered by Streamlit",
                cards: OVERLAY_CARDS,
                intro: "To run the Analysis Studio locally, follow these steps:",
                instructions: LAUNCH_INSTRUCTIONS,
                close_label: "Close",
                repository: Link::external("View Repository", &links.repository_url)
                    .with_glyph(Glyph::GitBranch),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_follow_config() {
        let links = LinksConfig {
            repository_url: "https://example.org/edge-ai".into(),
            docs_url: "https://docs.example.org".into(),
        };
        let page = Page::new(&links);
        assert_eq!(
            page.nav_links.last().unwrap().target,
            LinkTarget::External("https://example.org/edge-ai".into())
        );
        assert_eq!(page.call_to_action.links[1].target.display(), "https://docs.example.org");
        assert_eq!(page.overlay.repository.target.display(), "https://example.org/edge-ai");
    }

    #[test]
    fn test_compact_links_are_in_page_anchors() {
        let page = Page::new(&LinksConfig::default());
        let anchors: Vec<_> = page.compact_links.iter().map(|l| l.target.display()).collect();
        assert_eq!(anchors, vec!["#features", "#agriculture", "#docs"]);
    }

    #[test]
    fn test_instructions_name_fixed_port() {
        assert!(LAUNCH_INSTRUCTIONS.contains("streamlit run streamlit_app.py"));
        assert!(LAUNCH_INSTRUCTIONS.ends_with("http://localhost:8501"));
    }
}
