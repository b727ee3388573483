//! Static page content: the panel registry, the content blocks it points at,
//! and the surrounding page chrome (nav, hero, call to action, footer, overlay).
//!
//! Nothing in here carries behavior. Content is plain data that the
//! [`crate::view`] projection reads and the [`crate::ui`] painter draws.

pub mod block;
pub mod glyph;
pub mod page;
pub mod registry;

pub use block::ContentBlock;
pub use glyph::Glyph;
pub use page::{Link, LinkTarget, Page};
pub use registry::{PanelId, PanelRegistry};
