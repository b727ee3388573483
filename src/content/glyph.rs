/// Symbolic icon references used across the page.
///
/// The painter decides how a glyph looks; content only names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Code,
    Zap,
    Leaf,
    Cpu,
    Menu,
    Close,
    ArrowRight,
    GitBranch,
    BookOpen,
}

impl Glyph {
    /// Terminal rendition of the glyph.
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Code => "</>",
            Glyph::Zap => "⚡",
            Glyph::Leaf => "❦",
            Glyph::Cpu => "▣",
            Glyph::Menu => "≡",
            Glyph::Close => "✕",
            Glyph::ArrowRight => "→",
            Glyph::GitBranch => "⑂",
            Glyph::BookOpen => "▤",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle_symbols_differ() {
        assert_ne!(Glyph::Menu.symbol(), Glyph::Close.symbol());
    }
}
