//! Configuration options for document transforms

/// How the text of a lone child is judged when deciding emptiness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emptiness {
    /// Whitespace-only text counts as empty
    #[default]
    Blank,
    /// Only the empty string counts as empty
    Strict,
}

impl Emptiness {
    /// Check if `text` is blank under this rule
    pub fn is_blank(self, text: &str) -> bool {
        match self {
            Emptiness::Blank => text.trim().is_empty(),
            Emptiness::Strict => text.is_empty(),
        }
    }
}

/// Options for document transforms
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Rule used to detect empty elements
    pub emptiness: Emptiness,
}
