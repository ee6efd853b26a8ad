use crate::transport::Support;

/// a single character of a phrase or acronym, tagged with
/// its position in the despaced character sequence and the
/// index of the word it came from. ordering is positional,
/// so iteration over any BTreeMap keyed by Glyph reads in
/// the same order as the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Glyph {
    index: usize,
    word: usize,
    symbol: char,
}

impl Glyph {
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn word(&self) -> usize {
        self.word
    }
    pub fn symbol(&self) -> char {
        self.symbol
    }
    /// case-insensitive character identity.
    /// 'a' matches 'A', 'a' does not match 'b'.
    pub fn matches(&self, other: &Self) -> bool {
        self.symbol.to_lowercase().eq(other.symbol.to_lowercase())
    }
}

impl Support for Glyph {}

impl From<(usize, usize, char)> for Glyph {
    fn from((index, word, symbol): (usize, usize, char)) -> Self {
        Self {
            index,
            word,
            symbol,
        }
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_case_insensitive() {
        let a = Glyph::from((0, 0, 'a'));
        let b = Glyph::from((5, 1, 'A'));
        let c = Glyph::from((2, 0, 'b'));
        assert!(a.matches(&b));
        assert!(b.matches(&a));
        assert!(!a.matches(&c));
    }

    #[test]
    fn ordering_is_positional() {
        let early = Glyph::from((0, 0, 'z'));
        let later = Glyph::from((9, 1, 'a'));
        assert!(early < later);
    }
}
