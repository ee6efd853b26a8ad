use super::glyph::Glyph;
use super::potential::Potential;
use crate::Arbitrary;
use crate::Probability;
use std::collections::BTreeMap;

/// an ordered, immutable sequence of Glyphs derived from input text.
///
/// two constructions exist, matching the two alignment modes:
/// - From<&str> keeps every non-whitespace character (full-phrase mode)
/// - Phrase::initials keeps the first character of each word
#[derive(Debug, Clone)]
pub struct Phrase(Vec<Glyph>);

impl Phrase {
    /// first character of each whitespace-separated word.
    /// the typical acronym pattern, so positions are word indices.
    pub fn initials(text: &str) -> Self {
        Self(
            text.split_whitespace()
                .enumerate()
                .filter_map(|(word, w)| w.chars().next().map(|c| (word, c)))
                .map(|(word, c)| Glyph::from((word, word, c)))
                .collect(),
        )
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.0.iter()
    }
    pub fn n(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// uniform marginal over the support, summing to 1.
    pub fn mass(&self) -> Potential {
        self.glyphs()
            .copied()
            .map(|x| (x, 1. / self.n() as Probability))
            .collect::<BTreeMap<_, _>>()
            .into()
    }
}

impl From<&str> for Phrase {
    fn from(text: &str) -> Self {
        let mut index = 0;
        let mut glyphs = Vec::new();
        for (word, w) in text.split_whitespace().enumerate() {
            for c in w.chars() {
                glyphs.push(Glyph::from((index, word, c)));
                index += 1;
            }
        }
        Self(glyphs)
    }
}

impl std::fmt::Display for Phrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.glyphs().try_for_each(|g| write!(f, "{}", g))
    }
}

impl Arbitrary for Phrase {
    fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let words = rng.random_range(1..=4);
        let text = (0..words)
            .map(|_| {
                let len = rng.random_range(2..=8);
                (0..len)
                    .map(|_| (b'a' + rng.random_range(0..26u8)) as char)
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(" ");
        Self::from(text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Density;

    #[test]
    fn despaces_and_tracks_words() {
        let phrase = Phrase::from("Machine Learning");
        assert_eq!(phrase.n(), 15);
        assert_eq!(phrase.to_string(), "MachineLearning");
        let words = phrase.glyphs().map(Glyph::word).collect::<Vec<_>>();
        assert_eq!(words[..7], [0; 7]);
        assert_eq!(words[7..], [1; 8]);
    }

    #[test]
    fn initials_take_word_starters() {
        let phrase = Phrase::initials("Natural Language Processing");
        let symbols = phrase.glyphs().map(Glyph::symbol).collect::<Vec<_>>();
        assert_eq!(symbols, vec!['N', 'L', 'P']);
        let indices = phrase.glyphs().map(Glyph::index).collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn mass_is_uniform_and_normalized() {
        let phrase = Phrase::from("Unbalanced Optimal Transport");
        let mass = phrase.mass();
        let total = mass.support().map(|x| mass.density(x)).sum::<f32>();
        assert!((total - 1.).abs() < 1e-6);
        let each = 1. / phrase.n() as f32;
        assert!(mass.support().all(|x| (mass.density(x) - each).abs() < 1e-6));
    }

    #[test]
    fn empty_text_is_a_boundary_not_an_error() {
        assert!(Phrase::from("").is_empty());
        assert!(Phrase::from("   ").is_empty());
        assert!(Phrase::initials("").is_empty());
        assert!(Phrase::from("").mass().is_empty());
    }
}
