use super::glyph::Glyph;
use super::phrase::Phrase;
use crate::Energy;
use crate::transport::Measure;

/// pairwise cost between source and target glyphs.
///
/// blends two terms:
/// - character identity: 0 on a case-insensitive match, 1 otherwise
/// - relative position: squared difference of index / (len - 1),
///   normalized so the largest positional cost over the grid is 1
///
/// blend = 0 is pure character matching, blend = 1 is pure position.
/// all costs land in [0, 1].
pub struct Metric {
    source: usize,
    target: usize,
    blend: Energy,
    norm: Energy,
}

impl Metric {
    /// position within [0, 1] relative to sequence length.
    /// degenerate single-element sequences sit at 0.
    fn relative(index: usize, n: usize) -> Energy {
        index as Energy / std::cmp::max(n - 1, 1) as Energy
    }
    fn positional(&self, x: &Glyph, y: &Glyph) -> Energy {
        match self.norm {
            n if n > 0. => {
                let dx = Self::relative(x.index(), self.source);
                let dy = Self::relative(y.index(), self.target);
                (dx - dy).powi(2) / n
            }
            _ => 0.,
        }
    }
    fn mismatch(&self, x: &Glyph, y: &Glyph) -> Energy {
        if x.matches(y) { 0. } else { 1. }
    }
}

impl Measure for Metric {
    type X = Glyph;
    type Y = Glyph;

    fn distance(&self, x: &Self::X, y: &Self::Y) -> Energy {
        self.blend * self.positional(x, y) + (1. - self.blend) * self.mismatch(x, y)
    }
}

impl From<(&Phrase, &Phrase, Energy)> for Metric {
    fn from((source, target, blend): (&Phrase, &Phrase, Energy)) -> Self {
        let (m, n) = (source.n(), target.n());
        let norm = (0..m)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| (Self::relative(i, m) - Self::relative(j, n)).powi(2))
            .fold(0., Energy::max);
        Self {
            source: m,
            target: n,
            blend,
            norm,
        }
    }
}
