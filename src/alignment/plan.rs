use super::glyph::Glyph;
use crate::Energy;
use crate::Probability;
use crate::transport::Measure;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// a materialized transport plan: non-negative mass moved
/// from each source glyph to each target glyph. dense over
/// the product of the two supports it was solved on.
#[derive(Debug, Default, Clone)]
pub struct Plan(BTreeMap<(Glyph, Glyph), Probability>);

impl Plan {
    pub fn density(&self, x: &Glyph, y: &Glyph) -> Probability {
        self.0.get(&(*x, *y)).copied().unwrap_or(0.)
    }
    /// total transported mass. under unbalanced transport this
    /// need not equal the input marginal totals.
    /// the empty sum is signed -0.0, which we clamp away.
    /// (`f32::max` leaves the zero sign unspecified, so add
    /// +0.0 to normalize it deterministically.)
    pub fn mass(&self) -> Probability {
        self.0.values().sum::<Probability>().max(0.) + 0.
    }
    pub fn weights(&self) -> impl Iterator<Item = Probability> + '_ {
        self.0.values().copied()
    }

    /// row sum: total mass leaving one source glyph.
    pub fn marginal_x(&self, x: &Glyph) -> Probability {
        self.0
            .iter()
            .filter(|((s, _), _)| s == x)
            .map(|(_, &w)| w)
            .sum()
    }
    /// column sum: total mass arriving at one target glyph.
    pub fn marginal_y(&self, y: &Glyph) -> Probability {
        self.0
            .iter()
            .filter(|((_, t), _)| t == y)
            .map(|(_, &w)| w)
            .sum()
    }

    /// source glyphs in text order.
    pub fn sources(&self) -> Vec<Glyph> {
        self.0
            .keys()
            .map(|(x, _)| *x)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
    /// target glyphs in text order.
    pub fn targets(&self) -> Vec<Glyph> {
        self.0
            .keys()
            .map(|(_, y)| *y)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
    /// (rows, columns) of the underlying matrix.
    pub fn shape(&self) -> (usize, usize) {
        (self.sources().len(), self.targets().len())
    }

    /// contributions into one target glyph, heaviest first.
    pub fn column(&self, y: &Glyph) -> Vec<(Glyph, Probability)> {
        let mut column = self
            .0
            .iter()
            .filter(|((_, t), _)| t == y)
            .map(|((s, _), &w)| (*s, w))
            .collect::<Vec<_>>();
        column.sort_by(|a, b| b.1.partial_cmp(&a.1).expect("finite weights"));
        column
    }
    /// destinations of one source glyph, in acronym order.
    pub fn row(&self, x: &Glyph) -> Vec<(Glyph, Probability)> {
        self.0
            .iter()
            .filter(|((s, _), _)| s == x)
            .map(|((_, t), &w)| (*t, w))
            .collect()
    }
}

/// the plan is itself a (X, Y) ↦ ℝ object, so it satisfies
/// the same interface as the cost it was solved against.
impl Measure for Plan {
    type X = Glyph;
    type Y = Glyph;

    fn distance(&self, x: &Self::X, y: &Self::Y) -> Energy {
        self.density(x, y)
    }
}

impl From<BTreeMap<(Glyph, Glyph), Probability>> for Plan {
    fn from(plan: BTreeMap<(Glyph, Glyph), Probability>) -> Self {
        Self(plan)
    }
}
