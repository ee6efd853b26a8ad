use super::glyph::Glyph;
use crate::Energy;
use crate::transport::Density;
use std::collections::BTreeMap;

/// a mass or potential assignment over Glyphs.
///
/// used both as a marginal mass vector (uniform supply/demand per
/// character) and as a Sinkhorn log-potential, which evolve under
/// the same Density interface. absent glyphs carry zero.
#[derive(Debug, Default, Clone)]
pub struct Potential(pub BTreeMap<Glyph, Energy>);

impl Potential {
    pub fn n(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Density for Potential {
    type S = Glyph;

    fn density(&self, x: &Self::S) -> Energy {
        self.0.get(x).copied().unwrap_or(0.)
    }
    fn support(&self) -> impl Iterator<Item = &Self::S> {
        self.0.keys()
    }
}

impl From<BTreeMap<Glyph, Energy>> for Potential {
    fn from(potential: BTreeMap<Glyph, Energy>) -> Self {
        Self(potential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_glyphs_carry_zero() {
        let potential = Potential::default();
        let x = Glyph::from((0, 0, 'x'));
        assert_eq!(potential.density(&x), 0.);
    }

    #[test]
    fn support_reads_in_text_order() {
        let z = Glyph::from((2, 0, 'z'));
        let a = Glyph::from((0, 0, 'a'));
        let potential = Potential::from(BTreeMap::from([(z, 1.), (a, 2.)]));
        let order = potential.support().map(Glyph::index).collect::<Vec<_>>();
        assert_eq!(order, vec![0, 2]);
    }
}
