use super::support::Support;
use crate::Energy;

/// generalization of *element-wise* cost between
/// two Density spaces over arbitrary Support.
///
/// for phrase-to-acronym alignment this is the blended
/// character-identity / relative-position cost. note that image
/// space X and range space Y need not share a support: a source
/// glyph carries a position inside the phrase while a target glyph
/// carries a position inside the acronym. what is important is that
/// we can define a cost between any x ∈ X and any y ∈ Y.
pub trait Measure {
    type X: Support;
    type Y: Support;
    fn distance(&self, x: &Self::X, y: &Self::Y) -> Energy;
}
