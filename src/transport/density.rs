use super::support::Support;
use crate::Energy;

/// generalization of any mass distribution over
/// arbitrary Support.
///
/// the same abstraction covers both marginal mass vectors
/// (values are probabilities) and Sinkhorn log-potentials
/// (values are entropies). what matters is that a finite
/// value is attached to every element of the support.
pub trait Density {
    type S: Support;

    fn density(&self, x: &Self::S) -> Energy;
    fn support(&self) -> impl Iterator<Item = &Self::S>;
}
