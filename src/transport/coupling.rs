use super::density::Density;
use super::measure::Measure;
use super::support::Support;
use crate::Probability;
use crate::Utility;

/// a transport problem between two mass distributions,
/// together with whatever solver state it needs to couple them.
pub trait Coupling {
    type X: Support;
    type Y: Support;
    type M: Measure<X = Self::X, Y = Self::Y>;
    type P: Density<S = Self::X>;
    type Q: Density<S = Self::Y>;

    /// consume the problem and return it with its
    /// solver state advanced to (approximate) optimality.
    fn minimize(self) -> Self;

    /// mass moved from x to y under the current solver state.
    fn flow(&self, x: &Self::X, y: &Self::Y) -> Probability;

    /// objective value ⟨plan, cost⟩ under the current solver state.
    fn cost(&self) -> Utility;
}
