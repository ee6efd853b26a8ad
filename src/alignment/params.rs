use crate::Energy;
use crate::Entropy;
use crate::Probability;

/// hyperparameters for one alignment solve.
#[derive(Debug, Clone, Copy)]
pub struct Params {
    /// entropic regularization strength ε.
    pub temperature: Entropy,
    /// marginal relaxation strength reg_m. larger values pin the
    /// plan's row/column sums to the input marginals; smaller values
    /// let mass be created or destroyed.
    pub relaxation: Energy,
    /// weight of the positional cost term against character identity.
    pub blend: Energy,
    /// minimum transported weight worth reporting.
    pub cutoff: Probability,
    /// maximum Sinkhorn scaling sweeps.
    pub sweeps: usize,
}

impl Params {
    /// the unbalanced scaling exponent fi = reg_m / (reg_m + ε).
    /// fi → 1 recovers balanced Sinkhorn, fi → 0 ignores the marginals.
    pub fn exponent(&self) -> Energy {
        self.relaxation / (self.relaxation + self.temperature)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            temperature: crate::SINKHORN_TEMPERATURE,
            relaxation: crate::SINKHORN_RELAXATION,
            blend: crate::POSITION_BLEND,
            cutoff: crate::DISPLAY_CUTOFF,
            sweeps: crate::SINKHORN_SWEEPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_approaches_one_with_relaxation() {
        let loose = Params {
            relaxation: 0.1,
            ..Params::default()
        };
        let tight = Params {
            relaxation: 5.0,
            ..Params::default()
        };
        assert!(loose.exponent() < tight.exponent());
        assert!(tight.exponent() < 1.);
    }
}
