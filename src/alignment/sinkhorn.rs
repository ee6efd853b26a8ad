use super::glyph::Glyph;
use super::metric::Metric;
use super::params::Params;
use super::plan::Plan;
use super::potential::Potential;
use crate::Energy;
use crate::Entropy;
use crate::Probability;
use crate::Utility;
use crate::transport::Coupling;
use crate::transport::Density;
use crate::transport::Measure;
use std::collections::BTreeMap;

/// unbalanced entropic transport between two glyph marginals.
///
/// log-domain Sinkhorn scaling with the marginal-relaxation exponent
/// fi = reg_m / (reg_m + ε) applied to each potential update:
///
///   u(x) ← fi · ( ln μ(x) − ln Σ_y exp( v(y) − C(x,y)/ε ) )
///   v(y) ← fi · ( ln ν(y) − ln Σ_x exp( u(x) − C(x,y)/ε ) )
///
/// the induced plan exp(u(x) + v(y) − C(x,y)/ε) need not hit the
/// marginals; its total mass shrinks as reg_m shrinks.
pub struct Sinkhorn<'a> {
    metric: &'a Metric,
    mu: &'a Potential,
    nu: &'a Potential,
    lhs: Potential,
    rhs: Potential,
    params: Params,
}

impl Sinkhorn<'_> {
    /// hyperparameter that bounds scaling sweeps
    fn sweeps(&self) -> usize {
        self.params.sweeps
    }
    /// hyperparameter that determines strength of entropic regularization
    fn temperature(&self) -> Entropy {
        self.params.temperature
    }
    /// hyperparameter that determines marginal fidelity
    fn exponent(&self) -> Energy {
        self.params.exponent()
    }

    /// calculate ε-minimizing coupling by scaling potentials.
    /// empty marginals are a boundary case and stay untouched.
    fn evolve(mut self) -> Self {
        if self.mu.is_empty() || self.nu.is_empty() {
            return self;
        }
        for _ in 0..self.sweeps() {
            let prev = self.lhs.clone();
            self.lhs = self.lhs();
            self.rhs = self.rhs();
            if self.drift(&prev) < crate::SINKHORN_TOLERANCE {
                break;
            }
        }
        self
    }
    /// calculate next iteration of LHS potential after unbalanced scaling
    fn lhs(&self) -> Potential {
        self.mu
            .support()
            .copied()
            .map(|x| {
                let scaled = self.exponent() * (self.mu.density(&x).ln() - self.marginal_x(&x).ln());
                (x, scaled)
            })
            .inspect(|x| assert!(x.1.is_finite(), "lhs potential overflow"))
            .collect::<BTreeMap<_, _>>()
            .into()
    }
    /// calculate next iteration of RHS potential after unbalanced scaling
    fn rhs(&self) -> Potential {
        self.nu
            .support()
            .copied()
            .map(|y| {
                let scaled = self.exponent() * (self.nu.density(&y).ln() - self.marginal_y(&y).ln());
                (y, scaled)
            })
            .inspect(|y| assert!(y.1.is_finite(), "rhs potential overflow"))
            .collect::<BTreeMap<_, _>>()
            .into()
    }
    /// cumulative flow out of a LHS glyph under the current RHS potential
    fn marginal_x(&self, x: &Glyph) -> Entropy {
        self.nu
            .support()
            .map(|y| self.rhs.density(y) - self.kernel(x, y))
            .map(Entropy::exp)
            .sum()
    }
    /// cumulative flow into a RHS glyph under the current LHS potential
    fn marginal_y(&self, y: &Glyph) -> Entropy {
        self.mu
            .support()
            .map(|x| self.lhs.density(x) - self.kernel(x, y))
            .map(Entropy::exp)
            .sum()
    }
    /// largest potential change across the LHS support since last sweep
    fn drift(&self, prev: &Potential) -> Energy {
        self.lhs
            .support()
            .map(|x| (self.lhs.density(x) - prev.density(x)).abs())
            .fold(0., Energy::max)
    }
    fn energy(&self, x: &Glyph, y: &Glyph) -> Probability {
        (self.lhs.density(x) + self.rhs.density(y) - self.kernel(x, y)).exp()
    }
    fn kernel(&self, x: &Glyph, y: &Glyph) -> Entropy {
        self.metric.distance(x, y) / self.temperature()
    }

    /// materialize the dense transport plan under current potentials
    pub fn plan(&self) -> Plan {
        self.mu
            .support()
            .flat_map(|x| self.nu.support().map(move |y| (x, y)))
            .map(|(x, y)| ((*x, *y), self.energy(x, y)))
            .collect::<BTreeMap<_, _>>()
            .into()
    }
}

impl Coupling for Sinkhorn<'_> {
    type X = Glyph;
    type Y = Glyph;
    type P = Potential;
    type Q = Potential;
    type M = Metric;

    fn minimize(self) -> Self {
        self.evolve()
    }
    fn flow(&self, x: &Self::X, y: &Self::Y) -> Probability {
        self.energy(x, y)
    }
    fn cost(&self) -> Utility {
        self.mu
            .support()
            .flat_map(|x| self.nu.support().map(move |y| (x, y)))
            .map(|(x, y)| self.energy(x, y) * self.metric.distance(x, y))
            .inspect(|x| assert!(x.is_finite()))
            .sum::<Utility>()
    }
}

impl<'a> From<(&'a Potential, &'a Potential, &'a Metric, Params)> for Sinkhorn<'a> {
    fn from((mu, nu, metric, params): (&'a Potential, &'a Potential, &'a Metric, Params)) -> Self {
        Self {
            metric,
            mu,
            nu,
            params,
            lhs: Potential::default(),
            rhs: Potential::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::alignment::phrase::Phrase;

    fn solve(source: &Phrase, target: &Phrase, params: Params) -> Plan {
        let metric = Metric::from((source, target, params.blend));
        let (mu, nu) = (source.mass(), target.mass());
        Sinkhorn::from((&mu, &nu, &metric, params)).minimize().plan()
    }

    fn initials(phrase: &str, acronym: &str) -> (Phrase, Phrase) {
        (Phrase::initials(phrase), Phrase::from(acronym))
    }

    #[test]
    fn plan_matches_cost_matrix_shape() {
        let source = Phrase::from("Unbalanced Optimal Transport");
        let target = Phrase::from("UOT");
        let plan = solve(&source, &target, Params::default());
        assert_eq!(plan.shape(), (source.n(), target.n()));
    }

    #[test]
    fn plan_is_nonnegative_on_random_inputs() {
        for _ in 0..8 {
            let source = Phrase::random();
            let target = Phrase::random();
            let plan = solve(&source, &target, Params::default());
            assert_eq!(plan.shape(), (source.n(), target.n()));
            assert!(plan.weights().all(|w| w >= 0. && w.is_finite()));
        }
    }

    #[test]
    fn word_starters_map_to_their_acronym_characters() {
        let (source, target) = initials("Artificial Intelligence", "AI");
        let params = Params {
            blend: 0.,
            ..Params::default()
        };
        let plan = solve(&source, &target, params);
        let sources = source.glyphs().copied().collect::<Vec<_>>();
        let targets = target.glyphs().copied().collect::<Vec<_>>();
        for (i, y) in targets.iter().enumerate() {
            let diagonal = plan.density(&sources[i], y);
            assert!(diagonal >= 0.4, "weak mapping into {}: {}", y, diagonal);
            for (j, x) in sources.iter().enumerate() {
                if i != j {
                    assert!(diagonal > plan.density(x, y));
                }
            }
        }
    }

    #[test]
    fn word_starters_produce_significant_mappings() {
        let (source, target) = initials("Natural Language Processing", "NLP");
        let params = Params {
            blend: 0.,
            ..Params::default()
        };
        let plan = solve(&source, &target, params);
        let significant = plan.weights().filter(|&w| w > params.cutoff).count();
        assert!(significant >= 3);
    }

    #[test]
    fn full_phrase_columns_are_headed_by_matching_characters() {
        let source = Phrase::from("Unbalanced Optimal Transport");
        let target = Phrase::from("UOT");
        let plan = solve(&source, &target, Params::default());
        for y in target.glyphs() {
            let (head, _) = plan.column(y)[0];
            assert!(head.matches(y), "column {} headed by {}", y, head);
        }
        let u = target.glyphs().next().unwrap();
        let (head, _) = plan.column(u)[0];
        assert_eq!(head.index(), 0);
    }

    #[test]
    fn relaxation_restores_transported_mass() {
        let source = Phrase::from("Machine Learning");
        let target = Phrase::from("ML");
        let mass = |relaxation: Energy| {
            let params = Params {
                relaxation,
                ..Params::default()
            };
            solve(&source, &target, params).mass()
        };
        assert!(mass(0.1) < mass(5.0));
        assert!(mass(5.0) <= 1.0 + 1e-3);
    }

    #[test]
    fn empty_inputs_degrade_to_empty_plans() {
        let empty = Phrase::from("");
        let target = Phrase::from("UOT");
        assert_eq!(solve(&empty, &target, Params::default()).shape(), (0, 0));
        assert_eq!(solve(&target, &empty, Params::default()).shape(), (0, 0));
        assert_eq!(solve(&empty, &empty, Params::default()).shape(), (0, 0));
    }

    #[test]
    fn objective_is_finite_after_minimization() {
        let source = Phrase::from("Graphics Processing Unit");
        let target = Phrase::from("GPU");
        let metric = Metric::from((&source, &target, crate::POSITION_BLEND));
        let (mu, nu) = (source.mass(), target.mass());
        let coupling = Sinkhorn::from((&mu, &nu, &metric, Params::default())).minimize();
        assert!(coupling.cost().is_finite());
        assert!(coupling.cost() >= 0.);
    }
}
