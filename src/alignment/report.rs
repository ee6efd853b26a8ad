use super::params::Params;
use super::phrase::Phrase;
use super::plan::Plan;
use colored::Colorize;

const RULE: &str = "------------------------------------------------------------";
const WALL: &str = "============================================================";

/// console rendering of a solved alignment: per-acronym-character
/// contributions above the significance cutoff, heaviest first,
/// followed by a per-source destination summary.
pub struct Report<'a> {
    source: &'a Phrase,
    target: &'a Phrase,
    plan: &'a Plan,
    params: Params,
}

impl<'a> From<(&'a Phrase, &'a Phrase, &'a Plan, Params)> for Report<'a> {
    fn from((source, target, plan, params): (&'a Phrase, &'a Phrase, &'a Plan, Params)) -> Self {
        Self {
            source,
            target,
            plan,
            params,
        }
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", WALL)?;
        writeln!(f, "unbalanced optimal transport: phrase -> acronym")?;
        writeln!(f, "{}", WALL)?;
        writeln!(f)?;
        writeln!(f, "phrase:  '{}'", self.source)?;
        writeln!(f, "acronym: '{}'", self.target)?;
        writeln!(f)?;
        writeln!(f, "total transported mass: {:.4}", self.plan.mass())?;
        if self.plan.targets().is_empty() {
            writeln!(f)?;
            writeln!(f, "nothing to align")?;
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "{}", RULE)?;
        for y in self.plan.targets() {
            writeln!(f, "'{}' receives mass from:", y.to_string().cyan().bold())?;
            for (x, weight) in self
                .plan
                .column(&y)
                .into_iter()
                .filter(|(_, w)| *w > self.params.cutoff)
                .take(crate::DISPLAY_DEPTH)
            {
                writeln!(f, "  '{}' (position {:>2}): {:.4}", x, x.index(), weight)?;
            }
        }
        writeln!(f, "{}", RULE)?;
        writeln!(f, "per-character contributions:")?;
        for x in self.plan.sources() {
            let destinations = self
                .plan
                .row(&x)
                .into_iter()
                .filter(|(_, w)| *w > self.params.cutoff)
                .map(|(y, w)| format!("{}({:.3})", y, w))
                .collect::<Vec<_>>();
            if !destinations.is_empty() {
                writeln!(
                    f,
                    "  '{}' (pos {:>2}, word {}) -> {}",
                    x,
                    x.index(),
                    x.word(),
                    destinations.join(", ")
                )?;
            }
        }
        write!(f, "{}", WALL)
    }
}
