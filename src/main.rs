//! Acronym Alignment Binary
//!
//! Aligns the characters of a phrase with the characters of its acronym
//! via unbalanced optimal transport and prints the transport weights.
//!
//! Options: --temperature, --relaxation, --blend, --cutoff, --initials, --sweep

use clap::Parser;
use sigla::Energy;
use sigla::alignment::Metric;
use sigla::alignment::Params;
use sigla::alignment::Phrase;
use sigla::alignment::Plan;
use sigla::alignment::Report;
use sigla::alignment::Sinkhorn;
use sigla::transport::Coupling;

/// built-in demonstration corpus, run when no pair is given.
const CORPUS: &[(&str, &str)] = &[
    ("Unbalanced Optimal Transport", "UOT"),
    ("Natural Language Processing", "NLP"),
    ("Artificial Intelligence", "AI"),
    ("Machine Learning", "ML"),
    ("Application Programming Interface", "API"),
    ("Central Processing Unit", "CPU"),
    ("Graphics Processing Unit", "GPU"),
    ("Random Access Memory", "RAM"),
];

/// relaxation strengths for the --sweep comparison.
const RELAXATIONS: &[Energy] = &[0.1, 0.5, 1.0, 5.0];

#[derive(Parser)]
#[command(about = "phrase-to-acronym alignment via unbalanced optimal transport")]
struct Args {
    /// the full phrase, e.g. "Unbalanced Optimal Transport"
    phrase: Option<String>,
    /// the acronym, e.g. "UOT"
    acronym: Option<String>,
    /// entropic regularization strength
    #[arg(long, default_value_t = sigla::SINKHORN_TEMPERATURE)]
    temperature: f32,
    /// marginal relaxation strength (reg_m)
    #[arg(long, default_value_t = sigla::SINKHORN_RELAXATION)]
    relaxation: f32,
    /// weight of positional cost against character identity
    #[arg(long, default_value_t = sigla::POSITION_BLEND)]
    blend: f32,
    /// minimum transported weight worth reporting
    #[arg(long, default_value_t = sigla::DISPLAY_CUTOFF)]
    cutoff: f32,
    /// align word-starting characters only, instead of the full phrase
    #[arg(long)]
    initials: bool,
    /// rerun across several relaxation strengths and compare mass
    #[arg(long)]
    sweep: bool,
}

impl Args {
    fn params(&self) -> Params {
        Params {
            temperature: self.temperature,
            relaxation: self.relaxation,
            blend: if self.initials { 0. } else { self.blend },
            cutoff: self.cutoff,
            ..Params::default()
        }
    }
    fn source(&self, phrase: &str) -> Phrase {
        if self.initials {
            Phrase::initials(phrase)
        } else {
            Phrase::from(phrase)
        }
    }
}

fn main() -> anyhow::Result<()> {
    sigla::log();
    let args = Args::parse();
    anyhow::ensure!(args.temperature > 0., "temperature must be positive");
    anyhow::ensure!(args.relaxation > 0., "relaxation must be positive");
    anyhow::ensure!(
        (0. ..=1.).contains(&args.blend),
        "blend must lie in [0, 1]"
    );
    match (&args.phrase, &args.acronym) {
        (Some(phrase), Some(acronym)) => {
            align(&args, phrase, acronym);
            if args.sweep {
                sweep(&args, phrase, acronym);
            }
        }
        (None, None) => {
            for (phrase, acronym) in CORPUS {
                align(&args, phrase, acronym);
            }
        }
        _ => anyhow::bail!("phrase and acronym must be given together"),
    }
    Ok(())
}

/// solve one pair under the given parameters.
fn solve(args: &Args, phrase: &str, acronym: &str, params: Params) -> (Phrase, Phrase, Plan) {
    let source = args.source(phrase);
    let target = Phrase::from(acronym);
    let metric = Metric::from((&source, &target, params.blend));
    let (mu, nu) = (source.mass(), target.mass());
    let plan = Sinkhorn::from((&mu, &nu, &metric, params)).minimize().plan();
    (source, target, plan)
}

/// solve and print one pair.
fn align(args: &Args, phrase: &str, acronym: &str) {
    log::info!("aligning '{}' -> '{}'", phrase, acronym);
    let params = args.params();
    let (source, target, plan) = solve(args, phrase, acronym, params);
    println!("{}", Report::from((&source, &target, &plan, params)));
}

/// compare transported mass across relaxation strengths.
/// lower reg_m permits more mass destruction, so less mass moves.
fn sweep(args: &Args, phrase: &str, acronym: &str) {
    log::info!("sweeping relaxation for '{}' -> '{}'", phrase, acronym);
    for &relaxation in RELAXATIONS {
        let params = Params {
            relaxation,
            ..args.params()
        };
        let (_, _, plan) = solve(args, phrase, acronym, params);
        log::info!(
            "reg_m = {:<4}: total transported mass = {:.4}",
            relaxation,
            plan.mass()
        );
    }
}
