pub mod alignment;
pub mod transport;

/// Transport weights, marginal masses, and sampling distributions.
pub type Probability = f32;
/// Distance values, convergence thresholds, and cost-matrix entries.
pub type Energy = f32;
/// Temperature parameters and log-domain potentials.
pub type Entropy = f32;
/// Objective values of transport plans.
pub type Utility = f32;

/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SINKHORN UNBALANCED TRANSPORT
// Entropy-regularized alignment between phrase and acronym characters.
// ============================================================================
/// Entropy regularization strength. Lower = sharper plans, higher = softer plans.
pub const SINKHORN_TEMPERATURE: Entropy = 0.1;
/// Marginal relaxation strength. Lower = more mass creation/destruction allowed.
pub const SINKHORN_RELAXATION: Energy = 1.0;
/// Maximum Sinkhorn scaling sweeps before stopping.
pub const SINKHORN_SWEEPS: usize = 128;
/// Early stopping threshold on potential drift between sweeps.
pub const SINKHORN_TOLERANCE: Energy = 1e-6;

// ============================================================================
// COST MATRIX
// ============================================================================
/// Weight of the positional term against the character-identity term.
pub const POSITION_BLEND: Energy = 0.3;

// ============================================================================
// REPORTING
// ============================================================================
/// Minimum transported weight for a mapping to be considered significant.
pub const DISPLAY_CUTOFF: Probability = 0.01;
/// Maximum number of contributors listed per acronym character.
pub const DISPLAY_DEPTH: usize = 5;

/// Initialize terminal logging at INFO level.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
