/// marker trait for any type that can
/// be interpreted as a support for a probability distribution.
///
/// currently only implemented by
/// - Glyph , where Potential is the implied Density and Metric is the implied Measure
pub trait Support: Clone {}
