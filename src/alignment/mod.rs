mod glyph;
mod metric;
mod params;
mod phrase;
mod plan;
mod potential;
mod report;
mod sinkhorn;

pub use glyph::*;
pub use metric::*;
pub use params::*;
pub use phrase::*;
pub use plan::*;
pub use potential::*;
pub use report::*;
pub use sinkhorn::*;
