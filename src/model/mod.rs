pub mod bounds;
pub mod confusion;
pub mod params;

pub use bounds::{Metric, MetricsResult, compute_protocol_bounds};
pub use params::{ParameterSet, SweepParameter};
