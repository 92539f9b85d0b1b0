pub mod curve;
pub mod daily;
pub mod exec;
pub mod output;

pub use curve::{momentum, normalize, DecayRate, DEFAULT_DECAY_RATE};
pub use daily::{daily_counts, DEFAULT_DAYS};
pub use exec::exec;
pub use output::{output_curve, output_json, output_ndjson};
