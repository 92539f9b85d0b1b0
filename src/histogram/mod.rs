pub mod bucket;
pub mod exec;
pub mod output;

pub use bucket::{Bucketer, Histogram, DEFAULT_BUCKETS, DEFAULT_LOOKBACK_DAYS};
pub use exec::exec;
pub use output::{output_chart, output_json, output_ndjson};
