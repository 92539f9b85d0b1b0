pub mod cli;
pub mod config;
pub mod contributors;
pub mod error;
pub mod histogram;
pub mod input;
pub mod lookup;
pub mod model;
pub mod momentum;
pub mod render;
pub mod summary;
pub mod util;

pub use error::{PulseError, Result};
pub use histogram::{Bucketer, Histogram};
pub use model::{CommitEvent, HistogramBucket, TimeWindow};
pub use momentum::{momentum, DecayRate};
