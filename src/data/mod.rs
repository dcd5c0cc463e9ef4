//! Data reading and representation.
//!
//! This module reads two-column `timestamp rtt` logs into an immutable
//! [`Dataset`].

mod dataset;
mod reader;

pub use dataset::{Dataset, RttSummary, Sample};
pub use reader::{parse_line, DataReader, DEFAULT_LOG_PATH};
