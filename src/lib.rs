//! rttplot - a terminal chart of round-trip-time samples.
//!
//! rttplot reads a log of `timestamp rtt` pairs, one per line, and draws RTT
//! against time as a line chart with point markers and a grid.
//!
//! # Example
//!
//! ```ignore
//! use rttplot::data::DataReader;
//! use std::path::Path;
//!
//! let dataset = DataReader::read_file(Path::new("./rtt.log"))?;
//! println!("Loaded {} samples", dataset.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod plot;
pub mod ui;

pub use error::{ParseErrorKind, Result, RttPlotError};
