//! Measurement harness: input generation, timed runs, reporting
//!
//! The harness is single-threaded and synchronous. Each iteration generates
//! a fresh input image, times one conversion with a monotonic clock, checks
//! the output against the expected formula, and drops both buffers before
//! the next iteration begins.

pub mod generate;
pub mod report;
pub mod runner;

pub use generate::{random_image, rng_from_seed};
pub use report::{ReportSink, ReportWriter, DUMP_DIMENSION_LIMIT};
pub use runner::{run_iteration, run_size, IterationResult, RunConfig, SizeSummary};
