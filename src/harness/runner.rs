//! Timed, checked iteration runs over the conversion kernels
//!
//! Each iteration owns its input and output buffers exclusively and releases
//! both before the next iteration begins. Only the conversion call sits
//! inside the timed region; generation and checking happen outside it.
//! Check failures are recorded per iteration and never abort a run — batch
//! callers count and summarize them.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;

use crate::error::PixelnormError;
use crate::harness::generate::random_image;
use crate::ops::{check_normalized, compare_outputs, normalize, normalize_scalar};
use crate::types::Dimensions;

/// Configuration for a harness run
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Number of iterations per image size
    pub iterations: usize,
    /// Also run the scalar reference on each input and compare outputs
    /// element-wise under the tolerance
    pub compare_implementations: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            compare_implementations: false,
        }
    }
}

/// Outcome of a single timed conversion
#[derive(Debug)]
pub struct IterationResult {
    /// Wall-clock duration of the conversion call
    pub elapsed: Duration,
    /// First check failure, if any
    pub failure: Option<PixelnormError>,
}

impl IterationResult {
    /// Whether all checks passed for this iteration
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Aggregated results for one image size
#[derive(Debug)]
pub struct SizeSummary {
    /// Image size the iterations ran at
    pub dimensions: Dimensions,
    /// Per-iteration outcomes in run order
    pub iterations: Vec<IterationResult>,
}

impl SizeSummary {
    /// Number of iterations that passed all checks
    pub fn passed(&self) -> usize {
        self.iterations.iter().filter(|r| r.passed()).count()
    }

    /// Number of iterations with a check failure
    pub fn failed(&self) -> usize {
        self.iterations.len() - self.passed()
    }

    /// Total conversion time across all iterations
    pub fn total_time(&self) -> Duration {
        self.iterations.iter().map(|r| r.elapsed).sum()
    }

    /// Average conversion time per iteration
    pub fn average_time(&self) -> Duration {
        if self.iterations.is_empty() {
            return Duration::ZERO;
        }
        self.total_time() / self.iterations.len() as u32
    }
}

/// Run one timed, checked conversion on freshly generated input
///
/// When `compare` is set, the scalar reference runs on the same input after
/// the timed call and the two outputs are compared element-wise.
pub fn run_iteration(dimensions: Dimensions, compare: bool, rng: &mut StdRng) -> IterationResult {
    let image = random_image(dimensions, rng);

    let start = Instant::now();
    let normalized = normalize(&image.pixels);
    let elapsed = start.elapsed();

    let mut failure = check_normalized(&image.pixels, &normalized).err();
    if failure.is_none() && compare {
        let reference = normalize_scalar(&image.pixels);
        failure = compare_outputs(&reference, &normalized).err();
    }

    // Input and output buffers drop here, before the next iteration starts
    IterationResult { elapsed, failure }
}

/// Run the configured number of iterations for one image size
///
/// # Example
///
/// ```
/// use pixelnorm::harness::{rng_from_seed, run_size, RunConfig};
/// use pixelnorm::types::Dimensions;
///
/// let config = RunConfig {
///     iterations: 3,
///     compare_implementations: true,
/// };
/// let mut rng = rng_from_seed(Some(7));
/// let summary = run_size(Dimensions::STANDARD[0], &config, &mut rng);
///
/// assert_eq!(summary.passed(), 3);
/// assert_eq!(summary.failed(), 0);
/// ```
pub fn run_size(dimensions: Dimensions, config: &RunConfig, rng: &mut StdRng) -> SizeSummary {
    let iterations = (0..config.iterations)
        .map(|_| run_iteration(dimensions, config.compare_implementations, rng))
        .collect();

    SizeSummary {
        dimensions,
        iterations,
    }
}
