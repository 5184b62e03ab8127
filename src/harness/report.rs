//! Plain-text report output for harness runs
//!
//! # Architecture
//!
//! `ReportSink` abstracts over the destination (local file or stdout) so the
//! writer is agnostic to where report text goes. `ReportWriter` renders the
//! report: a banner header, per-iteration PASSED/FAILED lines with timings in
//! both milliseconds and seconds, per-size summaries, and side-by-side
//! input/output grid dumps for small images. Images with either dimension
//! above [`DUMP_DIMENSION_LIMIT`] are summarized only.
//!
//! # Example
//!
//! ```no_run
//! use pixelnorm::harness::{rng_from_seed, run_size, ReportWriter, RunConfig};
//! use pixelnorm::types::Dimensions;
//!
//! # fn main() -> pixelnorm::Result<()> {
//! let mut report = ReportWriter::create("report.txt")?;
//! report.write_header("Performance Test Results")?;
//!
//! let config = RunConfig::default();
//! let mut rng = rng_from_seed(None);
//! let summary = run_size(Dimensions::STANDARD[0], &config, &mut rng);
//!
//! for (i, result) in summary.iterations.iter().enumerate() {
//!     report.write_iteration(i, result)?;
//! }
//! report.write_summary(&summary)?;
//! report.finish()?;
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::harness::runner::{IterationResult, SizeSummary};
use crate::types::PixelImage;

/// Largest dimension for which full input/output grids are written
pub const DUMP_DIMENSION_LIMIT: usize = 100;

const BANNER: &str = "+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+";

/// Output destination for report text
#[derive(Debug, Clone)]
pub enum ReportSink {
    /// Write to a local file path
    Local(PathBuf),
    /// Write to standard output
    Stdout,
}

impl ReportSink {
    /// Create a sink from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self::Local(path.as_ref().to_path_buf())
    }

    /// Create a sink for standard output
    pub fn stdout() -> Self {
        Self::Stdout
    }

    fn open(&self) -> io::Result<Box<dyn Write>> {
        match self {
            Self::Local(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            Self::Stdout => Ok(Box::new(BufWriter::new(io::stdout()))),
        }
    }
}

/// Plain-text report writer
pub struct ReportWriter {
    writer: Box<dyn Write>,
    lines_written: usize,
}

impl ReportWriter {
    /// Create a new report writer from a sink
    pub fn new(sink: ReportSink) -> Result<Self> {
        let writer = sink.open()?;
        Ok(Self {
            writer,
            lines_written: 0,
        })
    }

    /// Create a report writer from a file path
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(ReportSink::from_path(path))
    }

    /// Create a report writer to stdout
    pub fn stdout() -> Result<Self> {
        Self::new(ReportSink::stdout())
    }

    /// Write one line of report text
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.lines_written += 1;
        Ok(())
    }

    /// Write a banner-framed header
    pub fn write_header(&mut self, title: &str) -> Result<()> {
        self.write_line(BANNER)?;
        for line in title.lines() {
            self.write_line(line)?;
        }
        self.write_line(BANNER)?;
        self.write_line("")
    }

    /// Write one per-iteration result line
    ///
    /// `iteration` is zero-based; the report numbers iterations from 1.
    pub fn write_iteration(&mut self, iteration: usize, result: &IterationResult) -> Result<()> {
        let seconds = result.elapsed.as_secs_f64();
        let line = match &result.failure {
            None => format!(
                "Iteration {}: PASSED - Time: {:.6} ms ({:.9} seconds)",
                iteration + 1,
                seconds * 1000.0,
                seconds
            ),
            Some(failure) => format!(
                "Iteration {}: FAILED - Time: {:.6} ms ({:.9} seconds) - {}",
                iteration + 1,
                seconds * 1000.0,
                seconds,
                failure
            ),
        };
        self.write_line(&line)
    }

    /// Write the per-size summary block
    pub fn write_summary(&mut self, summary: &SizeSummary) -> Result<()> {
        let total = summary.total_time().as_secs_f64();
        let average = summary.average_time().as_secs_f64();

        self.write_line("")?;
        self.write_line(&format!("Summary for {}:", summary.dimensions))?;
        self.write_line(&format!(
            "  Total iterations: {}",
            summary.iterations.len()
        ))?;
        self.write_line(&format!("  Passed: {}", summary.passed()))?;
        self.write_line(&format!("  Failed: {}", summary.failed()))?;
        self.write_line(&format!(
            "  Average execution time: {:.6} ms ({:.9} seconds)",
            average * 1000.0,
            average
        ))?;
        self.write_line(&format!(
            "  Total time for all iterations: {:.6} ms ({:.9} seconds)",
            total * 1000.0,
            total
        ))?;
        self.write_line("")
    }

    /// Write a side-by-side input/output grid dump
    ///
    /// Returns `false` without writing anything when either dimension
    /// exceeds [`DUMP_DIMENSION_LIMIT`]; such sizes are summarized only.
    pub fn write_grid_dump(&mut self, image: &PixelImage, normalized: &[f32]) -> Result<bool> {
        let dims = image.dimensions;
        if dims.height > DUMP_DIMENSION_LIMIT || dims.width > DUMP_DIMENSION_LIMIT {
            return Ok(false);
        }

        self.write_line("Input (integer pixel values):")?;
        for row in image.rows() {
            let line: Vec<String> = row.iter().map(|p| p.to_string()).collect();
            self.write_line(&line.join(" "))?;
        }

        self.write_line("")?;
        self.write_line("Output (normalized values):")?;
        for row in normalized.chunks(dims.width.max(1)) {
            let line: Vec<String> = row.iter().map(|v| format!("{:.2}", v)).collect();
            self.write_line(&line.join(" "))?;
        }

        Ok(true)
    }

    /// Number of lines written so far
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush buffered report text
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Finish writing and flush all data
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
