//! Interactive grayscale conversion tool
//!
//! Two modes:
//! 1. Manual: enter dimensions and individual pixel values (clamped to
//!    0-255), then see the timed, checked conversion as a grid.
//! 2. Automated: pick one of the standard sizes (10x10, 100x100, 1000x1000);
//!    random input is generated, converted, and checked. The two smaller
//!    sizes print full grids; the 1000x1000 run writes its results to a file
//!    and prints a summary.
//!
//! Exit status: 0 on success, 1 on any failure (invalid menu choice, invalid
//! dimensions, I/O error, or a failed correctness check).

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use pixelnorm::harness::{random_image, rng_from_seed, ReportWriter, DUMP_DIMENSION_LIMIT};
use pixelnorm::ops::{check_normalized, normalize};
use pixelnorm::types::{Dimensions, PixelImage};
use pixelnorm::{PixelnormError, Result};

const BANNER: &str = "+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{}", BANNER);
    println!("Grayscale Image Conversion");
    println!("{}", BANNER);
    println!("1. Manual input mode");
    println!("2. Automated mode (10x10, 100x100, 1000x1000)");
    let choice: u32 = prompt_value(&mut input, "Enter your choice (1 or 2): ")?;

    match choice {
        1 => manual_mode(&mut input),
        2 => automated_mode(&mut input),
        other => Err(PixelnormError::InvalidInput(format!(
            "Unrecognized menu choice: {}",
            other
        ))),
    }
}

/// Manual entry: dimensions, then one pixel per prompt
fn manual_mode(input: &mut impl BufRead) -> Result<()> {
    let height: usize = prompt_value(input, "Enter height: ")?;
    let width: usize = prompt_value(input, "Enter width: ")?;
    let dimensions = Dimensions::new(height, width)?;

    println!("Enter {} pixel values (0-255):", dimensions.pixel_count());
    let mut pixels = Vec::with_capacity(dimensions.pixel_count());
    for i in 0..dimensions.pixel_count() {
        let value: i64 = prompt_value(input, &format!("Pixel [{}]: ", i))?;
        // Out-of-range entries are clamped, matching the prompt's stated range
        pixels.push(value.clamp(0, 255) as u8);
    }
    let image = PixelImage::new(dimensions, pixels)?;

    let start = Instant::now();
    let normalized = normalize(&image.pixels);
    let elapsed = start.elapsed().as_secs_f64();

    // A failed check aborts result output
    check_normalized(&image.pixels, &normalized)?;

    println!();
    println!("{}", BANNER);
    println!("Conversion Results");
    println!("{}", BANNER);
    println!("Correctness check: PASSED");
    println!(
        "Execution time: {:.6} ms ({:.9} seconds)",
        elapsed * 1000.0,
        elapsed
    );
    println!();
    println!("Converted grayscale values:");
    print_normalized_grid(&normalized, dimensions.width);

    Ok(())
}

/// Automated run at one of the standard sizes
fn automated_mode(input: &mut impl BufRead) -> Result<()> {
    println!();
    println!("{}", BANNER);
    println!("Automated Grayscale Image Conversion Test");
    println!("{}", BANNER);
    println!("Choose image size:");
    for (i, dims) in Dimensions::STANDARD.iter().enumerate() {
        println!("{}. {}", i + 1, dims);
    }

    let choice: usize = prompt_value(input, "Enter your choice (1, 2, or 3): ")?;
    let dimensions = *Dimensions::STANDARD
        .get(choice.wrapping_sub(1))
        .ok_or_else(|| {
            PixelnormError::InvalidInput(format!("Unrecognized size choice: {}", choice))
        })?;

    let mut rng = rng_from_seed(None);
    let image = random_image(dimensions, &mut rng);

    println!();
    println!(
        "Testing image size: {} ({} pixels)",
        dimensions,
        dimensions.pixel_count()
    );

    let start = Instant::now();
    let normalized = normalize(&image.pixels);
    let elapsed = start.elapsed().as_secs_f64();

    check_normalized(&image.pixels, &normalized)?;

    println!();
    println!("{}", BANNER);
    println!("Results for {}", dimensions);
    println!("{}", BANNER);
    println!("Correctness check: PASSED");
    println!(
        "Execution time: {:.6} ms ({:.9} seconds)",
        elapsed * 1000.0,
        elapsed
    );

    let small = dimensions.height <= DUMP_DIMENSION_LIMIT && dimensions.width <= DUMP_DIMENSION_LIMIT;
    if small {
        println!();
        println!("Generated input (integer pixel values):");
        print_pixel_grid(&image);
        println!();
        println!("Converted output (normalized values):");
        print_normalized_grid(&normalized, dimensions.width);
    } else {
        let path = format!("output_{}.txt", dimensions);
        let mut report = ReportWriter::create(&path)?;
        report.write_header(&format!("Grayscale Conversion Results ({})", dimensions))?;
        report.write_line("Correctness check: PASSED")?;
        report.write_line(&format!(
            "Execution time: {:.6} ms ({:.9} seconds)",
            elapsed * 1000.0,
            elapsed
        ))?;
        report.write_line("")?;
        report.write_line(&format!(
            "Grid dump omitted for sizes larger than {0}x{0}",
            DUMP_DIMENSION_LIMIT
        ))?;
        report.finish()?;
        println!("Results saved to: {}", path);
    }

    println!();
    println!("{}", BANNER);
    println!("Automated Test Complete");
    println!("{}", BANNER);

    Ok(())
}

fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_value<T: FromStr>(input: &mut impl BufRead, prompt: &str) -> Result<T> {
    let line = prompt_line(input, prompt)?;
    line.parse()
        .map_err(|_| PixelnormError::InvalidInput(format!("Could not parse {:?} as a number", line)))
}

fn print_pixel_grid(image: &PixelImage) {
    for row in image.rows() {
        let line: Vec<String> = row.iter().map(|p| p.to_string()).collect();
        println!("{}", line.join(" "));
    }
}

fn print_normalized_grid(normalized: &[f32], width: usize) {
    for row in normalized.chunks(width.max(1)) {
        let line: Vec<String> = row.iter().map(|v| format!("{:.2}", v)).collect();
        println!("{}", line.join(" "));
    }
}
