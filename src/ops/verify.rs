//! Tolerance-based correctness checks for normalized output
//!
//! Every check recomputes the expected value (`pixel / 255.0`) per element
//! and stops at the first violation, reporting the index together with the
//! expected and actual values. The same tolerance governs the
//! cross-implementation comparison used by the harness.

use crate::error::{PixelnormError, Result};

/// Maximum allowed absolute difference between an actual and expected value
pub const TOLERANCE: f32 = 0.001;

/// Check normalized output against the expected per-element formula
///
/// Fails on the first element where `|output[i] - pixels[i] / 255.0|`
/// exceeds [`TOLERANCE`], or when the buffers differ in length.
///
/// # Example
///
/// ```
/// use pixelnorm::ops::{check_normalized, normalize};
///
/// let pixels = [255u8, 255, 255, 255];
/// let normalized = normalize(&pixels);
/// assert!(check_normalized(&pixels, &normalized).is_ok());
///
/// // A corrupted element is caught with its index and values
/// let err = check_normalized(&pixels, &[1.0, 0.5, 1.0, 1.0]).unwrap_err();
/// assert!(err.to_string().contains("index 1"));
/// ```
pub fn check_normalized(pixels: &[u8], output: &[f32]) -> Result<()> {
    if pixels.len() != output.len() {
        return Err(PixelnormError::LengthMismatch {
            input: pixels.len(),
            output: output.len(),
        });
    }

    for (index, (&pixel, &actual)) in pixels.iter().zip(output).enumerate() {
        let expected = f32::from(pixel) / 255.0;
        if (actual - expected).abs() > TOLERANCE {
            return Err(PixelnormError::ToleranceExceeded {
                index,
                expected,
                actual,
            });
        }
    }

    Ok(())
}

/// Compare two implementations' outputs element-wise under [`TOLERANCE`]
///
/// Used by the harness to confirm that the SIMD kernel and the scalar
/// reference agree on identical input.
///
/// # Example
///
/// ```
/// use pixelnorm::ops::{compare_outputs, normalize, normalize_scalar};
///
/// let pixels: Vec<u8> = (0..100).map(|i| (i * 3) as u8).collect();
/// let reference = normalize_scalar(&pixels);
/// let alternate = normalize(&pixels);
/// assert!(compare_outputs(&reference, &alternate).is_ok());
/// ```
pub fn compare_outputs(reference: &[f32], alternate: &[f32]) -> Result<()> {
    if reference.len() != alternate.len() {
        return Err(PixelnormError::LengthMismatch {
            input: reference.len(),
            output: alternate.len(),
        });
    }

    for (index, (&expected, &actual)) in reference.iter().zip(alternate).enumerate() {
        if (actual - expected).abs() > TOLERANCE {
            return Err(PixelnormError::ToleranceExceeded {
                index,
                expected,
                actual,
            });
        }
    }

    Ok(())
}
