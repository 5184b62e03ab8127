//! Common types used throughout pixelnorm

use std::fmt;

use crate::error::{PixelnormError, Result};

/// Image dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of rows
    pub height: usize,
    /// Number of columns
    pub width: usize,
}

impl Dimensions {
    /// The three image sizes exercised by the automated harness
    pub const STANDARD: [Dimensions; 3] = [
        Dimensions {
            height: 10,
            width: 10,
        },
        Dimensions {
            height: 100,
            width: 100,
        },
        Dimensions {
            height: 1000,
            width: 1000,
        },
    ];

    /// Create dimensions, rejecting zero-sized images
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelnorm::types::Dimensions;
    ///
    /// let dims = Dimensions::new(10, 20).unwrap();
    /// assert_eq!(dims.pixel_count(), 200);
    ///
    /// assert!(Dimensions::new(0, 20).is_err());
    /// ```
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(PixelnormError::InvalidInput(format!(
                "Image dimensions must be non-zero, got {}x{}",
                height, width
            )));
        }
        Ok(Self { height, width })
    }

    /// Total number of pixels (height × width)
    pub fn pixel_count(&self) -> usize {
        self.height * self.width
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// A grayscale image held as a flat row-major pixel buffer
///
/// The buffer is created once per harness iteration, consumed by the
/// conversion kernels, and dropped before the next iteration begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    /// Image dimensions
    pub dimensions: Dimensions,
    /// Pixel intensities, row-major, length = height × width
    pub pixels: Vec<u8>,
}

impl PixelImage {
    /// Create an image from a flat pixel buffer
    ///
    /// Fails when the buffer length does not equal `height × width`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelnorm::types::{Dimensions, PixelImage};
    ///
    /// let dims = Dimensions::new(2, 2).unwrap();
    /// let image = PixelImage::new(dims, vec![0, 64, 128, 255]).unwrap();
    /// assert_eq!(image.len(), 4);
    ///
    /// assert!(PixelImage::new(dims, vec![0, 64]).is_err());
    /// ```
    pub fn new(dimensions: Dimensions, pixels: Vec<u8>) -> Result<Self> {
        if pixels.len() != dimensions.pixel_count() {
            return Err(PixelnormError::DimensionMismatch {
                height: dimensions.height,
                width: dimensions.width,
                expected: dimensions.pixel_count(),
                actual: pixels.len(),
            });
        }
        Ok(Self { dimensions, pixels })
    }

    /// Number of pixels in the image
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Check whether the image holds no pixels
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Iterate rows as slices, used by grid output
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // Chunk size must be non-zero even for images built from literals
        self.pixels.chunks(self.dimensions.width.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_pixel_count() {
        let dims = Dimensions::new(100, 100).unwrap();
        assert_eq!(dims.pixel_count(), 10_000);
    }

    #[test]
    fn test_dimensions_rejects_zero() {
        assert!(Dimensions::new(0, 10).is_err());
        assert!(Dimensions::new(10, 0).is_err());
        assert!(Dimensions::new(0, 0).is_err());
    }

    #[test]
    fn test_dimensions_display() {
        let dims = Dimensions::new(10, 20).unwrap();
        assert_eq!(dims.to_string(), "10x20");
    }

    #[test]
    fn test_standard_sizes() {
        assert_eq!(Dimensions::STANDARD.len(), 3);
        assert_eq!(Dimensions::STANDARD[0].pixel_count(), 100);
        assert_eq!(Dimensions::STANDARD[1].pixel_count(), 10_000);
        assert_eq!(Dimensions::STANDARD[2].pixel_count(), 1_000_000);
    }

    #[test]
    fn test_pixel_image_validates_length() {
        let dims = Dimensions::new(2, 3).unwrap();
        assert!(PixelImage::new(dims, vec![0; 6]).is_ok());

        let err = PixelImage::new(dims, vec![0; 5]).unwrap_err();
        assert!(err.to_string().contains("requires 6 pixels, got 5"));
    }

    #[test]
    fn test_pixel_image_rows() {
        let dims = Dimensions::new(2, 3).unwrap();
        let image = PixelImage::new(dims, vec![1, 2, 3, 4, 5, 6]).unwrap();

        let rows: Vec<&[u8]> = image.rows().collect();
        assert_eq!(rows, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);
    }
}
