//! Fixed-length color buffers.
//!
//! A [`ColorBuffer`] holds one packed color per addressable output point.
//! Two buffers exist per harness: the engine-owned render buffer and the
//! harness-owned scratch buffer that receives snapshot copies in threaded
//! mode. Buffers are sized once at construction and never resized.

use crate::color::PackedColor;
use crate::error::{Error, Result};

/// A fixed-length ordered sequence of packed color values.
///
/// The length equals the number of addressable output points and is fixed
/// for the lifetime of the buffer. Out-of-range point accesses return
/// `None` rather than panicking; a copy between mismatched lengths is an
/// invariant violation and fails with [`Error::BufferSizeMismatch`].
///
/// # Examples
///
/// ```
/// use lumen_core::{ColorBuffer, PackedColor};
///
/// let mut buffer = ColorBuffer::new(64);
/// assert_eq!(buffer.len(), 64);
///
/// buffer.fill(PackedColor::WHITE);
/// assert_eq!(buffer.get(63), Some(PackedColor::WHITE));
/// assert_eq!(buffer.get(64), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorBuffer {
    /// One packed color per output point.
    points: Vec<PackedColor>,
}

impl ColorBuffer {
    /// Creates a buffer for `len` output points, all initialized to black.
    pub fn new(len: usize) -> Self {
        Self {
            points: vec![PackedColor::BLACK; len],
        }
    }

    /// Returns the number of output points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the buffer addresses no output points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the color at `point`, or `None` if out of range.
    #[inline]
    pub fn get(&self, point: usize) -> Option<PackedColor> {
        self.points.get(point).copied()
    }

    /// Sets the color at `point`.
    ///
    /// Returns `false` if the point is out of range.
    #[inline]
    pub fn set(&mut self, point: usize, color: PackedColor) -> bool {
        match self.points.get_mut(point) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }

    /// Fills every point with the same color.
    pub fn fill(&mut self, color: PackedColor) {
        self.points.fill(color);
    }

    /// Returns the points as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[PackedColor] {
        &self.points
    }

    /// Returns the points as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [PackedColor] {
        &mut self.points
    }

    /// Copies every point from `src` into this buffer.
    ///
    /// Both buffers must have the same length; a mismatch means the two
    /// buffers were constructed against different output models and fails
    /// with [`Error::BufferSizeMismatch`].
    pub fn copy_from(&mut self, src: &ColorBuffer) -> Result<()> {
        if src.len() != self.len() {
            return Err(Error::BufferSizeMismatch {
                expected: self.len(),
                actual: src.len(),
            });
        }
        self.points.copy_from_slice(&src.points);
        Ok(())
    }
}

impl AsRef<[PackedColor]> for ColorBuffer {
    fn as_ref(&self) -> &[PackedColor] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_is_black() {
        let buffer = ColorBuffer::new(4);
        assert_eq!(buffer.len(), 4);
        assert!(buffer.as_slice().iter().all(|&c| c == PackedColor::BLACK));
    }

    #[test]
    fn test_set_get() {
        let mut buffer = ColorBuffer::new(3);
        assert!(buffer.set(1, PackedColor::WHITE));
        assert_eq!(buffer.get(1), Some(PackedColor::WHITE));
        assert_eq!(buffer.get(0), Some(PackedColor::BLACK));
    }

    #[test]
    fn test_out_of_range() {
        let mut buffer = ColorBuffer::new(2);
        assert!(!buffer.set(2, PackedColor::WHITE));
        assert_eq!(buffer.get(2), None);
    }

    #[test]
    fn test_copy_from() {
        let mut src = ColorBuffer::new(5);
        src.fill(PackedColor::from_rgb(10, 20, 30));

        let mut dst = ColorBuffer::new(5);
        dst.copy_from(&src).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn test_copy_from_length_mismatch() {
        let src = ColorBuffer::new(5);
        let mut dst = ColorBuffer::new(4);

        let err = dst.copy_from(&src).unwrap_err();
        assert_eq!(
            err,
            Error::BufferSizeMismatch {
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = ColorBuffer::new(0);
        assert!(buffer.is_empty());
    }
}
