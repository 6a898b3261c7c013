//! Core types for the `lumen-harness` synchronization layer.
//!
//! This crate provides the fundamental building blocks shared by the rest of
//! the harness:
//!
//! - [`color`]: packed 32-bit ARGB color values
//! - [`buffer`]: fixed-length color buffers with snapshot copy support
//! - [`error`]: error types for the core library
//!
//! # Examples
//!
//! ```
//! use lumen_core::{ColorBuffer, PackedColor};
//!
//! let mut buffer = ColorBuffer::new(10);
//! buffer.set(3, PackedColor::from_rgb(255, 0, 128));
//!
//! let mut snapshot = ColorBuffer::new(10);
//! snapshot.copy_from(&buffer).unwrap();
//! assert_eq!(snapshot.get(3), buffer.get(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod color;
pub mod error;

// Re-export commonly used types at the crate root for convenience
pub use buffer::ColorBuffer;
pub use color::PackedColor;
pub use error::{Error, Result};
