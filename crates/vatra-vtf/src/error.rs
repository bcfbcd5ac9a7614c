//! Error types for VTF handling.

use thiserror::Error;

/// Errors that can occur when decoding or encoding VTF files.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer is shorter than the fixed VTF header.
    #[error("file too small for VTF header: needed {needed} bytes, got {available}")]
    TooSmall { needed: usize, available: usize },

    /// Invalid VTF signature.
    #[error("invalid VTF signature: expected \"VTF\\0\", got {0:?}")]
    BadSignature([u8; 4]),

    /// VTF version outside the supported 7.0-7.5 range.
    #[error("unsupported VTF version: {major}.{minor}")]
    UnsupportedVersion { major: u32, minor: u32 },

    /// Declared image data extends past the end of the buffer.
    #[error("file truncated: needed {needed} bytes of image data, got {available}")]
    Truncated { needed: usize, available: usize },

    /// Pixel format this codec cannot convert.
    ///
    /// Hard error on encode. On decode it is reported as a warning on the
    /// result instead, alongside a magenta-filled buffer.
    #[error("unsupported pixel format: {0}")]
    UnsupportedPixelFormat(i32),

    /// Image dimensions the VTF header cannot represent.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Common library error.
    #[error("{0}")]
    Common(#[from] vatra_common::Error),
}

/// Result type for VTF operations.
pub type Result<T> = std::result::Result<T, Error>;
