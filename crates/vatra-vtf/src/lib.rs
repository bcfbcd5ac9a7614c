//! Valve Texture Format (VTF) codec.
//!
//! VTF is the texture container used by the Source engine. Files hold a
//! fixed little-endian header, an optional low-res thumbnail, and a mip
//! chain stored *smallest level first*, in one of ~27 pixel formats
//! including the DXT1/DXT3/DXT5 block-compressed family.
//!
//! This crate is a pure buffer-in/buffer-out codec: no file I/O, no
//! process-wide state. Reading yields the first frame's full-resolution
//! image as RGBA8; writing takes RGBA8 and produces a complete 7.2 file
//! with generated mipmaps and DXT compression.
//!
//! # Example
//!
//! ```no_run
//! use image::RgbaImage;
//! use vatra_vtf::{decode, ImageFormat, VtfEncoder};
//!
//! // Encode an image to DXT5 with a full mipmap chain
//! let image = RgbaImage::new(256, 256);
//! let bytes = VtfEncoder::new(ImageFormat::Dxt5).encode(&image, true)?;
//! std::fs::write("texture.vtf", &bytes)?;
//!
//! // Decode it back
//! let decoded = decode(&std::fs::read("texture.vtf")?)?;
//! assert_eq!((decoded.width, decoded.height), (256, 256));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Format support
//!
//! Decoding handles the 8-bit RGBA channel shuffles, luminance/alpha
//! formats, and all four DXT variants; anything else produces an opaque
//! magenta image plus a warning rather than an error, because image hosts
//! must always have something to display. Encoding writes DXT1, DXT5
//! (auto-downgraded to DXT1 for opaque sources), RGBA8888, BGRA8888,
//! RGB888, and BGR888, and rejects everything else up front.

mod convert;
mod decode;
mod encode;
mod error;
mod format;
mod header;

pub mod dxt;
pub mod flags;
pub mod mipmap;

pub use decode::{decode, DecodedImage};
pub use encode::VtfEncoder;
pub use error::{Error, Result};
pub use format::{image_data_size, ImageFormat};
pub use header::{VtfHeader, HEADER_SIZE, VTF_SIGNATURE};
