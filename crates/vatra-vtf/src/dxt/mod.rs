//! DXT (BC1/BC2/BC3) block codec.
//!
//! All three formats store 4x4 pixel tiles:
//!
//! - **DXT1**: 8 bytes - two RGB565 endpoints plus 16 2-bit palette indices.
//!   Endpoint ordering selects four-color or three-color-plus-transparent
//!   decoding.
//! - **DXT3**: 16 bytes - 16 explicit 4-bit alpha values followed by a DXT1
//!   color block.
//! - **DXT5**: 16 bytes - two 8-bit alpha endpoints, 16 3-bit alpha indices,
//!   then a DXT1 color block.
//!
//! Decompression is bit-exact over arbitrary input; garbage bytes produce
//! deterministic pixels, never an error. Compression uses a fast min/max
//! bounding-box endpoint search, not an optimal cluster fit.

mod decode;
mod encode;

pub use decode::{
    decode_color565, decompress_dxt1_block, decompress_dxt1_image, decompress_dxt3_block,
    decompress_dxt3_image, decompress_dxt5_block, decompress_dxt5_image,
};
pub use encode::{compress_dxt1_block, compress_dxt5_block};
