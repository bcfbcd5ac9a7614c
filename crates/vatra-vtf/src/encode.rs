//! VTF encoding: mip generation, per-mip compression, file assembly.

use image::RgbaImage;

use crate::convert;
use crate::dxt;
use crate::format::{image_data_size, ImageFormat};
use crate::header::{VtfHeader, HEADER_SIZE};
use crate::mipmap;
use crate::{Error, Result};

/// Builder-style VTF encoder.
///
/// Settings mirror what a host would persist between exports: target
/// format, texture flags, and whether to generate mipmaps. The encoder
/// itself is a plain value - construct one per call or keep it around,
/// it holds no state beyond its configuration.
///
/// # Example
///
/// ```no_run
/// use image::RgbaImage;
/// use vatra_vtf::{flags, ImageFormat, VtfEncoder};
///
/// let image = RgbaImage::new(256, 256);
/// let bytes = VtfEncoder::new(ImageFormat::Dxt5)
///     .with_flags(flags::EIGHT_BIT_ALPHA)
///     .encode(&image, true)?;
/// # Ok::<(), vatra_vtf::Error>(())
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VtfEncoder {
    format: ImageFormat,
    flags: u32,
    generate_mipmaps: bool,
}

impl Default for VtfEncoder {
    /// DXT5 with a full mipmap chain and no flags set.
    fn default() -> Self {
        Self::new(ImageFormat::Dxt5)
    }
}

impl VtfEncoder {
    /// Create an encoder targeting `format`, with mipmap generation on.
    pub fn new(format: ImageFormat) -> Self {
        Self {
            format,
            flags: 0,
            generate_mipmaps: true,
        }
    }

    /// Set the header flag word (see [`crate::flags`]).
    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    /// Store only the full-resolution level.
    pub fn without_mipmaps(mut self) -> Self {
        self.generate_mipmaps = false;
        self
    }

    /// The configured target format, before any alpha downgrade.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// DXT5 falls back to DXT1 when the source has no alpha to store.
    fn effective_format(&self, has_alpha: bool) -> ImageFormat {
        if self.format == ImageFormat::Dxt5 && !has_alpha {
            ImageFormat::Dxt1
        } else {
            self.format
        }
    }

    /// Encode an RGBA image into a complete VTF byte stream.
    ///
    /// `has_alpha` is the host's statement about the source; it drives the
    /// DXT5 to DXT1 downgrade and nothing else. Output is the fixed 80-byte
    /// header followed by every mip level, smallest first.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` when a dimension is zero or exceeds the header's
    /// u16 range, `UnsupportedPixelFormat` for target formats the write
    /// path does not implement.
    pub fn encode(&self, image: &RgbaImage, has_alpha: bool) -> Result<Vec<u8>> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 || width > u32::from(u16::MAX) || height > u32::from(u16::MAX)
        {
            return Err(Error::InvalidDimensions { width, height });
        }

        let format = self.effective_format(has_alpha);
        check_writable(format)?;

        let mips = if self.generate_mipmaps {
            mipmap::mip_chain(image)
        } else {
            vec![image.clone()]
        };

        let header = VtfHeader::for_encode(
            width as u16,
            height as u16,
            self.flags,
            format,
            mips.len() as u8,
        );
        let mut output = header.to_bytes();

        // Mip levels go smallest first; readers locate mip 0 by skipping
        // every smaller level, so this ordering is part of the format.
        for level in mips.iter().rev() {
            let compressed = compress_level(format, level)?;
            output.extend_from_slice(&compressed);
        }

        log::debug!(
            "encoded {}x{} VTF: format {:?}, {} mips, {} bytes",
            width,
            height,
            format,
            mips.len(),
            output.len()
        );

        Ok(output)
    }

    /// Exact output size in bytes for an image of these dimensions.
    ///
    /// Uses the configured format as-is; a DXT5 encoder fed an opaque
    /// source will produce a smaller (DXT1) file than reported here.
    pub fn expected_size(&self, width: u32, height: u32) -> usize {
        let levels = if self.generate_mipmaps {
            mipmap::mip_level_count(width, height)
        } else {
            1
        };

        let mut size = HEADER_SIZE;
        let mut w = width;
        let mut h = height;
        for _ in 0..levels {
            size += image_data_size(w, h, self.format);
            w = (w / 2).max(1);
            h = (h / 2).max(1);
        }
        size
    }
}

/// Formats the write path implements.
fn check_writable(format: ImageFormat) -> Result<()> {
    match format {
        ImageFormat::Dxt1
        | ImageFormat::Dxt1OneBitAlpha
        | ImageFormat::Dxt5
        | ImageFormat::Rgba8888
        | ImageFormat::Bgra8888
        | ImageFormat::Rgb888
        | ImageFormat::Bgr888 => Ok(()),
        other => Err(Error::UnsupportedPixelFormat(other.as_raw())),
    }
}

/// Compress one mip level into its stored bytes.
fn compress_level(format: ImageFormat, image: &RgbaImage) -> Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    match format {
        ImageFormat::Dxt1 | ImageFormat::Dxt1OneBitAlpha => Ok(compress_blocks(image, 8, |b| {
            dxt::compress_dxt1_block(b).to_vec()
        })),
        ImageFormat::Dxt5 => Ok(compress_blocks(image, 16, |b| {
            dxt::compress_dxt5_block(b).to_vec()
        })),
        _ => convert::rgba_into(format, image.as_raw(), width, height),
    }
}

/// Walk the ceil-padded block grid, compressing each 4x4 tile.
fn compress_blocks<F>(image: &RgbaImage, block_bytes: usize, compress: F) -> Vec<u8>
where
    F: Fn(&[[u8; 4]; 16]) -> Vec<u8>,
{
    let blocks_x = image.width().div_ceil(4);
    let blocks_y = image.height().div_ceil(4);

    let mut output = Vec::with_capacity((blocks_x * blocks_y) as usize * block_bytes);
    for by in 0..blocks_y {
        for bx in 0..blocks_x {
            let block = extract_block(image, bx, by);
            output.extend_from_slice(&compress(&block));
        }
    }
    output
}

/// Extract a 4x4 tile, padding past-the-edge pixels with transparent black.
fn extract_block(image: &RgbaImage, block_x: u32, block_y: u32) -> [[u8; 4]; 16] {
    let mut block = [[0u8; 4]; 16];
    for y in 0..4 {
        for x in 0..4 {
            let px = block_x * 4 + x;
            let py = block_y * 4 + y;
            if px < image.width() && py < image.height() {
                block[(y * 4 + x) as usize] = image.get_pixel(px, py).0;
            }
        }
    }
    block
}
