//! VTF decoding: header validation, mip-0 location, pixel conversion.

use image::RgbaImage;

use crate::convert;
use crate::format::{image_data_size, ImageFormat};
use crate::header::VtfHeader;
use crate::{Error, Result};

/// Result of decoding a VTF file: the first frame's top mip level as RGBA8.
#[derive(Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Whether the stored format carries an alpha channel.
    pub has_alpha: bool,
    /// `width * height * 4` bytes, R,G,B,A order, straight alpha.
    pub rgba: Vec<u8>,
    /// Soft failure: the pixel format was not convertible and `rgba` holds
    /// the opaque-magenta fallback instead of real pixels.
    pub warning: Option<Error>,
}

impl DecodedImage {
    /// View the pixels as an [`RgbaImage`].
    ///
    /// Returns `None` only for zero-sized images, which `image` refuses to
    /// construct.
    pub fn into_image(self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.rgba)
    }
}

/// Decode a VTF file into the first frame's full-resolution RGBA8 pixels.
///
/// Header validation failures (`TooSmall`, `BadSignature`,
/// `UnsupportedVersion`) and a body shorter than the header declares
/// (`Truncated`) are hard errors. A pixel format this codec cannot convert
/// is soft: the result is a full-size magenta fill with
/// [`DecodedImage::warning`] set, so hosts always have something to show.
pub fn decode(data: &[u8]) -> Result<DecodedImage> {
    let header = VtfHeader::parse(data)?;

    let width = u32::from(header.width);
    let height = u32::from(header.height);
    let frames = header.frame_count() as usize;
    let mip_count = header.mip_count();
    let format = ImageFormat::from_raw(header.high_res_format);

    // Formats we have never heard of occupy zero bytes per level, exactly
    // like the NONE thumbnail format; the magenta fallback below handles
    // the pixels.
    let level_size =
        |w: u32, h: u32| -> usize { format.map_or(0, |f| image_data_size(w, h, f)) };

    let mut body_offset = header.header_size as usize;
    if header.has_thumbnail() {
        body_offset += ImageFormat::from_raw(header.low_res_format).map_or(0, |f| {
            image_data_size(
                u32::from(header.low_res_width),
                u32::from(header.low_res_height),
                f,
            )
        });
    }

    // Validate that the whole declared mip chain fits before touching it
    let mut total = 0usize;
    let mut w = width;
    let mut h = height;
    for _ in 0..mip_count {
        total += level_size(w, h) * frames;
        w = (w / 2).max(1);
        h = (h / 2).max(1);
    }

    let needed = body_offset + total;
    if needed > data.len() {
        return Err(Error::Truncated {
            needed,
            available: data.len(),
        });
    }

    // Mip levels are stored smallest first; skip everything below mip 0
    let mut offset = body_offset;
    let mut w = width;
    let mut h = height;
    for _ in 1..mip_count {
        w = (w / 2).max(1);
        h = (h / 2).max(1);
        offset += level_size(w, h) * frames;
    }

    let mip0 = &data[offset..offset + level_size(width, height)];

    let (rgba, warning) = match format.and_then(|f| convert::rgba_from(f, mip0, width, height)) {
        Some(rgba) => (rgba, None),
        None => {
            log::warn!(
                "unsupported VTF pixel format {}, substituting magenta",
                header.high_res_format
            );
            (
                convert::magenta_fill(width, height),
                Some(Error::UnsupportedPixelFormat(header.high_res_format)),
            )
        }
    };

    log::debug!(
        "decoded {}x{} VTF {}.{}: format {}, {} mips, {} frames",
        width,
        height,
        header.version_major,
        header.version_minor,
        header.high_res_format,
        mip_count,
        frames
    );

    Ok(DecodedImage {
        width,
        height,
        has_alpha: format.is_some_and(|f| f.has_alpha()),
        rgba,
        warning,
    })
}
