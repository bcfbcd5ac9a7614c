//! Per-pixel conversion between RGBA8 and the VTF storage formats.

use crate::dxt;
use crate::format::ImageFormat;
use crate::{Error, Result};

/// Convert stored pixels to an RGBA8 buffer.
///
/// Returns `None` for formats this codec cannot decode; the caller is
/// responsible for the magenta fallback so that decoding still yields a
/// full-size image.
pub(crate) fn rgba_from(
    format: ImageFormat,
    src: &[u8],
    width: u32,
    height: u32,
) -> Option<Vec<u8>> {
    match format {
        ImageFormat::Dxt1 => return Some(dxt::decompress_dxt1_image(src, width, height, false)),
        ImageFormat::Dxt1OneBitAlpha => {
            return Some(dxt::decompress_dxt1_image(src, width, height, true))
        }
        ImageFormat::Dxt3 => return Some(dxt::decompress_dxt3_image(src, width, height)),
        ImageFormat::Dxt5 => return Some(dxt::decompress_dxt5_image(src, width, height)),
        _ => {}
    }

    let pixel_count = width as usize * height as usize;
    let mut dst = vec![0u8; pixel_count * 4];

    match format {
        ImageFormat::Rgba8888 => {
            dst.copy_from_slice(&src[..pixel_count * 4]);
        }
        ImageFormat::Abgr8888 => {
            for i in 0..pixel_count {
                dst[i * 4] = src[i * 4 + 3];
                dst[i * 4 + 1] = src[i * 4 + 2];
                dst[i * 4 + 2] = src[i * 4 + 1];
                dst[i * 4 + 3] = src[i * 4];
            }
        }
        ImageFormat::Rgb888 => {
            for i in 0..pixel_count {
                dst[i * 4] = src[i * 3];
                dst[i * 4 + 1] = src[i * 3 + 1];
                dst[i * 4 + 2] = src[i * 3 + 2];
                dst[i * 4 + 3] = 255;
            }
        }
        ImageFormat::Bgr888 => {
            for i in 0..pixel_count {
                dst[i * 4] = src[i * 3 + 2];
                dst[i * 4 + 1] = src[i * 3 + 1];
                dst[i * 4 + 2] = src[i * 3];
                dst[i * 4 + 3] = 255;
            }
        }
        ImageFormat::Argb8888 => {
            for i in 0..pixel_count {
                dst[i * 4] = src[i * 4 + 1];
                dst[i * 4 + 1] = src[i * 4 + 2];
                dst[i * 4 + 2] = src[i * 4 + 3];
                dst[i * 4 + 3] = src[i * 4];
            }
        }
        ImageFormat::Bgra8888 => {
            for i in 0..pixel_count {
                dst[i * 4] = src[i * 4 + 2];
                dst[i * 4 + 1] = src[i * 4 + 1];
                dst[i * 4 + 2] = src[i * 4];
                dst[i * 4 + 3] = src[i * 4 + 3];
            }
        }
        ImageFormat::Bgrx8888 => {
            // X byte is ignored; alpha forced opaque
            for i in 0..pixel_count {
                dst[i * 4] = src[i * 4 + 2];
                dst[i * 4 + 1] = src[i * 4 + 1];
                dst[i * 4 + 2] = src[i * 4];
                dst[i * 4 + 3] = 255;
            }
        }
        ImageFormat::I8 => {
            for i in 0..pixel_count {
                dst[i * 4] = src[i];
                dst[i * 4 + 1] = src[i];
                dst[i * 4 + 2] = src[i];
                dst[i * 4 + 3] = 255;
            }
        }
        ImageFormat::Ia88 => {
            for i in 0..pixel_count {
                dst[i * 4] = src[i * 2];
                dst[i * 4 + 1] = src[i * 2];
                dst[i * 4 + 2] = src[i * 2];
                dst[i * 4 + 3] = src[i * 2 + 1];
            }
        }
        ImageFormat::A8 => {
            for i in 0..pixel_count {
                dst[i * 4] = 255;
                dst[i * 4 + 1] = 255;
                dst[i * 4 + 2] = 255;
                dst[i * 4 + 3] = src[i];
            }
        }
        _ => return None,
    }

    Some(dst)
}

/// Fill a full-size RGBA8 buffer with opaque magenta.
///
/// Read-path fallback for formats [`rgba_from`] rejects: hosts must still
/// be able to display *something*.
pub(crate) fn magenta_fill(width: u32, height: u32) -> Vec<u8> {
    let pixel_count = width as usize * height as usize;
    let mut dst = vec![0u8; pixel_count * 4];
    for px in dst.chunks_exact_mut(4) {
        px.copy_from_slice(&[255, 0, 255, 255]);
    }
    dst
}

/// Convert an RGBA8 buffer into uncompressed stored pixels.
///
/// Only the formats the encoder emits are implemented; anything else is a
/// hard [`Error::UnsupportedPixelFormat`] rather than silently wrong bytes.
pub(crate) fn rgba_into(
    format: ImageFormat,
    rgba: &[u8],
    width: u32,
    height: u32,
) -> Result<Vec<u8>> {
    let pixel_count = width as usize * height as usize;

    match format {
        ImageFormat::Rgba8888 => Ok(rgba[..pixel_count * 4].to_vec()),
        ImageFormat::Bgra8888 => {
            let mut dst = vec![0u8; pixel_count * 4];
            for i in 0..pixel_count {
                dst[i * 4] = rgba[i * 4 + 2];
                dst[i * 4 + 1] = rgba[i * 4 + 1];
                dst[i * 4 + 2] = rgba[i * 4];
                dst[i * 4 + 3] = rgba[i * 4 + 3];
            }
            Ok(dst)
        }
        ImageFormat::Rgb888 => {
            let mut dst = vec![0u8; pixel_count * 3];
            for i in 0..pixel_count {
                dst[i * 3] = rgba[i * 4];
                dst[i * 3 + 1] = rgba[i * 4 + 1];
                dst[i * 3 + 2] = rgba[i * 4 + 2];
            }
            Ok(dst)
        }
        ImageFormat::Bgr888 => {
            let mut dst = vec![0u8; pixel_count * 3];
            for i in 0..pixel_count {
                dst[i * 3] = rgba[i * 4 + 2];
                dst[i * 3 + 1] = rgba[i * 4 + 1];
                dst[i * 3 + 2] = rgba[i * 4];
            }
            Ok(dst)
        }
        other => Err(Error::UnsupportedPixelFormat(other.as_raw())),
    }
}
