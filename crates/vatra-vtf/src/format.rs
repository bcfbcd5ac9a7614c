//! VTF image formats and storage size arithmetic.

/// Pixel and block formats a VTF body can be stored in.
///
/// Discriminants are the on-disk values of Valve's `VTFImageFormat` enum.
/// The codec recognizes the full set but only converts a subset; see
/// [`crate::decode`] and [`crate::VtfEncoder`] for what each direction
/// supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum ImageFormat {
    None = -1,
    Rgba8888 = 0,
    Abgr8888 = 1,
    Rgb888 = 2,
    Bgr888 = 3,
    Rgb565 = 4,
    I8 = 5,
    Ia88 = 6,
    P8 = 7,
    A8 = 8,
    Rgb888Bluescreen = 9,
    Bgr888Bluescreen = 10,
    Argb8888 = 11,
    Bgra8888 = 12,
    Dxt1 = 13,
    Dxt3 = 14,
    Dxt5 = 15,
    Bgrx8888 = 16,
    Bgr565 = 17,
    Bgrx5551 = 18,
    Bgra4444 = 19,
    Dxt1OneBitAlpha = 20,
    Bgra5551 = 21,
    Uv88 = 22,
    Uvwq8888 = 23,
    Rgba16161616F = 24,
    Rgba16161616 = 25,
    Uvlx8888 = 26,
}

impl ImageFormat {
    /// Map an on-disk format code to the enum, or `None` for codes this
    /// codec has never heard of.
    pub fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            -1 => Self::None,
            0 => Self::Rgba8888,
            1 => Self::Abgr8888,
            2 => Self::Rgb888,
            3 => Self::Bgr888,
            4 => Self::Rgb565,
            5 => Self::I8,
            6 => Self::Ia88,
            7 => Self::P8,
            8 => Self::A8,
            9 => Self::Rgb888Bluescreen,
            10 => Self::Bgr888Bluescreen,
            11 => Self::Argb8888,
            12 => Self::Bgra8888,
            13 => Self::Dxt1,
            14 => Self::Dxt3,
            15 => Self::Dxt5,
            16 => Self::Bgrx8888,
            17 => Self::Bgr565,
            18 => Self::Bgrx5551,
            19 => Self::Bgra4444,
            20 => Self::Dxt1OneBitAlpha,
            21 => Self::Bgra5551,
            22 => Self::Uv88,
            23 => Self::Uvwq8888,
            24 => Self::Rgba16161616F,
            25 => Self::Rgba16161616,
            26 => Self::Uvlx8888,
            _ => return None,
        })
    }

    /// The on-disk format code.
    #[inline]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Bytes per pixel for uncompressed formats, 0 for block formats and
    /// `None` (their storage is computed per 4x4 block instead).
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgba8888
            | Self::Abgr8888
            | Self::Argb8888
            | Self::Bgra8888
            | Self::Bgrx8888
            | Self::Uvwq8888
            | Self::Uvlx8888 => 4,
            Self::Rgb888 | Self::Bgr888 | Self::Rgb888Bluescreen | Self::Bgr888Bluescreen => 3,
            Self::Rgb565
            | Self::Bgr565
            | Self::Bgrx5551
            | Self::Bgra5551
            | Self::Bgra4444
            | Self::Ia88
            | Self::Uv88 => 2,
            Self::I8 | Self::P8 | Self::A8 => 1,
            Self::Rgba16161616F | Self::Rgba16161616 => 8,
            Self::None | Self::Dxt1 | Self::Dxt3 | Self::Dxt5 | Self::Dxt1OneBitAlpha => 0,
        }
    }

    /// Whether the format carries an alpha channel.
    pub const fn has_alpha(self) -> bool {
        matches!(
            self,
            Self::Rgba8888
                | Self::Abgr8888
                | Self::Argb8888
                | Self::Bgra8888
                | Self::Bgra5551
                | Self::Bgra4444
                | Self::Dxt1OneBitAlpha
                | Self::Dxt3
                | Self::Dxt5
                | Self::A8
                | Self::Ia88
                | Self::Rgba16161616F
                | Self::Rgba16161616
        )
    }

    /// Whether the format stores 4x4 compressed blocks.
    pub const fn is_compressed(self) -> bool {
        matches!(
            self,
            Self::Dxt1 | Self::Dxt3 | Self::Dxt5 | Self::Dxt1OneBitAlpha
        )
    }

    /// Bytes per 4x4 block for compressed formats.
    pub const fn block_bytes(self) -> Option<usize> {
        match self {
            Self::Dxt1 | Self::Dxt1OneBitAlpha => Some(8),
            Self::Dxt3 | Self::Dxt5 => Some(16),
            _ => None,
        }
    }
}

/// Storage size in bytes of one image (single frame, single mip level).
///
/// Dimensions are clamped to at least 1. Block formats occupy whole 4x4
/// blocks, ceiling-padded on each axis; uncompressed formats are
/// `width * height * bytes_per_pixel`. Formats with no known pixel size
/// report 0, matching how VTF readers traditionally skip them.
pub fn image_data_size(width: u32, height: u32, format: ImageFormat) -> usize {
    let width = width.max(1) as usize;
    let height = height.max(1) as usize;

    match format.block_bytes() {
        Some(block_bytes) => width.div_ceil(4) * height.div_ceil(4) * block_bytes,
        None => width * height * format.bytes_per_pixel(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_roundtrip() {
        for raw in -1..27 {
            let format = ImageFormat::from_raw(raw).unwrap();
            assert_eq!(format.as_raw(), raw);
        }
    }

    #[test]
    fn test_from_raw_unknown() {
        assert_eq!(ImageFormat::from_raw(27), None);
        assert_eq!(ImageFormat::from_raw(99), None);
        assert_eq!(ImageFormat::from_raw(-2), None);
    }

    #[test]
    fn test_dxt1_block_sizes() {
        assert_eq!(image_data_size(4, 4, ImageFormat::Dxt1), 8);
        // 3x3 rounds up to a single padded block
        assert_eq!(image_data_size(3, 3, ImageFormat::Dxt1), 8);
        // 5x5 needs a 2x2 block grid
        assert_eq!(image_data_size(5, 5, ImageFormat::Dxt1), 32);
        assert_eq!(image_data_size(16, 16, ImageFormat::Dxt1), 128);
    }

    #[test]
    fn test_dxt5_block_sizes() {
        assert_eq!(image_data_size(4, 4, ImageFormat::Dxt5), 16);
        assert_eq!(image_data_size(8, 8, ImageFormat::Dxt3), 64);
    }

    #[test]
    fn test_uncompressed_sizes() {
        assert_eq!(image_data_size(2, 2, ImageFormat::Rgba8888), 16);
        assert_eq!(image_data_size(4, 4, ImageFormat::Rgb888), 48);
        assert_eq!(image_data_size(4, 4, ImageFormat::I8), 16);
        assert_eq!(image_data_size(4, 4, ImageFormat::Rgba16161616), 128);
    }

    #[test]
    fn test_size_clamps_to_one() {
        // Mip chains shrink dimensions toward zero; storage never does
        assert_eq!(image_data_size(0, 0, ImageFormat::Rgba8888), 4);
        assert_eq!(image_data_size(0, 0, ImageFormat::Dxt1), 8);
    }

    #[test]
    fn test_none_has_no_size() {
        assert_eq!(image_data_size(16, 16, ImageFormat::None), 0);
    }

    #[test]
    fn test_has_alpha() {
        assert!(ImageFormat::Rgba8888.has_alpha());
        assert!(ImageFormat::Dxt5.has_alpha());
        assert!(ImageFormat::Dxt1OneBitAlpha.has_alpha());
        assert!(ImageFormat::A8.has_alpha());
        assert!(!ImageFormat::Dxt1.has_alpha());
        assert!(!ImageFormat::Rgb888.has_alpha());
        assert!(!ImageFormat::Bgrx8888.has_alpha());
    }

    #[test]
    fn test_compressed_classification() {
        assert!(ImageFormat::Dxt1.is_compressed());
        assert!(ImageFormat::Dxt1OneBitAlpha.is_compressed());
        assert!(!ImageFormat::Rgba8888.is_compressed());
        assert_eq!(ImageFormat::Dxt1.block_bytes(), Some(8));
        assert_eq!(ImageFormat::Dxt5.block_bytes(), Some(16));
        assert_eq!(ImageFormat::Rgb888.block_bytes(), None);
    }
}
