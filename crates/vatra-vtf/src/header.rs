//! VTF header parsing and serialization.
//!
//! The header is a fixed little-endian record. This codec reads and writes
//! the padded 7.2-compatible layout, which is 80 bytes including the 7.3
//! resource-count fields:
//!
//! ```text
//! offset  width  field
//!      0      4  signature "VTF\0"
//!      4      8  version major, minor (u32 each)
//!     12      4  header_size
//!     16      2  width
//!     18      2  height
//!     20      4  flags
//!     24      2  frames
//!     26      2  first_frame
//!     28      4  padding
//!     32     12  reflectivity (f32 x3)
//!     44      4  padding
//!     48      4  bumpmap_scale (f32)
//!     52      4  high_res_format
//!     56      1  mipmap_count
//!     57      4  low_res_format
//!     61      1  low_res_width
//!     62      1  low_res_height
//!     63      2  depth            (7.2+)
//!     65      3  padding          (7.3+)
//!     68      4  num_resources    (7.3+)
//!     72      8  padding
//! ```

use vatra_common::BinaryReader;

use crate::format::ImageFormat;
use crate::{Error, Result};

/// VTF file signature ("VTF" followed by a NUL).
pub const VTF_SIGNATURE: [u8; 4] = *b"VTF\0";

/// Size in bytes of the fixed header this codec reads and writes.
pub const HEADER_SIZE: usize = 80;

/// Parsed VTF header fields.
///
/// `header_size` is taken verbatim from the file on decode and used as the
/// byte offset where body data begins. Files emitted by this codec always
/// declare [`HEADER_SIZE`].
#[derive(Debug, Clone)]
pub struct VtfHeader {
    pub version_major: u32,
    pub version_minor: u32,
    pub header_size: u32,
    pub width: u16,
    pub height: u16,
    pub flags: u32,
    pub frames: u16,
    pub first_frame: u16,
    pub reflectivity: [f32; 3],
    pub bumpmap_scale: f32,
    /// Raw format code of the high-res image; may be a value
    /// [`ImageFormat::from_raw`] does not recognize.
    pub high_res_format: i32,
    pub mipmap_count: u8,
    pub low_res_format: i32,
    pub low_res_width: u8,
    pub low_res_height: u8,
    pub depth: u16,
    pub num_resources: u32,
}

impl VtfHeader {
    /// Parse a header from the start of a VTF file.
    ///
    /// Validates the signature and that the version is within the supported
    /// 7.0-7.5 range. Nothing past the header is touched.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::TooSmall {
                needed: HEADER_SIZE,
                available: data.len(),
            });
        }

        let mut reader = BinaryReader::new(data);

        let sig = reader.read_bytes(4)?;
        if sig != VTF_SIGNATURE {
            return Err(Error::BadSignature([sig[0], sig[1], sig[2], sig[3]]));
        }

        let version_major = reader.read_u32()?;
        let version_minor = reader.read_u32()?;
        if version_major != 7 || version_minor > 5 {
            return Err(Error::UnsupportedVersion {
                major: version_major,
                minor: version_minor,
            });
        }

        let header_size = reader.read_u32()?;
        let width = reader.read_u16()?;
        let height = reader.read_u16()?;
        let flags = reader.read_u32()?;
        let frames = reader.read_u16()?;
        let first_frame = reader.read_u16()?;
        reader.advance(4);
        let reflectivity = [reader.read_f32()?, reader.read_f32()?, reader.read_f32()?];
        reader.advance(4);
        let bumpmap_scale = reader.read_f32()?;
        let high_res_format = reader.read_i32()?;
        let mipmap_count = reader.read_u8()?;
        let low_res_format = reader.read_i32()?;
        let low_res_width = reader.read_u8()?;
        let low_res_height = reader.read_u8()?;
        let depth = reader.read_u16()?;
        reader.advance(3);
        let num_resources = reader.read_u32()?;

        Ok(Self {
            version_major,
            version_minor,
            header_size,
            width,
            height,
            flags,
            frames,
            first_frame,
            reflectivity,
            bumpmap_scale,
            high_res_format,
            mipmap_count,
            low_res_format,
            low_res_width,
            low_res_height,
            depth,
            num_resources,
        })
    }

    /// Build the header this codec writes: version 7.2, no thumbnail,
    /// single frame, fixed reflectivity and bumpmap scale.
    pub fn for_encode(width: u16, height: u16, flags: u32, format: ImageFormat, mipmap_count: u8) -> Self {
        Self {
            version_major: 7,
            version_minor: 2,
            header_size: HEADER_SIZE as u32,
            width,
            height,
            flags,
            frames: 1,
            first_frame: 0,
            reflectivity: [0.5, 0.5, 0.5],
            bumpmap_scale: 1.0,
            high_res_format: format.as_raw(),
            mipmap_count,
            low_res_format: ImageFormat::None.as_raw(),
            low_res_width: 0,
            low_res_height: 0,
            depth: 1,
            num_resources: 0,
        }
    }

    /// Number of frames, treating 0 as 1.
    #[inline]
    pub fn frame_count(&self) -> u32 {
        u32::from(self.frames.max(1))
    }

    /// Number of mip levels, treating 0 as 1.
    #[inline]
    pub fn mip_count(&self) -> u32 {
        u32::from(self.mipmap_count.max(1))
    }

    /// Whether a low-res thumbnail block precedes the high-res mip data.
    pub fn has_thumbnail(&self) -> bool {
        self.low_res_format != ImageFormat::None.as_raw()
            && self.low_res_width > 0
            && self.low_res_height > 0
    }

    /// Serialize the header into its fixed 80-byte layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_SIZE);

        bytes.extend_from_slice(&VTF_SIGNATURE);
        bytes.extend_from_slice(&self.version_major.to_le_bytes());
        bytes.extend_from_slice(&self.version_minor.to_le_bytes());
        bytes.extend_from_slice(&self.header_size.to_le_bytes());
        bytes.extend_from_slice(&self.width.to_le_bytes());
        bytes.extend_from_slice(&self.height.to_le_bytes());
        bytes.extend_from_slice(&self.flags.to_le_bytes());
        bytes.extend_from_slice(&self.frames.to_le_bytes());
        bytes.extend_from_slice(&self.first_frame.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 4]);
        for &component in &self.reflectivity {
            bytes.extend_from_slice(&component.to_le_bytes());
        }
        bytes.extend_from_slice(&[0u8; 4]);
        bytes.extend_from_slice(&self.bumpmap_scale.to_le_bytes());
        bytes.extend_from_slice(&self.high_res_format.to_le_bytes());
        bytes.push(self.mipmap_count);
        bytes.extend_from_slice(&self.low_res_format.to_le_bytes());
        bytes.push(self.low_res_width);
        bytes.push(self.low_res_height);
        bytes.extend_from_slice(&self.depth.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 3]);
        bytes.extend_from_slice(&self.num_resources.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 8]);

        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> VtfHeader {
        VtfHeader::for_encode(256, 128, 0x2000, ImageFormat::Dxt5, 9)
    }

    #[test]
    fn test_to_bytes_size() {
        assert_eq!(sample_header().to_bytes().len(), HEADER_SIZE);
    }

    #[test]
    fn test_to_bytes_field_offsets() {
        let bytes = sample_header().to_bytes();

        assert_eq!(&bytes[0..4], b"VTF\0");
        // Version 7.2
        assert_eq!(u32::from_le_bytes(bytes[4..8].try_into().unwrap()), 7);
        assert_eq!(u32::from_le_bytes(bytes[8..12].try_into().unwrap()), 2);
        // Header size
        assert_eq!(u32::from_le_bytes(bytes[12..16].try_into().unwrap()), 80);
        // Dimensions
        assert_eq!(u16::from_le_bytes(bytes[16..18].try_into().unwrap()), 256);
        assert_eq!(u16::from_le_bytes(bytes[18..20].try_into().unwrap()), 128);
        // Format at offset 52, mip count at 56
        assert_eq!(
            i32::from_le_bytes(bytes[52..56].try_into().unwrap()),
            ImageFormat::Dxt5.as_raw()
        );
        assert_eq!(bytes[56], 9);
        // Low-res format NONE
        assert_eq!(i32::from_le_bytes(bytes[57..61].try_into().unwrap()), -1);
        // Depth at offset 63
        assert_eq!(u16::from_le_bytes(bytes[63..65].try_into().unwrap()), 1);
    }

    #[test]
    fn test_parse_roundtrip() {
        let original = sample_header();
        let parsed = VtfHeader::parse(&original.to_bytes()).unwrap();

        assert_eq!(parsed.version_major, 7);
        assert_eq!(parsed.version_minor, 2);
        assert_eq!(parsed.header_size, 80);
        assert_eq!(parsed.width, 256);
        assert_eq!(parsed.height, 128);
        assert_eq!(parsed.flags, 0x2000);
        assert_eq!(parsed.frames, 1);
        assert_eq!(parsed.high_res_format, ImageFormat::Dxt5.as_raw());
        assert_eq!(parsed.mipmap_count, 9);
        assert_eq!(parsed.low_res_format, -1);
        assert_eq!(parsed.depth, 1);
        assert_eq!(parsed.reflectivity, [0.5, 0.5, 0.5]);
        assert_eq!(parsed.bumpmap_scale, 1.0);
        assert!(!parsed.has_thumbnail());
    }

    #[test]
    fn test_parse_too_small() {
        let bytes = sample_header().to_bytes();
        match VtfHeader::parse(&bytes[..40]) {
            Err(Error::TooSmall { needed, available }) => {
                assert_eq!(needed, HEADER_SIZE);
                assert_eq!(available, 40);
            }
            other => panic!("expected TooSmall, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_bad_signature() {
        let mut bytes = sample_header().to_bytes();
        bytes[0] = b'X';
        match VtfHeader::parse(&bytes) {
            Err(Error::BadSignature(sig)) => assert_eq!(&sig, b"XTF\0"),
            other => panic!("expected BadSignature, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unsupported_minor_version() {
        let mut bytes = sample_header().to_bytes();
        bytes[8..12].copy_from_slice(&6u32.to_le_bytes());
        match VtfHeader::parse(&bytes) {
            Err(Error::UnsupportedVersion { major: 7, minor: 6 }) => {}
            other => panic!("expected UnsupportedVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unsupported_major_version() {
        let mut bytes = sample_header().to_bytes();
        bytes[4..8].copy_from_slice(&8u32.to_le_bytes());
        bytes[8..12].copy_from_slice(&0u32.to_le_bytes());
        match VtfHeader::parse(&bytes) {
            Err(Error::UnsupportedVersion { major: 8, minor: 0 }) => {}
            other => panic!("expected UnsupportedVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_count_clamping() {
        let mut header = sample_header();
        header.frames = 0;
        header.mipmap_count = 0;
        assert_eq!(header.frame_count(), 1);
        assert_eq!(header.mip_count(), 1);
    }

    #[test]
    fn test_has_thumbnail() {
        let mut header = sample_header();
        header.low_res_format = ImageFormat::Dxt1.as_raw();
        header.low_res_width = 16;
        header.low_res_height = 16;
        assert!(header.has_thumbnail());

        header.low_res_height = 0;
        assert!(!header.has_thumbnail());
    }
}
