//! VTF texture flags.
//!
//! The header's flag word is passed through the codec untouched; these
//! constants exist so hosts can assemble one without magic numbers.

pub const POINT_SAMPLE: u32 = 0x0000_0001;
pub const TRILINEAR: u32 = 0x0000_0002;
pub const CLAMP_S: u32 = 0x0000_0004;
pub const CLAMP_T: u32 = 0x0000_0008;
pub const ANISOTROPIC: u32 = 0x0000_0010;
pub const HINT_DXT5: u32 = 0x0000_0020;
pub const PWL_CORRECTED: u32 = 0x0000_0040;
pub const NORMAL: u32 = 0x0000_0080;
pub const NO_MIP: u32 = 0x0000_0100;
pub const NO_LOD: u32 = 0x0000_0200;
pub const ALL_MIPS: u32 = 0x0000_0400;
pub const PROCEDURAL: u32 = 0x0000_0800;
pub const ONE_BIT_ALPHA: u32 = 0x0000_1000;
pub const EIGHT_BIT_ALPHA: u32 = 0x0000_2000;
pub const ENVMAP: u32 = 0x0000_4000;
pub const RENDER_TARGET: u32 = 0x0000_8000;
pub const DEPTH_RENDER_TARGET: u32 = 0x0001_0000;
pub const NO_DEBUG_OVERRIDE: u32 = 0x0002_0000;
pub const SINGLE_COPY: u32 = 0x0004_0000;
pub const PRE_SRGB: u32 = 0x0008_0000;
pub const CLAMP_U: u32 = 0x0200_0000;
pub const VERTEX_TEXTURE: u32 = 0x0400_0000;
pub const SSBUMP: u32 = 0x0800_0000;
pub const BORDER: u32 = 0x2000_0000;
