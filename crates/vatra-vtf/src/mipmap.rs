//! Mipmap chain generation.

use image::{Rgba, RgbaImage};

/// Number of mip levels a full chain for these dimensions has, counting the
/// base level.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    let mut count = 1;
    let mut w = width;
    let mut h = height;
    while w > 1 || h > 1 {
        w = (w / 2).max(1);
        h = (h / 2).max(1);
        count += 1;
    }
    count
}

/// Generate the full mipmap chain for an image.
///
/// Level 0 is the source itself; each following level halves both
/// dimensions (floor, minimum 1) until 1x1. Non-square and odd dimensions
/// are fine - the box filter only averages the source pixels that exist.
pub fn mip_chain(source: &RgbaImage) -> Vec<RgbaImage> {
    let mut chain = vec![source.clone()];

    let mut current = source.clone();
    while current.width() > 1 || current.height() > 1 {
        current = downsample_half(&current);
        chain.push(current.clone());
    }

    chain
}

/// Downsample by 2x with a box filter.
///
/// Each destination pixel is the truncating integer average of the 1, 2, or
/// 4 source pixels in its 2x2 footprint; footprints shrink at a dimension
/// of 1 instead of reading out of bounds.
fn downsample_half(source: &RgbaImage) -> RgbaImage {
    let (src_w, src_h) = source.dimensions();
    let new_w = (src_w / 2).max(1);
    let new_h = (src_h / 2).max(1);

    let mut output = RgbaImage::new(new_w, new_h);

    for y in 0..new_h {
        for x in 0..new_w {
            let src_x = x * 2;
            let src_y = y * 2;

            let mut sum = [0u32; 4];
            let mut count = 0u32;
            for dy in 0..2 {
                for dx in 0..2 {
                    if src_x + dx < src_w && src_y + dy < src_h {
                        let px = source.get_pixel(src_x + dx, src_y + dy);
                        for c in 0..4 {
                            sum[c] += u32::from(px[c]);
                        }
                        count += 1;
                    }
                }
            }

            let avg = Rgba([
                (sum[0] / count) as u8,
                (sum[1] / count) as u8,
                (sum[2] / count) as u8,
                (sum[3] / count) as u8,
            ]);
            output.put_pixel(x, y, avg);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_count() {
        assert_eq!(mip_level_count(1, 1), 1);
        assert_eq!(mip_level_count(4, 4), 3);
        assert_eq!(mip_level_count(6, 6), 3);
        assert_eq!(mip_level_count(256, 256), 9);
        assert_eq!(mip_level_count(16, 1), 5);
    }

    #[test]
    fn test_chain_6x6() {
        let chain = mip_chain(&RgbaImage::new(6, 6));

        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0].dimensions(), (6, 6));
        assert_eq!(chain[1].dimensions(), (3, 3));
        assert_eq!(chain[2].dimensions(), (1, 1));
    }

    #[test]
    fn test_chain_non_square() {
        let chain = mip_chain(&RgbaImage::new(8, 2));

        assert_eq!(chain.len(), 4);
        assert_eq!(chain[1].dimensions(), (4, 1));
        assert_eq!(chain[2].dimensions(), (2, 1));
        assert_eq!(chain[3].dimensions(), (1, 1));
    }

    #[test]
    fn test_chain_1x1() {
        let chain = mip_chain(&RgbaImage::new(1, 1));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_downsample_average_exact() {
        let mut source = RgbaImage::new(2, 2);
        source.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        source.put_pixel(1, 0, Rgba([100, 0, 0, 255]));
        source.put_pixel(0, 1, Rgba([0, 100, 0, 255]));
        source.put_pixel(1, 1, Rgba([0, 0, 100, 255]));

        let out = downsample_half(&source);
        assert_eq!(out.dimensions(), (1, 1));
        assert_eq!(*out.get_pixel(0, 0), Rgba([25, 25, 25, 255]));
    }

    #[test]
    fn test_downsample_truncates() {
        let mut source = RgbaImage::new(2, 2);
        source.put_pixel(0, 0, Rgba([1, 1, 1, 255]));
        source.put_pixel(1, 0, Rgba([1, 1, 1, 255]));
        source.put_pixel(0, 1, Rgba([1, 1, 1, 255]));
        source.put_pixel(1, 1, Rgba([2, 2, 2, 255]));

        let out = downsample_half(&source);
        // (1+1+1+2)/4 = 1 with integer division
        assert_eq!(*out.get_pixel(0, 0), Rgba([1, 1, 1, 255]));
    }

    #[test]
    fn test_downsample_partial_footprint_column() {
        // A 1-wide image averages vertical pairs only
        let mut source = RgbaImage::new(1, 4);
        source.put_pixel(0, 0, Rgba([10, 0, 0, 255]));
        source.put_pixel(0, 1, Rgba([30, 0, 0, 255]));
        source.put_pixel(0, 2, Rgba([50, 0, 0, 255]));
        source.put_pixel(0, 3, Rgba([70, 0, 0, 255]));

        let out = downsample_half(&source);
        assert_eq!(out.dimensions(), (1, 2));
        assert_eq!(out.get_pixel(0, 0)[0], 20);
        assert_eq!(out.get_pixel(0, 1)[0], 60);
    }

    #[test]
    fn test_downsample_partial_footprint_row() {
        let mut source = RgbaImage::new(2, 1);
        source.put_pixel(0, 0, Rgba([10, 0, 0, 0]));
        source.put_pixel(1, 0, Rgba([30, 0, 0, 200]));

        let out = downsample_half(&source);
        assert_eq!(out.dimensions(), (1, 1));
        assert_eq!(out.get_pixel(0, 0)[0], 20);
        // alpha participates in the average
        assert_eq!(out.get_pixel(0, 0)[3], 100);
    }

    #[test]
    fn test_solid_color_preserved_through_chain() {
        let mut source = RgbaImage::new(16, 16);
        for px in source.pixels_mut() {
            *px = Rgba([200, 150, 100, 50]);
        }

        for level in mip_chain(&source) {
            for px in level.pixels() {
                assert_eq!(*px, Rgba([200, 150, 100, 50]));
            }
        }
    }
}
