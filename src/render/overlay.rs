//! Tile tinting: remap the brick texture's shading onto a flat target colour.

use image::RgbImage;

use crate::types::Colour;

/// Raw per-channel overlay arithmetic, before clamping.
///
/// Texels darker than 33 pull the target channel down by 100, texels
/// brighter than 233 push it up by 100, and the mid range shifts the target
/// by the texel's offset from the neutral point 133. The result is a tile
/// that keeps its shaded edges and stud highlight around the target colour.
pub fn overlay_effect(texel: u8, target: u8) -> i32 {
    let target = target as i32;
    match texel {
        t if t < 33 => target - 100,
        t if t > 233 => target + 100,
        t => target - 133 + t as i32,
    }
}

/// Clamped overlay for one channel.
///
/// The raw arithmetic can leave the valid range (a texel of 10 against a
/// target of 50 gives -50); out-of-range values saturate at the channel
/// bounds rather than wrapping.
fn overlay_channel(texel: u8, target: u8) -> u8 {
    overlay_effect(texel, target).clamp(0, 255) as u8
}

/// Tint the brick texture to a target colour, channel by channel.
///
/// Returns a tile with the texture's dimensions; the input is never touched.
pub fn tint_tile(texture: &RgbImage, colour: Colour) -> RgbImage {
    let mut tile = RgbImage::new(texture.width(), texture.height());

    for (x, y, pixel) in texture.enumerate_pixels() {
        let [tr, tg, tb] = pixel.0;
        tile.put_pixel(
            x,
            y,
            image::Rgb([
                overlay_channel(tr, colour.r),
                overlay_channel(tg, colour.g),
                overlay_channel(tb, colour.b),
            ]),
        );
    }

    tile
}

#[cfg(test)]
mod tests {
    use super::*;

    // Pins the arithmetic contract independently of the clamping decision.
    #[test]
    fn test_overlay_effect_arithmetic() {
        assert_eq!(overlay_effect(10, 50), -50);
        assert_eq!(overlay_effect(240, 50), 150);
        assert_eq!(overlay_effect(100, 50), 17);
    }

    #[test]
    fn test_overlay_effect_boundaries() {
        // 33 and 233 take the mid-range branch
        assert_eq!(overlay_effect(33, 50), -50);
        assert_eq!(overlay_effect(233, 50), 150);
        assert_eq!(overlay_effect(32, 50), -50);
        assert_eq!(overlay_effect(234, 50), 150);
    }

    #[test]
    fn test_overlay_channel_clamps_not_wraps() {
        // 10 against 50 is -50 raw; clamped to 0
        assert_eq!(overlay_channel(10, 50), 0);
        // 240 against 200 is 300 raw; clamped to 255
        assert_eq!(overlay_channel(240, 200), 255);
        // In-range values pass through untouched
        assert_eq!(overlay_channel(100, 50), 17);
    }

    #[test]
    fn test_neutral_texel_reproduces_target() {
        // A texel of 133 maps every channel to exactly the target value
        assert_eq!(overlay_channel(133, 0), 0);
        assert_eq!(overlay_channel(133, 127), 127);
        assert_eq!(overlay_channel(133, 255), 255);
    }

    #[test]
    fn test_tint_tile_dimensions_and_values() {
        let texture = RgbImage::from_fn(4, 2, |x, _| {
            // Left half dark rim, right half neutral body
            if x < 2 {
                image::Rgb([10, 10, 10])
            } else {
                image::Rgb([133, 133, 133])
            }
        });

        let tile = tint_tile(&texture, Colour::rgb(200, 120, 40));
        assert_eq!((tile.width(), tile.height()), (4, 2));

        // Dark rim: every channel dropped by 100 (clamped at 0)
        assert_eq!(tile.get_pixel(0, 0).0, [100, 20, 0]);
        // Neutral body: exactly the target colour
        assert_eq!(tile.get_pixel(3, 0).0, [200, 120, 40]);
    }

    #[test]
    fn test_tint_tile_is_deterministic() {
        let texture = RgbImage::from_fn(6, 6, |x, y| {
            image::Rgb([(x * 40) as u8, (y * 40) as u8, 133])
        });
        let a = tint_tile(&texture, Colour::rgb(90, 60, 30));
        let b = tint_tile(&texture, Colour::rgb(90, 60, 30));
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
