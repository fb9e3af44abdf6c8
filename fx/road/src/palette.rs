//! Colors.
//!
//! The renderer only ever deals in palette indices; hosts convert to real
//! colors on the way out.

use gfx::{Color, PALETTE_SIZE};

/// Racing palette, `0xRRGGBB`.
pub const PALETTE: [u32; PALETTE_SIZE] = [
    0x000000, // 0x0 transparent
    0xFFFFFF, // 0x1 white
    0xFF2121, // 0x2 red
    0xFF93C4, // 0x3 pink
    0xFF8135, // 0x4 orange
    0x68BF48, // 0x5 dark green
    0x249CA3, // 0x6 cyan
    0x78DC52, // 0x7 green
    0x003FAD, // 0x8 blue
    0x87F2FF, // 0x9 sky
    0x8E2EC4, // 0xA purple
    0x595E69, // 0xB dark grey
    0x606774, // 0xC grey
    0xE5CDC4, // 0xD beige
    0x91463D, // 0xE brown
    0x000000, // 0xF black
];

/// Background fill under the road.
pub const GROUND: Color = 0x7;

pub const SKY: Color = 0x9;

/// The colors used for one band of road.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Stripe {
    pub ground: Color,
    pub surface: Color,
    pub sides: Color,
    pub lines: Color,
}

pub const DARK: usize = 0;
pub const LIGHT: usize = 1;

/// Indexed by `DARK` and `LIGHT`.
///
/// The light stripe's lines match its surface, which hides the lane dividers
/// and gives them their dashed look.
pub const STRIPES: [Stripe; 2] = [
    Stripe {
        ground: 0x5,
        surface: 0xB,
        sides: 0xE,
        lines: 0x1,
    },
    Stripe {
        ground: 0x7,
        surface: 0xC,
        sides: 0xD,
        lines: 0xC,
    },
];

/// Looks up `color` as `[r, g, b, a]`. Out-of-range indices wrap.
pub fn rgba(color: Color) -> [u8; 4] {
    let rgb = PALETTE[color as usize % PALETTE_SIZE];
    [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 0xFF]
}

/// Looks up `color` packed for a little-endian RGBA canvas (`0xAABBGGRR`).
pub fn abgr(color: Color) -> u32 {
    u32::from_le_bytes(rgba(color))
}
