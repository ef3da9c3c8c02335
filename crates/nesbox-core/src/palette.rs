//! NES PPU palette decoding.
//!
//! The PPU only ever produces 6-bit palette indices (0-63); turning those
//! into displayable RGB is the bus/core's job, not the PPU's (`nesbox_ppu`
//! hands back indices via [`nesbox_ppu::Ppu::frame_buffer`]).
//!
//! The active "tint" is one of eight variants selected by the three
//! emphasis bits of PPUMASK ($2001, bits 5-7). On real NTSC hardware these
//! bits don't swap in a whole new 64-color table; they attenuate whichever
//! RGB channels aren't being emphasized. We model that directly rather than
//! storing eight redundant 64-entry tables, and cache nothing per index
//! since the transform is a handful of multiplies.

/// Default NES 2C02 palette, 64 entries of (R, G, B).
///
/// Index 0x0D is the "blacker than black" sync-signal color; several
/// entries in the last column (x0E/x0F/x1D/x1E/x1F/x2E/x2F/x3E/x3F) are
/// unused/invalid indices that never appear in palette RAM on real
/// hardware but are included here for completeness.
#[rustfmt::skip]
pub const NES_PALETTE: [(u8, u8, u8); 64] = [
    (84, 84, 84),    (0, 30, 116),    (8, 16, 144),    (48, 0, 136),
    (68, 0, 100),    (92, 0, 48),     (84, 4, 0),      (60, 24, 0),
    (32, 42, 0),     (8, 58, 0),      (0, 64, 0),      (0, 60, 0),
    (0, 50, 60),     (0, 0, 0),       (0, 0, 0),       (0, 0, 0),
    (152, 150, 152), (8, 76, 196),    (48, 50, 236),   (92, 30, 228),
    (136, 20, 176),  (160, 20, 100),  (152, 34, 32),   (120, 60, 0),
    (84, 90, 0),     (40, 114, 0),    (8, 124, 0),     (0, 118, 40),
    (0, 102, 120),   (0, 0, 0),       (0, 0, 0),       (0, 0, 0),
    (255, 255, 255), (76, 154, 236),  (120, 124, 236), (176, 98, 236),
    (228, 84, 236),  (236, 88, 180),  (236, 106, 100), (212, 136, 32),
    (160, 170, 0),   (116, 196, 0),   (76, 208, 32),   (56, 204, 108),
    (56, 180, 204),  (60, 60, 60),    (0, 0, 0),       (0, 0, 0),
    (255, 255, 255), (168, 204, 236), (188, 188, 236), (212, 178, 236),
    (236, 174, 236), (236, 174, 212), (236, 180, 176), (228, 196, 144),
    (204, 210, 120), (180, 222, 120), (168, 226, 144), (152, 226, 180),
    (160, 214, 228), (160, 162, 160), (0, 0, 0),       (0, 0, 0),
];

/// PPUMASK bit for greyscale mode.
const GREYSCALE: u8 = 0b0000_0001;
/// PPUMASK bit: emphasize red, attenuating green/blue.
const EMPHASIZE_RED: u8 = 0b0010_0000;
/// PPUMASK bit: emphasize green, attenuating red/blue.
const EMPHASIZE_GREEN: u8 = 0b0100_0000;
/// PPUMASK bit: emphasize blue, attenuating red/green.
const EMPHASIZE_BLUE: u8 = 0b1000_0000;

/// Fraction a channel is dimmed to when it isn't emphasized but another is.
const ATTENUATION: f32 = 0.75;

#[inline]
fn attenuate(channel: u8) -> u8 {
    (f32::from(channel) * ATTENUATION) as u8
}

/// Decode a raw 6-bit palette index to RGB using the default tint.
#[must_use]
pub fn palette_to_rgb(index: u8) -> (u8, u8, u8) {
    NES_PALETTE[(index & 0x3F) as usize]
}

/// Decode a raw 6-bit palette index to RGB, applying the tint selected by
/// the live PPUMASK bits (greyscale + three emphasis bits, 8 variants
/// total counting "no emphasis").
#[must_use]
pub fn palette_to_rgb_tinted(index: u8, mask_bits: u8) -> (u8, u8, u8) {
    let (mut r, mut g, mut b) = palette_to_rgb(index);

    if mask_bits & GREYSCALE != 0 {
        let avg = ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8;
        r = avg;
        g = avg;
        b = avg;
    }

    if mask_bits & EMPHASIZE_RED != 0 {
        g = attenuate(g);
        b = attenuate(b);
    }
    if mask_bits & EMPHASIZE_GREEN != 0 {
        r = attenuate(r);
        b = attenuate(b);
    }
    if mask_bits & EMPHASIZE_BLUE != 0 {
        r = attenuate(r);
        g = attenuate(g);
    }

    (r, g, b)
}
