// src/models/color.rs
//
// 8-bit RGBA color used by the fade state and the canvas

use nannou::color::{rgba8, Rgba};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Channels in red, green, blue, alpha order.
    pub fn channels(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    pub fn from_channels([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::rgba(red, green, blue, alpha)
    }

    /// Per-channel `self - other`, clamped at zero.
    pub fn saturating_gap(&self, other: &Color) -> [u8; 4] {
        let lhs = self.channels();
        let rhs = other.channels();
        [
            lhs[0].saturating_sub(rhs[0]),
            lhs[1].saturating_sub(rhs[1]),
            lhs[2].saturating_sub(rhs[2]),
            lhs[3].saturating_sub(rhs[3]),
        ]
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        rgba8(color.red, color.green, color.blue, color.alpha).into_format()
    }
}
