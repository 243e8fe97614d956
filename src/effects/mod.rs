pub mod color_fade;

pub use color_fade::ColorFade;
