//! Output compositions for stereo pairs.
//!
//! - [`stereo`]: all images side by side
//! - [`anaglyph`]: a left/right pair merged into one color-filtered image

mod anaglyph;
mod stereo;

pub use anaglyph::{anaglyph, ColorScheme};
pub use stereo::stereo;
