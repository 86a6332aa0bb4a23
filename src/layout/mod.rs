//! The auto-fit layout engine.
//!
//! Given raw text and the canvas dimensions, [`fit`](crate::layout::fit)
//! searches downward from the largest plausible font size for the biggest
//! size at which the text word-wraps into the box, and returns the chosen
//! size together with the wrapped lines. Measurement is injected through the
//! [`Measure`](crate::layout::Measure) trait so the engine never touches a
//! font backend directly and can be driven by a deterministic measurer in
//! tests.
//!
//! # Example
//!
//! ```no_run
//! use sign_gen::layout;
//! use sign_gen::Font;
//!
//! let font_data = std::fs::read("DejaVuSans-Bold.ttf").expect("can read font");
//! let font = Font::load(font_data).expect("can load font");
//!
//! let layout = layout::fit("NO TRESPASSING", 256, 256, &font);
//! assert!(layout.font_size > 0);
//! ```

mod fit;
pub use fit::*;

/// Fixed leading factor: the vertical stride between consecutive lines as a
/// multiple of the font size
pub const LINE_HEIGHT_RATIO: f32 = 1.2;

/// The largest share of the tighter box dimension one line may occupy;
/// seeds the downward font-size search
pub const MAX_CHAR_SIZE_RATIO: f32 = 0.4;

/// Vertical stride in pixels between consecutive lines at `font_size`
pub fn line_height(font_size: u32) -> u32 {
    (font_size as f32 * LINE_HEIGHT_RATIO) as u32
}
