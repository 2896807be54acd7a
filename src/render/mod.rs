//! Capture-to-text rendering.
//!
//! A frame is built in four steps per output cell:
//!
//! 1. **Sampling** - nearest-neighbor pick from the clipped source region
//! 2. **Adjustment** - contrast around mid-gray, then brightness offset
//! 3. **Quantization** - foreground/background colors for the terminal palette
//! 4. **Glyph selection** - luminance bucket in the chosen charset ramp
//!
//! The finished text is handed to the terminal in one piece.

mod adjust;
mod color;
mod display;
mod frame;
mod glyph;

pub use adjust::{adjust, luminance};
pub use color::{escape_for, quantize, ColorMode, Layer, TermColor};
pub use display::{DisplayConfig, Region};
pub use frame::{clip_region, render, render_into, ClippedRegion, FrameRenderer, RenderError, SGR_RESET};
pub use glyph::{glyph, CharsetMode, GLYPH_RAMP};
