//! One-shot discovery and registration of a chart text font.
//!
//! The `ab_glyph` text path renders glyphs in pure Rust but has no view
//! of system font configuration, so a usable TTF has to be found and
//! registered by hand. Probing happens once; when no candidate exists
//! the charts render without captions or tick labels instead of failing.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use plotters::style::{FontStyle, register_font};
use tracing::{debug, warn};

/// Well-known sans-serif TTF locations across common distributions.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation2/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
];

static FONT_READY: OnceLock<bool> = OnceLock::new();

/// Returns `true` once a font is registered for text rendering.
///
/// The first call probes [`FONT_CANDIDATES`] and registers the first
/// readable TTF under the `"sans-serif"` family that plotters resolves
/// by default. The result is cached for the process lifetime.
pub(crate) fn ready() -> bool {
    *FONT_READY.get_or_init(|| {
        for path in FONT_CANDIDATES {
            if !Path::new(path).is_file() {
                continue;
            }
            match fs::read(path) {
                Ok(bytes) => {
                    // register_font keeps the bytes for the process
                    // lifetime, hence the leak into 'static.
                    let bytes: &'static [u8] =
                        Box::leak(bytes.into_boxed_slice());
                    if register_font("sans-serif", FontStyle::Normal, bytes)
                        .is_ok()
                    {
                        debug!(path = %path, "font.registered");
                        return true;
                    }
                    debug!(path = %path, "font.invalid");
                }
                Err(err) => debug!(path = %path, %err, "font.unreadable"),
            }
        }
        warn!("no usable font found; charts are rendered without text");
        false
    })
}
