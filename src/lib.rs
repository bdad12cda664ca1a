//! ctext - named ANSI colors for terminal text
//!
//! ```
//! let blue = ctext::color("blue")?;
//! println!("{}", blue.apply("this text is blue")?);
//!
//! ctext::set_color("orange", "\x1b[38;5;202m");
//! println!("{}", ctext::color("orange")?.apply("this text is orange")?);
//! # Ok::<(), ctext::Error>(())
//! ```

pub mod color;
mod colorizer;
mod error;
mod registry;

pub use colorizer::Colorizer;
pub use error::{Error, Result};
pub use registry::Registry;

use std::sync::OnceLock;

/// Process-wide palette, seeded with the built-in colors on first use
pub fn palette() -> &'static Registry {
    static PALETTE: OnceLock<Registry> = OnceLock::new();
    PALETTE.get_or_init(Registry::new)
}

/// Colorizer for a color in the process-wide palette
pub fn color(name: &str) -> Result<Colorizer> {
    palette().colorizer(name)
}

/// Register or override a color in the process-wide palette
pub fn set_color(name: impl Into<String>, value: impl Into<String>) {
    palette().set(name, value);
}

/// Names in the process-wide palette
#[must_use]
pub fn colors() -> Vec<String> {
    palette().list_keys()
}
