//! Colorizer - wraps text in the escape sequence of one named color

use crate::error::Result;
use crate::registry::Registry;
use std::fmt;
use std::ops::Add;

/// A color name bound to a registry.
///
/// The escape sequence is looked up on every use, never cached, so a later
/// `Registry::set` for the same name changes the output of existing
/// colorizers.
///
/// `+` builds multi-color lines without resets in between:
///
/// ```
/// use ctext::Registry;
///
/// let palette = Registry::new();
/// let blue = palette.colorizer("blue")?;
/// let red = palette.colorizer("red")?;
/// let default = palette.colorizer("default")?;
///
/// let line = blue + "blue text" + &red + " now red" + &default;
/// assert_eq!(line, "\x1b[94mblue text\x1b[91m now red\x1b[0m");
/// # Ok::<(), ctext::Error>(())
/// ```
#[derive(Clone)]
pub struct Colorizer {
    registry: Registry,
    name: String,
}

impl Colorizer {
    /// Bind `name` without checking that it is registered.
    ///
    /// Use `Registry::colorizer` to fail early instead.
    #[must_use]
    pub fn new(registry: Registry, name: impl Into<String>) -> Self {
        Self {
            registry,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `text` wrapped in this color, terminated with the `default` escape
    pub fn apply(&self, text: &str) -> Result<String> {
        let (escape, reset) = self.registry.escape_and_reset(&self.name)?;
        Ok(format!("{escape}{text}{reset}"))
    }

    /// The bare escape sequence. The caller appends the reset.
    pub fn prefix(&self) -> Result<String> {
        self.registry.get(&self.name)
    }

    /// `text` followed by this color's escape, no reset
    pub fn prepend_to(&self, text: &str) -> Result<String> {
        let escape = self.prefix()?;
        Ok(format!("{text}{escape}"))
    }

    // `+` has no error channel
    fn prefix_or_empty(&self) -> String {
        self.prefix().unwrap_or_else(|err| {
            tracing::warn!(%err, "concatenating unknown color without escape");
            String::new()
        })
    }
}

impl fmt::Debug for Colorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Colorizer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The color's own name, colorized. Unknown names are written uncolored.
impl fmt::Display for Colorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.apply(&self.name) {
            Ok(painted) => f.write_str(&painted),
            Err(err) => {
                tracing::warn!(%err, "displaying unknown color uncolored");
                f.write_str(&self.name)
            }
        }
    }
}

/// Escape followed by any displayable value. Another colorizer contributes
/// its self-colorized name.
impl<T: fmt::Display> Add<T> for &Colorizer {
    type Output = String;

    fn add(self, rhs: T) -> String {
        let mut out = self.prefix_or_empty();
        out.push_str(&rhs.to_string());
        out
    }
}

impl<T: fmt::Display> Add<T> for Colorizer {
    type Output = String;

    fn add(self, rhs: T) -> String {
        &self + rhs
    }
}

impl Add<&Colorizer> for &str {
    type Output = String;

    fn add(self, colorizer: &Colorizer) -> String {
        let mut out = self.to_owned();
        out.push_str(&colorizer.prefix_or_empty());
        out
    }
}

impl Add<&Colorizer> for String {
    type Output = String;

    fn add(mut self, colorizer: &Colorizer) -> String {
        self.push_str(&colorizer.prefix_or_empty());
        self
    }
}

impl Add<Colorizer> for String {
    type Output = String;

    fn add(self, colorizer: Colorizer) -> String {
        self + &colorizer
    }
}
