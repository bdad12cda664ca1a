//! Color registry - name to escape sequence table shared by every colorizer

use crate::color::{BUILTIN_PALETTE, DEFAULT};
use crate::colorizer::Colorizer;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Entries = IndexMap<String, String>;

/// Handle to a color table.
///
/// Clones share the same table, so a colorizer holding a clone sees every
/// later `set` on the original. Values are not validated: any string is
/// accepted as an escape prefix.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Arc<RwLock<Entries>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Registry seeded with the built-in palette
    #[must_use]
    pub fn new() -> Self {
        let registry = Self::empty();
        registry.reset_to_defaults();
        registry
    }

    /// Registry with no entries, not even `default`
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Escape sequence registered under `name`
    pub fn get(&self, name: &str) -> Result<String> {
        let entries = self.read();
        tracing::trace!(name, "color lookup");
        lookup(&entries, name).map(str::to_owned)
    }

    /// Register or override `name`. Never fails.
    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        let mut entries = self.write();
        let replaced = entries.insert(name.clone(), value).is_some();
        tracing::debug!(%name, replaced, "color registered");
    }

    /// Registered names, in registration order.
    ///
    /// Overriding a name keeps its original position.
    #[must_use]
    pub fn list_keys(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Colorizer bound to `name`, failing if the name is not registered
    pub fn colorizer(&self, name: &str) -> Result<Colorizer> {
        self.get(name)?;
        Ok(Colorizer::new(self.clone(), name))
    }

    /// Put every built-in color back to its original value.
    ///
    /// Custom colors are left in place.
    pub fn reset_to_defaults(&self) {
        let mut entries = self.write();
        for (name, value) in BUILTIN_PALETTE {
            entries.insert(name.to_owned(), value.to_owned());
        }
    }

    /// Escape for `name` and the reset escape, read under one lock
    pub(crate) fn escape_and_reset(&self, name: &str) -> Result<(String, String)> {
        let entries = self.read();
        let escape = lookup(&entries, name)?;
        let reset = lookup(&entries, DEFAULT)?;
        Ok((escape.to_owned(), reset.to_owned()))
    }

    // The table holds plain strings, so a panic mid-write cannot leave it torn
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn lookup<'a>(entries: &'a Entries, name: &str) -> Result<&'a str> {
    entries
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| Error::UnknownColor {
            name: name.to_owned(),
            available: entries.keys().cloned().collect(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;

    #[test]
    fn seeded_with_builtin_palette() {
        let registry = Registry::new();
        assert_eq!(
            registry.list_keys(),
            [
                "default", "red", "blue", "grey", "cyan", "black", "green", "white", "yellow",
                "magenta"
            ]
        );
        assert_eq!(registry.get("default").unwrap(), "\x1b[0m");
        assert_eq!(registry.get("red").unwrap(), "\x1b[91m");
        assert_eq!(registry.get("black").unwrap(), registry.get("grey").unwrap());
        assert_eq!(registry.get("magenta").unwrap(), color::MAGENTA);
    }

    #[test]
    fn unknown_name_lists_every_valid_name() {
        let registry = Registry::new();
        registry.set("orange", "\x1b[38;5;202m");

        let err = registry.get("purple").unwrap_err();
        let Error::UnknownColor { name, available } = &err;
        assert_eq!(name, "purple");
        assert_eq!(available, &registry.list_keys());

        let message = err.to_string();
        for key in registry.list_keys() {
            assert!(message.contains(&key), "{key} missing from: {message}");
        }
    }

    #[test]
    fn set_then_get_returns_value() {
        let registry = Registry::new();
        registry.set("orange", "\x1b[38;5;202m");
        assert_eq!(registry.get("orange").unwrap(), "\x1b[38;5;202m");

        // Values are not validated
        registry.set("label", ">> ");
        assert_eq!(registry.get("label").unwrap(), ">> ");
    }

    #[test]
    fn override_keeps_single_key_in_place() {
        let registry = Registry::new();
        registry.set("red", "\x1b[31m");
        registry.set("orange", "\x1b[38;5;202m");

        let keys = registry.list_keys();
        assert_eq!(keys.len(), color::BUILTIN_PALETTE.len() + 1);
        assert_eq!(keys[1], "red");
        assert_eq!(keys.last().map(String::as_str), Some("orange"));
        assert_eq!(registry.get("red").unwrap(), "\x1b[31m");
    }

    #[test]
    fn colorizer_requires_registered_name() {
        let registry = Registry::new();
        assert!(registry.colorizer("red").is_ok());
        assert!(matches!(
            registry.colorizer("orange"),
            Err(Error::UnknownColor { .. })
        ));
    }

    #[test]
    fn clones_share_entries() {
        let registry = Registry::new();
        let other = registry.clone();
        other.set("orange", "\x1b[38;5;202m");
        assert!(registry.contains("orange"));
    }

    #[test]
    fn instances_are_isolated() {
        let a = Registry::new();
        let b = Registry::new();
        a.set("orange", "\x1b[38;5;202m");
        assert!(!b.contains("orange"));
    }

    #[test]
    fn empty_registry_has_no_reset() {
        let registry = Registry::empty();
        assert!(registry.list_keys().is_empty());
        assert!(registry.get(DEFAULT).is_err());
    }

    #[test]
    fn reset_to_defaults_restores_builtins_only() {
        let registry = Registry::new();
        registry.set("red", "\x1b[31m");
        registry.set("orange", "\x1b[38;5;202m");

        registry.reset_to_defaults();
        assert_eq!(registry.get("red").unwrap(), color::RED);
        assert!(registry.contains("orange"));
    }

    #[test]
    fn apply_during_concurrent_set_sees_whole_values() {
        let registry = Registry::new();
        let red = registry.colorizer("red").unwrap();
        let done = Arc::new(AtomicBool::new(false));

        let writer = {
            let registry = registry.clone();
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut flip = false;
                while !done.load(Ordering::Relaxed) {
                    flip = !flip;
                    registry.set("red", if flip { "\x1b[31m" } else { "\x1b[91m" });
                    registry.set("default", if flip { "\x1b[39m" } else { "\x1b[0m" });
                }
            })
        };

        for _ in 0..2000 {
            let painted = red.apply("x").unwrap();
            let (escape, reset) = painted.split_once('x').unwrap();
            assert!(matches!(escape, "\x1b[31m" | "\x1b[91m"), "{painted:?}");
            assert!(matches!(reset, "\x1b[39m" | "\x1b[0m"), "{painted:?}");
        }

        done.store(true, Ordering::Relaxed);
        writer.join().unwrap();
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let registry = Registry::new();
        let poisoner = registry.clone();
        let result = thread::spawn(move || {
            let _guard = poisoner.write();
            panic!("panic while holding the color table");
        })
        .join();

        assert!(result.is_err());
        assert!(registry.entries.is_poisoned());
        assert_eq!(registry.get("red").unwrap(), color::RED);

        registry.set("orange", "\x1b[38;5;202m");
        let orange = registry.colorizer("orange").unwrap();
        assert_eq!(orange.apply("hi").unwrap(), "\x1b[38;5;202mhi\x1b[0m");
    }
}
