//! Deduplicated warnings for recoverable input problems.
//!
//! Used by the style layer to report fallbacks (missing surface colors,
//! empty color maps) without repeating the same message for every box that
//! triggers it. Messages go through [`log::warn!`], so the binary decides
//! where they end up.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a recoverable problem (emits once per unique message)
///
/// # Example
/// ```
/// tinct_common::warning::warn_once("style", "no surface color given, using red");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_emit = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_emit {
        log::warn!("[tinct {component}] {message}");
    }
}

/// Whether `warn_once` has already emitted this exact message.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call before processing a new input file)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
