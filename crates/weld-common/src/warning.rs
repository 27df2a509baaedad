//! Inliner warnings with colored terminal output.
//!
//! Provides deduplication so that the same anomaly (a duplicate reference
//! tag, say) is reported once per merge session rather than once per
//! occurrence. Used by the merge engine and the session layer.

use std::collections::HashSet;
use std::sync::Mutex;

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a non-fatal anomaly (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Merge", "duplicate reference tag '<script src=\"app.js\"></script>'");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{YELLOW}[weld {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call when loading a new source document)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
