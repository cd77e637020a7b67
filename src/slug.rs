//! Deterministic slugification of human-readable names.

use lazy_regex::regex;

/// Fallback slug for names with no usable characters at all.
const EMPTY_FALLBACK: &str = "step";

/// Derives a filesystem- and URL-safe slug from `name`.
///
/// Lowercases ASCII, collapses every run of characters outside `[a-z0-9]`
/// into a single `-`, and trims leading/trailing separators. The mapping is
/// deterministic: equal names always produce equal slugs, which is what lets
/// a step's screenshot pair (`<slug>.png`, `<slug>_tm.png`) be addressed from
/// its table row.
#[must_use]
pub fn slugify(name: &str) -> String {
    let lowered = name.to_ascii_lowercase();
    let slug = regex!("[^a-z0-9]+").replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        EMPTY_FALLBACK.to_owned()
    } else {
        slug.to_owned()
    }
}
