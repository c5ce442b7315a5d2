use crate::constants::STATS_TOGGLE_KEYS;

/// True when a keydown should toggle the stats overlay.
///
/// Modified presses are left to the browser and page.
#[inline]
pub fn is_stats_toggle(key: &str, ctrl: bool, alt: bool, meta: bool) -> bool {
    !(ctrl || alt || meta) && STATS_TOGGLE_KEYS.contains(&key)
}
