//! Suffix matching
//!
//! Routes by request path extension: a mapping for `pdf` matches every path
//! ending in `.pdf`. When several suffixes match, the last declared one wins;
//! this is order-dependent on purpose, not longest-match.

use crate::table::PatternTable;

/// Find the view mapped to the path's suffix, if any.
pub fn find_view<'t>(path: &str, table: &'t PatternTable) -> Option<&'t str> {
    find_match(path, table).map(|(_, view)| view)
}

/// Like [`find_view`], but also reports which suffix won.
pub(crate) fn find_match<'t>(path: &str, table: &'t PatternTable) -> Option<(&'t str, &'t str)> {
    let mut found = None;
    for (suffix, view) in table.suffix_mappings() {
        if matches_suffix(path, suffix) {
            // keep scanning: a later declaration overrides an earlier one
            found = Some((suffix.as_str(), view.as_str()));
        }
    }
    found
}

/// True when `path` ends with `"." + suffix`.
fn matches_suffix(path: &str, suffix: &str) -> bool {
    path.strip_suffix(suffix)
        .and_then(|rest| rest.strip_suffix('.'))
        .is_some()
}
