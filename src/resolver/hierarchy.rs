//! Closest-ancestor matching
//!
//! The core matching algorithm. Each configured pattern is tried against the
//! fault's lineage by substring containment, producing the depth of its first
//! hit: 0 for the fault's own type, higher for progressively more general
//! ancestors. The pattern with the smallest depth wins, so an exact-type rule
//! beats a base-type rule even though a short base-type pattern would also
//! match. Containment (rather than equality) lets one pattern such as
//! `"NotFound"` cover a whole subtree of qualified fault names.

use crate::fault::FaultDescriptor;
use crate::table::PatternTable;

/// Find the view of the closest matching pattern, if any.
pub fn find_view<'t>(descriptor: &FaultDescriptor, table: &'t PatternTable) -> Option<&'t str> {
    find_match(descriptor, table).map(|(_, view, _)| view)
}

/// Like [`find_view`], but also reports the winning pattern and its depth.
pub(crate) fn find_match<'t>(
    descriptor: &FaultDescriptor,
    table: &'t PatternTable,
) -> Option<(&'t str, &'t str, usize)> {
    let mut best: Option<(&str, &str, usize)> = None;
    for (pattern, view) in table.exception_mappings() {
        if let Some(found) = depth(pattern, descriptor) {
            // strict `<`: on equal depth the first declared pattern keeps
            // priority
            let closer = match best {
                Some((_, _, best_depth)) => found < best_depth,
                None => true,
            };
            if closer {
                best = Some((pattern.as_str(), view.as_str(), found));
            }
        }
    }
    best
}

/// Depth at which a pattern first matches the descriptor's lineage.
///
/// Walks the lineage from the fault's own type outward and returns the index
/// of the first entry containing `pattern` as a substring. `None` when the
/// chain is exhausted without a hit.
pub fn depth(pattern: &str, descriptor: &FaultDescriptor) -> Option<usize> {
    descriptor
        .lineage()
        .iter()
        .position(|name| name.contains(pattern))
}
