//! Stand-in for the backend search service: flags matching nodes so the
//! listing can be flattened in search mode.

use crate::listing::FileNode;

/// Set `in_result` on every node whose name contains `term`, clearing it on
/// all others. Returns the number of flagged nodes.
///
/// An empty term clears every flag.
pub fn annotate_matches(nodes: &mut [FileNode], term: &str, case_sensitive: bool) -> usize {
    let query = if case_sensitive {
        term.to_string()
    } else {
        term.to_lowercase()
    };

    let mut matched = 0;
    let mut stack: Vec<&mut FileNode> = nodes.iter_mut().collect();
    while let Some(node) = stack.pop() {
        let hit = if case_sensitive {
            node.name.contains(&query)
        } else {
            node.name.to_lowercase().contains(&query)
        };
        node.in_result = hit && !query.is_empty();
        if node.in_result {
            matched += 1;
        }
        stack.extend(node.children.iter_mut());
    }

    tracing::debug!(term, matched, "annotated search matches");
    matched
}
