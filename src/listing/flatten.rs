use super::node::FileNode;

/// Files visible in the listing, before any column sort.
#[derive(Debug, Default)]
pub struct Listing<'a> {
    pub files: Vec<&'a FileNode>,
    /// Browse mode: number of top-level entries. Search mode: number of
    /// nodes flagged as search matches.
    pub match_count: usize,
    pub has_results: bool,
}

/// Build the visible file list for a folder's top-level `nodes`.
///
/// Browse mode passes `nodes` through. Search mode walks the whole tree in
/// depth-first pre-order and keeps every visited node, so ancestors of a
/// match stay visible; only `in_result` nodes are counted.
pub fn get_files(nodes: Option<&[FileNode]>, search_active: bool) -> Listing<'_> {
    let nodes = nodes.unwrap_or_default();

    if !search_active {
        return Listing {
            files: nodes.iter().collect(),
            match_count: nodes.len(),
            has_results: !nodes.is_empty(),
        };
    }

    let mut listing = Listing::default();
    let mut stack: Vec<&FileNode> = nodes.iter().rev().collect();
    while let Some(node) = stack.pop() {
        listing.files.push(node);
        if node.in_result {
            listing.match_count += 1;
            listing.has_results = true;
        }
        stack.extend(node.children.iter().rev());
    }
    listing
}
