use crate::error::{Result, RouteError};
use crate::graph::{Graph, NodeIndex};
use crate::string_normalization::clean_str;
use rustc_hash::FxHashMap;

/// Normalized name to every node carrying that name.
pub type NameLookup = FxHashMap<String, Vec<NodeIndex>>;

pub fn build_name_lookup(graph: &Graph) -> NameLookup {
    let mut lookup: NameLookup =
        FxHashMap::with_capacity_and_hasher(graph.node_count(), Default::default());

    for (node, point) in graph.points().iter().enumerate() {
        lookup.entry(clean_str(point.name())).or_default().push(node);
    }

    lookup
}

/// Resolves user input to a node, ignoring case, accents and extra spaces.
///
/// When several names fold to the same key, a case-insensitive exact match
/// wins; otherwise the first node in input order is returned.
pub fn find_node_id(name: &str, lookup: &NameLookup, graph: &Graph) -> Result<NodeIndex> {
    let not_found = || RouteError::UnknownNode {
        name: name.to_string(),
    };

    let candidates = lookup.get(&clean_str(name)).ok_or_else(not_found)?;

    match candidates.as_slice() {
        [] => Err(not_found()),
        [only] => Ok(*only),
        [first, ..] => {
            let lowercase_query = name.trim().to_lowercase();
            Ok(candidates
                .iter()
                .copied()
                .find(|&node| graph.name(node).to_lowercase() == lowercase_query)
                .unwrap_or(*first))
        }
    }
}

/// One-shot variant of [`find_node_id`] that builds the lookup on the fly.
pub fn find_node_by_name(graph: &Graph, name: &str) -> Result<NodeIndex> {
    find_node_id(name, &build_name_lookup(graph), graph)
}

/// All node names, sorted for display in a selection list.
pub fn sorted_names(graph: &Graph) -> Vec<&str> {
    let mut names: Vec<&str> = graph.points().iter().map(|p| p.name()).collect();
    names.sort_unstable();
    names
}
