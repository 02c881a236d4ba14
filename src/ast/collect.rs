use rustc_hash::FxHashSet;

use super::{NodeRef, Sort};

/// Collect every node reachable from `root`, depth first, pre-order.
///
/// With `filter` set only nodes of that sort are returned; `None` collects
/// all nodes. A node already visited is never visited again.
pub fn collect_nodes<'a>(root: NodeRef<'a>, filter: Option<Sort>) -> Vec<NodeRef<'a>> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if !seen.insert(node.identity()) {
            continue;
        }
        if filter.is_none_or(|sort| sort == node.sort()) {
            out.push(node);
        }
        stack.extend(node.children().into_iter().rev());
    }
    out
}
