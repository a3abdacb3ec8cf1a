mod node;

use log::trace;

use crate::types::stats::{AfStats, Counters};
use crate::types::{AddressFamily, PrefixId};

pub(crate) use node::{NodeId, TrieNode};

//------------ BitTrie -------------------------------------------------------

/// A binary trie over the addresses of one family.
///
/// Every edge represents one bit of an address, most-significant first, so
/// a prefix of length `len` terminates at depth `len`. Nodes live in an
/// arena and name each other by index; pruning returns released slots to a
/// free list for reuse. The root occupies the first slot and is never
/// released.
///
/// The trie is single-writer by construction: every mutating method takes
/// `&mut self`, and the RIB above serializes the callers through its lock.
pub(crate) struct BitTrie<AF: AddressFamily> {
    nodes: Vec<TrieNode<AF>>,
    free: Vec<NodeId>,
    counters: Counters,
}

impl<AF: AddressFamily> BitTrie<AF> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(None)],
            free: vec![],
            counters: Counters::new(AF::BITS),
        }
    }

    /// Insert a prefix, creating the path to it as needed. Returns whether
    /// the prefix was genuinely new; re-inserting over an occupied node
    /// replaces the occupant without touching the counters.
    pub(crate) fn insert(&mut self, pfx: PrefixId<AF>) -> bool {
        let mut cursor = NodeId::ROOT;
        for bit in pfx.net().bit_path().take(pfx.len() as usize) {
            cursor = match self.node(cursor).child(bit) {
                Some(child) => child,
                None => self.alloc_node(cursor, bit),
            };
        }

        // Node creation and prefix attachment are separate steps: the node
        // the walk ends on may predate this insert, created as an interior
        // node on some longer prefix's path, and then carries nothing yet.
        let node = self.node_mut(cursor);
        let is_new = node.prefix.is_none();
        node.prefix = Some(pfx);
        if is_new {
            self.counters.inc_prefixes_count(pfx.len());
        }
        trace!("inserted {:?}, new attachment: {}", pfx, is_new);
        is_new
    }

    /// Remove the exact prefix, if it is present. Removing an absent prefix
    /// leaves the trie untouched, so removals can be retried or replayed
    /// freely.
    pub(crate) fn remove(&mut self, pfx: PrefixId<AF>) -> bool {
        let mut cursor = NodeId::ROOT;
        for bit in pfx.net().bit_path().take(pfx.len() as usize) {
            match self.node(cursor).child(bit) {
                Some(child) => cursor = child,
                None => {
                    // The path stops short of the requested depth: the
                    // exact node for this prefix never existed.
                    trace!("remove {:?}: no such path", pfx);
                    return false;
                }
            }
        }

        // Only detach a prefix that is actually attached here. A path of
        // the right length may exist solely because longer prefixes run
        // through it.
        if self.node_mut(cursor).prefix.take().is_none() {
            trace!("remove {:?}: path exists, nothing attached", pfx);
            return false;
        }
        self.counters.dec_prefixes_count(pfx.len());
        self.prune(cursor);
        true
    }

    /// Longest-prefix match: the most specific prefix containing `addr`.
    ///
    /// Candidates are recorded at every node along the walk, not only at
    /// the deepest one: prefixes of different lengths can lie on the same
    /// path, and the last candidate recorded is the most specific. The walk
    /// ends at the first missing child.
    pub(crate) fn match_longest(&self, addr: AF) -> Option<PrefixId<AF>> {
        let mut best: Option<PrefixId<AF>> = None;
        let mut cursor = NodeId::ROOT;
        for bit in addr.bit_path() {
            if let Some(pfx) = self.node(cursor).prefix {
                best = Some(pfx);
            }
            match self.node(cursor).child(bit) {
                Some(child) => cursor = child,
                None => break,
            }
        }
        // When every bit was consumed the walk ends on a node whose prefix
        // has not been recorded yet (a host route).
        if let Some(pfx) = self.node(cursor).prefix {
            best = Some(pfx);
        }
        // The bit-by-bit walk already guarantees containment; the check
        // guards the boundary against any representational inconsistency.
        best.filter(|pfx| pfx.contains(addr))
    }

    pub(crate) fn prefixes_count(&self) -> usize {
        self.counters.prefixes_count()
    }

    pub(crate) fn nodes_count(&self) -> usize {
        self.counters.nodes_count()
    }

    pub(crate) fn stats(&self) -> AfStats {
        AfStats {
            prefixes_count: self.counters.prefixes_count(),
            nodes_count: self.counters.nodes_count(),
            prefixes_per_len: self.counters.prefix_stats(),
        }
    }

    /// Walk from `cursor` toward the root, releasing nodes that carry no
    /// prefix and have no children. Stops at the first live node, whose
    /// ancestors cannot be released either, or at the root.
    fn prune(&mut self, mut cursor: NodeId) {
        while let Some(parent) = self.node(cursor).parent {
            let node = self.node(cursor);
            if node.prefix.is_some() || node.has_children() {
                break;
            }
            if let Some(bit) = self.node(parent).slot_of(cursor) {
                self.node_mut(parent).set_child(bit, None);
            }
            trace!("pruned empty node {:?}", cursor);
            self.release_node(cursor);
            cursor = parent;
        }
    }

    fn alloc_node(&mut self, parent: NodeId, bit: u8) -> NodeId {
        let id = match self.free.pop() {
            Some(id) => {
                *self.node_mut(id) = TrieNode::new(Some(parent));
                id
            }
            None => {
                let id = NodeId::new(self.nodes.len());
                self.nodes.push(TrieNode::new(Some(parent)));
                id
            }
        };
        self.node_mut(parent).set_child(bit, Some(id));
        self.counters.inc_nodes_count();
        id
    }

    fn release_node(&mut self, id: NodeId) {
        *self.node_mut(id) = TrieNode::new(None);
        self.free.push(id);
        self.counters.dec_nodes_count();
    }

    // Ids are only ever produced by alloc_node and the ROOT constant, and
    // released slots are reused before the arena grows, so an id is always
    // in bounds.
    #[allow(clippy::indexing_slicing)]
    fn node(&self, id: NodeId) -> &TrieNode<AF> {
        &self.nodes[id.as_usize()]
    }

    #[allow(clippy::indexing_slicing)]
    fn node_mut(&mut self, id: NodeId) -> &mut TrieNode<AF> {
        &mut self.nodes[id.as_usize()]
    }
}
