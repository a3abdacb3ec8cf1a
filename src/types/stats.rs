//------------ Types for Statistics -----------------------------------------

use std::fmt::{Debug, Display};

use serde_derive::Serialize;

//------------ Counters ------------------------------------------------------
//
// The live bookkeeping of one trie. It sits inside the tree it describes,
// behind the RIB's lock: mutation only ever happens with the write half
// held, so plain integers suffice. One Counters per trie, never shared
// between RIB instances.

#[derive(Clone, Debug)]
pub(crate) struct Counters {
    // number of live nodes in the trie, the root excluded.
    nodes: usize,
    // number of live prefixes per mask length, indexed by length.
    prefixes: Vec<usize>,
}

impl Counters {
    pub(crate) fn new(max_len: u8) -> Self {
        Self {
            nodes: 0,
            prefixes: vec![0; max_len as usize + 1],
        }
    }

    pub(crate) fn nodes_count(&self) -> usize {
        self.nodes
    }

    pub(crate) fn inc_nodes_count(&mut self) {
        self.nodes += 1;
    }

    pub(crate) fn dec_nodes_count(&mut self) {
        self.nodes = self.nodes.saturating_sub(1);
    }

    pub(crate) fn prefixes_count(&self) -> usize {
        self.prefixes.iter().sum()
    }

    pub(crate) fn inc_prefixes_count(&mut self, len: u8) {
        if let Some(p) = self.prefixes.get_mut(len as usize) {
            *p += 1;
        }
    }

    pub(crate) fn dec_prefixes_count(&mut self, len: u8) {
        if let Some(p) = self.prefixes.get_mut(len as usize) {
            *p = p.saturating_sub(1);
        }
    }

    pub(crate) fn prefix_stats(&self) -> Vec<LenCount> {
        self.prefixes
            .iter()
            .enumerate()
            .filter_map(|(len, count)| {
                if *count != 0 {
                    Some(LenCount {
                        len: len as u8,
                        count: *count,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

//------------ LenCount ------------------------------------------------------

/// The number of live prefixes at one mask length.
#[derive(Copy, Clone, Eq, PartialEq, Serialize)]
pub struct LenCount {
    pub len: u8,
    pub count: usize,
}

impl Debug for LenCount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!("/{}: {}", &self.len, &self.count))
    }
}

//------------ AfStats -------------------------------------------------------

/// A snapshot of one address family's tree: the number of live prefixes,
/// the number of live trie nodes backing them, and the distribution of the
/// prefixes over the mask lengths (lengths with no prefixes are omitted).
#[derive(Clone, Debug, Serialize)]
pub struct AfStats {
    pub prefixes_count: usize,
    pub nodes_count: usize,
    pub prefixes_per_len: Vec<LenCount>,
}

impl Display for AfStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} prefixes", self.prefixes_count)?;
        writeln!(f, "{} nodes", self.nodes_count)?;
        write!(f, "{:?}", self.prefixes_per_len)
    }
}

//------------ RibStats ------------------------------------------------------

/// A point-in-time snapshot of both trees of a RIB, taken with the shared
/// lock held in read mode. Used by external reporting tools; not required
/// for correctness.
#[derive(Clone, Debug, Serialize)]
pub struct RibStats {
    pub v4: AfStats,
    pub v6: AfStats,
}

impl Display for RibStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "ipv4:")?;
        writeln!(f, "{}", self.v4)?;
        writeln!(f, "ipv6:")?;
        write!(f, "{}", self.v6)
    }
}
