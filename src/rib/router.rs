use super::table::Rib;

//------------ Router --------------------------------------------------------

/// A flat collection of independent RIBs, the way a router holds one table
/// per VRF or logical instance.
///
/// The RIBs share no state: each carries its own lock and its own counters,
/// and nothing here coordinates across them.
#[derive(Default)]
pub struct Router {
    ribs: Vec<Rib>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand a RIB over to this router.
    pub fn add_rib(&mut self, rib: Rib) {
        self.ribs.push(rib);
    }

    /// The number of tables this router holds.
    pub fn len(&self) -> usize {
        self.ribs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ribs.is_empty()
    }

    /// The table at `index`, if it exists.
    pub fn rib(&self, index: usize) -> Option<&Rib> {
        self.ribs.get(index)
    }

    /// Iterate over the tables.
    pub fn iter(&self) -> std::slice::Iter<'_, Rib> {
        self.ribs.iter()
    }
}
