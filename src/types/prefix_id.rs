use crate::types::af::AddressFamily;

//------------ PrefixId ------------------------------------------------------

/// The (net, len) pair identifying a prefix inside a trie.
///
/// The net part is truncated to `len` bits at construction, so bits past
/// the mask never take part in comparisons: two textual prefixes that only
/// differ in their host bits collapse into the same PrefixId.
#[derive(Hash, Eq, PartialEq, Debug, Copy, Clone)]
pub struct PrefixId<AF: AddressFamily> {
    net: AF,
    len: u8,
}

impl<AF: AddressFamily> PrefixId<AF> {
    pub(crate) fn new(net: AF, len: u8) -> Self {
        PrefixId {
            net: net.truncate_to_len(len),
            len,
        }
    }

    pub(crate) fn net(&self) -> AF {
        self.net
    }

    pub(crate) fn len(&self) -> u8 {
        self.len
    }

    /// Whether `addr` falls inside this prefix, i.e. the top `len` bits of
    /// both are equal.
    pub(crate) fn contains(&self, addr: AF) -> bool {
        addr.truncate_to_len(self.len) == self.net
    }
}

// There is no reasonable way for this to panic: the net part was truncated
// to len at construction, which is exactly the well-formedness inetnum's
// Prefix demands.
#[allow(clippy::unwrap_used)]
impl<AF: AddressFamily> From<PrefixId<AF>> for inetnum::addr::Prefix {
    fn from(value: PrefixId<AF>) -> Self {
        Self::new(value.net().into_ipaddr(), value.len()).unwrap()
    }
}
