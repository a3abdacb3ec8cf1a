use inetnum::addr::Prefix;
use parking_lot::RwLock;

use crate::bit_trie::BitTrie;
use crate::types::errors::RibError;
use crate::types::stats::RibStats;
use crate::types::PrefixId;
use crate::{AddressFamily, IPv4, IPv6};

//------------ Tables --------------------------------------------------------

// Both families' trees, held together so that one lock guards them both.
// The trees never share nodes; only the lock is common.
struct Tables {
    v4: BitTrie<IPv4>,
    v6: BitTrie<IPv6>,
}

//------------ Rib -----------------------------------------------------------

/// A RIB that stores IPv4 and IPv6 prefixes and answers longest-prefix-
/// match queries over them.
///
/// Every operation is synchronous and runs in time bounded by the address
/// width, regardless of the table size. Inserts and removals take the write
/// half of the shared lock; lookups and the statistics snapshot take the
/// read half, so any number of lookups can run concurrently.
///
/// The methods without a family suffix dispatch on the family of their
/// argument and cannot be misdirected. The `_v4`/`_v6` variants address one
/// table explicitly and return [RibError::FamilyMismatch] for an argument
/// of the other family, rather than silently ignoring it.
pub struct Rib {
    tables: RwLock<Tables>,
}

impl Rib {
    /// Create an empty RIB: a root node per family and nothing else.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                v4: BitTrie::new(),
                v6: BitTrie::new(),
            }),
        }
    }

    /// Insert a prefix into the table of its own family. Always succeeds;
    /// re-inserting a prefix that is already present leaves the counters
    /// alone.
    pub fn insert(&self, prefix: &Prefix) {
        match prefix.addr() {
            std::net::IpAddr::V4(addr) => {
                self.tables.write().v4.insert(PrefixId::<IPv4>::new(
                    <IPv4 as AddressFamily>::from_ipaddr(addr),
                    prefix.len(),
                ));
            }
            std::net::IpAddr::V6(addr) => {
                self.tables.write().v6.insert(PrefixId::<IPv6>::new(
                    <IPv6 as AddressFamily>::from_ipaddr(addr),
                    prefix.len(),
                ));
            }
        }
    }

    /// Remove a prefix from the table of its own family, and prune the
    /// path that carried it. Removing a prefix that is not present is a
    /// no-op.
    pub fn remove(&self, prefix: &Prefix) {
        match prefix.addr() {
            std::net::IpAddr::V4(addr) => {
                self.tables.write().v4.remove(PrefixId::<IPv4>::new(
                    <IPv4 as AddressFamily>::from_ipaddr(addr),
                    prefix.len(),
                ));
            }
            std::net::IpAddr::V6(addr) => {
                self.tables.write().v6.remove(PrefixId::<IPv6>::new(
                    <IPv6 as AddressFamily>::from_ipaddr(addr),
                    prefix.len(),
                ));
            }
        }
    }

    /// Look up the most specific prefix containing `addr`, if any.
    pub fn longest_match(&self, addr: std::net::IpAddr) -> Option<Prefix> {
        let tables = self.tables.read();
        match addr {
            std::net::IpAddr::V4(addr) => tables
                .v4
                .match_longest(<IPv4 as AddressFamily>::from_ipaddr(addr))
                .map(Prefix::from),
            std::net::IpAddr::V6(addr) => tables
                .v6
                .match_longest(<IPv6 as AddressFamily>::from_ipaddr(addr))
                .map(Prefix::from),
        }
    }

    /// Insert into the IPv4 table only.
    pub fn insert_v4(&self, prefix: &Prefix) -> Result<(), RibError> {
        match prefix.addr() {
            std::net::IpAddr::V4(addr) => {
                self.tables.write().v4.insert(PrefixId::<IPv4>::new(
                    <IPv4 as AddressFamily>::from_ipaddr(addr),
                    prefix.len(),
                ));
                Ok(())
            }
            std::net::IpAddr::V6(_) => Err(RibError::FamilyMismatch),
        }
    }

    /// Insert into the IPv6 table only.
    pub fn insert_v6(&self, prefix: &Prefix) -> Result<(), RibError> {
        match prefix.addr() {
            std::net::IpAddr::V6(addr) => {
                self.tables.write().v6.insert(PrefixId::<IPv6>::new(
                    <IPv6 as AddressFamily>::from_ipaddr(addr),
                    prefix.len(),
                ));
                Ok(())
            }
            std::net::IpAddr::V4(_) => Err(RibError::FamilyMismatch),
        }
    }

    /// Remove from the IPv4 table only.
    pub fn remove_v4(&self, prefix: &Prefix) -> Result<(), RibError> {
        match prefix.addr() {
            std::net::IpAddr::V4(addr) => {
                self.tables.write().v4.remove(PrefixId::<IPv4>::new(
                    <IPv4 as AddressFamily>::from_ipaddr(addr),
                    prefix.len(),
                ));
                Ok(())
            }
            std::net::IpAddr::V6(_) => Err(RibError::FamilyMismatch),
        }
    }

    /// Remove from the IPv6 table only.
    pub fn remove_v6(&self, prefix: &Prefix) -> Result<(), RibError> {
        match prefix.addr() {
            std::net::IpAddr::V6(addr) => {
                self.tables.write().v6.remove(PrefixId::<IPv6>::new(
                    <IPv6 as AddressFamily>::from_ipaddr(addr),
                    prefix.len(),
                ));
                Ok(())
            }
            std::net::IpAddr::V4(_) => Err(RibError::FamilyMismatch),
        }
    }

    /// Look up in the IPv4 table only.
    pub fn longest_match_v4(
        &self,
        addr: std::net::IpAddr,
    ) -> Result<Option<Prefix>, RibError> {
        match addr {
            std::net::IpAddr::V4(addr) => Ok(self
                .tables
                .read()
                .v4
                .match_longest(<IPv4 as AddressFamily>::from_ipaddr(addr))
                .map(Prefix::from)),
            std::net::IpAddr::V6(_) => Err(RibError::FamilyMismatch),
        }
    }

    /// Look up in the IPv6 table only.
    pub fn longest_match_v6(
        &self,
        addr: std::net::IpAddr,
    ) -> Result<Option<Prefix>, RibError> {
        match addr {
            std::net::IpAddr::V6(addr) => Ok(self
                .tables
                .read()
                .v6
                .match_longest(<IPv6 as AddressFamily>::from_ipaddr(addr))
                .map(Prefix::from)),
            std::net::IpAddr::V4(_) => Err(RibError::FamilyMismatch),
        }
    }

    /// A point-in-time snapshot of both tables.
    pub fn stats(&self) -> RibStats {
        let tables = self.tables.read();
        RibStats {
            v4: tables.v4.stats(),
            v6: tables.v6.stats(),
        }
    }

    /// The number of live prefixes over both families.
    pub fn prefixes_count(&self) -> usize {
        let tables = self.tables.read();
        tables.v4.prefixes_count() + tables.v6.prefixes_count()
    }

    /// The number of live trie nodes over both families.
    pub fn nodes_count(&self) -> usize {
        let tables = self.tables.read();
        tables.v4.nodes_count() + tables.v6.nodes_count()
    }
}

impl Default for Rib {
    fn default() -> Self {
        Self::new()
    }
}
