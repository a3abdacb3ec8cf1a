#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]

//! A library that provides an in-memory Routing Information Base (RIB):
//! a table of IPv4 and IPv6 prefixes that answers longest-prefix-match
//! queries, the lookup a forwarding engine performs on every packet.
//!
//! Each address family is backed by a binary trie, a tree in which every
//! edge represents one bit of an address, most-significant bit first, so
//! that a prefix of length `n` terminates at depth `n`. Nodes live in an
//! index-addressed arena; removals prune the now-unused tail of a path and
//! return the released slots for reuse, keeping the live node count bounded
//! by exactly the prefixes currently in the table plus their branching
//! ancestors.
//!
//! A [rib::Rib] holds one trie per family behind a single reader/writer
//! lock: inserts and removals serialize through the write half, while any
//! number of lookups share the read half. The tries are purely in-memory
//! and are rebuilt from scratch on process start.
mod bit_trie;
mod types;

// re-exports
pub use inetnum::addr;

/// The RIB over both address families, and the router-level collection
pub mod rib;

/// Error types returned by a RIB
pub use types::errors;

/// Statistics and counter snapshot types returned by methods on a RIB
pub use types::stats;

/// Trait that defines the two address families, IPv4 and IPv6
pub use types::af::AddressFamily;

/// The underlying value (u32) and trait impl for IPv4.
pub use types::af::IPv4;
/// The underlying value (u128) and trait impl for IPv6.
pub use types::af::IPv6;
