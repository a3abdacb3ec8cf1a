mod router;
mod table;

pub use router::Router;
pub use table::Rib;
