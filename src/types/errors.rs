use std::fmt;

/// Possible errors returned by methods on a RIB. All of these errors are
/// recoverable: the call has not touched the table.
#[derive(Debug, PartialEq, Eq)]
pub enum RibError {
    /// A per-family method was handed an address or prefix of the other
    /// family. Dispatch the call to the matching family and retry, or use
    /// the family-agnostic methods, which route on the argument itself.
    FamilyMismatch,
}

impl std::error::Error for RibError {}

impl fmt::Display for RibError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RibError::FamilyMismatch => {
                write!(
                    f,
                    "Error: The address family of the argument does not \
                    match the requested table."
                )
            }
        }
    }
}
