use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// [`TextScroller`](crate::TextScroller) never returns these; they come from building
/// requests and credentials, and from the faults [`LedMatrix`](crate::LedMatrix) absorbs.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A string did not fit the bounded text buffer.
    #[display("Text exceeds {max} bytes")]
    TextTooLong { max: usize },

    /// A build-time credential did not fit its fixed-capacity field.
    #[display("{field} exceeds {max} bytes")]
    CredentialTooLong { field: &'static str, max: usize },

    /// The LED writer returned an error while pushing a frame.
    #[display("LED writer rejected a frame")]
    PixelWrite,
}
