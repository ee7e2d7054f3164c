use sfp_base64::EnvelopeError;
use sfp_buffers::HexBufferError;
use thiserror::Error;

/// Error type for address-space and field lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// An address-space name other than `A0` or `A2`.
    #[error("unsupported address space {0:?} (expected A0 or A2)")]
    UnsupportedAddressSpace(String),
    /// The envelope text carries neither address-space marker.
    #[error("unknown address space (no sfp_a0_low_128 or sfp_a2_info marker)")]
    UnknownAddressSpace,
    /// No field has this name or starts at this offset.
    #[error("no field matches {0:?}")]
    UnknownField(String),
    /// The name is shared by several fields of the layout.
    #[error("{0:?} matches more than one field, select it by offset")]
    AmbiguousField(String),
}

/// Error type for opening, editing and committing a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The input has no `begin-base64` marker or no `@` delimiter.
    #[error("input is missing the 'begin-base64' marker or '@' delimiter")]
    MissingMarker,
    /// A field value failed validation or could not be written.
    #[error("invalid value for field {field}: {source}")]
    Validation {
        field: String,
        #[source]
        source: HexBufferError,
    },
    /// The envelope could not be decoded or re-encoded.
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
    /// Address-space detection or a field selector failed.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// The buffer itself is malformed or too short for a check code.
    #[error(transparent)]
    Buffer(#[from] HexBufferError),
}
