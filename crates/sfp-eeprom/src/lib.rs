//! Field-level editor for SFP EEPROM images.
//!
//! Ties the hex buffer ([`sfp_buffers`]) and the envelope codec
//! ([`sfp_base64`]) to the static A0/A2 field layouts and the check-code
//! rules:
//!
//! ```text
//! envelope text -> decode -> (hex buffer, format) -> field values
//!   -> edit -> commit: validate, write, recalculate check codes -> encode
//! ```
//!
//! # Example
//!
//! ```
//! use sfp_eeprom::{AddressSpace, EditSession};
//!
//! let text = "begin-base64 644 sfp_a2_info @QUJD@Q==\n";
//! let session = EditSession::open(text).unwrap();
//! assert_eq!(session.space(), AddressSpace::Diagnostic);
//! assert_eq!(session.buffer().as_str(), "414243");
//! assert_eq!(session.encode().unwrap(), text);
//! ```

pub mod checksum;
pub mod edits;
mod error;
pub mod layout;
pub mod session;

pub use checksum::{checksum8, recalculate, verify, ChecksumReport, ChecksumRule};
pub use edits::{parse_assignment, EditsError, EditsFile};
pub use error::{LayoutError, SessionError};
pub use layout::{fields_for, fields_for_selector, find_field, AddressSpace, FieldDescriptor};
pub use session::{CommitReport, EditSession, FieldValue, SessionOutcome, SessionState};
