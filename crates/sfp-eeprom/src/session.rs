//! Edit session: decoded buffer, field values, commit.
//!
//! A session starts `Loaded` with every field read from the buffer. Setting a
//! value moves it to `Editing`; the buffer itself is only replaced by a
//! successful [`EditSession::commit`], which validates every field first and
//! writes nothing if any of them is invalid.

use serde::Serialize;
use sfp_base64::{decode_envelope, encode_envelope, EnvelopeFormat, BEGIN_MARKER, DELIMITER};
use sfp_buffers::{validate_hex, HexBuffer, HexBufferError};
use tracing::{debug, info, warn};

use crate::checksum;
use crate::error::{LayoutError, SessionError};
use crate::layout::{find_field, AddressSpace, FieldDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Loaded,
    Editing,
}

/// A field paired with its current hex text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValue {
    pub descriptor: &'static FieldDescriptor,
    pub value: String,
    /// `false` when the field lies outside the loaded buffer.
    pub available: bool,
}

impl FieldValue {
    pub fn label(&self) -> String {
        self.descriptor.label()
    }

    /// Maximum input length in hex characters.
    pub fn max_len(&self) -> usize {
        self.descriptor.hex_len()
    }
}

/// Result of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitReport {
    /// The re-encoded envelope text.
    pub envelope: String,
    /// Whether the buffer differs from the one before the commit.
    pub changed: bool,
}

#[derive(Debug, Clone)]
pub struct EditSession {
    space: AddressSpace,
    buffer: HexBuffer,
    format: EnvelopeFormat,
    fields: Vec<FieldValue>,
    state: SessionState,
}

impl EditSession {
    /// Decodes an exported envelope and detects its address space.
    pub fn open(text: &str) -> Result<Self, SessionError> {
        if !text.contains(BEGIN_MARKER) || !text.contains(DELIMITER) {
            return Err(SessionError::MissingMarker);
        }
        let decoded = decode_envelope(text)?;
        let space = AddressSpace::detect(text)?;
        let buffer = HexBuffer::parse(&decoded.hex)?;
        debug!(%space, bytes = buffer.byte_len(), "opened envelope");
        Ok(Self::load(space, buffer, decoded.format))
    }

    /// Starts a session over an already decoded buffer.
    pub fn load(space: AddressSpace, buffer: HexBuffer, format: EnvelopeFormat) -> Self {
        let fields = read_fields(space, &buffer);
        Self {
            space,
            buffer,
            format,
            fields,
            state: SessionState::Loaded,
        }
    }

    pub fn space(&self) -> AddressSpace {
        self.space
    }

    pub fn buffer(&self) -> &HexBuffer {
        &self.buffer
    }

    pub fn format(&self) -> &EnvelopeFormat {
        &self.format
    }

    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Looks a field up by offset or name (see [`find_field`]).
    pub fn field(&self, selector: &str) -> Result<&FieldValue, SessionError> {
        let index = self.field_index(selector)?;
        Ok(&self.fields[index])
    }

    /// Replaces the text of one field. Nothing is validated until commit.
    pub fn set_value(&mut self, selector: &str, value: impl Into<String>) -> Result<(), SessionError> {
        let index = self.field_index(selector)?;
        self.set_value_at(index, value)
    }

    /// Same as [`set_value`](Self::set_value) with a position in
    /// [`fields`](Self::fields).
    pub fn set_value_at(&mut self, index: usize, value: impl Into<String>) -> Result<(), SessionError> {
        let field = self
            .fields
            .get_mut(index)
            .ok_or_else(|| LayoutError::UnknownField(format!("#{index}")))?;
        field.value = value.into();
        self.state = SessionState::Editing;
        Ok(())
    }

    /// Drops pending edits and re-reads every field from the buffer.
    pub fn discard_edits(&mut self) {
        self.fields = read_fields(self.space, &self.buffer);
        self.state = SessionState::Loaded;
    }

    /// Switches the layout. Field values are rebuilt from the buffer; pending
    /// edits are lost.
    pub fn switch_space(&mut self, space: AddressSpace) {
        self.space = space;
        self.discard_edits();
    }

    /// Validates and writes every field, recomputes the check codes and
    /// re-encodes the envelope.
    ///
    /// Fields are checked in declaration order, including ones the buffer is
    /// too short to hold: those load empty and fail with `SizeMismatch`
    /// unless given a value, which then fails with `OutOfRange` on write.
    /// On any error the buffer and field values are left as they were.
    pub fn commit(&mut self) -> Result<CommitReport, SessionError> {
        let mut normalized = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let value = normalize(&field.value);
            if let Err(source) = validate_value(field.descriptor, &value) {
                warn!(field = field.descriptor.name, %source, "rejected field value");
                return Err(SessionError::Validation {
                    field: field.descriptor.name.to_string(),
                    source,
                });
            }
            normalized.push((field.descriptor, value));
        }

        let mut next = self.buffer.clone();
        for (descriptor, value) in &normalized {
            next = next
                .write(descriptor.offset, descriptor.length, value)
                .map_err(|source| SessionError::Validation {
                    field: descriptor.name.to_string(),
                    source,
                })?;
        }
        let next = checksum::recalculate(&next, self.space)?;
        let envelope = encode_envelope(next.as_str(), &self.format)?;

        let changed = next != self.buffer;
        self.buffer = next;
        self.discard_edits();
        info!(space = %self.space, changed, "committed field edits");
        Ok(CommitReport { envelope, changed })
    }

    /// Re-encodes the current buffer without touching any field.
    pub fn encode(&self) -> Result<String, SessionError> {
        Ok(encode_envelope(self.buffer.as_str(), &self.format)?)
    }

    /// Position of the field named by `selector` in [`fields`](Self::fields).
    pub fn field_index(&self, selector: &str) -> Result<usize, SessionError> {
        Ok(find_field(self.space.fields(), selector)?)
    }
}

fn read_fields(space: AddressSpace, buffer: &HexBuffer) -> Vec<FieldValue> {
    space
        .fields()
        .iter()
        .map(|descriptor| match buffer.read(descriptor.offset, descriptor.length) {
            Ok(value) => FieldValue {
                descriptor,
                value: value.to_string(),
                available: true,
            },
            Err(err) => {
                warn!(field = descriptor.name, %err, "field not readable from buffer");
                FieldValue {
                    descriptor,
                    value: String::new(),
                    available: false,
                }
            }
        })
        .collect()
}

fn normalize(value: &str) -> String {
    value.trim().to_ascii_uppercase()
}

fn validate_value(descriptor: &FieldDescriptor, value: &str) -> Result<(), HexBufferError> {
    if value.len() != descriptor.hex_len() {
        return Err(HexBufferError::SizeMismatch {
            expected: descriptor.hex_len(),
            actual: value.len(),
        });
    }
    validate_hex(value)
}

/// Session result as reported to a user interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SessionOutcome {
    Success { envelope: String, changed: bool },
    ValidationError { field: String, reason: String },
    DecodeError { reason: String },
    EncodeError { reason: String },
    UnknownAddressSpace,
}

impl SessionOutcome {
    /// Maps a failed [`EditSession::open`].
    pub fn from_open_error(err: &SessionError) -> Self {
        match err {
            SessionError::Layout(LayoutError::UnknownAddressSpace) => Self::UnknownAddressSpace,
            SessionError::Validation { field, source } => Self::ValidationError {
                field: field.clone(),
                reason: source.to_string(),
            },
            other => Self::DecodeError {
                reason: other.to_string(),
            },
        }
    }

    /// Maps the result of [`EditSession::commit`].
    pub fn from_commit(result: Result<CommitReport, SessionError>) -> Self {
        match result {
            Ok(CommitReport { envelope, changed }) => Self::Success { envelope, changed },
            Err(SessionError::Validation { field, source }) => Self::ValidationError {
                field,
                reason: source.to_string(),
            },
            Err(SessionError::Layout(LayoutError::UnknownAddressSpace)) => Self::UnknownAddressSpace,
            Err(other) => Self::EncodeError {
                reason: other.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
