//! Field edits supplied from the command line or a TOML file.
//!
//! ```toml
//! [edits]
//! "Vendor name" = "48554157454920202020202020202020"
//! "0x24" = "00"
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::error::SessionError;
use crate::session::EditSession;

#[derive(Debug, Error)]
pub enum EditsError {
    /// The edits file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The edits file is not a valid `[edits]` table.
    #[error("invalid edits file: {0}")]
    Toml(#[from] toml::de::Error),
    /// A command-line assignment without `=` or without a selector.
    #[error("expected SELECTOR=HEX, got {0:?}")]
    Assignment(String),
    /// Two keys of the `[edits]` table name the same field.
    #[error("edits {first:?} and {second:?} both select field {field:?}")]
    DuplicateField {
        field: String,
        first: String,
        second: String,
    },
    /// A selector did not resolve in the session's layout.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Field edits: an `[edits]` table plus command-line assignments.
///
/// Table keys are unordered, so two of them may not select the same field.
/// Assignments are staged after the table in the order given, each one
/// overwriting whatever an earlier entry set for its field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditsFile {
    #[serde(default)]
    pub edits: BTreeMap<String, String>,
    #[serde(skip)]
    assignments: Vec<(String, String)>,
}

impl EditsFile {
    pub fn from_toml_str(text: &str) -> Result<Self, EditsError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, EditsError> {
        let text = fs::read_to_string(path).map_err(|source| EditsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Appends `SELECTOR=HEX` assignments.
    pub fn extend_assignments<'a>(
        &mut self,
        assignments: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), EditsError> {
        for raw in assignments {
            self.assignments.push(parse_assignment(raw)?);
        }
        Ok(())
    }

    pub fn assignments(&self) -> &[(String, String)] {
        &self.assignments
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty() && self.assignments.is_empty()
    }

    /// Stages every edit on `session`. Returns the number of distinct
    /// fields set.
    ///
    /// Selectors are resolved against the session's layout first, so
    /// nothing is staged if any of them is unknown or the table has two
    /// keys for one field.
    pub fn apply(&self, session: &mut EditSession) -> Result<usize, EditsError> {
        let mut by_field: BTreeMap<usize, &str> = BTreeMap::new();
        let mut table = Vec::with_capacity(self.edits.len());
        for (selector, value) in &self.edits {
            let index = session.field_index(selector)?;
            if let Some(first) = by_field.insert(index, selector.as_str()) {
                return Err(EditsError::DuplicateField {
                    field: session.fields()[index].descriptor.name.to_string(),
                    first: first.to_string(),
                    second: selector.clone(),
                });
            }
            table.push((index, value));
        }
        let mut ordered = Vec::with_capacity(self.assignments.len());
        for (selector, value) in &self.assignments {
            ordered.push((session.field_index(selector)?, value));
        }

        let mut touched = BTreeSet::new();
        for (index, value) in table.into_iter().chain(ordered) {
            session.set_value_at(index, value.as_str())?;
            touched.insert(index);
        }
        Ok(touched.len())
    }
}

/// Splits `SELECTOR=HEX` at the last `=`, so names may contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String), EditsError> {
    match raw.rsplit_once('=') {
        Some((selector, value)) if !selector.trim().is_empty() => {
            Ok((selector.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(EditsError::Assignment(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use crate::layout::AddressSpace;
    use crate::session::SessionState;
    use sfp_base64::EnvelopeFormat;
    use sfp_buffers::HexBuffer;

    #[test]
    fn parses_toml_table() {
        let file = EditsFile::from_toml_str(
            r#"
[edits]
"Vendor OUI" = "00 11 22"
"0x24" = "01"
"#,
        )
        .unwrap();
        assert_eq!(file.edits.len(), 2);
        assert_eq!(file.edits["0x24"], "01");
    }

    #[test]
    fn empty_document_is_no_edits() {
        assert!(EditsFile::from_toml_str("").unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_tables() {
        assert!(matches!(
            EditsFile::from_toml_str("[fields]\na = \"00\"\n"),
            Err(EditsError::Toml(_))
        ));
    }

    #[test]
    fn assignment_matrix() {
        assert_eq!(
            parse_assignment("Vendor PN = 4D41").unwrap(),
            ("Vendor PN".to_string(), "4D41".to_string())
        );
        assert_eq!(
            parse_assignment("36=").unwrap(),
            ("36".to_string(), String::new())
        );
        assert!(parse_assignment("4D41").is_err());
        assert!(parse_assignment("=4D41").is_err());
    }

    fn session() -> EditSession {
        let buffer = HexBuffer::from_bytes(&[0u8; 128]).unwrap();
        EditSession::load(AddressSpace::Primary, buffer, EnvelopeFormat::default())
    }

    #[test]
    fn command_line_overrides_file() {
        let mut file = EditsFile::from_toml_str("[edits]\nIdentifier = \"03\"\n").unwrap();
        file.extend_assignments(["0x00=0B"]).unwrap();
        let mut s = session();
        assert_eq!(file.apply(&mut s).unwrap(), 1);
        assert_eq!(s.field("Identifier").unwrap().value, "0B");
    }

    #[test]
    fn later_assignment_wins_across_aliases() {
        let mut file = EditsFile::default();
        file.extend_assignments(["Identifier=0B", "0=03", "36=01", "0x24=02"])
            .unwrap();
        let mut s = session();
        assert_eq!(file.apply(&mut s).unwrap(), 2);
        s.commit().unwrap();
        assert_eq!(s.buffer().read(0, 1).unwrap(), "03");
        assert_eq!(s.buffer().read(36, 1).unwrap(), "02");
    }

    #[test]
    fn table_aliases_are_rejected() {
        let file =
            EditsFile::from_toml_str("[edits]\nIdentifier = \"0B\"\n\"0\" = \"03\"\n").unwrap();
        let mut s = session();
        match file.apply(&mut s) {
            Err(EditsError::DuplicateField { field, first, second }) => {
                assert_eq!(field, "Identifier");
                assert_eq!((first.as_str(), second.as_str()), ("0", "Identifier"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(s.state(), SessionState::Loaded);
    }

    #[test]
    fn unknown_selector_stages_nothing() {
        let mut file = EditsFile::default();
        file.extend_assignments(["Identifier=0B", "Bogus=00"]).unwrap();
        let mut s = session();
        assert!(matches!(
            file.apply(&mut s),
            Err(EditsError::Session(SessionError::Layout(LayoutError::UnknownField(_))))
        ));
        assert_eq!(s.field("Identifier").unwrap().value, "00");
    }
}
