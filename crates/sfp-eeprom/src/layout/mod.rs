//! Static field layouts for the two SFP address spaces.
//!
//! Both tables are plain `const` data: ordered, non-overlapping byte ranges
//! with documentation strings. Order is display order.

mod a0;
mod a2;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::LayoutError;

/// One of the two EEPROM address spaces of an SFP module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddressSpace {
    /// A0h, serial ID data (`sfp_a0_low_128`).
    Primary,
    /// A2h, diagnostics and vendor extensions (`sfp_a2_info`).
    Diagnostic,
}

impl AddressSpace {
    pub const ALL: [AddressSpace; 2] = [AddressSpace::Primary, AddressSpace::Diagnostic];

    /// Short selector, `"A0"` or `"A2"`.
    pub fn selector(self) -> &'static str {
        match self {
            AddressSpace::Primary => "A0",
            AddressSpace::Diagnostic => "A2",
        }
    }

    /// Token that identifies this space inside an exported envelope.
    pub fn marker(self) -> &'static str {
        match self {
            AddressSpace::Primary => "sfp_a0_low_128",
            AddressSpace::Diagnostic => "sfp_a2_info",
        }
    }

    /// Picks the address space from the marker token in `text`. The Primary
    /// marker wins when both are present.
    ///
    /// ```
    /// use sfp_eeprom::AddressSpace;
    ///
    /// let space = AddressSpace::detect("begin-base64 644 sfp_a2_info @QUJD@").unwrap();
    /// assert_eq!(space, AddressSpace::Diagnostic);
    /// ```
    pub fn detect(text: &str) -> Result<Self, LayoutError> {
        Self::ALL
            .into_iter()
            .find(|space| text.contains(space.marker()))
            .ok_or(LayoutError::UnknownAddressSpace)
    }

    /// The field table of this address space.
    pub fn fields(self) -> &'static [FieldDescriptor] {
        fields_for(self)
    }
}

impl FromStr for AddressSpace {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|space| space.selector().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LayoutError::UnsupportedAddressSpace(trimmed.to_string()))
    }
}

impl fmt::Display for AddressSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// A named, fixed-offset byte range inside an address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// First byte address.
    pub offset: usize,
    /// Length in bytes, at least 1.
    pub length: usize,
    pub name: &'static str,
    pub description: &'static str,
    /// Typical value, for display only. Never enforced.
    pub default_hint: &'static str,
}

impl FieldDescriptor {
    pub const fn new(
        offset: usize,
        length: usize,
        name: &'static str,
        description: &'static str,
        default_hint: &'static str,
    ) -> Self {
        Self {
            offset,
            length,
            name,
            description,
            default_hint,
        }
    }

    /// One past the last byte.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Number of hex characters a value for this field must have.
    pub fn hex_len(&self) -> usize {
        self.length * 2
    }

    /// `"start-last (size) - name"`, e.g. `"20-35 (16) - Vendor name"`.
    pub fn label(&self) -> String {
        format!(
            "{}-{} ({}) - {}",
            self.offset,
            self.end() - 1,
            self.length,
            self.name
        )
    }

    pub fn overlaps(&self, other: &FieldDescriptor) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }
}

/// Ordered field table for `space`.
pub fn fields_for(space: AddressSpace) -> &'static [FieldDescriptor] {
    match space {
        AddressSpace::Primary => a0::FIELDS,
        AddressSpace::Diagnostic => a2::FIELDS,
    }
}

/// Ordered field table for a textual selector (`"A0"`, `"a2"`, ...).
pub fn fields_for_selector(selector: &str) -> Result<&'static [FieldDescriptor], LayoutError> {
    selector.parse::<AddressSpace>().map(fields_for)
}

/// Resolves a field selector to an index into `fields`.
///
/// A decimal or `0x`-prefixed number selects the field starting at that byte
/// offset. Anything else is matched against field names, ignoring case, and
/// must match exactly one field.
pub fn find_field(fields: &[FieldDescriptor], selector: &str) -> Result<usize, LayoutError> {
    let selector = selector.trim();
    if let Some(offset) = parse_offset(selector) {
        return fields
            .iter()
            .position(|field| field.offset == offset)
            .ok_or_else(|| LayoutError::UnknownField(selector.to_string()));
    }

    let mut matches = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.name.eq_ignore_ascii_case(selector))
        .map(|(index, _)| index);
    match (matches.next(), matches.next()) {
        (Some(index), None) => Ok(index),
        (Some(_), Some(_)) => Err(LayoutError::AmbiguousField(selector.to_string())),
        (None, _) => Err(LayoutError::UnknownField(selector.to_string())),
    }
}

fn parse_offset(selector: &str) -> Option<usize> {
    if let Some(digits) = selector
        .strip_prefix("0x")
        .or_else(|| selector.strip_prefix("0X"))
    {
        return usize::from_str_radix(digits, 16).ok();
    }
    if !selector.is_empty() && selector.bytes().all(|b| b.is_ascii_digit()) {
        return selector.parse().ok();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_parsing() {
        assert_eq!("a0".parse::<AddressSpace>().unwrap(), AddressSpace::Primary);
        assert_eq!(" A2 ".parse::<AddressSpace>().unwrap(), AddressSpace::Diagnostic);
        assert_eq!(
            "A4".parse::<AddressSpace>(),
            Err(LayoutError::UnsupportedAddressSpace("A4".to_string()))
        );
        assert!(fields_for_selector("B0").is_err());
    }

    #[test]
    fn detect_matrix() {
        assert_eq!(
            AddressSpace::detect("begin-base64 644 sfp_a0_low_128\n@"),
            Ok(AddressSpace::Primary)
        );
        assert_eq!(
            AddressSpace::detect("begin-base64 644 sfp_a2_info @"),
            Ok(AddressSpace::Diagnostic)
        );
        assert_eq!(
            AddressSpace::detect("begin-base64 644 other @"),
            Err(LayoutError::UnknownAddressSpace)
        );
    }

    #[test]
    fn labels() {
        let vendor = fields_for(AddressSpace::Primary)
            .iter()
            .find(|f| f.name == "Vendor name")
            .unwrap();
        assert_eq!(vendor.label(), "20-35 (16) - Vendor name");
        assert_eq!(vendor.hex_len(), 32);
    }

    #[test]
    fn find_by_offset_and_name() {
        let fields = fields_for(AddressSpace::Primary);
        assert_eq!(fields[find_field(fields, "36").unwrap()].offset, 36);
        assert_eq!(fields[find_field(fields, "0x24").unwrap()].offset, 36);
        assert_eq!(fields[find_field(fields, "vendor pn").unwrap()].offset, 40);
        assert_eq!(
            find_field(fields, "Transceiver"),
            Err(LayoutError::AmbiguousField("Transceiver".to_string()))
        );
        assert_eq!(
            find_field(fields, "35"),
            Err(LayoutError::UnknownField("35".to_string()))
        );
        assert_eq!(
            find_field(fields, "Bogus"),
            Err(LayoutError::UnknownField("Bogus".to_string()))
        );
    }
}
