//! Modulo-256 check codes.
//!
//! Each address space has fixed rules: a byte range and the offset its sum is
//! stored at. The rules do not come from the field tables; the table entry
//! for a check code only documents it.

use serde::Serialize;
use sfp_buffers::{HexBuffer, HexBufferError};

use crate::layout::AddressSpace;

/// Sum of `[start, end)` stored as one byte at `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecksumRule {
    pub start: usize,
    pub end: usize,
    pub target: usize,
}

impl ChecksumRule {
    const fn new(start: usize, end: usize, target: usize) -> Self {
        Self { start, end, target }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

const PRIMARY_RULES: &[ChecksumRule] = &[
    // CC_BASE
    ChecksumRule::new(0, 63, 63),
    // CC_EXT
    ChecksumRule::new(64, 95, 95),
];

const DIAGNOSTIC_RULES: &[ChecksumRule] = &[
    // CC_DMI
    ChecksumRule::new(0, 95, 95),
];

pub fn rules_for(space: AddressSpace) -> &'static [ChecksumRule] {
    match space {
        AddressSpace::Primary => PRIMARY_RULES,
        AddressSpace::Diagnostic => DIAGNOSTIC_RULES,
    }
}

/// `sum(bytes) mod 256`; 0 for an empty slice.
///
/// ```
/// use sfp_eeprom::checksum8;
///
/// assert_eq!(checksum8(&[]), 0);
/// assert_eq!(checksum8(&[0xff, 0x02]), 0x01);
/// ```
pub fn checksum8(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

/// Returns a copy of `buffer` with every check code of `space` rewritten.
/// Rules are applied in order, each one reading the buffer left by the
/// previous one.
pub fn recalculate(buffer: &HexBuffer, space: AddressSpace) -> Result<HexBuffer, HexBufferError> {
    let mut next = buffer.clone();
    for rule in rules_for(space) {
        let sum = checksum8(&next.bytes(rule.start, rule.len())?);
        next = next.write_byte(rule.target, sum)?;
    }
    Ok(next)
}

/// Stored vs. computed value of one check code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecksumReport {
    pub rule: ChecksumRule,
    pub stored: u8,
    pub computed: u8,
}

impl ChecksumReport {
    pub fn is_valid(&self) -> bool {
        self.stored == self.computed
    }
}

/// Checks every rule of `space` against `buffer` without changing it.
pub fn verify(buffer: &HexBuffer, space: AddressSpace) -> Result<Vec<ChecksumReport>, HexBufferError> {
    rules_for(space)
        .iter()
        .map(|rule| {
            let computed = checksum8(&buffer.bytes(rule.start, rule.len())?);
            let stored = buffer.bytes(rule.target, 1)?[0];
            Ok(ChecksumReport {
                rule: *rule,
                stored,
                computed,
            })
        })
        .collect()
}
