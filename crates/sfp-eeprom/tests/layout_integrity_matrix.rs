//! Integrity checks over the static A0/A2 field tables.

use sfp_eeprom::{checksum::rules_for, fields_for, fields_for_selector, AddressSpace, LayoutError};

#[test]
fn field_ranges_are_disjoint() {
    for space in AddressSpace::ALL {
        let fields = fields_for(space);
        for (i, a) in fields.iter().enumerate() {
            for b in &fields[i + 1..] {
                assert!(
                    !a.overlaps(b),
                    "{space}: {:?} overlaps {:?}",
                    a.label(),
                    b.label()
                );
            }
        }
    }
}

#[test]
fn fields_are_non_empty_and_ascending() {
    for space in AddressSpace::ALL {
        let fields = fields_for(space);
        assert!(!fields.is_empty());
        for field in fields {
            assert!(field.length >= 1, "{space}: {} has zero length", field.name);
            assert!(!field.name.is_empty());
        }
        for pair in fields.windows(2) {
            assert!(pair[0].offset < pair[1].offset, "{space}: table out of order");
        }
    }
}

#[test]
fn check_code_targets_are_documented_one_byte_fields() {
    for space in AddressSpace::ALL {
        for rule in rules_for(space) {
            let field = fields_for(space)
                .iter()
                .find(|f| f.offset == rule.target)
                .unwrap_or_else(|| panic!("{space}: no field at check code {}", rule.target));
            assert_eq!(field.length, 1);
            assert!(field.name.starts_with("CC_"), "{space}: {}", field.name);
            assert!(rule.end <= rule.target || rule.start > rule.target);
        }
    }
}

#[test]
fn table_sizes() {
    assert_eq!(fields_for(AddressSpace::Primary).len(), 31);
    assert_eq!(fields_for(AddressSpace::Diagnostic).len(), 62);
    let a0_end = fields_for(AddressSpace::Primary).iter().map(|f| f.end()).max();
    assert_eq!(a0_end, Some(128));
    let a2_end = fields_for(AddressSpace::Diagnostic).iter().map(|f| f.end()).max();
    assert_eq!(a2_end, Some(536));
}

#[test]
fn selector_lookup_matrix() {
    assert_eq!(
        fields_for_selector("A0").unwrap(),
        fields_for(AddressSpace::Primary)
    );
    assert_eq!(
        fields_for_selector("a2").unwrap(),
        fields_for(AddressSpace::Diagnostic)
    );
    assert_eq!(
        fields_for_selector("A1"),
        Err(LayoutError::UnsupportedAddressSpace("A1".to_string()))
    );
}
