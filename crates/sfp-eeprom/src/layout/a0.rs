//! Primary address space (A0h): SFF-8472 base and extended ID fields.

use super::FieldDescriptor as F;

pub(super) const FIELDS: &[F] = &[
    // Base ID fields
    F::new(0, 1, "Identifier", "Type of transceiver", "0x03 (SFP)"),
    F::new(1, 1, "Ext identifier", "Additional information about the transceiver", "0x04 (MOD_DEF 4)"),
    F::new(2, 1, "Connector", "Type of media connector", "0x01 (SC)"),
    F::new(3, 8, "Transceiver", "Code for optical compatibility", "0x00 0x00 0x00 0x00 0x00 0x00 0x00 0x00"),
    F::new(11, 1, "Encoding", "High speed serial encoding algorithm", "0x03 (NRZ)"),
    F::new(12, 1, "Signaling Rate, Nominal", "Nominal signaling rate", "0x0C (1.244Gbps)"),
    F::new(13, 1, "Rate Identifier", "Type of rate select functionality", "0x00 (Not used)"),
    F::new(14, 1, "Length (SMF,km)", "Link length supported for single-mode fiber, units of km", "0x14 (20 km)"),
    F::new(15, 1, "Length (SMF)", "Link length supported for single-mode fiber, units of 100 m", "0xC8 (200 x 100m)"),
    F::new(16, 1, "Length (50 um, OM2)", "Link length supported for 50 um OM2 fiber, units of 10 m", "0x00 (No support)"),
    F::new(17, 1, "Length (62.5 um, OM1)", "Link length supported for 62.5 um OM1 fiber, units of 10 m", "0x00 (No support)"),
    F::new(18, 1, "Length copper cable", "Link length supported for copper or direct attach cable, units of m", "0x00 (No support)"),
    F::new(19, 1, "Length (50 um, OM3)", "Link length supported for 50 um OM3 fiber, units of 10 m", "0x00 (No support)"),
    F::new(20, 16, "Vendor name", "SFP vendor name (ASCII)", "0x48 0x55 0x41 0x57 0x45 0x49 0x20 0x20 0x20 0x20 0x20 0x20 0x20 0x20 0x20 0x20 (HUAWEI)"),
    F::new(36, 1, "Transceiver", "Code for optical compatibility", "0x00 (No support)"),
    F::new(37, 3, "Vendor OUI", "SFP vendor IEEE company ID", "0x00 0x00 0x00 (Not specified)"),
    F::new(40, 16, "Vendor PN", "Part number provided by SFP vendor (ASCII)", "0x4D 0x41 0x35 0x36 0x37 0x31 0x41 0x20 0x20 0x20 0x20 0x20 0x20 0x20 0x20 0x20 (MA5671A)"),
    F::new(56, 4, "Vendor rev", "Revision level for part number provided by vendor (ASCII)", "0x30 0x30 0x30 0x30 (0000)"),
    F::new(60, 2, "Wavelength", "Laser wavelength", "0x05 0x1E (1310nm TX)"),
    F::new(62, 1, "Fibre Channel Speed 2", "Transceiver's Fibre Channel speed capabilities", "0x00 (No support)"),
    F::new(63, 1, "CC_BASE", "Check code for Base ID Fields (addresses 0 to 62)", ""),
    // Extended ID fields
    F::new(64, 2, "Options", "Indicates which optional transceiver signals are implemented", "0x00 0x1A (TX DISABLE, TX FAULT, RX LOS)"),
    F::new(66, 1, "Signaling Rate, max", "Upper signaling rate margin, units of %", "0x00 (Not specified)"),
    F::new(67, 1, "Signaling Rate, min", "Lower signaling rate margin, units of %", "0x00 (Not specified)"),
    F::new(68, 16, "Vendor SN", "Serial number provided by vendor (ASCII)", "Unique in each SFP"),
    F::new(84, 8, "Date code", "Vendor's manufacturing date code", "Unique in each SFP"),
    F::new(92, 1, "Diagnostic Monitoring Type", "Indicates which type of diagnostic monitoring is implemented", "0x68 (Digital diagnostic, Internally calibrated, Received average power type)"),
    F::new(93, 1, "Enhanced Options", "Indicates which optional enhanced features are implemented", "0xE0 (Alarm/warning flags, soft TX_DISABLE control, soft TX_FAULT monitoring)"),
    F::new(94, 1, "SFF-8472 Compliance", "Indicates which revision of SFF-8472 the transceiver complies with", "0x03 (Rev 10.2 of SFF-8472)"),
    F::new(95, 1, "CC_EXT", "Check code for the Extended ID Fields (addresses 64 to 94)", ""),
    // Vendor specific
    F::new(96, 32, "Vendor data", "Vendor specific data (ASCII)", "Possibly unique per module"),
];
