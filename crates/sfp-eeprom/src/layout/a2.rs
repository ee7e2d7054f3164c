//! Diagnostic address space (A2h): thresholds, calibration, live
//! diagnostics and the GPON vendor extension area.

use super::FieldDescriptor as F;

pub(super) const FIELDS: &[F] = &[
    // Alarm and warning thresholds
    F::new(0, 2, "Temp High Alarm", "Value expressed in two's complement", "0x5F 0x00 (95 C)"),
    F::new(2, 2, "Temp Low Alarm", "Value expressed in two's complement", "0xCE 0x00 (-50 C)"),
    F::new(4, 2, "Temp High Warning", "Value expressed in two's complement", "0x5A 0x00 (90 C)"),
    F::new(6, 2, "Temp Low Warning", "Value expressed in two's complement", "0xD3 0x00 (-45 C)"),
    F::new(8, 2, "Voltage High Alarm", "Value expressed in volt subunits", "0x8C 0xA0 (3.6V)"),
    F::new(10, 2, "Voltage Low Alarm", "Value expressed in volt subunits", "0x75 0x30 (3.0V)"),
    F::new(12, 2, "Voltage High Warning", "Value expressed in volt subunits", "0x88 0xB8 (3.5V)"),
    F::new(14, 2, "Voltage Low Warning", "Value expressed in volt subunits", "0x79 0x18 (3.1V)"),
    F::new(16, 2, "Bias High Alarm", "Value expressed in milliampere subunits", "0xAF 0xC8 (90mA)"),
    F::new(18, 2, "Bias Low Alarm", "Value expressed in milliampere subunits", "0x00 0x00 (0mA)"),
    F::new(20, 2, "Bias High Warning", "Value expressed in milliampere subunits", "0x88 0xB8 (70mA)"),
    F::new(22, 2, "Bias Low Warning", "Value expressed in milliampere subunits", "0x00 0x00 (0mA)"),
    F::new(24, 2, "TX Power High Alarm", "Value expressed in watts subunits", "0x9B 0x82 (6dBm)"),
    F::new(26, 2, "TX Power Low Alarm", "Value expressed in watts subunits", "0x22 0xD0 (-1dBm)"),
    F::new(28, 2, "TX Power High Warning", "Value expressed in watts subunits", "0x7B 0x86 (5dBm)"),
    F::new(30, 2, "TX Power Low Warning", "Value expressed in watts subunits", "0x2B 0xD4 (0dBm)"),
    F::new(32, 2, "RX Power High Alarm", "Value expressed in watts subunits", "0x09 0xCF (-6dBm)"),
    F::new(34, 2, "RX Power Low Alarm", "Value expressed in watts subunits", "0x00 0x0D (-29dBm)"),
    F::new(36, 2, "RX Power High Warning", "Value expressed in watts subunits", "0x07 0xCB (-7dBm)"),
    F::new(38, 2, "RX Power Low Warning", "Value expressed in watts subunits", "0x00 0x10 (-28dBm)"),
    F::new(40, 6, "MAC address", "MAC address of the SFP, may be empty", "Unique in each SFP"),
    // External calibration constants
    F::new(56, 4, "RX_PWR(4) Calibration", "4th order RSSI calibration coefficient", "0x00 0x00 0x00 0x00"),
    F::new(60, 4, "RX_PWR(3) Calibration", "3rd order RSSI calibration coefficient", "0x00 0x00 0x00 0x00"),
    F::new(64, 4, "RX_PWR(2) Calibration", "2nd order RSSI calibration coefficient", "0x00 0x00 0x00 0x00"),
    F::new(68, 4, "RX_PWR(1) Calibration", "1st order RSSI calibration coefficient", "0x3F 0x80 0x00 0x00"),
    F::new(72, 4, "RX_PWR(0) Calibration", "0th order RSSI calibration coefficient", "0x00 0x00 0x00 0x00"),
    F::new(76, 2, "TX_I(Slope) Calibration", "Slope for Bias calibration", "0x01 0x00"),
    F::new(78, 2, "TX_I(Offset) Calibration", "Offset for Bias calibration", "0x00 0x00"),
    F::new(80, 2, "TX_PWR(Slope) Calibration", "Slope for TX Power calibration", "0x01 0x00"),
    F::new(82, 2, "TX_PWR(Offset) Calibration", "Offset for TX Power calibration", "0x00 0x00"),
    F::new(84, 2, "T(Slope) Calibration", "Slope for Temperature calibration", "0x01 0x00"),
    F::new(86, 2, "T(Offset) Calibration", "Offset for Temperature calibration, in units of 256ths C", "0x00 0x00"),
    F::new(88, 2, "V(Slope) Calibration", "Slope for VCC calibration", "0x01 0x00"),
    F::new(90, 2, "V(Offset) Calibration", "Offset for VCC calibration", "0x00 0x00"),
    F::new(95, 1, "CC_DMI", "Check code for Base Diagnostic Fields (addresses 0 to 94)", ""),
    // Real-time diagnostics
    F::new(96, 1, "Temperature MSB", "Internally measured module temperature", ""),
    F::new(97, 1, "Temperature LSB", "", ""),
    F::new(98, 1, "Vcc MSB", "Internally measured supply voltage in transceiver", ""),
    F::new(99, 1, "Vcc LSB", "", ""),
    F::new(100, 1, "TX Bias MSB", "Internally measured TX Bias Current", ""),
    F::new(101, 1, "TX Bias LSB", "", ""),
    F::new(102, 1, "TX Power MSB", "Measured TX output power", ""),
    F::new(103, 1, "TX Power LSB", "", ""),
    F::new(104, 1, "RX Power MSB", "Measured RX input power", ""),
    F::new(105, 1, "RX Power LSB", "", ""),
    F::new(106, 4, "Optional Diagnostics", "Monitor data for optional laser temperature and TEC current", "0xFF 0xFF 0xFF 0xFF (No support)"),
    F::new(110, 1, "Status/Control", "Optional status and control bits", "0x00 (No support)"),
    F::new(112, 2, "Alarm Flags", "Diagnostic alarm flag status bits", "Supported"),
    F::new(114, 1, "Tx Input EQ control", "Tx input equalization level control", "0xFF (No support)"),
    F::new(115, 1, "RX Input EQ control", "RX input equalizer settings", "0xFF (No support)"),
    F::new(116, 2, "Warning Flags", "Diagnostic warning flag status bits", "Supported"),
    F::new(118, 2, "Ext Status/Control", "Extended module control and status bytes", "0x00 0x00 (No support)"),
    F::new(120, 7, "Vendor Specific", "Vendor specific memory addresses", "0x70 0x00 0x00 0x00 0x00 0x00 0x00"),
    F::new(127, 1, "Table Select", "Optional page select", "0x00"),
    // GPON vendor extension
    F::new(191, 24, "GPON LOID or PLOAM", "GPON logical ONU ID or PLOAM password, depending on the LOID/PLOAM switch", "Depends on the configuration of the SFP"),
    F::new(215, 17, "GPON LPWD", "GPON logical password", "Depends on the configuration of the SFP"),
    F::new(232, 1, "GPON LOID/PLOAM switch", "0x01 to enable LOID, 0x02 to enable PLOAM", "Depends on the configuration of the SFP"),
    F::new(233, 8, "GPON SN", "GPON serial number (ME 256)", "Unique in each SFP"),
    F::new(248, 8, "Vendor Control", "Vendor specific control functions", "0xFF 0xFF 0xFF... (Not used)"),
    F::new(256, 256, "Unknown vendor specific", "Probably not used in current SFPs", "Probably not used in current SFPs"),
    F::new(512, 20, "GPON Equipment ID", "GPON equipment ID (ME 257)", "May not work with some firmwares"),
    F::new(532, 4, "GPON Vendor ID", "GPON vendor ID (ME 256 and more)", "May not work with some firmwares"),
];
