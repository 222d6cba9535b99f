//! Compiled-in register-value tables for the OV5640, transcribed from the
//! vendor configuration sets. Entry order is load-bearing: clock and reset
//! entries must take effect before the blocks they gate.

use super::regs::*;
use super::sccb::{RegTable, REGLIST_TAIL, REG_DLY};

/// Power-on defaults: clock tree, pad I/O, ISP enables, exposure/white
/// balance tuning, and a 2x2-subsampled VGA output window. Pushed by
/// `reset` while the core is powered down; streaming is re-enabled
/// afterwards.
pub const DEFAULT_REGS: &RegTable = &[
    (SYSTEM_CTRL0, 0x82), // software reset
    (REG_DLY, 10),
    (SYSTEM_CTRL0, 0x42), // power down while configuring
    // === CLOCK CONFIG (24 MHz XCLK) ===
    (SCCB_SYS_CTRL1, 0x03), // system clock from PLL
    (SC_PLL_CTRL0, 0x18),
    (SC_PLL_CTRL1, 0x11),
    (SC_PLL_CTRL2, 0x38),
    (SC_PLL_CTRL3, 0x13),
    (SYS_ROOT_DIVIDER, 0x01),
    // === IO DIRECTION ===
    (PAD_OUTPUT_ENABLE01, 0xFF),
    (PAD_OUTPUT_ENABLE02, 0xFF),
    (DRIVE_CAPABILITY, 0xC3),
    // === MCU / ISP SUB-BLOCK RESET AND CLOCK GATING ===
    (SYS_RESET00, 0x20), // hold MCU in reset
    (REG_DLY, 10),
    (SYS_RESET02, 0x1C),
    (SYS_CLOCK_ENABLE00, 0xFF),
    (SYS_CLOCK_ENABLE01, 0xF7), // all clocks except MIPI
    (SYS_CLOCK_ENABLE02, 0xC3),
    // === ISP CONTROL ===
    (ISP_CONTROL_00, 0xB3), // BPC, WPC, CIP
    (ISP_CONTROL_01, 0xA3), // scaling, color matrix, AWB
    (0x5002, 0x41),
    (0x5003, 0x08), // buffer enable
    (0x370C, 0x02),
    (0x3634, 0x40),
    // === AEC/AGC ===
    (0x3A02, 0x03),
    (0x3A03, 0xD8),
    (0x3A08, 0x01),
    (0x3A09, 0x27),
    (0x3A0A, 0x00),
    (0x3A0B, 0xF6),
    (0x3A0D, 0x04),
    (0x3A0E, 0x03),
    (0x3A0F, 0x30),
    (0x3A10, 0x28),
    (0x3A11, 0x60),
    (0x3A13, 0x43),
    (0x3A14, 0x03),
    (0x3A15, 0xD8),
    (0x3A18, 0x00), // gain ceiling
    (0x3A19, 0xF8),
    (0x3A1B, 0x30),
    (0x3A1E, 0x26),
    (0x3A1F, 0x14),
    (0x3600, 0x08), // VCM
    (0x3601, 0x33),
    (0x4001, 0x02), // BLC start line
    (0x4004, 0x02),
    // === AWB ===
    (0x5180, 0xFF),
    (0x5181, 0xF2),
    (0x5182, 0x00),
    (0x5183, 0x14),
    (0x5184, 0x25),
    (0x5185, 0x24),
    (0x5186, 0x09),
    (0x5187, 0x09),
    (0x5188, 0x09),
    (0x5189, 0x75),
    (0x518A, 0x54),
    (0x518B, 0xE0),
    (0x518C, 0xB2),
    (0x518D, 0x42),
    (0x518E, 0x3D),
    (0x518F, 0x56),
    (0x5190, 0x46),
    (0x5191, 0xF8),
    (0x5192, 0x04),
    (0x5193, 0x70),
    (0x5194, 0xF0),
    (0x5195, 0xF0),
    (0x5196, 0x03),
    (0x5197, 0x01),
    (0x5198, 0x04),
    (0x5199, 0x12),
    (0x519A, 0x04),
    (0x519B, 0x00),
    (0x519C, 0x06),
    (0x519D, 0x82),
    (0x519E, 0x38),
    // === CIP (sharpness, denoise) ===
    (0x5300, 0x10),
    (0x5301, 0x10),
    (0x5302, 0x18),
    (0x5303, 0x19),
    (0x5304, 0x10),
    (0x5305, 0x10),
    (0x5306, 0x08), // denoise
    (0x5307, 0x16),
    (0x5308, 0x40),
    (0x5309, 0x10),
    (0x530A, 0x10),
    (0x530B, 0x04),
    (0x530C, 0x06),
    // === COLOR MATRIX ===
    (0x5381, 0x1E),
    (0x5382, 0x5B),
    (0x5383, 0x08),
    (0x5384, 0x0A),
    (0x5385, 0x7E),
    (0x5386, 0x88),
    (0x5387, 0x7C),
    (0x5388, 0x6C),
    (0x5389, 0x10),
    (0x538A, 0x01),
    (0x538B, 0x98),
    // === GAMMA ===
    (0x5480, 0x01),
    (0x5481, 0x00),
    (0x5482, 0x1E),
    (0x5483, 0x3B),
    (0x5484, 0x58),
    (0x5485, 0x66),
    (0x5486, 0x71),
    (0x5487, 0x7D),
    (0x5488, 0x83),
    (0x5489, 0x8F),
    (0x548A, 0x98),
    (0x548B, 0xA6),
    (0x548C, 0xB8),
    (0x548D, 0xCA),
    (0x548E, 0xD7),
    (0x548F, 0xE3),
    (0x5490, 0x1D),
    // === TIMING (full 2624x1952 array, VGA output) ===
    (X_ADDR_ST_H, 0x00),
    (X_ADDR_ST_L, 0x00),
    (Y_ADDR_ST_H, 0x00),
    (Y_ADDR_ST_L, 0x00),
    (X_ADDR_END_H, 0x0A), // 2623
    (X_ADDR_END_L, 0x3F),
    (Y_ADDR_END_H, 0x07), // 1951
    (Y_ADDR_END_L, 0x9F),
    (TIMING_DVPHO, 0x02), // output width 640
    (0x3809, 0x80),
    (TIMING_DVPVO, 0x01), // output height 480
    (0x380B, 0xE0),
    (TIMING_HTS, 0x07), // total horizontal 1896
    (0x380D, 0x68),
    (TIMING_VTS, 0x03), // total vertical 984
    (0x380F, 0xD8),
    (X_OFFSET_H, 0x00), // ISP offset 16x4
    (X_OFFSET_L, 0x10),
    (Y_OFFSET_H, 0x00),
    (Y_OFFSET_L, 0x04),
    (X_INCREMENT, 0x31), // 2x subsample, both axes
    (Y_INCREMENT, 0x31),
    (TIMING_TC_REG20, 0x01), // vertical binning
    (TIMING_TC_REG21, 0x01), // horizontal binning
    (0x4514, 0xAA),
    // === FORMAT (RGB565) ===
    (FORMAT_CTRL, 0x01),
    (FORMAT_CTRL00, 0x61),
    // === DVP CONTROL ===
    (CLOCK_POL_CONTROL, 0x2C), // PCLK active high, gated under VSYNC/HREF
    (REG_DLY, 300),
    (REGLIST_TAIL, 0x00),
];

/// Auto-focus firmware upload: the MCU is held in reset, the firmware image
/// is programmed at its code base, the command interface is cleared, and
/// the MCU is released. The image bytes are an opaque vendor blob.
pub const AF_FIRMWARE: &RegTable = &[
    (SYS_RESET00, 0x20), // hold MCU in reset
    (AF_FW_BASE, 0x02),
    (0x8001, 0x0F),
    (0x8002, 0xD6),
    (0x8003, 0x02),
    (0x8004, 0x0A),
    (0x8005, 0x39),
    (0x8006, 0xC2),
    (0x8007, 0x01),
    (0x8008, 0x22),
    (0x8009, 0x22),
    (0x800A, 0x00),
    (0x800B, 0x02),
    (0x800C, 0x0F),
    (0x800D, 0xB2),
    (0x800E, 0xE5),
    (0x800F, 0x1F),
    (0x8010, 0x70),
    (0x8011, 0x72),
    (0x8012, 0xF5),
    (0x8013, 0x1E),
    (0x8014, 0xD2),
    (0x8015, 0x35),
    (0x8016, 0xFF),
    (0x8017, 0xEF),
    (0x8018, 0x25),
    (0x8019, 0xE0),
    (0x801A, 0x24),
    (0x801B, 0x4E),
    (0x801C, 0xF8),
    (0x801D, 0xE4),
    (0x801E, 0xF6),
    (0x801F, 0x08),
    (0x8020, 0xF6),
    (0x8021, 0x0F),
    (0x8022, 0xBF),
    (0x8023, 0x34),
    (0x8024, 0xF2),
    (0x8025, 0x90),
    (0x8026, 0x0E),
    (0x8027, 0x93),
    (0x8028, 0xE4),
    (0x8029, 0x93),
    (0x802A, 0xFF),
    (0x802B, 0xE5),
    (0x802C, 0x4B),
    (0x802D, 0xC3),
    (0x802E, 0x9F),
    (0x802F, 0x50),
    (0x8030, 0x04),
    (0x8031, 0x7F),
    (0x8032, 0x05),
    (0x8033, 0x80),
    (0x8034, 0x02),
    (0x8035, 0x7F),
    (0x8036, 0xFB),
    (0x8037, 0x78),
    (0x8038, 0xBB),
    (0x8039, 0xE6),
    (0x803A, 0x75),
    (0x803B, 0xF0),
    // command interface, cleared before the MCU starts
    (AF_CMD_MAIN, 0x00),
    (AF_CMD_ACK, 0x00),
    (AF_CMD_PARA0, 0x00),
    (AF_CMD_PARA1, 0x00),
    (AF_CMD_PARA2, 0x00),
    (AF_CMD_PARA3, 0x00),
    (AF_CMD_PARA4, 0x00),
    (AF_FW_STATUS, 0x7F), // firmware reports startup state here
    (SYS_RESET00, 0x00), // release MCU
    (REGLIST_TAIL, 0x00),
];

/// RGB565 output: ISP RGB path, 16-bit RGB565 with BGR byte order on the
/// DVP port.
pub const FMT_RGB565: &RegTable = &[
    (FORMAT_CTRL, 0x01),
    (FORMAT_CTRL00, 0x61),
    (REGLIST_TAIL, 0x00),
];

/// Luma-only output: ISP YUV path, Y8 on the DVP port. Shared by the
/// YUV422 and grayscale selections.
pub const FMT_GRAYSCALE: &RegTable = &[
    (FORMAT_CTRL, 0x00),
    (FORMAT_CTRL00, 0x10),
    (REGLIST_TAIL, 0x00),
];

/// Appearance-correction values for register 0x4514, one per
/// binning/mirror/flip combination. Indexed by the flag word
/// `{binning: 4, hmirror: 2, vflip: 1}`. Determined empirically by the
/// vendor.
pub const ENHANCEMENT_LUT: [u8; 8] = [
    0x88, // normal
    0x88, // v-flip
    0xBB, // h-mirror
    0xBB, // v-flip + h-mirror
    0xAA, // binning
    0xBB, // binning + v-flip
    0xBB, // binning + h-mirror
    0xAA, // binning + v-flip + h-mirror
];
