//! OV5640 register definitions.

/* system control registers */
pub const SYS_RESET00: u16 = 0x3000; // Bit[5]: Reset MCU
pub const SYS_RESET02: u16 = 0x3002; // Per-block ISP reset
pub const SYS_CLOCK_ENABLE00: u16 = 0x3004; // Peripheral clock gates
pub const SYS_CLOCK_ENABLE01: u16 = 0x3005;
pub const SYS_CLOCK_ENABLE02: u16 = 0x3006; // ISP clock gates

pub const SYSTEM_CTRL0: u16 = 0x3008; // Bit[7]: Software reset
                                      // Bit[6]: Software power down

pub const CHIP_ID: u16 = 0x300A; // 16-bit chip ID, reads 0x5640

pub const PAD_OUTPUT_ENABLE01: u16 = 0x3017; // io direction
pub const PAD_OUTPUT_ENABLE02: u16 = 0x3018;

pub const DRIVE_CAPABILITY: u16 = 0x302C; // Bit[7:6]:
                                          //          00: 1x
                                          //          01: 2x
                                          //          10: 3x
                                          //          11: 4x

pub const SC_PLL_CTRL0: u16 = 0x3034; // Bit[3:0]: MIPI bit mode
pub const SC_PLL_CTRL1: u16 = 0x3035; // Bit[7:4]: System clock divider
pub const SC_PLL_CTRL2: u16 = 0x3036; // Bit[7:0]: PLL multiplier
pub const SC_PLL_CTRL3: u16 = 0x3037; // Bit[4]: PLL root divider
                                      // Bit[3:0]: PLL pre-divider

pub const SCCB_SYS_CTRL1: u16 = 0x3103; // Bit[1]: System clock from PLL
pub const SYS_ROOT_DIVIDER: u16 = 0x3108; // Pclk root divider

/* auto-focus MCU command interface */
pub const AF_CMD_MAIN: u16 = 0x3022;
pub const AF_CMD_ACK: u16 = 0x3023;
pub const AF_CMD_PARA0: u16 = 0x3024;
pub const AF_CMD_PARA1: u16 = 0x3025;
pub const AF_CMD_PARA2: u16 = 0x3026;
pub const AF_CMD_PARA3: u16 = 0x3027;
pub const AF_CMD_PARA4: u16 = 0x3028;
pub const AF_FW_STATUS: u16 = 0x3029;
pub const AF_FW_BASE: u16 = 0x8000; // MCU program memory

/* exposure/gain control */
pub const AEC_PK_MANUAL: u16 = 0x3503; // Bit[1]: AGC manual
                                       // Bit[0]: AEC manual

/* timing control registers */
pub const X_ADDR_ST_H: u16 = 0x3800; // Bit[3:0]: X address start[11:8]
pub const X_ADDR_ST_L: u16 = 0x3801; // Bit[7:0]: X address start[7:0]
pub const Y_ADDR_ST_H: u16 = 0x3802; // Bit[2:0]: Y address start[10:8]
pub const Y_ADDR_ST_L: u16 = 0x3803; // Bit[7:0]: Y address start[7:0]
pub const X_ADDR_END_H: u16 = 0x3804; // Bit[3:0]: X address end[11:8]
pub const X_ADDR_END_L: u16 = 0x3805;
pub const Y_ADDR_END_H: u16 = 0x3806; // Bit[2:0]: Y address end[10:8]
pub const Y_ADDR_END_L: u16 = 0x3807;

// Size after scaling
pub const TIMING_DVPHO: u16 = 0x3808; // Bit[3:0]: DVP output width[11:8], low byte follows
pub const TIMING_DVPVO: u16 = 0x380A; // Bit[2:0]: DVP output height[10:8], low byte follows
pub const TIMING_HTS: u16 = 0x380C; // Total horizontal size[12:8], low byte follows
pub const TIMING_VTS: u16 = 0x380E; // Total vertical size[15:8], low byte follows

pub const X_OFFSET_H: u16 = 0x3810; // Bit[3:0]: ISP horizontal offset[11:8]
pub const X_OFFSET_L: u16 = 0x3811;
pub const Y_OFFSET_H: u16 = 0x3812; // Bit[2:0]: ISP vertical offset[10:8]
pub const Y_OFFSET_L: u16 = 0x3813;

pub const X_INCREMENT: u16 = 0x3814; // Bit[7:4]: Horizontal odd subsample increment
                                     // Bit[3:0]: Horizontal even subsample increment
pub const Y_INCREMENT: u16 = 0x3815; // Bit[7:4]: Vertical odd subsample increment
                                     // Bit[3:0]: Vertical even subsample increment

/* mirror and flip registers */
pub const TIMING_TC_REG20: u16 = 0x3820; // Bit[2:1]: Vertical flip enable
                                         //         00: Normal
                                         //         11: Vertical flip
                                         // Bit[0]: Vertical binning enable
pub const TIMING_TC_REG21: u16 = 0x3821; // Bit[5]: Compression enable
                                         // Bit[2:1]: Horizontal mirror enable
                                         //         00: Normal
                                         //         11: Horizontal mirror
                                         // Bit[0]: Horizontal binning enable

/* format control registers */
pub const FORMAT_CTRL00: u16 = 0x4300; // Output format and byte order

pub const CLOCK_POL_CONTROL: u16 = 0x4740; // Bit[5]: PCLK polarity 0: active low
                                           //          1: active high
                                           // Bit[3]: Gate PCLK under VSYNC
                                           // Bit[2]: Gate PCLK under HREF
                                           // Bit[1]: HREF polarity
                                           // Bit[0]: VSYNC polarity

/* ISP top control registers */
pub const ISP_CONTROL_00: u16 = 0x5000; // Bit[7]: LENC correction enable
                                        // Bit[2]: Black pixel cancellation
                                        // Bit[1]: White pixel cancellation
                                        // Bit[0]: Color interpolation enable
pub const ISP_CONTROL_01: u16 = 0x5001; // Bit[5]: Scale enable
                                        // Bit[1]: Color matrix enable
                                        // Bit[0]: AWB enable

/* output format select */
pub const FORMAT_CTRL: u16 = 0x501F; // Format select
                                     // Bit[2:0]:
                                     //  000: YUV422
                                     //  001: RGB
                                     //  011: RAW after DPC
                                     //  101: RAW after CIP

pub const PRE_ISP_TEST_SETTING_1: u16 = 0x503D; // Bit[7]: Color bar test pattern enable
