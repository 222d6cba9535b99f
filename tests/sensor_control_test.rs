// Host-run tests for the OV5640 sensor control layer, driven against a
// mocked I2C peripheral.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal_mock::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use embedded_hal_mock::MockError;
use ov5640_rs::ov5640::sccb::{SccbError, OV5640_ADDRESS, REGLIST_TAIL, REG_DLY};
use ov5640_rs::ov5640::settings::{
    AF_FIRMWARE, DEFAULT_REGS, ENHANCEMENT_LUT, FMT_GRAYSCALE, FMT_RGB565,
};
use ov5640_rs::ov5640::{Error, Ov5640};
use ov5640_rs::sensor::{CameraSensor, FrameSize, GainCeiling, InterfaceFlags, PixelFormat};
use std::io::ErrorKind;

const ADDR: u8 = OV5640_ADDRESS;

/// Records every requested suspension instead of sleeping.
struct RecordingDelay {
    log: Vec<u16>,
}

impl RecordingDelay {
    fn new() -> Self {
        RecordingDelay { log: Vec::new() }
    }
}

impl DelayMs<u16> for RecordingDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.log.push(ms);
    }
}

fn bus_error() -> MockError {
    MockError::Io(ErrorKind::Other)
}

fn reg_write(reg: u16, val: u8) -> I2cTransaction {
    I2cTransaction::write(ADDR, vec![(reg >> 8) as u8, reg as u8, val])
}

/// Expands a register table into the bus transactions its application will
/// issue, collecting embedded delay durations separately.
fn table_writes(table: &[(u16, u16)], delays: &mut Vec<u16>, out: &mut Vec<I2cTransaction>) {
    for &(reg, val) in table {
        match reg {
            REGLIST_TAIL => break,
            REG_DLY => delays.push(val),
            _ => out.push(reg_write(reg, val as u8)),
        }
    }
}

/// The three writes `set_image_options` issues for one derived state.
fn image_option_writes(reg20: u8, reg21: u8, enhancement: u8) -> Vec<I2cTransaction> {
    vec![
        reg_write(0x3820, reg20),
        reg_write(0x3821, reg21),
        reg_write(0x4514, enhancement),
    ]
}

#[test]
fn reset_issues_the_fixed_sequence() {
    let mut expected = Vec::new();
    let mut expected_delays = Vec::new();

    expected.push(reg_write(0x3008, 0x42));
    expected_delays.push(10);
    table_writes(DEFAULT_REGS, &mut expected_delays, &mut expected);
    expected.push(reg_write(0x3008, 0x02));
    expected_delays.push(30);
    table_writes(AF_FIRMWARE, &mut expected_delays, &mut expected);
    expected_delays.push(10);
    expected.push(reg_write(0x3023, 0x01));
    expected.push(reg_write(0x3022, 0x04));
    expected_delays.push(30);

    let mut i2c = I2cMock::new(&expected);
    let mut delay = RecordingDelay::new();
    let mut cam = Ov5640::new(&i2c);

    assert_eq!(cam.reset(&mut i2c, &mut delay), Ok(()));
    assert_eq!(delay.log, expected_delays);
    i2c.done();
}

#[test]
fn reset_reports_success_when_the_auto_focus_enable_writes_fail() {
    let mut expected = Vec::new();
    let mut expected_delays = Vec::new();

    expected.push(reg_write(0x3008, 0x42));
    expected_delays.push(10);
    table_writes(DEFAULT_REGS, &mut expected_delays, &mut expected);
    expected.push(reg_write(0x3008, 0x02));
    expected_delays.push(30);
    table_writes(AF_FIRMWARE, &mut expected_delays, &mut expected);
    expected_delays.push(10);
    expected.push(reg_write(0x3023, 0x01).with_error(bus_error()));
    expected.push(reg_write(0x3022, 0x04).with_error(bus_error()));
    expected_delays.push(30);

    let mut i2c = I2cMock::new(&expected);
    let mut delay = RecordingDelay::new();
    let mut cam = Ov5640::new(&i2c);

    assert_eq!(cam.reset(&mut i2c, &mut delay), Ok(()));
    assert_eq!(delay.log, expected_delays);
    i2c.done();
}

#[test]
fn reset_continues_after_a_failed_defaults_table() {
    let mut expected = Vec::new();
    let mut expected_delays = Vec::new();

    expected.push(reg_write(0x3008, 0x42));
    expected_delays.push(10);
    // The very first defaults entry fails; the rest of the table is
    // skipped but the sequence keeps going
    let (first_reg, first_val) = DEFAULT_REGS[0];
    expected.push(reg_write(first_reg, first_val as u8).with_error(bus_error()));
    expected.push(reg_write(0x3008, 0x02));
    expected_delays.push(30);
    table_writes(AF_FIRMWARE, &mut expected_delays, &mut expected);
    expected_delays.push(10);
    expected.push(reg_write(0x3023, 0x01));
    expected.push(reg_write(0x3022, 0x04));
    expected_delays.push(30);

    let mut i2c = I2cMock::new(&expected);
    let mut delay = RecordingDelay::new();
    let mut cam = Ov5640::new(&i2c);

    assert_eq!(cam.reset(&mut i2c, &mut delay), Ok(()));
    assert_eq!(delay.log, expected_delays);
    i2c.done();
}

#[test]
fn set_pixel_format_pushes_the_rgb565_table() {
    let mut expected = Vec::new();
    let mut table_delays = Vec::new();
    table_writes(FMT_RGB565, &mut table_delays, &mut expected);

    let mut i2c = I2cMock::new(&expected);
    let mut delay = RecordingDelay::new();
    let mut cam = Ov5640::new(&i2c);

    assert_eq!(
        cam.set_pixel_format(&mut i2c, &mut delay, PixelFormat::Rgb565),
        Ok(())
    );
    assert_eq!(cam.status().pixel_format, PixelFormat::Rgb565);
    i2c.done();
}

#[test]
fn yuv422_and_grayscale_share_one_register_table() {
    for &format in &[PixelFormat::Yuv422, PixelFormat::Grayscale] {
        let mut expected = Vec::new();
        let mut table_delays = Vec::new();
        table_writes(FMT_GRAYSCALE, &mut table_delays, &mut expected);

        let mut i2c = I2cMock::new(&expected);
        let mut delay = RecordingDelay::new();
        let mut cam = Ov5640::new(&i2c);

        assert_eq!(cam.set_pixel_format(&mut i2c, &mut delay, format), Ok(()));
        assert_eq!(cam.status().pixel_format, format);
        i2c.done();
    }
}

#[test]
fn set_pixel_format_rejects_jpeg_without_touching_the_bus() {
    let mut i2c = I2cMock::new(&[]);
    let mut delay = RecordingDelay::new();
    let mut cam = Ov5640::new(&i2c);

    assert_eq!(
        cam.set_pixel_format(&mut i2c, &mut delay, PixelFormat::Jpeg),
        Err(Error::UnsupportedFormat)
    );
    assert_eq!(cam.status().pixel_format, PixelFormat::Rgb565);
    i2c.done();
}

#[test]
fn bayer_is_accepted_without_bus_traffic() {
    let mut i2c = I2cMock::new(&[]);
    let mut delay = RecordingDelay::new();
    let mut cam = Ov5640::new(&i2c);

    assert_eq!(
        cam.set_pixel_format(&mut i2c, &mut delay, PixelFormat::Bayer),
        Ok(())
    );
    assert_eq!(cam.status().pixel_format, PixelFormat::Bayer);
    i2c.done();
}

#[test]
fn a_failed_format_write_leaves_the_cached_format_alone() {
    let (first_reg, first_val) = FMT_GRAYSCALE[0];
    let expected = [reg_write(first_reg, first_val as u8).with_error(bus_error())];

    let mut i2c = I2cMock::new(&expected);
    let mut delay = RecordingDelay::new();
    let mut cam = Ov5640::new(&i2c);

    assert_eq!(
        cam.set_pixel_format(&mut i2c, &mut delay, PixelFormat::Yuv422),
        Err(Error::Sccb(SccbError::I2cWrite(bus_error())))
    );
    assert_eq!(cam.status().pixel_format, PixelFormat::Rgb565);
    i2c.done();
}

#[test]
fn set_frame_size_writes_the_four_size_registers_in_order() {
    // QVGA: 320 = 0x0140, 240 = 0x00F0
    let expected = [
        reg_write(0x3808, 0x01),
        reg_write(0x3809, 0x40),
        reg_write(0x380A, 0x00),
        reg_write(0x380B, 0xF0),
    ];
    let mut i2c = I2cMock::new(&expected);
    let mut cam = Ov5640::new(&i2c);

    assert_eq!(cam.set_frame_size(&mut i2c, FrameSize::Qvga), Ok(()));
    assert_eq!(cam.status().frame_size, FrameSize::Qvga);
    i2c.done();
}

#[test]
fn set_frame_size_keeps_the_cache_on_failure() {
    let expected = [reg_write(0x3808, 0x06).with_error(bus_error())];
    let mut i2c = I2cMock::new(&expected);
    let mut cam = Ov5640::new(&i2c);

    assert!(cam.set_frame_size(&mut i2c, FrameSize::Uxga).is_err());
    assert_eq!(cam.status().frame_size, FrameSize::Vga);
    i2c.done();
}

#[test]
fn orientation_and_binning_combinations_select_the_documented_enhancement_values() {
    // (binning, vflip, hmirror) -> register 0x4514
    let cases = [
        (false, false, false, 0x88),
        (false, false, true, 0xBB),
        (false, true, false, 0x88),
        (false, true, true, 0xBB),
        (true, false, false, 0xAA),
        (true, false, true, 0xBB),
        (true, true, false, 0xBB),
        (true, true, true, 0xAA),
    ];

    for &(binning, vflip, hmirror, enhancement) in &cases {
        // Binning applies at SVGA and below
        let size = if binning {
            FrameSize::Svga
        } else {
            FrameSize::Uxga
        };
        let (w, h) = size.dimensions();

        let bin20: u8 = if binning { 0x01 } else { 0x40 };
        let bin21: u8 = if binning { 0x01 } else { 0x00 };
        let flip20 = bin20 | if vflip { 0x06 } else { 0x00 };
        let mirror21 = bin21 | if hmirror { 0x06 } else { 0x00 };

        // Intermediate value written by the v-flip step, before h-mirror
        // is applied
        let selector_v: usize = (if binning { 4 } else { 0 }) | (if vflip { 1 } else { 0 });
        let enhancement_v = ENHANCEMENT_LUT[selector_v];

        let mut expected = vec![
            reg_write(0x3808, (w >> 8) as u8),
            reg_write(0x3809, w as u8),
            reg_write(0x380A, (h >> 8) as u8),
            reg_write(0x380B, h as u8),
        ];
        expected.extend(image_option_writes(flip20, bin21, enhancement_v));
        expected.extend(image_option_writes(flip20, mirror21, enhancement));

        let mut i2c = I2cMock::new(&expected);
        let mut cam = Ov5640::new(&i2c);

        cam.set_frame_size(&mut i2c, size).unwrap();
        cam.set_vflip(&mut i2c, vflip).unwrap();
        cam.set_hmirror(&mut i2c, hmirror).unwrap();

        assert_eq!(cam.status().vflip, vflip);
        assert_eq!(cam.status().hmirror, hmirror);
        i2c.done();
    }
}

#[test]
fn hmirror_commits_after_a_successful_write_sequence() {
    // Default VGA status takes the binning path: selector 4 | 2 -> 0xBB
    let expected = image_option_writes(0x01, 0x01 | 0x06, 0xBB);
    let mut i2c = I2cMock::new(&expected);
    let mut cam = Ov5640::new(&i2c);

    assert_eq!(cam.set_hmirror(&mut i2c, true), Ok(()));
    assert!(cam.status().hmirror);
    i2c.done();
}

#[test]
fn hmirror_cache_rolls_back_when_the_write_fails() {
    let expected = [reg_write(0x3820, 0x01).with_error(bus_error())];
    let mut i2c = I2cMock::new(&expected);
    let mut cam = Ov5640::new(&i2c);

    assert!(cam.set_hmirror(&mut i2c, true).is_err());
    assert!(!cam.status().hmirror);
    i2c.done();
}

#[test]
fn vflip_cache_rolls_back_when_the_write_fails() {
    let expected = [reg_write(0x3820, 0x01 | 0x06).with_error(bus_error())];
    let mut i2c = I2cMock::new(&expected);
    let mut cam = Ov5640::new(&i2c);

    assert!(cam.set_vflip(&mut i2c, true).is_err());
    assert!(!cam.status().vflip);
    i2c.done();
}

#[test]
fn sleep_toggles_the_system_control_register() {
    let expected = [reg_write(0x3008, 0x42), reg_write(0x3008, 0x02)];
    let mut i2c = I2cMock::new(&expected);
    let mut cam = Ov5640::new(&i2c);

    assert_eq!(cam.sleep(&mut i2c, true), Ok(()));
    assert_eq!(cam.sleep(&mut i2c, false), Ok(()));
    i2c.done();
}

#[test]
fn check_id_matches_the_chip_id_registers() {
    let expected = [
        I2cTransaction::write(ADDR, vec![0x30, 0x0A]),
        I2cTransaction::read(ADDR, vec![0x56]),
        I2cTransaction::write(ADDR, vec![0x30, 0x0B]),
        I2cTransaction::read(ADDR, vec![0x40]),
    ];
    let mut i2c = I2cMock::new(&expected);
    let cam = Ov5640::new(&i2c);

    assert_eq!(cam.check_id(&mut i2c), Ok(()));
    i2c.done();
}

#[test]
fn check_id_surfaces_unexpected_ids() {
    let expected = [
        I2cTransaction::write(ADDR, vec![0x30, 0x0A]),
        I2cTransaction::read(ADDR, vec![0x36]),
        I2cTransaction::write(ADDR, vec![0x30, 0x0B]),
        I2cTransaction::read(ADDR, vec![0x60]),
    ];
    let mut i2c = I2cMock::new(&expected);
    let cam = Ov5640::new(&i2c);

    assert_eq!(
        cam.check_id(&mut i2c),
        Err(Error::Sccb(SccbError::WrongChipId(0x3660)))
    );
    i2c.done();
}

#[test]
fn untunable_controls_accept_requests_without_bus_traffic() {
    let mut i2c = I2cMock::new(&[]);
    let mut cam = Ov5640::new(&i2c);

    cam.set_contrast(&mut i2c, 2).unwrap();
    cam.set_brightness(&mut i2c, -1).unwrap();
    cam.set_saturation(&mut i2c, 0).unwrap();
    cam.set_gain_ceiling(&mut i2c, GainCeiling::X16).unwrap();
    cam.set_colorbar(&mut i2c, true).unwrap();
    cam.set_auto_gain(&mut i2c, true, 0.0, 6.0).unwrap();
    cam.set_auto_exposure(&mut i2c, true, 0).unwrap();
    cam.set_auto_white_balance(&mut i2c, true, 0.0, 0.0, 0.0).unwrap();
    cam.set_lens_correction(&mut i2c, true, 0, 0).unwrap();
    assert_eq!(cam.gain_db(&mut i2c), Ok(0.0));
    assert_eq!(cam.exposure_us(&mut i2c), Ok(0));
    assert_eq!(cam.rgb_gain_db(&mut i2c), Ok((0.0, 0.0, 0.0)));
    i2c.done();
}

#[test]
fn interface_flags_describe_the_parallel_port() {
    let flags = <Ov5640<I2cMock> as CameraSensor<I2cMock>>::INTERFACE_FLAGS;
    assert_eq!(
        flags,
        InterfaceFlags {
            vsync_active_high: false,
            hsync_active_high: false,
            pclk_gated: true,
            frame_sync: true,
            jpeg_encoder: false,
        }
    );
    assert_eq!(<Ov5640<I2cMock> as CameraSensor<I2cMock>>::GS_BPP, 1);
}
