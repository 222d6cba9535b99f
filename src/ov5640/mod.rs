//! OV5640 device driver.
//!
//! Every operation is a bounded, synchronous sequence of SCCB transactions
//! against one sensor; the first failing transaction aborts the remaining
//! writes of that call. There is no rollback of registers already written,
//! so a failed call can leave the sensor in an intermediate configuration.

pub mod regs;
pub mod sccb;
pub mod settings;

use crate::sensor::{
    CameraSensor, FrameSize, GainCeiling, InterfaceFlags, PixelFormat, SensorStatus,
};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;
use log::{debug, error};
use sccb::{Sccb, SccbError, RegTable, OV5640_ADDRESS};

/// Errors produced by the OV5640 control path.
#[derive(Debug, Eq, PartialEq)]
pub enum Error<E> {
    /// A control bus transaction failed.
    Sccb(SccbError<E>),
    /// The requested pixel format is not supported by this sensor variant.
    UnsupportedFormat,
}

impl<E> From<SccbError<E>> for Error<E> {
    fn from(e: SccbError<E>) -> Self {
        Error::Sccb(e)
    }
}

/// One physical OV5640: the SCCB endpoint plus the driver's cached view of
/// the last configuration that was successfully applied. The cache is never
/// read back from hardware.
pub struct Ov5640<I2C> {
    sccb: Sccb<I2C>,
    status: SensorStatus,
}

impl<I2C, E> Ov5640<I2C>
where
    I2C: i2c::Read<Error = E> + i2c::Write<Error = E>,
{
    /// Creates a driver for a sensor at the default bus address.
    pub fn new(i2c: &I2C) -> Self {
        Self::with_address(i2c, OV5640_ADDRESS)
    }

    /// Creates a driver for a sensor at a non-default bus address. The
    /// address is fixed for the lifetime of the handle.
    pub fn with_address(i2c: &I2C, address: u8) -> Self {
        Ov5640 {
            sccb: Sccb::new(i2c, address),
            status: SensorStatus::default(),
        }
    }

    /// Verify the sensor answers with the expected chip ID.
    pub fn check_id(&self, i2c: &mut I2C) -> Result<(), Error<E>> {
        self.sccb.check_id(i2c).map_err(Error::Sccb)
    }

    /// Read a single control register.
    pub fn read_register(&self, i2c: &mut I2C, reg: u16) -> Result<u8, Error<E>> {
        self.sccb.read_register(i2c, reg).map_err(Error::Sccb)
    }

    /// Write a single control register.
    pub fn write_register(&self, i2c: &mut I2C, reg: u16, val: u8) -> Result<(), Error<E>> {
        self.sccb.write_register(i2c, reg, val).map_err(Error::Sccb)
    }

    /// Derive the binning/compression/orientation registers from the cached
    /// status and write all three. The three values must be written
    /// together: the appearance correction in 0x4514 is only valid for the
    /// matching binning and orientation bits.
    fn set_image_options(&self, i2c: &mut I2C) -> Result<(), Error<E>> {
        let mut reg20: u8 = 0;
        let mut reg21: u8 = 0;
        let mut selector: u8 = 0;

        // Compression
        if self.status.pixel_format == PixelFormat::Jpeg {
            reg21 |= 0x20;
        }

        // Binning, for everything at or below SVGA
        if self.status.frame_size > FrameSize::Svga {
            reg20 |= 0x40;
        } else {
            reg20 |= 0x01;
            reg21 |= 0x01;
            selector |= 4;
        }

        // V-flip
        if self.status.vflip {
            reg20 |= 0x06;
            selector |= 1;
        }

        // H-mirror
        if self.status.hmirror {
            reg21 |= 0x06;
            selector |= 2;
        }

        let enhancement = settings::ENHANCEMENT_LUT[selector as usize];

        if let Err(e) = self.write_image_options(i2c, reg20, reg21, enhancement) {
            error!("setting image options failed");
            return Err(Error::Sccb(e));
        }

        debug!(
            "image options: binning={} vflip={} hmirror={} 0x4514={:#04x}",
            selector & 4 != 0,
            self.status.vflip,
            self.status.hmirror,
            enhancement
        );
        Ok(())
    }

    fn write_image_options(
        &self,
        i2c: &mut I2C,
        reg20: u8,
        reg21: u8,
        enhancement: u8,
    ) -> Result<(), SccbError<E>> {
        self.sccb.write_register(i2c, regs::TIMING_TC_REG20, reg20)?;
        self.sccb.write_register(i2c, regs::TIMING_TC_REG21, reg21)?;
        self.sccb.write_register(i2c, 0x4514, enhancement)
    }
}

impl<I2C, E> CameraSensor<I2C> for Ov5640<I2C>
where
    I2C: i2c::Read<Error = E> + i2c::Write<Error = E>,
{
    type Error = Error<E>;

    const INTERFACE_FLAGS: InterfaceFlags = InterfaceFlags {
        vsync_active_high: false,
        hsync_active_high: false,
        pclk_gated: true,
        frame_sync: true,
        jpeg_encoder: false,
    };

    const GS_BPP: u8 = 1;

    /// Full re-initialization: software reset, power-on defaults, streaming
    /// re-enable, auto-focus firmware download, auto-focus start. Return
    /// codes are not checked anywhere in this sequence; it always runs to
    /// completion and reports success.
    fn reset<D: DelayMs<u16>>(&mut self, i2c: &mut I2C, delay: &mut D) -> Result<(), Error<E>> {
        let _ = self.sccb.write_register(i2c, regs::SYSTEM_CTRL0, 0x42);
        delay.delay_ms(10);
        let _ = self.sccb.write_table(i2c, delay, settings::DEFAULT_REGS);
        let _ = self.sccb.write_register(i2c, regs::SYSTEM_CTRL0, 0x02);
        delay.delay_ms(30);
        let _ = self.sccb.write_table(i2c, delay, settings::AF_FIRMWARE);
        delay.delay_ms(10);
        // Start continuous auto focus
        let _ = self.sccb.write_register(i2c, regs::AF_CMD_ACK, 0x01);
        let _ = self.sccb.write_register(i2c, regs::AF_CMD_MAIN, 0x04);
        delay.delay_ms(30);

        Ok(())
    }

    fn sleep(&mut self, i2c: &mut I2C, enable: bool) -> Result<(), Error<E>> {
        let val = if enable { 0x42 } else { 0x02 };
        self.sccb
            .write_register(i2c, regs::SYSTEM_CTRL0, val)
            .map_err(Error::Sccb)
    }

    fn set_pixel_format<D: DelayMs<u16>>(
        &mut self,
        i2c: &mut I2C,
        delay: &mut D,
        format: PixelFormat,
    ) -> Result<(), Error<E>> {
        let table: &RegTable = match format {
            PixelFormat::Rgb565 => settings::FMT_RGB565,
            PixelFormat::Yuv422 | PixelFormat::Grayscale => settings::FMT_GRAYSCALE,
            // Raw output needs no ISP reconfiguration, nothing to push
            PixelFormat::Bayer => &[],
            _ => {
                error!("unsupported pixel format: {:?}", format);
                return Err(Error::UnsupportedFormat);
            }
        };

        self.sccb.write_table(i2c, delay, table)?;
        self.status.pixel_format = format;
        debug!("pixel format set to {:?}", format);

        Ok(())
    }

    fn set_frame_size(&mut self, i2c: &mut I2C, size: FrameSize) -> Result<(), Error<E>> {
        let (w, h) = size.dimensions();

        self.sccb
            .write_register(i2c, regs::TIMING_DVPHO, (w >> 8) as u8)?;
        self.sccb.write_register(i2c, 0x3809, w as u8)?;
        self.sccb
            .write_register(i2c, regs::TIMING_DVPVO, (h >> 8) as u8)?;
        self.sccb.write_register(i2c, 0x380B, h as u8)?;

        self.status.frame_size = size;
        debug!("frame size set to {:?}", size);

        Ok(())
    }

    fn set_hmirror(&mut self, i2c: &mut I2C, enable: bool) -> Result<(), Error<E>> {
        let previous = self.status.hmirror;
        self.status.hmirror = enable;
        match self.set_image_options(i2c) {
            Ok(()) => {
                debug!("h-mirror set to {}", enable);
                Ok(())
            }
            Err(e) => {
                // The cache only holds configurations that reached the sensor
                self.status.hmirror = previous;
                Err(e)
            }
        }
    }

    fn set_vflip(&mut self, i2c: &mut I2C, enable: bool) -> Result<(), Error<E>> {
        let previous = self.status.vflip;
        self.status.vflip = enable;
        match self.set_image_options(i2c) {
            Ok(()) => {
                debug!("v-flip set to {}", enable);
                Ok(())
            }
            Err(e) => {
                self.status.vflip = previous;
                Err(e)
            }
        }
    }

    // The remaining controls are not runtime-tunable on this sensor
    // variant; requests are accepted and the hardware is left untouched.

    fn set_contrast(&mut self, _i2c: &mut I2C, _level: i8) -> Result<(), Error<E>> {
        Ok(())
    }

    fn set_brightness(&mut self, _i2c: &mut I2C, _level: i8) -> Result<(), Error<E>> {
        Ok(())
    }

    fn set_saturation(&mut self, _i2c: &mut I2C, _level: i8) -> Result<(), Error<E>> {
        Ok(())
    }

    fn set_gain_ceiling(
        &mut self,
        _i2c: &mut I2C,
        _ceiling: GainCeiling,
    ) -> Result<(), Error<E>> {
        Ok(())
    }

    fn set_colorbar(&mut self, _i2c: &mut I2C, _enable: bool) -> Result<(), Error<E>> {
        Ok(())
    }

    fn set_auto_gain(
        &mut self,
        _i2c: &mut I2C,
        _enable: bool,
        _gain_db: f32,
        _gain_db_ceiling: f32,
    ) -> Result<(), Error<E>> {
        Ok(())
    }

    fn gain_db(&mut self, _i2c: &mut I2C) -> Result<f32, Error<E>> {
        Ok(0.0)
    }

    fn set_auto_exposure(
        &mut self,
        _i2c: &mut I2C,
        _enable: bool,
        _exposure_us: u32,
    ) -> Result<(), Error<E>> {
        Ok(())
    }

    fn exposure_us(&mut self, _i2c: &mut I2C) -> Result<u32, Error<E>> {
        Ok(0)
    }

    fn set_auto_white_balance(
        &mut self,
        _i2c: &mut I2C,
        _enable: bool,
        _r_gain_db: f32,
        _g_gain_db: f32,
        _b_gain_db: f32,
    ) -> Result<(), Error<E>> {
        Ok(())
    }

    fn rgb_gain_db(&mut self, _i2c: &mut I2C) -> Result<(f32, f32, f32), Error<E>> {
        Ok((0.0, 0.0, 0.0))
    }

    fn set_lens_correction(
        &mut self,
        _i2c: &mut I2C,
        _enable: bool,
        _radius: u16,
        _coef: u16,
    ) -> Result<(), Error<E>> {
        Ok(())
    }

    fn status(&self) -> SensorStatus {
        self.status
    }
}
