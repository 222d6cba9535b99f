//! A generic control interface for DVP camera sensors.
//!
//! The surrounding camera subsystem talks to a sensor exclusively through
//! the [`CameraSensor`] trait and the fixed [`InterfaceFlags`] it exports.
//! One implementation exists per sensor variant and is selected at
//! construction time.

use embedded_hal::blocking::delay::DelayMs;

/// Pixel data formats a sensor may be asked to produce. Not every variant
/// supports every format; unsupported requests fail without touching the
/// hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 16-bit RGB, two bytes per pixel.
    Rgb565,
    /// YCbCr 4:2:2, two bytes per pixel.
    Yuv422,
    /// 8-bit luma only.
    Grayscale,
    /// Compressed output from the on-chip encoder.
    Jpeg,
    /// Raw Bayer pattern straight off the pixel array.
    Bayer,
}

/// Output resolutions, ordered smallest to largest. The ordering is
/// significant: sensors use it to decide when pixel binning applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FrameSize {
    /// 96x96
    Res96x96,
    /// 160x120
    Qqvga,
    /// 176x144
    Qcif,
    /// 240x176
    Hqvga,
    /// 240x240
    Res240x240,
    /// 320x240
    Qvga,
    /// 400x296
    Cif,
    /// 480x320
    Hvga,
    /// 640x480
    Vga,
    /// 800x600
    Svga,
    /// 1024x768
    Xga,
    /// 1280x720
    Hd,
    /// 1280x1024
    Sxga,
    /// 1600x1200
    Uxga,
    /// 1920x1080
    Fhd,
    /// 720x1280
    PortraitHd,
    /// 864x1536
    Portrait3mp,
    /// 2048x1536
    Qxga,
    /// 2560x1440
    Qhd,
    /// 2560x1600
    Wqxga,
    /// 1080x1920
    PortraitFhd,
    /// 2560x1920
    Qsxga,
}

impl FrameSize {
    /// Output dimensions in pixels, `(width, height)`.
    pub const fn dimensions(self) -> (u16, u16) {
        match self {
            FrameSize::Res96x96 => (96, 96),
            FrameSize::Qqvga => (160, 120),
            FrameSize::Qcif => (176, 144),
            FrameSize::Hqvga => (240, 176),
            FrameSize::Res240x240 => (240, 240),
            FrameSize::Qvga => (320, 240),
            FrameSize::Cif => (400, 296),
            FrameSize::Hvga => (480, 320),
            FrameSize::Vga => (640, 480),
            FrameSize::Svga => (800, 600),
            FrameSize::Xga => (1024, 768),
            FrameSize::Hd => (1280, 720),
            FrameSize::Sxga => (1280, 1024),
            FrameSize::Uxga => (1600, 1200),
            FrameSize::Fhd => (1920, 1080),
            FrameSize::PortraitHd => (720, 1280),
            FrameSize::Portrait3mp => (864, 1536),
            FrameSize::Qxga => (2048, 1536),
            FrameSize::Qhd => (2560, 1440),
            FrameSize::Wqxga => (2560, 1600),
            FrameSize::PortraitFhd => (1080, 1920),
            FrameSize::Qsxga => (2560, 1920),
        }
    }
}

/// Upper bound for automatic gain control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GainCeiling {
    X2,
    X4,
    X8,
    X16,
    X32,
    X64,
    X128,
}

/// The last configuration that was successfully applied to the sensor.
///
/// This is the driver's own cached view, never read back from hardware; a
/// bus glitch after a commit can leave it out of sync with the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorStatus {
    pub pixel_format: PixelFormat,
    pub frame_size: FrameSize,
    pub hmirror: bool,
    pub vflip: bool,
}

impl Default for SensorStatus {
    /// Matches the configuration the power-on register defaults leave the
    /// sensor in: RGB565 at VGA, no mirror, no flip.
    fn default() -> Self {
        SensorStatus {
            pixel_format: PixelFormat::Rgb565,
            frame_size: FrameSize::Vga,
            hmirror: false,
            vflip: false,
        }
    }
}

/// Fixed electrical characteristics of a sensor's parallel interface,
/// queried once at setup so the capture peripheral can be configured to
/// match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceFlags {
    /// VSYNC idles low, pulses high.
    pub vsync_active_high: bool,
    /// HSYNC idles low, pulses high.
    pub hsync_active_high: bool,
    /// PCLK only toggles while valid data is on the bus.
    pub pclk_gated: bool,
    /// The sensor emits a frame-synchronization strobe.
    pub frame_sync: bool,
    /// The sensor carries a usable on-chip JPEG encoder.
    pub jpeg_encoder: bool,
}

/// The capability set of one physical image sensor.
///
/// All operations are synchronous and blocking, and must not be invoked
/// concurrently against the same handle: the control bus is un-arbitrated
/// and the cached status is unsynchronized. Serializing calls is the
/// caller's obligation.
///
/// Every method takes the I2C peripheral by `&mut` rather than owning it,
/// so the bus can be shared with other devices between calls.
pub trait CameraSensor<I2C> {
    /// Error type produced by the sensor's control path.
    type Error;

    /// Parallel interface characteristics of this variant.
    const INTERFACE_FLAGS: InterfaceFlags;

    /// Bytes per pixel when producing grayscale output.
    const GS_BPP: u8;

    /// Fully re-initialize the sensor to its power-on configuration.
    fn reset<D: DelayMs<u16>>(&mut self, i2c: &mut I2C, delay: &mut D) -> Result<(), Self::Error>;

    /// Power the sensor core down (`true`) or resume it (`false`).
    fn sleep(&mut self, i2c: &mut I2C, enable: bool) -> Result<(), Self::Error>;

    /// Select the pixel data format. Either applies the full register
    /// sequence for the format, or fails before the first write when the
    /// format is unsupported.
    fn set_pixel_format<D: DelayMs<u16>>(
        &mut self,
        i2c: &mut I2C,
        delay: &mut D,
        format: PixelFormat,
    ) -> Result<(), Self::Error>;

    /// Select the output resolution.
    fn set_frame_size(&mut self, i2c: &mut I2C, size: FrameSize) -> Result<(), Self::Error>;

    /// Mirror the image horizontally.
    fn set_hmirror(&mut self, i2c: &mut I2C, enable: bool) -> Result<(), Self::Error>;

    /// Flip the image vertically.
    fn set_vflip(&mut self, i2c: &mut I2C, enable: bool) -> Result<(), Self::Error>;

    /// Adjust contrast. Variants without runtime tuning accept and ignore.
    fn set_contrast(&mut self, i2c: &mut I2C, level: i8) -> Result<(), Self::Error>;

    /// Adjust brightness.
    fn set_brightness(&mut self, i2c: &mut I2C, level: i8) -> Result<(), Self::Error>;

    /// Adjust color saturation.
    fn set_saturation(&mut self, i2c: &mut I2C, level: i8) -> Result<(), Self::Error>;

    /// Bound the automatic gain control.
    fn set_gain_ceiling(&mut self, i2c: &mut I2C, ceiling: GainCeiling)
        -> Result<(), Self::Error>;

    /// Replace sensor output with a test pattern.
    fn set_colorbar(&mut self, i2c: &mut I2C, enable: bool) -> Result<(), Self::Error>;

    /// Enable automatic gain, or fix it to `gain_db`.
    fn set_auto_gain(
        &mut self,
        i2c: &mut I2C,
        enable: bool,
        gain_db: f32,
        gain_db_ceiling: f32,
    ) -> Result<(), Self::Error>;

    /// Current analog gain in decibels.
    fn gain_db(&mut self, i2c: &mut I2C) -> Result<f32, Self::Error>;

    /// Enable automatic exposure, or fix it to `exposure_us`.
    fn set_auto_exposure(
        &mut self,
        i2c: &mut I2C,
        enable: bool,
        exposure_us: u32,
    ) -> Result<(), Self::Error>;

    /// Current exposure time in microseconds.
    fn exposure_us(&mut self, i2c: &mut I2C) -> Result<u32, Self::Error>;

    /// Enable automatic white balance, or fix the per-channel gains.
    fn set_auto_white_balance(
        &mut self,
        i2c: &mut I2C,
        enable: bool,
        r_gain_db: f32,
        g_gain_db: f32,
        b_gain_db: f32,
    ) -> Result<(), Self::Error>;

    /// Current white balance gains in decibels, `(r, g, b)`.
    fn rgb_gain_db(&mut self, i2c: &mut I2C) -> Result<(f32, f32, f32), Self::Error>;

    /// Enable lens shading correction.
    fn set_lens_correction(
        &mut self,
        i2c: &mut I2C,
        enable: bool,
        radius: u16,
        coef: u16,
    ) -> Result<(), Self::Error>;

    /// The last successfully applied configuration.
    fn status(&self) -> SensorStatus;
}
