//! A driver for the Serial Camera Control Bus on OmniVision image sensors
//! with 16-bit register addressing. Tested against the OV5640, but should
//! work with any microcontroller implementing the embedded-hal I2C
//! interface and any sensor of the family.

use core::marker::PhantomData;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;

/// Default 7-bit bus address of the OV5640/OV3660 family.
pub const OV5640_ADDRESS: u8 = 0x3C;

/// Chip ID reported in `CHIP_ID`/`CHIP_ID + 1`.
pub const OV5640_CHIP_ID: u16 = 0x5640;

/// Pseudo register address: the paired value is a delay in milliseconds,
/// not a register write.
pub const REG_DLY: u16 = 0xFFFF;

/// Register address terminating a table.
pub const REGLIST_TAIL: u16 = 0x0000;

/// An ordered register configuration table. Entries are applied strictly in
/// order; values are truncated to 8 bits on the bus, the wider type exists
/// for `REG_DLY` durations.
pub type RegTable = [(u16, u16)];

/// SCCB driver.
pub struct Sccb<I2C> {
    /// Marker to ensure the same I2C type is used in all calls.
    i2c: PhantomData<I2C>,
    /// Device I2C address.
    address: u8,
}

/// SCCB errors.
#[derive(Debug, Eq, PartialEq)]
pub enum SccbError<E> {
    /// I2C write error.
    I2cWrite(E),
    /// I2C read error.
    I2cRead(E),
    /// Chip ID mismatch, contains the ID that was read.
    WrongChipId(u16),
}

impl<I2C, E> Sccb<I2C>
where
    I2C: i2c::Read<Error = E> + i2c::Write<Error = E>,
{
    /// Creates a new SCCB driver for the device at `address`.
    pub fn new(_i2c: &I2C, address: u8) -> Self {
        Sccb {
            i2c: PhantomData,
            address,
        }
    }

    /// I2C read wrapper for mapping `E --> SccbError`.
    fn i2c_read(&self, i2c: &mut I2C, buf: &mut [u8]) -> Result<(), SccbError<E>> {
        match i2c.read(self.address, buf) {
            Ok(()) => Ok(()),
            Err(e) => Err(SccbError::I2cRead(e)),
        }
    }

    /// I2C write wrapper for mapping `E --> SccbError`.
    fn i2c_write(&self, i2c: &mut I2C, buf: &[u8]) -> Result<(), SccbError<E>> {
        match i2c.write(self.address, buf) {
            Ok(()) => Ok(()),
            Err(e) => Err(SccbError::I2cWrite(e)),
        }
    }

    /// Read a register. The address and data phases must be two separate
    /// transactions, `WriteRead` does not apply to SCCB.
    pub fn read_register(&self, i2c: &mut I2C, reg: u16) -> Result<u8, SccbError<E>> {
        // Write the 16-bit address
        self.i2c_write(i2c, &[(reg >> 8) as u8, reg as u8])?;

        // Read the value
        let mut buf = [0x00];
        self.i2c_read(i2c, &mut buf)?;

        Ok(buf[0])
    }

    /// Read a 16-bit value spread over `reg` (high byte) and `reg + 1`.
    /// Fails if either read fails, discarding any byte already read.
    pub fn read_register16(&self, i2c: &mut I2C, reg: u16) -> Result<u16, SccbError<E>> {
        let hi: u16 = self.read_register(i2c, reg)?.into();
        let lo: u16 = self.read_register(i2c, reg + 1)?.into();
        Ok((hi << 8) | lo)
    }

    /// Check that every bit of `mask` is set in `reg`.
    pub fn check_register_mask(
        &self,
        i2c: &mut I2C,
        reg: u16,
        mask: u8,
    ) -> Result<bool, SccbError<E>> {
        Ok(self.read_register(i2c, reg)? & mask == mask)
    }

    /// Write a register.
    pub fn write_register(&self, i2c: &mut I2C, reg: u16, val: u8) -> Result<(), SccbError<E>> {
        // Write the 16-bit address and the value in one transaction
        self.i2c_write(i2c, &[(reg >> 8) as u8, reg as u8, val])
    }

    /// Write a 16-bit value to `reg` (high byte) and `reg + 1` (low byte).
    /// Short-circuits on the first failure.
    pub fn write_register16(&self, i2c: &mut I2C, reg: u16, val: u16) -> Result<(), SccbError<E>> {
        self.write_register(i2c, reg, (val >> 8) as u8)?;
        self.write_register(i2c, reg + 1, val as u8)
    }

    /// Write two consecutive 16-bit fields starting at `reg`, as used by
    /// the coordinate and size register pairs. Short-circuits on the first
    /// failure.
    pub fn write_address_pair(
        &self,
        i2c: &mut I2C,
        reg: u16,
        x: u16,
        y: u16,
    ) -> Result<(), SccbError<E>> {
        self.write_register16(i2c, reg, x)?;
        self.write_register16(i2c, reg + 2, y)
    }

    /// Read-modify-write a bit field: clears `mask << offset`, then ORs in
    /// `(value & mask) << offset`.
    pub fn set_register_bits(
        &self,
        i2c: &mut I2C,
        reg: u16,
        offset: u8,
        mask: u8,
        value: u8,
    ) -> Result<(), SccbError<E>> {
        let current = self.read_register(i2c, reg)?;
        let new = (current & !(mask << offset)) | ((value & mask) << offset);
        self.write_register(i2c, reg, new)
    }

    /// Set (`true`) or clear (`false`) the bits of `mask` in `reg`.
    pub fn write_register_bits(
        &self,
        i2c: &mut I2C,
        reg: u16,
        mask: u8,
        enable: bool,
    ) -> Result<(), SccbError<E>> {
        self.set_register_bits(i2c, reg, 0, mask, if enable { mask } else { 0 })
    }

    /// Apply a register table in order. `REG_DLY` entries suspend the
    /// calling thread for the paired value in milliseconds without touching
    /// the bus; a `REGLIST_TAIL` entry ends the table. Stops at the first
    /// failing write and returns that error -- later entries assume earlier
    /// ones already took effect.
    pub fn write_table<D>(
        &self,
        i2c: &mut I2C,
        delay: &mut D,
        table: &RegTable,
    ) -> Result<(), SccbError<E>>
    where
        D: DelayMs<u16>,
    {
        for &(reg, val) in table {
            match reg {
                REGLIST_TAIL => break,
                REG_DLY => delay.delay_ms(val),
                _ => self.write_register(i2c, reg, val as u8)?,
            }
        }

        Ok(())
    }

    /// Check the chip ID matches the expected value.
    pub fn check_id(&self, i2c: &mut I2C) -> Result<(), SccbError<E>> {
        let id = self.read_register16(i2c, super::regs::CHIP_ID)?;
        if id != OV5640_CHIP_ID {
            return Err(SccbError::WrongChipId(id));
        }

        Ok(())
    }
}
