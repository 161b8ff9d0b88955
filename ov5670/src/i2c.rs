use embedded_hal_async::i2c::{I2c, Operation};

use crate::{Error, Interface};

/// OV5670 low level I2C driver
///
/// Registers have 16-bit big-endian addresses and hold 1 to 4 big-endian data bytes.
pub struct Ov5670I2c<I> {
    i2c: I,
    address: u8,
}

impl<I> Ov5670I2c<I> {
    pub fn new(i2c: I, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

fn check_len<E>(len: usize) -> Result<(), Error<E>> {
    if (1..=4).contains(&len) {
        Ok(())
    } else {
        Err(Error::InvalidLength(len))
    }
}

impl<I: I2c> Interface for Ov5670I2c<I> {
    type Error = I::Error;

    async fn read_reg(&mut self, address: u16, len: usize) -> Result<u32, Error<I::Error>> {
        check_len::<I::Error>(len)?;
        let reg = address.to_be_bytes();
        let mut data = [0; 4];
        self.i2c
            .transaction(
                self.address,
                &mut [Operation::Write(&reg), Operation::Read(&mut data[4 - len..])],
            )
            .await
            .map_err(Error::Io)?;
        let value = u32::from_be_bytes(data);
        trace!("Ov5670I2c::read_reg(addr: {:#x}, len: {}) = {:#x}", address, len, value);
        Ok(value)
    }

    async fn write_reg(
        &mut self,
        address: u16,
        len: usize,
        value: u32,
    ) -> Result<(), Error<I::Error>> {
        check_len::<I::Error>(len)?;
        trace!("Ov5670I2c::write_reg(addr: {:#x}, len: {}, value: {:#x})", address, len, value);
        let mut buf = [0; 6];
        buf[..2].copy_from_slice(&address.to_be_bytes());
        buf[2..2 + len].copy_from_slice(&value.to_be_bytes()[4 - len..]);
        self.i2c
            .write(self.address, &buf[..2 + len])
            .await
            .map_err(Error::Io)
    }
}
