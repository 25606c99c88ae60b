pub mod codec;

use self::codec::{Command, CommandCodec};
use serialport::SerialPort;
use std::io::Write;
use std::time::Duration;
use thiserror::Error;

/// Character rows on the display, addressed 1 through 4.
pub const ROWS: u8 = 4;

/// Character columns on the display, addressed 1 through 20.
pub const COLUMNS: u8 = 20;

/// Environment variable the command-line tools consult for the serial
/// port path.
pub const PORT_ENV_VAR: &str = "LCD4X20_PORT";

const BAUD_RATE: u32 = 19200;

pub struct Device<P = Box<dyn SerialPort>> {
    codec: CommandCodec<P>,
}

impl Device {
    pub fn new<P: AsRef<str>>(path: P) -> Result<Self, Error> {
        let port = serialport::new(path.as_ref(), BAUD_RATE)
            .timeout(Duration::from_millis(250))
            .open()?;
        Ok(Self::from_port(port))
    }
}

impl<P> Device<P>
where
    P: Write,
{
    /// Wraps an already-open port, for ports that need settings other
    /// than the ones [`Device::new`] picks.
    pub fn from_port(port: P) -> Self {
        Self {
            codec: CommandCodec::new(port),
        }
    }

    fn send(&mut self, command: &Command) -> Result<(), Error> {
        log::trace!("sending {:?}", command);
        self.codec.write_command(command)?;
        Ok(())
    }

    pub fn clear_screen(&mut self) -> Result<(), Error> {
        self.send(&Command::ClearScreen)
    }

    pub fn go_home(&mut self) -> Result<(), Error> {
        self.send(&Command::GoHome)
    }

    pub fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), Error> {
        if !(1..=COLUMNS).contains(&column) {
            return Err(Error::ColumnOutOfRange(column));
        }
        if !(1..=ROWS).contains(&row) {
            return Err(Error::RowOutOfRange(row));
        }
        self.send(&Command::SetCursor { column, row })
    }

    /// Writes `text` starting at the first column of `row`.
    ///
    /// Content is sent verbatim; text longer than the row is left to the
    /// controller, which wraps it onto the following row.
    pub fn write_line(&mut self, row: u8, text: &[u8]) -> Result<(), Error> {
        self.set_cursor(1, row)?;
        log::trace!("writing {} bytes to row {}", text.len(), row);
        self.codec.write_text(text)?;
        Ok(())
    }

    /// Turns the backlight on for `minutes`, or until [`Device::backlight_off`]
    /// if 0.
    pub fn backlight_on(&mut self, minutes: u8) -> Result<(), Error> {
        self.send(&Command::BacklightOn { minutes })
    }

    pub fn backlight_off(&mut self) -> Result<(), Error> {
        self.send(&Command::BacklightOff)
    }

    pub fn set_brightness(&mut self, level: u8) -> Result<(), Error> {
        self.send(&Command::SetBrightness { level })
    }

    pub fn set_contrast(&mut self, level: u8) -> Result<(), Error> {
        self.send(&Command::SetContrast { level })
    }

    /// Consumes the device, returning the underlying port.
    pub fn into_port(self) -> P {
        self.codec.into_inner()
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("serialport: {0}")]
    SerialPort(#[from] serialport::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("row {0} is off the display")]
    RowOutOfRange(u8),

    #[error("column {0} is off the display")]
    ColumnOutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_then_four_rows() {
        let mut device = Device::from_port(Vec::new());
        device.clear_screen().expect("clear failed");
        for (i, text) in [b"Hello", b"World", b"Line3", b"Line4"].into_iter().enumerate() {
            device.write_line(i as u8 + 1, text).expect("write failed");
        }

        let expected = b"\xFE\x58\
            \xFE\x47\x01\x01Hello\
            \xFE\x47\x01\x02World\
            \xFE\x47\x01\x03Line3\
            \xFE\x47\x01\x04Line4";
        assert_eq!(device.into_port(), expected);
    }

    #[test]
    fn out_of_range_rows_write_nothing() {
        let mut device = Device::from_port(Vec::new());
        assert!(matches!(
            device.write_line(0, b"x"),
            Err(Error::RowOutOfRange(0))
        ));
        assert!(matches!(
            device.write_line(5, b"x"),
            Err(Error::RowOutOfRange(5))
        ));
        assert!(device.into_port().is_empty());
    }

    #[test]
    fn cursor_bounds() {
        let mut device = Device::from_port(Vec::new());
        assert!(device.set_cursor(20, 4).is_ok());
        assert!(matches!(
            device.set_cursor(21, 1),
            Err(Error::ColumnOutOfRange(21))
        ));
        assert!(matches!(
            device.set_cursor(0, 1),
            Err(Error::ColumnOutOfRange(0))
        ));
    }
}
