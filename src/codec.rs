use std::io::Write;

/// Marks the next byte as a command opcode. Every other byte sent to the
/// controller is displayed as text at the cursor position.
pub const COMMAND_PREFIX: u8 = 0xFE;

/// Longest encoded command: prefix, opcode, and up to two parameters.
pub const MAX_COMMAND_LEN: usize = 4;

/// Commands understood by the display controller.
///
/// Opcodes follow the Matrix Orbital command set, which serial 20x4
/// character displays and their USB adapters commonly emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Erase every row and home the cursor.
    ClearScreen,
    /// Move the cursor to the top-left corner without erasing.
    GoHome,
    /// Move the cursor. Both coordinates are 1-based.
    SetCursor { column: u8, row: u8 },
    /// Turn the backlight on for `minutes`, or until turned off if 0.
    BacklightOn { minutes: u8 },
    BacklightOff,
    /// Backlight brightness, 0 (dim) to 255 (full).
    SetBrightness { level: u8 },
    /// LCD drive contrast, 0 to 255.
    SetContrast { level: u8 },
}

impl Command {
    /// Encodes the command into `buf`, returning the encoded length.
    pub fn encode(&self, buf: &mut [u8; MAX_COMMAND_LEN]) -> usize {
        buf[0] = COMMAND_PREFIX;
        match *self {
            Command::ClearScreen => {
                buf[1] = 0x58;
                2
            }
            Command::GoHome => {
                buf[1] = 0x48;
                2
            }
            Command::SetCursor { column, row } => {
                buf[1] = 0x47;
                buf[2] = column;
                buf[3] = row;
                4
            }
            Command::BacklightOn { minutes } => {
                buf[1] = 0x42;
                buf[2] = minutes;
                3
            }
            Command::BacklightOff => {
                buf[1] = 0x46;
                2
            }
            Command::SetBrightness { level } => {
                buf[1] = 0x99;
                buf[2] = level;
                3
            }
            Command::SetContrast { level } => {
                buf[1] = 0x50;
                buf[2] = level;
                3
            }
        }
    }
}

pub struct CommandCodec<T> {
    inner: T,
}

impl<T> CommandCodec<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> CommandCodec<T>
where
    T: Write,
{
    pub fn write_command(&mut self, command: &Command) -> Result<(), std::io::Error> {
        let mut buf = [0u8; MAX_COMMAND_LEN];
        let len = command.encode(&mut buf);
        self.inner.write_all(&buf[..len])
    }

    /// Writes text at the cursor position. Any embedded prefix byte is
    /// replaced with a space so line content cannot start a command.
    pub fn write_text(&mut self, text: &[u8]) -> Result<(), std::io::Error> {
        if text.contains(&COMMAND_PREFIX) {
            let sanitized: Vec<u8> = text
                .iter()
                .map(|&b| if b == COMMAND_PREFIX { b' ' } else { b })
                .collect();
            self.inner.write_all(&sanitized)
        } else {
            self.inner.write_all(text)
        }
    }

    pub fn flush(&mut self) -> Result<(), std::io::Error> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(command: Command) -> Vec<u8> {
        let mut buf = [0u8; MAX_COMMAND_LEN];
        let len = command.encode(&mut buf);
        buf[..len].to_vec()
    }

    #[test]
    fn command_encodings() {
        assert_eq!(encoded(Command::ClearScreen), [0xFE, 0x58]);
        assert_eq!(encoded(Command::GoHome), [0xFE, 0x48]);
        assert_eq!(
            encoded(Command::SetCursor { column: 3, row: 2 }),
            [0xFE, 0x47, 3, 2]
        );
        assert_eq!(encoded(Command::BacklightOn { minutes: 0 }), [0xFE, 0x42, 0]);
        assert_eq!(encoded(Command::BacklightOff), [0xFE, 0x46]);
        assert_eq!(
            encoded(Command::SetBrightness { level: 128 }),
            [0xFE, 0x99, 128]
        );
        assert_eq!(
            encoded(Command::SetContrast { level: 200 }),
            [0xFE, 0x50, 200]
        );
    }

    #[test]
    fn command_then_text() {
        let mut codec = CommandCodec::new(Vec::new());
        codec
            .write_command(&Command::SetCursor { column: 1, row: 1 })
            .expect("write failed");
        codec.write_text(b"Hello").expect("write failed");

        assert_eq!(codec.into_inner(), b"\xFE\x47\x01\x01Hello");
    }

    #[test]
    fn text_prefix_byte_is_sanitized() {
        let mut codec = CommandCodec::new(Vec::new());
        codec.write_text(b"a\xFEb").expect("write failed");

        assert_eq!(codec.into_inner(), b"a b");
    }
}
