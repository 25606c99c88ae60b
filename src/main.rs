//! Writes four lines of text to the display, one per row.

use anyhow::Context;
use lcd4x20::Device;
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let lines: [String; 4] = args.try_into().ok().context(USAGE)?;

    let port = env::var(lcd4x20::PORT_ENV_VAR).context(NO_PORT)?;
    let mut device = Device::new(port)?;

    device.clear_screen()?;
    for (i, line) in lines.iter().enumerate() {
        device.write_line(i as u8 + 1, line.as_bytes())?;
    }

    Ok(())
}

const USAGE: &str = "usage: <line1> <line2> <line3> <line4>";

const NO_PORT: &str = "No port specified.\nSet the LCD4X20_PORT environment \
    variable to the display's serial port.";
