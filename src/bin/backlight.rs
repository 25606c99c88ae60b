//! Controls the backlight: on, off, or a brightness level from 0 to 255.

use anyhow::Context;
use lcd4x20::Device;
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let state = args.next().context(USAGE)?;
    let port = args
        .next()
        .or_else(|| env::var(lcd4x20::PORT_ENV_VAR).ok())
        .context(NO_PORT)?;
    let mut device = Device::new(port)?;

    match state.as_str() {
        "on" => device.backlight_on(0)?,
        "off" => device.backlight_off()?,
        level => {
            let level: u8 = level.parse().context(USAGE)?;
            device.set_brightness(level)?;
        }
    }

    Ok(())
}

const USAGE: &str = "usage: <on|off|LEVEL> [port]";

const NO_PORT: &str = "No port specified.\nEither provide it after the \
    backlight state, or set the LCD4X20_PORT environment variable.";
