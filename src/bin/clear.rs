//! Clears all text from the screen.

use anyhow::Context;
use lcd4x20::Device;
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let port = env::args()
        .nth(1)
        .or_else(|| env::var(lcd4x20::PORT_ENV_VAR).ok())
        .context(NO_PORT)?;
    let mut device = Device::new(port)?;
    device.clear_screen()?;
    Ok(())
}

const NO_PORT: &str = "No port specified.\nEither provide it as the first \
    argument, or set the LCD4X20_PORT environment variable.";
