//! SPI-attached ST7789 panel on a Raspberry Pi: rppal for SPI/GPIO, mipidsi
//! for the controller protocol. RGB888 frames are converted to RGB565 at the
//! blit boundary.

use anyhow::{anyhow, Context};
use display_interface_spi::SPIInterface;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use mipidsi::models::ST7789;
use mipidsi::options::ColorInversion;
use mipidsi::Display;
use rppal::gpio::{Gpio, OutputPin};
use rppal::hal::Delay;
use rppal::spi::{Bus, Mode, SimpleHalSpiDevice, Spi};

use crate::config::DisplayConfig;
use crate::display::DisplaySink;
use crate::render::canvas::{Canvas, HEIGHT, WIDTH};

type Panel = Display<SPIInterface<SimpleHalSpiDevice, OutputPin>, ST7789, OutputPin>;

pub struct St7789Sink {
    panel: Panel,
    // Held to keep the backlight pin driven high.
    _backlight: OutputPin,
}

impl St7789Sink {
    pub fn open(cfg: &DisplayConfig) -> anyhow::Result<Self> {
        let spi = Spi::new(
            Bus::Spi0,
            rppal::spi::SlaveSelect::Ss0,
            cfg.spi_hz,
            Mode::Mode0,
        )
        .context("open SPI bus")?;
        let gpio = Gpio::new().context("open GPIO")?;
        let dc = gpio.get(cfg.dc_pin).context("claim dc pin")?.into_output();
        let mut backlight = gpio
            .get(cfg.backlight_pin)
            .context("claim backlight pin")?
            .into_output();
        backlight.set_high();

        let di = SPIInterface::new(SimpleHalSpiDevice::new(spi), dc);
        let panel = mipidsi::Builder::new(ST7789, di)
            .display_size(WIDTH as u16, HEIGHT as u16)
            .invert_colors(ColorInversion::Inverted)
            .init(&mut Delay::new())
            .map_err(|err| anyhow!("panel init failed: {err:?}"))?;

        Ok(Self {
            panel,
            _backlight: backlight,
        })
    }
}

impl DisplaySink for St7789Sink {
    fn blit(&mut self, frame: &Canvas) -> anyhow::Result<()> {
        let colors = frame
            .data()
            .chunks_exact(3)
            .map(|px| Rgb565::from(Rgb888::new(px[0], px[1], px[2])));
        self.panel
            .set_pixels(0, 0, (WIDTH - 1) as u16, (HEIGHT - 1) as u16, colors)
            .map_err(|err| anyhow!("frame transfer failed: {err:?}"))
    }
}
